//! Rate limiting middleware using token bucket algorithm.
//!
//! Applied to the feedback write routes only. Read endpoints are not limited.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Replenish one token every 250 ms, i.e. 4 requests per second.
///
/// Clients behind one NAT share a bucket, so the refill is sized for a
/// classroom clicking through links, not a single reader.
pub const REPLENISH_INTERVAL_MS: u64 = 250;
/// Requests a single client may send in a burst.
pub const BURST_SIZE: u32 = 100;

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 4 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    governor_layer(PeerIpKeyExtractor)
}

/// Same limits as [`layer`], keyed by `X-Forwarded-For`, `X-Real-IP` or
/// `Forwarded` headers, falling back to the peer address.
///
/// Use only behind a trusted reverse proxy.
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    governor_layer(SmartIpKeyExtractor)
}

/// Applies the peer or proxy-aware limiter to `router`.
pub fn apply<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(proxy_layer())
    } else {
        router.layer(layer())
    }
}

fn governor_layer<K>(
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_INTERVAL_MS)
            .burst_size(BURST_SIZE)
            .key_extractor(key_extractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
