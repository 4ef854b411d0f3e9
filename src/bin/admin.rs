//! CLI administration tool for course-library.
//!
//! Loads catalog documents, reports statistics, and performs database
//! operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Import a catalog document (courses, topics, resources, feedback)
//! cargo run --bin admin -- seed catalog.json
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`: pool settings

use course_library::application::services::{CatalogService, FeedbackService, ImportService};
use course_library::config::{Config, StoreBackend};
use course_library::domain::seed::CatalogSeed;
use course_library::infrastructure::postgres_repositories;
use course_library::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing course-library.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Import a catalog document
    Seed {
        /// Path to the JSON catalog document
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.store_backend != StoreBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORE_BACKEND=postgres");
    }
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = connect_pool(database_url, &config).await?;

    let result = match cli.command {
        Commands::Seed { file, yes } => handle_seed(&pool, file, yes).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;

    result
}

/// Imports a catalog document after showing what it contains.
///
/// # Flow
///
/// 1. Parse the document
/// 2. Show record counts
/// 3. Confirm (unless `--yes` flag)
/// 4. Apply migrations
/// 5. Upsert every record
///
/// Existing courses, lists and feedback with the same keys are overwritten.
/// Records absent from the document are left alone.
async fn handle_seed(pool: &PgPool, file: PathBuf, skip_confirm: bool) -> Result<()> {
    println!("{}", "📥 Import Catalog".bright_blue().bold());
    println!();

    let seed = CatalogSeed::from_path(&file)?;

    println!("  File:           {}", file.display().to_string().cyan());
    println!("  Courses:        {}", seed.courses.len().to_string().bright_white());
    println!("  Topic lists:    {}", seed.topics.len().to_string().bright_white());
    println!(
        "  Resource lists: {}",
        seed.resources.len().to_string().bright_white()
    );
    println!(
        "  Feedback rows:  {}",
        seed.feedback.len().to_string().bright_white()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Import into the database? Matching records are overwritten")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    let repositories = postgres_repositories(Arc::new(pool.clone()));
    let report = ImportService::new(repositories)
        .import(seed)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to import catalog: {}", e))?;

    println!();
    println!("{}", "✅ Catalog imported".green().bold());
    println!(
        "  {} courses, {} topic lists, {} resource lists, {} feedback rows",
        report.courses, report.topic_lists, report.resource_lists, report.feedback
    );
    println!();

    Ok(())
}

/// Displays catalog statistics.
///
/// Shows:
/// - Number of courses, topic names and resource links
/// - Feedback rows, likes and dislikes
/// - Courses whose stored topic count disagrees with their topic list
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repositories = postgres_repositories(Arc::new(pool.clone()));
    let catalog = CatalogService::new(&repositories);
    let feedback = FeedbackService::new(repositories.feedback.clone());

    let stats = catalog
        .catalog_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read catalog: {}", e))?;
    let totals = feedback
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read feedback: {}", e))?;

    println!(
        "  Courses:          {}",
        stats.courses.to_string().bright_green().bold()
    );
    println!(
        "  Topics:           {}",
        stats.topic_names.to_string().bright_green().bold()
    );
    println!(
        "  Resource links:   {}",
        stats.resource_entries.to_string().bright_green().bold()
    );
    println!(
        "  Rated links:      {}",
        totals.rows.to_string().bright_green().bold()
    );
    println!(
        "  Likes / dislikes: {} / {}",
        totals.likes.to_string().bright_green().bold(),
        totals.dislikes.to_string().bright_red().bold()
    );
    println!();

    if stats.stale_topic_counts.is_empty() {
        println!("{}", "  Stored topic counts match the topic lists".bright_black());
    } else {
        println!(
            "{}",
            "⚠️  Stored topic counts out of date (the API reports the list length):".yellow()
        );
        println!(
            "  {:<20} {:>8} {:>8}",
            "Course".bright_white().bold(),
            "Stored".bright_white().bold(),
            "Actual".bright_white().bold()
        );
        println!("  {}", "─".repeat(38).bright_black());

        for stale in &stats.stale_topic_counts {
            println!(
                "  {:<20} {:>8} {:>8}",
                stale.course_id.cyan(),
                stale.stored,
                stale.actual
            );
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Schema up to date".green().bold());
        }
    }

    Ok(())
}
