//! Terminal browser for a running course-library server.
//!
//! Walks courses, topics and links interactively, and lets you like,
//! dislike or describe a link. Ctrl+C aborts a request in flight and keeps
//! the current screen.
//!
//! # Usage
//!
//! ```bash
//! # Interactive drill-down
//! cargo run --bin browse
//!
//! # One-shot search over courses, topics and resources
//! cargo run --bin browse -- search graph
//!
//! # Another server
//! cargo run --bin browse -- --base-url http://catalog.internal:5000
//! ```

use course_library::client::{Browser, BrowserError, CatalogClient, SearchResults, View};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use std::future::Future;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Browse the course library from the terminal.
#[derive(Parser)]
#[command(name = "browse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "COURSE_LIBRARY_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search courses, topics and resources, then exit
    Search {
        /// Case-insensitive substring
        query: String,
    },
}

/// What the user picked on a screen.
enum Step {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = CatalogClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))
        .with_context(|| format!("Invalid server URL '{}'", cli.base_url))?;
    let mut browser = Browser::new(client);

    match cli.command {
        Some(Command::Search { query }) => {
            browser.load().await.context("Failed to load the catalog")?;
            print_search_results(&query, &browser.search(&query));
            Ok(())
        }
        None => run_interactive(&mut browser).await,
    }
}

async fn run_interactive(browser: &mut Browser<CatalogClient>) -> Result<()> {
    println!("{}", "📚 Course Library".bright_blue().bold());
    println!();

    if abortable(browser.load()).await.is_none() {
        return Ok(());
    }

    loop {
        if let Some(error) = browser.error() {
            println!("{} {}", "✗".red().bold(), error.red());
            println!();
        }

        let step = match browser.view().clone() {
            View::CourseList => course_list_screen(browser).await?,
            View::CourseDetail { course } => {
                println!(
                    "{} {} {}",
                    course.coursename.bright_white().bold(),
                    format!("({})", course.courseid).bright_black(),
                    format!("{} topics", course.number_of_topics).bright_black()
                );
                let labels = course.topics.clone();
                match pick("Topic", &labels)? {
                    Some(index) => {
                        report(abortable(browser.select_topic(&course.topics[index])).await);
                    }
                    None => browser.back(),
                }
                Step::Continue
            }
            View::TopicResources { resources, .. } => {
                println!("{}", resources.topic.bright_white().bold());
                if resources.links.is_empty() {
                    println!("{}", "  No resources for this topic".yellow());
                    println!();
                    browser.back();
                    return_to_continue()?;
                    continue;
                }

                let labels: Vec<String> = resources
                    .links
                    .iter()
                    .map(|l| format!("{}  👍 {}  👎 {}", l.url, l.likes, l.dislikes))
                    .collect();
                match pick("Resource", &labels)? {
                    Some(index) => report(Some(browser.select_link(index))),
                    None => browser.back(),
                }
                Step::Continue
            }
            View::ResourceFeedback { .. } => feedback_screen(browser).await?,
        };

        if let Step::Quit = step {
            return Ok(());
        }
    }
}

async fn course_list_screen(browser: &mut Browser<CatalogClient>) -> Result<Step> {
    let courses = browser.courses().to_vec();

    let mut labels: Vec<String> = courses
        .iter()
        .map(|c| format!("{} ({})", c.coursename, c.courseid))
        .collect();
    let search_index = labels.len();
    labels.push("🔍 Search".to_string());
    labels.push(if courses.is_empty() { "↻ Retry" } else { "↻ Reload" }.to_string());
    let reload_index = search_index + 1;

    let Some(index) = pick("Course", &labels)? else {
        return Ok(Step::Quit);
    };

    if index == search_index {
        let query: String = Input::new()
            .with_prompt("Search")
            .allow_empty(true)
            .interact_text()?;
        print_search_results(&query, &browser.search(&query));
    } else if index == reload_index {
        report(abortable(browser.load()).await);
    } else {
        report(abortable(browser.select_course(&courses[index].courseid)).await);
    }

    Ok(Step::Continue)
}

async fn feedback_screen(browser: &mut Browser<CatalogClient>) -> Result<Step> {
    let Some(link) = browser.selected_link().cloned() else {
        browser.back();
        return Ok(Step::Continue);
    };

    println!("{}", link.url.cyan().underline());
    if link.description.is_empty() {
        println!("  {}", "No description".bright_black());
    } else {
        println!("  {}", link.description);
    }
    println!(
        "  👍 {}  👎 {}",
        link.likes.to_string().green().bold(),
        link.dislikes.to_string().red().bold()
    );
    println!();

    let actions = ["👍 Like", "👎 Dislike", "✏️  Edit description"];
    match pick("Action", &actions)? {
        Some(0) => report(abortable(browser.like()).await),
        Some(1) => report(abortable(browser.dislike()).await),
        Some(_) => {
            let description: String = Input::new()
                .with_prompt("Description")
                .with_initial_text(link.description)
                .allow_empty(true)
                .interact_text()?;
            report(abortable(browser.set_description(&description)).await);
        }
        None => browser.back(),
    }

    Ok(Step::Continue)
}

/// Shows a menu. Esc or `q` returns `None`.
fn pick<T: std::fmt::Display>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    let selection = Select::new()
        .with_prompt(format!("{prompt} (Esc to go back)"))
        .items(items)
        .default(0)
        .interact_opt()?;
    println!();
    Ok(selection)
}

fn return_to_continue() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to go back")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Runs `fut` unless Ctrl+C arrives first.
///
/// The browser only changes its view once a call completes, so dropping the
/// future keeps the current screen.
async fn abortable<F: Future>(fut: F) -> Option<F::Output> {
    tokio::select! {
        output = fut => Some(output),
        _ = tokio::signal::ctrl_c() => {
            println!("{}", "⏹  Request cancelled".yellow());
            None
        }
    }
}

/// Prints the outcome of a browser call. Errors are also kept by the browser
/// and shown on the next screen, so only timeouts get extra detail here.
fn report<T>(outcome: Option<std::result::Result<T, BrowserError>>) {
    if let Some(Err(BrowserError::Client(e))) = &outcome
        && e.is_timeout()
    {
        println!("{}", "⌛ The server did not answer in time".yellow());
    }
}

fn print_search_results(query: &str, results: &SearchResults) {
    println!("{} {}", "🔍 Results for".bright_blue().bold(), query.cyan());
    println!();

    if results.is_empty() {
        println!("{}", "  Nothing found".yellow());
        println!();
        return;
    }

    if !results.courses.is_empty() {
        println!("{}", "  Courses".bright_white().bold());
        for course in &results.courses {
            println!(
                "    {} {}",
                course.coursename,
                format!("({})", course.courseid).bright_black()
            );
        }
        println!();
    }

    if !results.topics.is_empty() {
        println!("{}", "  Topics".bright_white().bold());
        for topic in &results.topics {
            println!("    {}", topic);
        }
        println!();
    }

    if !results.resources.is_empty() {
        println!("{}", "  Resources".bright_white().bold());
        for entry in &results.resources {
            println!(
                "    {} {}",
                entry.link.cyan(),
                format!("{} / {}", entry.courseid, entry.topic).bright_black()
            );
        }
        println!();
    }
}
