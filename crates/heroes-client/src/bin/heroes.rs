//! Command-line front end for the hero API.
//!
//! Each invocation drives one view (or one navigation path) against the
//! configured server, prints what the view shows, then prints the message
//! log the way the web app's "Messages" panel does.
//!
//! Configuration comes from `HEROES_API_URL` / `HEROES_TIMEOUT_MS`; the
//! `--api-url` and `--timeout-ms` flags override them.

use std::time::Duration;

use clap::{Parser, Subcommand};
use heroes_client::config::{parse_timeout_ms, validate_api_url};
use heroes_client::{
    ClientConfig, DashboardView, HeroDetailView, HeroSearchView, HeroService, HeroesView,
    HttpTransport, MessageLog, Navigator, Route, SaveStatus,
};
use heroes_types::{Hero, HeroId};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tour of Heroes client.
#[derive(Debug, Parser)]
#[command(name = "heroes", version, about)]
struct Cli {
    /// Base URL of the hero API (overrides `HEROES_API_URL`).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in milliseconds (overrides `HEROES_TIMEOUT_MS`).
    #[arg(long, global = true)]
    timeout_ms: Option<String>,

    /// Skip printing the message log.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the top heroes.
    Dashboard,
    /// List every hero.
    List,
    /// Show one hero.
    Get {
        /// Hero id.
        id: i64,
    },
    /// Create a hero.
    Add {
        /// Name for the new hero; surrounding whitespace is trimmed.
        name: String,
    },
    /// Rename a hero.
    Rename {
        /// Hero id.
        id: i64,
        /// New name.
        name: String,
    },
    /// Delete a hero.
    Delete {
        /// Hero id.
        id: i64,
    },
    /// Search heroes by name.
    Search {
        /// Case-insensitive name fragment.
        term: String,
    },
    /// Open an app path such as `/dashboard`, `/heroes` or `/detail/12`.
    Open {
        /// Route path.
        path: String,
    },
}

/// Application entry point.
///
/// Initializes logging, resolves configuration, runs one command, and
/// prints the message log.
///
/// # Errors
///
/// Returns an error for bad configuration or an unknown route. Failed
/// hero requests are not errors; they show up in the message log.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(api_url = %config.api_url, timeout = ?config.timeout, "configuration loaded");

    let messages = MessageLog::new();
    let service = HeroService::new(HttpTransport::new(&config)?, messages.clone());

    run(&cli.command, &service).await?;

    if !cli.quiet {
        print_messages(&messages);
    }
    Ok(())
}

/// Environment first, then flags on top.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_url = validate_api_url(url)?;
    }
    if let Some(ms) = &cli.timeout_ms {
        config.timeout = Duration::from_millis(parse_timeout_ms(ms)?);
    }
    Ok(config)
}

type Service = HeroService<HttpTransport, MessageLog>;

async fn run(command: &Command, service: &Service) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Dashboard => show_route(Route::Dashboard, service).await,
        Command::List => show_route(Route::Heroes, service).await,
        Command::Get { id } => show_route(Route::Detail(HeroId::new(*id)), service).await,
        Command::Add { name } => {
            let mut view = HeroesView::new(service);
            match view.add(name).await {
                Ok(Some(id)) => println!("Created hero {id}."),
                Ok(None) => println!("Hero was not created."),
                Err(e) => println!("Not sent: {e}."),
            }
        }
        Command::Rename { id, name } => {
            let mut nav = Navigator::new();
            nav.navigate(Route::Detail(HeroId::new(*id)));

            let mut detail = HeroDetailView::new(service);
            detail.load(HeroId::new(*id)).await;
            detail.rename(name);
            match detail.save().await {
                SaveStatus::Saved => {
                    let back = nav.back();
                    println!("Saved. Back to {}.", back.path());
                }
                SaveStatus::Failed => println!("Save failed."),
                SaveStatus::NothingLoaded => println!("No hero with id {id}."),
                SaveStatus::BlankName => println!("Not sent: hero name must not be blank."),
            }
        }
        Command::Delete { id } => {
            let mut view = HeroesView::new(service);
            view.load().await;
            if view.delete(HeroId::new(*id)).await {
                println!("Deleted hero {id}.");
            } else {
                println!("Hero {id} was not deleted.");
            }
        }
        Command::Search { term } => {
            let mut search = HeroSearchView::new(service);
            search.search(term).await;
            print_heroes("Search results", &search.results);
        }
        Command::Open { path } => {
            let route = Route::parse(path).ok_or_else(|| format!("unknown route {path:?}"))?;
            show_route(route, service).await;
        }
    }
    Ok(())
}

async fn show_route(route: Route, service: &Service) {
    match route {
        Route::Dashboard => {
            let mut dashboard = DashboardView::new(service);
            dashboard.load().await;
            print_heroes("Top Heroes", &dashboard.heroes);
        }
        Route::Heroes => {
            let mut list = HeroesView::new(service);
            list.load().await;
            print_heroes("My Heroes", &list.heroes);
        }
        Route::Detail(id) => {
            let mut detail = HeroDetailView::new(service);
            detail.load(id).await;
            match &detail.hero {
                Some(hero) => {
                    println!("{} Details", hero.name.to_uppercase());
                    println!("id: {}", hero.id);
                    println!("name: {}", hero.name);
                }
                None => println!("No hero with id {id}."),
            }
        }
    }
}

fn print_heroes(title: &str, heroes: &[Hero]) {
    println!("{title}");
    if heroes.is_empty() {
        println!("  (none)");
    }
    for hero in heroes {
        println!("  {:>4}  {}", hero.id, hero.name);
    }
}

fn print_messages(messages: &MessageLog) {
    let entries = messages.get_all();
    if entries.is_empty() {
        return;
    }
    println!();
    println!("Messages");
    for entry in entries {
        println!("  {entry}");
    }
}
