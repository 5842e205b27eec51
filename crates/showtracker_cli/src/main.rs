//! ShowTracker command-line front end.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Run one command against the persisted store, or an interactive session.

mod app;
mod shell;
mod views;

use anyhow::{Context, Result};
use app::{App, Screen};
use clap::{Parser, Subcommand};
use showtracker_core::{
    core_version, init_logging, AppConfig, ConfigOverrides, SearchQuery, SqliteStateStorage,
    TypeFilter, YearMonth,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showtracker")]
#[command(about = "Track shows and movies, upcoming releases and watch history", long_about = None)]
struct Cli {
    /// Directory holding the database and logs
    #[arg(long, global = true, env = "SHOWTRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "SHOWTRACKER_LOG_LEVEL")]
    log_level: Option<String>,

    /// JSON catalog file replacing the built-in catalog
    #[arg(long, global = true, env = "SHOWTRACKER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Length of the upcoming-release window in days
    #[arg(long, global = true, env = "SHOWTRACKER_UPCOMING_DAYS")]
    upcoming_days: Option<i64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tracking list, suggestions and watch history
    Home,
    /// Search the catalog by title
    Search {
        /// Text to look for in titles
        query: Vec<String>,
        /// Restrict results to one media type
        #[arg(short = 't', long = "type", default_value = "all")]
        filter: TypeFilter,
    },
    /// Start tracking an item
    Track { id: String },
    /// Mark an item as watched
    Watch { id: String },
    /// Stop tracking an item
    Untrack { id: String },
    /// Remove an item from the watch history
    Unwatch { id: String },
    /// Monthly release calendar
    Calendar {
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Activity log and upcoming releases
    Notifications,
    /// Interactive session
    Shell,
    /// Print the version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Home);
    if matches!(command, Commands::Version) {
        println!("showtracker {}", core_version());
        return Ok(());
    }

    let config = AppConfig::resolve(ConfigOverrides {
        data_dir: cli.data_dir,
        log_level: cli.log_level,
        catalog_path: cli.catalog,
        upcoming_days: cli.upcoming_days,
    })?;
    init_logging(config.log_level, &config.log_dir()).context("initializing logging")?;

    let mut app = App::open(&config)?;
    match command {
        Commands::Home => print_screen(&app, Screen::Home),
        Commands::Search { query, filter } => {
            let query = SearchQuery::new(query.join(" ")).with_filter(filter);
            print_screen(&app, Screen::Search(query));
        }
        Commands::Track { id } => {
            app.track(&id)?;
            print_screen(&app, Screen::Home);
        }
        Commands::Watch { id } => {
            app.watch(&id)?;
            print_screen(&app, Screen::Home);
        }
        Commands::Untrack { id } => {
            app.untrack(&id)?;
            print_screen(&app, Screen::Home);
        }
        Commands::Unwatch { id } => {
            app.unwatch(&id)?;
            print_screen(&app, Screen::Home);
        }
        Commands::Calendar { month } => print_screen(&app, Screen::Calendar(month)),
        Commands::Notifications => print_screen(&app, Screen::Notifications),
        Commands::Shell => {
            let stdin = std::io::stdin();
            shell::run(&mut app, stdin.lock(), std::io::stdout())?;
        }
        // Printed before configuration is resolved.
        Commands::Version => {}
    }

    Ok(())
}

fn print_screen(app: &App<SqliteStateStorage>, screen: Screen) {
    println!("{}", app.render(&screen));
}
