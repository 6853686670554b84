//! DataWhisper - personal data sharing
//!
//! A desktop application for sharing visualizations of personal health data
//! with chosen contacts and browsing data that others have shared with you.
//!
//! # Features
//!
//! - Demo sign-in with simulated network latency
//! - CSV upload and manual daily entries with inline validation
//! - Share composer with per-visualization sharing toggles
//! - Shared-with-me browser with search and category filters
//! - Light and dark themes
//!
//! # Architecture
//!
//! - `core`: Records, seed data and the pure screen reducers
//! - `app`: GUI application state and event handling
//! - `validators`: Form input validation
//! - `config`: Read-only configuration file
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! datawhisper
//!
//! # CLI commands
//! datawhisper contacts --search jane       # List contacts
//! datawhisper shared --category sleep      # Users sharing sleep data
//! datawhisper visualizations --json        # Dump visualizations as JSON
//! datawhisper access --search john         # People with access
//! datawhisper version                      # Build information
//! ```

mod app;
mod config;
mod core;
mod theme;
mod utils;
mod validators;

use clap::{Parser, Subcommand};
use crate::core::filter::{DataCategory, FilterCriteria, filter_records};
use iced::Size;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "datawhisper")]
#[command(about = "DataWhisper - share your personal data visualizations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts available as share recipients
    Contacts {
        /// Only contacts whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List users who shared data with you
    Shared {
        /// Only users whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Data category (all, steps, sleep, mood)
        #[arg(short, long, default_value = "all")]
        category: DataCategory,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List people you have shared with and their status
    Access {
        /// Only people whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List your visualizations and their sharing state
    Visualizations {
        /// Only visualizations whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Data category (all, steps, sleep, mood)
        #[arg(short, long, default_value = "all")]
        category: DataCategory,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show version and build information
    Version,
}

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        let config = config::load_config_blocking();
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(&config.log_level))
            .with_writer(std::io::stderr)
            .init();
        match handle_cli(command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui()
    }
}

fn handle_cli(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = core::records::Catalog::seed();
    match command {
        Commands::Contacts { search, json } => {
            let criteria = FilterCriteria::new(search.unwrap_or_default(), DataCategory::All);
            let contacts = filter_records(&catalog.contacts, &criteria);
            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else {
                for contact in contacts {
                    println!("  {:<20} {}", contact.name, contact.email);
                }
            }
        }
        Commands::Shared {
            search,
            category,
            json,
        } => {
            let criteria = FilterCriteria::new(search.unwrap_or_default(), category);
            let users = filter_records(&catalog.shared_users, &criteria);
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else if users.is_empty() {
                println!("No shared data matches.");
            } else {
                for user in users {
                    println!("{} <{}> since {}", user.name, user.email, user.shared_date);
                    for dataset in &user.datasets {
                        println!("    {} {} ({})", dataset.kind.glyph(), dataset.title, dataset.kind);
                    }
                }
            }
        }
        Commands::Access { search } => {
            let criteria = FilterCriteria::new(search.unwrap_or_default(), DataCategory::All);
            for grant in filter_records(&catalog.access_grants, &criteria) {
                println!(
                    "  {:<20} {:<24} {}  {}",
                    grant.name, grant.email, grant.date_shared, grant.status
                );
            }
        }
        Commands::Visualizations {
            search,
            category,
            json,
        } => {
            let criteria = FilterCriteria::new(search.unwrap_or_default(), category);
            let visualizations = filter_records(&catalog.visualizations, &criteria);
            if json {
                println!("{}", serde_json::to_string_pretty(&visualizations)?);
            } else {
                for viz in visualizations {
                    let marker = if viz.shared { "*" } else { " " };
                    println!(
                        "  {marker} {:<24} {:<12} {}",
                        utils::truncate_string(&viz.title, 24),
                        viz.kind.to_string(),
                        viz.date_created
                    );
                }
                println!("(* = shared)");
            }
        }
        Commands::Version => {
            println!("datawhisper {}", build::PKG_VERSION);
            println!("commit:  {}", build::SHORT_COMMIT);
            println!("built:   {}", build::BUILD_TIME);
        }
    }
    Ok(())
}

/// `RUST_LOG` wins over the configured level; a bad level falls back to `info`
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn launch_gui() -> ExitCode {
    let config = config::load_config_blocking();
    let filter = env_filter(&config.log_level);

    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("datawhisper.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
        } else {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        "Starting DataWhisper {} ({})",
        build::PKG_VERSION,
        build::SHORT_COMMIT
    );

    let result = iced::application(
        move || app::State::with_config(config.clone()),
        app::State::update,
        app::State::view,
    )
    .subscription(app::State::subscription)
    .window(iced::window::Settings {
        size: Size::new(1100.0, 760.0),
        ..Default::default()
    })
    .title("DataWhisper")
    .theme(|state: &app::State| state.theme.iced_theme())
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
