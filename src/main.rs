use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fpl_wager::api::state::AppState;
use fpl_wager::config::AppConfig;
use fpl_wager::fetch::{FplClient, SnapshotSource};
use fpl_wager::models::Participant;
use fpl_wager::scoring;
use fpl_wager::storage::{GameweekResult, StateStore, StorageConfig};

#[derive(Parser)]
#[command(name = "fpl-wager")]
#[command(about = "Local FPL gameweek wager tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a gameweek and print the settlement
    Score {
        /// Gameweek to score (default: the active gameweek)
        #[arg(long)]
        gameweek: Option<u32>,

        /// Stake multiplier for this run (overrides stored and default)
        #[arg(long)]
        multiplier: Option<f64>,

        /// Persist the settled result
        #[arg(long)]
        save: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port number
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Show the active gameweek and stored results
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting fpl-wager v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))?;
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }

    let store = StateStore::new(StorageConfig::new(config.data_dir.clone()));
    let client = FplClient::new(&config.fpl)?;

    match cli.command {
        Commands::Score {
            gameweek,
            multiplier,
            save,
        } => {
            let gameweek = match gameweek {
                Some(gw) => gw,
                None => client.active_gameweek().await?,
            };
            tracing::info!("Scoring gameweek {}", gameweek);
            let snapshot = client.snapshot(gameweek).await?;

            let effective_multiplier = match multiplier {
                Some(m) => m,
                None => store
                    .multiplier(gameweek)?
                    .unwrap_or(config.wager.default_multiplier),
            };

            let mut totals = [0, 0];
            for (i, participant) in [Participant::James, Participant::Laurie]
                .into_iter()
                .enumerate()
            {
                let roster = config.rosters.for_participant(participant);
                println!("\n=== {} ===", participant);
                for entry in roster.iter().filter(|e| e.active_at(gameweek)) {
                    match scoring::find_player(&snapshot, &entry.name) {
                        Some(player) => {
                            let breakdown = scoring::compute_player_score(player.id, &snapshot);
                            println!("  {:<20} {:>3}", player.web_name, breakdown.total);
                        }
                        None => println!("  {:<20} (not found)", entry.name),
                    }
                }
                let total = scoring::participant_total(roster, gameweek, &snapshot);
                println!("  {:<20} {:>3}", "Total", total);
                totals[i] = total;
            }

            let outcome = scoring::resolve_outcome(totals[0], totals[1], effective_multiplier);
            println!("\nGW{} (x{}): {}", gameweek, effective_multiplier, outcome);

            if save {
                let result =
                    GameweekResult::settle(gameweek, totals[0], totals[1], effective_multiplier);
                store.save_result(&result)?;
                println!("Result saved.");
            }
        }
        Commands::Serve { host, port } => {
            let state = AppState {
                config: Arc::new(config),
                store: Arc::new(store),
                source: Arc::new(client),
            };
            let app = fpl_wager::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Status => {
            match client.active_gameweek().await {
                Ok(gw) => println!("Active gameweek: {}", gw),
                Err(e) => println!("Active gameweek unavailable: {}", e),
            }
            let results = store.all_results()?;
            if results.is_empty() {
                println!("No settled results.");
            } else {
                println!("\n=== Settled results ===");
                for (key, result) in results {
                    println!(
                        "{}: James {} - Laurie {} (x{}, diff £{})",
                        key,
                        result.james_points,
                        result.laurie_points,
                        result.multiplier,
                        result.difference
                    );
                }
            }
        }
    }

    Ok(())
}
