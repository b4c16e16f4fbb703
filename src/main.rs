use anyhow::{Context, Result, bail};
use clap::Parser;
use fpl_wrapped::config::Config;
use fpl_wrapped::fpl::{self, FplClient};
use fpl_wrapped::share::{FileShareStore, ShareStore, default_share_dir};
use fpl_wrapped::wrapped;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fpl-wrapped",
    about = "Fantasy Premier League season digest with highlights and a manager archetype"
)]
struct Cli {
    /// Path to config file (defaults are used when it does not exist)
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Build the season digest for a manager and print it as JSON
    Wrapped {
        /// FPL entry (team) id
        entry_id: u64,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show a classic league's standings, or search it for a manager
    League {
        /// League id (defaults to league.default_league_id from config)
        league_id: Option<u64>,

        /// Filter by manager or team name
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Build a digest and store it for sharing; prints the share id
    Share {
        /// FPL entry (team) id
        entry_id: u64,
    },

    /// Print a previously shared digest
    Open {
        /// Share id returned by `share`
        share_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fpl_wrapped=info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config)?;
    cfg.validate()?;

    match cli.command {
        Command::Wrapped { entry_id, pretty } => {
            let client = FplClient::from_config(&cfg)?;
            let digest = wrapped::build_digest(&client, entry_id, cfg.engine.batch_size)
                .await
                .context("could not build your season digest")?;
            let json = if pretty {
                serde_json::to_string_pretty(&digest)?
            } else {
                serde_json::to_string(&digest)?
            };
            println!("{json}");
            Ok(())
        }
        Command::League { league_id, query } => {
            let Some(league_id) = league_id.or(cfg.league.default_league_id) else {
                bail!("no league id given and league.default_league_id is not set");
            };
            let client = FplClient::from_config(&cfg)?;
            let rows = client.league_standings(league_id).await;
            match query {
                Some(q) => {
                    for m in fpl::search_managers(&rows, &q, cfg.league.max_suggestions) {
                        println!("{}\t{}\t{}", m.entry, m.player_name, m.entry_name);
                    }
                }
                None => {
                    for m in &rows {
                        println!(
                            "{}\t{}\t{}\t{}\t{}",
                            m.rank, m.entry, m.player_name, m.entry_name, m.total
                        );
                    }
                }
            }
            Ok(())
        }
        Command::Share { entry_id } => {
            let client = FplClient::from_config(&cfg)?;
            let digest = wrapped::build_digest(&client, entry_id, cfg.engine.batch_size)
                .await
                .context("could not build your season digest")?;
            let store = share_store(&cfg);
            let record = store.save(serde_json::to_value(&digest)?)?;
            println!("{}", record.id);
            Ok(())
        }
        Command::Open { share_id } => {
            let store = share_store(&cfg);
            let record = store.load(&share_id)?;
            println!("{}", serde_json::to_string_pretty(&record.payload)?);
            Ok(())
        }
    }
}

fn share_store(cfg: &Config) -> FileShareStore {
    let dir = cfg.share.dir.clone().unwrap_or_else(default_share_dir);
    FileShareStore::new(dir)
}
