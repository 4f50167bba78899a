use anyhow::Context;
use cardgraph::{config::Config, ingest, DisplayField, ForceField, Query, Settings};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cardgraph", about = "Card graph query and layout tools")]
struct Cli {
    /// Write debug logs to /tmp/cardgraph-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the path of every note matching QUERY.
    Search {
        query: String,
        /// JSON array of note records.
        #[arg(long)]
        notes: PathBuf,
    },
    /// Print the force-engine parameters for the current settings, clamped to
    /// their slider ranges.
    Forces {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the effective settings, optionally resetting fields to default.
    Settings {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Field to reset, e.g. `card_width` or `repel_force`. Repeatable.
        #[arg(long = "reset", value_name = "FIELD")]
        reset: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/cardgraph-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("cardgraph debug log started, tail -f /tmp/cardgraph-debug.log");
    }

    match cli.command {
        Command::Search { query, notes } => {
            let file = std::fs::File::open(&notes)
                .with_context(|| format!("opening {}", notes.display()))?;
            let records = ingest::read_records(std::io::BufReader::new(file))?;
            let query = Query::parse(&query);
            if query.is_empty() {
                tracing::debug!("search: empty query, listing every note");
            }
            // Documents hold the lowercased path used for matching; print the
            // host's path as given.
            for record in &records {
                if query.matches(&record.to_document()) {
                    println!("{}", record.path);
                }
            }
        }
        Command::Forces { config } => {
            let cfg = load_config(config.as_deref())?;
            let params = cardgraph::compute_forces(
                &cfg.forces.clamped(),
                &cfg.display.clamped(),
                &cardgraph::PHYSICS,
            );
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
        Command::Settings { config, reset } => {
            let mut cfg = load_config(config.as_deref())?;
            for name in &reset {
                reset_field(&mut cfg, name)?;
            }
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Field names are unique across both records, so try display then forces.
fn reset_field(cfg: &mut Config, name: &str) -> anyhow::Result<()> {
    if let Ok(field) = name.parse::<DisplayField>() {
        cfg.display.reset(field);
        return Ok(());
    }
    let field = name.parse::<ForceField>()?;
    cfg.forces.reset(field);
    Ok(())
}
