use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use relief_core::{FinancialSummary, sort_newest_first};
use relief_feed::FeedService;
use relief_ingest::{CsvDialect, stories_from_csv, transactions_from_csv};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod output;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RELIEF_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "relief", version = VERSION, about = "Donation transparency ledger: fetch, check and summarize the relief sheets")]
struct Cli {
    /// Config file (default: ~/.relief-ledger/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Serve bundled sample data regardless of config
    #[arg(long, global = true, conflicts_with = "live")]
    mock: bool,

    /// Fetch the published sheets regardless of config
    #[arg(long, global = true)]
    live: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ledger, newest first
    Transactions {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print impact stories, newest first
    Stories {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Totals collected, spent and remaining
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// Fetch both sheets concurrently and print an overview
    Dashboard,

    /// Normalize a downloaded sheet export; errors are reported, not swallowed
    Ingest {
        /// Path to the CSV export
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = SheetKind::Transactions)]
        kind: SheetKind,

        /// Override the configured CSV dialect
        #[arg(long, value_enum)]
        dialect: Option<DialectArg>,

        #[arg(long)]
        json: bool,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the default config location
    Path,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SheetKind {
    Transactions,
    Stories,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    Lenient,
    Rfc4180,
}

impl From<DialectArg> for CsvDialect {
    fn from(d: DialectArg) -> Self {
        match d {
            DialectArg::Lenient => CsvDialect::Lenient,
            DialectArg::Rfc4180 => CsvDialect::Rfc4180,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    if cli.mock {
        cfg.feed.use_mock_data = true;
    }
    if cli.live {
        cfg.feed.use_mock_data = false;
    }
    let display = cfg.display.clone();
    tracing::debug!(
        config = ?cli.config,
        mock = cfg.feed.use_mock_data,
        dialect = ?cfg.feed.csv_dialect,
        "config loaded"
    );

    match cli.command {
        Command::Transactions { json, limit } => {
            let svc = FeedService::new(cfg.feed);
            let mut txns = svc.fetch_transactions().await;
            sort_newest_first(&mut txns);

            if json {
                output::print_json(&txns)?;
            } else {
                output::print_transactions(&txns, limit.unwrap_or(display.limit), &display.currency);
            }
        }

        Command::Stories { json, limit } => {
            let svc = FeedService::new(cfg.feed);
            let mut stories = svc.fetch_impact_stories().await;
            sort_newest_first(&mut stories);

            if json {
                output::print_json(&stories)?;
            } else {
                output::print_stories(&stories, limit.unwrap_or(display.limit));
            }
        }

        Command::Summary { json } => {
            let svc = FeedService::new(cfg.feed);
            let txns = svc.fetch_transactions().await;
            let summary = FinancialSummary::from_transactions(&txns);

            if json {
                output::print_json(&summary)?;
            } else {
                println!("{} transactions\n", txns.len());
                output::print_summary(&summary, &display.currency);
            }
        }

        Command::Dashboard => {
            let svc = FeedService::new(cfg.feed);
            let (mut txns, mut stories) = svc.fetch_all().await;
            sort_newest_first(&mut txns);
            sort_newest_first(&mut stories);

            println!("# Relief ledger\n");
            output::print_summary(&FinancialSummary::from_transactions(&txns), &display.currency);

            println!("\n## Latest transactions\n");
            output::print_transactions(&txns, 5, &display.currency);

            println!("\n## Relief in action\n");
            output::print_stories(&stories, 3);
        }

        Command::Ingest { file, kind, dialect, json } => {
            let dialect = dialect.map(CsvDialect::from).unwrap_or(cfg.feed.csv_dialect);
            ingest_file(&file, kind, dialect, json, &display)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(cli.config.as_deref())?,
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn ingest_file(
    path: &Path,
    kind: SheetKind,
    dialect: CsvDialect,
    json: bool,
    display: &config::DisplaySection,
) -> Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    match kind {
        SheetKind::Transactions => {
            let txns = transactions_from_csv(&text, dialect)
                .with_context(|| format!("parsing {}", path.display()))?;
            if json {
                return output::print_json(&txns);
            }
            println!("Parsed {} transactions from {}\n", txns.len(), path.display());
            output::print_transactions(&txns, txns.len(), &display.currency);
            println!();
            output::print_summary(&FinancialSummary::from_transactions(&txns), &display.currency);
        }
        SheetKind::Stories => {
            let stories = stories_from_csv(&text, dialect)
                .with_context(|| format!("parsing {}", path.display()))?;
            if json {
                return output::print_json(&stories);
            }
            println!("Parsed {} stories from {}\n", stories.len(), path.display());
            output::print_stories(&stories, stories.len());
        }
    }

    Ok(())
}
