//! Picklist CLI - Print an order-picking sheet grouped by shelf
//!
//! Usage:
//!   picklist <ORDERS> [--database <url>] [--config <file>] [--lang ru|en] [--verbose]
//!
//! Examples:
//!   DB_URL=sqlite://warehouse.db picklist 1001,1002
//!   picklist 1001 --database ./warehouse.db --lang en
//!
//! `DB_URL` may also be set in a `.env` file in the working directory.

use clap::{Parser, ValueEnum};
use picklist::config::{load_dotenv, Settings};
use picklist::generate::{generate_from_connection, GenerateOptions, PicklistResult};
use picklist::model::OrderSelection;
use picklist::report::Labels;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "picklist")]
#[command(about = "Picklist - Print a warehouse order-picking sheet grouped by shelf")]
#[command(version)]
struct Cli {
    /// Comma-separated order numbers, e.g. 1001,1002
    orders: String,

    /// Store connection string (overrides the config file and DB_URL)
    #[arg(short, long)]
    database: Option<String>,

    /// Path to a picklist.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sheet wording (overrides [labels] from the config file)
    #[arg(short, long)]
    lang: Option<LangArg>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum LangArg {
    Ru,
    En,
}

impl From<LangArg> for Labels {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Ru => Labels::default(),
            LangArg::En => Labels::english(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(sheet) => {
            println!("{}", sheet);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> PicklistResult<String> {
    let selection = OrderSelection::parse(&cli.orders)?;

    let dotenv_path = load_dotenv()?;
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::load()?,
    };

    let level = if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };
    picklist::logging::init(level);
    if let Some(path) = &dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let connection = settings.resolve_connection(cli.database.as_deref())?;

    let labels = cli.lang.map(Labels::from).unwrap_or(settings.labels);
    let options = GenerateOptions::default().with_labels(labels);

    generate_from_connection(&connection, &selection, &options)
}
