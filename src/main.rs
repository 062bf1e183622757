//! Configuration store CLI.
//!
//! Builds a store from optional defaults, applies each `--set` as its own
//! update, optionally resets, and prints the resulting state as JSON.
//!
//! ```text
//! config-store --defaults app.toml --set theme=dark --set autoSave=false \
//!     --get language --fallback en
//! ```

use clap::Parser;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;

use config_store::config::{load_defaults, parse_assignment, parse_value};
use config_store::observability::logging::init_logging;
use config_store::store::{ConfigMap, ConfigStore, HistoryEntry, StoreResult, StoreSummary};

#[derive(Parser)]
#[command(name = "config-store")]
#[command(about = "Apply updates to an in-memory configuration and inspect its history", long_about = None)]
struct Cli {
    /// Store name
    #[arg(short, long, default_value = "app")]
    name: String,

    /// Default configuration file (.toml or .json)
    #[arg(short, long)]
    defaults: Option<PathBuf>,

    /// Update to apply as key=value; repeat for several updates
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,

    /// Reset to the defaults after applying updates
    #[arg(long)]
    reset: bool,

    /// Key to look up in the final configuration
    #[arg(short, long)]
    get: Option<String>,

    /// Fallback returned when --get misses (JSON, or plain text)
    #[arg(long, requires = "get")]
    fallback: Option<String>,

    /// Log directive used when RUST_LOG is unset
    #[arg(long, default_value = "config_store=warn")]
    log_level: String,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: StoreSummary,
    current: &'a ConfigMap,
    history: &'a [HistoryEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<Value>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "config-store failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> StoreResult<Value> {
    let defaults = match &cli.defaults {
        Some(path) => load_defaults(path)?,
        None => ConfigMap::new(),
    };

    // Parse everything up front so a bad assignment leaves no partial history.
    let updates = cli
        .sets
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<StoreResult<Vec<_>>>()?;

    let mut store = ConfigStore::new(cli.name.clone(), defaults);
    for (key, value) in updates {
        let mut update = ConfigMap::new();
        update.insert(key, value);
        store.update_config(&update);
    }

    if cli.reset {
        store.reset_to_default();
    }

    let lookup = match &cli.get {
        Some(key) => {
            let fallback = cli.fallback.as_deref().map_or(Value::Null, parse_value);
            Some(json!({
                "key": key,
                "found": store.get(key).is_some(),
                "value": store.get_or(key, fallback),
            }))
        }
        None => None,
    };

    let report = Report {
        summary: store.summary(),
        current: store.current_config(),
        history: store.history(),
        lookup,
    };
    Ok(serde_json::to_value(&report)?)
}
