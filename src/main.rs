use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gmseedkey::io_utils::{io_cli_error, seedkey_cli_error};
use gmseedkey::{
    format_enumeration, normalize_seed_text, parse_algorithm, parse_seed, Config, KeyEngine,
    SeedKeyError, TableId, TableRegistry,
};

/// GM 2 byte seed/key calculator.
#[derive(Parser)]
#[command(name = "gmseedkey")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the table files (overrides the config)
    #[arg(long, global = true)]
    tables_dir: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the key for one algorithm
    Key {
        /// Seed in hexadecimal (e.g. 0102)
        #[arg(long)]
        seed: String,

        /// Algorithm number in decimal (e.g. 238)
        #[arg(long)]
        algo: String,

        /// Table to use (GMLAN, Other, Class2)
        #[arg(long, default_value = "GMLAN")]
        table: TableId,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Compute the key for every algorithm in a table
    Brute {
        /// Seed in hexadecimal (e.g. 0102)
        #[arg(long)]
        seed: String,

        /// Table to use (GMLAN, Other, Class2)
        #[arg(long, default_value = "GMLAN")]
        table: TableId,

        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the loaded tables
    Tables,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).map_err(|e| match e {
            SeedKeyError::Io(io) => io_cli_error("reading config", path, io),
            other => seedkey_cli_error("loading config", other),
        })?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.tables_dir {
        config.tables_dir = dir.clone();
    }
    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    if cli.verbose {
        eprintln!("tables dir: {}", config.tables_dir.display());
    }

    let registry =
        TableRegistry::load(&config).map_err(|e| seedkey_cli_error("loading tables", e))?;
    if cli.verbose {
        for (id, table) in registry.iter() {
            eprintln!("{id}: {} elements, {} records", table.len(), table.record_count());
        }
    }

    let engine = KeyEngine::new();

    match &cli.command {
        Command::Key {
            seed,
            algo,
            table,
            json,
        } => {
            let seed = parse_seed(&normalize_seed_text(seed.trim()))
                .map_err(|e| seedkey_cli_error("seed", e))?;
            let index = parse_algorithm(algo).map_err(|e| seedkey_cli_error("algorithm", e))?;
            let params = registry.get(*table);
            if cli.verbose {
                if let Ok(record) = params.record_at(index) {
                    eprintln!("record {index}: {}", hex::encode_upper(record.as_bytes()));
                }
            }
            let key = engine
                .compute_key(seed, index, params)
                .map_err(|e| seedkey_cli_error("algorithm", e))?;
            if *json {
                let out = serde_json::json!({
                    "table": table.label(),
                    "seed": seed.to_string(),
                    "algorithm": index.value(),
                    "key": key.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{key}");
            }
        }

        Command::Brute { seed, table, json } => {
            let seed = parse_seed(&normalize_seed_text(seed.trim()))
                .map_err(|e| seedkey_cli_error("seed", e))?;
            let entries = engine.enumerate_keys(seed, registry.get(*table));
            if cli.verbose {
                eprintln!("{table}: {} algorithms enumerated", entries.len());
            }
            if *json {
                let keys: Vec<_> = entries
                    .iter()
                    .map(|(index, key)| {
                        serde_json::json!({ "algorithm": index.value(), "key": key.to_string() })
                    })
                    .collect();
                let out = serde_json::json!({
                    "table": table.label(),
                    "seed": seed.to_string(),
                    "keys": keys,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", format_enumeration(&entries));
            }
        }

        Command::Tables => {
            for (id, table) in registry.iter() {
                println!(
                    "{:<7} {:>5} elements {:>4} records",
                    id.label(),
                    table.len(),
                    table.record_count()
                );
            }
        }
    }

    Ok(())
}
