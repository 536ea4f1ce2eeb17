//! Prints the layout of a parameter table file: element count, record count
//! and the size of any trailing partial record. Used to sanity check table
//! files before pointing the calculator at them.

use std::{env, fs, path::Path};
use gmseedkey::io_utils::{io_cli_error, seedkey_cli_error, usage_error};
use gmseedkey::{ParameterTable, Opcode};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(usage_error(&args, "table_info", "<table_file>").into());
    }

    let path = Path::new(&args[1]);
    let text = fs::read_to_string(path).map_err(|e| io_cli_error("reading table", path, e))?;
    let table = ParameterTable::parse(&text).map_err(|e| seedkey_cli_error("parsing table", e))?;

    println!("elements: {}", table.len());
    println!("records: {}", table.record_count());
    println!("trailing: {}", table.partial_len());

    let unknown = table
        .records()
        .flat_map(|r| r.steps())
        .filter(|(code, _, _)| Opcode::from_byte(*code).is_none())
        .count();
    println!("unknown opcode steps: {}", unknown);

    Ok(())
}
