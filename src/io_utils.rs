use std::fmt;
use std::io;
use std::path::Path;

use crate::input::user_message;
use crate::SeedKeyError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 text.",
        _ => "Check the path and permissions.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Wrap a failed table read so the error names the table file.
pub fn table_io_error(path: &Path, err: io::Error) -> SeedKeyError {
    SeedKeyError::Io(io::Error::new(
        err.kind(),
        format_io_error("reading table", path, &err),
    ))
}

/// Usage line for a binary invoked with the wrong arguments.
pub fn usage_error(args: &[String], default_program: &str, usage: &str) -> CliError {
    let program = args.first().map_or(default_program, String::as_str);
    CliError {
        msg: format!("Usage: {program} {usage}"),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn seedkey_cli_error(context: &str, err: SeedKeyError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &SeedKeyError) -> String {
    use SeedKeyError::*;
    match err {
        InvalidSeedFormat(_) | InvalidAlgorithmFormat(_) => user_message(err),
        AlgorithmIndexOutOfRange { index, table_len } => format!(
            "{} (algorithm {index}, table has {} records)",
            user_message(err),
            table_len / crate::RECORD_SIZE
        ),
        InvalidTable(msg) => format!("{msg}. Check the table file contents."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}
