use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedKeyError {
    /// Seed text could not be read as a 16-bit hexadecimal value.
    #[error("{0}")]
    InvalidSeedFormat(String),

    /// Algorithm text could not be read as a non-negative decimal number.
    #[error("{0}")]
    InvalidAlgorithmFormat(String),

    /// The selected record would read past the end of the table.
    #[error("algorithm {index} is out of range for a table of {table_len} elements")]
    AlgorithmIndexOutOfRange { index: usize, table_len: usize },

    /// Table constants could not be parsed.
    #[error("table error: {0}")]
    InvalidTable(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
