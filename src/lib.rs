//! GM 2-byte seed/key calculator.
//!
//! Derives the 16-bit security-access key for a 16-bit seed from one record
//! of a vendor parameter table, or enumerates the key for every record of a
//! table ("brute force").
//!
//! ```no_run
//! use gmseedkey::{compute_key, AlgorithmIndex, ParameterTable, Seed};
//!
//! let table = ParameterTable::load("tables/gmlan.txt")?;
//! let key = compute_key(Seed(0x0102), AlgorithmIndex(238), &table)?;
//! println!("{key}");
//! # Ok::<(), gmseedkey::SeedKeyError>(())
//! ```

pub mod config;
mod engine;
mod error;
mod format;
pub mod input;
pub mod io_utils;
mod registry;
mod schedule;
mod table;
mod types;

pub use config::{Config, TableSource};
pub use engine::{compute_key, enumerate_keys, KeyEngine};
pub use error::SeedKeyError;
pub use format::{format_enumeration, NO_ALGORITHMS};
pub use input::{normalize_seed_text, parse_algorithm, parse_seed};
pub use registry::{TableId, TableRegistry};
pub use schedule::{GmOpcodeSchedule, KeySchedule, Opcode};
pub use table::{ParameterRecord, ParameterTable};
pub use types::{AlgorithmIndex, Key, Seed, RECORD_SIZE};
