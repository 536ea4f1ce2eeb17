//! Parsing of user supplied seed and algorithm text.

use crate::types::{AlgorithmIndex, Seed};
use crate::SeedKeyError;

pub const MSG_SEED_EMPTY: &str = "Please enter a seed in hexadecimal format.";
pub const MSG_SEED_NOT_HEX: &str = "Seed must be a hexadecimal value (e.g. 0A1B).";
pub const MSG_ALGO_EMPTY: &str = "Please enter an algorithm number or enable brute force.";
pub const MSG_ALGO_NOT_DECIMAL: &str = "Algorithm must be a decimal number.";
pub const MSG_ALGO_NEGATIVE: &str = "Algorithm number must be non-negative.";
pub const MSG_ALGO_OUT_OF_RANGE: &str = "Algorithm index is out of range for the selected table.";

/// Upper-case seed text the way it is echoed back to the user.
pub fn normalize_seed_text(text: &str) -> String {
    text.to_uppercase()
}

/// Parse a 1-4 digit hexadecimal seed, with an optional `0x` prefix.
pub fn parse_seed(text: &str) -> Result<Seed, SeedKeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SeedKeyError::InvalidSeedFormat(MSG_SEED_EMPTY.into()));
    }
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SeedKeyError::InvalidSeedFormat(MSG_SEED_NOT_HEX.into()));
    }
    u16::from_str_radix(digits, 16)
        .map(Seed)
        .map_err(|_| SeedKeyError::InvalidSeedFormat(MSG_SEED_NOT_HEX.into()))
}

/// Parse a non-negative decimal algorithm selector.
///
/// A leading `+` is accepted and `-0` reads as zero. Values too large for
/// `usize` saturate so the engine reports them as out of range.
pub fn parse_algorithm(text: &str) -> Result<AlgorithmIndex, SeedKeyError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SeedKeyError::InvalidAlgorithmFormat(MSG_ALGO_EMPTY.into()));
    }
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeedKeyError::InvalidAlgorithmFormat(MSG_ALGO_NOT_DECIMAL.into()));
    }
    if negative {
        if digits.bytes().any(|b| b != b'0') {
            return Err(SeedKeyError::InvalidAlgorithmFormat(MSG_ALGO_NEGATIVE.into()));
        }
        return Ok(AlgorithmIndex(0));
    }
    Ok(AlgorithmIndex(digits.parse::<usize>().unwrap_or(usize::MAX)))
}

/// Message shown to the user for a library error.
pub fn user_message(err: &SeedKeyError) -> String {
    match err {
        SeedKeyError::InvalidSeedFormat(msg) | SeedKeyError::InvalidAlgorithmFormat(msg) => {
            msg.clone()
        }
        SeedKeyError::AlgorithmIndexOutOfRange { .. } => MSG_ALGO_OUT_OF_RANGE.to_string(),
        other => other.to_string(),
    }
}
