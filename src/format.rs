use crate::types::{AlgorithmIndex, Key};

/// Shown in place of an empty enumeration.
pub const NO_ALGORITHMS: &str = "No algorithms available for this table.";

/// Render a brute-force result as one `Algo NNN: 0xKKKK` line per entry.
pub fn format_enumeration(entries: &[(AlgorithmIndex, Key)]) -> String {
    if entries.is_empty() {
        return NO_ALGORITHMS.to_string();
    }
    entries
        .iter()
        .map(|(index, key)| format!("Algo {index}: {key}"))
        .collect::<Vec<_>>()
        .join("\n")
}
