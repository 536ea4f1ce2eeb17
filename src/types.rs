use std::fmt;

/// Number of table elements making up one algorithm record.
pub const RECORD_SIZE: usize = 13;

/// 16-bit challenge issued by the module being unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(pub u16);

impl Seed {
    pub fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for Seed {
    fn from(value: u16) -> Self {
        Seed(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// Selects one record within a parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlgorithmIndex(pub usize);

impl AlgorithmIndex {
    pub fn value(self) -> usize {
        self.0
    }

    /// Offset of the first element of this record, or `None` on overflow.
    pub(crate) fn record_offset(self) -> Option<usize> {
        self.0.checked_mul(RECORD_SIZE)
    }
}

impl From<usize> for AlgorithmIndex {
    fn from(value: usize) -> Self {
        AlgorithmIndex(value)
    }
}

impl fmt::Display for AlgorithmIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// 16-bit response derived from a seed.
///
/// Only the transform engine creates keys; callers read them back through
/// [`Key::value`] or the `0xKKKK` [`Display`](fmt::Display) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(u16);

impl Key {
    pub(crate) fn new(value: u16) -> Self {
        Key(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_formats_zero_padded_upper_case() {
        assert_eq!(Key::new(0x1A).to_string(), "0x001A");
        assert_eq!(Key::new(0xBEEF).to_string(), "0xBEEF");
        assert_eq!(Key::new(0).to_string(), "0x0000");
    }

    #[test]
    fn index_label_is_three_digits() {
        assert_eq!(AlgorithmIndex(7).to_string(), "007");
        assert_eq!(AlgorithmIndex(238).to_string(), "238");
        assert_eq!(AlgorithmIndex(1234).to_string(), "1234");
    }

    #[test]
    fn record_offset_detects_overflow() {
        assert_eq!(AlgorithmIndex(2).record_offset(), Some(26));
        assert_eq!(AlgorithmIndex(usize::MAX).record_offset(), None);
    }
}
