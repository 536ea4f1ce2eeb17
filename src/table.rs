//! Vendor parameter tables.
//!
//! A table is a flat list of byte constants split into records of
//! [`RECORD_SIZE`] elements, one record per algorithm selector. A table whose
//! length is not a multiple of the record size carries a trailing partial
//! record which is never addressed.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::types::{AlgorithmIndex, RECORD_SIZE};
use crate::SeedKeyError;

/// Immutable sequence of table constants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterTable {
    data: Cow<'static, [u8]>,
}

/// One record borrowed from a [`ParameterTable`].
///
/// Element 0 is the record's algorithm id; elements 1..13 hold four
/// `(opcode, hh, ll)` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterRecord<'a> {
    elements: &'a [u8; RECORD_SIZE],
}

impl<'a> ParameterRecord<'a> {
    /// Algorithm id byte stored at the start of the record.
    pub fn id(&self) -> u8 {
        self.elements[0]
    }

    /// The four `(opcode, hh, ll)` steps in application order.
    pub fn steps(&self) -> impl Iterator<Item = (u8, u8, u8)> + 'a {
        let elements: &'a [u8; RECORD_SIZE] = self.elements;
        elements[1..]
            .chunks_exact(3)
            .map(|step| (step[0], step[1], step[2]))
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.elements
    }
}

impl ParameterTable {
    /// Wrap constant data compiled into the binary.
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
        }
    }

    /// Take ownership of table data loaded at runtime.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data: Cow::Owned(data),
        }
    }

    /// Parse a textual constant list.
    ///
    /// Elements are decimal or `0x`-prefixed hexadecimal integers separated
    /// by commas and/or whitespace. Brackets are ignored so C array and
    /// tuple literals can be pasted as-is, and `#` or `//` start a comment
    /// running to the end of the line.
    pub fn parse(text: &str) -> Result<Self, SeedKeyError> {
        let mut data = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let tokens = strip_comment(line)
                .split(|c: char| c == ',' || c.is_whitespace() || "()[]{}".contains(c))
                .filter(|t| !t.is_empty());
            for token in tokens {
                let value = parse_element(token).ok_or_else(|| {
                    SeedKeyError::InvalidTable(format!(
                        "element {} on line {} ({token:?}) is not a byte value",
                        data.len(),
                        line_no + 1
                    ))
                })?;
                data.push(value);
            }
        }
        Ok(Self::from_vec(data))
    }

    /// Read and parse a table file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedKeyError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of complete records.
    pub fn record_count(&self) -> usize {
        self.data.len() / RECORD_SIZE
    }

    /// Size of the trailing partial record, zero when the table is aligned.
    pub fn partial_len(&self) -> usize {
        self.data.len() % RECORD_SIZE
    }

    /// Borrow the record for `index`.
    ///
    /// Fails when `index * 13 + 12` is not a valid element position.
    pub fn record_at(&self, index: AlgorithmIndex) -> Result<ParameterRecord<'_>, SeedKeyError> {
        let out_of_range = || SeedKeyError::AlgorithmIndexOutOfRange {
            index: index.value(),
            table_len: self.data.len(),
        };
        let start = index.record_offset().ok_or_else(out_of_range)?;
        let end = start.checked_add(RECORD_SIZE).ok_or_else(out_of_range)?;
        if end > self.data.len() {
            return Err(out_of_range());
        }
        let elements: &[u8; RECORD_SIZE] = self.data[start..end]
            .try_into()
            .map_err(|_| out_of_range())?;
        Ok(ParameterRecord { elements })
    }

    /// Iterate over every complete record in index order.
    pub fn records(&self) -> impl Iterator<Item = ParameterRecord<'_>> {
        self.data
            .chunks_exact(RECORD_SIZE)
            .filter_map(|chunk| <&[u8; RECORD_SIZE]>::try_from(chunk).ok())
            .map(|elements| ParameterRecord { elements })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_element(token: &str) -> Option<u8> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return u8::from_str_radix(hex, 16).ok();
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
