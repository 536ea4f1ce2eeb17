//! Seed to key transform engine.

use crate::schedule::{GmOpcodeSchedule, KeySchedule};
use crate::table::ParameterTable;
use crate::types::{AlgorithmIndex, Key, Seed, RECORD_SIZE};
use crate::SeedKeyError;

/// Engine bound to one key schedule.
#[derive(Debug, Clone, Default)]
pub struct KeyEngine<S = GmOpcodeSchedule> {
    schedule: S,
}

impl KeyEngine<GmOpcodeSchedule> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: KeySchedule> KeyEngine<S> {
    pub fn with_schedule(schedule: S) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    /// Compute the key for `seed` under record `index` of `table`.
    ///
    /// The selector is bounds checked before any table element is read.
    pub fn compute_key(
        &self,
        seed: Seed,
        index: AlgorithmIndex,
        table: &ParameterTable,
    ) -> Result<Key, SeedKeyError> {
        let record = table.record_at(index)?;
        Ok(Key::new(self.schedule.apply(seed.value(), &record)))
    }

    /// Compute the key for every selector in `1..table.len() / 13`.
    ///
    /// Index 0 is never part of the enumeration.
    pub fn enumerate_keys(&self, seed: Seed, table: &ParameterTable) -> Vec<(AlgorithmIndex, Key)> {
        let limit = table.len() / RECORD_SIZE;
        table
            .records()
            .enumerate()
            .take(limit)
            .skip(1)
            .map(|(index, record)| {
                let key = Key::new(self.schedule.apply(seed.value(), &record));
                (AlgorithmIndex(index), key)
            })
            .collect()
    }
}

/// [`KeyEngine::compute_key`] with the default GM schedule.
pub fn compute_key(
    seed: Seed,
    index: AlgorithmIndex,
    table: &ParameterTable,
) -> Result<Key, SeedKeyError> {
    KeyEngine::new().compute_key(seed, index, table)
}

/// [`KeyEngine::enumerate_keys`] with the default GM schedule.
pub fn enumerate_keys(seed: Seed, table: &ParameterTable) -> Vec<(AlgorithmIndex, Key)> {
    KeyEngine::new().enumerate_keys(seed, table)
}
