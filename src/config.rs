use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::SeedKeyError;

/// Where a single table's constants are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    /// File name relative to [`Config::tables_dir`].
    pub file: String,
    /// Treat a missing file as an empty table instead of an error.
    #[serde(default = "default_optional")]
    pub optional: bool,
}

impl TableSource {
    fn named(file: &str) -> Self {
        Self {
            file: file.to_string(),
            optional: true,
        }
    }
}

fn default_optional() -> bool {
    true
}

/// Runtime configuration for locating the parameter tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the table files.
    pub tables_dir: PathBuf,
    pub gmlan: TableSource,
    pub other: TableSource,
    pub class2: TableSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables_dir: PathBuf::from("tables"),
            gmlan: TableSource::named("gmlan.txt"),
            other: TableSource::named("other.txt"),
            class2: TableSource::named("class2.txt"),
        }
    }
}

impl Config {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeedKeyError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SeedKeyError> {
        let config: Config =
            serde_json::from_str(text).map_err(|e| SeedKeyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SeedKeyError> {
        for (name, source) in [
            ("gmlan", &self.gmlan),
            ("other", &self.other),
            ("class2", &self.class2),
        ] {
            if source.file.trim().is_empty() {
                return Err(SeedKeyError::Config(format!("{name}.file must not be empty")));
            }
        }
        Ok(())
    }
}
