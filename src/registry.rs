//! Named parameter tables.

use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::config::{Config, TableSource};
use crate::io_utils::table_io_error;
use crate::table::ParameterTable;
use crate::SeedKeyError;

/// Vendor/bus table variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableId {
    #[default]
    Gmlan,
    Other,
    Class2,
}

impl TableId {
    /// All variants in display order.
    pub const ALL: [TableId; 3] = [TableId::Gmlan, TableId::Other, TableId::Class2];

    pub fn label(self) -> &'static str {
        match self {
            TableId::Gmlan => "GMLAN",
            TableId::Other => "Other",
            TableId::Class2 => "Class2",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TableId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gmlan" => Ok(TableId::Gmlan),
            "other" | "others" => Ok(TableId::Other),
            "class2" => Ok(TableId::Class2),
            other => Err(format!(
                "unknown table '{other}' (expected one of: GMLAN, Other, Class2)"
            )),
        }
    }
}

/// One loaded table per [`TableId`].
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    gmlan: ParameterTable,
    other: ParameterTable,
    class2: ParameterTable,
}

impl TableRegistry {
    pub fn from_tables(gmlan: ParameterTable, other: ParameterTable, class2: ParameterTable) -> Self {
        Self {
            gmlan,
            other,
            class2,
        }
    }

    /// Load every table named by `config`.
    pub fn load(config: &Config) -> Result<Self, SeedKeyError> {
        let dir = config.tables_dir.as_path();
        Ok(Self {
            gmlan: load_source(dir, &config.gmlan)?,
            other: load_source(dir, &config.other)?,
            class2: load_source(dir, &config.class2)?,
        })
    }

    pub fn get(&self, id: TableId) -> &ParameterTable {
        match id {
            TableId::Gmlan => &self.gmlan,
            TableId::Other => &self.other,
            TableId::Class2 => &self.class2,
        }
    }

    /// Tables paired with their ids, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TableId, &ParameterTable)> {
        TableId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

fn load_source(dir: &Path, source: &TableSource) -> Result<ParameterTable, SeedKeyError> {
    let path = dir.join(&source.file);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if source.optional && e.kind() == io::ErrorKind::NotFound => {
            return Ok(ParameterTable::default());
        }
        Err(e) => return Err(table_io_error(&path, e)),
    };
    ParameterTable::parse(&text)
        .map_err(|e| SeedKeyError::InvalidTable(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        for id in TableId::ALL {
            assert_eq!(id.label().parse::<TableId>(), Ok(id));
            assert_eq!(id.label().to_uppercase().parse::<TableId>(), Ok(id));
        }
        assert_eq!("others".parse::<TableId>(), Ok(TableId::Other));
        assert!("vpw".parse::<TableId>().is_err());
    }

    #[test]
    fn registry_returns_matching_table() {
        let registry = TableRegistry::from_tables(
            ParameterTable::from_vec(vec![1; 13]),
            ParameterTable::from_vec(vec![2; 26]),
            ParameterTable::default(),
        );
        assert_eq!(registry.get(TableId::Gmlan).len(), 13);
        assert_eq!(registry.get(TableId::Other).len(), 26);
        assert!(registry.get(TableId::Class2).is_empty());
        let ids: Vec<TableId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, TableId::ALL.to_vec());
    }
}
