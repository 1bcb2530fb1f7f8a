//! Artifact payloads: what a producer yields and what the cache persists.

mod table;

pub use table::{Table, TableError, TableReadError};

/// A collection result: rectangular named-column data, or raw text when the
/// source yields something non-tabular (a scalar, a message body, a blob of
/// rendered SQL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Table(Table),
    Text(String),
}

impl Artifact {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Artifact::Table(t) => Some(t),
            Artifact::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Artifact::Table(_) => None,
            Artifact::Text(s) => Some(s),
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Artifact::Table(_))
    }
}

impl From<Table> for Artifact {
    fn from(table: Table) -> Self {
        Artifact::Table(table)
    }
}

impl From<String> for Artifact {
    fn from(text: String) -> Self {
        Artifact::Text(text)
    }
}
