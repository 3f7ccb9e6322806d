use serde::{Deserialize, Serialize};

/// PxWeb query body in wire shape:
/// `{"query":[{"code":...,"selection":{"filter":...,"values":[...]}}],"response":{"format":"json-stat2"}}`.
///
/// Loaded from a local query file, optionally normalized, then posted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPayload {
    #[serde(default)]
    pub query: Vec<DimensionSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<TableFormat>,
}

/// One dimension filter. Dimension codes are unique within a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSelector {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub filter: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFormat {
    pub format: String,
}

impl QueryPayload {
    /// Looks up a selector by dimension code.
    pub fn selector(&self, code: &str) -> Option<&DimensionSelector> {
        self.query.iter().find(|selector| selector.code == code)
    }
}
