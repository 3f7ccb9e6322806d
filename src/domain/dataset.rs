use serde::Deserialize;
use std::collections::HashMap;

/// JSON-Stat2 response, reduced to the parts we read. The flat `value` list
/// is ordered by ascending category index; entries may be JSON null for
/// suppressed cells.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetPayload {
    #[serde(default)]
    pub dimension: HashMap<String, Dimension>,
    pub value: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dimension {
    pub category: Category,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Code → position in the value list.
    pub index: HashMap<String, usize>,
    /// Code → display name. Codes without a label fall back to the code.
    #[serde(default)]
    pub label: HashMap<String, String>,
}

/// One region extracted from a dataset, in declared index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub code: String,
    pub name: String,
    pub value: f64,
}
