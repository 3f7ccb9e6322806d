/// One output table row. Population is authoritative; employment and the
/// derived percentage are absent when the region has no employment match.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub code: String,
    pub name: String,
    pub population: f64,
    pub employment: Option<f64>,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightCategory {
    High,
    Low,
    Neutral,
}
