use crate::domain::error::{AppError, Result};
use crate::domain::query::QueryPayload;
use std::path::Path;

/// Reads one query body from disk. The files are posted as-is after
/// normalization, so the decode is the only validation they get.
pub async fn load_query_file(path: &Path) -> Result<QueryPayload> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::LoadError(format!("Failed to load {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::FormatError(format!("Invalid query payload {}: {}", path.display(), e))
    })
}

/// Loads both query files concurrently; either failure is fatal.
pub async fn load_query_pair(
    population_path: &Path,
    employment_path: &Path,
) -> Result<(QueryPayload, QueryPayload)> {
    tokio::try_join!(
        load_query_file(population_path),
        load_query_file(employment_path),
    )
}
