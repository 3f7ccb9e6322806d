use crate::domain::dataset::{DatasetPayload, Record};
use crate::domain::error::{AppError, Result};

/// Extracts the region rows from a JSON-Stat2 dataset.
///
/// JSON-Stat2 ships one flat value list whose order follows the ascending
/// category index of the dimensions; with the non-region dimensions filtered
/// to a single item, position i in the value list belongs to the region with
/// index i. That positional contract is relied on here and only guarded by
/// the count check.
pub struct DatasetParser {
    region_dimension: String,
}

impl DatasetParser {
    pub fn new(region_dimension: impl Into<String>) -> Self {
        Self {
            region_dimension: region_dimension.into(),
        }
    }

    pub fn parse(&self, dataset: &DatasetPayload) -> Result<Vec<Record>> {
        let region = dataset.dimension.get(&self.region_dimension).ok_or_else(|| {
            AppError::FormatError(format!(
                "Missing region dimension '{}' in dataset",
                self.region_dimension
            ))
        })?;

        let mut order: Vec<(&String, usize)> = region
            .category
            .index
            .iter()
            .map(|(code, index)| (code, *index))
            .collect();
        order.sort_by_key(|&(_, index)| index);

        if order.len() != dataset.value.len() {
            return Err(AppError::FormatError(format!(
                "Region code count {} does not match value count {}",
                order.len(),
                dataset.value.len()
            )));
        }

        order
            .into_iter()
            .enumerate()
            .map(|(position, (code, _))| {
                let value = dataset.value[position].ok_or_else(|| {
                    AppError::FormatError(format!("Null value for region '{}'", code))
                })?;
                let name = region
                    .category
                    .label
                    .get(code)
                    .cloned()
                    .unwrap_or_else(|| code.clone());
                Ok(Record {
                    code: code.clone(),
                    name,
                    value,
                })
            })
            .collect()
    }
}
