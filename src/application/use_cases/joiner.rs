use crate::domain::dataset::Record;
use crate::domain::table::JoinedRow;
use std::collections::HashMap;

/// Joins employment values onto the population records by region code.
///
/// Population drives both membership and order: the output has exactly one
/// row per population record. A region missing from the employment set gets
/// absent employment and percentage values rather than an error. Duplicate
/// employment codes resolve last-write-wins.
pub fn join_rows(population: &[Record], employment: &[Record]) -> Vec<JoinedRow> {
    let employment_by_code: HashMap<&str, f64> = employment
        .iter()
        .map(|record| (record.code.as_str(), record.value))
        .collect();

    population
        .iter()
        .map(|record| {
            let employment = employment_by_code.get(record.code.as_str()).copied();
            let percentage = match employment {
                Some(employed) if record.value > 0.0 => {
                    Some(employed / record.value * 100.0)
                }
                _ => None,
            };
            JoinedRow {
                code: record.code.clone(),
                name: record.name.clone(),
                population: record.value,
                employment,
                percentage,
            }
        })
        .collect()
}
