use crate::domain::error::{AppError, Result};
use crate::domain::query::QueryPayload;
use std::collections::HashSet;

/// The two query payloads, told apart by their dimension shape.
#[derive(Debug, Clone)]
pub struct ClassifiedQueries {
    pub population: QueryPayload,
    pub employment: QueryPayload,
}

/// Decides which of two loaded query payloads targets the population table
/// and which the employment table. The detection constants come from config
/// so tests (and future table revisions) can substitute their own.
pub struct QueryClassifier {
    population_dimension: String,
    population_value: String,
    employment_dimensions: Vec<String>,
}

impl QueryClassifier {
    pub fn from_config(
        population_dimension: String,
        population_value: String,
        employment_dimensions: Vec<String>,
    ) -> Self {
        Self {
            population_dimension,
            population_value,
            employment_dimensions,
        }
    }

    /// True when the payload selects the population figure: a selector whose
    /// code matches the population dimension and whose values include the
    /// population value.
    pub fn is_population_query(&self, payload: &QueryPayload) -> bool {
        payload.query.iter().any(|selector| {
            selector.code == self.population_dimension
                && selector
                    .selection
                    .as_ref()
                    .map(|s| s.values.iter().any(|v| v == &self.population_value))
                    .unwrap_or(false)
        })
    }

    /// True when the payload's dimension codes cover all required employment
    /// dimensions.
    pub fn is_employment_query(&self, payload: &QueryPayload) -> bool {
        let codes: HashSet<&str> = payload
            .query
            .iter()
            .map(|selector| selector.code.as_str())
            .collect();
        self.employment_dimensions
            .iter()
            .all(|dim| codes.contains(dim.as_str()))
    }

    /// Assigns the pair order-independently. Fails when neither assignment
    /// satisfies both predicates.
    pub fn classify_pair(
        &self,
        a: QueryPayload,
        b: QueryPayload,
    ) -> Result<ClassifiedQueries> {
        if self.is_population_query(&a) && self.is_employment_query(&b) {
            Ok(ClassifiedQueries {
                population: a,
                employment: b,
            })
        } else if self.is_population_query(&b) && self.is_employment_query(&a) {
            Ok(ClassifiedQueries {
                population: b,
                employment: a,
            })
        } else {
            Err(AppError::ClassificationError(
                "Could not detect population vs employment queries".to_string(),
            ))
        }
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::from_config(
            "Tiedot".to_string(),
            "vaesto".to_string(),
            vec![
                "Pääasiallinen toiminta".to_string(),
                "Sukupuoli".to_string(),
                "Ikä".to_string(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::{DimensionSelector, Selection};

    fn selector(code: &str, values: &[&str]) -> DimensionSelector {
        DimensionSelector {
            code: code.to_string(),
            selection: Some(Selection {
                filter: "item".to_string(),
                values: values.iter().map(|v| v.to_string()).collect(),
            }),
        }
    }

    fn population_payload() -> QueryPayload {
        QueryPayload {
            query: vec![
                selector("Alue", &["KU020"]),
                selector("Tiedot", &["vaesto"]),
                selector("Vuosi", &["2024"]),
            ],
            response: None,
        }
    }

    fn employment_payload() -> QueryPayload {
        QueryPayload {
            query: vec![
                selector("Alue", &["KU020"]),
                selector("Pääasiallinen toiminta", &["11"]),
                selector("Sukupuoli", &["SSS"]),
                selector("Ikä", &["SSS"]),
            ],
            response: None,
        }
    }

    #[test]
    fn test_population_predicate() {
        let classifier = QueryClassifier::default();
        assert!(classifier.is_population_query(&population_payload()));
        assert!(!classifier.is_population_query(&employment_payload()));
    }

    #[test]
    fn test_employment_predicate() {
        let classifier = QueryClassifier::default();
        assert!(classifier.is_employment_query(&employment_payload()));
        assert!(!classifier.is_employment_query(&population_payload()));
    }

    #[test]
    fn test_population_predicate_requires_matching_value() {
        let classifier = QueryClassifier::default();
        let payload = QueryPayload {
            query: vec![selector("Tiedot", &["tyolliset"])],
            response: None,
        };
        assert!(!classifier.is_population_query(&payload));
    }

    #[test]
    fn test_classify_pair_in_order() {
        let classifier = QueryClassifier::default();
        let result = classifier
            .classify_pair(population_payload(), employment_payload())
            .unwrap();
        assert!(result.population.selector("Tiedot").is_some());
        assert!(result.employment.selector("Sukupuoli").is_some());
    }

    #[test]
    fn test_classify_pair_swapped_order() {
        let classifier = QueryClassifier::default();
        let result = classifier
            .classify_pair(employment_payload(), population_payload())
            .unwrap();
        assert!(result.population.selector("Tiedot").is_some());
        assert!(result.employment.selector("Sukupuoli").is_some());
    }

    #[test]
    fn test_classify_pair_fails_when_neither_assignment_holds() {
        let classifier = QueryClassifier::default();
        let result = classifier.classify_pair(population_payload(), population_payload());
        assert!(matches!(result, Err(AppError::ClassificationError(_))));
    }
}
