use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the pipeline used to hardcode: endpoint URLs, query file
/// paths, the detection constants and the highlight thresholds. Defaults
/// match the published StatFin tables; a `statfin.toml` next to the binary
/// or `STATFIN_*` environment variables override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatfinConfig {
    pub population_url: String,
    pub employment_url: String,
    pub population_query_file: PathBuf,
    pub employment_query_file: PathBuf,
    pub region_dimension: String,
    pub population_dimension: String,
    pub population_value: String,
    pub employment_dimensions: Vec<String>,
    pub highlight_above: f64,
    pub highlight_below: f64,
    pub request_timeout_secs: u64,
}

impl Default for StatfinConfig {
    fn default() -> Self {
        Self {
            population_url:
                "https://pxdata.stat.fi/PxWeb/api/v1/fi/StatFin/vaerak/statfin_vaerak_pxt_11ra.px"
                    .to_string(),
            employment_url:
                "https://pxdata.stat.fi/PxWeb/api/v1/fi/StatFin/tyokay/statfin_tyokay_pxt_115b.px"
                    .to_string(),
            population_query_file: PathBuf::from("demos/population_query.json"),
            employment_query_file: PathBuf::from("demos/employment_query.json"),
            region_dimension: "Alue".to_string(),
            population_dimension: "Tiedot".to_string(),
            population_value: "vaesto".to_string(),
            employment_dimensions: vec![
                "Pääasiallinen toiminta".to_string(),
                "Sukupuoli".to_string(),
                "Ikä".to_string(),
            ],
            highlight_above: 45.0,
            highlight_below: 25.0,
            request_timeout_secs: 30,
        }
    }
}

impl StatfinConfig {
    pub fn load() -> Result<Self> {
        Self::figment().extract().map_err(|e| {
            AppError::ConfigError(format!("Failed to load configuration: {}", e))
        })
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(StatfinConfig::default()))
            .merge(Toml::file("statfin.toml"))
            .merge(Env::prefixed("STATFIN_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_canonical_values() {
        let config = StatfinConfig::default();
        assert!(config.population_url.contains("statfin_vaerak"));
        assert!(config.employment_url.contains("statfin_tyokay"));
        assert_eq!(config.region_dimension, "Alue");
        assert_eq!(config.population_value, "vaesto");
        assert_eq!(config.employment_dimensions.len(), 3);
        assert_eq!(config.highlight_above, 45.0);
        assert_eq!(config.highlight_below, 25.0);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config: StatfinConfig = Figment::from(Serialized::defaults(StatfinConfig::default()))
            .merge(Toml::string(
                r#"
                highlight_above = 50.0
                region_dimension = "Region"
                "#,
            ))
            .extract()
            .unwrap();
        assert_eq!(config.highlight_above, 50.0);
        assert_eq!(config.region_dimension, "Region");
        assert_eq!(config.highlight_below, 25.0);
    }
}
