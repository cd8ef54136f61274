use super::{CostFieldError, CustomCostField};
use crate::model::network::WayId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// construction-time configuration for a [`CustomCostField`]. factors come
/// either inline or from a two-column `way_id,factor` CSV file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CustomCostConfig {
    /// free-text label used in logs and reporting
    pub display_key: String,
    /// signed weight applied to every factor
    pub sensitivity_coefficient: f64,
    /// inline factor mapping from way id to non-negative multiplier
    #[serde(default)]
    pub factors: Option<HashMap<i64, f64>>,
    /// CSV file with a `way_id,factor` header and one row per way
    #[serde(default)]
    pub factors_file: Option<String>,
    /// treat ways missing from the mapping as zero addition instead of
    /// failing the query
    #[serde(default)]
    pub allow_missing_factors: bool,
}

#[derive(Debug, Deserialize)]
struct FactorRow {
    way_id: i64,
    factor: f64,
}

impl CustomCostConfig {
    /// builds the configured cost field, reading the factor file if one was
    /// given. inline factors take precedence over a file.
    pub fn build(&self) -> Result<CustomCostField, CostFieldError> {
        let factors: HashMap<WayId, f64> = match (&self.factors, &self.factors_file) {
            (Some(inline), _) => inline.iter().map(|(id, f)| (WayId(*id), *f)).collect(),
            (None, Some(file)) => read_factors_file(Path::new(file))?,
            (None, None) => {
                return Err(CostFieldError::ConfigurationError(
                    "one of 'factors' or 'factors_file' must be provided".to_string(),
                ))
            }
        };
        CustomCostField::new(
            &self.display_key,
            self.sensitivity_coefficient,
            factors,
            self.allow_missing_factors,
        )
    }
}

/// reads a `way_id,factor` CSV table into a factor mapping.
fn read_factors_file(path: &Path) -> Result<HashMap<WayId, f64>, CostFieldError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| CostFieldError::FactorFileError(path.display().to_string(), e))?;
    let mut factors = HashMap::new();
    for row in reader.deserialize::<FactorRow>() {
        let row = row.map_err(|e| CostFieldError::FactorFileError(path.display().to_string(), e))?;
        factors.insert(WayId(row.way_id), row.factor);
    }
    Ok(factors)
}

impl TryFrom<&serde_json::Value> for CustomCostField {
    type Error = CostFieldError;

    /// builds a custom cost field from the JSON configuration section of a
    /// query or network build.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let config: CustomCostConfig = serde_json::from_value(value.clone()).map_err(|e| {
            CostFieldError::ConfigurationError(format!(
                "unable to parse custom cost configuration: {e}"
            ))
        })?;
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cost::CostField;
    use serde_json::json;

    #[test]
    fn test_build_from_inline_factors() {
        let value = json!({
            "display_key": "aqi",
            "sensitivity_coefficient": 2.0,
            "factors": { "1": 0.25, "2": 0.5 }
        });
        let field = CustomCostField::try_from(&value).unwrap();
        assert_eq!(field.display_key(), "aqi");
        assert_eq!(field.sensitivity_coefficient(), 2.0);
        assert_eq!(field.display_value(WayId(2)), Some(0.5));
        assert!(!field.allow_missing_factors());
    }

    #[test]
    fn test_build_without_factors_fails() {
        let value = json!({
            "display_key": "aqi",
            "sensitivity_coefficient": 1.0
        });
        let result = CustomCostField::try_from(&value);
        assert!(matches!(
            result,
            Err(CostFieldError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_build_from_factors_file() {
        let path = std::env::temp_dir().join("wayfield_custom_cost_config_factors.csv");
        std::fs::write(&path, "way_id,factor\n10,0.5\n11,1.25\n").unwrap();

        let config = CustomCostConfig {
            display_key: "noise".to_string(),
            sensitivity_coefficient: 1.0,
            factors: None,
            factors_file: Some(path.display().to_string()),
            allow_missing_factors: true,
        };
        let field = config.build().unwrap();
        assert_eq!(field.display_value(WayId(10)), Some(0.5));
        assert_eq!(field.display_value(WayId(11)), Some(1.25));
        assert!(field.allow_missing_factors());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_factors_file_fails() {
        let config = CustomCostConfig {
            display_key: "noise".to_string(),
            sensitivity_coefficient: 1.0,
            factors: None,
            factors_file: Some("/nonexistent/factors.csv".to_string()),
            allow_missing_factors: false,
        };
        assert!(matches!(
            config.build(),
            Err(CostFieldError::FactorFileError(_, _))
        ));
    }
}
