use crate::domain::model::{FieldGeometry, MoistureReading, WeatherSample};
use crate::utils::error::{AdvisorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Fatal check used when loading catalog tables: the value must lie inside
/// `[min, max]` or the whole load is rejected.
pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(AdvisorError::CatalogError {
            field: field_name.to_string(),
            reason: format!("value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(AdvisorError::CatalogError {
            field: field_name.to_string(),
            reason: format!("value {} must be positive", value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::CatalogError {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A non-fatal input anomaly. The calculation still runs; strict mode only
/// surfaces these to the caller as warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Inspect raw request inputs for values the formula will silently clamp.
/// Never fails: the permissive behavior of the calculator is the default and
/// the worst outcome is a zero or odd-but-defined number.
pub fn check_request_inputs(
    weather: &WeatherSample,
    moisture: &MoistureReading,
    field: &FieldGeometry,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if weather.tmax_c < weather.tmin_c {
        warnings.push(ValidationWarning {
            field: "weather".to_string(),
            message: format!(
                "tmax ({}) is below tmin ({}); temperature span treated as zero",
                weather.tmax_c, weather.tmin_c
            ),
        });
    }

    if !(0.0..=1.0).contains(&moisture.vwc) {
        warnings.push(ValidationWarning {
            field: "vwc".to_string(),
            message: format!("moisture {} is outside the plausible [0, 1] range", moisture.vwc),
        });
    }

    if field.value < 0.0 {
        warnings.push(ValidationWarning {
            field: "area".to_string(),
            message: format!("negative area {} yields zero liters", field.value),
        });
    }

    warnings
}
