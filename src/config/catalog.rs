use crate::domain::model::{GrowthStage, SoilProfile};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable soil and growth-stage tables. Built once at startup, either from
/// the built-in defaults or from a user-supplied TOML file, and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "soil")]
    pub soils: Vec<SoilProfile>,
    #[serde(rename = "stage")]
    pub stages: Vec<GrowthStage>,
}

impl Catalog {
    /// The default tables of the advisory tool: three broad soil textures and
    /// four crop phases.
    pub fn builtin() -> Self {
        Catalog {
            soils: vec![
                SoilProfile {
                    name: "sandy".to_string(),
                    target_low: 0.10,
                    target_high: 0.18,
                    raw_mm_per_m: 60.0,
                },
                SoilProfile {
                    name: "loam".to_string(),
                    target_low: 0.18,
                    target_high: 0.28,
                    raw_mm_per_m: 90.0,
                },
                SoilProfile {
                    name: "clay".to_string(),
                    target_low: 0.25,
                    target_high: 0.35,
                    raw_mm_per_m: 120.0,
                },
            ],
            stages: vec![
                GrowthStage {
                    name: "initial".to_string(),
                    root_depth_m: 0.3,
                    kc: 0.6,
                },
                GrowthStage {
                    name: "vegetative".to_string(),
                    root_depth_m: 0.6,
                    kc: 0.95,
                },
                GrowthStage {
                    name: "flowering".to_string(),
                    root_depth_m: 0.8,
                    kc: 1.05,
                },
                GrowthStage {
                    name: "fruiting".to_string(),
                    root_depth_m: 1.0,
                    kc: 0.9,
                },
            ],
        }
    }

    /// Load catalog tables from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse catalog tables from a TOML string and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content).map_err(|e| AdvisorError::ConfigError {
            message: format!("catalog TOML parsing error: {}", e),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.soils.is_empty() {
            return Err(AdvisorError::ConfigError {
                message: "catalog defines no soil profiles".to_string(),
            });
        }
        if self.stages.is_empty() {
            return Err(AdvisorError::ConfigError {
                message: "catalog defines no growth stages".to_string(),
            });
        }

        for soil in &self.soils {
            validate_non_empty_string("soil.name", &soil.name)?;
            validate_range("soil.target_low", soil.target_low, 0.0, 1.0)?;
            validate_range("soil.target_high", soil.target_high, 0.0, 1.0)?;
            if soil.target_low >= soil.target_high {
                return Err(AdvisorError::CatalogError {
                    field: format!("soil.{}", soil.name),
                    reason: format!(
                        "target_low ({}) must be below target_high ({})",
                        soil.target_low, soil.target_high
                    ),
                });
            }
            validate_positive("soil.raw_mm_per_m", soil.raw_mm_per_m)?;
        }

        for stage in &self.stages {
            validate_non_empty_string("stage.name", &stage.name)?;
            validate_positive("stage.root_depth_m", stage.root_depth_m)?;
            validate_positive("stage.kc", stage.kc)?;
        }

        Ok(())
    }
}

impl CatalogProvider for Catalog {
    fn soil(&self, name: &str) -> Result<&SoilProfile> {
        let wanted = name.trim().to_ascii_lowercase();
        self.soils
            .iter()
            .find(|s| s.name == wanted)
            .ok_or_else(|| AdvisorError::UnknownSoil {
                name: name.to_string(),
            })
    }

    fn stage(&self, name: &str) -> Result<&GrowthStage> {
        let wanted = name.trim().to_ascii_lowercase();
        self.stages
            .iter()
            .find(|s| s.name == wanted)
            .ok_or_else(|| AdvisorError::UnknownStage {
                name: name.to_string(),
            })
    }

    fn soil_names(&self) -> Vec<&str> {
        self.soils.iter().map(|s| s.name.as_str()).collect()
    }

    fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name.as_str()).collect()
    }
}
