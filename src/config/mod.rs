pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::utils::error::{AdvisorError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sinchai")]
#[command(about = "Irrigation advisory calculator with a short-horizon water demand planner")]
pub struct CliConfig {
    /// Crop name, informational only.
    #[arg(long, default_value = "tomato")]
    pub crop: String,

    /// Soil type (built-ins: sandy, loam, clay).
    #[arg(long, default_value = "loam")]
    pub soil: String,

    /// Growth stage (built-ins: initial, vegetative, flowering, fruiting).
    #[arg(long, default_value = "vegetative")]
    pub stage: String,

    /// Field area in the chosen unit.
    #[arg(long, default_value = "0.25")]
    pub area: f64,

    /// Area unit: acre, hectare or m2. Unknown units are taken as m2 values.
    #[arg(long, default_value = "acre")]
    pub area_unit: String,

    /// Today's minimum temperature [°C].
    #[arg(long, default_value = "22.0")]
    pub tmin: f64,

    /// Today's maximum temperature [°C].
    #[arg(long, default_value = "33.0")]
    pub tmax: f64,

    /// Measured volumetric water content (0–0.6). Omit to simulate a reading.
    #[arg(long)]
    pub vwc: Option<f64>,

    /// Seed for the simulated moisture reading and forecast jitter.
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of forecast days in the irrigation plan.
    #[arg(long, default_value = "7")]
    pub horizon: usize,

    /// Optional TOML file overriding the built-in soil/stage tables.
    #[arg(long)]
    pub catalog_file: Option<String>,

    /// Directory the plan export is written to.
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats for the plan table.
    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<String>,

    /// Warn about inputs the formula would silently clamp.
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(AdvisorError::ConfigError {
                message: "horizon must be at least 1 day".to_string(),
            });
        }

        let valid_formats = ["csv", "json"];
        for format in &self.formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(AdvisorError::ConfigError {
                    message: format!(
                        "unsupported export format '{}'; valid formats: {}",
                        format,
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
