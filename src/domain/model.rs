use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A soil category with its target volumetric-water-content band and
/// readily-available-water capacity (mm of extractable water per meter of
/// root depth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilProfile {
    pub name: String,
    /// Lower bound of the target VWC band, fraction in [0, 1].
    pub target_low: f64,
    /// Upper bound of the target VWC band, fraction in [0, 1].
    pub target_high: f64,
    /// RAW capacity [mm per m of root depth].
    pub raw_mm_per_m: f64,
}

/// A crop growth phase: effective root depth and the crop coefficient (Kc)
/// that scales reference evapotranspiration to crop water use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthStage {
    pub name: String,
    pub root_depth_m: f64,
    pub kc: f64,
}

/// Daily temperature extremes. `tmax_c >= tmin_c` is expected but not
/// enforced; downstream math clamps the span to zero instead of failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherSample {
    pub tmin_c: f64,
    pub tmax_c: f64,
}

/// A single volumetric water content reading (fraction of soil volume).
/// Expected range 0–0.6, not strictly bounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoistureReading {
    pub vwc: f64,
}

/// Field area with a unit tag, normalized to square meters on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub value: f64,
    pub unit: String,
}

impl FieldGeometry {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn area_m2(&self) -> f64 {
        area_to_square_meters(self.value, &self.unit)
    }
}

/// Convert an area value to square meters. Unrecognized units pass the value
/// through unchanged rather than failing.
pub fn area_to_square_meters(value: f64, unit: &str) -> f64 {
    match unit.trim().to_ascii_lowercase().as_str() {
        "acre" | "acres" => value * 4046.856_422_4,
        "hectare" | "hectares" | "ha" => value * 10_000.0,
        "m2" | "m²" | "sqm" | "square-meter" | "square_meter" => value,
        _ => value,
    }
}

/// Classification of today's soil moisture against the soil's target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureStatus {
    /// VWC below the target band: irrigate now.
    NeedsWater,
    /// VWC above the target band: no irrigation needed.
    Sufficient,
    /// VWC inside the band: keep watching.
    Monitor,
}

impl std::fmt::Display for MoistureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MoistureStatus::NeedsWater => "needs water",
            MoistureStatus::Sufficient => "sufficient",
            MoistureStatus::Monitor => "monitor",
        };
        f.write_str(label)
    }
}

/// The Estimator's output for the current day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationAdvice {
    pub status: MoistureStatus,
    /// Total water to apply today [liters], >= 0.
    pub liters: f64,
    /// Moisture deficit component [mm], >= 0.
    pub deficit_mm: f64,
    /// Crop evapotranspiration component [mm], >= 0.
    pub etc_mm: f64,
}

/// One row of the Planner's forecast. Holds crop demand only; the deficit
/// catch-up term is deliberately absent (see `core::planner`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub etc_mm: f64,
    pub liters_needed: f64,
}
