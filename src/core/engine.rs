use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::core::{estimator, moisture, planner};
use crate::domain::model::{
    DailyForecastEntry, FieldGeometry, IrrigationAdvice, MoistureReading, WeatherSample,
};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use crate::utils::validation::{check_request_inputs, ValidationWarning};

/// Where today's moisture figure comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum MoistureSource {
    /// A probe or hand-entered reading.
    Manual(f64),
    /// Draw a reading from the seeded simulator.
    Simulated,
}

/// One advisory request: everything the Estimator and Planner need for a
/// single field on a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub soil: String,
    pub stage: String,
    pub field: FieldGeometry,
    pub weather: WeatherSample,
    pub moisture: MoistureSource,
    pub horizon_days: usize,
    pub start_date: NaiveDate,
    /// Seeds both the simulated moisture draw and the forecast jitter, so a
    /// request replays bit-identically.
    pub seed: u64,
}

/// The full advisory output handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub soil: String,
    pub stage: String,
    pub area_m2: f64,
    pub moisture: MoistureReading,
    pub advice: IrrigationAdvice,
    pub plan: Vec<DailyForecastEntry>,
    /// Non-fatal input anomalies; the numbers above were computed anyway.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<ValidationWarningReport>,
}

/// Serializable projection of a validation warning for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarningReport {
    pub field: String,
    pub message: String,
}

impl From<ValidationWarning> for ValidationWarningReport {
    fn from(w: ValidationWarning) -> Self {
        Self {
            field: w.field,
            message: w.message,
        }
    }
}

/// Runs one request through the Estimator and the Planner against an
/// immutable catalog.
pub struct AdvisoryEngine<C: CatalogProvider> {
    catalog: C,
}

impl<C: CatalogProvider> AdvisoryEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn run(&self, request: &AdvisoryRequest) -> Result<AdvisoryReport> {
        let soil = self.catalog.soil(&request.soil)?;
        let stage = self.catalog.stage(&request.stage)?;
        let area_m2 = request.field.area_m2();

        // One generator seeds both the moisture draw and the jitter, so the
        // whole report replays from a single seed.
        let mut rng = StdRng::seed_from_u64(request.seed);

        let moisture = match request.moisture {
            MoistureSource::Manual(vwc) => MoistureReading { vwc },
            MoistureSource::Simulated => {
                let reading = moisture::simulate_reading(&mut rng);
                tracing::debug!("simulated moisture reading: {:.3}", reading.vwc);
                reading
            }
        };

        let warnings = check_request_inputs(&request.weather, &moisture, &request.field);

        tracing::debug!(
            "estimating: soil={} stage={} area={:.1} m²",
            soil.name,
            stage.name,
            area_m2
        );
        let advice = estimator::estimate_irrigation(soil, stage, &moisture, area_m2, &request.weather);
        tracing::info!(
            "advice: status={} liters={:.0} deficit={:.1} mm etc={:.1} mm",
            advice.status,
            advice.liters,
            advice.deficit_mm,
            advice.etc_mm
        );

        let plan = planner::project_plan(
            stage,
            &request.weather,
            area_m2,
            request.horizon_days,
            request.start_date,
            &mut rng,
        );
        tracing::info!("projected {} day irrigation plan", plan.len());

        Ok(AdvisoryReport {
            soil: soil.name.clone(),
            stage: stage.name.clone(),
            area_m2,
            moisture,
            advice,
            plan,
            warnings: warnings.into_iter().map(Into::into).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::Catalog;
    use approx::assert_relative_eq;

    fn request() -> AdvisoryRequest {
        AdvisoryRequest {
            soil: "loam".to_string(),
            stage: "vegetative".to_string(),
            field: FieldGeometry::new(1000.0, "m2"),
            weather: WeatherSample {
                tmin_c: 22.0,
                tmax_c: 33.0,
            },
            moisture: MoistureSource::Manual(0.16),
            horizon_days: 7,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            seed: 42,
        }
    }

    #[test]
    fn test_engine_runs_estimator_and_planner() {
        let engine = AdvisoryEngine::new(Catalog::builtin());
        let report = engine.run(&request()).unwrap();

        assert_eq!(report.soil, "loam");
        assert_relative_eq!(report.area_m2, 1000.0);
        assert_relative_eq!(report.advice.deficit_mm, 6.0, max_relative = 1e-3);
        assert_eq!(report.plan.len(), 7);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_engine_rejects_unknown_soil() {
        let engine = AdvisoryEngine::new(Catalog::builtin());
        let mut req = request();
        req.soil = "peat".to_string();
        assert!(engine.run(&req).is_err());
    }

    #[test]
    fn test_simulated_moisture_is_seed_stable() {
        let engine = AdvisoryEngine::new(Catalog::builtin());
        let mut req = request();
        req.moisture = MoistureSource::Simulated;

        let a = engine.run(&req).unwrap();
        let b = engine.run(&req).unwrap();
        assert_eq!(a.moisture.vwc, b.moisture.vwc);
        for (x, y) in a.plan.iter().zip(&b.plan) {
            assert_relative_eq!(x.liters_needed, y.liters_needed);
        }
    }

    #[test]
    fn test_warnings_do_not_change_results() {
        let engine = AdvisoryEngine::new(Catalog::builtin());
        let mut req = request();
        req.weather = WeatherSample {
            tmin_c: 33.0,
            tmax_c: 22.0,
        };

        let report = engine.run(&req).unwrap();
        assert_eq!(report.warnings.len(), 1);
        // Inverted extremes clamp the span: demand term is zero, deficit stays.
        assert_relative_eq!(report.advice.etc_mm, 0.0);
        assert_relative_eq!(report.advice.deficit_mm, 6.0, max_relative = 1e-3);
    }
}
