use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};

use sinchai::config::catalog::Catalog;
use sinchai::core::engine::{AdvisoryEngine, AdvisoryRequest, MoistureSource};
use sinchai::core::estimator::simple_eto_mm_per_day;
use sinchai::domain::model::{FieldGeometry, MoistureStatus, WeatherSample};

fn loam_request() -> AdvisoryRequest {
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
fn dry_loam_field_needs_water() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let report = engine.run(&loam_request()).unwrap();

    assert_eq!(report.advice.status, MoistureStatus::NeedsWater);
    assert_relative_eq!(report.advice.deficit_mm, 6.0, max_relative = 1e-3);

    let eto = simple_eto_mm_per_day(22.0, 33.0);
    assert_relative_eq!(report.advice.etc_mm, 0.95 * eto, max_relative = 1e-12);
    assert_relative_eq!(
        report.advice.liters,
        (report.advice.deficit_mm + report.advice.etc_mm) * 1000.0,
        max_relative = 1e-12
    );
}

#[test]
fn wet_field_is_sufficient_with_zero_deficit() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let mut request = loam_request();
    request.moisture = MoistureSource::Manual(0.32);

    let report = engine.run(&request).unwrap();
    assert_eq!(report.advice.status, MoistureStatus::Sufficient);
    assert_relative_eq!(report.advice.deficit_mm, 0.0);
    // ETc demand still accrues even when no deficit exists.
    assert!(report.advice.liters > 0.0);
}

#[test]
fn flat_temperatures_zero_out_demand() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let mut request = loam_request();
    request.weather = WeatherSample {
        tmin_c: 20.0,
        tmax_c: 20.0,
    };
    request.moisture = MoistureSource::Manual(0.20);

    let report = engine.run(&request).unwrap();
    assert_relative_eq!(report.advice.etc_mm, 0.0);
    assert_relative_eq!(report.advice.liters, 0.0);
    assert_eq!(report.advice.status, MoistureStatus::Monitor);
}

#[test]
fn plan_covers_consecutive_dates_from_start() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let report = engine.run(&loam_request()).unwrap();

    assert_eq!(report.plan.len(), 7);
    let start = loam_request().start_date;
    for (i, entry) in report.plan.iter().enumerate() {
        assert_eq!(entry.date, start + Duration::days(i as i64));
    }
}

#[test]
fn report_replays_bit_identically_from_one_seed() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let mut request = loam_request();
    request.moisture = MoistureSource::Simulated;

    let first = engine.run(&request).unwrap();
    let second = engine.run(&request).unwrap();

    assert_eq!(first.moisture.vwc, second.moisture.vwc);
    assert_eq!(first.advice.liters, second.advice.liters);
    for (a, b) in first.plan.iter().zip(&second.plan) {
        assert_eq!(a.etc_mm, b.etc_mm);
        assert_eq!(a.liters_needed, b.liters_needed);
    }
}

#[test]
fn acre_request_scales_liters_with_area() {
    let engine = AdvisoryEngine::new(Catalog::builtin());

    let mut small = loam_request();
    small.field = FieldGeometry::new(0.25, "acre");
    let mut large = loam_request();
    large.field = FieldGeometry::new(1.0, "acre");

    let small_report = engine.run(&small).unwrap();
    let large_report = engine.run(&large).unwrap();

    assert_relative_eq!(small_report.area_m2, 0.25 * 4046.8564224);
    assert!(large_report.advice.liters > small_report.advice.liters);
    assert_relative_eq!(
        large_report.advice.liters,
        small_report.advice.liters * 4.0,
        max_relative = 1e-9
    );
}

#[test]
fn anomalous_inputs_warn_but_still_compute() {
    let engine = AdvisoryEngine::new(Catalog::builtin());
    let mut request = loam_request();
    request.weather = WeatherSample {
        tmin_c: 33.0,
        tmax_c: 22.0,
    };
    request.field = FieldGeometry::new(-10.0, "m2");

    let report = engine.run(&request).unwrap();
    assert_eq!(report.warnings.len(), 2);
    assert_relative_eq!(report.advice.etc_mm, 0.0);
    assert_relative_eq!(report.advice.liters, 0.0);
}

#[test]
fn custom_catalog_overrides_builtin_tables() {
    let toml_content = r#"
[[soil]]
name = "silt"
target_low = 0.20
target_high = 0.30
raw_mm_per_m = 100.0

[[stage]]
name = "vegetative"
root_depth_m = 0.5
kc = 1.0
"#;
    let catalog = Catalog::from_toml_str(toml_content).unwrap();
    let engine = AdvisoryEngine::new(catalog);

    let mut request = loam_request();
    request.soil = "silt".to_string();
    let report = engine.run(&request).unwrap();

    // deficit_frac = (0.20 - 0.16) / 0.20 = 0.2, times RAW 100 and root 0.5
    assert_relative_eq!(report.advice.deficit_mm, 10.0, max_relative = 1e-9);

    let mut unknown = loam_request();
    unknown.soil = "loam".to_string();
    assert!(engine.run(&unknown).is_err());
}
