use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::core::estimator::simple_eto_mm_per_day;
use crate::domain::model::{DailyForecastEntry, GrowthStage, WeatherSample};

/// Project crop water demand over a rolling window of consecutive days.
///
/// Each day perturbs the base extremes with independent uniform jitter on
/// [-1, 1] °C, a stand-in for future-weather data that is not available. The
/// jittered pair may come out unordered; the ETo formula's span clamp covers
/// that, so no reordering happens here.
///
/// Intentional asymmetry with the Estimator: the forecast carries the ETc
/// demand term only and no moisture-deficit catch-up. Today's deficit is a
/// one-off correction that belongs to the day of the reading, not to every
/// projected day.
pub fn project_plan<R: Rng>(
    stage: &GrowthStage,
    base_weather: &WeatherSample,
    area_m2: f64,
    horizon_days: usize,
    start_date: NaiveDate,
    rng: &mut R,
) -> Vec<DailyForecastEntry> {
    (0..horizon_days)
        .map(|i| {
            let tmin_i = base_weather.tmin_c + rng.gen_range(-1.0..=1.0);
            let tmax_i = base_weather.tmax_c + rng.gen_range(-1.0..=1.0);

            let eto = simple_eto_mm_per_day(tmin_i, tmax_i);
            let etc_mm = stage.kc * eto;

            DailyForecastEntry {
                date: start_date + Duration::days(i as i64),
                etc_mm,
                liters_needed: etc_mm * area_m2,
            }
        })
        .collect()
}
