use crate::domain::model::{
    GrowthStage, IrrigationAdvice, MoistureReading, MoistureStatus, SoilProfile, WeatherSample,
};

/// Guards the deficit division when a soil's target_low is zero.
const TARGET_LOW_EPSILON: f64 = 1e-6;

/// Simplified Hargreaves-style reference evapotranspiration [mm/day] from the
/// daily temperature extremes alone. Trades accuracy for not needing
/// humidity, radiation or wind inputs.
///
/// The span is clamped to zero for unordered pairs, and a cold day where
/// `tmean + 17.8` goes negative is floored to zero rather than treated as an
/// error.
pub fn simple_eto_mm_per_day(tmin_c: f64, tmax_c: f64) -> f64 {
    let tmean = (tmin_c + tmax_c) / 2.0;
    let td = (tmax_c - tmin_c).max(0.0);
    (0.0023 * (tmean + 17.8) * td.sqrt() * 10.0).max(0.0)
}

/// Today's irrigation recommendation for one field.
///
/// The liters figure combines the moisture deficit (how far the reading sits
/// below the soil's target band, scaled by RAW capacity and root depth) with
/// today's crop evapotranspiration. The status classification looks only at
/// the raw reading versus the target band and is independent of the liters
/// figure.
///
/// Permissive by contract: zero temperature span, zero target_low, inverted
/// extremes and non-positive areas all clamp to zero instead of failing.
pub fn estimate_irrigation(
    soil: &SoilProfile,
    stage: &GrowthStage,
    moisture: &MoistureReading,
    area_m2: f64,
    weather: &WeatherSample,
) -> IrrigationAdvice {
    let deficit_frac =
        (soil.target_low - moisture.vwc).max(0.0) / soil.target_low.max(TARGET_LOW_EPSILON);
    let deficit_mm = deficit_frac * soil.raw_mm_per_m * stage.root_depth_m;

    let eto = simple_eto_mm_per_day(weather.tmin_c, weather.tmax_c);
    let etc_mm = stage.kc * eto;

    let total_mm = (deficit_mm + etc_mm).max(0.0);
    let liters = (total_mm * area_m2).max(0.0);

    let status = if moisture.vwc < soil.target_low {
        MoistureStatus::NeedsWater
    } else if moisture.vwc > soil.target_high {
        MoistureStatus::Sufficient
    } else {
        MoistureStatus::Monitor
    };

    IrrigationAdvice {
        status,
        liters,
        deficit_mm,
        etc_mm,
    }
}
