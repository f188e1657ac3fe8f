use rand::Rng;

use crate::domain::model::MoistureReading;

const SIMULATED_MEAN: f64 = 0.16;
const SIMULATED_STDDEV: f64 = 0.03;
const VWC_CEILING: f64 = 0.6;

/// Draw a simulated volumetric water content reading when no probe value is
/// supplied: normal around a typical mid-dry field (mean 0.16, stddev 0.03),
/// clamped to the physically plausible [0, 0.6] band.
///
/// Sampling uses the Box–Muller transform over two uniform draws, so a seeded
/// generator reproduces the same reading run to run.
pub fn simulate_reading<R: Rng>(rng: &mut R) -> MoistureReading {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let standard_normal = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();

    let vwc = (SIMULATED_MEAN + SIMULATED_STDDEV * standard_normal).clamp(0.0, VWC_CEILING);
    MoistureReading { vwc }
}
