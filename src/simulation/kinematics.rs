//! Fixed-grid kinematics of the descent-and-loop model
//!
//! Builds the half-open time grid `[0, t1 + t2)` with step `DT` and
//! evaluates the analytic phases at every sample. No state is stepped:
//! each sample depends only on its own time.

use tracing::{debug, warn};

use super::params::{SimulationParameters, DT};
use super::phases::{Phase, PhaseSet};
use super::states::SimulationResult;
use crate::configuration::config::RadiusPolicy;
use crate::error::SimulationError;

/// Sample times `0, DT, 2*DT, ...` strictly below `total`
pub fn time_grid(total: f64) -> Vec<f64> {
    if total.is_nan() || total <= 0.0 {
        return Vec::new();
    }
    let n = (total / DT).ceil() as usize;
    (0..n).map(|i| i as f64 * DT).collect()
}

/// Run one coaster simulation.
///
/// Inputs are validated before anything is computed, so the result is
/// either complete or an error.
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimulationError> {
    let times = params.phase_times()?;
    if params.radius > params.height && params.radius_policy == RadiusPolicy::Clamp {
        warn!(
            radius = params.radius,
            height = params.height,
            "loop radius exceeds drop height, loop sizing time clamped to zero"
        );
    }

    let grid = time_grid(times.total);
    debug!(
        fall = times.fall,
        loop_sizing = times.loop_sizing,
        total = times.total,
        samples = grid.len(),
        "time grid built"
    );

    let phases = PhaseSet::new(params, times.fall);
    let omega = params.omega();
    let mut out = SimulationResult::with_capacity(grid.len());
    let mut loop_entry = None;

    for (i, &t) in grid.iter().enumerate() {
        let (phase, k) = phases.sample(t);
        if phase == Phase::Loop && loop_entry.is_none() {
            loop_entry = Some(i);
        }

        // Display path uses the raw elapsed time in both phases
        let angle = omega * t;

        out.times.push(t);
        out.heights.push(k.height);
        out.velocities.push(k.velocity);
        out.positions_x.push(params.radius * angle.sin());
        out.positions_y.push(params.height - k.height);
        out.positions_z.push(params.radius * angle.cos());
        out.g_forces.push(k.g_force);
        out.net_forces.push(k.net_force);
    }

    debug!(loop_entry = ?loop_entry, "simulation finished");
    Ok(out)
}
