//! Min/max statistics over a finished run and their text rendering.

use std::fmt;

use serde::Serialize;

use super::states::SimulationResult;
use crate::error::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub max_height: f64,
    pub min_height: f64,
    pub max_velocity: f64,
    pub min_velocity: f64,
    pub max_g_force: f64,
    pub min_g_force: f64,
    pub max_net_force: f64,
    pub min_net_force: f64,
}

/// (min, max) of a series, `EmptySeries` when it has no samples
fn extent(series: &[f64]) -> Result<(f64, f64), SimulationError> {
    let (&first, rest) = series.split_first().ok_or(SimulationError::EmptySeries)?;
    Ok(rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

/// Extremes of height, velocity, g-force and net force
pub fn summarize(result: &SimulationResult) -> Result<Summary, SimulationError> {
    if result.is_empty() {
        return Err(SimulationError::EmptySeries);
    }

    let (min_height, max_height) = extent(&result.heights)?;
    let (min_velocity, max_velocity) = extent(&result.velocities)?;
    let (min_g_force, max_g_force) = extent(&result.g_forces)?;
    let (min_net_force, max_net_force) = extent(&result.net_forces)?;

    Ok(Summary {
        max_height,
        min_height,
        max_velocity,
        min_velocity,
        max_g_force,
        min_g_force,
        max_net_force,
        min_net_force,
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum Height: {:.2} m", self.max_height)?;
        writeln!(f, "Minimum Height: {:.2} m", self.min_height)?;
        writeln!(f, "Maximum Velocity: {:.2} m/s", self.max_velocity)?;
        writeln!(f, "Minimum Velocity: {:.2} m/s", self.min_velocity)?;
        writeln!(f, "Maximum G-Force: {:.2} g", self.max_g_force)?;
        writeln!(f, "Minimum G-Force: {:.2} g", self.min_g_force)?;
        writeln!(f, "Maximum Net Force: {:.2} N", self.max_net_force)?;
        writeln!(f, "Minimum Net Force: {:.2} N", self.min_net_force)
    }
}
