//! Output state of a coaster run.
//!
//! `SimulationResult` stores one column per quantity, every column aligned
//! index-for-index with `times`. Position samples can be read back as
//! nalgebra `NVec3` points for plotting or export.

use nalgebra::Vector3;
use serde::Serialize;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationResult {
    pub times: Vec<f64>,       // elapsed time (s)
    pub heights: Vec<f64>,     // height above ground (m)
    pub velocities: Vec<f64>,  // signed speed (m/s)
    pub positions_x: Vec<f64>, // display path x (m)
    pub positions_y: Vec<f64>, // display path y (m)
    pub positions_z: Vec<f64>, // display path z (m)
    pub g_forces: Vec<f64>,    // effective acceleration magnitude (m/s^2)
    pub net_forces: Vec<f64>,  // mass times effective acceleration (N)
}

impl SimulationResult {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            times: Vec::with_capacity(n),
            heights: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
            positions_x: Vec::with_capacity(n),
            positions_y: Vec::with_capacity(n),
            positions_z: Vec::with_capacity(n),
            g_forces: Vec::with_capacity(n),
            net_forces: Vec::with_capacity(n),
        }
    }

    /// Number of samples on the time grid
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Display path point of sample `i`
    pub fn position(&self, i: usize) -> Option<NVec3> {
        Some(NVec3::new(
            *self.positions_x.get(i)?,
            *self.positions_y.get(i)?,
            *self.positions_z.get(i)?,
        ))
    }

    /// Whole display path as 3D points
    pub fn positions(&self) -> Vec<NVec3> {
        self.positions_x
            .iter()
            .zip(&self.positions_y)
            .zip(&self.positions_z)
            .map(|((&x, &y), &z)| NVec3::new(x, y, z))
            .collect()
    }
}
