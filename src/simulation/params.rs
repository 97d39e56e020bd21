//! Physical parameters for one coaster run
//!
//! `SimulationParameters` holds the user inputs:
//! - drop height, cart mass and loop radius,
//! - track length (accepted and checked, not used by the motion model),
//! - the policy applied when the loop is taller than the drop
//!
//! `PhaseTimes` derives the fall duration and total grid length from them.

use crate::configuration::config::RadiusPolicy;
use crate::error::SimulationError;

/// Gravitational acceleration (m/s^2)
pub const G: f64 = 9.8;
/// Fixed sampling step of the time grid (s)
pub const DT: f64 = 0.01;
/// Upper bound on the time grid length of one run
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub height: f64,                // drop height (m)
    pub mass: f64,                  // cart mass (kg)
    pub radius: f64,                // loop radius (m)
    pub track_length: f64,          // track length (m)
    pub radius_policy: RadiusPolicy, // radius > height handling
}

/// Durations derived from a validated parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimes {
    pub fall: f64,        // t1, end of the free-fall phase and the phase switch
    pub loop_sizing: f64, // t2, only extends the time grid
    pub total: f64,       // t1 + t2
}

impl SimulationParameters {
    pub fn new(height: f64, mass: f64, radius: f64, track_length: f64) -> Self {
        Self {
            height,
            mass,
            radius,
            track_length,
            radius_policy: RadiusPolicy::default(),
        }
    }

    pub fn with_radius_policy(mut self, radius_policy: RadiusPolicy) -> Self {
        self.radius_policy = radius_policy;
        self
    }

    /// Loop angular rate `sqrt(g / r)`. Only meaningful once validated.
    pub fn omega(&self) -> f64 {
        (G / self.radius).sqrt()
    }

    /// Check every input against the domain of the motion model.
    pub fn validate(&self) -> Result<(), SimulationError> {
        positive("height", self.height)?;
        positive("mass", self.mass)?;
        positive("radius", self.radius)?;
        positive("track_length", self.track_length)?;

        if self.radius > self.height && self.radius_policy == RadiusPolicy::Reject {
            return Err(SimulationError::RadiusExceedsHeight {
                radius: self.radius,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Validate, then compute the fall time, loop sizing time and total time.
    /// Fails when the grid would hold more than `MAX_SAMPLES` samples.
    pub fn phase_times(&self) -> Result<PhaseTimes, SimulationError> {
        self.validate()?;

        let fall = (2.0 * self.height / G).sqrt();
        // Negative only under the clamp policy, validate() rejects it otherwise
        let drop_above_loop = (self.height - self.radius).max(0.0);
        let loop_sizing = (2.0 * drop_above_loop / G).sqrt();
        let total = fall + loop_sizing;

        if (total / DT).ceil() > MAX_SAMPLES as f64 {
            return Err(SimulationError::InvalidParameter {
                name: "height",
                value: self.height,
                reason: "time grid too long",
            });
        }

        Ok(PhaseTimes {
            fall,
            loop_sizing,
            total,
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}
