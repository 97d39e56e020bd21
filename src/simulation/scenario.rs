//! Build runtime simulation inputs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`
//! holding the validated-on-run `SimulationParameters`.
//! Command-line overrides are applied on top before running.

use crate::configuration::config::{RadiusPolicy, ScenarioConfig};
use crate::error::SimulationError;
use crate::simulation::kinematics::simulate;
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::SimulationResult;
use crate::simulation::summary::{summarize, Summary};

/// Values that replace the scenario file's parameters when present
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub track_length: Option<f64>,
    pub radius_policy: Option<RadiusPolicy>,
}

/// A single configured run
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: SimulationParameters,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let p_cfg = cfg.parameters;
        let parameters =
            SimulationParameters::new(p_cfg.height, p_cfg.mass, p_cfg.radius, p_cfg.track_length)
                .with_radius_policy(cfg.engine.radius_policy);

        Self { parameters }
    }

    /// Build straight from overrides, every numeric value is required
    pub fn from_overrides(o: Overrides) -> Option<Self> {
        let parameters = SimulationParameters::new(o.height?, o.mass?, o.radius?, o.track_length?)
            .with_radius_policy(o.radius_policy.unwrap_or_default());
        Some(Self { parameters })
    }

    pub fn apply(mut self, o: Overrides) -> Self {
        let p = &mut self.parameters;
        p.height = o.height.unwrap_or(p.height);
        p.mass = o.mass.unwrap_or(p.mass);
        p.radius = o.radius.unwrap_or(p.radius);
        p.track_length = o.track_length.unwrap_or(p.track_length);
        p.radius_policy = o.radius_policy.unwrap_or(p.radius_policy);
        self
    }

    /// Simulate and summarise; nothing is returned unless both succeed
    pub fn run(&self) -> Result<(SimulationResult, Summary), SimulationError> {
        let result = simulate(&self.parameters)?;
        let summary = summarize(&result)?;
        Ok((result, summary))
    }
}
