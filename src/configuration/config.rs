//! Configuration types for loading coaster scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! single simulation run. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (policy for a loop taller than the drop)
//! - [`ParametersConfig`] – the four user-facing physical parameters
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   radius_policy: "reject"   # or "clamp"; optional
//!
//! parameters:
//!   height: 10.0              # initial drop height (m)
//!   mass: 500.0               # cart mass (kg)
//!   radius: 5.0               # loop radius (m)
//!   track_length: 100.0       # track length (m)
//! ```
//!
//! The engine then maps this configuration into its runtime
//! [`SimulationParameters`](crate::simulation::params::SimulationParameters).

use serde::Deserialize;

/// What the engine does when the loop radius exceeds the drop height
/// `radius_policy: "reject"` or `radius_policy: "clamp"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusPolicy {
    #[default]
    #[serde(rename = "reject")] // fail with an invalid-parameter error
    Reject,

    #[serde(rename = "clamp")] // clamp the negative sqrt argument to zero, t2 becomes 0
    Clamp,
}

/// Engine-level options
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub radius_policy: RadiusPolicy, // handling of radius > height
}

/// Physical parameters of a single run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub height: f64,       // initial height (m)
    pub mass: f64,         // cart mass (kg)
    pub radius: f64,       // loop radius (m)
    pub track_length: f64, // track length (m), carried but not used by the motion model
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // engine options, all optional
    pub parameters: ParametersConfig, // physical parameters
}
