pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{SimulationResult, NVec3};
pub use simulation::params::{SimulationParameters, PhaseTimes, G, DT};
pub use simulation::phases::{MotionPhase, FreeFall, LoopMotion, Kinematics, Phase, PhaseSet};
pub use simulation::kinematics::{simulate, time_grid};
pub use simulation::summary::{summarize, Summary};
pub use simulation::scenario::{Scenario, Overrides};

pub use configuration::config::{RadiusPolicy, EngineConfig, ParametersConfig, ScenarioConfig};

pub use error::SimulationError;

pub use benchmark::benchmark::bench_simulate;
