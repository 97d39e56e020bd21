//! Error type shared by the kinematics engine and the summary.

/// Failure of a simulation run or of summarising its output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A parameter is outside the domain of the motion model.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The loop does not fit under the drop; the loop sizing time would be
    /// the square root of a negative number.
    #[error("invalid parameter `radius` = {radius}: loop radius exceeds drop height {height}")]
    RadiusExceedsHeight { radius: f64, height: f64 },

    /// Tried to summarise a result with no samples.
    #[error("cannot summarise an empty series")]
    EmptySeries,
}

impl SimulationError {
    /// True for every variant caused by bad input parameters.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            SimulationError::InvalidParameter { .. } | SimulationError::RadiusExceedsHeight { .. }
        )
    }
}
