//! Error types for the simulation core and scenario building

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Method name outside the supported set
    #[error("You can either choose \"euler\" or \"rk4\". Your current input for the method is: {0}")]
    UnsupportedMethod(String),

    #[error("trajectory is empty")]
    EmptyTrajectory,

    #[error("trajectory length mismatch: {positions} positions, {velocities} velocities")]
    LengthMismatch { positions: usize, velocities: usize },

    /// Initial position at the central mass, where gravity is singular
    #[error("initial position coincides with the central mass")]
    SingularPosition,

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("simulation time must be positive and finite, got {0}")]
    InvalidDuration(f64),
}
