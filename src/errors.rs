use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("Friction coefficient must be finite and not positive, got {0}")]
    InvalidFrictionCoefficient(f64),

    #[error("Gravity vector must have finite components")]
    InvalidGravity,

    #[error("Stage duration must be finite and positive, got {0}")]
    InvalidStageDuration(f64),

    #[error("Mass must be finite and positive, got {0}")]
    InvalidMass(f64),

    #[error("Body inertia tensor is not invertible")]
    SingularInertiaTensor,
}
