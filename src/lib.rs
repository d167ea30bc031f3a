pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::SimulationOptions;
pub use control::fuel_management::FuelScheduler;
pub use control::geometry::{Pose, Rectangle, Sphere};
pub use control::launch_stages::{BoosterStage, ThrustContribution};
pub use control::rigid_body::RigidBodyState;
pub use control::world::{Rocket, World};

// Re-export the step functions from trajectory_system
pub use trajectory_system::aerodynamics::friction;
pub use trajectory_system::kinematics::{advance, step, step_in_place, FixedTimestep};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TelemetryFrame};
