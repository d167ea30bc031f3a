pub mod environment;
pub mod fuel_management;
pub mod geometry;
pub mod launch_stages;
pub mod rigid_body;
pub mod scenario;
pub mod world;
