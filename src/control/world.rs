use nalgebra::Vector3;

use super::{
    fuel_management::FuelScheduler,
    geometry::{Rectangle, Sphere},
    rigid_body::RigidBodyState,
};

/// The simulated rigid body together with its extents and fuel.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub(crate) body: RigidBodyState,
    pub(crate) bounds: Vector3<f64>,
    pub(crate) fuel: FuelScheduler,
}

impl Rocket {
    pub fn new(body: RigidBodyState, bounds: Vector3<f64>, fuel: FuelScheduler) -> Self {
        Rocket { body, bounds, fuel }
    }

    pub fn body(&self) -> &RigidBodyState {
        &self.body
    }

    pub fn bounds(&self) -> Vector3<f64> {
        self.bounds
    }

    pub fn fuel(&self) -> &FuelScheduler {
        &self.fuel
    }
}

/// Everything the integrator advances, plus inert scenery.
///
/// A world is built once by the caller, advanced only by the integrator and
/// replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub(crate) rocket: Rocket,
    ground: Rectangle,
    endpoint: Sphere,
    pub(crate) world_time: f64,
    pub(crate) steps: u64,
}

impl World {
    pub fn new(rocket: Rocket, ground: Rectangle, endpoint: Sphere) -> Self {
        World {
            rocket,
            ground,
            endpoint,
            world_time: 0.0,
            steps: 0,
        }
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn ground(&self) -> &Rectangle {
        &self.ground
    }

    pub fn endpoint(&self) -> &Sphere {
        &self.endpoint
    }

    pub fn world_time(&self) -> f64 {
        self.world_time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}
