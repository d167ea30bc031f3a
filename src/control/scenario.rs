//! Ready-made initial states for callers. The integrator never resets a
//! world itself; a reset is a fresh call to one of these.

use nalgebra::Vector3;
use rand::Rng;

use super::{
    fuel_management::FuelScheduler,
    geometry::{Pose, Rectangle, Sphere},
    launch_stages::BoosterStage,
    rigid_body::RigidBodyState,
    world::{Rocket, World},
};
use crate::{
    constants::{
        ENDPOINT_POSITION, ENDPOINT_RADIUS, GROUND_SIZE, LAUNCH_CELL_THRUST, ROCKET_BOUNDS,
        ROCKET_MASS, ROCKET_START_POSITION, ROCKET_START_SPIN,
    },
    errors::SimulationError,
};

/// `amount` identical stages splitting `total_thrust` evenly over the corners.
pub fn hover_fuel_cells(amount: usize, total_thrust: f64) -> FuelScheduler {
    (0..amount)
        .map(|_| BoosterStage::uniform(total_thrust))
        .collect()
}

/// `amount` stages around `total_thrust`, each corner jittered by up to
/// `jitter` newtons.
pub fn random_fuel_cells<R: Rng + ?Sized>(
    amount: usize,
    total_thrust: f64,
    jitter: f64,
    rng: &mut R,
) -> FuelScheduler {
    let base = total_thrust / 4.0;
    (0..amount)
        .map(|_| {
            let mut magnitudes = [base; 4];
            for magnitude in magnitudes.iter_mut() {
                if jitter > 0.0 {
                    *magnitude = (*magnitude + rng.gen_range(-jitter..=jitter)).max(0.0);
                }
            }
            BoosterStage::new(magnitudes)
        })
        .collect()
}

/// The default launch: a 1x3x1 box on the pad, spinning about its long
/// axis, under `fuel_cells` stages that slightly out-thrust gravity.
pub fn launch_world(fuel_cells: usize) -> Result<World, SimulationError> {
    launch_world_with(hover_fuel_cells(fuel_cells, LAUNCH_CELL_THRUST))
}

/// The default launch with caller-supplied fuel.
pub fn launch_world_with(fuel: FuelScheduler) -> Result<World, SimulationError> {
    let bounds = Vector3::from(ROCKET_BOUNDS);
    let body = RigidBodyState::cuboid(ROCKET_MASS, bounds)?
        .with_position(Vector3::from(ROCKET_START_POSITION))
        .with_angular_velocity(Vector3::from(ROCKET_START_SPIN));

    let ground = Rectangle::new(Pose::default(), Vector3::new(GROUND_SIZE, 0.0, GROUND_SIZE));
    let endpoint = Sphere::new(Pose::at(Vector3::from(ENDPOINT_POSITION)), ENDPOINT_RADIUS);

    Ok(World::new(Rocket::new(body, bounds, fuel), ground, endpoint))
}
