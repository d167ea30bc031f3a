use log::trace;

use super::aerodynamics::friction;
use crate::{
    control::{environment::SimulationOptions, world::World},
    utils::math::integrate_orientation,
};

/// Returns `world` advanced by one fixed step, leaving the input untouched.
pub fn step(options: &SimulationOptions, world: &World) -> World {
    let mut next = world.clone();
    step_in_place(options, &mut next);
    next
}

/// Advances `world` by one fixed step.
///
/// Forces come from the pose at the start of the step; momenta are updated
/// first and position/orientation follow from the updated momenta
/// (semi-implicit Euler).
pub fn step_in_place(options: &SimulationOptions, world: &mut World) {
    let dt = options.time_step();
    let coefficient = options.friction_coefficient();

    world.world_time += dt;
    world.steps += 1;

    let rocket = &mut world.rocket;
    let rotation = rocket.body.rotation_matrix();
    let thrust = rocket.fuel.active_contribution(&rotation);
    rocket
        .fuel
        .maybe_advance(world.steps, options.steps_per_stage());

    let body = &mut rocket.body;

    body.angular_momentum += thrust.torque * dt;
    let angular_damping = friction(&body.angular_momentum, coefficient);
    body.angular_momentum += angular_damping * dt;

    let force = options.gravity() * body.mass() + thrust.force;
    body.momentum += force * dt;
    let linear_damping = friction(&body.momentum, coefficient);
    body.momentum += linear_damping * dt;

    let velocity = body.velocity();
    body.position += velocity * dt;
    let angular_velocity = body.angular_velocity();
    body.orientation = integrate_orientation(&body.orientation, &angular_velocity, dt);

    trace!(
        "step {} t={:.4}s pos={:?} stage={}",
        world.steps,
        world.world_time,
        body.position.as_slice(),
        rocket.fuel.cursor()
    );
}

/// Runs `ticks` consecutive steps.
pub fn advance(options: &SimulationOptions, world: &mut World, ticks: usize) {
    for _ in 0..ticks {
        step_in_place(options, world);
    }
}

/// Paces fixed steps against an external clock.
///
/// Tracks how much simulated time has been stepped and, given the external
/// elapsed time, runs every whole tick that fits. The remainder carries over
/// to the next call.
#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    stepped_time: f64,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stepped_time(&self) -> f64 {
        self.stepped_time
    }

    /// Catches `world` up to `elapsed` seconds and returns the ticks run.
    pub fn catch_up(&mut self, options: &SimulationOptions, world: &mut World, elapsed: f64) -> usize {
        let dt = options.time_step();
        let mut ticks = 0;
        while elapsed - self.stepped_time > dt {
            step_in_place(options, world);
            self.stepped_time += dt;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{
        fuel_management::FuelScheduler,
        geometry::{Rectangle, Sphere},
        launch_stages::BoosterStage,
        rigid_body::RigidBodyState,
        world::Rocket,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{UnitQuaternion, Vector3};

    fn test_world(fuel: FuelScheduler) -> World {
        let bounds = Vector3::new(1.0, 3.0, 1.0);
        let body = RigidBodyState::cuboid(1.0, bounds)
            .expect("valid body")
            .with_position(Vector3::new(0.0, 1.5, 0.0));
        World::new(
            Rocket::new(body, bounds, fuel),
            Rectangle::default(),
            Sphere::default(),
        )
    }

    fn frictionless() -> SimulationOptions {
        SimulationOptions::new(1.0 / 60.0, 0.0, Vector3::new(0.0, -9.81, 0.0))
            .expect("valid options")
    }

    #[test]
    fn test_step_advances_clock() {
        let options = frictionless();
        let mut world = test_world(FuelScheduler::empty());

        step_in_place(&options, &mut world);
        assert_eq!(world.steps(), 1);
        assert_abs_diff_eq!(world.world_time(), 1.0 / 60.0, epsilon = 1e-15);

        advance(&options, &mut world, 59);
        assert_eq!(world.steps(), 60);
        assert_abs_diff_eq!(world.world_time(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_step_uses_semi_implicit_order() {
        let options = frictionless();
        let mut world = test_world(FuelScheduler::empty());
        let dt = options.time_step();

        step_in_place(&options, &mut world);

        let body = world.rocket().body();
        // Position moves with the velocity after the gravity kick
        assert_relative_eq!(body.velocity().y, -9.81 * dt, epsilon = 1e-12);
        assert_relative_eq!(body.position().y, 1.5 - 9.81 * dt * dt, epsilon = 1e-12);
    }

    #[test]
    fn test_thrust_read_before_stage_advance() {
        // One stage, one tick per stage: the first step still burns it
        let options = SimulationOptions::new(1.0, 0.0, Vector3::zeros())
            .expect("valid options");
        let mut world = test_world(FuelScheduler::new(vec![BoosterStage::uniform(2.0)]));

        step_in_place(&options, &mut world);
        assert!(world.rocket().fuel().is_exhausted());
        assert_relative_eq!(world.rocket().body().momentum(), Vector3::new(0.0, 2.0, 0.0));

        step_in_place(&options, &mut world);
        assert_relative_eq!(world.rocket().body().momentum(), Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_asymmetric_stage_spins_body() {
        let options = frictionless();
        let mut world = test_world(FuelScheduler::new(vec![BoosterStage::new([
            1.0, 0.0, 0.0, 0.0,
        ])]));

        step_in_place(&options, &mut world);

        let body = world.rocket().body();
        assert!(body.angular_momentum().norm() > 0.0);
        assert!(body.orientation().angle() > 0.0);
    }

    #[test]
    fn test_step_matches_step_in_place() {
        let options = SimulationOptions::default();
        let start = test_world(FuelScheduler::new(vec![BoosterStage::new([
            3.0, 1.0, 2.0, 4.0,
        ])]));

        let copied = step(&options, &start);
        let mut mutated = start.clone();
        step_in_place(&options, &mut mutated);

        assert_eq!(copied, mutated);
        assert_eq!(start.steps(), 0, "step must not touch its input");
    }

    #[test]
    fn test_inert_geometry_untouched() {
        let options = SimulationOptions::default();
        let mut world = test_world(FuelScheduler::empty());
        let ground = *world.ground();
        let endpoint = *world.endpoint();

        advance(&options, &mut world, 120);

        assert_eq!(world.ground(), &ground);
        assert_eq!(world.endpoint(), &endpoint);
    }

    #[test]
    fn test_orientation_stays_normalized_while_tumbling() {
        let options = SimulationOptions::default();
        let body = RigidBodyState::cuboid(1.0, Vector3::new(1.0, 3.0, 1.0))
            .expect("valid body")
            .with_orientation(UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1))
            .with_angular_velocity(Vector3::new(1.0, 10.0, -2.0));
        let fuel: FuelScheduler = (0..20).map(|_| BoosterStage::new([0.0, 2.0, 5.0, 1.0])).collect();
        let mut world = World::new(
            Rocket::new(body, Vector3::new(1.0, 3.0, 1.0), fuel),
            Rectangle::default(),
            Sphere::default(),
        );

        for _ in 0..1200 {
            step_in_place(&options, &mut world);
            let norm = world.rocket().body().orientation().quaternion().norm();
            assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fixed_timestep_runs_whole_ticks() {
        let options = frictionless();
        let mut world = test_world(FuelScheduler::empty());
        let mut pacer = FixedTimestep::new();

        assert_eq!(pacer.catch_up(&options, &mut world, 0.01), 0);
        let ticks = pacer.catch_up(&options, &mut world, 0.51);
        assert_eq!(ticks, 30);
        assert_eq!(world.steps(), 30);
        assert!(0.51 - pacer.stepped_time() <= options.time_step());

        assert_eq!(pacer.catch_up(&options, &mut world, 0.51), 0);
    }
}
