use log::info;
use nalgebra::{UnitQuaternion, Vector3};

use crate::control::{launch_stages::ThrustContribution, world::World};

/// Read-only snapshot of everything the presentation layer may look at.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryFrame {
    pub world_time: f64,
    pub steps: u64,
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    pub momentum: Vector3<f64>,
    pub angular_momentum: Vector3<f64>,
    pub booster_magnitudes: Option<[f64; 4]>,
    pub booster_output: ThrustContribution,
    pub remaining_stages: usize,
}

impl TelemetryFrame {
    pub fn capture(world: &World) -> Self {
        let rocket = world.rocket();
        let body = rocket.body();
        let fuel = rocket.fuel();

        TelemetryFrame {
            world_time: world.world_time(),
            steps: world.steps(),
            position: body.position(),
            orientation: body.orientation(),
            velocity: body.velocity(),
            angular_velocity: body.angular_velocity(),
            momentum: body.momentum(),
            angular_momentum: body.angular_momentum(),
            booster_magnitudes: fuel.active_stage().map(|stage| stage.magnitudes()),
            booster_output: fuel.active_contribution(&body.rotation_matrix()),
            remaining_stages: fuel.remaining_stages(),
        }
    }
}

pub struct Telemetry {
    frames: Vec<TelemetryFrame>,
    max_speed: f64,
    max_altitude: f64,
    max_spin: f64,
    stage_times: Vec<(usize, f64)>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            frames: Vec::new(),
            max_speed: 0.0,
            max_altitude: f64::MIN,
            max_spin: 0.0,
            stage_times: Vec::new(),
        }
    }

    fn format_vector(vec: &Vector3<f64>, precision: usize) -> String {
        format!(
            "x = {:.precision$}, y = {:.precision$}, z = {:.precision$}",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn collect_data(&mut self, world: &World) {
        let frame = TelemetryFrame::capture(world);

        self.max_speed = self.max_speed.max(frame.velocity.norm());
        self.max_altitude = self.max_altitude.max(frame.position.y);
        self.max_spin = self.max_spin.max(frame.angular_velocity.norm());

        // Track stage transitions
        let stage = world.rocket().fuel().cursor();
        if self.stage_times.last().map_or(true, |&(last, _)| last != stage) {
            self.stage_times.push((stage, frame.world_time));
        }

        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[TelemetryFrame] {
        &self.frames
    }

    pub fn latest(&self) -> Option<&TelemetryFrame> {
        self.frames.last()
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn stage_times(&self) -> &[(usize, f64)] {
        &self.stage_times
    }

    pub fn display_data(&self) {
        info!("--- Telemetry Data ---");
        for frame in &self.frames {
            info!(
                "Time: {} (step {}) | Position: {} | Velocity: {} | Spin: {:.2} rad/s | Thrust: {:.2} N | Stages left: {}",
                Self::format_time(frame.world_time),
                frame.steps,
                Self::format_vector(&frame.position, 2),
                Self::format_vector(&frame.velocity, 2),
                frame.angular_velocity.norm(),
                frame.booster_output.force.norm(),
                frame.remaining_stages
            );
        }

        info!("--- Simulation Summary ---");
        info!("Max Speed: {:.2} m/s", self.max_speed);
        info!("Max Altitude: {:.2} m", self.max_altitude);
        info!("Max Spin: {:.2} rad/s", self.max_spin);
        for (stage, time) in &self.stage_times {
            info!("Stage {} active from: {}", stage, Self::format_time(*time));
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
