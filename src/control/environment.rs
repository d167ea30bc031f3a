use nalgebra::Vector3;

use crate::{
    constants::{DEFAULT_FRICTION_COEFFICIENT, DEFAULT_STAGE_DURATION, DEFAULT_TIME_STEP, GRAVITY},
    errors::SimulationError,
};

/// Per-run configuration, validated on construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOptions {
    time_step: f64,
    friction_coefficient: f64,
    gravity: Vector3<f64>,
    stage_duration: f64,
}

impl SimulationOptions {
    pub fn new(
        time_step: f64,
        friction_coefficient: f64,
        gravity: Vector3<f64>,
    ) -> Result<Self, SimulationError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(time_step));
        }
        if !friction_coefficient.is_finite() || friction_coefficient > 0.0 {
            return Err(SimulationError::InvalidFrictionCoefficient(
                friction_coefficient,
            ));
        }
        if !gravity.iter().all(|component| component.is_finite()) {
            return Err(SimulationError::InvalidGravity);
        }

        Ok(SimulationOptions {
            time_step,
            friction_coefficient,
            gravity,
            stage_duration: DEFAULT_STAGE_DURATION,
        })
    }

    /// Seconds of burn given to each fuel stage.
    pub fn with_stage_duration(mut self, stage_duration: f64) -> Result<Self, SimulationError> {
        if !stage_duration.is_finite() || stage_duration <= 0.0 {
            return Err(SimulationError::InvalidStageDuration(stage_duration));
        }
        self.stage_duration = stage_duration;
        Ok(self)
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }

    pub fn gravity(&self) -> Vector3<f64> {
        self.gravity
    }

    pub fn stage_duration(&self) -> f64 {
        self.stage_duration
    }

    /// Whole ticks per fuel stage, `ceil(stage_duration / time_step)`.
    ///
    /// Quotients within 1e-9 of an integer snap to it, so a 1/60 s step
    /// gives exactly 60 ticks per second. Never less than one.
    pub fn steps_per_stage(&self) -> u64 {
        let ticks = self.stage_duration / self.time_step;
        let nearest = ticks.round();
        let whole = if (ticks - nearest).abs() < 1e-9 {
            nearest
        } else {
            ticks.ceil()
        };
        whole.max(1.0) as u64
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        SimulationOptions {
            time_step: DEFAULT_TIME_STEP,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            stage_duration: DEFAULT_STAGE_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SimulationOptions::default();
        assert_eq!(options.time_step(), 1.0 / 60.0);
        assert_eq!(options.friction_coefficient(), -0.35);
        assert_eq!(options.gravity(), Vector3::new(0.0, -9.81, 0.0));
        assert_eq!(options.steps_per_stage(), 60);
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let gravity = Vector3::new(0.0, -9.81, 0.0);
        assert_eq!(
            SimulationOptions::new(0.0, -0.35, gravity),
            Err(SimulationError::InvalidTimeStep(0.0))
        );
        assert_eq!(
            SimulationOptions::new(-0.1, -0.35, gravity),
            Err(SimulationError::InvalidTimeStep(-0.1))
        );
        assert!(SimulationOptions::new(f64::INFINITY, -0.35, gravity).is_err());
    }

    #[test]
    fn test_rejects_positive_friction() {
        let result = SimulationOptions::new(0.01, 0.2, Vector3::zeros());
        assert_eq!(result, Err(SimulationError::InvalidFrictionCoefficient(0.2)));
        assert!(SimulationOptions::new(0.01, 0.0, Vector3::zeros()).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_gravity() {
        let result = SimulationOptions::new(0.01, -0.35, Vector3::new(0.0, f64::NAN, 0.0));
        assert_eq!(result, Err(SimulationError::InvalidGravity));
    }

    #[test]
    fn test_steps_per_stage() {
        let gravity = Vector3::zeros();
        let at = |dt: f64| {
            SimulationOptions::new(dt, 0.0, gravity)
                .expect("valid options")
                .steps_per_stage()
        };

        assert_eq!(at(1.0 / 60.0), 60);
        assert_eq!(at(0.1), 10);
        assert_eq!(at(0.3), 4);
        assert_eq!(at(2.0), 1);
    }

    #[test]
    fn test_stage_duration() {
        let options = SimulationOptions::default()
            .with_stage_duration(5.0)
            .expect("valid duration");
        assert_eq!(options.steps_per_stage(), 300);

        assert_eq!(
            SimulationOptions::default().with_stage_duration(0.0),
            Err(SimulationError::InvalidStageDuration(0.0))
        );
    }
}
