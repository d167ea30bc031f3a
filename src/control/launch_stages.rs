use nalgebra::{Matrix3, Vector3};

use crate::{constants::BOOSTER_MOUNT_OFFSETS, utils::math::star};

/// World-frame force and torque produced by a booster stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustContribution {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl ThrustContribution {
    pub fn zero() -> Self {
        ThrustContribution {
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }
}

/// One scheduled burn: a thrust magnitude for each of the four corner mounts.
///
/// Thrust always points along the body's local +y axis. Magnitudes are taken
/// as given, the stage does not range-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoosterStage {
    magnitudes: [f64; 4],
}

impl BoosterStage {
    pub fn new(magnitudes: [f64; 4]) -> Self {
        BoosterStage { magnitudes }
    }

    /// Same thrust on every corner, `total_thrust` overall.
    pub fn uniform(total_thrust: f64) -> Self {
        Self::new([total_thrust / 4.0; 4])
    }

    pub fn magnitudes(&self) -> [f64; 4] {
        self.magnitudes
    }

    pub fn total_thrust(&self) -> f64 {
        self.magnitudes.iter().sum()
    }

    pub fn mount_offset(index: usize) -> Vector3<f64> {
        Vector3::from(BOOSTER_MOUNT_OFFSETS[index])
    }

    pub fn force(&self, rotation: &Matrix3<f64>) -> Vector3<f64> {
        rotation * Vector3::new(0.0, self.total_thrust(), 0.0)
    }

    pub fn torque(&self, rotation: &Matrix3<f64>) -> Vector3<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .map(|(i, &magnitude)| {
                let arm = rotation * Self::mount_offset(i);
                let thrust = rotation * Vector3::new(0.0, magnitude, 0.0);
                star(&arm) * thrust
            })
            .sum()
    }

    pub fn contribution(&self, rotation: &Matrix3<f64>) -> ThrustContribution {
        ThrustContribution {
            force: self.force(rotation),
            torque: self.torque(rotation),
        }
    }
}
