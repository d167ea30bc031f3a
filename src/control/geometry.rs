use nalgebra::{UnitQuaternion, Vector3};

/// Placement of a body in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    pub fn at(position: Vector3<f64>) -> Self {
        Pose {
            position,
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vector3::zeros())
    }
}

// Inert shapes: placed in the world for the presentation layer, never
// consulted by the integrator.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub pose: Pose,
    pub bounds: Vector3<f64>,
}

impl Rectangle {
    pub fn new(pose: Pose, bounds: Vector3<f64>) -> Self {
        Rectangle { pose, bounds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sphere {
    pub pose: Pose,
    pub radius: f64,
}

impl Sphere {
    pub fn new(pose: Pose, radius: f64) -> Self {
        Sphere { pose, radius }
    }
}
