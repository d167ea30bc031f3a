use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::{errors::SimulationError, utils::math::cuboid_inertia_tensor};

/// Pose, mass properties and momenta of a single rigid body.
///
/// Velocity and angular velocity are always derived from the momenta and
/// the current orientation; nothing derived is ever stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyState {
    pub(crate) position: Vector3<f64>,
    pub(crate) orientation: UnitQuaternion<f64>,
    pub(crate) momentum: Vector3<f64>,
    pub(crate) angular_momentum: Vector3<f64>,

    mass: f64,
    inertia_tensor_body: Matrix3<f64>,
    inertia_tensor_body_inverse: Matrix3<f64>,
}

impl RigidBodyState {
    /// Creates a body at rest at the origin with identity orientation.
    pub fn new(mass: f64, inertia_tensor_body: Matrix3<f64>) -> Result<Self, SimulationError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidMass(mass));
        }
        let inertia_tensor_body_inverse = inertia_tensor_body
            .try_inverse()
            .ok_or(SimulationError::SingularInertiaTensor)?;

        Ok(RigidBodyState {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            momentum: Vector3::zeros(),
            angular_momentum: Vector3::zeros(),
            mass,
            inertia_tensor_body,
            inertia_tensor_body_inverse,
        })
    }

    /// Solid box with full extents `bounds`.
    pub fn cuboid(mass: f64, bounds: Vector3<f64>) -> Result<Self, SimulationError> {
        Self::new(mass, cuboid_inertia_tensor(mass, &bounds))
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    pub fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_momentum(mut self, momentum: Vector3<f64>) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_angular_momentum(mut self, angular_momentum: Vector3<f64>) -> Self {
        self.angular_momentum = angular_momentum;
        self
    }

    /// Sets the angular momentum that produces `angular_velocity` at the
    /// current orientation. Call after `with_orientation`.
    pub fn with_angular_velocity(mut self, angular_velocity: Vector3<f64>) -> Self {
        self.angular_momentum = self.world_inertia_tensor() * angular_velocity;
        self
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.orientation
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.momentum
    }

    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.angular_momentum
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia_tensor_body(&self) -> Matrix3<f64> {
        self.inertia_tensor_body
    }

    pub fn inertia_tensor_body_inverse(&self) -> Matrix3<f64> {
        self.inertia_tensor_body_inverse
    }

    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.orientation.to_rotation_matrix().into_inner()
    }

    pub fn velocity(&self) -> Vector3<f64> {
        debug_assert!(self.mass > 0.0, "Mass must be positive");
        self.momentum / self.mass
    }

    pub fn world_inertia_tensor(&self) -> Matrix3<f64> {
        let r = self.rotation_matrix();
        r * self.inertia_tensor_body * r.transpose()
    }

    pub fn world_inertia_tensor_inverse(&self) -> Matrix3<f64> {
        let r = self.rotation_matrix();
        r * self.inertia_tensor_body_inverse * r.transpose()
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.world_inertia_tensor_inverse() * self.angular_momentum
    }
}
