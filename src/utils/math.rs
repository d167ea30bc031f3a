use nalgebra::{Matrix3, UnitQuaternion, Vector3};

/// Skew-symmetric "star" matrix of `v`, so that `star(a) * b == a.cross(&b)`.
pub fn star(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Unit vector along `v`, or the zero vector when `v` is exactly zero.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}

/// Advances `orientation` by the rotation `angular_velocity * dt`.
///
/// The increment is built from the per-axis angles (x, y, z) applied as
/// roll, pitch, yaw, composed on the world side and renormalized so the
/// result stays a unit quaternion despite accumulated floating error.
pub fn integrate_orientation(
    orientation: &UnitQuaternion<f64>,
    angular_velocity: &Vector3<f64>,
    dt: f64,
) -> UnitQuaternion<f64> {
    let angles = angular_velocity * dt;
    let increment = UnitQuaternion::from_euler_angles(angles.x, angles.y, angles.z);

    // The 0.5 factor of first-order quaternion integration drops out here.
    UnitQuaternion::new_normalize(increment.into_inner() * 0.5 * orientation.into_inner())
}

/// Body-frame inertia tensor of a solid box with the given full extents.
pub fn cuboid_inertia_tensor(mass: f64, bounds: &Vector3<f64>) -> Matrix3<f64> {
    let (x2, y2, z2) = (bounds.x.powi(2), bounds.y.powi(2), bounds.z.powi(2));
    Matrix3::from_diagonal(&Vector3::new(y2 + z2, x2 + z2, x2 + y2)) * (mass / 12.0)
}
