use nalgebra::Vector3;

use crate::utils::math::normalize_or_zero;

/// Damping opposing a momentum-like vector (linear or angular).
///
/// The magnitude is `|momentum| * coefficient`, floored at `|coefficient|`
/// so motion near rest still decays in finite time. A result that does not
/// strictly oppose `momentum` is dropped, so friction never pushes along the
/// current motion. `coefficient` is expected to be zero or negative.
pub fn friction(momentum: &Vector3<f64>, coefficient: f64) -> Vector3<f64> {
    let speed = momentum.norm();
    let mut scaled = speed * coefficient;
    if scaled.abs() < coefficient.abs() {
        scaled = coefficient;
    }

    let candidate = normalize_or_zero(momentum) * scaled;
    if candidate.dot(momentum) < 0.0 {
        candidate
    } else {
        Vector3::zeros()
    }
}
