use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Degree, Radian, EPS, OBLIQUITY, RADEG};

/// A pole orientation given as equatorial coordinates, in degrees.
///
/// Right ascension is measured eastward from the reference meridian, declination from the
/// equatorial plane. The pair defines the plane-of-sky frame: the x-y plane is the sky plane
/// perpendicular to the line of sight toward the pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub ra: Degree,
    pub dec: Degree,
}

impl Direction {
    pub fn new(ra: Degree, dec: Degree) -> Self {
        Self { ra, dec }
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis, in the direct
/// (counter-clockwise) sense when looking along the axis toward the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 orthonormal matrix `R` such that the rotated vector is `x' = R · x`,
/// satisfying `R.transpose() == R.inverse()`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Compute the basis-change rotation from the plane-of-sky frame to the ecliptic frame.
///
/// The plane-of-sky frame is defined by the pole `direction`: its x-y plane is the sky plane
/// perpendicular to the line of sight. The returned matrix re-expresses vectors given in that
/// frame in ecliptic coordinates, assembled from three elementary rotations applied in order:
///
/// 1. by `−dec − 90°` around the Y-axis,
/// 2. by `ra` around the Z-axis,
/// 3. by `−obliquity` around the X-axis (tilting the equator onto the ecliptic).
///
/// Arguments
/// ---------
/// * `direction`: the pole orientation (RA, Dec) in degrees.
///
/// Returns
/// --------
/// * A 3×3 orthonormal matrix `R` such that `x_ecl = R · x_sky`.
///
/// Remarks
/// -------
/// * The matrix is fixed for a given pole; it is computed once per
///   [`FrameConverter`](crate::converter::FrameConverter) and reused for every conversion.
/// * All finite (RA, Dec) values are accepted; no range is enforced.
///
/// # See also
/// * [`rotmt`] – elementary axis rotations composed here
/// * [`euler_zxz`] – decomposition applied to the inverse of this matrix
pub fn plane_of_sky_rotation(direction: &Direction) -> Matrix3<f64> {
    rotmt(-OBLIQUITY * RADEG, 0)
        * rotmt(direction.ra * RADEG, 2)
        * rotmt((-direction.dec - 90.0) * RADEG, 1)
}

/// Compose an orbit-orientation rotation from a z-x-z Euler triple.
///
/// The standard decomposition of an orbital plane orientation plus in-plane rotation:
/// rotate by the argument of periapsis around z, by the inclination around the rotated x,
/// and by the ascending node around the resulting z, yielding
/// `O = Rz(node) · Rx(inclination) · Rz(arg_peri)`.
///
/// Arguments
/// ---------
/// * `arg_peri`: argument of periapsis in radians.
/// * `inclination`: inclination in radians.
/// * `node`: longitude of the ascending node in radians.
///
/// Returns
/// --------
/// * The 3×3 orthonormal orientation matrix.
pub fn orbit_orientation(arg_peri: Radian, inclination: Radian, node: Radian) -> Matrix3<f64> {
    rotmt(node, 2) * rotmt(inclination, 0) * rotmt(arg_peri, 2)
}

/// Decompose a rotation matrix into a z-x-z Euler triple.
///
/// Inverse of [`orbit_orientation`]: given an orthonormal matrix `M`, find
/// `(arg_peri, inclination, node)` with `M = Rz(node) · Rx(inclination) · Rz(arg_peri)`.
///
/// Arguments
/// ---------
/// * `rot`: the rotation matrix to decompose.
///
/// Returns
/// --------
/// * `(arg_peri, inclination, node)` in radians, with `inclination ∈ [0, π]` (from the
///   arccosine of `m₂₂`, clamped to `[−1, 1]` against rounding) and the two z angles in
///   `(−π, π]` from `atan2`.
///
/// Degenerate case
/// ---------------
/// When `1 − |m₂₂| < EPS` the inclination is exactly 0 or π and the two z rotations act
/// around the same axis, so only their combination is determined. The tie-break is fixed:
/// `arg_peri` is assigned 0 and the node angle carries the whole z-rotation,
/// `atan2(m₁₀, m₀₀)`. The choice is a convention, not an error; the composed rotation is
/// preserved either way.
pub fn euler_zxz(rot: &Matrix3<f64>) -> (Radian, Radian, Radian) {
    let cos_inc = rot[(2, 2)].clamp(-1.0, 1.0);

    if 1.0 - cos_inc.abs() < EPS {
        let inclination = if cos_inc > 0.0 { 0.0 } else { std::f64::consts::PI };
        let node = rot[(1, 0)].atan2(rot[(0, 0)]);
        return (0.0, inclination, node);
    }

    let inclination = cos_inc.acos();
    let arg_peri = rot[(2, 0)].atan2(rot[(2, 1)]);
    let node = rot[(0, 2)].atan2(-rot[(1, 2)]);
    (arg_peri, inclination, node)
}
