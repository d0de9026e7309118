//! # FrameConverter: plane-of-sky → ecliptic orbital elements
//!
//! This module defines the [`FrameConverter`] struct, the facade of the crate: it is built
//! once per pole direction and then converts any number of orbital-element triples from the
//! plane-of-sky convention to the ecliptic one.
//!
//! Construction is the stateful part — it computes the fixed basis-change rotation and the
//! pole's own element triple — while each [`convert`](FrameConverter::convert) call is a pure
//! function of its arguments and the stored immutable state. A converter is therefore safe to
//! share across threads without synchronization.
//!
//! ## Typical usage
//!
//! ```rust
//! use orbframe::converter::FrameConverter;
//!
//! // Pole at RA 88.7929°, Dec 7.4070°; elements measured in the plane of sky.
//! let converter = FrameConverter::new(88.7929, 7.4070);
//! let elements = converter.convert(Some(90.0), Some(60.0), Some(45.0));
//!
//! assert!((0.0..360.0).contains(&elements.arg_peri));
//! assert!((0.0..360.0).contains(&elements.node));
//! ```
//!
//! Omitted angles (passed as `None`) fall back to the pole's own derived values; an explicit
//! `Some(0.0)` is a meaningful angle, never treated as "unset".

use nalgebra::Matrix3;

use crate::constants::{Degree, RADEG};
use crate::orbital_elements::OrbitalElements;
use crate::ref_system::{euler_zxz, orbit_orientation, plane_of_sky_rotation, Direction};

/// Reduce an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` alone is not enough: for tiny negative inputs the remainder rounds up to
/// exactly 360.0, which the guard maps back to 0.
fn wrap_degrees(angle: Degree) -> Degree {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Converts orbital elements from a plane-of-sky frame to the ecliptic convention.
///
/// Built from the (RA, Dec) of the reference pole. The basis-change rotation and the pole's
/// own element triple are computed once at construction and are immutable afterwards.
#[derive(Debug, Clone)]
pub struct FrameConverter {
    rot: Matrix3<f64>,
    defaults: OrbitalElements,
}

impl FrameConverter {
    /// Create a converter for the given pole, RA and Dec in degrees.
    ///
    /// All finite inputs are accepted; there is no error path. Degenerate pole geometries
    /// (gimbal lock in the element decomposition) resolve to the documented tie-break of
    /// [`euler_zxz`], never to a failure.
    pub fn new(ra: Degree, dec: Degree) -> Self {
        Self::from_direction(&Direction::new(ra, dec))
    }

    /// Create a converter from a [`Direction`].
    ///
    /// The stored default triple is the pole's own orientation expressed in the element
    /// conventions: the inverse basis rotation decomposed as z-x-z, with the inclination
    /// sign flipped to the orbital-inclination convention and the node shifted by 180° to
    /// align the zero-points of the two frames.
    pub fn from_direction(pole: &Direction) -> Self {
        let rot = plane_of_sky_rotation(pole);
        let (arg_peri, inclination, node) = euler_zxz(&rot.transpose());
        let defaults = OrbitalElements {
            arg_peri: arg_peri / RADEG,
            inclination: -(inclination / RADEG),
            node: wrap_degrees(node / RADEG + 180.0),
        };
        Self { rot, defaults }
    }

    /// The pole's own element triple, substituted for omitted angles in
    /// [`convert`](Self::convert).
    pub fn defaults(&self) -> OrbitalElements {
        self.defaults
    }

    /// Convert an orbital-element triple to the ecliptic convention. Angles in degrees.
    ///
    /// Arguments
    /// ---------
    /// * `arg_peri`, `inclination`, `node`: plane-of-sky elements; `None` means "use the
    ///   stored default for this angle". `Some(0.0)` is a provided angle, distinct from
    ///   omission.
    ///
    /// Returns
    /// -------
    /// * The equivalent triple in the ecliptic frame, `arg_peri` and `node` reduced to
    ///   `[0°, 360°)`, `inclination` as produced by the decomposition.
    ///
    /// The operation is total over finite inputs and leaves the converter unchanged.
    pub fn convert(
        &self,
        arg_peri: Option<Degree>,
        inclination: Option<Degree>,
        node: Option<Degree>,
    ) -> OrbitalElements {
        let orbit = orbit_orientation(
            arg_peri.unwrap_or(self.defaults.arg_peri) * RADEG,
            inclination.unwrap_or(self.defaults.inclination) * RADEG,
            node.unwrap_or(self.defaults.node) * RADEG,
        );

        let (arg_peri, inclination, node) = euler_zxz(&(self.rot * orbit));

        OrbitalElements {
            arg_peri: wrap_degrees(arg_peri / RADEG),
            inclination: inclination / RADEG,
            node: wrap_degrees(node / RADEG),
        }
    }
}

/// One-shot conversion with the display ordering used by element tables.
///
/// Builds a [`FrameConverter`] for `(ra, dec)`, substitutes defaults for omitted angles and
/// returns `(inclination, node, arg_peri)`. With `exoplanet` set, 180° is added to the
/// argument of periapsis before conversion — exoplanet catalogues quote the companion's ω
/// rather than the primary's, and the two differ by half a turn. The shift wraps away in the
/// final normalization.
pub fn convert_elements(
    ra: Degree,
    dec: Degree,
    inclination: Option<Degree>,
    node: Option<Degree>,
    arg_peri: Option<Degree>,
    exoplanet: bool,
) -> (Degree, Degree, Degree) {
    let converter = FrameConverter::new(ra, dec);
    let arg_peri = if exoplanet {
        Some(arg_peri.unwrap_or(converter.defaults.arg_peri) + 180.0)
    } else {
        arg_peri
    };
    let converted = converter.convert(arg_peri, inclination, node);
    (converted.inclination, converted.node, converted.arg_peri)
}
