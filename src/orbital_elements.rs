use crate::constants::Degree;

/// Orbital orientation elements in the z-x-z Euler convention.
/// Units:
/// * `arg_peri`: degrees
/// * `inclination`: degrees
/// * `node`: degrees
///
/// Triples produced by a conversion have `arg_peri` and `node` reduced to `[0°, 360°)`;
/// `inclination` is left as the decomposition produces it (conventionally `[0°, 180°]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub arg_peri: Degree,
    pub inclination: Degree,
    pub node: Degree,
}

impl std::fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "inclination {:.6}°, node {:.6}°, arg_peri {:.6}°",
            self.inclination, self.node, self.arg_peri
        )
    }
}

#[cfg(test)]
mod orbital_elements_test {
    use super::*;

    #[test]
    fn test_display() {
        let elements = OrbitalElements {
            arg_peri: 113.4392911,
            inclination: 90.0,
            node: 270.0,
        };
        assert_eq!(
            elements.to_string(),
            "inclination 90.000000°, node 270.000000°, arg_peri 113.439291°"
        );
    }
}
