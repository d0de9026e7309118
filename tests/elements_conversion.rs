use approx::assert_relative_eq;

use orbframe::constants::RADEG;
use orbframe::converter::{convert_elements, FrameConverter};
use orbframe::ref_system::{euler_zxz, orbit_orientation, plane_of_sky_rotation, Direction};

const TOLERANCE: f64 = 1e-9;

fn assert_angle_eq(actual: f64, expected: f64) {
    let diff = (actual - expected).rem_euclid(360.0);
    let diff = diff.min(360.0 - diff);
    assert!(
        diff < TOLERANCE,
        "angle {actual} differs from {expected} by {diff}"
    );
}

#[test]
fn reference_conversion_is_reproducible() {
    let (inclination, node, arg_peri) =
        convert_elements(0.0, 0.0, Some(0.0), Some(0.0), Some(0.0), false);
    assert_relative_eq!(inclination, 90.0, epsilon = TOLERANCE);
    assert_relative_eq!(node, 270.0, epsilon = TOLERANCE);
    assert_relative_eq!(arg_peri, 113.4392911, epsilon = TOLERANCE);

    let again = convert_elements(0.0, 0.0, Some(0.0), Some(0.0), Some(0.0), false);
    assert_eq!(again, (inclination, node, arg_peri));
}

#[test]
fn converted_elements_recover_input_through_inverse_rotation() {
    let cases = [
        (45.0, 30.0, (10.0, 20.0, 30.0)),
        (123.4, -56.7, (100.0, 150.0, 200.0)),
        (350.0, -12.5, (359.0, 90.0, 1.0)),
        (0.0, 90.0, (12.0, 0.5, 300.0)),
        (180.0, -90.0, (45.0, 179.5, 90.0)),
    ];

    for (ra, dec, (arg_peri, inclination, node)) in cases {
        let converter = FrameConverter::new(ra, dec);
        let converted = converter.convert(Some(arg_peri), Some(inclination), Some(node));

        // Undo the basis change on the converted orientation and decompose again: the
        // input plane-of-sky triple must come back, up to the canonical representation.
        let rot = plane_of_sky_rotation(&Direction::new(ra, dec));
        let orbit = orbit_orientation(
            converted.arg_peri * RADEG,
            converted.inclination * RADEG,
            converted.node * RADEG,
        );
        let (a, b, c) = euler_zxz(&(rot.transpose() * orbit));

        assert_angle_eq(a / RADEG, arg_peri);
        assert_relative_eq!(b / RADEG, inclination, epsilon = 1e-7);
        assert_angle_eq(c / RADEG, node);
    }
}

#[test]
fn outputs_are_normalized_over_a_coarse_grid() {
    for ra in [0.0, 90.0, 222.2] {
        for dec in [-90.0, -45.0, 0.0, 60.0, 90.0] {
            for angle in [-450.0, -0.0000001, 0.0, 179.9, 360.0, 719.9] {
                let (inclination, node, arg_peri) = convert_elements(
                    ra,
                    dec,
                    Some(angle),
                    Some(angle),
                    Some(angle),
                    false,
                );
                assert!((0.0..360.0).contains(&arg_peri), "arg_peri = {arg_peri}");
                assert!((0.0..360.0).contains(&node), "node = {node}");
                assert!(inclination.is_finite());
            }
        }
    }
}

#[test]
fn exoplanet_shift_matches_explicit_offset() {
    let shifted = convert_elements(88.7929, 7.4070, Some(60.0), Some(45.0), Some(90.0), true);
    let explicit = convert_elements(88.7929, 7.4070, Some(60.0), Some(45.0), Some(270.0), false);
    assert_eq!(shifted, explicit);
}

#[test]
fn omission_falls_back_to_pole_defaults() {
    let converter = FrameConverter::new(310.0, 18.0);
    let defaults = converter.defaults();

    let omitted = convert_elements(310.0, 18.0, Some(25.0), None, None, false);
    let explicit = convert_elements(
        310.0,
        18.0,
        Some(25.0),
        Some(defaults.node),
        Some(defaults.arg_peri),
        false,
    );
    assert_eq!(omitted, explicit);
}
