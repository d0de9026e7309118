use crate::constants::Degree;
use crate::orbframe_errors::OrbFrameError;

fn parse_field(field: &str) -> Result<f64, OrbFrameError> {
    field
        .parse::<f64>()
        .map_err(|_| OrbFrameError::InvalidAngleFormat(field.to_string()))
}

fn check_finite(value: f64) -> Result<Degree, OrbFrameError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OrbFrameError::NonFiniteAngle(value))
    }
}

/// Parse a right ascension string to degrees.
///
/// Arguments
/// ---------
/// * `ra`: either decimal degrees (e.g. `"88.7929"`) or sexagesimal hours in the format
///   `HH MM SS.SS` (e.g. `"05 55 10.31"`)
///
/// Returns
/// -------
/// * The right ascension in degrees, or an [`OrbFrameError`] if the input is malformed
///   or not finite.
pub fn parse_ra(ra: &str) -> Result<Degree, OrbFrameError> {
    let parts: Vec<&str> = ra.split_whitespace().collect();
    let value = match parts.as_slice() {
        [single] => parse_field(single)?,
        [h, m, s] => {
            let h = parse_field(h)?;
            let m = parse_field(m)?;
            let s = parse_field(s)?;
            (h + m / 60.0 + s / 3600.0) * 15.0
        }
        _ => return Err(OrbFrameError::InvalidAngleFormat(ra.to_string())),
    };
    check_finite(value)
}

/// Parse a declination string to degrees.
///
/// Arguments
/// ---------
/// * `dec`: either decimal degrees (e.g. `"-12.5"`) or sexagesimal degrees in the format
///   `±DD MM SS.S` (e.g. `"+07 24 25.4"`); the sign is carried by the degrees field
///
/// Returns
/// -------
/// * The declination in degrees, or an [`OrbFrameError`] if the input is malformed
///   or not finite.
pub fn parse_dec(dec: &str) -> Result<Degree, OrbFrameError> {
    let parts: Vec<&str> = dec.split_whitespace().collect();
    let value = match parts.as_slice() {
        [single] => parse_field(single)?,
        [d, m, s] => {
            let sign = if d.starts_with('-') { -1.0 } else { 1.0 };
            let d = parse_field(d.trim_start_matches(&['-', '+'][..]))?;
            let m = parse_field(m)?;
            let s = parse_field(s)?;
            sign * (d + m / 60.0 + s / 3600.0)
        }
        _ => return Err(OrbFrameError::InvalidAngleFormat(dec.to_string())),
    };
    check_finite(value)
}
