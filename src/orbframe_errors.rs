use thiserror::Error;

/// Boundary-layer error taxonomy.
///
/// The conversion core is total over finite inputs and defines no errors of its own; every
/// variant here belongs to input handling in front of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrbFrameError {
    #[error("Invalid angle format: {0}")]
    InvalidAngleFormat(String),

    #[error("Angle value is not finite: {0}")]
    NonFiniteAngle(f64),
}
