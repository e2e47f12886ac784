use crate::utils::Float;
use thiserror::Error;

/// Errors raised when shapes or settings are built from untrusted input.
/// The collision tests themselves never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    #[error("point-on-segment buffer must be finite and non-negative, got {0}")]
    InvalidBuffer(Float),
}
