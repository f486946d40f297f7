use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    #[error("Ring vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    #[error("Ring has {distinct} distinct points after deduplication, need at least 3")]
    TooFewPoints { distinct: usize },

    #[error("Ring has zero area, winding is undefined")]
    ZeroArea,

    #[error("Simplification tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("A closed ring needs max_points of at least 4, got {0}")]
    InvalidMaxPoints(usize),
}
