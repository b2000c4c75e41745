use thiserror::Error as ThisError;

use crate::Region;

/// Error types
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("cannot do even diameters: {0}")]
    EvenDiameter(i32),
    #[error("cannot do diameter <= 1: {0}")]
    DiameterTooSmall(i32),
    #[error("cannot do length < 1: {0}")]
    LengthTooSmall(i32),
    #[error("invalid axis: {0}")]
    InvalidAxis(String),
    #[error("arc tunnel cannot run along the y axis")]
    VerticalArcTunnel,
    #[error("brick range (br) must be set before generating regions")]
    BrickRangeUnset,
    #[error("volume budget must be at least 1")]
    ZeroVolumeBudget,
    #[error("cannot split unit region {0}")]
    UnsplittableRegion(Region),
    #[error("command batch has {count} commands, limit is {limit}")]
    CommandLimitExceeded { count: usize, limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
