use thiserror::Error;

use crate::geometry::Kind;

/// Errors that can occur while building bounds or clipping geometries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid bounds ({left}, {bottom}, {right}, {top}): expected finite coordinates with left <= right and bottom <= top")]
    InvalidBounds {
        left: f64,
        bottom: f64,
        right: f64,
        top: f64,
    },

    #[error("invalid {kind}: {reason}")]
    InvalidGeometry { kind: Kind, reason: String },

    #[error("failed to parse bounds: {0}")]
    ParseBounds(String),
}

pub type Result<T> = std::result::Result<T, Error>;
