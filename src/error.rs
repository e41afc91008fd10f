//! Error types for mazestep.

use thiserror::Error;

/// Errors raised when building a [`Maze`](crate::maze::Maze).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Width and height must both be odd and at least 3.
    #[error("invalid maze dimensions {width}x{height}: width and height must be odd numbers of at least 3")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
}

impl From<MazeError> for std::io::Error {
    fn from(err: MazeError) -> Self {
        std::io::Error::other(err)
    }
}
