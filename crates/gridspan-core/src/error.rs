//! Error types for gridspan-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridspan-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed `row_col` coordinate key
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Coordinate lies outside the grid
    #[error("Coordinate {coordinate} out of bounds ({rows} rows x {columns} columns)")]
    CoordinateOutOfBounds {
        coordinate: String,
        rows: u32,
        columns: u32,
    },

    /// Linear cell index past the end of the flat list
    #[error("Cell index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Grid dimensions that cannot describe a rectangular grid
    #[error("Invalid grid dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: usize, columns: u32 },

    /// Two regions claim the same cell
    #[error("Cell {0} is covered by more than one region")]
    Overlap(String),

    /// No region covers a cell
    #[error("Cell {0} is not covered by any region")]
    Gap(String),

    /// Absorbed cell whose back-references do not match a live anchor
    #[error("Cell {0} references a region that no longer exists")]
    StaleBackReference(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
