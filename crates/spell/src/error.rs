//! Error types for spell simulation.

use thiserror::Error;

/// Errors that can occur while simulating spell state series.
///
/// Duration parameters are validated when the distributions are built,
/// so the simulation itself can only fail on caller-supplied buffers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// Output buffer length does not match the number of dates.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// The number of dates to simulate.
        expected: usize,
        /// The actual buffer length.
        got: usize,
    },
}
