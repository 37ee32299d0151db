//! Error types shared across the crate.

use crate::vehicle::CarId;

/// Errors raised at the fallible edges of the crate.
///
/// The geometry kernel, danger classification and track reconstruction never
/// fail; only strict input validation and reporting configuration do.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("duplicate vehicle id {id} in frame {frame}")]
    DuplicateId { id: CarId, frame: usize },

    #[error("invalid frame rate {0}: must be finite and positive")]
    InvalidFrameRate(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
