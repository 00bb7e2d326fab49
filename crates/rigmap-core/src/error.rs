//! Error types for preset handling.
//!
//! Most anomalies in this crate are not errors: a missing or misnamed preset
//! signals absence, malformed preset lines degrade to no-ops, and an
//! unresolvable bone name is cleared rather than reported. What remains is
//! genuine I/O failure on a preset file that was found on disk.

use thiserror::Error;

/// Failure while reading or installing preset files.
#[derive(Debug, Error)]
pub enum PresetError {
    /// I/O error on a preset file or directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
