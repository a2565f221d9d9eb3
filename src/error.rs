//! Error types shared across this crate.

use thiserror::Error;

/// Result alias used by fallible [`crate::database::dict::Dict`] operations.
pub type DictResult<T> = Result<T, DictError>;

/// Recoverable precondition violations surfaced by [`crate::database::dict::Dict`].
///
/// Fingerprint mismatches on unsafe iterators and deep-chain corruption are
/// deliberately *not* represented here: both signal that the dict's
/// invariants are already broken, so the crate panics instead of returning
/// an error a caller might be tempted to ignore.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictError {
    #[error("cannot resize while an incremental rehash is in progress")]
    AlreadyRehashing,

    #[error("requested capacity {requested} is smaller than the current element count {used}")]
    CapacityTooSmall { requested: usize, used: usize },

    #[error("resize requested while resize_enabled is false")]
    ResizeDisabled,
}
