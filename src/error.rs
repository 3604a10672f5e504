use thiserror::Error;

use crate::position::Position;

/// Errors from the checked input operations.
///
/// Rule failure is never an error; these only come from constructors and the
/// bounds-checked alternatives to the unchecked hot path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{label}: no NUL terminator in buffer")]
    MissingSentinel { label: String },

    #[error("{label}:{position}: cannot advance {requested} bytes, only {available} remain")]
    PastEnd {
        label: String,
        position: Position,
        requested: usize,
        available: usize,
    },
}
