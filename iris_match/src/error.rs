use thiserror::Error;

use crate::iris_code::DecodeError;

/// Recoverable failures of enrollment and recognition.
///
/// Neither kind leaves a mark on the store; the caller is expected to ask
/// for fresh input and try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Raw input is not a non-negative hex literal within the 63-bit budget.
    #[error("invalid iris code: {0}")]
    Decode(#[from] DecodeError),

    /// Recognition requested for a name that was never enrolled.
    #[error("name not found: {0}")]
    NotFound(String),
}

impl MatchError {
    #[inline]
    pub fn not_found(name: &str) -> Self {
        Self::NotFound(name.to_string())
    }
}
