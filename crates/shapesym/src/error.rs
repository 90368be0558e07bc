//! Error type for shape construction and transforms.

/// A shape invariant was violated; carries a human-readable reason.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid shape: {reason}")]
pub struct InvalidShapeError {
    reason: String,
}

impl InvalidShapeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
