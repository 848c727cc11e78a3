//! Errors triggered by tree operations.

/// Errors triggered by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A key could not be ordered against the keys already stored in the
    /// tree. With float keys this is what a `NaN` turns into.
    #[error("key is not comparable with existing keys")]
    InvalidKey,
}
