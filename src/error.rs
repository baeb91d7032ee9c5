use thiserror::Error;

/// Top-level error type for the hullis library.
#[derive(Debug, Error)]
pub enum HullisError {
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors raised while rejecting malformed input at the API boundary.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot compute the hull of an empty point set")]
    EmptyPointSet,
}

/// Convenience type alias for results using [`HullisError`].
pub type Result<T> = std::result::Result<T, HullisError>;
