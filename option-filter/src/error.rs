//! Error types

use std::panic::Location;

use optdom::DomError;

/// What went wrong while binding or initializing a filter.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The target reference or selector resolved to nothing.
    #[error("select element not found for {target}")]
    TargetMissing { target: String },

    /// The target resolved to an element that is not a `select`.
    #[error("target is <{tag}>, not a select element")]
    TargetWrongType { tag: String },

    /// The target has no parent to receive the filter input.
    #[error("select element is not attached to the document")]
    Detached,

    #[error("filter is already initialized")]
    AlreadyInitialized,

    #[error("filter has not been initialized")]
    NotInitialized,

    /// The document rejected a mutation.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Error raised by [`OptionFilter`](crate::OptionFilter).
///
/// Displays as the fixed name [`OptionFilterError::NAME`], the message and
/// the source location that produced the error.
#[derive(Debug, thiserror::Error)]
#[error("OptionFilterError:\n{kind}\n\n    at {location}")]
pub struct OptionFilterError {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl OptionFilterError {
    pub const NAME: &'static str = "OptionFilterError";

    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Where the error was raised from.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn is_target_missing(&self) -> bool {
        matches!(self.kind, ErrorKind::TargetMissing { .. })
    }

    pub fn is_target_wrong_type(&self) -> bool {
        matches!(self.kind, ErrorKind::TargetWrongType { .. })
    }
}

impl From<DomError> for OptionFilterError {
    #[track_caller]
    fn from(err: DomError) -> Self {
        Self::new(ErrorKind::Dom(err))
    }
}
