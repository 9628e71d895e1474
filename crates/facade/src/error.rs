use shelf_core::error::CoreError;
use shelf_core::validation::ValidationResult;

/// Error type for facade operations.
///
/// Expected validation rejections carry the full event list so consumers can
/// map each violation; everything else is an infrastructure failure from the
/// layers below.
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// Input rejected by validation.
    #[error("Validation failed: {0}")]
    Invalid(ValidationResult),

    /// A domain or repository error from `shelf-core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FacadeError {
    /// The validation events, if this is a validation rejection.
    pub fn events(&self) -> Option<&ValidationResult> {
        match self {
            FacadeError::Invalid(result) => Some(result),
            FacadeError::Core(_) => None,
        }
    }
}

/// Convenience type alias for facade return values.
pub type FacadeResult<T> = Result<T, FacadeError>;
