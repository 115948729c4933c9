use thiserror::Error;

/// Errors surfaced by the solver's call interface.
///
/// All of them are raised before any search work begins, so a failed call
/// never carries partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("required argument `{name}` was not supplied")]
    NullArgument { name: &'static str },

    #[error("invalid board dimensions {width}x{height}: width and height must be greater than zero")]
    InvalidArgument { width: i32, height: i32 },

    #[error("insufficient letters to fill the board: need {required}, got {actual}")]
    OutOfRange { required: usize, actual: usize },
}

impl SolverError {
    /// Stable short code for each variant
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::NullArgument { .. } => "E001",
            SolverError::InvalidArgument { .. } => "E002",
            SolverError::OutOfRange { .. } => "E003",
        }
    }
}
