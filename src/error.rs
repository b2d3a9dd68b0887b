use crate::engine::EngineError;
use thiserror::Error;

/// Pipeline-level error taxonomy surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum LeetError {
    /// Empty or absent input text. By contract this is a silent no-op:
    /// callers must produce no output and leave the session untouched.
    #[error("no input text provided")]
    MissingInput,

    #[error("{name} must be between 0 and 1 (got {value})")]
    OutOfRange { name: &'static str, value: f64 },

    /// Partial or inconsistent random-parameter supply.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("transformation engine failure: {0}")]
    Engine(#[from] EngineError),

    #[error("nothing to download: no completed transformation in this session")]
    ExportPrecondition,
}

impl LeetError {
    /// Whether the presentation layer should swallow this error without
    /// reporting it. Only `MissingInput` qualifies.
    pub fn is_silent(&self) -> bool {
        matches!(self, LeetError::MissingInput)
    }
}
