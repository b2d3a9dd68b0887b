//! Transformation engine boundary.
//!
//! The substitution algorithm is not implemented in this repository. It is
//! an external collaborator reached through [`TransformationEngine`]; the
//! shipped implementation is [`RemoteEngine`], an HTTP client to the
//! transformation service.

mod remote;

pub use remote::RemoteEngine;

use crate::model::TransformationRequest;
use thiserror::Error;

/// Raw engine reply. The request's execution mode determines which shape a
/// conforming engine returns.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutput {
    Single(String),
    Variants(Vec<String>),
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine refused the request, e.g. an unsupported substitution mode.
    #[error("engine rejected request: {0}")]
    Rejected(String),

    #[error("engine transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("engine returned HTTP {status}")]
    Http { status: u16 },

    /// The reply could not be decoded, or its shape does not match the
    /// requested execution mode.
    #[error("engine protocol error: {0}")]
    Protocol(String),
}

pub trait TransformationEngine {
    /// Run one transformation. Exactly one engine call per invocation; the
    /// engine owns all randomness.
    fn transform(
        &self,
        request: &TransformationRequest,
    ) -> impl std::future::Future<Output = Result<EngineOutput, EngineError>> + Send;
}
