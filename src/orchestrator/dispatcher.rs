//! Request dispatch.
//!
//! One engine call per submit; no retries, no resampling. The session is
//! committed only after both dispatch and aggregation have completed, so it
//! never holds a partial result.

use crate::engine::{EngineError, EngineOutput, TransformationEngine};
use crate::error::LeetError;
use crate::model::{DisplayPayload, Execution, TransformationRequest, TransformationResult};
use crate::orchestrator::aggregate;
use crate::session::SessionState;

/// Invoke the engine once and check the reply shape against the requested
/// execution mode. Exhaustive collections come back unfiltered; the
/// aggregator owns deduplication.
pub async fn dispatch<E: TransformationEngine>(
    engine: &E,
    request: &TransformationRequest,
) -> Result<TransformationResult, EngineError> {
    let output = engine.transform(request).await?;
    match (&request.execution, output) {
        (Execution::Random(_), EngineOutput::Single(text)) => {
            Ok(TransformationResult::Single(text))
        }
        (Execution::Exhaustive, EngineOutput::Variants(raw)) => {
            Ok(TransformationResult::Variants(raw))
        }
        (Execution::Random(_), EngineOutput::Variants(_)) => Err(EngineError::Protocol(
            "engine returned a variant collection for a random-mode request".into(),
        )),
        (Execution::Exhaustive, EngineOutput::Single(_)) => Err(EngineError::Protocol(
            "engine returned a single result for an exhaustive request".into(),
        )),
    }
}

/// Run one complete submit: dispatch, aggregate, commit to the session.
///
/// Holding the session `&mut` for the whole operation is what makes submits
/// single-flight per session.
pub async fn submit<E: TransformationEngine>(
    engine: &E,
    request: &TransformationRequest,
    session: &mut SessionState,
) -> Result<DisplayPayload, LeetError> {
    let result = dispatch(engine, request).await?;
    let aggregate::Aggregated {
        payload,
        full_serialized,
    } = aggregate::aggregate(&result);

    tracing::info!(
        mode = ?request.execution.mode(),
        count = payload.summary_count,
        truncated = payload.truncated,
        "transformation completed"
    );
    session.record(&request.text, full_serialized, now_utc());
    Ok(payload)
}

fn now_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into())
}
