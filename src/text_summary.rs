//! Text summary builder for CLI output.
//!
//! Formats human-readable lines for text mode; JSON mode prints the payload
//! directly.

use crate::model::{DisplayPayload, ExecutionMode};
use crate::session::SessionState;

/// Pre-formatted lines for text output.
pub struct TextSummary {
    pub lines: Vec<String>,
}

pub fn build_text_summary(
    mode: ExecutionMode,
    payload: &DisplayPayload,
    session: &SessionState,
) -> TextSummary {
    let mut lines = Vec::new();

    // The truncated rendering already carries its own count hint.
    if mode == ExecutionMode::Exhaustive && !payload.truncated {
        if let Some(count) = payload.summary_count {
            lines.push(format!("Total distinct results: {count}"));
        }
    }
    lines.push(payload.rendered_text.clone());
    if let Some(completed) = session.completed_utc() {
        lines.push(format!("Completed: {completed}"));
    }

    TextSummary { lines }
}
