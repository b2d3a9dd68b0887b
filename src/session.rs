//! Per-session store of the last completed transformation.
//!
//! One `SessionState` belongs to exactly one user session. The dispatcher
//! holds it `&mut` for the duration of a submit, which also gives the
//! single-flight guarantee: a second transformation or export cannot start
//! while one is outstanding.

use crate::model::TransformRecord;

#[derive(Debug, Default)]
pub struct SessionState {
    last_input_text: Option<String>,
    last_record: Option<TransformRecord>,
    completed_utc: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a completed transformation, overwriting any prior record.
    /// Only called once dispatch and aggregation have both succeeded, so the
    /// store never holds a partial result.
    pub fn record(&mut self, input: &str, full_serialized: String, completed_utc: String) {
        self.last_input_text = Some(input.to_string());
        self.last_record = Some(TransformRecord {
            input: input.to_string(),
            output: full_serialized,
        });
        self.completed_utc = Some(completed_utc);
    }

    pub fn last_input_text(&self) -> Option<&str> {
        self.last_input_text.as_deref()
    }

    pub fn last_record(&self) -> Option<&TransformRecord> {
        self.last_record.as_ref()
    }

    pub fn completed_utc(&self) -> Option<&str> {
        self.completed_utc.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.last_record.is_none()
    }
}
