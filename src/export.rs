//! Download artifacts.
//!
//! Packages the session's last completed transformation as a downloadable
//! file: a JSON record of the original input and the full, untruncated
//! serialized result. Reading the session is all this module does; it never
//! mutates it, so downloads are idempotent and repeatable.

use crate::error::LeetError;
use crate::session::SessionState;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Fallback artifact name when the input is not a single token.
const GENERIC_FILENAME: &str = "pyleetspeak_results.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct FileArtifact {
    pub filename: String,
    pub content: String,
}

/// Build the download artifact from the most recent completed run.
///
/// A session with no completed transformation is a precondition violation,
/// reported as [`LeetError::ExportPrecondition`]; an artifact with empty
/// data is never produced.
pub fn build_artifact(session: &SessionState) -> Result<FileArtifact, LeetError> {
    let record = session
        .last_record()
        .ok_or(LeetError::ExportPrecondition)?;

    let content = serde_json::json!({
        "Input": record.input,
        "Output": record.output,
    })
    .to_string();

    Ok(FileArtifact {
        filename: derive_filename(&record.input),
        content,
    })
}

/// Download boundary: no-op when the triggering event is absent.
pub fn download(clicked: bool, session: &SessionState) -> Result<Option<FileArtifact>, LeetError> {
    if !clicked {
        return Ok(None);
    }
    build_artifact(session).map(Some)
}

/// Write the artifact under its derived filename and return the path.
pub fn write_artifact(dir: &Path, artifact: &FileArtifact) -> Result<PathBuf> {
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.content)
        .with_context(|| format!("write artifact {}", path.display()))?;
    Ok(std::fs::canonicalize(&path).unwrap_or(path))
}

/// Single whitespace-delimited token: name the file after it. Anything else
/// gets the generic name.
fn derive_filename(input: &str) -> String {
    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => format!("{token}_results.txt"),
        _ => GENERIC_FILENAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransformRecord;

    fn session_with(input: &str, output: &str) -> SessionState {
        let mut session = SessionState::new();
        session.record(input, output.into(), "2025-01-01T00:00:00Z".into());
        session
    }

    #[test]
    fn single_token_input_names_the_file() {
        assert_eq!(derive_filename("leet"), "leet_results.txt");
        assert_eq!(derive_filename("  leet  "), "leet_results.txt");
    }

    #[test]
    fn multi_token_input_gets_the_generic_name() {
        assert_eq!(derive_filename("leet speak"), "pyleetspeak_results.txt");
    }

    #[test]
    fn empty_session_is_a_precondition_violation() {
        let err = build_artifact(&SessionState::new()).unwrap_err();
        assert!(matches!(err, LeetError::ExportPrecondition));
    }

    #[test]
    fn artifact_round_trips_to_the_stored_record() {
        let session = session_with("leet speak", r#"["l33t sp34k","le3t spe4k"]"#);
        let artifact = build_artifact(&session).unwrap();
        assert_eq!(artifact.filename, "pyleetspeak_results.txt");

        let parsed: TransformRecord = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(parsed.input, "leet speak");
        assert_eq!(parsed.output, r#"["l33t sp34k","le3t spe4k"]"#);
    }

    #[test]
    fn absent_click_event_is_a_no_op() {
        let session = session_with("leet", "l33t");
        assert_eq!(download(false, &session).unwrap(), None);
        // Even with an empty session the no-op wins over the precondition.
        assert_eq!(download(false, &SessionState::new()).unwrap(), None);
    }

    #[test]
    fn download_is_repeatable() {
        let session = session_with("leet", "l33t");
        let first = download(true, &session).unwrap().unwrap();
        let second = download(true, &session).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_artifact_places_the_file_under_the_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_with("leet", "l33t");
        let artifact = build_artifact(&session).unwrap();

        let path = write_artifact(dir.path(), &artifact).unwrap();
        assert!(path.ends_with("leet_results.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), artifact.content);
    }
}
