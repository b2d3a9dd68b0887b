//! Result aggregation.
//!
//! Shapes raw engine output for display: exhaustive collections are
//! deduplicated, counted, serialized and truncated; random results pass
//! through verbatim. Truncation affects the rendered text only, never what
//! the session retains.

use crate::model::{DisplayPayload, TransformationResult};
use std::collections::BTreeSet;

/// Truncation threshold, counted in characters of the serialized result.
const DISPLAY_CHAR_LIMIT: usize = 500;

/// One post-processed run: what to render plus the full serialization the
/// session retains for download.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated {
    pub payload: DisplayPayload,
    pub full_serialized: String,
}

pub fn aggregate(result: &TransformationResult) -> Aggregated {
    match result {
        TransformationResult::Single(text) => Aggregated {
            payload: DisplayPayload {
                summary_count: None,
                rendered_text: text.clone(),
                truncated: false,
            },
            full_serialized: text.clone(),
        },
        TransformationResult::Variants(raw) => {
            // Sorted set: collapses engine duplicates and keeps the
            // serialized form stable across runs.
            let distinct: BTreeSet<&str> = raw.iter().map(String::as_str).collect();
            let count = distinct.len();
            let full = serde_json::to_string(&distinct).unwrap_or_else(|_| "[]".into());

            let (rendered_text, truncated) = if full.chars().count() >= DISPLAY_CHAR_LIMIT {
                let prefix: String = full.chars().take(DISPLAY_CHAR_LIMIT).collect();
                (
                    format!(
                        "{prefix} ...\nWARNING: truncated output. \
                         Use download to get all {count} distinct results."
                    ),
                    true,
                )
            } else {
                (full.clone(), false)
            };

            Aggregated {
                payload: DisplayPayload {
                    summary_count: Some(count),
                    rendered_text,
                    truncated,
                },
                full_serialized: full,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(items: &[&str]) -> TransformationResult {
        TransformationResult::Variants(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn single_result_passes_through_verbatim() {
        let aggregated = aggregate(&TransformationResult::Single("l33t".into()));
        assert_eq!(aggregated.payload.rendered_text, "l33t");
        assert_eq!(aggregated.payload.summary_count, None);
        assert!(!aggregated.payload.truncated);
        assert_eq!(aggregated.full_serialized, "l33t");
    }

    #[test]
    fn engine_duplicates_are_collapsed() {
        let aggregated = aggregate(&variants(&["l33t", "le3t", "l33t", "le3t", "l33t"]));
        assert_eq!(aggregated.payload.summary_count, Some(2));

        let parsed: Vec<String> = serde_json::from_str(&aggregated.full_serialized).unwrap();
        let mut deduped = parsed.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(parsed, deduped, "serialized set must not repeat strings");
    }

    #[test]
    fn serialization_is_stable_across_input_order() {
        let a = aggregate(&variants(&["b", "a", "c"]));
        let b = aggregate(&variants(&["c", "b", "a", "b"]));
        assert_eq!(a.full_serialized, b.full_serialized);
    }

    #[test]
    fn short_output_is_not_truncated() {
        let aggregated = aggregate(&variants(&["l33t", "le3t"]));
        assert!(!aggregated.payload.truncated);
        assert_eq!(aggregated.payload.rendered_text, aggregated.full_serialized);
    }

    #[test]
    fn long_output_is_truncated_to_a_500_char_prefix() {
        let items: Vec<String> = (0..50).map(|i| format!("variant_{i:03}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let aggregated = aggregate(&variants(&refs));

        assert!(aggregated.full_serialized.chars().count() >= 500);
        assert!(aggregated.payload.truncated);
        let prefix: String = aggregated.full_serialized.chars().take(500).collect();
        assert!(
            aggregated.payload.rendered_text.starts_with(&prefix),
            "rendered text must start with exactly the first 500 characters"
        );
        assert!(aggregated
            .payload
            .rendered_text
            .contains("50 distinct results"));
    }

    #[test]
    fn below_limit_output_is_rendered_in_full() {
        let items: Vec<String> = (0..10).map(|i| format!("v{i}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let aggregated = aggregate(&variants(&refs));
        assert!(aggregated.full_serialized.chars().count() < 500);
        assert!(!aggregated.payload.truncated);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let items: Vec<String> = (0..150).map(|i| format!("ñ{i:03}")).collect();
        let refs: Vec<&str> = items.iter().map(String::as_str).collect();
        let aggregated = aggregate(&variants(&refs));

        assert!(aggregated.full_serialized.chars().count() >= 500);
        assert!(aggregated.payload.truncated);
        // The prefix is taken on char boundaries, never mid-sequence.
        let prefix: String = aggregated.full_serialized.chars().take(500).collect();
        assert!(aggregated.payload.rendered_text.starts_with(&prefix));
    }
}
