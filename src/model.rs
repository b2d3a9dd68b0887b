use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which of the two engine execution modes a request runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// One stochastically chosen transformed variant.
    Random,
    /// Every structurally distinct transformed variant.
    Exhaustive,
}

/// Substitution rule-set identifier (e.g. `basic`, `intermediate`,
/// `advanced`, `covid_basic`). Opaque to the pipeline beyond normalization;
/// the engine decides whether it is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionMode(String);

impl SubstitutionMode {
    /// Normalize a user-supplied mode name: trimmed, lowercased.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubstitutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Randomness parameters for `ExecutionMode::Random`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Per substitution-type chance that the type is applied at all. [0, 1].
    pub probability: f64,
    /// Fraction of eligible positions within an applied type that are
    /// actually substituted. [0, 1].
    pub frequency: f64,
    /// If true, all occurrences of the same source character receive the
    /// same substitute within one run.
    pub uniform: bool,
}

/// Execution selector. Random carries its configuration so that an
/// exhaustive request with random parameters is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Execution {
    Random(RandomConfig),
    Exhaustive,
}

impl Execution {
    pub fn mode(&self) -> ExecutionMode {
        match self {
            Execution::Random(_) => ExecutionMode::Random,
            Execution::Exhaustive => ExecutionMode::Exhaustive,
        }
    }
}

/// A validated transformation request, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationRequest {
    /// Non-empty input text.
    pub text: String,
    pub mode: SubstitutionMode,
    pub execution: Execution,
}

/// Raw engine output for one request. `Variants` comes back unfiltered and
/// may contain duplicates; the aggregator collapses them.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationResult {
    Single(String),
    Variants(Vec<String>),
}

/// What the presentation layer renders for one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPayload {
    /// Distinct result count. Present only for exhaustive runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_count: Option<usize>,
    pub rendered_text: String,
    pub truncated: bool,
}

/// The record a download artifact is built from. Field names are the
/// artifact's on-wire JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Output")]
    pub output: String,
}

/// Client-side configuration for one engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub base_url: String,
    /// Correlation id attached to engine requests and log lines.
    pub request_id: String,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    pub user_agent: String,
}
