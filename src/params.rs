//! Parameter model: validates and normalizes user-chosen execution
//! parameters into a typed [`TransformationRequest`].

use crate::error::LeetError;
use crate::model::{Execution, RandomConfig, SubstitutionMode, TransformationRequest};
use crate::panel::{DEFAULT_FREQUENCY, DEFAULT_PROBABILITY, DEFAULT_UNIFORM};

/// Raw, pre-validation inputs as delivered by a front end.
///
/// The execution mode is an explicit selector (`exhaustive`), never inferred
/// from which parameter values happen to be present.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    pub text: Option<String>,
    pub mode: String,
    pub exhaustive: bool,
    pub probability: Option<f64>,
    pub frequency: Option<f64>,
    pub uniform: Option<bool>,
}

impl RawParams {
    /// Build raw parameters from an ordered value list as delivered by a
    /// dynamic front end. Values map by fixed position to
    /// {probability, frequency, uniform (nonzero = on)}; an empty list
    /// selects exhaustive mode.
    pub fn from_positional(
        text: Option<String>,
        mode: &str,
        values: &[f64],
    ) -> Result<Self, LeetError> {
        match values {
            [] => Ok(Self {
                text,
                mode: mode.to_string(),
                exhaustive: true,
                ..Self::default()
            }),
            [probability, frequency, uniform] => Ok(Self {
                text,
                mode: mode.to_string(),
                exhaustive: false,
                probability: Some(*probability),
                frequency: Some(*frequency),
                uniform: Some(*uniform != 0.0),
            }),
            other => Err(LeetError::Configuration(format!(
                "expected 0 or 3 positional parameter values, got {}",
                other.len()
            ))),
        }
    }
}

/// Validate raw inputs into a dispatchable request.
///
/// Pure function, no side effects. Empty or absent text is `MissingInput`,
/// which callers treat as a silent no-op.
pub fn validate(raw: RawParams) -> Result<TransformationRequest, LeetError> {
    let text = match raw.text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(LeetError::MissingInput),
    };

    let mode = SubstitutionMode::new(&raw.mode);
    if mode.is_empty() {
        return Err(LeetError::Configuration(
            "substitution mode must not be empty".into(),
        ));
    }

    let execution = if raw.exhaustive {
        if raw.probability.is_some() || raw.frequency.is_some() || raw.uniform.is_some() {
            return Err(LeetError::Configuration(
                "random parameters cannot be combined with exhaustive mode".into(),
            ));
        }
        Execution::Exhaustive
    } else {
        let config = match (raw.probability, raw.frequency, raw.uniform) {
            (None, None, None) => RandomConfig {
                probability: DEFAULT_PROBABILITY,
                frequency: DEFAULT_FREQUENCY,
                uniform: DEFAULT_UNIFORM,
            },
            (Some(probability), Some(frequency), Some(uniform)) => RandomConfig {
                probability,
                frequency,
                uniform,
            },
            _ => {
                return Err(LeetError::Configuration(
                    "probability, frequency and uniform must be supplied together".into(),
                ))
            }
        };
        check_unit_interval("probability", config.probability)?;
        check_unit_interval("frequency", config.frequency)?;
        Execution::Random(config)
    };

    Ok(TransformationRequest {
        text,
        mode,
        execution,
    })
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<(), LeetError> {
    // NaN fails the containment check and is rejected along with out-of-range values.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LeetError::OutOfRange { name, value })
    }
}
