//! Parameter panel descriptors.
//!
//! A pure description of which controls the presentation layer should offer
//! for a given execution-mode selector. Front ends render these however they
//! like; the pipeline only cares that the control defaults here are the
//! single source of the fallback values applied during validation.

use crate::model::ExecutionMode;
use serde::Serialize;

pub const DEFAULT_PROBABILITY: f64 = 0.5;
pub const DEFAULT_FREQUENCY: f64 = 0.5;
pub const DEFAULT_UNIFORM: bool = false;
const SLIDER_STEP: f64 = 0.05;

/// One input control in the parameter panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelControl {
    Slider {
        id: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    Toggle {
        id: &'static str,
        label: &'static str,
        default: bool,
    },
}

impl PanelControl {
    pub fn id(&self) -> &'static str {
        match self {
            PanelControl::Slider { id, .. } | PanelControl::Toggle { id, .. } => id,
        }
    }
}

/// The set of controls for one execution-mode selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterPanel {
    pub controls: Vec<PanelControl>,
}

impl ParameterPanel {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Describe the parameter controls for the given selector.
///
/// Random mode exposes the probability and frequency sliders plus the
/// uniform-substitution toggle; exhaustive mode takes no parameters and
/// yields an empty panel.
pub fn parameter_panel(mode: ExecutionMode) -> ParameterPanel {
    let controls = match mode {
        ExecutionMode::Random => vec![
            PanelControl::Slider {
                id: "probability",
                label: "Probability of applying each substitution type",
                min: 0.0,
                max: 1.0,
                step: SLIDER_STEP,
                default: DEFAULT_PROBABILITY,
            },
            PanelControl::Slider {
                id: "frequency",
                label: "How frequently substitution is applied",
                min: 0.0,
                max: 1.0,
                step: SLIDER_STEP,
                default: DEFAULT_FREQUENCY,
            },
            PanelControl::Toggle {
                id: "uniform",
                label: "Same substitute for every occurrence of a character",
                default: DEFAULT_UNIFORM,
            },
        ],
        ExecutionMode::Exhaustive => Vec::new(),
    };
    ParameterPanel { controls }
}
