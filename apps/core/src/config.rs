//! Pipeline configuration.
//!
//! Thresholds that govern report aggregation. Lexicon tables are compiled
//! into the individual classifiers and are not configurable at runtime.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AnalysisError;

/// Tunable thresholds for the analysis pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Bias score above which the high-bias risk flag is raised. Value between 0.0 and 10.0.
    #[validate(range(min = 0.0, max = 10.0))]
    pub bias_risk_threshold: f32,
    /// Subjectivity score above which the high-subjectivity risk flag is raised.
    #[validate(range(min = 0.0, max = 1.0))]
    pub subjectivity_risk_threshold: f32,
    /// Maximum number of fact claims kept in a report.
    #[validate(range(min = 1, max = 20))]
    pub max_claims: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bias_risk_threshold: 5.0,
            subjectivity_risk_threshold: 0.6,
            max_claims: 5,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration, returning it unchanged when every threshold
    /// is inside its documented range.
    pub fn validated(self) -> Result<Self, AnalysisError> {
        self.validate()?;
        Ok(self)
    }
}

/// Per-call options for `PipelineAnalyzer::analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Run the full NLP preprocessing battery (tokenization, subjectivity,
    /// loaded language, noise). When false the report's `nlp` field is absent
    /// and quality indicators fall back to neutral values.
    pub include_enhanced_nlp: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_enhanced_nlp: true,
        }
    }
}
