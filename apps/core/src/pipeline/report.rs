//! Pipeline report - output structure for one analysis invocation.
//!
//! Contains every classifier result plus the execution timeline and the
//! derived insights. Created fresh per invocation and never mutated after
//! return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bias::BiasReport;
use super::facts::FactReport;
use super::ideology::IdeologyReport;
use super::preprocess::NlpReport;
use super::sentiment::SentimentReport;
use super::tone::ToneResult;

/// One timed stage of the pipeline, recorded for transparency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    /// Stage name (e.g., "preprocess", "tone").
    pub step: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Monotonic duration; wall-clock timestamps above are informational.
    pub duration_ms: u64,
    pub model: String,
    pub version: String,
    pub method: String,
}

/// Quality indicators derived from the classifier results, each in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIndicators {
    /// 1 - subjectivity score; 0.5 when preprocessing was skipped.
    pub objectivity: f32,
    /// 1 - noise score; 0.5 when preprocessing was skipped.
    pub clarity: f32,
    /// 1 - combined bias/ideology extremity.
    pub neutrality: f32,
}

/// Boolean risk flags for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlags {
    pub high_bias: bool,
    pub high_subjectivity: bool,
    pub aggression_detected: bool,
    pub loaded_language: bool,
    pub many_unverified_claims: bool,
}

impl RiskFlags {
    /// Number of raised flags.
    pub fn raised(&self) -> usize {
        [
            self.high_bias,
            self.high_subjectivity,
            self.aggression_detected,
            self.loaded_language,
            self.many_unverified_claims,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

/// Cross-cutting insights derived during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub quality_indicators: QualityIndicators,
    pub risk_flags: RiskFlags,
}

/// Complete transparency report for one analyzed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    /// Unique id for correlation in downstream export/persistence layers.
    pub analysis_id: Uuid,
    /// The user's original question, when supplied by the dispatcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    pub tone: ToneResult,
    pub bias: BiasReport,
    pub sentiment: SentimentReport,
    pub ideology: IdeologyReport,
    pub facts: FactReport,
    /// Present only when the enhanced NLP battery ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nlp: Option<NlpReport>,

    /// Stages in execution order.
    pub timeline: Vec<TimelineStep>,
    pub insights: Insights,
    /// Human-readable one-paragraph summary.
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}

impl PipelineReport {
    /// Serialize the report for the export formatters.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Short line for logging.
    pub fn log_line(&self) -> String {
        format!(
            "Tone: {} ({:.0}%), Bias: {:.1}/10, Sentiment: {:?}, Ideology: {:?} ({:.2}), Claims: {}, Flags: {}",
            self.tone.primary,
            self.tone.confidence * 100.0,
            self.bias.bias_score,
            self.sentiment.overall_tone,
            self.ideology.classification,
            self.ideology.overall_score,
            self.facts.claims.len(),
            self.insights.risk_flags.raised(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_flags_raised_count() {
        let flags = RiskFlags {
            high_bias: true,
            high_subjectivity: false,
            aggression_detected: true,
            loaded_language: false,
            many_unverified_claims: false,
        };
        assert_eq!(flags.raised(), 2);
    }
}
