//! Pipeline orchestrator.
//!
//! Runs the classifiers in a fixed order over one input text, times every
//! stage, and aggregates the results into a single transparency report.
//!
//! No stage may abort the pipeline: a stage that panics is downgraded to its
//! neutral default with the failure recorded in its provenance, and the
//! timeline still records the step.

use chrono::Utc;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{AnalyzeOptions, PipelineConfig};
use crate::error::AnalysisError;

use super::bias::{BiasDetector, BiasReport};
use super::facts::{ClaimExtractor, FactReport};
use super::ideology::{IdeologyClassifier, IdeologyReport};
use super::preprocess::{NlpReport, Preprocessor};
use super::provenance::{ENGINE_NAME, ENGINE_VERSION};
use super::report::{Insights, PipelineReport, QualityIndicators, RiskFlags, TimelineStep};
use super::sentiment::{SentimentAnalyzer, SentimentReport};
use super::tone::{ToneClassifier, ToneResult};

/// Main analyzer that orchestrates all pipeline stages.
pub struct PipelineAnalyzer {
    preprocessor: Preprocessor,
    tone_classifier: ToneClassifier,
    bias_detector: BiasDetector,
    sentiment_analyzer: SentimentAnalyzer,
    ideology_classifier: IdeologyClassifier,
    claim_extractor: ClaimExtractor,
    config: PipelineConfig,
}

impl Default for PipelineAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self::build(PipelineConfig::default())
    }

    /// Create an analyzer with a custom, validated configuration.
    pub fn with_config(config: PipelineConfig) -> Result<Self, AnalysisError> {
        Ok(Self::build(config.validated()?))
    }

    fn build(config: PipelineConfig) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            tone_classifier: ToneClassifier::new(),
            bias_detector: BiasDetector::new(),
            sentiment_analyzer: SentimentAnalyzer::new(),
            ideology_classifier: IdeologyClassifier::new(),
            claim_extractor: ClaimExtractor::with_max_claims(config.max_claims),
            config,
        }
    }

    /// Analyze one text with default options.
    pub async fn analyze(&self, text: &str) -> PipelineReport {
        self.analyze_with(text, None, AnalyzeOptions::default())
            .await
    }

    /// Analyze one AI-service response, with the user's original question
    /// attached for the report and per-call options.
    ///
    /// Never fails: empty input yields a report of neutral defaults, and a
    /// defective stage degrades to its default instead of aborting.
    pub async fn analyze_with(
        &self,
        text: &str,
        question: Option<&str>,
        options: AnalyzeOptions,
    ) -> PipelineReport {
        let analysis_id = Uuid::new_v4();
        let total = Instant::now();
        info!("Pipeline analysis {} started ({} chars)", analysis_id, text.len());

        let mut timeline: Vec<TimelineStep> = Vec::new();

        let nlp: Option<NlpReport> = if options.include_enhanced_nlp {
            let (mut report, error) = track_step(
                &mut timeline,
                "preprocess",
                "nlp-preprocess-v1",
                || self.preprocessor.analyze(""),
                AssertUnwindSafe(|| self.preprocessor.analyze(text)),
            );
            if let Some(message) = error {
                report.tokenization.provenance = report.tokenization.provenance.with_error(&message);
                report.subjectivity.provenance = report.subjectivity.provenance.with_error(&message);
                report.loaded_expressions.provenance =
                    report.loaded_expressions.provenance.with_error(&message);
                report.noise.provenance = report.noise.provenance.with_error(&message);
            }
            Some(report)
        } else {
            debug!("Enhanced NLP preprocessing skipped by options");
            None
        };

        let (mut tone, error) = track_step(
            &mut timeline,
            "tone",
            "lexicon-tone-v1",
            ToneResult::neutral,
            AssertUnwindSafe(|| self.tone_classifier.classify(text)),
        );
        if let Some(message) = error {
            tone.provenance = tone.provenance.with_error(&message);
        }

        let (mut bias, error) = track_step(
            &mut timeline,
            "bias",
            "lexicon-bias-v1",
            BiasReport::minimal,
            AssertUnwindSafe(|| self.bias_detector.detect(text)),
        );
        if let Some(message) = error {
            bias.provenance = bias.provenance.with_error(&message);
        }

        let (mut sentiment, error) = track_step(
            &mut timeline,
            "sentiment",
            "lexicon-sentiment-v1",
            SentimentReport::neutral,
            AssertUnwindSafe(|| self.sentiment_analyzer.analyze(text)),
        );
        if let Some(message) = error {
            sentiment.vader_sentiment.provenance =
                sentiment.vader_sentiment.provenance.with_error(&message);
        }

        let (mut ideology, error) = track_step(
            &mut timeline,
            "ideology",
            "lexicon-ideology-v1",
            IdeologyReport::center,
            AssertUnwindSafe(|| self.ideology_classifier.classify(text)),
        );
        if let Some(message) = error {
            ideology.provenance = ideology.provenance.with_error(&message);
        }

        let (mut facts, error) = track_step(
            &mut timeline,
            "facts",
            "regex-claims-v1",
            FactReport::empty,
            AssertUnwindSafe(|| self.claim_extractor.extract(text)),
        );
        if let Some(message) = error {
            facts.provenance = facts.provenance.with_error(&message);
        }

        let (insights, summary) =
            self.aggregate(&mut timeline, &tone, &bias, &sentiment, &ideology, &facts, nlp.as_ref());

        let report = PipelineReport {
            analysis_id,
            question: question.map(str::to_string),
            tone,
            bias,
            sentiment,
            ideology,
            facts,
            nlp,
            timeline,
            insights,
            summary,
            generated_at: Utc::now(),
        };

        info!(
            "Pipeline analysis {} completed in {}ms: {}",
            analysis_id,
            total.elapsed().as_millis(),
            report.log_line()
        );

        report
    }

    /// Derive quality indicators, risk flags and the report summary.
    fn aggregate(
        &self,
        timeline: &mut Vec<TimelineStep>,
        tone: &ToneResult,
        bias: &BiasReport,
        sentiment: &SentimentReport,
        ideology: &IdeologyReport,
        facts: &FactReport,
        nlp: Option<&NlpReport>,
    ) -> (Insights, String) {
        let start_time = Utc::now();
        let started = Instant::now();

        // Neutral 0.5 when the preprocessing battery did not run.
        let objectivity = nlp
            .map(|n| (1.0 - n.subjectivity.subjectivity_score).clamp(0.0, 1.0))
            .unwrap_or(0.5);
        let clarity = nlp
            .map(|n| (1.0 - n.noise.noise_score).clamp(0.0, 1.0))
            .unwrap_or(0.5);
        let neutrality = (1.0
            - (bias.bias_score / 10.0 * 0.5 + ideology.overall_score.abs() * 0.5))
            .clamp(0.0, 1.0);

        let risk_flags = RiskFlags {
            high_bias: bias.bias_score > self.config.bias_risk_threshold,
            high_subjectivity: nlp.is_some_and(|n| {
                n.subjectivity.subjectivity_score > self.config.subjectivity_risk_threshold
            }),
            aggression_detected: sentiment.aggression_detection.is_aggressive,
            loaded_language: nlp.is_some_and(|n| n.loaded_expressions.total > 0),
            many_unverified_claims: facts.recommend_verification,
        };

        let summary = format!(
            "The text reads as {} in tone with {:?} sentiment, shows {} bias \
             (score {:.1}/10) and a {:?} ideological lean ({:.2}). Objectivity {:.0}%, \
             clarity {:.0}%. {}",
            tone.primary,
            sentiment.overall_tone,
            match bias.overall_bias {
                super::bias::OverallBias::Minimal => "minimal",
                super::bias::OverallBias::Detected => "detected",
            },
            bias.bias_score,
            ideology.classification,
            ideology.overall_score,
            objectivity * 100.0,
            clarity * 100.0,
            facts.summary
        );

        timeline.push(TimelineStep {
            step: "aggregate".to_string(),
            start_time,
            end_time: Utc::now(),
            duration_ms: started.elapsed().as_millis() as u64,
            model: ENGINE_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            method: "aggregate-insights-v1".to_string(),
        });

        (
            Insights {
                quality_indicators: QualityIndicators {
                    objectivity,
                    clarity,
                    neutrality,
                },
                risk_flags,
            },
            summary,
        )
    }
}

/// Run one stage with timing. Always appends a timeline step; a panic inside
/// the stage yields the stage default plus the panic message.
fn track_step<T>(
    timeline: &mut Vec<TimelineStep>,
    step: &str,
    method: &str,
    default: impl FnOnce() -> T,
    run: AssertUnwindSafe<impl FnOnce() -> T>,
) -> (T, Option<String>) {
    let start_time = Utc::now();
    let started = Instant::now();

    let outcome = std::panic::catch_unwind(run);

    let duration_ms = started.elapsed().as_millis() as u64;
    timeline.push(TimelineStep {
        step: step.to_string(),
        start_time,
        end_time: Utc::now(),
        duration_ms,
        model: ENGINE_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        method: method.to_string(),
    });

    match outcome {
        Ok(value) => (value, None),
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "stage panicked".to_string());
            warn!("Stage '{}' degraded to default: {}", step, message);
            (default(), Some(message))
        }
    }
}
