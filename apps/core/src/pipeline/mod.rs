//! # Analysis Pipeline
//!
//! Deterministic, lexicon-based text analysis for Klarsyn.
//! Analyzes one AI-service response at a time and produces a transparency
//! report. No network calls, no persistence, no model inference.
//!
//! ## Components
//! - `preprocess`: tokenization, subjectivity, loaded language, noise
//! - `tone`: six-way tone classification
//! - `bias`: five-dimension bias scan
//! - `sentiment`: polarity plus sarcasm/aggression/empathy detectors
//! - `ideology`: three-axis political-lean scoring
//! - `facts`: verifiable-claim extraction
//! - `report`: output data structures
//! - `orchestrator`: staged execution, timing and aggregation

pub mod bias;
pub mod facts;
pub mod ideology;
pub mod orchestrator;
pub mod preprocess;
pub mod provenance;
pub mod report;
pub mod sentiment;
pub mod tone;

// Re-export main types for convenience
pub use bias::{BiasDetector, BiasFinding, BiasKind, BiasReport, OverallBias, Severity};
pub use facts::{Claim, ClaimExtractor, ClaimType, FactReport};
pub use ideology::{
    AxisResult, DetailedLean, IdeologyClassifier, IdeologyReport, LeanClass, Marker,
};
pub use orchestrator::PipelineAnalyzer;
pub use preprocess::{NlpReport, PosTag, Preprocessor, SubjectivityLabel};
pub use provenance::ProvenanceRecord;
pub use report::{Insights, PipelineReport, QualityIndicators, RiskFlags, TimelineStep};
pub use sentiment::{
    AffectLevel, Intensity, OverallTone, PolarityClass, SentimentAnalyzer, SentimentReport,
};
pub use tone::{ToneClassifier, ToneLabel, ToneResult};
