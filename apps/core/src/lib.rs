//! Klarsyn V1 Analysis Brain
//!
//! Library core for the Klarsyn transparency dashboard. The dispatcher sends
//! one user question to several AI services and hands each raw response to
//! this crate, which runs a battery of deterministic lexicon heuristics over
//! it (tone, bias, sentiment, ideology, fact claims) and returns a structured
//! transparency report.
//!
//! ```rust
//! use klarsyn_core::PipelineAnalyzer;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let analyzer = PipelineAnalyzer::new();
//! let report = analyzer.analyze("Lägre skatter och fri marknad skapar tillväxt.").await;
//! assert!(report.bias.bias_score <= 10.0);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{AnalyzeOptions, PipelineConfig};
pub use error::AnalysisError;
pub use pipeline::{
    BiasReport, FactReport, IdeologyReport, NlpReport, PipelineAnalyzer, PipelineReport,
    ProvenanceRecord, SentimentReport, TimelineStep, ToneResult,
};

#[cfg(test)]
mod tests;
