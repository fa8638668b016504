//! Canonical behaviour scenarios, end to end through the full pipeline.
//!
//! These mirror the demo inputs the dashboard team uses for manual QA.

use crate::pipeline::facts::ClaimType;
use crate::pipeline::ideology::LeanClass;
use crate::pipeline::sentiment::AffectLevel;
use crate::pipeline::PipelineAnalyzer;

#[tokio::test]
async fn test_welfare_text_classified_left() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze("Vi måste stärka välfärden och öka omfördelningen.")
        .await;

    assert_eq!(report.ideology.classification, LeanClass::Left);
    assert!(report.ideology.dimensions.economic.score < 0.0);
}

#[tokio::test]
async fn test_market_text_classified_right() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze("Lägre skatter och fri marknad skapar tillväxt.")
        .await;

    assert_eq!(report.ideology.classification, LeanClass::Right);
}

#[tokio::test]
async fn test_shouting_text_flagged_aggressive() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze("SLUTA LJUGA NU!!! Detta är HELT oacceptabelt! Gör om ALLT genast!")
        .await;

    let aggression = &report.sentiment.aggression_detection;
    assert!(aggression.is_aggressive);
    assert_ne!(aggression.level, AffectLevel::None);
}

#[tokio::test]
async fn test_gushing_text_flagged_sarcastic() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze("Jättebra förslag verkligen! Självklart kommer detta att fungera perfekt.")
        .await;

    assert!(report.sentiment.sarcasm_detection.is_sarcastic);
}

#[tokio::test]
async fn test_repeated_statistic_yields_single_claim() {
    let analyzer = PipelineAnalyzer::new();
    let sentence = "Undersökningen visade att 50% av befolkningen håller med.";
    let text = format!("{s} {s} {s}", s = sentence);
    let report = analyzer.analyze(&text).await;

    let statistical: Vec<_> = report
        .facts
        .claims
        .iter()
        .filter(|c| c.kind == ClaimType::Statistical)
        .collect();
    assert_eq!(statistical.len(), 1);
    assert_eq!(report.facts.claims.len(), 1);
}
