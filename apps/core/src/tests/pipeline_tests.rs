//! Full-pipeline tests: report completeness, bounds, degradation and
//! serialization for the export formatters.

use crate::config::AnalyzeOptions;
use crate::pipeline::sentiment::OverallTone;
use crate::pipeline::tone::ToneLabel;
use crate::pipeline::{PipelineAnalyzer, Severity};

#[tokio::test]
async fn test_report_is_complete_for_ordinary_text() {
    super::init_tracing();
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze(
            "Enligt en studie från 2021 ökade sysselsättningen med 3 procent. \
             Jag tycker att reformen var lyckad, men kritiker menar att den var dålig.",
        )
        .await;

    assert!(report.nlp.is_some());
    assert_eq!(report.timeline.len(), 7);
    assert!(!report.summary.is_empty());
    assert!(!report.facts.claims.is_empty());

    let nlp = report.nlp.unwrap();
    assert!(nlp.tokenization.word_count > 0);
    assert!(nlp.tokenization.sentence_count >= 2);
}

#[tokio::test]
async fn test_empty_input_never_fails() {
    let analyzer = PipelineAnalyzer::new();

    for text in ["", "   ", "\n\t"] {
        let report = analyzer.analyze(text).await;
        assert_eq!(report.tone.primary, ToneLabel::Neutral);
        assert_eq!(report.tone.confidence, 0.0);
        assert_eq!(report.bias.bias_score, 0.0);
        assert_eq!(report.sentiment.overall_tone, OverallTone::Neutral);
        assert_eq!(report.ideology.overall_score, 0.0);
        assert!(report.facts.claims.is_empty());
        assert_eq!(report.timeline.len(), 7);
    }
}

#[tokio::test]
async fn test_score_bounds_hold_across_inputs() {
    let analyzer = PipelineAnalyzer::new();

    let inputs = [
        "Kort text.",
        "Som alla vet är den fria marknaden självklart bäst. Köp nu med rabatt! \
         Västvärlden visar vägen och uppenbarligen håller alla med. Just nu, idag, \
         förra veckan: de senaste nyheterna bekräftar allt.",
        "Välfärd, omfördelning, jämlikhet, solidaritet, offentlig sektor, \
         fackförening, kollektivavtal, progressiv skatt, mångfald, feminism, \
         jämställdhet, inkludering, yttrandefrihet och personlig frihet!",
        "AAA BBB CCC!!! Du är en idiot och en pajas, erkänn! Sluta ljug!",
        "Jättebra förslag verkligen! Självklart fungerar det, precis som att \
         \"experterna\" alltid har rätt, eller hur?",
    ];

    for text in inputs {
        let report = analyzer.analyze(text).await;

        assert!(
            (0.0..=10.0).contains(&report.bias.bias_score),
            "bias score out of bounds for '{}'",
            text
        );
        assert!(
            (0.5..=0.95).contains(&report.tone.confidence),
            "tone confidence out of bounds for '{}'",
            text
        );
        assert!(
            (-1.0..=1.0).contains(&report.ideology.overall_score),
            "ideology score out of bounds for '{}'",
            text
        );
        assert!((0.0..=1.0).contains(&report.ideology.confidence));
        assert!((0.0..=1.0).contains(&report.sentiment.sarcasm_detection.confidence));

        let quality = &report.insights.quality_indicators;
        assert!((0.0..=1.0).contains(&quality.objectivity));
        assert!((0.0..=1.0).contains(&quality.clarity));
        assert!((0.0..=1.0).contains(&quality.neutrality));
    }
}

#[tokio::test]
async fn test_findings_priority_ordering() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze(
            "Som alla vet är välfärd, omfördelning, jämlikhet och solidaritet det enda \
             rätta. Reformen kom 1994 och forskning visar att 30% av alla berörs.",
        )
        .await;

    let weights: Vec<u32> = report
        .bias
        .detected_biases
        .iter()
        .map(|f| f.severity.weight())
        .collect();
    let mut sorted_weights = weights.clone();
    sorted_weights.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(weights, sorted_weights);

    let priorities: Vec<u32> = report
        .facts
        .claims
        .iter()
        .map(|c| c.kind.priority())
        .collect();
    let mut sorted_priorities = priorities.clone();
    sorted_priorities.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(priorities, sorted_priorities);
}

#[tokio::test]
async fn test_timeline_durations_and_provenance() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer.analyze("En helt vanlig mening om vädret idag.").await;

    for step in &report.timeline {
        assert!(step.end_time >= step.start_time);
        assert_eq!(step.model, "klarsyn-heuristics");
        assert_eq!(step.version, "1.0.0");
        assert!(!step.method.is_empty());
    }
}

#[tokio::test]
async fn test_report_serializes_for_exporters() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze_with(
            "Forskning visar att 30% av alla berörs.",
            Some("Vad säger forskningen?"),
            AnalyzeOptions::default(),
        )
        .await;

    let json = report.to_json().expect("report must serialize");
    assert!(json.contains("\"analysisId\""));
    assert!(json.contains("\"biasScore\""));
    assert!(json.contains("\"overallScore\""));
    assert!(json.contains("\"vaderSentiment\""));
    assert!(json.contains("\"timeline\""));
    assert!(json.contains("Vad säger forskningen?"));

    // Optional fields must be absent, not null, when empty.
    let skipped = analyzer
        .analyze_with(
            "text",
            None,
            AnalyzeOptions {
                include_enhanced_nlp: false,
            },
        )
        .await;
    let json = skipped.to_json().expect("report must serialize");
    assert!(!json.contains("\"nlp\""));
    assert!(!json.contains("\"question\""));
}

#[tokio::test]
async fn test_risk_flags_for_loaded_text() {
    let analyzer = PipelineAnalyzer::new();
    let report = analyzer
        .analyze(
            "Detta är en katastrof och en akut kris! Jag tycker att alla borde inse \
             att det uppenbarligen är så, som alla vet. SKÄRP ER NU GENAST!!! \
             Ni är idioter och pajaser allihop.",
        )
        .await;

    let flags = &report.insights.risk_flags;
    assert!(flags.aggression_detected);
    assert!(flags.loaded_language);
    assert!(flags.high_subjectivity);
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let analyzer = std::sync::Arc::new(PipelineAnalyzer::new());

    let left = "Vi måste stärka välfärden och öka omfördelningen.";
    let right = "Lägre skatter och fri marknad skapar tillväxt.";

    let a = tokio::spawn({
        let analyzer = analyzer.clone();
        async move { analyzer.analyze(left).await }
    });
    let b = tokio::spawn({
        let analyzer = analyzer.clone();
        async move { analyzer.analyze(right).await }
    });

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    assert!(a.ideology.overall_score < 0.0);
    assert!(b.ideology.overall_score > 0.0);
}

#[test]
fn test_severity_weights_are_monotonic() {
    assert!(Severity::High.weight() > Severity::Medium.weight());
    assert!(Severity::Medium.weight() > Severity::Low.weight());
}
