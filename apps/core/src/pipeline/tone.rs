//! Tone classification using keyword categories.
//!
//! Six-way tone label with confidence, pure lexicon matching plus two
//! structural signals (question marks, list markers).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::provenance::ProvenanceRecord;

/// Professional register: formal connectives and hedged phrasing.
const PROFESSIONAL_TERMS: &[&str] = &[
    "därmed", "följaktligen", "avseende", "beträffande", "rekommenderar",
    "bedömning", "åtgärd", "implementering", "riktlinjer",
    "therefore", "accordingly", "regarding", "recommend", "assessment",
    "implementation", "guidelines", "furthermore", "consequently",
];

/// Empathetic register.
const EMPATHETIC_TERMS: &[&str] = &[
    "förstår", "känner", "beklagar", "stöttar", "hjälpa dig", "lyssnar",
    "omtanke", "tillsammans",
    "understand", "feel", "sorry", "support", "help you", "listening",
    "care", "together", "appreciate",
];

/// Aggressive register.
const AGGRESSIVE_TERMS: &[&str] = &[
    "idiotisk", "skandal", "vägrar", "kräver", "oacceptabelt", "attack",
    "förkastar",
    "idiotic", "scandal", "refuse", "demand", "unacceptable", "attack",
    "reject", "outrageous",
];

/// Neutral register: descriptive reporting language.
const NEUTRAL_TERMS: &[&str] = &[
    "generellt", "vanligtvis", "beskriver", "innebär", "exempelvis",
    "respektive", "dels",
    "generally", "typically", "describes", "means", "for example",
    "respectively", "overall",
];

/// Enthusiastic register.
const ENTHUSIASTIC_TERMS: &[&str] = &[
    "fantastiskt", "spännande", "underbart", "älskar", "imponerande",
    "otroligt kul", "härligt",
    "fantastic", "exciting", "wonderful", "love", "impressive", "thrilled",
    "great news", "awesome",
];

/// Analytical register.
const ANALYTICAL_TERMS: &[&str] = &[
    "analys", "jämförelse", "faktorer", "orsak", "samband", "slutsats",
    "hypotes", "data visar",
    "analysis", "comparison", "factors", "cause", "correlation",
    "conclusion", "hypothesis", "evidence",
];

/// Word count at which tone confidence stops growing with text length.
const CONFIDENCE_SATURATION_WORDS: f32 = 200.0;

/// Tone category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneLabel {
    Professional,
    Empathetic,
    Aggressive,
    Neutral,
    Enthusiastic,
    Analytical,
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToneLabel::Professional => "professional",
            ToneLabel::Empathetic => "empathetic",
            ToneLabel::Aggressive => "aggressive",
            ToneLabel::Neutral => "neutral",
            ToneLabel::Enthusiastic => "enthusiastic",
            ToneLabel::Analytical => "analytical",
        };
        write!(f, "{}", label)
    }
}

/// Result of tone classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneResult {
    /// Dominant tone.
    pub primary: ToneLabel,
    /// Confidence in the primary label (0.0 - 1.0).
    pub confidence: f32,
    /// Up to three nonzero tone categories, strongest first.
    pub characteristics: Vec<ToneLabel>,
    pub provenance: ProvenanceRecord,
}

impl ToneResult {
    /// Neutral default, used for empty input and degraded stages.
    pub fn neutral() -> Self {
        Self {
            primary: ToneLabel::Neutral,
            confidence: 0.0,
            characteristics: vec![],
            provenance: ProvenanceRecord::new("lexicon-tone-v1"),
        }
    }
}

/// Category definition: label plus its keyword table.
struct ToneCategory {
    label: ToneLabel,
    terms: &'static [&'static str],
}

/// Tone classifier over fixed keyword categories.
pub struct ToneClassifier {
    categories: Vec<ToneCategory>,
}

impl Default for ToneClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneClassifier {
    /// Create a tone classifier with the built-in categories. Order matters:
    /// ties on the dominant score keep the first-seen category.
    pub fn new() -> Self {
        let categories = vec![
            ToneCategory {
                label: ToneLabel::Professional,
                terms: PROFESSIONAL_TERMS,
            },
            ToneCategory {
                label: ToneLabel::Empathetic,
                terms: EMPATHETIC_TERMS,
            },
            ToneCategory {
                label: ToneLabel::Aggressive,
                terms: AGGRESSIVE_TERMS,
            },
            ToneCategory {
                label: ToneLabel::Neutral,
                terms: NEUTRAL_TERMS,
            },
            ToneCategory {
                label: ToneLabel::Enthusiastic,
                terms: ENTHUSIASTIC_TERMS,
            },
            ToneCategory {
                label: ToneLabel::Analytical,
                terms: ANALYTICAL_TERMS,
            },
        ];

        Self { categories }
    }

    /// Classify the tone of a text.
    pub fn classify(&self, text: &str) -> ToneResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ToneResult::neutral();
        }

        let lower = trimmed.to_lowercase();
        let word_count = lower.split_whitespace().count();

        let question_marks = trimmed.matches('?').count();
        let list_markers = count_list_markers(trimmed);

        let mut scores: Vec<(ToneLabel, usize)> = self
            .categories
            .iter()
            .map(|category| {
                let mut score: usize = category
                    .terms
                    .iter()
                    .map(|term| lower.matches(term).count())
                    .sum();

                match category.label {
                    // Questions read as engagement with the reader.
                    ToneLabel::Empathetic => score += question_marks,
                    // Structured enumeration reads as analytical.
                    ToneLabel::Analytical if list_markers > 2 => score += 2,
                    _ => {}
                }

                (category.label, score)
            })
            .collect();

        let total: usize = scores.iter().map(|(_, s)| s).sum();
        // Strictly-greater comparison keeps the first-seen category on ties.
        let mut primary = ToneLabel::Neutral;
        let mut dominant = 0usize;
        for (label, score) in &scores {
            if *score > dominant {
                dominant = *score;
                primary = *label;
            }
        }

        let confidence = if total == 0 {
            0.5
        } else {
            let ratio = dominant as f32 / total as f32;
            let length_factor = (word_count as f32 / CONFIDENCE_SATURATION_WORDS).min(1.0);
            (0.5 + ratio * length_factor * 0.45).clamp(0.5, 0.95)
        };

        scores.sort_by(|a, b| b.1.cmp(&a.1));
        let characteristics: Vec<ToneLabel> = scores
            .iter()
            .filter(|(_, s)| *s > 0)
            .take(3)
            .map(|(label, _)| *label)
            .collect();

        ToneResult {
            primary,
            confidence,
            characteristics,
            provenance: ProvenanceRecord::new("lexicon-tone-v1"),
        }
    }
}

/// Count list markers: lines starting with a bullet or a numbered prefix.
fn count_list_markers(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            let t = line.trim_start();
            t.starts_with('-')
                || t.starts_with('*')
                || t.starts_with('•')
                || t.chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit() && (t.contains(". ") || t.contains(") ")))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_neutral_zero_confidence() {
        let classifier = ToneClassifier::new();
        let result = classifier.classify("");

        assert_eq!(result.primary, ToneLabel::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert!(result.characteristics.is_empty());
    }

    #[test]
    fn test_no_keywords_defaults_neutral() {
        let classifier = ToneClassifier::new();
        let result = classifier.classify("Katten satt på mattan hela dagen");

        assert_eq!(result.primary, ToneLabel::Neutral);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_analytical_tone() {
        let classifier = ToneClassifier::new();
        let result = classifier
            .classify("Vår analys av dessa faktorer visar ett tydligt samband och en slutsats.");

        assert_eq!(result.primary, ToneLabel::Analytical);
        assert!(result.characteristics.contains(&ToneLabel::Analytical));
    }

    #[test]
    fn test_enthusiastic_tone() {
        let classifier = ToneClassifier::new();
        let result = classifier.classify("Fantastiskt! Detta är spännande och helt underbart.");

        assert_eq!(result.primary, ToneLabel::Enthusiastic);
    }

    #[test]
    fn test_question_marks_boost_empathetic() {
        let classifier = ToneClassifier::new();
        let result = classifier.classify("Hur känner du? Vad behöver du? Kan jag hjälpa?");

        assert_eq!(result.primary, ToneLabel::Empathetic);
    }

    #[test]
    fn test_list_markers_boost_analytical() {
        let classifier = ToneClassifier::new();
        let text = "- första punkten\n- andra punkten\n- tredje punkten\n- fjärde punkten";
        let result = classifier.classify(text);

        assert_eq!(result.primary, ToneLabel::Analytical);
    }

    #[test]
    fn test_confidence_bounds_for_nonempty_input() {
        let classifier = ToneClassifier::new();

        for text in [
            "analys",
            "fantastiskt spännande underbart",
            "Hur mår du? förstår och stöttar dig, tillsammans klarar vi detta",
        ] {
            let result = classifier.classify(text);
            assert!(
                (0.5..=0.95).contains(&result.confidence),
                "confidence out of bounds for '{}': {}",
                text,
                result.confidence
            );
        }
    }

    #[test]
    fn test_characteristics_sorted_descending() {
        let classifier = ToneClassifier::new();
        let result = classifier.classify(
            "Vår analys och jämförelse av faktorer och samband är fantastisk och spännande.",
        );

        assert!(result.characteristics.len() >= 2);
        assert_eq!(result.characteristics[0], ToneLabel::Analytical);
    }

    #[test]
    fn test_determinism() {
        let classifier = ToneClassifier::new();
        let text = "Vår analys visar ett spännande samband.";

        let a = classifier.classify(text);
        let b = classifier.classify(text);
        assert_eq!(a.primary, b.primary);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.characteristics, b.characteristics);
    }
}
