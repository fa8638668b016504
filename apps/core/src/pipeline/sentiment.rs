//! Sentiment and affect analysis.
//!
//! A VADER-style lexicon polarity score plus three specialised sub-detectors
//! (sarcasm, aggression, empathy) and a precedence rule that folds them into
//! one overall tone verdict.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::preprocess::Preprocessor;
use super::provenance::ProvenanceRecord;

/// Positive polarity words.
const POSITIVE_WORDS: &[&str] = &[
    // Swedish
    "bra", "bättre", "bäst", "jättebra", "fantastisk", "fantastiskt",
    "utmärkt", "positiv", "positivt", "glad", "lyckad", "framgång", "trygg",
    "hoppfull", "perfekt", "underbart", "stark",
    // English
    "good", "better", "best", "great", "excellent", "positive", "happy",
    "success", "successful", "wonderful", "hopeful", "perfect", "strong",
    "love",
];

/// Negative polarity words.
const NEGATIVE_WORDS: &[&str] = &[
    // Swedish
    "dålig", "dåligt", "sämre", "sämst", "hemsk", "hemskt", "fruktansvärd",
    "negativ", "negativt", "ledsen", "misslyckad", "misslyckande", "kris",
    "farlig", "farligt", "orolig", "problem", "hotad",
    // English
    "bad", "worse", "worst", "terrible", "negative", "sad", "failure",
    "failed", "crisis", "dangerous", "worried", "hate", "awful", "threat",
];

// Sarcasm signal categories, each with a fixed weight.

static EXAGGERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jättebra|jättefint|helt perfekt|perfekt|fantastiskt|underbart|bästa någonsin|perfect|amazing|fantastic|wonderful|best ever)\b")
        .expect("Invalid regex: exaggeration pattern")
});

static IRONY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(självklart|visst ja|säkert|naturligtvis|verkligen|ja ja|obviously|sure|of course|yeah right|totally)\b")
        .expect("Invalid regex: irony pattern")
});

static IRONIC_QUOTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]{2,30}"|»[^»«]{2,30}«"#).expect("Invalid regex: ironic quotes pattern")
});

static CONTRADICTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(men visst|men självklart|som om|precis som att|but sure|as if|but of course)\b")
        .expect("Invalid regex: contradiction pattern")
});

static RHETORICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(eller hur\?|inte sant\?|right\?|don't you think\?)")
        .expect("Invalid regex: rhetorical question pattern")
});

static OVER_POLITENESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(tack så hemskt mycket|så otroligt snällt|thank you so very much|how very kind)\b")
        .expect("Invalid regex: over-politeness pattern")
});

/// Aggression categories with weights: insults and threats weigh heaviest.
const INSULT_TERMS: &[&str] = &[
    "idiot", "idiotisk", "pajas", "clown", "inkompetent", "löjlig",
    "moron", "stupid", "pathetic", "ridiculous", "clueless",
];
const THREAT_TERMS: &[&str] = &[
    "ska få ångra", "akta dig", "annars", "du kommer ångra",
    "you will regret", "watch out", "or else", "i warn you",
];
const ANGER_TERMS: &[&str] = &[
    "rasande", "ursinnig", "förbannad", "hatar", "avskyr",
    "furious", "outraged", "angry", "hate", "despise",
];
const CONFRONTATIONAL_TERMS: &[&str] = &[
    "erkänn", "sluta ljug", "bevisa det", "du har fel",
    "admit it", "stop lying", "prove it", "you are wrong",
];
const DEMANDING_TERMS: &[&str] = &[
    "kräver", "omedelbart", "genast", "nu direkt",
    "demand", "immediately", "right now", "at once",
];

/// Empathy categories with weights: compassion weighs heaviest.
const COMPASSION_TERMS: &[&str] = &[
    "jag beklagar", "så tråkigt att höra", "mina tankar går",
    "i am so sorry", "i'm so sorry", "my heart goes out", "condolences",
];
const UNDERSTANDING_TERMS: &[&str] = &[
    "jag förstår", "det låter svårt", "det måste vara tufft",
    "i understand", "that sounds hard", "that must be difficult",
];
const SUPPORT_TERMS: &[&str] = &[
    "jag finns här", "vi hjälps åt", "stöttar dig", "du är inte ensam",
    "here for you", "support you", "you are not alone",
];
const VALIDATION_TERMS: &[&str] = &[
    "det är okej att", "dina känslor", "helt rimligt att",
    "it's okay to", "your feelings", "completely valid",
];
const ACTIVE_LISTENING_TERMS: &[&str] = &[
    "berätta mer", "hur känns det", "vad behöver du",
    "tell me more", "how does that feel", "what do you need",
];
const KINDNESS_TERMS: &[&str] = &[
    "snäll", "vänlig", "omtänksam", "varm",
    "kind", "gentle", "caring", "warm-hearted",
];

/// Polarity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolarityClass {
    Positive,
    Negative,
    Neutral,
}

/// Intensity bucket for the polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Strong,
    Moderate,
    Mild,
}

/// Escalation level shared by the aggression and empathy detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectLevel {
    None,
    Low,
    Medium,
    High,
}

/// Word-lexicon polarity result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarityResult {
    /// Positive hits minus negative hits.
    pub score: i32,
    /// Score normalized by word count.
    pub comparative: f32,
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub classification: PolarityClass,
    pub intensity: Intensity,
    pub provenance: ProvenanceRecord,
}

impl PolarityResult {
    fn neutral() -> Self {
        Self {
            score: 0,
            comparative: 0.0,
            positive_hits: 0,
            negative_hits: 0,
            classification: PolarityClass::Neutral,
            intensity: Intensity::Mild,
            provenance: ProvenanceRecord::new("lexicon-polarity-v1"),
        }
    }
}

/// Sarcasm detection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarcasmResult {
    pub is_sarcastic: bool,
    /// Weighted signal score.
    pub score: u32,
    pub confidence: f32,
    /// Signal categories that fired, for auditability.
    pub signals: Vec<String>,
    pub provenance: ProvenanceRecord,
}

impl SarcasmResult {
    fn none() -> Self {
        Self {
            is_sarcastic: false,
            score: 0,
            confidence: 0.0,
            signals: vec![],
            provenance: ProvenanceRecord::new("regex-sarcasm-v1"),
        }
    }
}

/// Aggression detection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggressionResult {
    pub is_aggressive: bool,
    pub score: u32,
    pub level: AffectLevel,
    pub signals: Vec<String>,
    pub provenance: ProvenanceRecord,
}

impl AggressionResult {
    fn none() -> Self {
        Self {
            is_aggressive: false,
            score: 0,
            level: AffectLevel::None,
            signals: vec![],
            provenance: ProvenanceRecord::new("lexicon-aggression-v1"),
        }
    }
}

/// Empathy detection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpathyResult {
    pub is_empathetic: bool,
    pub score: u32,
    pub level: AffectLevel,
    pub signals: Vec<String>,
    pub provenance: ProvenanceRecord,
}

impl EmpathyResult {
    fn none() -> Self {
        Self {
            is_empathetic: false,
            score: 0,
            level: AffectLevel::None,
            signals: vec![],
            provenance: ProvenanceRecord::new("lexicon-empathy-v1"),
        }
    }
}

/// Overall tone verdict after the precedence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTone {
    Sarcastic,
    Aggressive,
    Empathetic,
    Positive,
    Negative,
    Neutral,
}

/// Combined sentiment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub vader_sentiment: PolarityResult,
    pub sarcasm_detection: SarcasmResult,
    pub aggression_detection: AggressionResult,
    pub empathy_detection: EmpathyResult,
    pub overall_tone: OverallTone,
}

impl SentimentReport {
    /// Neutral default, used for empty input and degraded stages.
    pub fn neutral() -> Self {
        Self {
            vader_sentiment: PolarityResult::neutral(),
            sarcasm_detection: SarcasmResult::none(),
            aggression_detection: AggressionResult::none(),
            empathy_detection: EmpathyResult::none(),
            overall_tone: OverallTone::Neutral,
        }
    }
}

/// Sentiment analyzer over fixed lexicons and signal patterns.
pub struct SentimentAnalyzer {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    /// Run all sub-detectors and fold them into one report.
    pub fn analyze(&self, text: &str) -> SentimentReport {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SentimentReport::neutral();
        }

        let vader_sentiment = self.score_polarity(trimmed);
        let sarcasm_detection = self.detect_sarcasm(trimmed, &vader_sentiment);
        let aggression_detection = self.detect_aggression(trimmed);
        let empathy_detection = self.detect_empathy(trimmed);

        // Precedence: sarcasm masks everything, aggression masks empathy.
        let overall_tone = if sarcasm_detection.is_sarcastic {
            OverallTone::Sarcastic
        } else if aggression_detection.is_aggressive {
            OverallTone::Aggressive
        } else if empathy_detection.is_empathetic {
            OverallTone::Empathetic
        } else {
            match vader_sentiment.classification {
                PolarityClass::Positive => OverallTone::Positive,
                PolarityClass::Negative => OverallTone::Negative,
                PolarityClass::Neutral => OverallTone::Neutral,
            }
        };

        SentimentReport {
            vader_sentiment,
            sarcasm_detection,
            aggression_detection,
            empathy_detection,
            overall_tone,
        }
    }

    /// Word-level polarity against the positive/negative lexicons.
    pub fn score_polarity(&self, text: &str) -> PolarityResult {
        let words = Preprocessor::split_words(text);
        if words.is_empty() {
            return PolarityResult::neutral();
        }

        let positive_hits = words
            .iter()
            .filter(|w| self.positive.contains(w.as_str()))
            .count();
        let negative_hits = words
            .iter()
            .filter(|w| self.negative.contains(w.as_str()))
            .count();

        let score = positive_hits as i32 - negative_hits as i32;
        let comparative = score as f32 / words.len() as f32;

        let classification = if comparative >= 0.05 {
            PolarityClass::Positive
        } else if comparative <= -0.05 {
            PolarityClass::Negative
        } else {
            PolarityClass::Neutral
        };

        let intensity = if comparative.abs() >= 0.5 {
            Intensity::Strong
        } else if comparative.abs() >= 0.2 {
            Intensity::Moderate
        } else {
            Intensity::Mild
        };

        PolarityResult {
            score,
            comparative,
            positive_hits,
            negative_hits,
            classification,
            intensity,
            provenance: ProvenanceRecord::new("lexicon-polarity-v1"),
        }
    }

    /// Weighted sarcasm signals plus a polarity-mismatch bonus.
    pub fn detect_sarcasm(&self, text: &str, polarity: &PolarityResult) -> SarcasmResult {
        let categories: [(&LazyLock<Regex>, &str, u32); 6] = [
            (&EXAGGERATION_RE, "exaggeration", 2),
            (&IRONY_RE, "irony", 2),
            (&IRONIC_QUOTES_RE, "ironic_quotes", 2),
            (&CONTRADICTION_RE, "contradiction", 3),
            (&RHETORICAL_RE, "rhetorical_question", 1),
            (&OVER_POLITENESS_RE, "over_politeness", 1),
        ];

        let mut score = 0u32;
        let mut signals = Vec::new();

        for (pattern, name, weight) in categories {
            let matches = pattern.find_iter(text).count() as u32;
            if matches > 0 {
                score += matches * weight;
                signals.push(name.to_string());
            }
        }

        // Glowing words in a text that scores clearly negative overall is the
        // classic sarcasm setup.
        if polarity.score < -2 && polarity.positive_hits > 0 {
            score += 2;
            signals.push("sentiment_mismatch".to_string());
        }

        SarcasmResult {
            is_sarcastic: score >= 3,
            score,
            confidence: (score as f32 / 10.0).min(1.0),
            signals,
            provenance: ProvenanceRecord::new("regex-sarcasm-v1"),
        }
    }

    /// Weighted aggression lexicons plus shouting/exclamation signals.
    pub fn detect_aggression(&self, text: &str) -> AggressionResult {
        let lower = text.to_lowercase();
        let categories: [(&[&str], &str, u32); 5] = [
            (INSULT_TERMS, "insult", 3),
            (THREAT_TERMS, "threat", 3),
            (ANGER_TERMS, "anger", 2),
            (CONFRONTATIONAL_TERMS, "confrontational", 2),
            (DEMANDING_TERMS, "demanding", 1),
        ];

        let mut score = 0u32;
        let mut signals = Vec::new();

        for (terms, name, weight) in categories {
            let matches: u32 = terms
                .iter()
                .map(|term| lower.matches(term).count() as u32)
                .sum();
            if matches > 0 {
                score += matches * weight;
                signals.push(name.to_string());
            }
        }

        let caps_words = text
            .split_whitespace()
            .filter(|w| {
                let letters: Vec<char> = w.chars().filter(|c| c.is_alphabetic()).collect();
                letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
            })
            .count();
        if caps_words > 2 {
            score += 2;
            signals.push("shouting".to_string());
        }

        if text.matches('!').count() > 2 {
            score += 1;
            signals.push("excessive_exclamation".to_string());
        }

        let level = match score {
            0 => AffectLevel::None,
            1..=2 => AffectLevel::Low,
            3..=5 => AffectLevel::Medium,
            _ => AffectLevel::High,
        };

        AggressionResult {
            is_aggressive: score >= 2,
            score,
            level,
            signals,
            provenance: ProvenanceRecord::new("lexicon-aggression-v1"),
        }
    }

    /// Weighted empathy lexicons plus a capped question bonus.
    pub fn detect_empathy(&self, text: &str) -> EmpathyResult {
        let lower = text.to_lowercase();
        let categories: [(&[&str], &str, u32); 6] = [
            (COMPASSION_TERMS, "compassion", 3),
            (UNDERSTANDING_TERMS, "understanding", 2),
            (SUPPORT_TERMS, "support", 2),
            (VALIDATION_TERMS, "validation", 2),
            (ACTIVE_LISTENING_TERMS, "active_listening", 2),
            (KINDNESS_TERMS, "kindness", 1),
        ];

        let mut score = 0u32;
        let mut signals = Vec::new();

        for (terms, name, weight) in categories {
            let matches: u32 = terms
                .iter()
                .map(|term| lower.matches(term).count() as u32)
                .sum();
            if matches > 0 {
                score += matches * weight;
                signals.push(name.to_string());
            }
        }

        // Questions show interest in the other side, up to a point.
        let questions = text.matches('?').count() as u32;
        score += questions.min(3);

        let level = if score >= 8 {
            AffectLevel::High
        } else if score >= 4 {
            AffectLevel::Medium
        } else if score >= 2 {
            AffectLevel::Low
        } else {
            AffectLevel::None
        };

        EmpathyResult {
            is_empathetic: score >= 3,
            score,
            level,
            signals,
            provenance: ProvenanceRecord::new("lexicon-empathy-v1"),
        }
    }
}
