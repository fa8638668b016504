//! Bias detection across five independent dimensions.
//!
//! Political, commercial, cultural, confirmation and recency bias, each a
//! separate lexicon scan with its own firing rule. Scores combine into a
//! single capped bias score for the report.

use serde::{Deserialize, Serialize};

use super::provenance::ProvenanceRecord;

/// Politically left-leaning markers.
const POLITICAL_LEFT_TERMS: &[&str] = &[
    "välfärd", "omfördelning", "jämlikhet", "solidaritet", "fackförening",
    "offentlig sektor", "klimaträttvisa", "vinsttak",
    "welfare state", "redistribution", "equality", "solidarity",
    "union rights", "public sector", "climate justice",
];

/// Politically right-leaning markers.
const POLITICAL_RIGHT_TERMS: &[&str] = &[
    "skattesänkning", "lägre skatter", "fri marknad", "avreglering",
    "privatisering", "företagande", "valfrihet",
    "tax cuts", "free market", "deregulation", "privatization",
    "entrepreneurship", "school choice",
];

/// Commercial/promotional markers.
const COMMERCIAL_TERMS: &[&str] = &[
    "köp nu", "erbjudande", "rabatt", "bästa priset", "prova gratis",
    "sponsrad", "kampanjpris",
    "buy now", "special offer", "discount", "best price", "free trial",
    "sponsored", "limited time",
];

/// Western-centric framing markers.
const CULTURAL_WESTERN_TERMS: &[&str] = &[
    "västvärlden", "västerländsk", "europeisk", "amerikansk",
    "den demokratiska världen",
    "western world", "european", "american", "first world",
    "civilized world",
];

/// Non-western framing markers.
const CULTURAL_NON_WESTERN_TERMS: &[&str] = &[
    "globala syd", "asiatisk", "afrikansk", "mellanöstern", "latinamerika",
    "global south", "asian", "african", "middle east", "developing world",
];

/// Confirmation-bias markers: presenting opinion as settled fact.
const CONFIRMATION_TERMS: &[&str] = &[
    "som alla vet", "självklart", "uppenbarligen", "det är känt att",
    "alla är överens", "ingen kan förneka",
    "as everyone knows", "obviously", "it is well known", "everyone agrees",
    "no one can deny", "of course",
];

/// Recency markers: over-weighting the latest events.
const RECENCY_TERMS: &[&str] = &[
    "nyligen", "senaste", "just nu", "idag", "förra veckan", "aktuella",
    "recently", "latest", "breaking", "just now", "today", "last week",
    "current events",
];

/// Cap for the combined bias score.
const BIAS_SCORE_CAP: f32 = 10.0;

/// Bias dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasKind {
    Political,
    Commercial,
    Cultural,
    Confirmation,
    Recency,
}

/// Severity of a single bias finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Weight used for the combined bias score and for sorting.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }

    /// Map a raw check score to a severity bucket.
    fn from_score(score: usize) -> Self {
        match score {
            0..=1 => Severity::Low,
            2..=3 => Severity::Medium,
            _ => Severity::High,
        }
    }
}

/// One detected bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasFinding {
    pub kind: BiasKind,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    pub description: String,
}

/// Overall bias verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallBias {
    Minimal,
    Detected,
}

/// Full bias scan result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasReport {
    pub overall_bias: OverallBias,
    /// Combined severity-weighted score, capped at 10.
    pub bias_score: f32,
    /// Findings sorted by severity, strongest first.
    pub detected_biases: Vec<BiasFinding>,
    pub provenance: ProvenanceRecord,
}

impl BiasReport {
    /// Neutral default, used for empty input and degraded stages.
    pub fn minimal() -> Self {
        Self {
            overall_bias: OverallBias::Minimal,
            bias_score: 0.0,
            detected_biases: vec![],
            provenance: ProvenanceRecord::new("lexicon-bias-v1"),
        }
    }
}

/// Five-dimension bias detector.
pub struct BiasDetector;

impl Default for BiasDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BiasDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scan the text across all five dimensions.
    pub fn detect(&self, text: &str) -> BiasReport {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return BiasReport::minimal();
        }

        let lower = trimmed.to_lowercase();
        let mut findings = Vec::new();

        if let Some(finding) = check_political(&lower) {
            findings.push(finding);
        }
        if let Some(finding) = check_commercial(&lower) {
            findings.push(finding);
        }
        if let Some(finding) = check_cultural(&lower) {
            findings.push(finding);
        }
        if let Some(finding) = check_confirmation(&lower) {
            findings.push(finding);
        }
        if let Some(finding) = check_recency(&lower) {
            findings.push(finding);
        }

        // Stable sort: equal severities keep check order.
        findings.sort_by(|a, b| b.severity.weight().cmp(&a.severity.weight()));

        let bias_score = findings
            .iter()
            .map(|f| f.severity.weight() as f32)
            .sum::<f32>()
            .min(BIAS_SCORE_CAP);

        let overall_bias = if bias_score > 2.0 {
            OverallBias::Detected
        } else {
            OverallBias::Minimal
        };

        BiasReport {
            overall_bias,
            bias_score,
            detected_biases: findings,
            provenance: ProvenanceRecord::new("lexicon-bias-v1"),
        }
    }
}

/// Count total occurrences of every term in the table.
fn count_terms(lower: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| lower.matches(term).count()).sum()
}

fn check_political(lower: &str) -> Option<BiasFinding> {
    let left = count_terms(lower, POLITICAL_LEFT_TERMS);
    let right = count_terms(lower, POLITICAL_RIGHT_TERMS);
    let diff = left.abs_diff(right);

    if diff == 0 {
        return None;
    }

    // Direction requires a clear margin, not a single stray keyword.
    let direction = if diff > 2 {
        Some(if left > right { "left" } else { "right" }.to_string())
    } else {
        None
    };

    Some(BiasFinding {
        kind: BiasKind::Political,
        severity: Severity::from_score(diff),
        direction,
        description: format!(
            "Politically loaded vocabulary leans one way ({} left-coded vs {} right-coded terms)",
            left, right
        ),
    })
}

fn check_commercial(lower: &str) -> Option<BiasFinding> {
    let count = count_terms(lower, COMMERCIAL_TERMS);
    if count <= 1 {
        return None;
    }

    Some(BiasFinding {
        kind: BiasKind::Commercial,
        severity: Severity::from_score(count),
        direction: None,
        description: format!("Promotional language detected ({} marketing phrases)", count),
    })
}

fn check_cultural(lower: &str) -> Option<BiasFinding> {
    let western = count_terms(lower, CULTURAL_WESTERN_TERMS);
    let non_western = count_terms(lower, CULTURAL_NON_WESTERN_TERMS);

    let (direction, score) = if western > non_western + 1 {
        ("western", western - non_western)
    } else if non_western > western + 1 {
        ("non_western", non_western - western)
    } else {
        return None;
    };

    Some(BiasFinding {
        kind: BiasKind::Cultural,
        severity: Severity::from_score(score),
        direction: Some(direction.to_string()),
        description: format!(
            "Framing centres one cultural perspective ({} dominant by {} terms)",
            direction, score
        ),
    })
}

fn check_confirmation(lower: &str) -> Option<BiasFinding> {
    let count = count_terms(lower, CONFIRMATION_TERMS);
    if count == 0 {
        return None;
    }

    Some(BiasFinding {
        kind: BiasKind::Confirmation,
        severity: Severity::from_score(count),
        direction: None,
        description: format!(
            "Opinion presented as settled fact ({} certainty phrases)",
            count
        ),
    })
}

fn check_recency(lower: &str) -> Option<BiasFinding> {
    let count = count_terms(lower, RECENCY_TERMS);
    if count <= 2 {
        return None;
    }

    // Ordinary temporal language is expected; only the excess counts.
    let score = count - 2;
    Some(BiasFinding {
        kind: BiasKind::Recency,
        severity: Severity::from_score(score),
        direction: None,
        description: format!(
            "Heavy emphasis on recent events ({} temporal markers)",
            count
        ),
    })
}
