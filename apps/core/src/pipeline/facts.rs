//! Verifiable-claim extraction.
//!
//! Pattern-based location of claims that a fact-checking service could
//! verify. This module only finds candidates; no verification happens here.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::preprocess::normalize_key;
use super::provenance::ProvenanceRecord;

/// Phrases asserting something is settled fact.
const DEFINITIVE_PHRASES: &[&str] = &[
    "det är bevisat att", "faktum är att", "det råder ingen tvekan",
    "utan tvekan", "bevisligen",
    "it is proven that", "the fact is", "there is no doubt",
    "undoubtedly", "it is a fact",
];

/// Default cap on claims kept in a report.
pub const DEFAULT_MAX_CLAIMS: usize = 5;

static STATISTICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)?\s*(?:%|procent|percent)")
        .expect("Invalid regex: statistical claim pattern")
});

static TEMPORAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid regex: temporal claim pattern")
});

static NUMERICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(?:[.,]\d+)?\s*(?:miljoner|miljarder|tusen|kronor|invånare|personer|million|billion|thousand|people|inhabitants)")
        .expect("Invalid regex: numerical claim pattern")
});

static SCIENTIFIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(forskning visar|en studie|studier visar|enligt forskare|research shows|a study|studies show|according to researchers|peer-reviewed)")
        .expect("Invalid regex: scientific claim pattern")
});

static HISTORICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(historiskt sett|under \d{4}-talet|för \d+ år sedan|historically|in the past|decades ago)")
        .expect("Invalid regex: historical claim pattern")
});

/// Claim category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Statistical,
    Scientific,
    Numerical,
    Historical,
    Temporal,
    Definitive,
}

impl ClaimType {
    /// Relevance used for sorting and truncation, highest first.
    pub fn priority(&self) -> u32 {
        match self {
            ClaimType::Statistical => 5,
            ClaimType::Scientific => 4,
            ClaimType::Numerical => 3,
            ClaimType::Historical => 2,
            ClaimType::Temporal => 1,
            ClaimType::Definitive => 0,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ClaimType::Statistical => "Percentage or share checkable against statistics",
            ClaimType::Scientific => "Reference to research or studies",
            ClaimType::Numerical => "Quantity with a unit that can be verified",
            ClaimType::Historical => "Assertion about past events",
            ClaimType::Temporal => "Specific year or date reference",
            ClaimType::Definitive => "Assertion framed as settled fact",
        }
    }
}

/// A located, not-yet-verified claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(rename = "type")]
    pub kind: ClaimType,
    pub description: String,
    /// The matched span itself.
    pub claim: String,
    /// Containing sentence, truncated to 100 chars.
    pub context: String,
}

/// Claim-extraction result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactReport {
    /// Unique claims, priority-sorted, truncated to the configured cap.
    pub claims: Vec<Claim>,
    /// Raw pattern matches before dedup.
    pub total_matches: usize,
    /// Unique claims before truncation.
    pub unique_count: usize,
    pub recommend_verification: bool,
    pub summary: String,
    pub provenance: ProvenanceRecord,
}

impl FactReport {
    /// Empty default, used for empty input and degraded stages.
    pub fn empty() -> Self {
        Self {
            claims: vec![],
            total_matches: 0,
            unique_count: 0,
            recommend_verification: false,
            summary: "No verifiable claims found.".to_string(),
            provenance: ProvenanceRecord::new("regex-claims-v1"),
        }
    }
}

/// Pattern-based claim extractor.
pub struct ClaimExtractor {
    max_claims: usize,
}

impl Default for ClaimExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimExtractor {
    pub fn new() -> Self {
        Self::with_max_claims(DEFAULT_MAX_CLAIMS)
    }

    /// Create an extractor with a custom claim cap.
    pub fn with_max_claims(max_claims: usize) -> Self {
        Self { max_claims }
    }

    /// Extract, dedup and prioritize verifiable claims.
    pub fn extract(&self, text: &str) -> FactReport {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return FactReport::empty();
        }

        let sentences = sentence_spans(trimmed);
        let mut seen: HashSet<String> = HashSet::new();
        let mut claims: Vec<Claim> = Vec::new();
        let mut total_matches = 0usize;

        // Priority order: when two patterns hit the same sentence, the
        // higher-priority claim type owns the context.
        let patterns: [(&LazyLock<Regex>, ClaimType); 5] = [
            (&STATISTICAL_RE, ClaimType::Statistical),
            (&SCIENTIFIC_RE, ClaimType::Scientific),
            (&NUMERICAL_RE, ClaimType::Numerical),
            (&HISTORICAL_RE, ClaimType::Historical),
            (&TEMPORAL_RE, ClaimType::Temporal),
        ];

        for (pattern, kind) in patterns {
            for m in pattern.find_iter(trimmed) {
                total_matches += 1;
                let context = sentence_context(trimmed, &sentences, m.start());
                if seen.insert(normalize_key(&context)) {
                    claims.push(Claim {
                        kind,
                        description: kind.description().to_string(),
                        claim: m.as_str().to_string(),
                        context,
                    });
                }
            }
        }

        let lower = trimmed.to_lowercase();
        for phrase in DEFINITIVE_PHRASES {
            if let Some(pos) = lower.find(phrase) {
                total_matches += 1;
                let context = sentence_context(trimmed, &sentences, pos);
                if seen.insert(normalize_key(&context)) {
                    claims.push(Claim {
                        kind: ClaimType::Definitive,
                        description: ClaimType::Definitive.description().to_string(),
                        claim: phrase.to_string(),
                        context,
                    });
                }
            }
        }

        let unique_count = claims.len();

        // Stable sort keeps extraction order inside one priority bucket.
        claims.sort_by(|a, b| b.kind.priority().cmp(&a.kind.priority()));
        claims.truncate(self.max_claims);

        let recommend_verification = unique_count > 2;
        let summary = summarize(&claims, unique_count, recommend_verification);

        FactReport {
            claims,
            total_matches,
            unique_count,
            recommend_verification,
            summary,
            provenance: ProvenanceRecord::new("regex-claims-v1"),
        }
    }
}

/// Byte spans of each sentence in the text.
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    for (i, c) in text.char_indices() {
        if c == '.' || c == '!' || c == '?' {
            spans.push((start, i));
            start = i + c.len_utf8();
        }
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }
    spans
}

/// The trimmed sentence containing `offset`, truncated to 100 chars.
fn sentence_context(text: &str, spans: &[(usize, usize)], offset: usize) -> String {
    let (start, end) = spans
        .iter()
        .copied()
        .find(|(s, e)| offset >= *s && offset < *e)
        .unwrap_or((0, text.len()));

    text[start..end].trim().chars().take(100).collect()
}

/// One-sentence tally of claim types.
fn summarize(claims: &[Claim], unique_count: usize, recommend: bool) -> String {
    if claims.is_empty() {
        return "No verifiable claims found.".to_string();
    }

    let mut tallies: Vec<(ClaimType, usize)> = Vec::new();
    for claim in claims {
        match tallies.iter_mut().find(|(kind, _)| *kind == claim.kind) {
            Some((_, count)) => *count += 1,
            None => tallies.push((claim.kind, 1)),
        }
    }

    let parts: Vec<String> = tallies
        .iter()
        .map(|(kind, count)| format!("{} {:?}", count, kind).to_lowercase())
        .collect();

    let tail = if recommend {
        "; verification recommended"
    } else {
        ""
    };

    format!(
        "Found {} verifiable claim{} ({}){}.",
        unique_count,
        if unique_count == 1 { "" } else { "s" },
        parts.join(", "),
        tail
    )
}
