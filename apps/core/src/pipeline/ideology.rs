//! Political-ideology classification over three axes.
//!
//! Economic, social and authority dimensions are scored independently from
//! fixed marker lexicons, then combined into an overall left–center–right
//! lean. Matching is substring-based on lowercased text so Swedish definite
//! forms ("välfärden") hit their stem ("välfärd").

use serde::{Deserialize, Serialize};

use super::provenance::ProvenanceRecord;

/// Economic axis, left/progressive side.
const ECONOMIC_LEFT_TERMS: &[&str] = &[
    "välfärd", "omfördelning", "jämlikhet", "offentlig sektor",
    "fackförening", "kollektivavtal", "vinsttak", "progressiv skatt",
    "höjda bidrag",
    "welfare", "redistribution", "public ownership", "wealth tax",
    "economic equality", "collective bargaining",
];

/// Economic axis, right/market side.
const ECONOMIC_RIGHT_TERMS: &[&str] = &[
    "lägre skatter", "skattesänkning", "fri marknad", "avreglering",
    "privatisering", "företagande", "tillväxt", "konkurrenskraft",
    "free market", "tax cuts", "deregulation", "privatization",
    "entrepreneurship", "economic growth", "competitiveness",
];

/// Social axis, progressive side.
const SOCIAL_PROGRESSIVE_TERMS: &[&str] = &[
    "mångfald", "jämställdhet", "feminism", "hbtq", "antirasism",
    "inkludering", "fri abort", "normkritik",
    "diversity", "gender equality", "lgbtq", "inclusion", "anti-racism",
    "reproductive rights",
];

/// Social axis, conservative side.
const SOCIAL_CONSERVATIVE_TERMS: &[&str] = &[
    "traditionella värderingar", "kärnfamilj", "nationell identitet",
    "kristna värderingar", "hårdare straff", "stram migration",
    "svenska värderingar",
    "traditional values", "family values", "national identity",
    "law and order", "tougher sentences", "strict immigration",
];

/// Authority axis, libertarian side.
const AUTHORITY_LIBERTARIAN_TERMS: &[&str] = &[
    "personlig frihet", "yttrandefrihet", "integritet",
    "medborgerliga rättigheter", "decentralisering", "maktdelning",
    "civil liberties", "personal freedom", "free speech", "privacy rights",
    "decentralization",
];

/// Authority axis, authoritarian side.
const AUTHORITY_AUTHORITARIAN_TERMS: &[&str] = &[
    "övervakning", "statlig kontroll", "censur", "lydnad",
    "ordning och reda", "hårdare tag", "stark ledare",
    "surveillance", "state control", "censorship", "obedience",
    "crackdown", "strong leader",
];

/// Markers on one side needed to saturate an axis at ±1.0.
const MARKER_SATURATION: f32 = 3.0;

/// Classification threshold on every axis and on the overall score.
const LEAN_THRESHOLD: f32 = 0.2;

/// Axis weights for the overall score: economic lean dominates the
/// left–right placement, authority contributes least.
const ECONOMIC_WEIGHT: f32 = 0.5;
const SOCIAL_WEIGHT: f32 = 0.35;
const AUTHORITY_WEIGHT: f32 = 0.15;

/// Swedish parliamentary parties with approximate, overlapping score bands.
const PARTY_BANDS: &[(&str, &str, f32, f32)] = &[
    ("Vänsterpartiet", "V", -1.0, -0.45),
    ("Socialdemokraterna", "S", -0.6, -0.1),
    ("Miljöpartiet", "MP", -0.55, -0.05),
    ("Centerpartiet", "C", -0.05, 0.35),
    ("Liberalerna", "L", 0.0, 0.4),
    ("Kristdemokraterna", "KD", 0.15, 0.55),
    ("Moderaterna", "M", 0.25, 0.75),
    ("Sverigedemokraterna", "SD", 0.35, 0.9),
];

const PARTY_DISCLAIMER: &str =
    "Approximate placement on a single left-right scale; real party platforms \
     are multi-dimensional and shift over time.";

/// One ideology axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeologyAxis {
    Economic,
    Social,
    Authority,
}

/// Which side of an axis a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSide {
    Left,
    Right,
}

/// Left–center–right classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeanClass {
    Left,
    Center,
    Right,
}

impl LeanClass {
    fn from_score(score: f32) -> Self {
        if score < -LEAN_THRESHOLD {
            LeanClass::Left
        } else if score > LEAN_THRESHOLD {
            LeanClass::Right
        } else {
            LeanClass::Center
        }
    }
}

/// Refined classification using the secondary axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailedLean {
    FarLeft,
    ProgressiveLeft,
    Left,
    Center,
    Right,
    ConservativeRight,
    FarRight,
}

/// One matched ideological marker, kept for auditability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub term: String,
    pub axis: IdeologyAxis,
    pub side: MarkerSide,
}

/// Score and classification for a single axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisResult {
    /// Bounded score in [-1, 1]; negative leans left.
    pub score: f32,
    pub classification: LeanClass,
    pub left_matches: usize,
    pub right_matches: usize,
}

impl AxisResult {
    fn center() -> Self {
        Self {
            score: 0.0,
            classification: LeanClass::Center,
            left_matches: 0,
            right_matches: 0,
        }
    }
}

/// The three axis results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub economic: AxisResult,
    pub social: AxisResult,
    pub authority: AxisResult,
}

/// Party-alignment suggestion (informational only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyAlignment {
    /// Parties whose band contains the overall score, left to right.
    pub parties: Vec<PartyMatch>,
    pub disclaimer: String,
}

/// One party whose band matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMatch {
    pub party: String,
    pub abbreviation: String,
}

/// Full ideology classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeologyReport {
    /// Weighted overall lean in [-1, 1]; negative leans left.
    pub overall_score: f32,
    pub classification: LeanClass,
    pub detailed_classification: DetailedLean,
    pub confidence: f32,
    pub dimensions: Dimensions,
    pub markers: Vec<Marker>,
    pub party_alignment: PartyAlignment,
    pub provenance: ProvenanceRecord,
}

impl IdeologyReport {
    /// Neutral default, used for empty input and degraded stages.
    pub fn center() -> Self {
        Self {
            overall_score: 0.0,
            classification: LeanClass::Center,
            detailed_classification: DetailedLean::Center,
            confidence: 0.0,
            dimensions: Dimensions {
                economic: AxisResult::center(),
                social: AxisResult::center(),
                authority: AxisResult::center(),
            },
            markers: vec![],
            party_alignment: PartyAlignment {
                parties: vec![],
                disclaimer: PARTY_DISCLAIMER.to_string(),
            },
            provenance: ProvenanceRecord::new("lexicon-ideology-v1"),
        }
    }
}

/// Three-axis ideology classifier.
pub struct IdeologyClassifier;

impl Default for IdeologyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeologyClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify the ideological lean of a text.
    pub fn classify(&self, text: &str) -> IdeologyReport {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return IdeologyReport::center();
        }

        let lower = trimmed.to_lowercase();
        let mut markers = Vec::new();

        let economic = score_axis(
            &lower,
            IdeologyAxis::Economic,
            ECONOMIC_LEFT_TERMS,
            ECONOMIC_RIGHT_TERMS,
            &mut markers,
        );
        let social = score_axis(
            &lower,
            IdeologyAxis::Social,
            SOCIAL_PROGRESSIVE_TERMS,
            SOCIAL_CONSERVATIVE_TERMS,
            &mut markers,
        );
        let authority = score_axis(
            &lower,
            IdeologyAxis::Authority,
            AUTHORITY_LIBERTARIAN_TERMS,
            AUTHORITY_AUTHORITARIAN_TERMS,
            &mut markers,
        );

        let overall_score = (ECONOMIC_WEIGHT * economic.score
            + SOCIAL_WEIGHT * social.score
            + AUTHORITY_WEIGHT * authority.score)
            .clamp(-1.0, 1.0);

        let classification = LeanClass::from_score(overall_score);
        let detailed_classification = refine(classification, overall_score, &social);

        let confidence =
            0.6 * (markers.len() as f32 / 10.0).min(1.0) + 0.4 * overall_score.abs();

        let parties = PARTY_BANDS
            .iter()
            .filter(|(_, _, lo, hi)| (*lo..=*hi).contains(&overall_score))
            .map(|(party, abbreviation, _, _)| PartyMatch {
                party: party.to_string(),
                abbreviation: abbreviation.to_string(),
            })
            .collect();

        IdeologyReport {
            overall_score,
            classification,
            detailed_classification,
            confidence,
            dimensions: Dimensions {
                economic,
                social,
                authority,
            },
            markers,
            party_alignment: PartyAlignment {
                parties,
                disclaimer: PARTY_DISCLAIMER.to_string(),
            },
            provenance: ProvenanceRecord::new("lexicon-ideology-v1"),
        }
    }
}

/// Score one axis: right-side matches minus left-side matches, bounded so
/// that three decisive markers saturate the axis.
fn score_axis(
    lower: &str,
    axis: IdeologyAxis,
    left_terms: &[&str],
    right_terms: &[&str],
    markers: &mut Vec<Marker>,
) -> AxisResult {
    let mut left_matches = 0usize;
    for term in left_terms {
        if lower.contains(term) {
            left_matches += 1;
            markers.push(Marker {
                term: term.to_string(),
                axis,
                side: MarkerSide::Left,
            });
        }
    }

    let mut right_matches = 0usize;
    for term in right_terms {
        if lower.contains(term) {
            right_matches += 1;
            markers.push(Marker {
                term: term.to_string(),
                axis,
                side: MarkerSide::Right,
            });
        }
    }

    let raw = right_matches as f32 - left_matches as f32;
    let score = (raw / MARKER_SATURATION).clamp(-1.0, 1.0);

    AxisResult {
        score,
        classification: LeanClass::from_score(score),
        left_matches,
        right_matches,
    }
}

/// Refine left/right with the social axis; center stays center.
fn refine(classification: LeanClass, overall: f32, social: &AxisResult) -> DetailedLean {
    match classification {
        LeanClass::Center => DetailedLean::Center,
        LeanClass::Left => {
            if overall < -0.6 {
                DetailedLean::FarLeft
            } else if social.score < -LEAN_THRESHOLD {
                DetailedLean::ProgressiveLeft
            } else {
                DetailedLean::Left
            }
        }
        LeanClass::Right => {
            if overall > 0.6 {
                DetailedLean::FarRight
            } else if social.score > LEAN_THRESHOLD {
                DetailedLean::ConservativeRight
            } else {
                DetailedLean::Right
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_center() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify("");

        assert_eq!(report.classification, LeanClass::Center);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.confidence, 0.0);
        assert!(report.markers.is_empty());
    }

    #[test]
    fn test_left_economic_text() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify("Vi måste stärka välfärden och öka omfördelningen.");

        assert_eq!(report.classification, LeanClass::Left);
        assert!(report.dimensions.economic.score < 0.0);
        assert!(report.overall_score < -0.2);
    }

    #[test]
    fn test_right_economic_text() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify("Lägre skatter och fri marknad skapar tillväxt.");

        assert_eq!(report.classification, LeanClass::Right);
        assert!(report.dimensions.economic.score > 0.0);
    }

    #[test]
    fn test_definite_forms_match_stems() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify("Välfärden är viktig.");

        assert_eq!(report.dimensions.economic.left_matches, 1);
        assert_eq!(report.markers[0].term, "välfärd");
    }

    #[test]
    fn test_balanced_text_is_center() {
        let classifier = IdeologyClassifier::new();
        let report =
            classifier.classify("Välfärd kräver omfördelning, men fri marknad och tillväxt behövs.");

        // Two left markers against two right markers cancel out.
        assert_eq!(report.dimensions.economic.score, 0.0);
        assert_eq!(report.classification, LeanClass::Center);
    }

    #[test]
    fn test_scores_bounded() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify(
            "Välfärd, omfördelning, jämlikhet, offentlig sektor, fackförening, \
             kollektivavtal, vinsttak, progressiv skatt och höjda bidrag behövs, \
             liksom mångfald, jämställdhet, feminism och inkludering.",
        );

        assert!((-1.0..=1.0).contains(&report.overall_score));
        assert!((-1.0..=1.0).contains(&report.dimensions.economic.score));
        assert!((0.0..=1.0).contains(&report.confidence));
        assert_eq!(report.classification, LeanClass::Left);
    }

    #[test]
    fn test_detailed_far_left() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify(
            "Välfärd, omfördelning och jämlikhet genom offentlig sektor, fackförening \
             och kollektivavtal, med mångfald, jämställdhet och feminism som grund.",
        );

        assert!(report.overall_score < -0.6);
        assert_eq!(report.detailed_classification, DetailedLean::FarLeft);
    }

    #[test]
    fn test_detailed_conservative_right() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify(
            "Lägre skatter och tillväxt, byggda på traditionella värderingar och kärnfamilj.",
        );

        assert_eq!(report.classification, LeanClass::Right);
        assert!(report.dimensions.social.score > 0.2);
        assert_eq!(
            report.detailed_classification,
            DetailedLean::ConservativeRight
        );
    }

    #[test]
    fn test_authority_axis() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify(
            "Mer övervakning, statlig kontroll och hårdare tag krävs för ordning och reda.",
        );

        assert!(report.dimensions.authority.score > 0.0);
        assert_eq!(report.dimensions.authority.classification, LeanClass::Right);
    }

    #[test]
    fn test_party_alignment_bands_overlap() {
        let classifier = IdeologyClassifier::new();
        let report = classifier.classify("Lägre skatter och fri marknad skapar tillväxt.");

        // A solid right score sits inside several right-of-centre bands.
        assert!(!report.party_alignment.parties.is_empty());
        assert!(report
            .party_alignment
            .parties
            .iter()
            .any(|p| p.abbreviation == "M"));
        assert!(!report.party_alignment.disclaimer.is_empty());
    }

    #[test]
    fn test_confidence_grows_with_markers() {
        let classifier = IdeologyClassifier::new();

        let weak = classifier.classify("Välfärden behöver resurser.");
        let strong = classifier.classify(
            "Välfärd, omfördelning, jämlikhet, offentlig sektor och fackförening \
             med kollektivavtal och progressiv skatt.",
        );

        assert!(strong.confidence > weak.confidence);
    }

    #[test]
    fn test_determinism() {
        let classifier = IdeologyClassifier::new();
        let text = "Vi måste stärka välfärden och öka omfördelningen.";

        let a = classifier.classify(text);
        let b = classifier.classify(text);
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.classification, b.classification);
        assert_eq!(a.markers.len(), b.markers.len());
    }
}
