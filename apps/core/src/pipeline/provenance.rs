//! Provenance tracking for classifier outputs.
//!
//! Every classifier result carries a record of which method produced it, so
//! the transparency report stays auditable end to end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Engine identifier stamped on every provenance record.
pub const ENGINE_NAME: &str = "klarsyn-heuristics";

/// Engine version stamped on every provenance record.
pub const ENGINE_VERSION: &str = "1.0.0";

/// Metadata describing which method produced a given analysis field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    /// Engine that produced the result (e.g., "klarsyn-heuristics").
    pub model: String,
    /// Engine version.
    pub version: String,
    /// Method identifier (e.g., "lexicon-tone-v1").
    pub method: String,
    /// Creation time of the record.
    pub timestamp: DateTime<Utc>,
    /// Failure note when the producing stage degraded to its neutral default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProvenanceRecord {
    /// Create a provenance record for the given method.
    pub fn new(method: &str) -> Self {
        Self {
            model: ENGINE_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            method: method.to_string(),
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// Attach a degradation note to the record.
    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    /// Whether the producing stage completed without degrading.
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}
