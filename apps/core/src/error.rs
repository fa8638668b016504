use thiserror::Error;

/// Crate-wide error type, consolidating all possible analysis errors into a single enum.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Represents invalid configuration (e.g., a threshold outside its documented range).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a failure inside a single pipeline stage. The orchestrator catches
    /// this variant and substitutes the stage's neutral default output.
    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AnalysisError {
    fn clone(&self) -> Self {
        match self {
            AnalysisError::Config(s) => AnalysisError::Config(s.clone()),
            AnalysisError::Stage { stage, message } => AnalysisError::Stage {
                stage: stage.clone(),
                message: message.clone(),
            },
            AnalysisError::Internal(s) => AnalysisError::Internal(s.clone()),
        }
    }
}

impl From<validator::ValidationErrors> for AnalysisError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalysisError::Config(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Internal(format!("JSON error: {}", err))
    }
}
