use serde::Serialize;

/// All library errors, categorized by domain.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    // ── Series ──
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    // ── Indicator ──
    #[error("Invalid indicator parameter: {0}")]
    InvalidParameter(String),
}

/// Serializable error response for the presentation layer.
#[derive(Debug, Serialize, Clone)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AnalysisError> for ErrorResponse {
    fn from(err: &AnalysisError) -> Self {
        let code = match err {
            AnalysisError::InvalidSeries(_) => "INVALID_SERIES",
            AnalysisError::InvalidParameter(_) => "INVALID_PARAMETER",
        };
        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// Errors cross the rendering boundary as { code, message } payloads.
impl Serialize for AnalysisError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let response = ErrorResponse::from(self);
        response.serialize(serializer)
    }
}
