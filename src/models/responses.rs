use serde::{Deserialize, Serialize};
use crate::models::domain::{FieldName, Verdict};

/// Response for the screening endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<FieldName>>,
}

impl From<Verdict> for VerdictResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Clear => Self {
                message: "Clear".to_string(),
                result: None,
            },
            Verdict::Hit(fields) => Self {
                message: "Hit".to_string(),
                result: Some(fields.into_iter().collect()),
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
