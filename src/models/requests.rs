use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Request to screen a person against the sanctions lists
///
/// Every field is optional at the serde level so that an absent or
/// non-string field is reported as a validation failure rather than a JSON
/// decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ScreenRequest {
    #[validate(required, custom(function = "not_blank"))]
    #[serde(default, alias = "full_name", rename = "fullName", deserialize_with = "string_only")]
    pub full_name: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    #[serde(default, alias = "dateOfBirth", deserialize_with = "string_only")]
    pub dob: Option<String>,
    #[validate(required, custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "string_only")]
    pub country: Option<String>,
}

/// Keep string values only; numbers, objects and `null` count as absent.
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
