use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::models::domain::ScreeningQuery;

/// Minimum provider confidence score for a reported match
pub const MIN_SCORE: u8 = 95;

/// Watchlist sources every case is screened against
pub const SOURCES: [&str; 3] = ["SDN", "NONSDN", "eu"];

/// Screening request in the provider's wire format
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub api_key: String,
    pub min_score: u8,
    pub sources: Vec<String>,
    pub cases: Vec<ProviderCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCase {
    pub name: String,
    pub dob: String,
    pub citizenship: String,
    pub address: ProviderAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderAddress {
    pub country: String,
}

impl ProviderRequest {
    /// Project a query into a single-case provider request.
    ///
    /// Score threshold and sources are fixed; the address country always
    /// mirrors citizenship.
    pub fn from_query(api_key: &str, query: &ScreeningQuery) -> Self {
        Self {
            api_key: api_key.to_string(),
            min_score: MIN_SCORE,
            sources: SOURCES.iter().map(|s| s.to_string()).collect(),
            cases: vec![ProviderCase {
                name: query.full_name.clone(),
                dob: query.date_of_birth.clone(),
                citizenship: query.country.clone(),
                address: ProviderAddress {
                    country: query.country.clone(),
                },
            }],
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRequest")
            .field("api_key", &"<redacted>")
            .field("min_score", &self.min_score)
            .field("sources", &self.sources)
            .field("cases", &self.cases.len())
            .finish()
    }
}

/// Provider screening response
///
/// Entries stay raw: only the first one, for the single submitted case,
/// is ever decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderResult {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl ProviderResult {
    /// Decode the entry for the single submitted case
    pub fn first_entry(&self) -> Result<ResultEntry, String> {
        let first = self
            .results
            .as_ref()
            .and_then(|results| results.first())
            .ok_or_else(|| "Missing results[0] in provider response".to_string())?;

        serde_json::from_value(first.clone())
            .map_err(|e| format!("Unusable results[0] in provider response: {}", e))
    }
}

/// Per-case result entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(default, deserialize_with = "match_count")]
    pub match_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub matches: Vec<MatchRecord>,
}

/// Single watchlist match reported by the provider
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub match_summary: Option<MatchSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub match_fields: Vec<FieldMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field_name: String,
}

/// Decode an optional nested value, treating a mis-shaped value as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a match count, accepting integral floats such as `2.0`.
///
/// Anything that is not a non-negative whole number decodes as `None`.
fn match_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    Ok(count)
}

/// Decode a list, dropping elements that do not fit and treating a
/// non-list (including `null`) as empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
