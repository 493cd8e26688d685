use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identity fields of the person being screened
///
/// Built by the request validator once all three fields are known to be
/// present. Values are forwarded to the provider exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningQuery {
    pub full_name: String,
    pub date_of_birth: String,
    pub country: String,
}

/// Identity attribute that can contribute to a provider match
///
/// Variant order is the order fields are reported in a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Name,
    #[serde(rename = "DOB")]
    Dob,
    Citizenship,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Dob, FieldName::Citizenship];

    /// Provider vocabulary name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Dob => "DOB",
            FieldName::Citizenship => "Citizenship",
        }
    }

    /// Map a provider field name onto a known field.
    ///
    /// Matching is exact; anything outside the known domain yields `None`.
    pub fn from_provider(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a screening
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clear,
    Hit(BTreeSet<FieldName>),
}

impl Verdict {
    pub fn is_hit(&self) -> bool {
        matches!(self, Verdict::Hit(_))
    }

    /// Fields implicated by the match, empty for `Clear`
    pub fn fields(&self) -> Vec<FieldName> {
        match self {
            Verdict::Clear => Vec::new(),
            Verdict::Hit(fields) => fields.iter().copied().collect(),
        }
    }
}
