use std::collections::BTreeSet;

use crate::models::{FieldName, MatchRecord};

/// Collect the identity fields implicated across all provider matches.
///
/// Records without a summary contribute nothing, and field names outside
/// the known domain are dropped. Never fails.
pub fn extract_fields(matches: &[MatchRecord]) -> BTreeSet<FieldName> {
    matches
        .iter()
        .filter_map(|record| record.match_summary.as_ref())
        .flat_map(|summary| summary.match_fields.iter())
        .filter_map(|field| FieldName::from_provider(&field.field_name))
        .collect()
}
