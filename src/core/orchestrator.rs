use crate::core::extractor::extract_fields;
use crate::error::{ScreeningError, ScreeningResult};
use crate::models::{ProviderRequest, ScreeningQuery, Verdict};
use crate::services::ProviderClient;

/// Screening orchestrator - turns a query into a verdict
///
/// # Steps
/// 1. Build the provider request from the query
/// 2. Call the provider once, bounded by the client timeout
/// 3. Read the match count of the first result entry
/// 4. On a match, extract the implicated fields
#[derive(Clone)]
pub struct ScreeningOrchestrator {
    provider: ProviderClient,
    api_key: String,
}

impl ScreeningOrchestrator {
    pub fn new(provider: ProviderClient, api_key: String) -> Self {
        Self { provider, api_key }
    }

    /// Screen a single person against the configured watchlists
    pub async fn screen(&self, query: &ScreeningQuery) -> ScreeningResult<Verdict> {
        let request = ProviderRequest::from_query(&self.api_key, query);

        let result = self.provider.screen(&request).await?;

        let entry = result
            .first_entry()
            .map_err(ScreeningError::MalformedProviderResponse)?;

        let match_count = entry.match_count.ok_or_else(|| {
            ScreeningError::MalformedProviderResponse("Missing matchCount in provider result".to_string())
        })?;

        if match_count == 0 {
            tracing::info!("Screening clear");
            return Ok(Verdict::Clear);
        }

        let fields = extract_fields(&entry.matches);

        tracing::info!(
            "Screening hit: {} matches, fields: {:?}",
            match_count,
            fields
        );

        Ok(Verdict::Hit(fields))
    }
}
