// Model exports
pub mod domain;
pub mod provider;
pub mod requests;
pub mod responses;

pub use domain::{FieldName, ScreeningQuery, Verdict};
pub use provider::{FieldMatch, MatchRecord, MatchSummary, ProviderRequest, ProviderResult, ResultEntry};
pub use requests::ScreenRequest;
pub use responses::{ErrorResponse, HealthResponse, VerdictResponse};
