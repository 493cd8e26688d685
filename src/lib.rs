//! Sanction Screen - sanctions and watchlist screening service
//!
//! Accepts a person's name, date of birth and country, screens them through an
//! external watchlist provider and reduces the provider's matches to a simple
//! `Clear` / `Hit` verdict naming the identity fields that matched.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{extract_fields, validate_request, ScreeningOrchestrator};
pub use error::{ScreeningError, ScreeningResult};
pub use models::{FieldName, ScreenRequest, ScreeningQuery, Verdict, VerdictResponse};
pub use services::{ProviderClient, ProviderError};
