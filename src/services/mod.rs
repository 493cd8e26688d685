// Service exports
pub mod provider;

pub use provider::{ProviderClient, ProviderError};
