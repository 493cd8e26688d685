// Core screening exports
pub mod extractor;
pub mod orchestrator;
pub mod validator;

pub use extractor::extract_fields;
pub use orchestrator::ScreeningOrchestrator;
pub use validator::validate_request;
