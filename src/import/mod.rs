pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::orchestrator::{ImportOptions, ImportOrchestrator, PollPolicy};
pub use application::ports::ImportServiceClient;
pub use domain::{ImportRecord, ImportSettings, ImportStatus, ParserSettings, ServerConfig};
pub use infrastructure::GraphDbClient;
