pub mod import;
pub mod shared;

// Re-exports for convenience
pub use import::application::orchestrator::{ImportOptions, ImportOrchestrator, PollPolicy};
pub use import::application::ports::ImportServiceClient;
pub use import::domain::{ImportRecord, ImportSettings, ImportStatus, ParserSettings, ServerConfig};
pub use import::infrastructure::GraphDbClient;
pub use shared::errors::{ImportError, ImportResult};
