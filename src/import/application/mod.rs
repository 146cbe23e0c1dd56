pub mod orchestrator;
pub mod ports;

pub use orchestrator::{ImportOptions, ImportOrchestrator, PollPolicy};
pub use ports::ImportServiceClient;
