pub mod server_config;
pub mod settings;
pub mod status;

pub use server_config::ServerConfig;
pub use settings::{derive_import_name, replace_graph_targets, ImportSettings, ParserSettings};
pub use status::{ImportRecord, ImportStatus};
