pub mod graphdb_client;

pub use graphdb_client::GraphDbClient;
