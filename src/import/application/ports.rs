use std::path::Path;

use async_trait::async_trait;

use crate::import::domain::{ImportRecord, ImportSettings};
use crate::shared::errors::ImportResult;

/// Port (interface) for the GraphDB REST import surface.
/// Infrastructure implements this over HTTP; tests substitute scripted doubles.
///
/// All requests except `authenticate` carry `Authorization: <token>` when a
/// token is given.
#[async_trait]
pub trait ImportServiceClient: Send + Sync {
    /// Exchange credentials for an opaque session token.
    async fn authenticate(&self, username: &str, password: &str) -> ImportResult<String>;

    /// Upload the file bytes plus settings as one multipart request.
    /// `file_name` is the name sent with the file part; `settings.name` is the
    /// import name, which may differ when the caller overrides it.
    async fn upload_file(
        &self,
        path: &Path,
        file_name: &str,
        settings: &ImportSettings,
        token: Option<&str>,
    ) -> ImportResult<()>;

    /// Trigger the server-side import of a previously uploaded file.
    async fn start_import(
        &self,
        settings: &ImportSettings,
        token: Option<&str>,
    ) -> ImportResult<()>;

    /// List the server's import records for the repository.
    async fn list_imports(&self, token: Option<&str>) -> ImportResult<Vec<ImportRecord>>;

    /// Remove the named upload from the server's import history.
    async fn delete_import(&self, name: &str, token: Option<&str>) -> ImportResult<()>;
}
