//! End-to-end import sequence: authenticate, upload, trigger, poll, clean up.

use std::path::Path;
use std::time::Duration;

use log::info;

use crate::import::application::ports::ImportServiceClient;
use crate::import::domain::{derive_import_name, ImportSettings, ImportStatus, ServerConfig};
use crate::shared::errors::{ImportError, ImportResult};

/// Caller-controlled knobs for one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Server-side name for the import; defaults to the uploaded file's name.
    /// Override it to disambiguate repeated uploads of files sharing a name.
    pub import_name: Option<String>,
    /// Target named graph; `None` means the graph(s) declared in the file.
    pub named_graph: Option<String>,
    /// Clear the target graph before loading the new data.
    pub replace_graph: bool,
    /// Delete the server-side upload record once the import is done.
    pub remove_upload_after_import: bool,
    /// Keep blank node IDs stable across files (split-ontology imports).
    pub preserve_bnode: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_name: None,
            named_graph: None,
            replace_graph: true,
            remove_upload_after_import: true,
            preserve_bnode: false,
        }
    }
}

/// Cadence of the status polling loop.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    /// Delay before the first status request.
    pub initial_delay: Duration,
    /// Delay between consecutive status requests.
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            interval: Duration::from_secs(1),
        }
    }
}

/// Drives one file through upload, import trigger, status polling and
/// optional cleanup, strictly in sequence.
pub struct ImportOrchestrator<C> {
    config: ServerConfig,
    client: C,
    poll: PollPolicy,
}

impl<C: ImportServiceClient> ImportOrchestrator<C> {
    pub fn new(config: ServerConfig, client: C) -> Self {
        Self {
            config,
            client,
            poll: PollPolicy::default(),
        }
    }

    /// Override the polling cadence. Tests shrink it to near zero.
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// Upload `file_path`, trigger its import and block until the server
    /// reports a terminal status. Returns `Ok(true)` on success.
    ///
    /// Any failed step aborts the whole sequence; steps that already
    /// succeeded are not rolled back. The polling loop has no upper bound:
    /// the server is expected to drive every submitted import to DONE or
    /// ERROR eventually. A cleanup failure surfaces as `Cleanup` even though
    /// the import itself already completed; callers should not re-import.
    pub async fn import_and_wait(
        &self,
        file_path: &Path,
        options: &ImportOptions,
    ) -> ImportResult<bool> {
        let token = match self.config.credentials() {
            Some((username, password)) => {
                let token = self.client.authenticate(username, password).await?;
                info!("Authenticated.");
                Some(token)
            }
            None => None,
        };

        let file_name = derive_import_name(file_path);
        let import_name = options
            .import_name
            .clone()
            .unwrap_or_else(|| file_name.clone());

        info!("File uploading...");
        // The upload step always pins preserveBNodeIds to false; only the
        // import trigger below honors the caller's choice.
        let upload_settings = ImportSettings::for_upload(&import_name);
        self.client
            .upload_file(file_path, &file_name, &upload_settings, token.as_deref())
            .await?;
        info!("File uploaded, importing...");

        let import_settings = ImportSettings::for_import(
            &import_name,
            options.named_graph.as_deref(),
            options.replace_graph,
            options.preserve_bnode,
        );
        self.client
            .start_import(&import_settings, token.as_deref())
            .await?;

        tokio::time::sleep(self.poll.initial_delay).await;
        while !self.check_status(&import_name, token.as_deref()).await? {
            tokio::time::sleep(self.poll.interval).await;
        }

        if options.remove_upload_after_import {
            self.client
                .delete_import(&import_name, token.as_deref())
                .await?;
            info!("File deleted from server.");
        }

        info!("Done");
        Ok(true)
    }

    /// One status poll. `Ok(true)` when the import is done, `Ok(false)` while
    /// it is still in progress.
    async fn check_status(&self, import_name: &str, token: Option<&str>) -> ImportResult<bool> {
        let records = self.client.list_imports(token).await?;
        let record = records
            .into_iter()
            .find(|record| record.name == import_name)
            .ok_or_else(|| ImportError::ImportNotFound(import_name.to_owned()))?;

        match record.status {
            ImportStatus::Done => Ok(true),
            ImportStatus::Error => Err(ImportError::ImportFailed {
                name: import_name.to_owned(),
                message: record.message,
            }),
            _ => Ok(false),
        }
    }
}
