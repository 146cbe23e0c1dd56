//! HTTP implementation of the import service port against GraphDB's REST API.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, StatusCode};
use tokio_util::io::ReaderStream;

use crate::import::application::ports::ImportServiceClient;
use crate::import::domain::{ImportRecord, ImportSettings, ServerConfig};
use crate::shared::errors::{ImportError, ImportResult};

const ACCEPT_JSON: &str = "application/json, text/plain, */*";
const REPOSITORY_HEADER: &str = "X-GraphDB-Repository";
const PASSWORD_HEADER: &str = "X-GraphDB-Password";

/// reqwest-backed client for the GraphDB REST import endpoints.
pub struct GraphDbClient {
    http: Client,
    config: ServerConfig,
}

impl GraphDbClient {
    /// Build a client for `config`. No request timeout is set: uploads can be
    /// multi-gigabyte and imports arbitrarily long.
    pub fn new(config: ServerConfig) -> ImportResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("graphdb-importer/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_api(), path)
    }

    /// URL under `/rest/repositories/{repo}/import/upload`.
    fn import_endpoint(&self, suffix: &str) -> String {
        self.endpoint(&format!(
            "/rest/repositories/{}/import/upload{}",
            self.config.repository(),
            suffix
        ))
    }

    fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.header(AUTHORIZATION, token),
            None => request,
        }
    }

    fn settings_part(settings: &ImportSettings) -> ImportResult<Part> {
        let part = Part::text(serde_json::to_string(settings)?)
            .file_name("blob")
            .mime_str("application/json")?;
        Ok(part)
    }
}

#[async_trait]
impl ImportServiceClient for GraphDbClient {
    async fn authenticate(&self, username: &str, password: &str) -> ImportResult<String> {
        let url = self.endpoint(&format!("/rest/login/{username}"));
        let response = self
            .http
            .post(url)
            .header(PASSWORD_HEADER, password)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ImportError::Authentication {
                status: response.status().as_u16(),
            });
        }

        // The session token comes back in the Authorization response header.
        let token = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ImportError::InvalidResponse(
                    "login response carries no Authorization header".to_owned(),
                )
            })?;

        Ok(token.to_owned())
    }

    async fn upload_file(
        &self,
        path: &Path,
        file_name: &str,
        settings: &ImportSettings,
        token: Option<&str>,
    ) -> ImportResult<()> {
        let file = tokio::fs::File::open(path).await?;
        // Stream the body so large dumps never sit fully in memory.
        let file_part = Part::stream(Body::wrap_stream(ReaderStream::new(file)))
            .file_name(file_name.to_owned())
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .part("file", file_part)
            .part("importSettings", Self::settings_part(settings)?);

        let request = self
            .http
            .post(self.import_endpoint("/update/file"))
            .multipart(form);
        let response = Self::with_token(request, token).send().await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::ACCEPTED {
            return Err(ImportError::Upload {
                name: settings.name.clone(),
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }

    async fn start_import(
        &self,
        settings: &ImportSettings,
        token: Option<&str>,
    ) -> ImportResult<()> {
        let form = Form::new().part("importSettings", Self::settings_part(settings)?);

        let request = self.http.post(self.import_endpoint("/file")).multipart(form);
        let response = Self::with_token(request, token).send().await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::ACCEPTED {
            return Err(ImportError::ImportStart {
                name: settings.name.clone(),
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }

    async fn list_imports(&self, token: Option<&str>) -> ImportResult<Vec<ImportRecord>> {
        let request = self
            .http
            .get(self.import_endpoint("/"))
            .header(ACCEPT, ACCEPT_JSON)
            .header(REPOSITORY_HEADER, self.config.repository());
        let response = Self::with_token(request, token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::InvalidResponse(format!(
                "import status listing returned HTTP {}",
                status.as_u16()
            )));
        }

        Ok(response.json().await?)
    }

    async fn delete_import(&self, name: &str, token: Option<&str>) -> ImportResult<()> {
        let request = self
            .http
            .delete(self.import_endpoint("/status"))
            .query(&[("remove", "true")])
            .header(ACCEPT, ACCEPT_JSON)
            .header(REPOSITORY_HEADER, self.config.repository())
            .json(&[name]);
        let response = Self::with_token(request, token).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ImportError::Cleanup {
                name: name.to_owned(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}
