/// Connection details for one GraphDB server and repository.
///
/// Held by value wherever it is needed, so several orchestrators with
/// different servers can coexist in one process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    base_api: String,
    repository: String,
    username: Option<String>,
    password: Option<String>,
}

impl ServerConfig {
    /// Create a config for `repository` on the server at `base_api`,
    /// e.g. `http://1.2.3.4:7200`. A single trailing slash is stripped.
    pub fn new(base_api: impl Into<String>, repository: impl Into<String>) -> Self {
        let base_api = base_api.into();
        let base_api = base_api
            .strip_suffix('/')
            .map(str::to_owned)
            .unwrap_or(base_api);

        Self {
            base_api,
            repository: repository.into(),
            username: None,
            password: None,
        }
    }

    /// Attach optional credentials. Authentication only happens when both
    /// username and password are present.
    pub fn with_credentials(
        mut self,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        self.username = username;
        self.password = password;
        self
    }

    pub fn base_api(&self) -> &str {
        &self.base_api
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Username/password pair, only when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }
}
