use serde::Deserialize;

/// Lifecycle states GraphDB reports for an import record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportStatus {
    None,
    Importing,
    Done,
    Error,
    /// Any status value this client does not know; treated as in-progress.
    #[serde(other)]
    Unknown,
}

impl ImportStatus {
    /// Whether polling can stop at this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, ImportStatus::Done | ImportStatus::Error)
    }
}

/// One entry from the server's import history listing. The server sends more
/// fields than these; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRecord {
    pub name: String,
    pub status: ImportStatus,
    #[serde(default)]
    pub message: String,
}
