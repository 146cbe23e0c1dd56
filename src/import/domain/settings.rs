//! Wire model for GraphDB's `importSettings` JSON blob.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

/// Parser settings nested in every import request.
///
/// Only blank-node preservation is caller-controlled; the rest are fixed
/// GraphDB defaults and never exposed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserSettings {
    #[serde(rename = "preserveBNodeIds")]
    pub preserve_bnode_ids: bool,
    pub fail_on_unknown_data_types: bool,
    pub verify_data_type_values: bool,
    pub normalize_data_type_values: bool,
    pub fail_on_unknown_language_tags: bool,
    pub verify_language_tags: bool,
    pub normalize_language_tags: bool,
    pub stop_on_error: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            preserve_bnode_ids: false,
            fail_on_unknown_data_types: false,
            verify_data_type_values: false,
            normalize_data_type_values: false,
            fail_on_unknown_language_tags: false,
            verify_language_tags: true,
            normalize_language_tags: false,
            stop_on_error: true,
        }
    }
}

/// Settings blob the server expects alongside both the upload and the
/// import trigger. Field names match GraphDB's REST schema verbatim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSettings {
    pub name: String,
    pub status: String,
    pub message: String,
    pub context: Option<String>,
    pub replace_graphs: Vec<String>,
    #[serde(rename = "baseURI")]
    pub base_uri: Option<String>,
    pub force_serial: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub format: Option<String>,
    pub data: Option<String>,
    pub timestamp: i64,
    pub parser_settings: ParserSettings,
    pub request_id_headers_to_forward: Option<Vec<String>>,
}

impl ImportSettings {
    /// Settings for the initial file upload.
    ///
    /// Blank-node preservation is always off here; the server only honors
    /// the flag on the subsequent import trigger.
    pub fn for_upload(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            status: "NONE".to_owned(),
            message: String::new(),
            context: None,
            replace_graphs: Vec::new(),
            base_uri: None,
            force_serial: false,
            kind: None,
            format: None,
            data: None,
            timestamp: Utc::now().timestamp_millis(),
            parser_settings: ParserSettings::default(),
            request_id_headers_to_forward: None,
        }
    }

    /// Settings for triggering the import of an already uploaded file.
    ///
    /// `context` is the named graph or `""` (use whatever the file's triples
    /// declare); an empty `replace_graphs` means append semantics.
    pub fn for_import(
        name: &str,
        named_graph: Option<&str>,
        replace_graph: bool,
        preserve_bnode: bool,
    ) -> Self {
        Self {
            context: Some(named_graph.unwrap_or("").to_owned()),
            replace_graphs: replace_graph_targets(replace_graph, named_graph),
            kind: Some("file".to_owned()),
            parser_settings: ParserSettings {
                preserve_bnode_ids: preserve_bnode,
                ..ParserSettings::default()
            },
            ..Self::for_upload(name)
        }
    }
}

/// Which graphs the server should clear before loading the new data.
///
/// Replacing without a named graph targets the literal graph `"default"`.
pub fn replace_graph_targets(replace_graph: bool, named_graph: Option<&str>) -> Vec<String> {
    if !replace_graph {
        return Vec::new();
    }
    vec![named_graph.unwrap_or("default").to_owned()]
}

/// Last segment of `path`, with backslashes treated as separators so
/// Windows-style paths yield the same name on every platform.
pub fn derive_import_name(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    normalized.rsplit('/').next().unwrap_or("").to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replace_targets_default_graph_when_replacing_without_named_graph() {
        assert_eq!(replace_graph_targets(true, None), vec!["default".to_owned()]);
    }

    #[test]
    fn replace_targets_named_graph_when_given() {
        assert_eq!(replace_graph_targets(true, Some("g1")), vec!["g1".to_owned()]);
    }

    #[test]
    fn no_replace_targets_when_not_replacing() {
        assert!(replace_graph_targets(false, Some("g1")).is_empty());
        assert!(replace_graph_targets(false, None).is_empty());
    }

    #[test]
    fn derives_import_name_from_windows_path() {
        assert_eq!(
            derive_import_name(Path::new(r"C:\data\file.ttl.gz")),
            "file.ttl.gz"
        );
    }

    #[test]
    fn derives_import_name_from_unix_path() {
        assert_eq!(derive_import_name(Path::new("/data/ontology.owl")), "ontology.owl");
        assert_eq!(derive_import_name(Path::new("plain.nt")), "plain.nt");
    }

    #[test]
    fn upload_settings_match_server_schema() {
        let value = serde_json::to_value(ImportSettings::for_upload("file.ttl")).unwrap();

        assert_eq!(value["name"], "file.ttl");
        assert_eq!(value["status"], "NONE");
        assert_eq!(value["message"], "");
        assert!(value["context"].is_null());
        assert_eq!(value["replaceGraphs"], json!([]));
        assert!(value["baseURI"].is_null());
        assert_eq!(value["forceSerial"], false);
        assert!(value["type"].is_null());
        assert!(value["format"].is_null());
        assert!(value["data"].is_null());
        assert!(value["timestamp"].is_i64());
        assert!(value["requestIdHeadersToForward"].is_null());

        let parser = &value["parserSettings"];
        assert_eq!(parser["preserveBNodeIds"], false);
        assert_eq!(parser["failOnUnknownDataTypes"], false);
        assert_eq!(parser["verifyDataTypeValues"], false);
        assert_eq!(parser["normalizeDataTypeValues"], false);
        assert_eq!(parser["failOnUnknownLanguageTags"], false);
        assert_eq!(parser["verifyLanguageTags"], true);
        assert_eq!(parser["normalizeLanguageTags"], false);
        assert_eq!(parser["stopOnError"], true);
    }

    #[test]
    fn import_settings_carry_graph_targets_and_parser_flag() {
        let value =
            serde_json::to_value(ImportSettings::for_import("file.ttl", Some("g1"), true, true))
                .unwrap();

        assert_eq!(value["context"], "g1");
        assert_eq!(value["replaceGraphs"], json!(["g1"]));
        assert_eq!(value["type"], "file");
        assert_eq!(value["parserSettings"]["preserveBNodeIds"], true);
    }

    #[test]
    fn import_settings_use_empty_context_without_named_graph() {
        let value =
            serde_json::to_value(ImportSettings::for_import("file.ttl", None, true, false))
                .unwrap();

        assert_eq!(value["context"], "");
        assert_eq!(value["replaceGraphs"], json!(["default"]));
    }
}
