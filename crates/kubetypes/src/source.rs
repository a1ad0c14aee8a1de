//! Loading the Kubernetes schema document.

use crate::config::SourceConfig;
use anyhow::{Context, Result};
use kubetypes_typegen::SchemaDocument;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Load the schema document from `file`, or fetch it for `api_version`.
pub fn load_document(
    file: Option<&Path>,
    api_version: &str,
    config: &SourceConfig,
) -> Result<SchemaDocument> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => fetch(&source_url(&config.url_template, api_version), config)?,
    };
    let document = SchemaDocument::from_json(&text)?;
    tracing::info!(
        title = %document.info.title,
        version = %document.info.version,
        definitions = document.definitions.len(),
        "loaded schema document"
    );
    Ok(document)
}

/// URL of the schema document for an API version.
pub fn source_url(template: &str, api_version: &str) -> String {
    template.replace("{version}", api_version)
}

fn fetch(url: &str, config: &SourceConfig) -> Result<String> {
    tracing::info!(url, "fetching schema document");
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build();

    let response = agent
        .get(url)
        .set("User-Agent", "kubetypes")
        .call()
        .with_context(|| format!("failed to fetch {}", url))?;

    // The document is several megabytes, above ureq's into_string limit.
    let mut text = String::new();
    response
        .into_reader()
        .read_to_string(&mut text)
        .with_context(|| format!("failed to read response from {}", url))?;
    Ok(text)
}
