//! API version labels and package release versions.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

static MAJOR_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+\.\d+$").expect("valid regex"));

static RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.(\d+)(?:[.\-+]|$)").expect("valid regex"));

/// Normalize a Kubernetes version label as used for git tags.
///
/// `1.30` and `v1.30` become `v1.30.0`; `1.30.2` becomes `v1.30.2`. Labels
/// that are not version numbers, such as `master`, are returned unchanged.
pub fn normalize_version(label: &str) -> String {
    let mut version = label.trim().to_string();
    if version.starts_with(|c: char| c.is_ascii_digit()) {
        version.insert(0, 'v');
    }
    if MAJOR_MINOR.is_match(&version) {
        version.push_str(".0");
    }
    version
}

/// Version of the generated package: the API's major and minor version with
/// our own patch number, and an optional `-beta.N` suffix.
pub fn release_version(api_version: &str, patch: u32, beta: Option<u32>) -> Result<String> {
    let Some(captures) = RELEASE.captures(api_version) else {
        bail!(
            "cannot derive a release version from API version {:?}; pass a numbered version such as 1.30",
            api_version
        );
    };

    let mut version = format!("{}.{}.{}", &captures[1], &captures[2], patch);
    if let Some(beta) = beta.filter(|b| *b > 0) {
        version.push_str(&format!("-beta.{}", beta));
    }
    Ok(version)
}
