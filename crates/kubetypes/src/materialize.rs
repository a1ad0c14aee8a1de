//! Writing a generated package to disk.

use anyhow::{Context, Result};
use kubetypes_typegen::Module;
use kubetypes_typegen::output::{file_path, render_module};
use std::fs;
use std::path::{Path, PathBuf};

const PACKAGE_TEMPLATE: &str = include_str!("../assets/package.json");
const README: &str = include_str!("../assets/README.md");

/// Directory of the package for `release` under `output`, e.g. `types/v1.30.0`.
pub fn package_dir(output: &Path, release: &str) -> PathBuf {
    output.join(format!("v{}", release))
}

/// Write every module plus `package.json` and `README.md`.
///
/// Returns the written module files relative to the package directory, in
/// module order.
pub fn write_package(dest: &Path, release: &str, modules: &[Module]) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(modules.len());

    for module in modules {
        let relative = file_path(module);
        let path = dest.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, render_module(module))
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), declarations = module.declarations.len(), "wrote module");
        written.push(relative);
    }

    let package = package_json(release)?;
    fs::write(dest.join("package.json"), package)
        .with_context(|| format!("failed to write package.json in {}", dest.display()))?;
    fs::write(dest.join("README.md"), README)
        .with_context(|| format!("failed to write README.md in {}", dest.display()))?;

    tracing::info!(dest = %dest.display(), modules = written.len(), "wrote package");
    Ok(written)
}

/// The package manifest template with its version set to `release`.
fn package_json(release: &str) -> Result<String> {
    let mut package: serde_json::Value =
        serde_json::from_str(PACKAGE_TEMPLATE).context("invalid package.json template")?;
    package["version"] = serde_json::Value::String(release.to_string());
    let mut text = serde_json::to_string_pretty(&package)?;
    text.push('\n');
    Ok(text)
}
