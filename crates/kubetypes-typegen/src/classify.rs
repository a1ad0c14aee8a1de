//! Routing of fully-qualified definition names to output modules.

use std::fmt;

/// Recognized namespace prefixes and their replacements, matched in order.
///
/// Longer prefixes must come before any prefix they extend. Prefixes carry no
/// trailing dot, so `io.k8s.apiextensions-apiserver` falls under `io.k8s.api`
/// and keeps its own `extensions-apiserver/...` module tree.
const NAMESPACES: &[(&str, &str)] = &[
    ("io.k8s.apimachinery.pkg.apis", "apimachinery."),
    ("io.k8s.apimachinery.pkg", "apimachinery."),
    ("io.k8s.api", ""),
];

/// Slash-separated path of an output module, e.g. `core/v1`.
///
/// The empty path is the top-level module.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModulePath(String);

/// Where a definition lands in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedName {
    /// Declaration name, the last segment of the definition name.
    pub short_name: String,
    pub module_path: ModulePath,
}

/// Classify a fully-qualified definition name.
///
/// Returns `None` when the name is outside every recognized namespace; such
/// definitions are left out of the output entirely.
pub fn classify(name: &str) -> Option<ClassifiedName> {
    let (prefix, replacement) = NAMESPACES
        .iter()
        .find(|(prefix, _)| name.starts_with(prefix))?;
    let rest = format!("{}{}", replacement, &name[prefix.len()..]);

    let mut segments: Vec<&str> = rest.split('.').filter(|s| !s.is_empty()).collect();
    let short_name = segments.pop()?;

    Some(ClassifiedName {
        short_name: short_name.to_string(),
        module_path: ModulePath::from_segments(&segments),
    })
}

impl ModulePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    fn from_segments(segments: &[&str]) -> Self {
        Self(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_top_level(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments of this module's output file, without extension.
    fn file_segments(&self) -> Vec<&str> {
        if self.is_top_level() {
            vec!["index"]
        } else {
            self.0.split('/').collect()
        }
    }

    /// Output file path relative to the package root, e.g. `core/v1.d.ts`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_segments().join("/"), extension)
    }

    /// Module specifier that imports `target` from a file for this module.
    ///
    /// ```
    /// use kubetypes_typegen::ModulePath;
    ///
    /// let core = ModulePath::new("core/v1");
    /// assert_eq!(core.relative_specifier(&ModulePath::new("apps/v1")), "../apps/v1");
    /// assert_eq!(core.relative_specifier(&ModulePath::new("core/v2")), "./v2");
    /// ```
    pub fn relative_specifier(&self, target: &ModulePath) -> String {
        let from = self.file_segments();
        let from_dir = &from[..from.len() - 1];
        let to = target.file_segments();

        // The target's file name always remains after the shared directories.
        let common = from_dir
            .iter()
            .zip(&to[..to.len() - 1])
            .take_while(|(a, b)| a == b)
            .count();

        let rest = to[common..].join("/");
        let ups = from_dir.len() - common;
        if ups == 0 {
            format!("./{}", rest)
        } else {
            format!("{}{}", "../".repeat(ups), rest)
        }
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(name: &str) -> (String, String) {
        let c = classify(name).unwrap();
        (c.short_name, c.module_path.to_string())
    }

    #[test]
    fn classify_api_groups() {
        assert_eq!(
            classified("io.k8s.api.core.v1.Pod"),
            ("Pod".into(), "core/v1".into())
        );
        assert_eq!(
            classified("io.k8s.api.batch.v1.Job"),
            ("Job".into(), "batch/v1".into())
        );
        assert_eq!(
            classified("io.k8s.api.flowcontrol.v1beta3.FlowSchema"),
            ("FlowSchema".into(), "flowcontrol/v1beta3".into())
        );
    }

    #[test]
    fn classify_apimachinery() {
        assert_eq!(
            classified("io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"),
            ("ObjectMeta".into(), "apimachinery/meta/v1".into())
        );
        assert_eq!(
            classified("io.k8s.apimachinery.pkg.util.intstr.IntOrString"),
            ("IntOrString".into(), "apimachinery/util/intstr".into())
        );
        assert_eq!(
            classified("io.k8s.apimachinery.pkg.api.resource.Quantity"),
            ("Quantity".into(), "apimachinery/api/resource".into())
        );
    }

    #[test]
    fn classify_extension_apiservers() {
        assert_eq!(
            classified(
                "io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1.CustomResourceDefinition"
            ),
            (
                "CustomResourceDefinition".into(),
                "extensions-apiserver/pkg/apis/apiextensions/v1".into()
            )
        );
        assert_eq!(
            classify("io.k8s.kube-aggregator.pkg.apis.apiregistration.v1.APIService"),
            None
        );
    }

    #[test]
    fn extension_apiserver_stays_apart_from_api_group() {
        let api = classify("io.k8s.api.apiextensions.v1.X").unwrap();
        let apiserver = classify("io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1.X").unwrap();
        assert_eq!(api.module_path.as_str(), "apiextensions/v1");
        assert_ne!(api.module_path, apiserver.module_path);
    }

    #[test]
    fn prefixes_match_without_segment_boundary() {
        assert_eq!(
            classified("io.k8s.apis.core.v1.Pod"),
            ("Pod".into(), "s/core/v1".into())
        );
    }

    #[test]
    fn classify_top_level() {
        assert_eq!(classified("io.k8s.api.Thing"), ("Thing".into(), "".into()));
        assert!(classify("io.k8s.api.Thing").unwrap().module_path.is_top_level());
    }

    #[test]
    fn exclude_unrecognized_names() {
        assert_eq!(classify("io.k8s.metrics.pkg.apis.metrics.v1beta1.NodeMetrics"), None);
        assert_eq!(classify("com.example.v1.Widget"), None);
        assert_eq!(classify(""), None);
        // Prefix with nothing left to name.
        assert_eq!(classify("io.k8s.api"), None);
        assert_eq!(classify("io.k8s.api."), None);
    }

    #[test]
    fn classification_is_deterministic() {
        let name = "io.k8s.api.networking.v1.Ingress";
        assert_eq!(classify(name), classify(name));
    }

    #[test]
    fn relative_specifiers() {
        let core = ModulePath::new("core/v1");
        assert_eq!(
            core.relative_specifier(&ModulePath::new("apimachinery/meta/v1")),
            "../apimachinery/meta/v1"
        );
        assert_eq!(core.relative_specifier(&ModulePath::new("")), "../index");

        let meta = ModulePath::new("apimachinery/meta/v1");
        assert_eq!(meta.relative_specifier(&core), "../../core/v1");
        assert_eq!(
            meta.relative_specifier(&ModulePath::new("apimachinery/util/intstr")),
            "../util/intstr"
        );
        assert_eq!(meta.relative_specifier(&ModulePath::new("apimachinery")), "../../apimachinery");

        let top = ModulePath::new("");
        assert_eq!(top.relative_specifier(&core), "./core/v1");
        assert_eq!(ModulePath::new("a/b/c").relative_specifier(&ModulePath::new("a/b")), "../b");
    }

    #[test]
    fn file_names() {
        assert_eq!(ModulePath::new("core/v1").file_name("d.ts"), "core/v1.d.ts");
        assert_eq!(ModulePath::new("").file_name("d.ts"), "index.d.ts");
    }
}
