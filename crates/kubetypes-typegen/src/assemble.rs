//! Assembly of declaration modules from a whole schema document.

use crate::classify::{ModulePath, classify};
use crate::error::{GenerateError, Result};
use crate::imports::ImportTracker;
use crate::input::{Definition, SchemaDocument};
use crate::ir::{Declaration, Field, Module};
use crate::synth::{TypeSynthesizer, scalar_definition};
use std::collections::BTreeMap;

/// Descriptions of server-populated fields carry this marker.
const READ_ONLY_MARKER: &str = "Read-only.";

/// A definition together with its place in the output.
#[derive(Debug, Clone)]
pub struct ResolvedDefinition<'a> {
    /// Fully-qualified name in the document.
    pub name: &'a str,
    pub short_name: String,
    pub module_path: ModulePath,
    pub definition: &'a Definition,
}

/// Classify every definition, dropping excluded names.
///
/// Definitions keep the document's order.
pub fn definitions(document: &SchemaDocument) -> Vec<ResolvedDefinition<'_>> {
    document
        .definitions
        .iter()
        .filter_map(|(name, definition)| {
            let Some(classified) = classify(name) else {
                tracing::debug!(name = %name, "excluding definition outside known namespaces");
                return None;
            };
            Some(ResolvedDefinition {
                name: name.as_str(),
                short_name: classified.short_name,
                module_path: classified.module_path,
                definition,
            })
        })
        .collect()
}

/// A module under construction.
struct PendingModule<'a> {
    declarations: Vec<Declaration>,
    imports: ImportTracker,
    /// Declared symbols and the definition that declared each.
    declared: BTreeMap<String, &'a str>,
}

impl<'a> PendingModule<'a> {
    fn new(path: ModulePath) -> Self {
        Self {
            declarations: Vec::new(),
            imports: ImportTracker::new(path),
            declared: BTreeMap::new(),
        }
    }

    /// Claim `symbol` for the definition `name`.
    fn claim(&mut self, symbol: &str, name: &'a str) -> Result<()> {
        if let Some(first) = self.declared.insert(symbol.to_string(), name) {
            return Err(GenerateError::DuplicateDeclaration {
                symbol: symbol.to_string(),
                module: self.imports.owner().to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        Ok(())
    }

    fn finish(self) -> Module {
        Module {
            imports: self.imports.flush(),
            path: self.imports.owner().clone(),
            declarations: self.declarations,
        }
    }
}

/// Generate every declaration module of a document, ordered by module path.
///
/// Fails on the first reference that cannot be resolved, value that cannot
/// be typed, or symbol declared twice in one module; nothing is returned for a partially processed document.
pub fn generate(document: &SchemaDocument) -> Result<Vec<Module>> {
    let synth = TypeSynthesizer::new(document);
    let mut modules: BTreeMap<ModulePath, PendingModule<'_>> = BTreeMap::new();

    for resolved in definitions(document) {
        let module = modules
            .entry(resolved.module_path.clone())
            .or_insert_with(|| PendingModule::new(resolved.module_path.clone()));
        module.claim(&resolved.short_name, resolved.name)?;
        let declaration = declaration(&synth, &resolved, &mut module.imports)?;
        module.declarations.push(declaration);
    }

    let modules: Vec<Module> = modules.into_values().map(PendingModule::finish).collect();
    tracing::info!(
        title = %document.info.title,
        version = %document.info.version,
        modules = modules.len(),
        declarations = modules.iter().map(|m| m.declarations.len()).sum::<usize>(),
        "generated declaration modules"
    );
    Ok(modules)
}

fn declaration(
    synth: &TypeSynthesizer<'_>,
    resolved: &ResolvedDefinition<'_>,
    imports: &mut ImportTracker,
) -> Result<Declaration> {
    let definition = resolved.definition;
    let docs = definition.description.clone().filter(|d| !d.is_empty());

    if let Some(ty) = scalar_definition(resolved.name) {
        return Ok(Declaration::Alias {
            name: resolved.short_name.clone(),
            docs,
            ty,
        });
    }

    let discriminant = definition.single_group_version_kind();
    let fields = definition
        .properties
        .iter()
        .map(|(name, property)| -> Result<Field> {
            let description = property.description.as_deref().unwrap_or("");
            Ok(Field {
                name: name.clone(),
                ty: synth.property(name, property, discriminant, imports)?,
                optional: !definition.is_required(name),
                read_only: description.contains(READ_ONLY_MARKER),
                docs: property.description.clone().filter(|d| !d.is_empty()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Declaration::Interface {
        name: resolved.short_name.clone(),
        docs,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::ir::TypeExpr;
    use serde_json::json;

    fn document(definitions: serde_json::Value) -> SchemaDocument {
        SchemaDocument::from_value(json!({
            "info": { "title": "Kubernetes", "version": "v1.30.0" },
            "definitions": definitions
        }))
        .unwrap()
    }

    fn module<'a>(modules: &'a [Module], path: &str) -> &'a Module {
        modules
            .iter()
            .find(|m| m.path.as_str() == path)
            .unwrap_or_else(|| panic!("no module {path}"))
    }

    #[test]
    fn definitions_drop_excluded_names() {
        let document = document(json!({
            "io.k8s.api.core.v1.Pod": {},
            "io.k8s.metrics.pkg.apis.metrics.v1beta1.NodeMetrics": {},
            "io.k8s.api.apps.v1.Deployment": {}
        }));
        let names: Vec<&str> = definitions(&document).iter().map(|d| d.name).collect();
        assert_eq!(names, ["io.k8s.api.core.v1.Pod", "io.k8s.api.apps.v1.Deployment"]);
    }

    #[test]
    fn fields_keep_order_and_flags() {
        let document = document(json!({
            "io.k8s.api.core.v1.ObjectReference": {
                "description": "ObjectReference contains enough information to let you inspect or modify the referred object.",
                "required": ["name"],
                "properties": {
                    "uid": { "description": "UID of the referent. Read-only.", "type": "string" },
                    "name": { "description": "Name of the referent.", "type": "string" },
                    "apiVersion": { "type": "string" }
                }
            }
        }));
        let modules = generate(&document).unwrap();
        let reference = module(&modules, "core/v1").declaration("ObjectReference").unwrap();

        let names: Vec<&str> = reference.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["uid", "name", "apiVersion"]);

        let uid = reference.field("uid").unwrap();
        assert!(uid.optional);
        assert!(uid.read_only);
        let name = reference.field("name").unwrap();
        assert!(!name.optional);
        assert!(!name.read_only);
        assert_eq!(name.docs.as_deref(), Some("Name of the referent."));
        // No group-version-kind: apiVersion stays a plain string.
        assert_eq!(reference.field("apiVersion").unwrap().ty, TypeExpr::String);
    }

    #[test]
    fn scalar_definitions_become_aliases() {
        let document = document(json!({
            "io.k8s.apimachinery.pkg.apis.meta.v1.Time": {
                "description": "Time is a wrapper around time.Time.",
                "type": "string",
                "format": "date-time"
            },
            "io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta": {
                "properties": {
                    "creationTimestamp": { "$ref": "#/definitions/io.k8s.apimachinery.pkg.apis.meta.v1.Time" }
                }
            }
        }));
        let modules = generate(&document).unwrap();
        assert_eq!(modules.len(), 1);
        let meta = module(&modules, "apimachinery/meta/v1");

        assert_eq!(
            meta.declaration("Time"),
            Some(&Declaration::Alias {
                name: "Time".into(),
                docs: Some("Time is a wrapper around time.Time.".into()),
                ty: TypeExpr::String,
            })
        );
        assert_eq!(
            meta.declaration("ObjectMeta").unwrap().field("creationTimestamp").unwrap().ty,
            TypeExpr::Ref("Time".into())
        );
        assert!(meta.imports.is_empty());
    }

    #[test]
    fn discriminants_pinned_for_single_group_version_kind() {
        let document = document(json!({
            "io.k8s.api.batch.v1.Job": {
                "properties": {
                    "apiVersion": { "type": "string" },
                    "kind": { "type": "string" },
                    "spec": { "type": "string" }
                },
                "x-kubernetes-group-version-kind": [
                    { "group": "batch", "kind": "Job", "version": "v1" }
                ]
            }
        }));
        let modules = generate(&document).unwrap();
        let job = module(&modules, "batch/v1").declaration("Job").unwrap();
        assert_eq!(job.field("apiVersion").unwrap().ty, TypeExpr::literal("batch/v1"));
        assert_eq!(job.field("kind").unwrap().ty, TypeExpr::literal("Job"));
        assert_eq!(job.field("spec").unwrap().ty, TypeExpr::String);
    }

    #[test]
    fn first_error_aborts() {
        let document = document(json!({
            "io.k8s.api.core.v1.Pod": {
                "properties": {
                    "spec": { "$ref": "#/definitions/io.k8s.api.core.v1.PodSpec" }
                }
            }
        }));
        let err = generate(&document).unwrap_err();
        assert!(matches!(err, GenerateError::UnresolvedReference { .. }));
    }

    #[test]
    fn colliding_symbols_abort() {
        let document = document(json!({
            "io.k8s.apimachinery.pkg.apis.meta.v1.Status": {},
            "io.k8s.apimachinery.pkg.meta.v1.Status": {}
        }));
        let err = generate(&document).unwrap_err();
        assert_eq!(
            err.to_string(),
            "io.k8s.apimachinery.pkg.apis.meta.v1.Status and io.k8s.apimachinery.pkg.meta.v1.Status \
             both declare Status in module \"apimachinery/meta/v1\""
        );
    }

    #[test]
    fn same_short_name_in_different_modules() {
        let document = document(json!({
            "io.k8s.api.core.v1.Event": {},
            "io.k8s.api.events.v1.Event": {}
        }));
        let modules = generate(&document).unwrap();
        assert!(module(&modules, "core/v1").declaration("Event").is_some());
        assert!(module(&modules, "events/v1").declaration("Event").is_some());
    }

    #[test]
    fn excluded_definitions_leave_no_trace() {
        let document = document(json!({
            "io.k8s.api.core.v1.Pod": { "properties": { "name": { "type": "string" } } },
            "io.example.v1.Widget": { "properties": { "name": { "type": "string" } } }
        }));
        let modules = generate(&document).unwrap();
        assert_eq!(modules.len(), 1);
        assert!(modules.iter().all(|m| m.declaration("Widget").is_none()));
        assert!(modules.iter().all(|m| m.imports.is_empty()));
    }
}
