//! Value-to-type synthesis.

use crate::classify::classify;
use crate::error::{GenerateError, Result};
use crate::imports::ImportTracker;
use crate::input::{GroupVersionKind, Property, ScalarKind, SchemaDocument, Value};
use crate::ir::TypeExpr;
use crate::resolve::resolve;

const INT_OR_STRING: &str = "io.k8s.apimachinery.pkg.util.intstr.IntOrString";

/// References replaced by an inline type instead of an import.
const ELIDED_REFERENCES: &[(&str, fn() -> TypeExpr)] = &[(INT_OR_STRING, number_or_string)];

/// Definitions declared as type aliases rather than interfaces.
const SCALAR_DEFINITIONS: &[(&str, fn() -> TypeExpr)] = &[
    ("io.k8s.apimachinery.pkg.apis.meta.v1.Time", string),
    ("io.k8s.apimachinery.pkg.apis.meta.v1.MicroTime", string),
    ("io.k8s.apimachinery.pkg.api.resource.Quantity", string),
    (INT_OR_STRING, number_or_string),
];

fn string() -> TypeExpr {
    TypeExpr::String
}

fn number_or_string() -> TypeExpr {
    TypeExpr::Union(vec![TypeExpr::Number, TypeExpr::String])
}

fn lookup(table: &[(&str, fn() -> TypeExpr)], name: &str) -> Option<TypeExpr> {
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, ty)| ty())
}

/// Inline type used in place of a reference to `name`, if any.
pub fn elided_reference(name: &str) -> Option<TypeExpr> {
    lookup(ELIDED_REFERENCES, name)
}

/// Alias type declared for the definition `name`, if it is a scalar alias.
pub fn scalar_definition(name: &str) -> Option<TypeExpr> {
    lookup(SCALAR_DEFINITIONS, name)
}

/// Converts schema values to type expressions for one document.
#[derive(Debug, Clone, Copy)]
pub struct TypeSynthesizer<'a> {
    document: &'a SchemaDocument,
}

impl<'a> TypeSynthesizer<'a> {
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self { document }
    }

    /// Type of a property, pinning `apiVersion` and `kind` to literals when
    /// the owning definition has a single group-version-kind.
    pub fn property(
        &self,
        name: &str,
        property: &Property,
        discriminant: Option<&GroupVersionKind>,
        imports: &mut ImportTracker,
    ) -> Result<TypeExpr> {
        match (name, discriminant) {
            ("apiVersion", Some(gvk)) => Ok(TypeExpr::literal(gvk.api_version())),
            ("kind", Some(gvk)) => Ok(TypeExpr::literal(gvk.kind.clone())),
            _ => self.synthesize(&property.value, imports),
        }
    }

    /// Type of a value as seen from the module owning `imports`.
    ///
    /// Cross-module references are recorded in `imports`.
    pub fn synthesize(&self, value: &Value, imports: &mut ImportTracker) -> Result<TypeExpr> {
        match value {
            Value::Reference(reference) => self.reference(reference, imports),
            Value::Scalar(ScalarKind::String) => Ok(TypeExpr::String),
            Value::Scalar(ScalarKind::Integer | ScalarKind::Number) => Ok(TypeExpr::Number),
            Value::Scalar(ScalarKind::Boolean) => Ok(TypeExpr::Boolean),
            Value::Array(items) => Ok(TypeExpr::array(self.synthesize(items, imports)?)),
            Value::ObjectMap(values) => Ok(TypeExpr::map(self.synthesize(values, imports)?)),
            Value::Unrecognized(shape) => Err(GenerateError::ImpossibleValueShape {
                shape: shape.to_string(),
            }),
        }
    }

    fn reference(&self, reference: &str, imports: &mut ImportTracker) -> Result<TypeExpr> {
        let (name, _) = resolve(self.document, reference)?;
        let target = classify(name).ok_or_else(|| GenerateError::ExcludedReferenceTarget {
            name: name.to_string(),
        })?;

        if let Some(ty) = elided_reference(name) {
            return Ok(ty);
        }

        imports.add(&target.module_path, &target.short_name);
        Ok(TypeExpr::Ref(target.short_name))
    }
}
