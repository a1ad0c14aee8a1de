//! Swagger 2.0 document model.
//!
//! Only enough of the document is modelled to generate declarations. Keys
//! outside this model (`paths`, `format`, most `x-kubernetes-*` extensions)
//! are ignored. Maps keep the document's key order, which is the order
//! declarations and fields are emitted in.

use crate::error::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// A parsed schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    pub info: Info,
    /// Definitions keyed by fully-qualified name, in document order.
    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,
}

/// Document title and version, used in diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
}

/// A named schema entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
    #[serde(default, rename = "x-kubernetes-group-version-kind")]
    pub group_version_kind: Vec<GroupVersionKind>,
}

/// One entry of `x-kubernetes-group-version-kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupVersionKind {
    /// Empty for the legacy core group.
    #[serde(default)]
    pub group: String,
    pub version: String,
    pub kind: String,
}

/// A property of a definition: a value shape plus its description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub value: Value,
}

/// Scalar JSON Schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// The shape of a property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawValue")]
pub enum Value {
    Scalar(ScalarKind),
    Array(Box<Value>),
    /// `{type: "object", additionalProperties: V}`, a string-keyed map.
    ObjectMap(Box<Value>),
    /// A `$ref` pointer, unresolved.
    Reference(String),
    /// Anything outside the taxonomy above, kept verbatim for diagnostics.
    Unrecognized(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Typed(TypedValue),
    Unrecognized(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TypedValue {
    String,
    Integer,
    Number,
    Boolean,
    Array {
        items: Box<Value>,
    },
    Object {
        #[serde(rename = "additionalProperties")]
        additional_properties: Box<Value>,
    },
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Reference { reference } => Value::Reference(reference),
            RawValue::Typed(TypedValue::String) => Value::Scalar(ScalarKind::String),
            RawValue::Typed(TypedValue::Integer) => Value::Scalar(ScalarKind::Integer),
            RawValue::Typed(TypedValue::Number) => Value::Scalar(ScalarKind::Number),
            RawValue::Typed(TypedValue::Boolean) => Value::Scalar(ScalarKind::Boolean),
            RawValue::Typed(TypedValue::Array { items }) => Value::Array(items),
            RawValue::Typed(TypedValue::Object {
                additional_properties,
            }) => Value::ObjectMap(additional_properties),
            RawValue::Unrecognized(other) => Value::Unrecognized(other),
        }
    }
}

impl SchemaDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl Definition {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|r| r == field)
    }

    /// The group-version-kind when the definition carries exactly one.
    ///
    /// Definitions listing several (e.g. `DeleteOptions`, shared by every
    /// group) have no single discriminant.
    pub fn single_group_version_kind(&self) -> Option<&GroupVersionKind> {
        match self.group_version_kind.as_slice() {
            [gvk] => Some(gvk),
            _ => None,
        }
    }
}

impl GroupVersionKind {
    /// The `apiVersion` string: `group/version`, or just `version` for the
    /// core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}
