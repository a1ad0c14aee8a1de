//! `$ref` resolution against the document's own definitions.

use crate::error::{GenerateError, Result};
use crate::input::{Definition, SchemaDocument};

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Resolve a `$ref` pointer to its canonical name and definition.
pub fn resolve<'a>(
    document: &'a SchemaDocument,
    reference: &str,
) -> Result<(&'a str, &'a Definition)> {
    let name = reference
        .strip_prefix(DEFINITIONS_PREFIX)
        .ok_or_else(|| GenerateError::InvalidReference {
            reference: reference.to_string(),
        })?;

    document
        .definitions
        .get_key_value(name)
        .map(|(name, definition)| (name.as_str(), definition))
        .ok_or_else(|| GenerateError::UnresolvedReference {
            name: name.to_string(),
            title: document.info.title.clone(),
            version: document.info.version.clone(),
        })
}
