//! Input format parsers.
//!
//! The Kubernetes API is described by a Swagger 2.0 document; only the
//! `info` and `definitions` sections are read.

mod openapi;

pub use openapi::{
    Definition, GroupVersionKind, Info, Property, ScalarKind, SchemaDocument, Value,
};
