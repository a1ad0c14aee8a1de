//! Generate TypeScript types for the Kubernetes API.
//!
//! The declaration synthesis itself lives in [`kubetypes_typegen`]; this crate
//! loads the schema document, composes the package version and writes the
//! generated package to disk.

pub mod config;
pub mod materialize;
pub mod source;
pub mod version;

pub use config::KubetypesConfig;
