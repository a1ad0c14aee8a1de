//! TypeScript declaration generation from the Kubernetes OpenAPI schema.
//!
//! `kubetypes-typegen` reads the Swagger 2.0 document published with every
//! Kubernetes release and partitions its definitions into TypeScript
//! declaration modules, one module per API group/version.
//!
//! # Architecture
//!
//! ```text
//! swagger.json        classify          synthesize            render
//! ─────────────    ─────────────     ────────────────     ──────────────
//! SchemaDocument ─> module path  ──> Declaration + ───> core/v1.d.ts
//! (input/openapi)   (classify.rs)    Import edges         (output/typescript)
//!                                    (synth.rs, imports.rs)
//! ```
//!
//! # Example
//!
//! ```
//! use kubetypes_typegen::{SchemaDocument, generate, output::render_module};
//!
//! let document = SchemaDocument::from_json(r#"{
//!     "info": { "title": "Kubernetes", "version": "v1.30.0" },
//!     "definitions": {
//!         "io.k8s.api.core.v1.PodSpec": {
//!             "description": "PodSpec is a description of a pod.",
//!             "properties": { "hostname": { "type": "string" } }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let modules = generate(&document).unwrap();
//! assert_eq!(modules[0].path.as_str(), "core/v1");
//! assert!(render_module(&modules[0]).contains("export interface PodSpec"));
//! ```

pub mod assemble;
pub mod classify;
pub mod error;
pub mod imports;
pub mod input;
pub mod ir;
pub mod output;
pub mod resolve;
pub mod synth;

pub use assemble::{ResolvedDefinition, definitions, generate};
pub use classify::{ClassifiedName, ModulePath, classify};
pub use error::GenerateError;
pub use imports::ImportTracker;
pub use input::{Definition, GroupVersionKind, Info, Property, ScalarKind, SchemaDocument, Value};
pub use ir::{Declaration, Field, Import, Module, TypeExpr};
pub use resolve::resolve;
pub use synth::TypeSynthesizer;
