//! Output backends for generated modules.
//!
//! Takes assembled [`Module`](crate::ir::Module)s and produces source text.

pub mod typescript;

pub use typescript::{EXTENSION, file_path, render_module, render_type};
