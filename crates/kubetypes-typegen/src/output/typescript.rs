//! TypeScript declaration output.

use crate::ir::{Declaration, Field, Import, Module, TypeExpr};

/// File extension of generated modules.
pub const EXTENSION: &str = "d.ts";

const INDENT: &str = "    ";

/// Output path of a module relative to the package root.
pub fn file_path(module: &Module) -> String {
    module.path.file_name(EXTENSION)
}

/// Render a module: imports first, then declarations in order.
pub fn render_module(module: &Module) -> String {
    let mut out = String::new();

    for import in &module.imports {
        render_import(&mut out, import);
    }
    if !module.imports.is_empty() && !module.declarations.is_empty() {
        out.push('\n');
    }

    for (i, declaration) in module.declarations.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_declaration(&mut out, declaration);
    }

    out
}

fn render_import(out: &mut String, import: &Import) {
    out.push_str(&format!(
        "import {{ {} }} from {};\n",
        import.symbols.join(", "),
        string_literal(&import.specifier)
    ));
}

fn render_declaration(out: &mut String, declaration: &Declaration) {
    if let Some(docs) = declaration.docs() {
        render_docs(out, docs, "");
    }

    match declaration {
        Declaration::Interface { name, fields, .. } if fields.is_empty() => {
            out.push_str(&format!("export interface {} {{}}\n", name));
        }
        Declaration::Interface { name, fields, .. } => {
            out.push_str(&format!("export interface {} {{\n", name));
            for field in fields {
                render_field(out, field);
            }
            out.push_str("}\n");
        }
        Declaration::Alias { name, ty, .. } => {
            out.push_str(&format!("export type {} = {};\n", name, render_type(ty)));
        }
    }
}

fn render_field(out: &mut String, field: &Field) {
    if let Some(docs) = &field.docs {
        render_docs(out, docs, INDENT);
    }
    out.push_str(&format!(
        "{}{}{}{}: {};\n",
        INDENT,
        if field.read_only { "readonly " } else { "" },
        property_name(&field.name),
        if field.optional { "?" } else { "" },
        render_type(&field.ty)
    ));
}

/// JSDoc block. A `*/` inside the text would end the comment early.
fn render_docs(out: &mut String, docs: &str, indent: &str) {
    out.push_str(indent);
    out.push_str("/**\n");
    for line in docs.replace("*/", "*\\/").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(&format!("{} *\n", indent));
        } else {
            out.push_str(&format!("{} * {}\n", indent, line));
        }
    }
    out.push_str(indent);
    out.push_str(" */\n");
}

/// Render a type expression.
pub fn render_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::String => "string".into(),
        TypeExpr::Number => "number".into(),
        TypeExpr::Boolean => "boolean".into(),
        TypeExpr::Array(items) => format!("Array<{}>", render_type(items)),
        TypeExpr::Map(values) => format!("{{[name: string]: {}}}", render_type(values)),
        TypeExpr::Ref(name) => name.clone(),
        TypeExpr::StringLiteral(value) => string_literal(value),
        TypeExpr::Union(types) => types
            .iter()
            .map(render_type)
            .collect::<Vec<_>>()
            .join(" | "),
    }
}

/// JSON string escaping is valid TypeScript string literal syntax.
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        string_literal(name)
    }
}
