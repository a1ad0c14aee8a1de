//! Intermediate representation of generated declaration modules.
//!
//! The assembler produces this IR; [`crate::output`] turns it into source
//! text.

use crate::classify::ModulePath;

/// One output module: its imports followed by its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub path: ModulePath,
    pub imports: Vec<Import>,
    /// Declarations in document order.
    pub declarations: Vec<Declaration>,
}

/// A grouped import of symbols from another module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// The module the symbols are declared in.
    pub from: ModulePath,
    /// Module specifier relative to the importing module, e.g. `../meta/v1`.
    pub specifier: String,
    /// Sorted, deduplicated symbol names.
    pub symbols: Vec<String>,
}

/// An exported declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `export interface Name { ... }`
    Interface {
        name: String,
        docs: Option<String>,
        fields: Vec<Field>,
    },
    /// `export type Name = T`
    Alias {
        name: String,
        docs: Option<String>,
        ty: TypeExpr,
    },
}

/// A field of an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as it appears in the schema.
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
    pub read_only: bool,
    pub docs: Option<String>,
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    String,
    Number,
    Boolean,
    Array(Box<TypeExpr>),
    /// String-keyed map.
    Map(Box<TypeExpr>),
    /// A declaration by name, in this module or imported.
    Ref(String),
    StringLiteral(String),
    Union(Vec<TypeExpr>),
}

impl Module {
    pub fn new(path: ModulePath) -> Self {
        Self {
            path,
            imports: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Look up a declaration by name.
    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Interface { name, .. } | Declaration::Alias { name, .. } => name,
        }
    }

    pub fn docs(&self) -> Option<&str> {
        match self {
            Declaration::Interface { docs, .. } | Declaration::Alias { docs, .. } => {
                docs.as_deref()
            }
        }
    }

    /// Fields of an interface; empty for aliases.
    pub fn fields(&self) -> &[Field] {
        match self {
            Declaration::Interface { fields, .. } => fields,
            Declaration::Alias { .. } => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl TypeExpr {
    pub fn array(items: TypeExpr) -> Self {
        TypeExpr::Array(Box::new(items))
    }

    pub fn map(values: TypeExpr) -> Self {
        TypeExpr::Map(Box::new(values))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        TypeExpr::StringLiteral(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_declarations_and_fields() {
        let mut module = Module::new(ModulePath::new("core/v1"));
        module.declarations.push(Declaration::Interface {
            name: "Pod".into(),
            docs: Some("Pod is a collection of containers.".into()),
            fields: vec![Field {
                name: "kind".into(),
                ty: TypeExpr::literal("Pod"),
                optional: true,
                read_only: false,
                docs: None,
            }],
        });
        module.declarations.push(Declaration::Alias {
            name: "Protocol".into(),
            docs: None,
            ty: TypeExpr::String,
        });

        let pod = module.declaration("Pod").unwrap();
        assert_eq!(pod.docs(), Some("Pod is a collection of containers."));
        assert_eq!(pod.field("kind").unwrap().ty, TypeExpr::literal("Pod"));
        assert!(module.declaration("Protocol").unwrap().fields().is_empty());
        assert!(module.declaration("Node").is_none());
    }
}
