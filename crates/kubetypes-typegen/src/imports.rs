//! Per-module import bookkeeping.

use crate::classify::ModulePath;
use crate::ir::Import;
use std::collections::{BTreeMap, BTreeSet};

/// Collects the symbols one module needs from other modules.
///
/// Both maps are ordered, so [`ImportTracker::flush`] yields the same list no
/// matter in which order definitions were processed.
#[derive(Debug, Clone)]
pub struct ImportTracker {
    owner: ModulePath,
    imports: BTreeMap<ModulePath, BTreeSet<String>>,
}

impl ImportTracker {
    pub fn new(owner: ModulePath) -> Self {
        Self {
            owner,
            imports: BTreeMap::new(),
        }
    }

    /// The module this tracker belongs to.
    pub fn owner(&self) -> &ModulePath {
        &self.owner
    }

    /// Record that the owning module uses `symbol` from `target`.
    ///
    /// Symbols from the owning module itself are never recorded.
    pub fn add(&mut self, target: &ModulePath, symbol: &str) -> &mut Self {
        if *target == self.owner {
            return self;
        }
        self.imports
            .entry(target.clone())
            .or_default()
            .insert(symbol.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// One import per target module, symbols sorted.
    pub fn flush(&self) -> Vec<Import> {
        self.imports
            .iter()
            .map(|(from, symbols)| Import {
                specifier: self.owner.relative_specifier(from),
                from: from.clone(),
                symbols: symbols.iter().cloned().collect(),
            })
            .collect()
    }
}
