//! Case-insensitive registry of option declarations

use super::types::{OptionDeclaration, OptionScope};
use std::collections::HashMap;
use std::sync::Arc;

/// Normalized lookup key for an option name
pub(crate) fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Result of attempting to register a declaration
///
/// Registration is applied per key (canonical name plus short alias), so a
/// declaration can register partially: one key fresh, the other conflicting.
pub struct AddResult {
    /// At least one key was newly registered
    pub added: bool,
    /// Keys already held by a different declaration; those registrations were
    /// rejected and the prior declarations preserved
    pub conflicts: Vec<String>,
}

/// Registry mapping normalized names (and short aliases) to declarations
///
/// The original display casing lives in the declaration itself; every lookup
/// normalizes its key first, so `"Foo"`, `"FOO"` and `"foo"` resolve to the same
/// declaration. Declarations are shared as `Arc`s: re-registering the identical
/// `Arc` is a no-op, while a different declaration under an occupied key is a
/// conflict.
#[derive(Default)]
pub struct OptionsRegistry {
    declarations: HashMap<String, Arc<OptionDeclaration>>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration under its canonical name and short alias
    pub fn add(&mut self, decl: &Arc<OptionDeclaration>) -> AddResult {
        let mut result = AddResult {
            added: false,
            conflicts: Vec::new(),
        };

        let mut keys = vec![decl.name.clone()];
        if let Some(short) = &decl.short {
            keys.push(short.clone());
        }

        for key in keys {
            match self.declarations.get(&normalize(&key)) {
                Some(existing) if Arc::ptr_eq(existing, decl) => {}
                Some(_) => result.conflicts.push(key),
                None => {
                    self.declarations.insert(normalize(&key), decl.clone());
                    result.added = true;
                }
            }
        }

        if result.added {
            log::debug!("registered option: {}", decl.name);
        }
        result
    }

    /// Look up a declaration by name or short alias, case-insensitively
    pub fn get(&self, name: &str) -> Option<Arc<OptionDeclaration>> {
        self.declarations.get(&normalize(name)).cloned()
    }

    /// Check whether a name or short alias is registered
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(&normalize(name))
    }

    /// Remove a declaration, dropping both its canonical and short keys
    ///
    /// Returns the removed declaration, or `None` if the name is unknown.
    pub fn remove(&mut self, name: &str) -> Option<Arc<OptionDeclaration>> {
        let decl = self.get(name)?;
        self.declarations.remove(&normalize(&decl.name));
        if let Some(short) = &decl.short {
            self.declarations.remove(&normalize(short));
        }
        log::debug!("removed option: {}", decl.name);
        Some(decl)
    }

    /// List all declarations in a scope, sorted by name for consistent ordering
    pub fn by_scope(&self, scope: OptionScope) -> Vec<Arc<OptionDeclaration>> {
        let mut decls: Vec<_> = self
            .canonical_entries()
            .filter(|decl| decl.scope == scope)
            .cloned()
            .collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        decls
    }

    /// List every declaration once, sorted by name
    pub fn all(&self) -> Vec<Arc<OptionDeclaration>> {
        let mut decls: Vec<_> = self.canonical_entries().cloned().collect();
        decls.sort_by(|a, b| a.name.cmp(&b.name));
        decls
    }

    /// Number of registered declarations (aliases not counted separately)
    pub fn count(&self) -> usize {
        self.canonical_entries().count()
    }

    // A declaration can sit under two keys; listings must yield it once. The
    // canonical-name entry is authoritative; a short-alias entry also counts
    // when the canonical key was lost to a conflict.
    fn canonical_entries(&self) -> impl Iterator<Item = &Arc<OptionDeclaration>> {
        self.declarations.iter().filter_map(|(key, decl)| {
            let canonical = normalize(&decl.name);
            if *key == canonical {
                return Some(decl);
            }
            match self.declarations.get(&canonical) {
                Some(existing) if Arc::ptr_eq(existing, decl) => None,
                _ => Some(decl),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::types::{OptionKind, OptionValue};

    fn decl(name: &str, short: Option<&str>) -> Arc<OptionDeclaration> {
        Arc::new(OptionDeclaration {
            name: name.to_string(),
            short: short.map(str::to_string),
            help: String::new(),
            scope: OptionScope::Tool,
            kind: OptionKind::String,
            default: OptionValue::String(String::new()),
        })
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut registry = OptionsRegistry::new();
        let foo = decl("Foo", None);
        let result = registry.add(&foo);
        assert!(result.added);
        assert!(result.conflicts.is_empty());

        for query in ["FOO", "foo", "Foo"] {
            let found = registry.get(query).unwrap();
            assert!(Arc::ptr_eq(&found, &foo));
        }
    }

    #[test]
    fn test_short_alias_lookup() {
        let mut registry = OptionsRegistry::new();
        let out = decl("out", Some("o"));
        registry.add(&out);

        assert!(Arc::ptr_eq(&registry.get("o").unwrap(), &out));
        assert!(Arc::ptr_eq(&registry.get("O").unwrap(), &out));
    }

    #[test]
    fn test_reregistering_same_declaration_is_noop() {
        let mut registry = OptionsRegistry::new();
        let out = decl("out", Some("o"));
        registry.add(&out);

        let result = registry.add(&out);
        assert!(!result.added);
        assert!(result.conflicts.is_empty());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_conflicting_declaration_is_rejected() {
        let mut registry = OptionsRegistry::new();
        let original = decl("theme", None);
        let imposter = decl("Theme", None);
        registry.add(&original);

        let result = registry.add(&imposter);
        assert!(!result.added);
        assert_eq!(result.conflicts, vec!["Theme".to_string()]);
        assert!(Arc::ptr_eq(&registry.get("theme").unwrap(), &original));
    }

    #[test]
    fn test_partial_registration_on_short_conflict() {
        let mut registry = OptionsRegistry::new();
        let out = decl("out", Some("o"));
        let other = decl("outline", Some("o"));
        registry.add(&out);

        let result = registry.add(&other);
        assert!(result.added);
        assert_eq!(result.conflicts, vec!["o".to_string()]);
        assert!(Arc::ptr_eq(&registry.get("outline").unwrap(), &other));
        assert!(Arc::ptr_eq(&registry.get("o").unwrap(), &out));
    }

    #[test]
    fn test_remove_drops_both_keys() {
        let mut registry = OptionsRegistry::new();
        registry.add(&decl("out", Some("o")));

        assert!(registry.remove("OUT").is_some());
        assert!(registry.get("out").is_none());
        assert!(registry.get("o").is_none());
        assert!(registry.remove("out").is_none());
    }

    #[test]
    fn test_by_scope() {
        let mut registry = OptionsRegistry::new();
        registry.add(&decl("out", None));
        registry.add(&Arc::new(OptionDeclaration {
            name: "strict".to_string(),
            short: None,
            help: String::new(),
            scope: OptionScope::Compiler,
            kind: OptionKind::Flag,
            default: OptionValue::Bool(true),
        }));
        registry.add(&decl("theme", None));

        let tool: Vec<_> = registry
            .by_scope(OptionScope::Tool)
            .iter()
            .map(|d| d.name.clone())
            .collect();
        assert_eq!(tool, vec!["out", "theme"]);

        let compiler = registry.by_scope(OptionScope::Compiler);
        assert_eq!(compiler.len(), 1);
        assert_eq!(compiler[0].name, "strict");
    }
}
