//! The mutable options container readers and consumers interact with

use super::registry::{OptionsRegistry, normalize};
use super::types::{OptionDeclaration, OptionScope, OptionValue};
use crate::config::diagnostics::DiagnosticSink;
use crate::config::error::OptionError;
use crate::config::readers::OptionsReader;
use std::collections::HashMap;
use std::sync::Arc;

/// Options container composing the declaration registry, the two scoped value
/// bags, and the reader pipeline
///
/// One instance is created per run and passed by reference to every reader and
/// consumer. Declarations may be added before and, during the discovery pass,
/// after loading extensions. Tool-scoped values are read through the primary
/// accessors; compiler-scoped values are forwarded to the embedded compiler
/// frontend and read through the dedicated compiler accessors. All access is
/// single-threaded; one orchestrating call path drives mutation during a pass.
#[derive(Default)]
pub struct Options {
    registry: OptionsRegistry,
    tool_values: HashMap<String, OptionValue>,
    compiler_values: HashMap<String, OptionValue>,
    readers: Vec<Arc<dyn OptionsReader>>,
}

impl Options {
    /// Create a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the declaration registry
    pub fn registry(&self) -> &OptionsRegistry {
        &self.registry
    }

    /// Register a declaration under its canonical name and short alias
    ///
    /// A key already held by a *different* declaration is left untouched and a
    /// single conflict diagnostic is emitted; re-registering the identical
    /// declaration is a harmless no-op. When at least one key registered fresh,
    /// the declaration's default is validated, and stored for Tool-scoped
    /// declarations.
    ///
    /// # Panics
    ///
    /// Panics if the declaration's own default fails its validation, since a
    /// shipped invalid default is a defect no runtime recovery is meaningful for.
    pub fn add_declaration(&mut self, decl: Arc<OptionDeclaration>, sink: &dyn DiagnosticSink) {
        let result = self.registry.add(&decl);

        if !result.conflicts.is_empty() {
            sink.error(&format!(
                "option '{}' conflicts with an existing declaration under: {}",
                decl.name,
                result.conflicts.join(", ")
            ));
        }

        if result.added {
            let converted = decl.convert(decl.default.clone()).unwrap_or_else(|e| {
                panic!("default value for option '{}' is invalid: {e}", decl.name)
            });
            if decl.scope == OptionScope::Tool {
                self.tool_values.insert(normalize(&decl.name), converted);
            }
        }
    }

    /// Register several declarations, in order, each independently
    pub fn add_declarations(
        &mut self,
        decls: impl IntoIterator<Item = Arc<OptionDeclaration>>,
        sink: &dyn DiagnosticSink,
    ) {
        for decl in decls {
            self.add_declaration(decl, sink);
        }
    }

    /// Remove a declaration and its stored value; no-op if the name is unknown
    pub fn remove_declaration_by_name(&mut self, name: &str) {
        if let Some(decl) = self.registry.remove(name) {
            let key = normalize(&decl.name);
            match decl.scope {
                OptionScope::Tool => self.tool_values.remove(&key),
                OptionScope::Compiler => self.compiler_values.remove(&key),
            };
        }
    }

    /// Look up a declaration by name or short alias, case-insensitively
    pub fn get_declaration(&self, name: &str) -> Option<Arc<OptionDeclaration>> {
        self.registry.get(name)
    }

    /// List declarations in a scope, sorted by name
    pub fn declarations_by_scope(&self, scope: OptionScope) -> Vec<Arc<OptionDeclaration>> {
        self.registry.by_scope(scope)
    }

    /// Reinitialize every Tool-scoped value from its declared default and
    /// discard all compiler-scoped values
    pub fn reset(&mut self) {
        self.tool_values.clear();
        self.compiler_values.clear();
        for decl in self.registry.by_scope(OptionScope::Tool) {
            // Defaults were validated at registration; a failure here means the
            // declaration was mutated behind the registry's back.
            let converted = decl.convert(decl.default.clone()).unwrap_or_else(|e| {
                panic!("default value for option '{}' is invalid: {e}", decl.name)
            });
            self.tool_values.insert(normalize(&decl.name), converted);
        }
        log::debug!("options reset to declared defaults");
    }

    /// Get the effective value of a Tool-scoped option
    ///
    /// # Panics
    ///
    /// Panics if the name is not declared or the declaration is
    /// compiler-scoped; both indicate incorrect wiring, not user input. Use
    /// [`Options::try_get_value`] for the recoverable variant.
    pub fn get_value(&self, name: &str) -> OptionValue {
        match self.try_get_value(name) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Get the effective value of a Tool-scoped option without panicking
    pub fn try_get_value(&self, name: &str) -> Result<OptionValue, OptionError> {
        let decl = self
            .registry
            .get(name)
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))?;
        if decl.scope == OptionScope::Compiler {
            return Err(OptionError::WrongScope {
                name: decl.name.clone(),
                scope: OptionScope::Compiler,
            });
        }
        Ok(self.stored_or_default(&decl, &self.tool_values))
    }

    /// Get the effective value of a compiler-scoped (passthrough) option
    pub fn try_get_compiler_value(&self, name: &str) -> Result<OptionValue, OptionError> {
        let decl = self
            .registry
            .get(name)
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))?;
        if decl.scope == OptionScope::Tool {
            return Err(OptionError::WrongScope {
                name: decl.name.clone(),
                scope: OptionScope::Tool,
            });
        }
        Ok(self.stored_or_default(&decl, &self.compiler_values))
    }

    /// Get a Tool-scoped bool value
    pub fn get_bool(&self, name: &str) -> Result<bool, OptionError> {
        self.try_get_value(name)?.as_bool()
    }

    /// Get a Tool-scoped number value
    pub fn get_number(&self, name: &str) -> Result<f64, OptionError> {
        self.try_get_value(name)?.as_number()
    }

    /// Get a Tool-scoped string value
    pub fn get_string(&self, name: &str) -> Result<String, OptionError> {
        self.try_get_value(name)?.as_string()
    }

    /// Get a Tool-scoped list value
    pub fn get_list(&self, name: &str) -> Result<Vec<String>, OptionError> {
        self.try_get_value(name)?.as_list()
    }

    /// Validate, convert, and store a value in the bag matching the
    /// declaration's scope
    ///
    /// On failure the store is left unchanged for that key; other keys are
    /// never affected.
    pub fn set_value(&mut self, name: &str, value: OptionValue) -> Result<(), OptionError> {
        let decl = self
            .registry
            .get(name)
            .ok_or_else(|| OptionError::UnknownOption(name.to_string()))?;
        let converted = decl.convert(value)?;
        log::debug!("set option {} = {:?}", decl.name, converted);
        let key = normalize(&decl.name);
        match decl.scope {
            OptionScope::Tool => self.tool_values.insert(key, converted),
            OptionScope::Compiler => self.compiler_values.insert(key, converted),
        };
        Ok(())
    }

    /// Apply `set_value` per entry, continuing past individual failures
    ///
    /// Returns every failing key's error, in input order; keys that succeeded
    /// stay applied regardless of later failures.
    pub fn set_values(
        &mut self,
        values: impl IntoIterator<Item = (String, OptionValue)>,
    ) -> Vec<(String, OptionError)> {
        let mut failures = Vec::new();
        for (name, value) in values {
            if let Err(e) = self.set_value(&name, value) {
                failures.push((name, e));
            }
        }
        failures
    }

    /// Whether the current stored value equals the declaration's default
    ///
    /// Compares structurally; an absent entry (possible for compiler-scoped
    /// options, which `reset` clears) counts as default.
    ///
    /// # Panics
    ///
    /// Panics if the name is not declared.
    pub fn is_default(&self, name: &str) -> bool {
        let decl = self
            .registry
            .get(name)
            .unwrap_or_else(|| panic!("unknown option '{name}'"));
        let default = decl
            .convert(decl.default.clone())
            .unwrap_or_else(|_| decl.default.clone());
        let bag = match decl.scope {
            OptionScope::Tool => &self.tool_values,
            OptionScope::Compiler => &self.compiler_values,
        };
        match bag.get(&normalize(&decl.name)) {
            Some(value) => *value == default,
            None => true,
        }
    }

    /// Defensive copy of the Tool-scoped value bag, keyed by normalized name
    pub fn raw_values(&self) -> HashMap<String, OptionValue> {
        self.tool_values.clone()
    }

    /// Defensive copy of the compiler-scoped value bag, keyed by normalized name
    pub fn compiler_values(&self) -> HashMap<String, OptionValue> {
        self.compiler_values.clone()
    }

    /// Insert a reader, keeping the list in ascending-priority order
    ///
    /// Ties are broken by insertion order (stable sort semantics).
    pub fn add_reader(&mut self, reader: Arc<dyn OptionsReader>) {
        let position = self
            .readers
            .iter()
            .position(|existing| existing.priority() > reader.priority())
            .unwrap_or(self.readers.len());
        log::debug!(
            "added options reader '{}' (priority {})",
            reader.name(),
            reader.priority()
        );
        self.readers.insert(position, reader);
    }

    /// Remove every reader with an exact, case-sensitive name match
    pub fn remove_readers_by_name(&mut self, name: &str) {
        self.readers.retain(|reader| reader.name() != name);
    }

    /// Invoke every reader strictly in ascending-priority order
    ///
    /// Readers may mutate declarations and values on the container; such
    /// mutations are visible to all subsequently invoked readers in the same
    /// pass. A reader added during the pass first runs on the next pass. The
    /// conventional protocol runs this twice: once with a silent sink to
    /// discover configuration locations and load extensions, then again with
    /// the real sink to compute final effective values. Enforcing that
    /// protocol is the caller's responsibility.
    pub fn read(&mut self, sink: &dyn DiagnosticSink) {
        let pass: Vec<Arc<dyn OptionsReader>> = self.readers.clone();
        for reader in pass {
            log::debug!(
                "running options reader '{}' (priority {})",
                reader.name(),
                reader.priority()
            );
            reader.read(self, sink);
        }
    }

    fn stored_or_default(
        &self,
        decl: &OptionDeclaration,
        bag: &HashMap<String, OptionValue>,
    ) -> OptionValue {
        bag.get(&normalize(&decl.name))
            .cloned()
            .unwrap_or_else(|| {
                decl.convert(decl.default.clone())
                    .unwrap_or_else(|_| decl.default.clone())
            })
    }
}

/// Read-only accessor bound to a single option name
///
/// Trivial glue over [`Options::get_value`]; carries no state beyond the name.
pub struct BoundOption {
    name: String,
}

impl BoundOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Current effective value of the bound option
    ///
    /// # Panics
    ///
    /// Panics if the bound name is not declared, as [`Options::get_value`] does.
    pub fn value(&self, options: &Options) -> OptionValue {
        options.get_value(&self.name)
    }
}
