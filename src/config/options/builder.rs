//! Fluent builder API for creating option declarations

use super::types::{OptionDeclaration, OptionKind, OptionScope, OptionValue};
use crate::config::error::OptionError;
use std::sync::Arc;

/// Builder for creating option declarations with a fluent API
///
/// The kind setters fix the kind and its default together, so a finished
/// declaration always carries a default the kind can convert. `build` hands the
/// declaration out as an `Arc`, the form the registry shares it in.
pub struct OptionDeclBuilder {
    name: String,
    short: Option<String>,
    help: Option<String>,
    scope: OptionScope,
    kind: Option<OptionKind>,
    default: Option<OptionValue>,
}

impl OptionDeclBuilder {
    /// Create a new builder for an option with the given canonical name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            help: None,
            scope: OptionScope::Tool,
            kind: None,
            default: None,
        }
    }

    /// Set the single-dash short alias
    pub fn short(mut self, short: &str) -> Self {
        self.short = Some(short.to_string());
        self
    }

    /// Set the help text
    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Set the value scope; defaults to [`OptionScope::Tool`]
    pub fn scope(mut self, scope: OptionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Define as a boolean flag with default value
    pub fn flag_type(mut self, default: bool) -> Self {
        self.kind = Some(OptionKind::Flag);
        self.default = Some(OptionValue::Bool(default));
        self
    }

    /// Define as a number with default and optional inclusive bounds
    pub fn number_type(mut self, default: f64, min: Option<f64>, max: Option<f64>) -> Self {
        self.kind = Some(OptionKind::Number { min, max });
        self.default = Some(OptionValue::Number(default));
        self
    }

    /// Define as a string with default value
    pub fn string_type(mut self, default: &str) -> Self {
        self.kind = Some(OptionKind::String);
        self.default = Some(OptionValue::String(default.to_string()));
        self
    }

    /// Define as an enum with allowed variants and default value
    pub fn enum_type(mut self, variants: Vec<&str>, default: &str) -> Self {
        self.kind = Some(OptionKind::Enum {
            variants: variants.iter().map(|s| s.to_string()).collect(),
        });
        self.default = Some(OptionValue::String(default.to_string()));
        self
    }

    /// Define as a list of strings with default value
    pub fn list_type(mut self, default: Vec<&str>) -> Self {
        self.kind = Some(OptionKind::List);
        self.default = Some(OptionValue::List(
            default.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Define as a free-form value kept as JSON
    pub fn mixed_type(mut self, default: serde_json::Value) -> Self {
        self.kind = Some(OptionKind::Mixed);
        self.default = Some(OptionValue::Mixed(default));
        self
    }

    /// Build the declaration
    ///
    /// Returns an error if no kind setter was called.
    pub fn build(self) -> Result<Arc<OptionDeclaration>, OptionError> {
        let kind = self.kind.ok_or(OptionError::MissingField("kind"))?;
        let default = self.default.ok_or(OptionError::MissingField("default"))?;

        Ok(Arc::new(OptionDeclaration {
            name: self.name,
            short: self.short,
            help: self.help.unwrap_or_default(),
            scope: self.scope,
            kind,
            default,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_builder() {
        let decl = OptionDeclBuilder::new("excludePrivate")
            .help("Skip private items")
            .flag_type(true)
            .build()
            .unwrap();

        assert_eq!(decl.name, "excludePrivate");
        assert_eq!(decl.help, "Skip private items");
        assert_eq!(decl.scope, OptionScope::Tool);
        assert!(matches!(decl.kind, OptionKind::Flag));
        assert_eq!(decl.default, OptionValue::Bool(true));
    }

    #[test]
    fn test_number_builder_with_constraints() {
        let decl = OptionDeclBuilder::new("maxIssues")
            .help("Maximum reported issues")
            .number_type(100.0, Some(0.0), None)
            .build()
            .unwrap();

        assert_eq!(decl.default, OptionValue::Number(100.0));
        match &decl.kind {
            OptionKind::Number { min, max } => {
                assert_eq!(*min, Some(0.0));
                assert_eq!(*max, None);
            }
            _ => panic!("Expected Number kind"),
        }
    }

    #[test]
    fn test_enum_builder() {
        let decl = OptionDeclBuilder::new("theme")
            .enum_type(vec!["default", "minimal", "dark"], "default")
            .build()
            .unwrap();

        assert_eq!(decl.default, OptionValue::String("default".to_string()));
        match &decl.kind {
            OptionKind::Enum { variants } => {
                assert_eq!(variants.len(), 3);
                assert!(variants.contains(&"dark".to_string()));
            }
            _ => panic!("Expected Enum kind"),
        }
    }

    #[test]
    fn test_scope_and_short() {
        let decl = OptionDeclBuilder::new("strict")
            .short("s")
            .scope(OptionScope::Compiler)
            .flag_type(false)
            .build()
            .unwrap();

        assert_eq!(decl.short.as_deref(), Some("s"));
        assert_eq!(decl.scope, OptionScope::Compiler);
    }

    #[test]
    fn test_missing_kind() {
        let result = OptionDeclBuilder::new("broken").help("no kind set").build();
        assert!(matches!(result, Err(OptionError::MissingField("kind"))));
    }
}
