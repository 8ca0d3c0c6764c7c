//! Core types for the options system

use crate::config::error::OptionError;
use std::fmt;

/// A strongly-typed option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<String>),
    Mixed(serde_json::Value),
}

impl OptionValue {
    /// Short name of the value's shape, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Number(_) => "number",
            OptionValue::String(_) => "string",
            OptionValue::List(_) => "list",
            OptionValue::Mixed(_) => "mixed",
        }
    }

    /// Get as bool, returning an error if the value has another shape
    pub fn as_bool(&self) -> Result<bool, OptionError> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            other => Err(OptionError::TypeMismatch {
                expected: "boolean",
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Get as number, returning an error if the value has another shape
    pub fn as_number(&self) -> Result<f64, OptionError> {
        match self {
            OptionValue::Number(v) => Ok(*v),
            other => Err(OptionError::TypeMismatch {
                expected: "number",
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Get as string, returning an error if the value has another shape
    pub fn as_string(&self) -> Result<String, OptionError> {
        match self {
            OptionValue::String(v) => Ok(v.clone()),
            other => Err(OptionError::TypeMismatch {
                expected: "string",
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Get as list of strings, returning an error if the value has another shape
    pub fn as_list(&self) -> Result<Vec<String>, OptionError> {
        match self {
            OptionValue::List(v) => Ok(v.clone()),
            other => Err(OptionError::TypeMismatch {
                expected: "list",
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Render the value as JSON, used for the Mixed kind and config dumps
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OptionValue::Bool(v) => serde_json::Value::Bool(*v),
            OptionValue::Number(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            OptionValue::String(v) => serde_json::Value::String(v.clone()),
            OptionValue::List(v) => serde_json::Value::Array(
                v.iter()
                    .map(|item| serde_json::Value::String(item.clone()))
                    .collect(),
            ),
            OptionValue::Mixed(v) => v.clone(),
        }
    }
}

/// Which of the two value bags an option belongs to
///
/// Tool options are consumed by docgen itself through the primary accessors.
/// Compiler options are forwarded unmodified to the embedded compiler frontend
/// and are read through the dedicated compiler accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionScope {
    #[default]
    Tool,
    Compiler,
}

impl fmt::Display for OptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionScope::Tool => write!(f, "tool"),
            OptionScope::Compiler => write!(f, "compiler"),
        }
    }
}

/// Kind of an option, carrying its validate-and-convert rule
///
/// Raw values arrive from readers as whatever shape the source produced (argv
/// tokens are strings, TOML files carry typed values). `convert` coerces the raw
/// value into the declared shape or reports why it cannot.
#[derive(Debug, Clone)]
pub enum OptionKind {
    /// Boolean switch; accepts a bool or the strings "true"/"false"
    Flag,
    /// Numeric value with optional inclusive bounds; accepts a number or a
    /// parseable string
    Number { min: Option<f64>, max: Option<f64> },
    /// Free string; numbers are stringified
    String,
    /// One of a fixed set of variants, matched case-insensitively and stored
    /// with the declared spelling
    Enum { variants: Vec<String> },
    /// List of strings; a single string becomes a one-element list
    List,
    /// Schemaless value kept as JSON
    Mixed,
}

impl OptionKind {
    /// Validate a raw value against this kind and convert it to its stored shape
    pub fn convert(&self, raw: OptionValue) -> Result<OptionValue, OptionError> {
        match self {
            OptionKind::Flag => match raw {
                OptionValue::Bool(v) => Ok(OptionValue::Bool(v)),
                OptionValue::String(s) => {
                    if s.eq_ignore_ascii_case("true") {
                        Ok(OptionValue::Bool(true))
                    } else if s.eq_ignore_ascii_case("false") {
                        Ok(OptionValue::Bool(false))
                    } else {
                        Err(OptionError::Parse {
                            raw: s,
                            expected: "boolean",
                        })
                    }
                }
                other => Err(OptionError::TypeMismatch {
                    expected: "boolean",
                    actual: other.type_name().to_string(),
                }),
            },
            OptionKind::Number { min, max } => {
                let value = match raw {
                    OptionValue::Number(v) => v,
                    OptionValue::String(s) => {
                        s.trim().parse::<f64>().map_err(|_| OptionError::Parse {
                            raw: s,
                            expected: "number",
                        })?
                    }
                    other => {
                        return Err(OptionError::TypeMismatch {
                            expected: "number",
                            actual: other.type_name().to_string(),
                        });
                    }
                };
                if let Some(min) = min {
                    if value < *min {
                        return Err(OptionError::Constraint(format!(
                            "value {value} is below minimum {min}"
                        )));
                    }
                }
                if let Some(max) = max {
                    if value > *max {
                        return Err(OptionError::Constraint(format!(
                            "value {value} is above maximum {max}"
                        )));
                    }
                }
                Ok(OptionValue::Number(value))
            }
            OptionKind::String => match raw {
                OptionValue::String(s) => Ok(OptionValue::String(s)),
                OptionValue::Number(v) => Ok(OptionValue::String(v.to_string())),
                other => Err(OptionError::TypeMismatch {
                    expected: "string",
                    actual: other.type_name().to_string(),
                }),
            },
            OptionKind::Enum { variants } => match raw {
                OptionValue::String(s) => variants
                    .iter()
                    .find(|variant| variant.eq_ignore_ascii_case(&s))
                    .map(|variant| OptionValue::String(variant.clone()))
                    .ok_or_else(|| {
                        OptionError::Constraint(format!(
                            "'{}' is not a valid value; expected one of: {}",
                            s,
                            variants.join(", ")
                        ))
                    }),
                other => Err(OptionError::TypeMismatch {
                    expected: "string",
                    actual: other.type_name().to_string(),
                }),
            },
            OptionKind::List => match raw {
                OptionValue::List(items) => Ok(OptionValue::List(items)),
                OptionValue::String(s) => Ok(OptionValue::List(vec![s])),
                other => Err(OptionError::TypeMismatch {
                    expected: "list",
                    actual: other.type_name().to_string(),
                }),
            },
            OptionKind::Mixed => Ok(OptionValue::Mixed(raw.to_json())),
        }
    }
}

/// Complete declaration of one option
///
/// `name` keeps its display casing; registry lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct OptionDeclaration {
    /// Canonical name (e.g. "entryPoints")
    pub name: String,

    /// Optional single-dash short alias (e.g. "o")
    pub short: Option<String>,

    /// Help text shown in `--help` output
    pub help: String,

    /// Value bag this option belongs to
    pub scope: OptionScope,

    /// Kind with its validation/conversion rule
    pub kind: OptionKind,

    /// Default value; must pass the kind's own conversion
    pub default: OptionValue,
}

impl OptionDeclaration {
    /// Validate and convert a raw value for this option
    pub fn convert(&self, raw: OptionValue) -> Result<OptionValue, OptionError> {
        self.kind.convert(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_conversion() {
        let kind = OptionKind::Flag;
        assert_eq!(
            kind.convert(OptionValue::Bool(true)).unwrap(),
            OptionValue::Bool(true)
        );
        assert_eq!(
            kind.convert(OptionValue::String("TRUE".to_string())).unwrap(),
            OptionValue::Bool(true)
        );
        assert_eq!(
            kind.convert(OptionValue::String("false".to_string())).unwrap(),
            OptionValue::Bool(false)
        );
        assert!(matches!(
            kind.convert(OptionValue::String("yes".to_string())),
            Err(OptionError::Parse { .. })
        ));
        assert!(matches!(
            kind.convert(OptionValue::Number(1.0)),
            Err(OptionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_number_conversion_and_bounds() {
        let kind = OptionKind::Number {
            min: Some(1.0),
            max: Some(10.0),
        };
        assert_eq!(
            kind.convert(OptionValue::Number(5.0)).unwrap(),
            OptionValue::Number(5.0)
        );
        assert_eq!(
            kind.convert(OptionValue::String("7".to_string())).unwrap(),
            OptionValue::Number(7.0)
        );
        assert!(matches!(
            kind.convert(OptionValue::Number(0.0)),
            Err(OptionError::Constraint(_))
        ));
        assert!(matches!(
            kind.convert(OptionValue::Number(11.0)),
            Err(OptionError::Constraint(_))
        ));
        assert!(matches!(
            kind.convert(OptionValue::String("seven".to_string())),
            Err(OptionError::Parse { .. })
        ));
    }

    #[test]
    fn test_enum_conversion_is_case_insensitive_and_canonicalizing() {
        let kind = OptionKind::Enum {
            variants: vec!["Default".to_string(), "Minimal".to_string()],
        };
        assert_eq!(
            kind.convert(OptionValue::String("minimal".to_string())).unwrap(),
            OptionValue::String("Minimal".to_string())
        );
        assert!(matches!(
            kind.convert(OptionValue::String("fancy".to_string())),
            Err(OptionError::Constraint(_))
        ));
    }

    #[test]
    fn test_list_wraps_single_string() {
        let kind = OptionKind::List;
        assert_eq!(
            kind.convert(OptionValue::String("src/lib.rs".to_string())).unwrap(),
            OptionValue::List(vec!["src/lib.rs".to_string()])
        );
        assert!(matches!(
            kind.convert(OptionValue::Bool(true)),
            Err(OptionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_mixed_accepts_anything_as_json() {
        let kind = OptionKind::Mixed;
        assert_eq!(
            kind.convert(OptionValue::Bool(true)).unwrap(),
            OptionValue::Mixed(serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(OptionValue::Bool(true).as_bool().unwrap(), true);
        assert!(OptionValue::Number(1.0).as_bool().is_err());
        assert_eq!(OptionValue::Number(2.5).as_number().unwrap(), 2.5);
        assert_eq!(
            OptionValue::String("x".to_string()).as_string().unwrap(),
            "x"
        );
        assert_eq!(
            OptionValue::List(vec!["a".to_string()]).as_list().unwrap(),
            vec!["a".to_string()]
        );
    }
}
