//! Error type shared by the options engine
//!
//! Every expected, data-driven failure in the options system is reported through
//! `Result<T, OptionError>` so callers handle the failure path explicitly. Panics
//! are reserved for wiring defects (querying an undeclared option through the
//! direct accessor, shipping an invalid default).

use super::options::OptionScope;

/// Failure variants for fallible option operations
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    /// The name has no registered declaration
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// The option exists but belongs to the other value scope
    #[error("option '{name}' is {scope}-scoped; read it through the {scope} accessor")]
    WrongScope { name: String, scope: OptionScope },

    /// A raw value has the wrong shape for the declared kind
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// A string value could not be parsed into the declared kind
    #[error("cannot parse '{raw}' as {expected}")]
    Parse { raw: String, expected: &'static str },

    /// A well-typed value violates the declaration's constraints
    #[error("{0}")]
    Constraint(String),

    /// A declaration builder was finished without a required field
    #[error("declaration is missing required field '{0}'")]
    MissingField(&'static str),
}
