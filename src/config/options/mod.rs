//! Options system for layered, type-safe configuration
//!
//! The options system provides:
//! - A declaration registry with case-insensitive lookup and short aliases
//! - Type-safe storage with per-kind validation and conversion
//! - Two separate value scopes: tool options and compiler passthrough options
//! - A priority-ordered reader pipeline merging sources last-write-wins
//! - Self-describing metadata for help output

pub mod builder;
pub mod registrations;
pub mod registry;
pub mod store;
pub mod types;

pub use builder::OptionDeclBuilder;
pub use registry::OptionsRegistry;
pub use store::{BoundOption, Options};
pub use types::{OptionDeclaration, OptionKind, OptionScope, OptionValue};
