//! Layered configuration for docgen-cli
//!
//! Settings are merged from the command line, config files, and built-in
//! defaults into one typed, validated set of values, with extensions free to
//! add their own option declarations at load time. The module provides:
//! - The declaration registry and two-scope value store ([`options`])
//! - The priority-ordered reader pipeline and concrete sources ([`readers`])
//! - Diagnostic sinks for non-fatal reporting ([`diagnostics`])
//!
//! The conventional protocol runs the pipeline twice: a discovery pass with a
//! silent sink to locate config files and load extensions, then a reset and a
//! final pass with the real sink to compute effective values.

pub mod diagnostics;
pub mod error;
pub mod options;
pub mod readers;

pub use diagnostics::{ConsoleSink, DiagnosticSink, MemorySink, SilentSink};
pub use error::OptionError;
pub use options::{OptionDeclBuilder, OptionDeclaration, OptionScope, OptionValue, Options};
pub use readers::OptionsReader;

use anyhow::Result;
use readers::{ArgumentsReader, CompilerConfigReader, ConfigFileReader};
use std::sync::Arc;

/// Build a container with the built-in declarations and the standard reader
/// stack
///
/// The arguments reader is installed twice: at priority 0 so `--options` and
/// `--compilerConfig` paths are visible to the file readers within the same
/// pass, and at priority 300 so command-line values override every file source.
pub fn default_options(args: Vec<String>) -> Result<Options> {
    let mut options = Options::new();
    let sink = ConsoleSink::new();
    options::registrations::register_all(&mut options, &sink)?;

    options.add_reader(Arc::new(ArgumentsReader::new(0, args.clone())));
    options.add_reader(Arc::new(ConfigFileReader::new(100)));
    options.add_reader(Arc::new(CompilerConfigReader::new(200)));
    options.add_reader(Arc::new(ArgumentsReader::new(300, args)));

    Ok(options)
}
