//! Compiler passthrough options
//!
//! These are forwarded unmodified to the embedded compiler frontend; docgen
//! itself never interprets them.

use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{OptionDeclBuilder, OptionScope, Options};
use anyhow::Result;

/// Register the compiler-scoped options
pub fn register(options: &mut Options, sink: &dyn DiagnosticSink) -> Result<()> {
    options.add_declaration(
        OptionDeclBuilder::new("strict")
            .help("Enable the compiler's strict diagnostics")
            .scope(OptionScope::Compiler)
            .flag_type(true)
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("sourceRoot")
            .help("Root directory the compiler resolves sources against")
            .scope(OptionScope::Compiler)
            .string_type(".")
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("defines")
            .help("Conditional-compilation symbols passed to the compiler")
            .scope(OptionScope::Compiler)
            .list_type(vec![])
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("optimizationLevel")
            .help("Compiler optimization level (0-3)")
            .scope(OptionScope::Compiler)
            .number_type(0.0, Some(0.0), Some(3.0))
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("emitDebugInfo")
            .help("Ask the compiler to keep debug info in its analysis output")
            .scope(OptionScope::Compiler)
            .flag_type(false)
            .build()?,
        sink,
    );

    log::debug!("registered compiler passthrough options");
    Ok(())
}
