//! General housekeeping options

use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{OptionDeclBuilder, Options};
use anyhow::Result;

/// Register the housekeeping options
pub fn register(options: &mut Options, sink: &dyn DiagnosticSink) -> Result<()> {
    options.add_declaration(
        OptionDeclBuilder::new("help")
            .short("h")
            .help("Print option help and exit")
            .flag_type(false)
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("version")
            .short("v")
            .help("Print the version and exit")
            .flag_type(false)
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("options")
            .help("Path to the docgen.toml options file")
            .string_type("")
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("compilerConfig")
            .help("Path to the embedded compiler's compiler.json")
            .string_type("")
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("plugins")
            .help("Extensions to load before the final read pass")
            .list_type(vec![])
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("logLevel")
            .help("Minimum severity of docgen's own log output")
            .enum_type(vec!["error", "warn", "info", "debug"], "info")
            .build()?,
        sink,
    );

    log::debug!("registered general options");
    Ok(())
}
