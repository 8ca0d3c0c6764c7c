//! Documentation output options

use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{OptionDeclBuilder, Options};
use anyhow::Result;

/// Register the output-related options
pub fn register(options: &mut Options, sink: &dyn DiagnosticSink) -> Result<()> {
    options.add_declaration(
        OptionDeclBuilder::new("out")
            .short("o")
            .help("Directory the generated documentation is written to")
            .string_type("./docs")
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("entryPoints")
            .help("Source files or directories documentation starts from")
            .list_type(vec![])
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("theme")
            .help("Rendering theme for the generated pages")
            .enum_type(vec!["default", "minimal", "dark"], "default")
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("excludePrivate")
            .help("Skip items with private visibility")
            .flag_type(true)
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("includeVersion")
            .help("Include the project version in page titles")
            .flag_type(false)
            .build()?,
        sink,
    );

    options.add_declaration(
        OptionDeclBuilder::new("maxIssues")
            .help("Stop reporting documentation issues after this many (0-10000)")
            .number_type(100.0, Some(0.0), Some(10000.0))
            .build()?,
        sink,
    );

    log::debug!("registered output options");
    Ok(())
}
