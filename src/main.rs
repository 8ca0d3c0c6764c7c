use anyhow::Result;
use docgen_cli::config;
use docgen_cli::config::diagnostics::{ConsoleSink, SilentSink};
use docgen_cli::config::options::{OptionScope, Options};
use log::debug;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = config::default_options(args)?;

    // Discovery pass: locate config files and find requested extensions
    // without reporting anything yet.
    options.read(&SilentSink);
    let plugins = options.get_list("plugins").unwrap_or_default();
    if !plugins.is_empty() {
        // Extension loading would register further declarations and readers
        // here, between the two passes.
        debug!("extensions requested: {}", plugins.join(", "));
    }

    // Final pass: recompute effective values from scratch with real
    // diagnostics, now that every declaration and reader is in place.
    options.reset();
    let sink = ConsoleSink::new();
    options.read(&sink);

    if options.get_bool("help").unwrap_or(false) {
        print_help(&options);
        return Ok(());
    }
    if options.get_bool("version").unwrap_or(false) {
        println!("docgen-cli {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if sink.error_count() > 0 {
        anyhow::bail!("configuration failed with {} error(s)", sink.error_count());
    }

    print_effective(&options)?;
    Ok(())
}

fn print_help(options: &Options) {
    println!("Usage: docgen-cli [options] [entry points...]\n");
    for (title, scope) in [
        ("Options:", OptionScope::Tool),
        ("Compiler passthrough options:", OptionScope::Compiler),
    ] {
        println!("{title}");
        for decl in options.declarations_by_scope(scope) {
            let short = decl
                .short
                .as_ref()
                .map(|s| format!("-{s}, "))
                .unwrap_or_default();
            println!("  {short}--{:<24} {}", decl.name, decl.help);
        }
        println!();
    }
}

/// Dump the resolved configuration, both scopes, as JSON
fn print_effective(options: &Options) -> Result<()> {
    let mut effective = serde_json::Map::new();
    for (section, scope) in [("tool", OptionScope::Tool), ("compiler", OptionScope::Compiler)] {
        let mut values = serde_json::Map::new();
        for decl in options.declarations_by_scope(scope) {
            let value = match scope {
                OptionScope::Tool => options.try_get_value(&decl.name),
                OptionScope::Compiler => options.try_get_compiler_value(&decl.name),
            };
            if let Ok(value) = value {
                values.insert(decl.name.clone(), value.to_json());
            }
        }
        effective.insert(section.to_string(), serde_json::Value::Object(values));
    }
    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(())
}
