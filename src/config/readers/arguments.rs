//! Argument-vector reader
//!
//! Parses the raw argument vector against the declaration registry instead of a
//! fixed grammar, so options added by extensions at load time parse like
//! built-ins. Installed twice in the standard stack: once at priority 0 so an
//! `--options` path is visible to the file readers, and once at priority 300 so
//! command-line values win over every file source.

use super::OptionsReader;
use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{OptionKind, Options, OptionValue};
use std::collections::HashMap;

/// Option receiving bare positional arguments
const ENTRY_POINTS: &str = "entryPoints";

pub struct ArgumentsReader {
    priority: i32,
    args: Vec<String>,
}

impl ArgumentsReader {
    /// Create a reader over an argument vector (without the program name)
    pub fn new(priority: i32, args: Vec<String>) -> Self {
        Self { priority, args }
    }
}

impl OptionsReader for ArgumentsReader {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn name(&self) -> &str {
        "arguments"
    }

    fn read(&self, options: &mut Options, sink: &dyn DiagnosticSink) {
        // List options accumulate across repeated occurrences within one pass,
        // replacing the declared default on the first occurrence.
        let mut lists: HashMap<String, Vec<String>> = HashMap::new();
        let mut only_positionals = false;

        let mut iter = self.args.iter().peekable();
        while let Some(token) = iter.next() {
            if !only_positionals && token == "--" {
                only_positionals = true;
                continue;
            }

            let option_text = if only_positionals {
                None
            } else if let Some(rest) = token.strip_prefix("--") {
                Some(rest)
            } else if token.len() > 1
                && token.starts_with('-')
                && !token.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
            {
                Some(&token[1..])
            } else {
                None
            };

            let Some(option_text) = option_text else {
                push_list_item(options, sink, &mut lists, ENTRY_POINTS, token, || {
                    format!("unexpected argument '{token}'")
                });
                continue;
            };

            let (name, inline) = match option_text.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (option_text, None),
            };

            let Some(decl) = options.get_declaration(name) else {
                sink.error(&format!("unknown option '{token}'"));
                continue;
            };

            let value = match decl.kind {
                // A bare flag means true; an explicit true/false token is
                // consumed when present.
                OptionKind::Flag => inline.unwrap_or_else(|| {
                    match iter.peek() {
                        Some(next)
                            if next.eq_ignore_ascii_case("true")
                                || next.eq_ignore_ascii_case("false") =>
                        {
                            iter.next().unwrap().clone()
                        }
                        _ => "true".to_string(),
                    }
                }),
                _ => match inline.or_else(|| iter.next().cloned()) {
                    Some(value) => value,
                    None => {
                        sink.error(&format!("option '{token}' expects a value"));
                        continue;
                    }
                },
            };

            if matches!(decl.kind, OptionKind::List) {
                push_list_item(options, sink, &mut lists, &decl.name, &value, || {
                    format!("invalid value for '{token}'")
                });
            } else if let Err(e) = options.set_value(&decl.name, OptionValue::String(value)) {
                sink.error(&format!("invalid value for '{token}': {e}"));
            }
        }
    }
}

fn push_list_item(
    options: &mut Options,
    sink: &dyn DiagnosticSink,
    lists: &mut HashMap<String, Vec<String>>,
    name: &str,
    item: &str,
    describe: impl FnOnce() -> String,
) {
    if options.get_declaration(name).is_none() {
        sink.warning(&describe());
        return;
    }
    let items = lists.entry(name.to_string()).or_default();
    items.push(item.to_string());
    if let Err(e) = options.set_value(name, OptionValue::List(items.clone())) {
        sink.error(&format!("{}: {e}", describe()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::diagnostics::MemorySink;
    use crate::config::options::{OptionDeclBuilder, OptionScope};

    fn container() -> Options {
        let mut options = Options::new();
        let sink = MemorySink::new();
        options.add_declaration(
            OptionDeclBuilder::new("out").short("o").string_type("./docs").build().unwrap(),
            &sink,
        );
        options.add_declaration(
            OptionDeclBuilder::new("excludePrivate").flag_type(false).build().unwrap(),
            &sink,
        );
        options.add_declaration(
            OptionDeclBuilder::new("maxIssues")
                .number_type(100.0, Some(0.0), None)
                .build()
                .unwrap(),
            &sink,
        );
        options.add_declaration(
            OptionDeclBuilder::new(ENTRY_POINTS).list_type(vec!["src"]).build().unwrap(),
            &sink,
        );
        options.add_declaration(
            OptionDeclBuilder::new("strict")
                .scope(OptionScope::Compiler)
                .flag_type(true)
                .build()
                .unwrap(),
            &sink,
        );
        options
    }

    fn run(options: &mut Options, args: &[&str]) -> MemorySink {
        let sink = MemorySink::new();
        let reader = ArgumentsReader::new(300, args.iter().map(|s| s.to_string()).collect());
        reader.read(options, &sink);
        sink
    }

    #[test]
    fn test_long_and_inline_forms() {
        let mut options = container();
        let sink = run(&mut options, &["--out", "build", "--maxIssues=7"]);
        assert!(sink.messages().is_empty());
        assert_eq!(options.get_string("out").unwrap(), "build");
        assert_eq!(options.get_number("maxIssues").unwrap(), 7.0);
    }

    #[test]
    fn test_short_alias() {
        let mut options = container();
        run(&mut options, &["-o", "short-form"]);
        assert_eq!(options.get_string("out").unwrap(), "short-form");
    }

    #[test]
    fn test_flag_forms() {
        let mut options = container();
        run(&mut options, &["--excludePrivate"]);
        assert_eq!(options.get_bool("excludePrivate").unwrap(), true);

        let mut options = container();
        run(&mut options, &["--excludePrivate", "false"]);
        assert_eq!(options.get_bool("excludePrivate").unwrap(), false);

        // A following non-boolean token is not consumed by the flag.
        let mut options = container();
        run(&mut options, &["--excludePrivate", "src/extra"]);
        assert_eq!(options.get_bool("excludePrivate").unwrap(), true);
        assert_eq!(
            options.get_list(ENTRY_POINTS).unwrap(),
            vec!["src/extra".to_string()]
        );
    }

    #[test]
    fn test_repeated_list_option_accumulates() {
        let mut options = container();
        run(
            &mut options,
            &["--entryPoints", "src/lib.rs", "--entryPoints", "src/main.rs"],
        );
        assert_eq!(
            options.get_list(ENTRY_POINTS).unwrap(),
            vec!["src/lib.rs".to_string(), "src/main.rs".to_string()]
        );
    }

    #[test]
    fn test_positionals_replace_default_entry_points() {
        let mut options = container();
        run(&mut options, &["crates/core", "crates/cli"]);
        assert_eq!(
            options.get_list(ENTRY_POINTS).unwrap(),
            vec!["crates/core".to_string(), "crates/cli".to_string()]
        );
    }

    #[test]
    fn test_unknown_option_is_reported_and_skipped() {
        let mut options = container();
        let sink = run(&mut options, &["--nonsense", "--out", "build"]);
        assert_eq!(sink.error_count(), 1);
        assert!(sink.errors()[0].contains("--nonsense"));
        assert_eq!(options.get_string("out").unwrap(), "build");
    }

    #[test]
    fn test_invalid_value_is_reported_per_key() {
        let mut options = container();
        let sink = run(&mut options, &["--maxIssues", "-3", "--out", "build"]);
        assert_eq!(sink.error_count(), 1);
        assert_eq!(options.get_number("maxIssues").unwrap(), 100.0);
        assert_eq!(options.get_string("out").unwrap(), "build");
    }

    #[test]
    fn test_missing_value_is_reported() {
        let mut options = container();
        let sink = run(&mut options, &["--out"]);
        assert_eq!(sink.error_count(), 1);
        assert!(sink.errors()[0].contains("expects a value"));
    }

    #[test]
    fn test_compiler_scoped_option_from_argv() {
        let mut options = container();
        run(&mut options, &["--strict", "false"]);
        assert_eq!(
            options.try_get_compiler_value("strict").unwrap(),
            OptionValue::Bool(false)
        );
    }

    #[test]
    fn test_case_insensitive_option_names() {
        let mut options = container();
        run(&mut options, &["--OUT", "anywhere"]);
        assert_eq!(options.get_string("out").unwrap(), "anywhere");
    }
}
