//! Compiler config file reader
//!
//! The embedded compiler frontend keeps its own JSON config (`compiler.json`)
//! with an `"options"` object. This reader maps that object onto the
//! compiler-scoped declarations so the passthrough bag reflects the file
//! without docgen interpreting the settings itself.

use super::OptionsReader;
use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{Options, OptionValue};
use serde::Deserialize;
use std::path::PathBuf;

/// Default compiler config file name looked up in the working directory
const COMPILER_FILE_NAME: &str = "compiler.json";

#[derive(Deserialize)]
struct CompilerConfigFile {
    #[serde(default)]
    options: serde_json::Map<String, serde_json::Value>,
}

pub struct CompilerConfigReader {
    priority: i32,
}

impl CompilerConfigReader {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }

    fn resolve_path(&self, options: &Options, sink: &dyn DiagnosticSink) -> Option<PathBuf> {
        let requested = options.get_string("compilerConfig").unwrap_or_default();
        if !requested.is_empty() {
            let path = PathBuf::from(requested);
            if path.is_file() {
                return Some(path);
            }
            sink.error(&format!("compiler config not found: {}", path.display()));
            return None;
        }

        let fallback = PathBuf::from(COMPILER_FILE_NAME);
        fallback.is_file().then_some(fallback)
    }
}

impl OptionsReader for CompilerConfigReader {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn name(&self) -> &str {
        "compiler"
    }

    fn read(&self, options: &mut Options, sink: &dyn DiagnosticSink) {
        let Some(path) = self.resolve_path(options, sink) else {
            return;
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                sink.error(&format!("failed to read {}: {e}", path.display()));
                return;
            }
        };

        let file: CompilerConfigFile = match serde_json::from_str(&text) {
            Ok(file) => file,
            Err(e) => {
                sink.error(&format!("failed to parse {}: {e}", path.display()));
                return;
            }
        };

        log::debug!("loading compiler options from {}", path.display());
        for (key, value) in file.options {
            if options.get_declaration(&key).is_none() {
                sink.warning(&format!(
                    "unknown compiler option '{key}' in {}",
                    path.display()
                ));
                continue;
            }
            if let Err(e) = options.set_value(&key, json_to_value(value)) {
                sink.error(&format!(
                    "invalid value for '{key}' in {}: {e}",
                    path.display()
                ));
            }
        }
    }
}

/// Map a JSON value onto the raw shape the declaration's kind converts
fn json_to_value(value: serde_json::Value) -> OptionValue {
    match value {
        serde_json::Value::Bool(v) => OptionValue::Bool(v),
        serde_json::Value::Number(v) => OptionValue::Number(v.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(v) => OptionValue::String(v),
        serde_json::Value::Array(items)
            if items.iter().all(serde_json::Value::is_string) =>
        {
            OptionValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            )
        }
        other => OptionValue::Mixed(other),
    }
}
