//! TOML config file reader
//!
//! Reads `docgen.toml`. The file is located through the `options` option when
//! set (typically by the priority-0 arguments reader during the same pass),
//! otherwise discovered in the working directory or the user config directory.
//! A missing explicitly-named file is an error; a missing discovered file is
//! silently skipped.

use super::OptionsReader;
use crate::config::diagnostics::DiagnosticSink;
use crate::config::options::{Options, OptionValue};
use std::path::PathBuf;

/// Default config file name looked up in the working directory
const CONFIG_FILE_NAME: &str = "docgen.toml";

pub struct ConfigFileReader {
    priority: i32,
}

impl ConfigFileReader {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }

    fn resolve_path(&self, options: &Options, sink: &dyn DiagnosticSink) -> Option<PathBuf> {
        let requested = options.get_string("options").unwrap_or_default();
        if !requested.is_empty() {
            let path = PathBuf::from(requested);
            if path.is_file() {
                return Some(path);
            }
            sink.error(&format!("options file not found: {}", path.display()));
            return None;
        }

        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("docgen").join(CONFIG_FILE_NAME));
        }
        candidates.into_iter().find(|path| path.is_file())
    }
}

impl OptionsReader for ConfigFileReader {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn name(&self) -> &str {
        "config"
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

        let table: toml::Table = match text.parse() {
            Ok(table) => table,
            Err(e) => {
                sink.error(&format!("failed to parse {}: {e}", path.display()));
                return;
            }
        };

        log::debug!("loading options from {}", path.display());
        for (key, value) in table {
            if options.get_declaration(&key).is_none() {
                sink.error(&format!("unknown option '{key}' in {}", path.display()));
                continue;
            }
            if let Err(e) = options.set_value(&key, toml_to_value(value)) {
                sink.error(&format!(
                    "invalid value for '{key}' in {}: {e}",
                    path.display()
                ));
            }
        }
    }
}

/// Map a TOML value onto the raw shape the declaration's kind converts
fn toml_to_value(value: toml::Value) -> OptionValue {
    match value {
        toml::Value::Boolean(v) => OptionValue::Bool(v),
        toml::Value::Integer(v) => OptionValue::Number(v as f64),
        toml::Value::Float(v) => OptionValue::Number(v),
        toml::Value::String(v) => OptionValue::String(v),
        toml::Value::Array(items)
            if items.iter().all(|item| matches!(item, toml::Value::String(_))) =>
        {
            OptionValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        toml::Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            )
        }
        other => OptionValue::Mixed(serde_json::to_value(other).unwrap_or_default()),
    }
}
