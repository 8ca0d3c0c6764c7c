//! Option sources
//!
//! A reader is a named, prioritized source of option values: the argument
//! vector, a `docgen.toml` file, the compiler's own config file, or anything an
//! extension supplies. Readers run in ascending-priority order and mutate the
//! container directly, so the net effect for any option touched by several
//! sources is last-write-wins.

pub mod arguments;
pub mod compiler_file;
pub mod config_file;

pub use arguments::ArgumentsReader;
pub use compiler_file::CompilerConfigReader;
pub use config_file::ConfigFileReader;

use super::diagnostics::DiagnosticSink;
use super::options::Options;

/// Contract every option source implements to participate in the pipeline
pub trait OptionsReader {
    /// Ordering key; lower priorities execute earlier, so later (higher)
    /// readers overwrite earlier values for the same option
    fn priority(&self) -> i32;

    /// Name used for bulk removal; several readers may share one
    fn name(&self) -> &str;

    /// Read this source, mutating the container's declarations and values
    ///
    /// Problems are reported through `sink` and the reader returns normally,
    /// leaving the container valid for subsequent readers.
    fn read(&self, options: &mut Options, sink: &dyn DiagnosticSink);
}
