//! Registration of docgen's built-in option declarations
//!
//! Extensions register their own declarations after these, during the
//! discovery pass.

pub mod compiler;
pub mod general;
pub mod output;

use super::Options;
use crate::config::diagnostics::DiagnosticSink;
use anyhow::Result;

/// Register all built-in options from all modules
pub fn register_all(options: &mut Options, sink: &dyn DiagnosticSink) -> Result<()> {
    general::register(options, sink)?;
    output::register(options, sink)?;
    compiler::register(options, sink)?;
    Ok(())
}
