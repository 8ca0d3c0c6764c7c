//! docgen-cli: API documentation generator
//!
//! The crate centers on a layered options engine: declarations registered by
//! the tool and its extensions, a two-scope value store (tool settings plus
//! passthrough settings for the embedded compiler frontend), and a
//! priority-ordered pipeline of sources merged last-write-wins.

pub mod config;
