//! Presentation layer
//!
//! Renders resolved descriptions for the terminal. Machine-readable output
//! (JSON, YAML) goes straight through serde in the resolve command.

pub mod tree;

pub use tree::render_tree;
