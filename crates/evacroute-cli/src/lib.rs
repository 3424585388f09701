//! Evacuation route CLI library.
//!
//! Rendering and message helpers shared by the `evacroute` binary's
//! subcommands.

pub mod messages;
pub mod output;

pub use messages::{format_not_found_message, format_unknown_label_message};
pub use output::OutputFormat;
