//! User-facing message catalog.
//!
//! All terminal text lives in the `Message` enum; the `msg_*` macros in
//! `macros` pick the output channel (console or tracing) at runtime.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
