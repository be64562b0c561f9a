//! # Traq - File-Focused Work Time Tracking
//!
//! A command-line utility for tracking time spent on individual files,
//! built for work that is constantly interrupted: switching between jobs,
//! stepping away from the desk, losing connectivity.
//!
//! ## Features
//!
//! - **Work Queue**: An ordered session queue where exactly one file
//!   accrues time at any instant
//! - **Auto-Advance**: Completing a file automatically activates the next
//!   one, preferring opened work, then interrupted work
//! - **Idle Detection**: Inactivity auto-pauses the running file and is
//!   attributed separately from time on task
//! - **Global Hotkeys**: Complete, start-next and pause chords that work
//!   regardless of which application has focus
//! - **Offline Durability**: Completed entries survive lost connectivity
//!   in a local queue and sync when the vault is reachable again
//!
//! ## Usage
//!
//! ```rust,no_run
//! use traq::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
