//! Core library modules for the traq application.
//!
//! The tracking engine itself is the `queue`/`scheduler`/`tracker` trio;
//! `idle` and `hotkeys` feed it commands from global input hooks, and
//! `sync_queue` carries completed work to the remote store with offline
//! durability. The remaining modules are shared infrastructure.

pub mod client_id;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod freshness;
pub mod hotkeys;
pub mod idle;
pub mod messages;
pub mod queue;
pub mod scheduler;
pub mod secret;
pub mod shift;
pub mod sync_queue;
pub mod tracker;
