//! Remote store client for telemetry delivery.
//!
//! The vault client speaks the PostgREST-style HTTP interface of the
//! company database: time entries are inserted on completion, queried for
//! the entries report, and a cheap limited select doubles as the
//! connectivity probe. Authentication resolves an `employee_name` identity
//! against the `app_user` table; the core tracking logic never handles
//! credentials itself.
//!
//! `RemoteStore` is the seam between the sync queue and the wire: the sync
//! queue only needs insert, probe and query, and tests provide their own
//! programmable implementation.

use crate::libs::sync_queue::SyncRecord;
use anyhow::Result;

pub mod vault;

pub use vault::{VaultClient, VaultConfig};

/// Contract consumed by the sync queue.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// Delivers one completed-work record. Any error is treated as a
    /// transient delivery failure by the caller.
    async fn insert(&self, record: &SyncRecord) -> Result<()>;

    /// Cheap read-only reachability check.
    async fn probe(&self) -> bool;

    /// Fetches stored records, optionally filtered by employee.
    async fn query(&self, employee: Option<&str>) -> Result<Vec<SyncRecord>>;
}
