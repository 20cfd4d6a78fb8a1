//! Sync sweep outcome.

use serde::{Deserialize, Serialize};

/// Summary of one sync sweep.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SweepReport {
    /// Records in the snapshot, each submitted once
    pub attempted: usize,
    /// Records submitted and marked synced
    pub synced: usize,
    /// Records whose submission failed; still unsynced
    pub network_failures: usize,
    /// Records submitted remotely whose local flag update failed,
    /// as `(record_id, message)`
    pub storage_faults: Vec<(i64, String)>,
}

impl SweepReport {
    /// True if nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.network_failures == 0 && self.storage_faults.is_empty()
    }
}
