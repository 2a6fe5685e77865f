use serde::{Deserialize, Serialize};

/// Accumulated privacy shield counters.
///
/// These are simulated display values, not the result of request interception.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyCounters {
    pub ads: u64,
    pub trackers: u64,
    pub scripts: u64,
    /// In MB.
    pub ram_optimized: u64,
}

/// Increments produced by one simulated page load.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockedCounts {
    pub ads: u64,
    pub trackers: u64,
    pub scripts: u64,
    pub ram_optimized: u64,
}
