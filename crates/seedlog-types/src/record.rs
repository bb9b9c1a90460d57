use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged observation of a seed value plus metadata.
///
/// Records are append-only: once written to a session log they are never
/// mutated or reordered. The timestamp is assigned at append time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// The seed value that was used (pass-through from the caller).
    pub seed: u64,

    /// Identifier of whatever produced the seed (node id, sampler name, ...).
    pub source_label: String,

    /// Free-form annotation supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was appended.
    pub timestamp: DateTime<Utc>,
}

impl SeedRecord {
    /// Create a record stamped with the current time.
    pub fn new(seed: u64, source_label: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            seed,
            source_label: source_label.into(),
            notes: notes.filter(|n| !n.is_empty()),
            timestamp: Utc::now(),
        }
    }
}
