//! Bookkeeping carried by every store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata tracked by a store.
///
/// Only counters and timestamps are kept. Past container values are not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Unique store identifier
    pub id: Uuid,

    /// Optional human-readable name, used in log events
    pub label: Option<String>,

    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Time of the last committed apply (creation time if none)
    pub updated_at: DateTime<Utc>,

    /// Number of committed applies
    pub revision: u64,
}

impl StoreMetadata {
    pub(crate) fn new(label: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            label,
            created_at: now,
            updated_at: now,
            revision: 0,
        }
    }

    pub(crate) fn record_commit(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for StoreMetadata {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_metadata_has_no_revisions() {
        let metadata = StoreMetadata::new(Some("plant".to_string()));
        assert_eq!(metadata.revision, 0);
        assert_eq!(metadata.created_at, metadata.updated_at);
        assert_eq!(metadata.label.as_deref(), Some("plant"));
    }

    #[test]
    fn record_commit_bumps_revision() {
        let mut metadata = StoreMetadata::default();
        metadata.record_commit();
        metadata.record_commit();

        assert_eq!(metadata.revision, 2);
        assert!(metadata.updated_at >= metadata.created_at);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(StoreMetadata::default().id, StoreMetadata::default().id);
    }
}
