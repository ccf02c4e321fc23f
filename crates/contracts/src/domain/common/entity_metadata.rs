use serde::{Deserialize, Serialize};

/// Lifecycle metadata of an aggregate instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Creation instant
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update instant
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Bumped on every persisted mutation
    pub version: i32,
}

impl EntityMetadata {
    /// Metadata for a freshly created aggregate
    pub fn new() -> Self {
        Self::created_at(chrono::Utc::now())
    }

    /// Metadata stamped with an explicit creation instant
    pub fn created_at(at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            version: 0,
        }
    }

    /// Update timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    /// Increment version
    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
