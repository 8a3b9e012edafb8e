use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every persisted aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// When the record was first persisted
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last written
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
