use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single file tracked by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    /// Original file name, kept for display only.
    pub name: String,
    /// Opaque content-store reference for the stored bytes.
    pub location: String,
    pub file_size: u64,
    /// 1-based rank on the shelf. Across all documents the positions are
    /// exactly the contiguous range 1..=N.
    pub position: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(name: String, location: String, file_size: u64, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            location,
            file_size,
            position,
            uploaded_at: Utc::now(),
        }
    }
}
