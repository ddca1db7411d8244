//! # Record Storage
//!
//! This module defines the catalog's record storage abstraction. The
//! [`RecordStore`] trait keeps the command layer decoupled from where
//! document records actually live.
//!
//! The one non-negotiable property of a store is the atomic batch: every
//! catalog mutation arrives as a [`CommitBatch`] (one primary insert,
//! update or delete plus the position updates it displaces), and the store
//! must make the whole batch visible together or not at all. The
//! contiguous-ordering invariant (positions are exactly 1..=N) only holds
//! because renumbering never lands without its triggering mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. All records live in a single
//!   `catalog.json`; a commit rewrites it through a temp file and a rename,
//!   which is the atomicity point.
//! - [`memory::InMemoryStore`]: in-memory storage for testing, with commit
//!   counting and injectable commit failure.

use crate::error::Result;
use crate::model::Document;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The single mutation a commit is built around.
#[derive(Debug, Clone)]
pub enum PrimaryOp {
    Insert(Document),
    Update(Document),
    Delete(Uuid),
}

/// An atomic unit of catalog change: one primary mutation plus the
/// displaced-position updates that keep the order contiguous.
#[derive(Debug, Clone)]
pub struct CommitBatch {
    pub primary: PrimaryOp,
    pub affected: Vec<Document>,
}

impl CommitBatch {
    pub fn insert(document: Document) -> Self {
        Self {
            primary: PrimaryOp::Insert(document),
            affected: Vec::new(),
        }
    }

    pub fn update(document: Document) -> Self {
        Self {
            primary: PrimaryOp::Update(document),
            affected: Vec::new(),
        }
    }

    pub fn delete(id: Uuid) -> Self {
        Self {
            primary: PrimaryOp::Delete(id),
            affected: Vec::new(),
        }
    }

    pub fn with_affected(mut self, affected: Vec<Document>) -> Self {
        self.affected = affected;
        self
    }
}

/// Abstract interface for catalog record storage.
pub trait RecordStore {
    /// Number of documents in the catalog
    fn count(&self) -> Result<usize>;

    /// Full catalog, sorted by position ascending
    fn get_all(&self) -> Result<Vec<Document>>;

    /// Get a document by id
    fn get(&self, id: &Uuid) -> Result<Document>;

    /// Apply a batch atomically: either every mutation in the batch becomes
    /// durable and visible, or none does.
    fn commit(&mut self, batch: CommitBatch) -> Result<()>;
}
