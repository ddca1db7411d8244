//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all docshelf operations, regardless of the UI
//! driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (converting user-facing positions to ids)
//! - **Serializes writers**: both stores live behind one mutex, and every
//!   operation holds it across its whole read-compute-commit sequence
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Single-Writer Serialization
//!
//! Every operation reads a fresh snapshot, computes a renumbering and
//! commits, with no concurrency token on the records. Two interleaved
//! read-compute-commit sequences could each look valid and jointly corrupt
//! the contiguous order, so the facade serializes them: the mutex is held
//! from first read to commit, and each caller sees the previous caller's
//! committed state. Commits themselves are all-or-nothing in the store, so
//! a poisoned lock is safe to recover.
//!
//! ## Generic Over Both Stores
//!
//! `DocshelfApi<S: RecordStore, C: ContentStore>` is generic over the
//! backends: production pairs `FileStore` with `FileContent`, tests pair
//! the in-memory twins without touching the filesystem.

use crate::commands;
use crate::content::ContentStore;
use crate::error::Result;
use crate::model::Document;
use crate::store::RecordStore;
use std::sync::Mutex;
use uuid::Uuid;

/// The main API facade for docshelf operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct DocshelfApi<S: RecordStore, C: ContentStore> {
    stores: Mutex<Stores<S, C>>,
    paths: commands::CatalogPaths,
}

struct Stores<S, C> {
    record: S,
    content: C,
}

impl<S: RecordStore, C: ContentStore> DocshelfApi<S, C> {
    pub fn new(record: S, content: C, paths: commands::CatalogPaths) -> Self {
        Self {
            stores: Mutex::new(Stores { record, content }),
            paths,
        }
    }

    /// Runs `f` with exclusive access to both stores for the duration of
    /// one operation.
    fn with_stores<T>(&self, f: impl FnOnce(&mut Stores<S, C>) -> T) -> T {
        let mut stores = self
            .stores
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut stores)
    }

    pub fn upload(&self, name: &str, bytes: &[u8]) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::upload::run(&mut s.record, &mut s.content, name, bytes))
    }

    pub fn list(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::list::run(&s.record, filter))
    }

    pub fn get(&self, position: usize) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::get::run(&s.record, position))
    }

    /// Point read by id, for callers that track documents by identity
    /// rather than shelf position.
    pub fn document(&self, id: &Uuid) -> Result<Document> {
        self.with_stores(|s| s.record.get(id))
    }

    pub fn delete(&self, positions: &[usize]) -> Result<commands::CmdResult> {
        self.with_stores(|s| {
            let resolved = commands::helpers::resolve_positions(&s.record, positions)?;
            let ids: Vec<Uuid> = resolved.into_iter().map(|(_, id)| id).collect();
            commands::delete::run(&mut s.record, &mut s.content, &ids)
        })
    }

    pub fn delete_by_id(&self, id: &Uuid) -> Result<commands::CmdResult> {
        self.with_stores(|s| {
            commands::delete::run(&mut s.record, &mut s.content, std::slice::from_ref(id))
        })
    }

    pub fn move_to_position(
        &self,
        position: usize,
        new_position: usize,
    ) -> Result<commands::CmdResult> {
        self.with_stores(|s| {
            let resolved =
                commands::helpers::resolve_positions(&s.record, std::slice::from_ref(&position))?;
            let (_, id) = resolved[0];
            commands::move_to::run(&mut s.record, &id, new_position)
        })
    }

    pub fn move_id_to_position(
        &self,
        id: &Uuid,
        new_position: usize,
    ) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::move_to::run(&mut s.record, id, new_position))
    }

    pub fn document_paths(&self, positions: &[usize]) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::paths::run(&s.record, &self.paths, positions))
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        self.with_stores(|s| commands::doctor::run(&mut s.record))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::CatalogPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel};
