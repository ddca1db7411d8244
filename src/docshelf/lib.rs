//! # Docshelf Architecture
//!
//! Docshelf is a **UI-agnostic document catalog library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions → ids)                      │
//! │  - Serializes every read-compute-commit sequence behind one │
//! │    mutex, so concurrent callers cannot interleave           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation: upload, move, delete, ...      │
//! │  - Orchestrates: snapshot read → ordering → atomic commit   │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                     │
//!                    ▼                     ▼
//! ┌───────────────────────────┐ ┌──────────────────────────────┐
//! │  Ordering (ordering.rs)   │ │  Storage (store/, content/)  │
//! │  - Pure displaced-set     │ │  - RecordStore: atomic batch │
//! │    computation, no I/O    │ │    commits of record + shifts│
//! │                           │ │  - ContentStore: blobs       │
//! └───────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## The Shelf Invariant
//!
//! Every document carries a 1-based `position`, and across the catalog the
//! positions are exactly the contiguous range 1..=N, with no gaps and no
//! duplicates. Each mutation computes the minimal renumbering of the other
//! documents (`ordering`) and commits it together with the triggering
//! change as one atomic batch (`store`). The API facade serializes whole
//! operations, so the invariant also survives concurrent callers.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core could serve a REST API, a sync daemon, or any
//! other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`ordering`]: Pure shelf-renumbering computation
//! - [`store`]: Record storage abstraction and implementations
//! - [`content`]: Blob storage abstraction and implementations
//! - [`model`]: The `Document` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod ordering;
pub mod store;
