//! # Daybook Architecture
//!
//! Daybook is a **UI-agnostic diary library**. The CLI in `main.rs` is just
//! one client of it; the same core could sit under a TUI or a sync daemon.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs + main.rs)                                   │
//! │  - Parses arguments, formats output, owns the terminal     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Diary core (diary.rs)                                     │
//! │  - Authoritative in-memory collection of entries           │
//! │  - Mutates memory, then persists the whole collection      │
//! │  - Derived views: newest-first ordering, lookup by id      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                          │
//! │  - KeyValueStore trait: get/set of opaque strings          │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in the Core
//!
//! From `diary.rs` inward, code takes and returns plain Rust types, never
//! writes to stdout/stderr, and never assumes a terminal. The one logging
//! concession is `tracing` events on the load-recovery path, which clients
//! route wherever they like.
//!
//! ## Persistence model
//!
//! The entire collection lives under one storage key as a JSON array and is
//! rewritten on every mutation. That keeps the storage contract tiny and is
//! comfortably fast at personal-diary scale. The contract deliberately has
//! no compare-and-swap: concurrent writers would lose updates, and intended
//! usage is strictly one operation at a time.
//!
//! ## Module Overview
//!
//! - [`diary`]: the core store and its derived views
//! - [`model`]: `DiaryEntry` and `DiaryDraft`
//! - [`store`]: storage abstraction and backends
//! - [`resolve`]: user-typed id selectors → stable ids
//! - [`config`]: display configuration
//! - [`init`]: data-dir resolution and context assembly
//! - [`error`]: error types

pub mod config;
pub mod diary;
pub mod error;
pub mod init;
pub mod model;
pub mod resolve;
pub mod store;
