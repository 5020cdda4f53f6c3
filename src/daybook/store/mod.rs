//! # Storage Layer
//!
//! This module defines the storage abstraction for daybook. The
//! [`KeyValueStore`] trait is deliberately dumb: string keys in, string
//! values out, with no knowledge of entry structure. The diary core
//! serializes the whole collection into a single value and replaces it on
//! every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, one file per key
//!   (`<key>.json`) under the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for testing; no
//!   persistence
//!
//! ## Failure contract
//!
//! Both operations may fail (storage unavailable, unreadable file). A
//! failure is always surfaced to the caller as an error; recovery policy
//! belongs one layer up, in the diary core.
//!
//! There is no locking and no versioning of values: two interleaved
//! read-modify-write sequences against the same key end with the later
//! `set` winning. Callers are expected to complete one operation before
//! issuing the next.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait KeyValueStore {
    /// Returns the stored value for `key`, or `None` if the key has never
    /// been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably replaces the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
