//! Cache module for storing raw API responses on disk
//!
//! This module provides a SQLite-backed key-value store with timestamped
//! entries. Cached payloads are opaque bytes and disposable: a store written by
//! an older schema is rebuilt on open instead of failing.

mod store;

pub use store::{check_schema, default_path, Cache, CacheEntry, CacheError, SchemaCheck};
