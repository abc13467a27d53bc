//! Sonaveeb CLI Library
//!
//! Looks up Estonian words in the Ekilex dictionary API and renders their
//! inflected forms. Raw API responses are cached on disk.

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod projector;
pub mod render;
pub mod source;

pub use error::LookupError;
pub use pipeline::{lookup, run, RunOptions};
