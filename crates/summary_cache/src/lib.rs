//! # Summary Cache
//!
//! This crate owns the one piece of state that survives a single request:
//! the composed summary artifact and a TTL-bounded in-memory cache of it,
//! keyed by a fingerprint of (video id, summarization options).
//!
//! The cache is an optimization for repeated identical requests, not a
//! bounded-memory structure. Expired entries are treated as absent and
//! evicted lazily; an optional entry ceiling evicts oldest-first.

mod cache;
mod domain;

pub use cache::memory::{CacheStats, InMemoryCache};
pub use cache::{Fingerprint, ResultCache};
pub use domain::{ContentType, SummaryRecord, VideoMetadata};
