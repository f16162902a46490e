use std::fmt;

use sha2::{Digest, Sha256};

use crate::SummaryRecord;

pub mod memory;

/// Read/write access to previously composed summaries.
///
/// `get` must treat expired entries as absent. `put` must be atomic:
/// concurrent callers for the same fingerprint may both compute, and the
/// later write wins, but a reader never observes a partial record.
pub trait ResultCache {
    fn get(&self, fingerprint: &Fingerprint) -> Option<SummaryRecord>;

    fn put(&self, fingerprint: Fingerprint, record: SummaryRecord, ttl: chrono::Duration);
}

impl<T: ResultCache + Send + Sync> ResultCache for &T {
    fn get(&self, fingerprint: &Fingerprint) -> Option<SummaryRecord> {
        (**self).get(fingerprint)
    }

    fn put(&self, fingerprint: Fingerprint, record: SummaryRecord, ttl: chrono::Duration) {
        (**self).put(fingerprint, record, ttl);
    }
}

impl<T: ResultCache + Send + Sync> ResultCache for std::sync::Arc<T> {
    fn get(&self, fingerprint: &Fingerprint) -> Option<SummaryRecord> {
        (**self).get(fingerprint)
    }

    fn put(&self, fingerprint: Fingerprint, record: SummaryRecord, ttl: chrono::Duration) {
        (**self).put(fingerprint, record, ttl);
    }
}

/// Stable cache key derived from a video identifier and the canonical
/// rendering of the summarization options that affect the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(video_id: &str, canonical_options: &str) -> Self {
        use std::fmt::Write;

        let mut hasher = Sha256::new();
        hasher.update(video_id.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(canonical_options.as_bytes());
        let digest = hasher.finalize();

        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        Fingerprint(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_fingerprint() {
        let a = Fingerprint::new("dQw4w9WgXcQ", "max_summary=200;min_summary=50");
        let b = Fingerprint::new("dQw4w9WgXcQ", "max_summary=200;min_summary=50");
        assert_eq!(a, b);
    }

    #[test]
    fn options_change_fingerprint() {
        let a = Fingerprint::new("dQw4w9WgXcQ", "max_summary=200");
        let b = Fingerprint::new("dQw4w9WgXcQ", "max_summary=300");
        assert_ne!(a, b);
    }

    #[test]
    fn video_id_and_options_do_not_collide_on_concatenation() {
        // The separator byte keeps ("ab", "c") distinct from ("a", "bc").
        let a = Fingerprint::new("ab", "c");
        let b = Fingerprint::new("a", "bc");
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_is_hex_encoded_sha256() {
        let fp = Fingerprint::new("abc123", "opts");
        assert_eq!(fp.as_str().len(), 64);
        assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
