use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of rhetorical forms a video can be classified as.
///
/// Classification is produced by a pure scoring function over weighted
/// rules in the pipeline crate; `Other` is the label when no rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Tutorial,
    Review,
    Educational,
    Other,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Tutorial,
        ContentType::Review,
        ContentType::Educational,
        ContentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Tutorial => "tutorial",
            ContentType::Review => "review",
            ContentType::Educational => "educational",
            ContentType::Other => "other",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort video metadata. Any field may be absent; absence never
/// fails the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration_seconds: Option<u64>,
    pub view_count: Option<u64>,
    pub thumbnail_url: Option<String>,
}

/// The composed summary artifact for one video, as produced by the
/// pipeline and held by the cache for its TTL window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub video_id: String,
    /// Final merged summary text, truncated at a sentence boundary.
    pub summary: String,
    /// Highest-scoring summary sentences, in rank order.
    pub key_points: Vec<String>,
    pub content_type: ContentType,
    /// Winning vote share of the content-type classification, in [0, 1].
    pub confidence: f32,
    /// Ranked distinct keywords, case-normalized.
    pub keywords: Vec<String>,
    /// Set when partial inference failures left the summary below the
    /// configured minimum length. Not an error.
    pub flagged_short: bool,
    pub video: Option<VideoMetadata>,
}
