//! # Transcript Normalization
//!
//! Turns raw caption segments into a single plain-prose string: markup
//! and non-speech annotations stripped, whitespace collapsed, adjacent
//! duplicate sentences (an auto-caption artifact) dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::{error::Error, text};

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

// Covers both "[music]" style cues and "(inaudible)" style asides.
static ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").unwrap());

/// One caption segment as delivered by the transcript source.
///
/// Segments are ordered by start time; overlap is not guaranteed absent,
/// since source captions may jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSegment {
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Segment duration, in seconds.
    pub duration: f64,
    pub text: String,
}

/// Ordered sequence of caption segments for one video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub segments: Vec<CaptionSegment>,
}

impl Transcript {
    pub fn new(segments: Vec<CaptionSegment>) -> Self {
        Transcript { segments }
    }

    /// Convenience constructor for plain text without timing data.
    pub fn from_text(text: impl Into<String>) -> Self {
        Transcript {
            segments: vec![CaptionSegment {
                start: 0.0,
                duration: 0.0,
                text: text.into(),
            }],
        }
    }
}

/// Cleans a raw transcript into plain prose.
///
/// Fails with [`Error::EmptyTranscript`] when no usable text remains
/// after cleanup. No semantic alteration beyond annotation stripping and
/// duplicate-sentence removal.
#[tracing::instrument(skip(transcript), fields(segments = transcript.segments.len()))]
pub fn normalize(transcript: &Transcript) -> Result<String, Error> {
    let mut segments: Vec<&CaptionSegment> = transcript.segments.iter().collect();
    segments.sort_by(|a, b| {
        a.start
            .partial_cmp(&b.start)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let joined = segments
        .iter()
        .map(|seg| seg.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let normalized = normalize_text(&joined);
    if normalized.is_empty() {
        return Err(Error::EmptyTranscript);
    }
    Ok(normalized)
}

/// String-level cleanup behind [`normalize`]. Idempotent: reapplying it
/// to its own output yields the same string.
pub fn normalize_text(raw: &str) -> String {
    let stripped = MARKUP_RE.replace_all(raw, " ");
    let stripped = ANNOTATION_RE.replace_all(&stripped, " ");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    dedupe_adjacent_sentences(&collapsed)
}

fn dedupe_adjacent_sentences(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut previous_key = String::new();
    for sentence in text::split_sentences(text) {
        let key = text::sentence_key(sentence);
        if !key.is_empty() && key == previous_key {
            continue;
        }
        kept.push(sentence);
        previous_key = key;
    }
    kept.join(" ")
}
