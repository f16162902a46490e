//! YouTube URL validation and video id extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

// Accepted forms: watch?v=, youtu.be/, embed/, /v/. Video ids are 11
// characters from the base64url alphabet.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|embed/|v/)|youtu\.be/)([0-9A-Za-z_-]{11})(?:[&?#/]|$)",
    )
    .unwrap()
});

pub fn is_valid_youtube_url(url: &str) -> bool {
    VIDEO_ID_RE.is_match(url.trim())
}

/// Extracts the 11-character video id from a supported YouTube URL form.
pub fn extract_video_id(url: &str) -> Result<String, Error> {
    VIDEO_ID_RE
        .captures(url.trim())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_watch_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?t=42s&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).unwrap(), "dQw4w9WgXcQ", "{url}");
        }
    }

    #[test]
    fn extracts_id_from_short_embed_and_v_urls() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=10",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).unwrap(), "dQw4w9WgXcQ", "{url}");
        }
    }

    #[test]
    fn rejects_non_youtube_and_malformed_urls() {
        for url in [
            "",
            "not a url",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=",
            "https://www.youtube.com/watch?v=short",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            assert!(extract_video_id(url).is_err(), "{url} should be rejected");
            assert!(!is_valid_youtube_url(url));
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(
            extract_video_id("  https://youtu.be/dQw4w9WgXcQ \n").unwrap(),
            "dQw4w9WgXcQ"
        );
    }
}
