//! Default transcript and metadata source.
//!
//! Scrapes the video watch page, lifts `ytInitialPlayerResponse` out of
//! its script tag, then fetches the selected caption track in `json3`
//! form and maps its events onto caption segments.

use std::sync::LazyLock;

use regex::Regex;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Deserialize;
use summary_cache::VideoMetadata;

use crate::{
    transcript::{CaptionSegment, Transcript},
    yt::{FetchError, MetadataSource, TranscriptSource},
};

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script[^>]*>\s*var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*</script>")
        .unwrap()
});

#[derive(Clone)]
pub struct CaptionClient {
    http: ClientWithMiddleware,
    base_url: String,
}

impl CaptionClient {
    const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

    pub fn new() -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(2);
        let http = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        CaptionClient {
            http,
            base_url: Self::WATCH_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_player_response(&self, video_id: &str) -> Result<PlayerResponse, FetchError> {
        let html = self
            .http
            .get(format!("{}?v={video_id}", self.base_url))
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await?;

        parse_player_response(&html)
    }
}

impl Default for CaptionClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_player_response(html: &str) -> Result<PlayerResponse, FetchError> {
    PLAYER_RESPONSE_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .and_then(|m| serde_json::from_str(m.as_str()).ok())
        .ok_or(FetchError::Parse(
            "Failed to extract ytInitialPlayerResponse from the page's script tag",
        ))
}

/// Prefers an exact English track, then any English variant, then the
/// first track offered.
fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.language_code.as_deref() == Some("en"))
        .or_else(|| {
            tracks.iter().find(|t| {
                t.language_code
                    .as_deref()
                    .is_some_and(|code| code.starts_with("en"))
            })
        })
        .or_else(|| tracks.first())
}

fn events_to_transcript(timed_text: TimedText) -> Transcript {
    let segments = timed_text
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            let text: String = event
                .segs?
                .into_iter()
                .filter_map(|seg| seg.utf8)
                .collect();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(CaptionSegment {
                start: event.t_start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.d_duration_ms.unwrap_or(0) as f64 / 1000.0,
                text: trimmed.to_string(),
            })
        })
        .collect();
    Transcript::new(segments)
}

impl TranscriptSource for CaptionClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, FetchError> {
        let player = self.fetch_player_response(video_id).await?;

        if let Some(status) = player
            .playability_status
            .as_ref()
            .and_then(|s| s.status.as_deref())
        {
            if matches!(status, "LOGIN_REQUIRED" | "ERROR" | "UNPLAYABLE") {
                return Err(FetchError::PrivateVideo);
            }
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default();
        let track = select_track(&tracks).ok_or(FetchError::NoCaptions)?;

        let timed_text: TimedText = self
            .http
            .get(format!("{}&fmt=json3", track.base_url))
            .send()
            .await?
            .json()
            .await?;

        Ok(events_to_transcript(timed_text))
    }
}

impl MetadataSource for CaptionClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, FetchError> {
        let player = self.fetch_player_response(video_id).await?;
        let details = player
            .video_details
            .ok_or(FetchError::Parse("No value found for 'videoDetails'"))?;

        Ok(VideoMetadata {
            title: details.title,
            channel: details.author,
            duration_seconds: details.length_seconds.and_then(|s| s.parse().ok()),
            view_count: details.view_count.and_then(|s| s.parse().ok()),
            thumbnail_url: details
                .thumbnail
                .and_then(|t| t.thumbnails.into_iter().last())
                .map(|t| t.url),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
    video_details: Option<VideoDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayabilityStatus {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoDetails {
    title: Option<String>,
    author: Option<String>,
    length_seconds: Option<String>,
    view_count: Option<String>,
    thumbnail: Option<ThumbnailList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThumbnailList {
    thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedText {
    events: Option<Vec<TimedTextEvent>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    t_start_ms: Option<u64>,
    d_duration_ms: Option<u64>,
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    utf8: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_extraction() {
        let html = r#"
            <html>
                <head>
                    <script nonce="gZTn8MILMQFuWon1rDk2VA">
                        var ytInitialPlayerResponse = {"videoDetails": {"title": "Cooking pasta", "author": "Chef"}};
                    </script>
                </head>
                <body>
                    <p>Some content</p>
                </body>
            </html>
        "#;

        let player = parse_player_response(html).expect("Failed to extract JSON");
        let details = player.video_details.unwrap();
        assert_eq!(details.title.as_deref(), Some("Cooking pasta"));
        assert_eq!(details.author.as_deref(), Some("Chef"));
    }

    #[test]
    fn test_extraction_with_no_data() {
        let html = r#"
            <html>
                <body>
                    <p>No ytInitialPlayerResponse here</p>
                </body>
            </html>
        "#;

        let result = parse_player_response(html);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let html = r#"
            <script nonce="gZTn8MILMQFuWon1rDk2VA">
                var ytInitialPlayerResponse = {invalid: json};
            </script>
        "#;

        let result = parse_player_response(html);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn selects_exact_english_track_first() {
        let tracks = vec![
            CaptionTrack {
                base_url: "https://captions/de".into(),
                language_code: Some("de".into()),
            },
            CaptionTrack {
                base_url: "https://captions/en-GB".into(),
                language_code: Some("en-GB".into()),
            },
            CaptionTrack {
                base_url: "https://captions/en".into(),
                language_code: Some("en".into()),
            },
        ];
        assert_eq!(select_track(&tracks).unwrap().base_url, "https://captions/en");
    }

    #[test]
    fn falls_back_to_english_variant_then_first_track() {
        let variant_only = vec![
            CaptionTrack {
                base_url: "https://captions/de".into(),
                language_code: Some("de".into()),
            },
            CaptionTrack {
                base_url: "https://captions/en-US".into(),
                language_code: Some("en-US".into()),
            },
        ];
        assert_eq!(
            select_track(&variant_only).unwrap().base_url,
            "https://captions/en-US"
        );

        let no_english = vec![CaptionTrack {
            base_url: "https://captions/fr".into(),
            language_code: Some("fr".into()),
        }];
        assert_eq!(
            select_track(&no_english).unwrap().base_url,
            "https://captions/fr"
        );
        assert!(select_track(&[]).is_none());
    }

    #[test]
    fn maps_json3_events_to_segments() {
        let raw = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 2000, "segs": [{"utf8": "Hello "}, {"utf8": "world."}]},
                {"tStartMs": 2000, "dDurationMs": 1500, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 3500, "dDurationMs": 1000, "segs": [{"utf8": "Boil water."}]},
                {"tStartMs": 4500, "dDurationMs": 1000}
            ]
        }"#;
        let timed_text: TimedText = serde_json::from_str(raw).unwrap();
        let transcript = events_to_transcript(timed_text);

        assert_eq!(transcript.segments.len(), 2);
        assert_eq!(transcript.segments[0].text, "Hello world.");
        assert_eq!(transcript.segments[0].start, 0.0);
        assert_eq!(transcript.segments[0].duration, 2.0);
        assert_eq!(transcript.segments[1].text, "Boil water.");
        assert_eq!(transcript.segments[1].start, 3.5);
    }
}
