pub mod captions;
pub mod url;

use std::future::Future;

use summary_cache::VideoMetadata;

use crate::transcript::Transcript;

/// Caption transcript retrieval for one video.
pub trait TranscriptSource {
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Transcript, FetchError>> + Send;
}

/// Best-effort video metadata retrieval. Callers treat failures as
/// missing metadata, never as a pipeline failure.
pub trait MetadataSource {
    fn fetch_metadata(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoMetadata, FetchError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no captions available")]
    NoCaptions,
    #[error("video is private or unavailable")]
    PrivateVideo,
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse YouTube response: {0}")]
    Parse(&'static str),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<reqwest_middleware::Error> for FetchError {
    fn from(err: reqwest_middleware::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
