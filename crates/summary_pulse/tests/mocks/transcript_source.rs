use std::sync::{Arc, Mutex};
use summary_pulse::yt::{FetchError, TranscriptSource};
use summary_pulse::Transcript;

#[derive(Clone, Copy)]
pub enum MockFailure {
    NoCaptions,
    PrivateVideo,
    Network,
}

impl MockFailure {
    fn to_error(self) -> FetchError {
        match self {
            MockFailure::NoCaptions => FetchError::NoCaptions,
            MockFailure::PrivateVideo => FetchError::PrivateVideo,
            MockFailure::Network => FetchError::Network("connection reset".into()),
        }
    }
}

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub transcript_text: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub failure: Option<MockFailure>,
}

impl MockTranscriptSource {
    pub fn new(transcript_text: &str) -> Self {
        Self {
            transcript_text: transcript_text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new("")
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, FetchError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }
        Ok(Transcript::from_text(self.transcript_text.clone()))
    }
}
