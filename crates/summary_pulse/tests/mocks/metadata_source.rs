use std::sync::{Arc, Mutex};
use summary_cache::VideoMetadata;
use summary_pulse::yt::{FetchError, MetadataSource};

#[derive(Clone)]
pub struct MockMetadataSource {
    pub metadata: VideoMetadata,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockMetadataSource {
    pub fn new() -> Self {
        Self {
            metadata: VideoMetadata {
                title: Some("Cooking Pasta at Home".to_string()),
                channel: Some("Test Kitchen".to_string()),
                duration_seconds: Some(600),
                view_count: Some(12345),
                thumbnail_url: Some("https://i.ytimg.com/vi/test/default.jpg".to_string()),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new()
        }
    }
}

impl MetadataSource for MockMetadataSource {
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, FetchError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(FetchError::Network(msg.clone()));
        }
        Ok(self.metadata.clone())
    }
}
