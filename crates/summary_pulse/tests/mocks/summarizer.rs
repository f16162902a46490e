use std::sync::{Arc, Mutex};
use summary_pulse::Summarizer;

#[derive(Clone)]
pub struct MockSummarizer {
    pub fragment: String,
    /// (chunk text, target length) per call, in call order.
    pub calls: Arc<Mutex<Vec<(String, usize)>>>,
    pub fail_with: Option<String>,
    /// Fail any call whose input contains this marker.
    pub fail_on_substring: Option<String>,
    /// Fail this many calls before succeeding.
    pub fail_first: Arc<Mutex<usize>>,
}

impl MockSummarizer {
    pub fn new(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_on_substring: None,
            fail_first: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    pub fn failing_on_substring(marker: &str, fragment: &str) -> Self {
        Self {
            fail_on_substring: Some(marker.to_string()),
            ..Self::new(fragment)
        }
    }

    pub fn failing_first(failures: usize, fragment: &str) -> Self {
        Self {
            fail_first: Arc::new(Mutex::new(failures)),
            ..Self::new(fragment)
        }
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-llm";
    type Error = anyhow::Error;

    async fn infer(&self, text: &str, target_length: usize) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target_length));

        if let Some(ref marker) = self.fail_on_substring {
            if text.contains(marker.as_str()) {
                anyhow::bail!("chunk rejected by mock");
            }
        }
        {
            let mut remaining = self.fail_first.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                anyhow::bail!("transient inference failure");
            }
        }
        if let Some(ref msg) = self.fail_with {
            anyhow::bail!("{}", msg);
        }
        Ok(self.fragment.clone())
    }
}
