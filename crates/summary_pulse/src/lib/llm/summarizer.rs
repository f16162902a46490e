use std::{fmt::Debug, future::Future};

/// Black-box summarization capability: condense `text` to roughly
/// `target_length` characters.
///
/// Implementations are injected into the pipeline; the retry policy is
/// owned by the composer, not the backend.
pub trait Summarizer {
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn infer(
        &self,
        text: &str,
        target_length: usize,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<T: Summarizer + Send + Sync> Summarizer for &T {
    const SUMMARIZER_MODEL: &'static str = T::SUMMARIZER_MODEL;
    type Error = T::Error;

    async fn infer(&self, text: &str, target_length: usize) -> Result<String, Self::Error> {
        (**self).infer(text, target_length).await
    }
}
