use std::cmp::Ordering;

use summary_cache::ContentType;

use crate::{
    classify::{classify, Classification},
    error::Error,
    text, Summarizer,
};

/// Composition knobs, derived from [`crate::SummaryConfig`].
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub max_summary_length: usize,
    pub min_summary_length: usize,
    /// Per-chunk target length as a fraction of the chunk length.
    pub compression_ratio: f64,
    pub max_key_points: usize,
    /// When off, composition skips classification and key points and
    /// returns the plain merged summary.
    pub advanced: bool,
}

/// Final merged summary plus the derived presentation data.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedSummary {
    pub text: String,
    pub key_points: Vec<String>,
    pub content_type: ContentType,
    pub confidence: f32,
    pub flagged_short: bool,
}

/// Orchestrates per-chunk summarization and merges the fragments.
///
/// Chunks are independent, so they are summarized concurrently; fragment
/// order is restored by chunk index, not completion order. The retry
/// policy lives here: one retry at half the target length per chunk.
pub struct SummaryComposer<S> {
    summarizer: S,
    options: ComposeOptions,
}

impl<S: Summarizer + Send + Sync> SummaryComposer<S> {
    pub fn new(summarizer: S, options: ComposeOptions) -> Self {
        SummaryComposer {
            summarizer,
            options,
        }
    }

    #[tracing::instrument(skip_all, fields(num_chunks = chunks.len()))]
    pub async fn compose(
        &self,
        chunks: &[String],
        keywords: &[String],
    ) -> Result<ComposedSummary, Error> {
        if chunks.is_empty() {
            return Err(Error::EmptyTranscript);
        }
        let num_chunks = chunks.len();

        // join_all preserves input order, so surviving fragments stay in
        // chunk index order after the failed ones drop out.
        let results = futures::future::join_all(
            chunks
                .iter()
                .enumerate()
                .map(|(index, chunk)| self.summarize_chunk(index, chunk, num_chunks)),
        )
        .await;

        let fragments: Vec<String> = results.into_iter().flatten().collect();
        if fragments.is_empty() {
            return Err(Error::SummarizationUnavailable(
                "every chunk summarization call failed".into(),
            ));
        }
        if fragments.len() < num_chunks {
            tracing::warn!(
                failed = num_chunks - fragments.len(),
                total = num_chunks,
                "Some chunks failed to summarize, composing a degraded summary"
            );
        }

        let merged = fragments.join("\n\n");
        let summary =
            text::truncate_at_sentence(&merged, self.options.max_summary_length).to_string();
        let flagged_short = summary.chars().count() < self.options.min_summary_length;

        if !self.options.advanced {
            return Ok(ComposedSummary {
                text: summary,
                key_points: Vec::new(),
                content_type: ContentType::Other,
                confidence: 0.0,
                flagged_short,
            });
        }

        let Classification { label, confidence } = classify(&chunks.join(" "));
        let key_points = select_key_points(&summary, keywords, self.options.max_key_points);

        Ok(ComposedSummary {
            text: summary,
            key_points,
            content_type: label,
            confidence,
            flagged_short,
        })
    }

    async fn summarize_chunk(
        &self,
        index: usize,
        chunk: &str,
        num_chunks: usize,
    ) -> Option<String> {
        let chunk_length = chunk.chars().count();
        let proportional = (chunk_length as f64 * self.options.compression_ratio) as usize;
        let target = (self.options.max_summary_length / num_chunks)
            .min(proportional)
            .max(1);

        match self.summarizer.infer(chunk, target).await {
            Ok(fragment) => Some(fragment),
            Err(e) => {
                tracing::warn!(
                    chunk = index,
                    error = ?e,
                    "Chunk summarization failed, retrying with a shorter target"
                );
                let shorter = (target / 2).max(1);
                match self.summarizer.infer(chunk, shorter).await {
                    Ok(fragment) => Some(fragment),
                    Err(e) => {
                        tracing::error!(chunk = index, error = ?e, "Chunk summarization failed after retry");
                        None
                    }
                }
            }
        }
    }
}

/// Ranks summary sentences by position (earlier favored) plus keyword
/// overlap; ties keep original order.
fn select_key_points(summary: &str, keywords: &[String], max_points: usize) -> Vec<String> {
    let sentences = text::split_sentences(summary);
    if sentences.is_empty() || max_points == 0 {
        return Vec::new();
    }
    let total = sentences.len() as f64;

    let mut scored: Vec<(f64, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let lower = sentence.to_lowercase();
            let overlap = keywords
                .iter()
                .filter(|keyword| lower.contains(keyword.as_str()))
                .count() as f64;
            let position = 1.0 - index as f64 / total;
            (overlap + position, index)
        })
        .collect();

    // Stable sort: equal scores keep original sentence order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(max_points);
    scored
        .into_iter()
        .map(|(_, index)| sentences[index].to_string())
        .collect()
}
