pub mod builder;

use serde::Serialize;
use summary_cache::{Fingerprint, ResultCache, SummaryRecord, VideoMetadata};

use crate::{
    chunker,
    compose::SummaryComposer,
    config::SummaryConfig,
    error::Error,
    keywords::KeywordExtractor,
    text, transcript,
    yt::{url, MetadataSource, TranscriptSource},
    Summarizer,
};

/// The assembled result of one request.
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    pub record: SummaryRecord,
    /// Whether the record was served from the cache.
    pub cached: bool,
}

/// JSON shape handed to callers at the boundary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub video_info: Option<VideoMetadata>,
    pub content_type: summary_cache::ContentType,
    pub key_points: Vec<String>,
    pub cached: bool,
}

impl SummaryOutput {
    pub fn into_response(self) -> SummaryResponse {
        SummaryResponse {
            summary: self.record.summary,
            keywords: self.record.keywords.join(", "),
            video_info: self.record.video,
            content_type: self.record.content_type,
            key_points: self.record.key_points,
            cached: self.cached,
        }
    }
}

/// The transcript-to-summary pipeline over injected capabilities.
///
/// The cache is the only component with state surviving a request; it is
/// injected and explicitly owned by the caller, with its lifecycle tied
/// to the process, never a module-level singleton.
pub struct SummaryPipeline<S, T, M, C>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    C: ResultCache + Send + Sync + 'static,
{
    config: SummaryConfig,
    summarizer: S,
    transcript_source: T,
    metadata_source: M,
    cache: C,
    keyword_extractor: KeywordExtractor,
}

impl<S, T, M, C> SummaryPipeline<S, T, M, C>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    C: ResultCache + Send + Sync + 'static,
{
    /// Runs the full pipeline for one video URL: fetch, normalize,
    /// chunk, summarize, extract keywords, assemble and cache.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, url: &str) -> Result<SummaryOutput, Error> {
        let video_id = url::extract_video_id(url)?;
        let fingerprint = Fingerprint::new(&video_id, &self.config.fingerprint_key());

        if self.config.cache_enabled {
            if let Some(record) = self.cache.get(&fingerprint) {
                tracing::info!(%video_id, "Returning cached summary");
                return Ok(SummaryOutput {
                    record,
                    cached: true,
                });
            }
        }

        let raw_transcript = self
            .transcript_source
            .fetch_transcript(&video_id)
            .await?;

        // Metadata is best-effort; a failure degrades the response, it
        // never fails the request.
        let video = match self.metadata_source.fetch_metadata(&video_id).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::warn!(%video_id, error = ?e, "Failed to fetch video metadata");
                None
            }
        };

        let normalized = transcript::normalize(&raw_transcript)?;
        let length = normalized.chars().count();
        if length < self.config.min_transcript_length {
            return Err(Error::TranscriptTooShort {
                length,
                min: self.config.min_transcript_length,
            });
        }
        let normalized = if length > self.config.max_transcript_length {
            tracing::debug!(
                length,
                max = self.config.max_transcript_length,
                "Truncating over-long transcript"
            );
            text::truncate_at_sentence(&normalized, self.config.max_transcript_length).to_string()
        } else {
            normalized
        };

        let chunks = chunker::chunk(&normalized, self.config.chunk_max_length)?;

        let keywords = if self.config.enable_keyword_extraction {
            self.keyword_extractor
                .extract(&normalized, self.config.max_keywords)?
        } else {
            Vec::new()
        };
        let keyword_terms: Vec<String> = keywords.into_iter().map(|k| k.term).collect();

        let composer = SummaryComposer::new(&self.summarizer, self.config.compose_options());
        let composed = composer.compose(&chunks, &keyword_terms).await?;

        let record = SummaryRecord {
            video_id,
            summary: composed.text,
            key_points: composed.key_points,
            content_type: composed.content_type,
            confidence: composed.confidence,
            keywords: keyword_terms,
            flagged_short: composed.flagged_short,
            video,
        };

        if self.config.cache_enabled {
            self.cache
                .put(fingerprint, record.clone(), self.config.cache_ttl());
        }

        Ok(SummaryOutput {
            record,
            cached: false,
        })
    }
}
