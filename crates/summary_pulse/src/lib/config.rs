use crate::{compose::ComposeOptions, error::Error};

/// Configuration surface consumed by the pipeline.
///
/// Lengths are in characters. Validation runs once at startup via
/// [`SummaryConfig::validate`]; invalid bounds are fatal, never
/// recoverable mid-request.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    pub max_summary_length: usize,
    pub min_summary_length: usize,
    pub max_transcript_length: usize,
    pub min_transcript_length: usize,
    /// Upper bound for one summarization chunk.
    pub chunk_max_length: usize,
    /// Per-chunk target length as a fraction of the chunk length.
    pub compression_ratio: f64,
    pub max_keywords: usize,
    pub max_key_points: usize,
    pub cache_enabled: bool,
    pub cache_duration_hours: i64,
    pub enable_keyword_extraction: bool,
    pub enable_advanced_summarization: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            max_summary_length: 2000,
            min_summary_length: 200,
            max_transcript_length: 50_000,
            min_transcript_length: 50,
            chunk_max_length: 1000,
            compression_ratio: 0.3,
            max_keywords: 10,
            max_key_points: 5,
            cache_enabled: true,
            cache_duration_hours: 24,
            enable_keyword_extraction: true,
            enable_advanced_summarization: true,
        }
    }
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_summary_length == 0 {
            return Err(Error::InvalidConfiguration(
                "max_summary_length must be positive".into(),
            ));
        }
        if self.max_summary_length <= self.min_summary_length {
            return Err(Error::InvalidConfiguration(
                "max_summary_length must be greater than min_summary_length".into(),
            ));
        }
        if self.min_transcript_length == 0 {
            return Err(Error::InvalidConfiguration(
                "min_transcript_length must be positive".into(),
            ));
        }
        if self.max_transcript_length <= self.min_transcript_length {
            return Err(Error::InvalidConfiguration(
                "max_transcript_length must be greater than min_transcript_length".into(),
            ));
        }
        if self.chunk_max_length == 0 {
            return Err(Error::InvalidConfiguration(
                "chunk_max_length must be positive".into(),
            ));
        }
        if !(self.compression_ratio > 0.0 && self.compression_ratio <= 1.0) {
            return Err(Error::InvalidConfiguration(
                "compression_ratio must be in (0, 1]".into(),
            ));
        }
        if self.enable_keyword_extraction && self.max_keywords == 0 {
            return Err(Error::InvalidConfiguration(
                "max_keywords must be positive when keyword extraction is enabled".into(),
            ));
        }
        if self.cache_enabled && self.cache_duration_hours <= 0 {
            return Err(Error::InvalidConfiguration(
                "cache_duration_hours must be positive when the cache is enabled".into(),
            ));
        }
        Ok(())
    }

    /// Canonical rendering of every option that affects the composed
    /// output; hashed into the cache fingerprint.
    pub fn fingerprint_key(&self) -> String {
        format!(
            "max_summary={};min_summary={};max_transcript={};min_transcript={};chunk={};ratio={};keywords={};key_points={};keyword_extraction={};advanced={}",
            self.max_summary_length,
            self.min_summary_length,
            self.max_transcript_length,
            self.min_transcript_length,
            self.chunk_max_length,
            self.compression_ratio,
            self.max_keywords,
            self.max_key_points,
            self.enable_keyword_extraction,
            self.enable_advanced_summarization,
        )
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache_duration_hours)
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            max_summary_length: self.max_summary_length,
            min_summary_length: self.min_summary_length,
            compression_ratio: self.compression_ratio,
            max_key_points: self.max_key_points,
            advanced: self.enable_advanced_summarization,
        }
    }
}
