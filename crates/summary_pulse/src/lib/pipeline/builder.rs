use summary_cache::ResultCache;

use crate::{
    config::SummaryConfig,
    error::Error,
    keywords::KeywordExtractor,
    yt::{MetadataSource, TranscriptSource},
    Summarizer, SummaryPipeline,
};

pub struct SummaryPipelineBuilder<S = (), T = (), M = (), C = ()> {
    config: SummaryConfig,
    summarizer: S,
    transcript_source: T,
    metadata_source: M,
    cache: C,
    keyword_extractor: KeywordExtractor,
}

impl SummaryPipelineBuilder {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            summarizer: (),
            transcript_source: (),
            metadata_source: (),
            cache: (),
            keyword_extractor: KeywordExtractor::new(),
        }
    }
}

impl<S, T, M, C> SummaryPipelineBuilder<S, T, M, C> {
    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<S2, T, M, C> {
        SummaryPipelineBuilder {
            config: self.config,
            summarizer,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            cache: self.cache,
            keyword_extractor: self.keyword_extractor,
        }
    }

    pub fn transcript_source<T2: TranscriptSource + Send + Sync + 'static>(
        self,
        transcript_source: T2,
    ) -> SummaryPipelineBuilder<S, T2, M, C> {
        SummaryPipelineBuilder {
            config: self.config,
            summarizer: self.summarizer,
            transcript_source,
            metadata_source: self.metadata_source,
            cache: self.cache,
            keyword_extractor: self.keyword_extractor,
        }
    }

    pub fn metadata_source<M2: MetadataSource + Send + Sync + 'static>(
        self,
        metadata_source: M2,
    ) -> SummaryPipelineBuilder<S, T, M2, C> {
        SummaryPipelineBuilder {
            config: self.config,
            summarizer: self.summarizer,
            transcript_source: self.transcript_source,
            metadata_source,
            cache: self.cache,
            keyword_extractor: self.keyword_extractor,
        }
    }

    pub fn cache<C2: ResultCache + Send + Sync + 'static>(
        self,
        cache: C2,
    ) -> SummaryPipelineBuilder<S, T, M, C2> {
        SummaryPipelineBuilder {
            config: self.config,
            summarizer: self.summarizer,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            cache,
            keyword_extractor: self.keyword_extractor,
        }
    }

    /// Replaces the default extractor, e.g. to configure a reference
    /// corpus for IDF weighting.
    pub fn keyword_extractor(mut self, keyword_extractor: KeywordExtractor) -> Self {
        self.keyword_extractor = keyword_extractor;
        self
    }
}

impl<S, T, M, C> SummaryPipelineBuilder<S, T, M, C>
where
    S: Summarizer + Send + Sync + 'static,
    T: TranscriptSource + Send + Sync + 'static,
    M: MetadataSource + Send + Sync + 'static,
    C: ResultCache + Send + Sync + 'static,
{
    /// Validates the configuration and assembles the pipeline. Invalid
    /// bounds fail here, at startup.
    pub fn build(self) -> Result<SummaryPipeline<S, T, M, C>, Error> {
        self.config.validate()?;
        Ok(SummaryPipeline {
            config: self.config,
            summarizer: self.summarizer,
            transcript_source: self.transcript_source,
            metadata_source: self.metadata_source,
            cache: self.cache,
            keyword_extractor: self.keyword_extractor,
        })
    }
}
