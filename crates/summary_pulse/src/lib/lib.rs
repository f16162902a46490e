mod chunker;
mod classify;
mod compose;
mod config;
mod error;
mod keywords;
mod llm;
mod pipeline;
mod text;
pub mod tracing;
pub mod transcript;
pub mod yt;

pub use chunker::chunk;
pub use classify::{classify, Classification};
pub use compose::{ComposeOptions, ComposedSummary, SummaryComposer};
pub use config::SummaryConfig;
pub use error::{Error, ErrorKind};
pub use keywords::{Keyword, KeywordExtractor};
pub use llm::openai;
pub use llm::summarizer::Summarizer;
pub use pipeline::{builder::SummaryPipelineBuilder, SummaryOutput, SummaryPipeline, SummaryResponse};
pub use transcript::{normalize, CaptionSegment, Transcript};
