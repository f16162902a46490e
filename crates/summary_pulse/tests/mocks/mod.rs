pub mod metadata_source;
pub mod summarizer;
pub mod transcript_source;
