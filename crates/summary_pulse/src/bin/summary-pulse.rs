use clap::{Parser, Subcommand};
use summary_cache::InMemoryCache;
use summary_pulse::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, yt::captions::CaptionClient,
    SummaryConfig, SummaryPipelineBuilder,
};

#[derive(Parser)]
#[command(name = "summary-pulse", about = "YouTube transcript summarizer")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Maximum summary length in characters
    #[arg(long, env = "MAX_SUMMARY_LENGTH", default_value = "2000")]
    max_summary_length: usize,

    /// Minimum summary length before the result is flagged as short
    #[arg(long, env = "MIN_SUMMARY_LENGTH", default_value = "200")]
    min_summary_length: usize,

    /// Transcripts longer than this are truncated at a sentence boundary
    #[arg(long, env = "MAX_TRANSCRIPT_LENGTH", default_value = "50000")]
    max_transcript_length: usize,

    /// Transcripts shorter than this are rejected
    #[arg(long, env = "MIN_TRANSCRIPT_LENGTH", default_value = "50")]
    min_transcript_length: usize,

    /// Maximum characters per summarization chunk
    #[arg(long, env = "CHUNK_MAX_LENGTH", default_value = "1000")]
    chunk_max_length: usize,

    /// Maximum number of extracted keywords
    #[arg(long, env = "MAX_KEYWORDS", default_value = "10")]
    max_keywords: usize,

    #[arg(long, env = "CACHE_ENABLED", default_value = "true", action = clap::ArgAction::Set)]
    cache_enabled: bool,

    #[arg(long, env = "CACHE_DURATION_HOURS", default_value = "24")]
    cache_duration_hours: i64,

    #[arg(long, env = "ENABLE_KEYWORD_EXTRACTION", default_value = "true", action = clap::ArgAction::Set)]
    enable_keyword_extraction: bool,

    /// Content-type classification and key-point selection
    #[arg(long, env = "ENABLE_ADVANCED_SUMMARIZATION", default_value = "true", action = clap::ArgAction::Set)]
    enable_advanced_summarization: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize one video and print the result as JSON
    Run {
        /// YouTube video URL
        url: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = SummaryConfig {
        max_summary_length: cli.max_summary_length,
        min_summary_length: cli.min_summary_length,
        max_transcript_length: cli.max_transcript_length,
        min_transcript_length: cli.min_transcript_length,
        chunk_max_length: cli.chunk_max_length,
        max_keywords: cli.max_keywords,
        cache_enabled: cli.cache_enabled,
        cache_duration_hours: cli.cache_duration_hours,
        enable_keyword_extraction: cli.enable_keyword_extraction,
        enable_advanced_summarization: cli.enable_advanced_summarization,
        ..Default::default()
    };

    let captions = CaptionClient::new();
    let pipeline = SummaryPipelineBuilder::new(config)
        .summarizer(OpenAIClient::new(&cli.openai_key))
        .transcript_source(captions.clone())
        .metadata_source(captions)
        .cache(InMemoryCache::new())
        .build()?;

    match cli.command {
        Command::Run { url } => {
            tracing::info!(%url, "Summarizing video...");
            let output = pipeline.run(&url).await?;
            let response = output.into_response();
            let json = if cli.pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
