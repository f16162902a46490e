use crate::yt::FetchError;

/// Broad error classes, used to map pipeline failures onto an
/// HTTP-equivalent boundary without exposing internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller mistakes: invalid URL, unusable transcript. 400-equivalent.
    Input,
    /// Upstream retrieval failures. 500-equivalent.
    Upstream,
    /// Summarization backend failures, after retry.
    Inference,
    /// Invalid numeric bounds. Fatal at startup, never mid-request.
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("transcript has no usable text")]
    EmptyTranscript,

    #[error("transcript too short to summarize: {length} chars (minimum {min})")]
    TranscriptTooShort { length: usize, min: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no captions available for this video")]
    NoCaptions,

    #[error("video is private or unavailable")]
    PrivateVideo,

    #[error("network error while contacting YouTube: {0}")]
    Network(String),

    #[error("failed to parse YouTube response: {0}")]
    ParseError(&'static str),

    #[error("summarization backend unavailable: {0}")]
    SummarizationUnavailable(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl(_) | Error::EmptyTranscript | Error::TranscriptTooShort { .. } => {
                ErrorKind::Input
            }
            Error::NoCaptions | Error::PrivateVideo | Error::Network(_) | Error::ParseError(_) => {
                ErrorKind::Upstream
            }
            Error::SummarizationUnavailable(_) => ErrorKind::Inference,
            Error::InvalidConfiguration(_) => ErrorKind::Config,
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NoCaptions => Error::NoCaptions,
            FetchError::PrivateVideo => Error::PrivateVideo,
            FetchError::Network(msg) => Error::Network(msg),
            FetchError::Parse(msg) => Error::ParseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_http_equivalents() {
        assert_eq!(Error::InvalidUrl("nope".into()).kind(), ErrorKind::Input);
        assert_eq!(Error::EmptyTranscript.kind(), ErrorKind::Input);
        assert_eq!(Error::NoCaptions.kind(), ErrorKind::Upstream);
        assert_eq!(
            Error::SummarizationUnavailable("down".into()).kind(),
            ErrorKind::Inference
        );
        assert_eq!(
            Error::InvalidConfiguration("bad".into()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn messages_are_single_human_readable_lines() {
        let err = Error::TranscriptTooShort {
            length: 10,
            min: 50,
        };
        let msg = err.to_string();
        assert!(!msg.contains('\n'));
        assert!(msg.contains("10"));
        assert!(msg.contains("50"));
    }
}
