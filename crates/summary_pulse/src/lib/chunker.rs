use crate::{error::Error, text};

/// Splits normalized text into character-bounded chunks for
/// summarization, packing whole sentences greedily.
///
/// A single sentence longer than `max_length` becomes its own oversized
/// chunk; boundaries fall on sentence boundaries only, never mid-word.
/// Concatenating the chunks with a single separating space reconstructs
/// the input exactly.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn chunk(text: &str, max_length: usize) -> Result<Vec<String>, Error> {
    if max_length == 0 {
        return Err(Error::InvalidConfiguration(
            "chunk max_length must be positive".into(),
        ));
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in text::split_sentences(text) {
        let sentence_len = sentence.chars().count();
        if !current.is_empty() && current_len + 1 + sentence_len > max_length {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(sentence);
        current_len += sentence_len;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASTA: &str = "Hello world. This is a test video about cooking pasta. \
        First boil water. Then add salt. Add the pasta and wait ten minutes.";

    #[test]
    fn zero_max_length_is_invalid_configuration() {
        assert!(matches!(
            chunk("some text.", 0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk("", 100).unwrap().is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let chunks = chunk("Just one sentence.", 100).unwrap();
        assert_eq!(chunks, vec!["Just one sentence."]);
    }

    #[test]
    fn concatenated_chunks_reconstruct_the_input() {
        for max_length in [10, 25, 40, 80, 1000] {
            let chunks = chunk(PASTA, max_length).unwrap();
            assert!(!chunks.is_empty());
            assert!(chunks.iter().all(|c| !c.is_empty()));
            assert_eq!(chunks.join(" "), PASTA, "max_length={max_length}");
        }
    }

    #[test]
    fn no_chunk_splits_a_word() {
        let chunks = chunk(PASTA, 40).unwrap();
        for chunk_text in &chunks {
            for word in chunk_text.split_whitespace() {
                assert!(
                    PASTA.split_whitespace().any(|w| w == word),
                    "word {word:?} was split"
                );
            }
        }
    }

    #[test]
    fn chunks_respect_max_length_except_oversized_sentences() {
        let chunks = chunk(PASTA, 40).unwrap();
        assert!(chunks.len() > 1);
        for chunk_text in &chunks {
            let len = chunk_text.chars().count();
            let sentence_count = crate::text::split_sentences(chunk_text).len();
            assert!(
                len <= 40 || sentence_count == 1,
                "multi-sentence chunk over limit: {chunk_text:?}"
            );
        }
    }

    #[test]
    fn oversized_sentence_becomes_its_own_chunk() {
        let text = "Tiny. This sentence is much longer than the configured maximum. End.";
        let chunks = chunk(text, 12).unwrap();
        assert_eq!(
            chunks,
            vec![
                "Tiny.",
                "This sentence is much longer than the configured maximum.",
                "End.",
            ]
        );
    }
}
