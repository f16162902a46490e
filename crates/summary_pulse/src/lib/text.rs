//! Sentence-level text utilities shared by the normalizer, chunker and
//! composer.

/// Splits `text` into sentences on terminal punctuation followed by
/// whitespace (or end of input). Trailing text without terminal
/// punctuation forms the last sentence. Returned slices borrow from
/// `text` and carry no surrounding whitespace.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?') {
            let end = idx + ch.len_utf8();
            let at_boundary = match chars.peek() {
                None => true,
                Some((_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Canonical form used to detect repeated caption sentences: lowercased,
/// punctuation stripped, whitespace collapsed.
pub(crate) fn sentence_key(sentence: &str) -> String {
    let filtered: String = sentence
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates `text` at the last complete sentence boundary that fits in
/// `max_chars`. A single leading sentence longer than the limit is kept
/// whole rather than split mid-sentence.
pub(crate) fn truncate_at_sentence(text: &str, max_chars: usize) -> &str {
    if text.chars().count() <= max_chars {
        return text;
    }

    let base = text.as_ptr() as usize;
    let mut end = 0;
    for sentence in split_sentences(text) {
        let sentence_end = sentence.as_ptr() as usize - base + sentence.len();
        let fits = text[..sentence_end].chars().count() <= max_chars;
        if end == 0 || fits {
            end = sentence_end;
        }
        if !fits {
            break;
        }
    }
    text[..end].trim_end()
}
