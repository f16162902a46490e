use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Error;

/// Common English words carrying no topical signal.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "and", "any", "are", "been", "before",
    "being", "below", "between", "both", "but", "can", "cannot", "could", "did", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "going", "got", "had", "has",
    "have", "having", "her", "here", "hers", "him", "his", "how", "into", "its", "itself", "just",
    "like", "more", "most", "much", "myself", "nor", "not", "now", "off", "once", "only", "other",
    "our", "ours", "out", "over", "own", "really", "same", "she", "should", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "too", "under", "until", "very", "was", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
];

/// One extracted keyword with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub term: String,
    pub score: f64,
}

#[derive(Debug, Default)]
struct TermStats {
    count: usize,
    first_index: usize,
}

/// Frequency-based keyword extraction over stop-word-filtered unigrams
/// and bigrams, with a first-occurrence position boost and optional
/// inverse document frequency weighting from a reference corpus.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    /// (term -> document frequency, corpus size in documents).
    reference_corpus: Option<(HashMap<String, usize>, usize)>,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables IDF weighting against `document_frequencies` observed over
    /// `corpus_size` documents. Without a corpus, scoring degrades to raw
    /// frequency.
    pub fn with_reference_corpus(
        document_frequencies: HashMap<String, usize>,
        corpus_size: usize,
    ) -> Self {
        KeywordExtractor {
            reference_corpus: Some((document_frequencies, corpus_size)),
        }
    }

    /// Returns at most `max_keywords` distinct case-normalized terms,
    /// sorted descending by score, ties broken alphabetically.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn extract(&self, text: &str, max_keywords: usize) -> Result<Vec<Keyword>, Error> {
        if max_keywords == 0 {
            return Err(Error::InvalidConfiguration(
                "max_keywords must be positive".into(),
            ));
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let total_tokens = tokens.len() as f64;

        let mut stats: HashMap<String, TermStats> = HashMap::new();
        for (index, token) in tokens.iter().enumerate() {
            bump(&mut stats, token.clone(), index);
        }
        for (index, (first, second)) in tokens.iter().tuple_windows().enumerate() {
            bump(&mut stats, format!("{first} {second}"), index);
        }

        let mut keywords: Vec<Keyword> = stats
            .into_iter()
            .map(|(term, term_stats)| {
                // Earlier first occurrence boosts the score by up to 50%.
                let position_boost =
                    1.0 + 0.5 * (1.0 - term_stats.first_index as f64 / total_tokens);
                let mut score = term_stats.count as f64 * position_boost;
                if let Some((frequencies, corpus_size)) = &self.reference_corpus {
                    let document_count = *corpus_size as f64;
                    let term_df = frequencies.get(&term).copied().unwrap_or(0) as f64;
                    score *= (1.0 + document_count / (1.0 + term_df)).ln();
                }
                Keyword { term, score }
            })
            .collect();

        keywords.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        keywords.truncate(max_keywords);
        Ok(keywords)
    }
}

fn bump(stats: &mut HashMap<String, TermStats>, term: String, index: usize) {
    stats
        .entry(term)
        .and_modify(|s| s.count += 1)
        .or_insert(TermStats {
            count: 1,
            first_index: index,
        });
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}
