//! Rule-based content-type classification.
//!
//! A pure scoring function over explicit weighted cue rules, so each
//! rule can be unit tested in isolation. The label with the highest vote
//! total wins; ties fall back to a fixed priority order.

use summary_cache::ContentType;

struct Rule {
    label: ContentType,
    weight: u32,
    cues: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        label: ContentType::Tutorial,
        weight: 2,
        cues: &[
            "how to",
            "step by step",
            "tutorial",
            "guide",
            "walkthrough",
        ],
    },
    // Step-like imperative sequencing.
    Rule {
        label: ContentType::Tutorial,
        weight: 1,
        cues: &["first", "next", "then", "finally", "make sure"],
    },
    Rule {
        label: ContentType::Review,
        weight: 2,
        cues: &["review", "pros and cons", "rating", "unboxing"],
    },
    // Comparative / recommendation vocabulary.
    Rule {
        label: ContentType::Review,
        weight: 1,
        cues: &[
            "recommend",
            "better than",
            "worse than",
            "versus",
            "compared to",
            "verdict",
        ],
    },
    Rule {
        label: ContentType::Educational,
        weight: 2,
        cues: &["explain", "science", "history", "research", "lecture"],
    },
    Rule {
        label: ContentType::Educational,
        weight: 1,
        cues: &["theory", "concept", "definition", "understand", "facts"],
    },
];

/// Tie-break order when two labels collect equal votes.
const PRIORITY: [ContentType; 3] = [
    ContentType::Tutorial,
    ContentType::Review,
    ContentType::Educational,
];

/// Classification outcome: a label from the closed set and the winning
/// vote share in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: ContentType,
    pub confidence: f32,
}

/// Scores `text` against the cue rules. Each cue occurrence contributes
/// the rule's weight in votes; with no votes at all the text is `Other`.
pub fn classify(text: &str) -> Classification {
    let haystack = text.to_lowercase();

    let mut votes = [0u32; 3];
    for rule in RULES {
        let slot = PRIORITY
            .iter()
            .position(|label| *label == rule.label)
            .unwrap_or(0);
        for cue in rule.cues {
            let occurrences = haystack.matches(cue).count() as u32;
            votes[slot] += rule.weight * occurrences;
        }
    }

    let total: u32 = votes.iter().sum();
    if total == 0 {
        return Classification {
            label: ContentType::Other,
            confidence: 0.0,
        };
    }

    // PRIORITY order plus strict comparison makes ties deterministic.
    let mut winner = 0;
    for (slot, count) in votes.iter().enumerate() {
        if *count > votes[winner] {
            winner = slot;
        }
    }

    Classification {
        label: PRIORITY[winner],
        confidence: votes[winner] as f32 / total as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutorial_cues_vote_tutorial() {
        let result = classify("In this tutorial I show you how to poach an egg step by step.");
        assert_eq!(result.label, ContentType::Tutorial);
        assert!(result.confidence > 0.9);
    }

    #[test]
    fn sequencing_words_lean_tutorial() {
        let result = classify("First boil water. Then add salt. Finally serve.");
        assert_eq!(result.label, ContentType::Tutorial);
    }

    #[test]
    fn review_cues_vote_review() {
        let result = classify("My review of this phone: the rating is high, pros and cons below.");
        assert_eq!(result.label, ContentType::Review);
        assert!(result.confidence > 0.9);
    }

    #[test]
    fn comparative_vocabulary_leans_review() {
        let result = classify("It is better than the old model and I recommend it, verdict soon.");
        assert_eq!(result.label, ContentType::Review);
    }

    #[test]
    fn educational_cues_vote_educational() {
        let result = classify("Let me explain the science and history behind this research.");
        assert_eq!(result.label, ContentType::Educational);
    }

    #[test]
    fn no_cues_is_other_with_zero_confidence() {
        let result = classify("cats doing cat activities on camera");
        assert_eq!(result.label, ContentType::Other);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn ties_break_by_fixed_priority_order() {
        // One weight-2 cue each for tutorial and review.
        let result = classify("tutorial rating");
        assert_eq!(result.label, ContentType::Tutorial);
        assert!((result.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn confidence_is_the_winning_vote_share() {
        // tutorial: 2 votes, review: 2 votes from "review" cue -> tie broken
        // to tutorial at share 0.5; add a sequencing cue to tip it.
        let result = classify("tutorial review then");
        assert_eq!(result.label, ContentType::Tutorial);
        assert!((result.confidence - 0.6).abs() < 1e-6);
    }

    #[test]
    fn label_is_always_from_the_closed_set() {
        for text in ["", "tutorial", "review", "science", "unrelated chatter"] {
            let result = classify(text);
            assert!(ContentType::ALL.contains(&result.label));
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
