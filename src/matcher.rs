//! Containment matcher
//!
//! Maps arbitrary hovered text to the best matching question of the current
//! QA set. Scoring is a plain substring-containment heuristic:
//!
//! - hovered text contains the question: score = question length
//! - question contains the hovered text: score = hovered length x weight
//! - questions ending with `?` get a small multiplicative bonus
//!
//! Ties keep the first pair in set order. Scores under the threshold match
//! nothing.

mod normalize;

use std::fmt;

use memchr::memmem;

use crate::config::MatcherConfig;
use crate::qa::{QaPair, QaSet};

pub use normalize::{normalize, normalize_opt};

pub struct MatchEngine {
    config: MatcherConfig,
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("min_score", &self.config.min_score)
            .finish_non_exhaustive()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Score one normalized question against normalized hovered text
    pub fn score(&self, hovered: &str, question: &str) -> f64 {
        if question.is_empty() {
            return 0.0;
        }

        let mut score = if contains(hovered, question) {
            char_len(question) as f64
        } else if contains(question, hovered) {
            char_len(hovered) as f64 * self.config.reverse_containment_weight
        } else {
            0.0
        };

        if question.ends_with('?') {
            score *= self.config.question_bonus;
        }

        score
    }

    /// Pick the pair whose question best matches `hovered_text`.
    ///
    /// Returns `None` for weak input (too short, empty set) or when the top
    /// score stays under the threshold.
    pub fn pick_best_answer<'a>(&self, hovered_text: &str, qa_set: &'a QaSet) -> Option<&'a QaPair> {
        let (pair, score) = self.best_candidate(hovered_text, qa_set)?;
        if score < self.config.min_score {
            return None;
        }
        Some(pair)
    }

    /// Highest scoring pair and its raw score, before the threshold is applied
    pub fn best_candidate<'a>(
        &self,
        hovered_text: &str,
        qa_set: &'a QaSet,
    ) -> Option<(&'a QaPair, f64)> {
        if qa_set.is_empty() {
            return None;
        }

        let hovered = normalize(hovered_text);
        if hovered.is_empty() || char_len(&hovered) < self.config.min_text_chars {
            return None;
        }

        let mut best: Option<&QaPair> = None;
        let mut best_score = 0.0;

        for qa in qa_set {
            let question = normalize(&qa.question);
            if question.is_empty() {
                continue;
            }

            let score = self.score(&hovered, &question);
            // Strict comparison: the first pair wins ties
            if score > best_score {
                best_score = score;
                best = Some(qa);
            }
        }

        best.map(|qa| (qa, best_score))
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
