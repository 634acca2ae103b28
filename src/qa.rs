//! Question/answer pairs pushed in by the orchestrator

use serde::{Deserialize, Serialize};

/// A question with its pre-computed answer and optional supporting snippets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QaPair {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<String>>,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            evidence: None,
        }
    }
}

/// Ordered working set of QA pairs, in arrival order of the last update.
///
/// Duplicates are allowed; a new batch replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QaSet {
    pairs: Vec<QaPair>,
}

impl QaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, pairs: Vec<QaPair>) {
        self.pairs = pairs;
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QaPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[QaPair] {
        &self.pairs
    }
}

impl From<Vec<QaPair>> for QaSet {
    fn from(pairs: Vec<QaPair>) -> Self {
        Self { pairs }
    }
}

impl<'a> IntoIterator for &'a QaSet {
    type Item = &'a QaPair;
    type IntoIter = std::slice::Iter<'a, QaPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
