//! Keyword-presence encoding for job postings.
//!
//! A posting lists the keywords detected in it as a comma-separated string.
//! Encoding emits one `1.0`/`0.0` flag per vocabulary term, matched
//! case-insensitively, so every posting in a batch has the vocabulary's
//! dimension. Scatter plots use the first `VISUAL_DIMS` flags.

use log::trace;

use crate::core::LabeledItem;

/// Flags kept per posting for the people-vector scatter plot.
pub const VISUAL_DIMS: usize = 3;

pub const ENERGY_KEYWORDS: [&str; 14] = [
    "energy",
    "renewable",
    "hydrogen",
    "nuclear",
    "grid",
    "utility",
    "transmission",
    "FERC",
    "PUC",
    "regulatory",
    "compliance",
    "EPA",
    "DOE",
    "carbon",
];

/// Ordered keyword list; position i is dimension i of every encoded vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordVocabulary {
    terms: Vec<String>,
}

impl Default for KeywordVocabulary {
    fn default() -> Self {
        Self::energy()
    }
}

impl KeywordVocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn energy() -> Self {
        Self::new(ENERGY_KEYWORDS)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Encodes a comma-separated keyword list as presence flags.
    pub fn encode(&self, detected: &str) -> Vec<f64> {
        let found: Vec<String> = detected
            .to_lowercase()
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        self.terms
            .iter()
            .map(|term| {
                let term = term.to_lowercase();
                if found.iter().any(|k| *k == term) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Share of vocabulary terms present in an encoded vector.
    pub fn relevance(&self, encoded: &[f64]) -> f64 {
        if self.terms.is_empty() {
            return 0.0;
        }
        encoded.iter().sum::<f64>() / self.terms.len() as f64
    }

    /// Builds a rankable item for a posting, keeping the first `dims` flags.
    pub fn posting_item(
        &self,
        title: &str,
        company: &str,
        detected: &str,
        dims: usize,
    ) -> LabeledItem {
        let mut vector = self.encode(detected);
        vector.truncate(dims);
        trace!("Encoded posting {title} - {company}: {vector:?}");
        LabeledItem::new(format!("{title} - {company}"), vector)
    }
}
