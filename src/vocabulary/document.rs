use crate::vocabulary::VocabularyEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frequency counts derived from the final entry list.
///
/// Both maps are keyed by the serialized level/category names so that the
/// output JSON lists them in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub by_level: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

impl Tally {
    pub fn from_entries(entries: &[VocabularyEntry]) -> Self {
        let mut tally = Self::default();

        for entry in entries {
            *tally
                .by_level
                .entry(entry.level.as_str().to_string())
                .or_insert(0) += 1;
            *tally
                .by_category
                .entry(entry.category.as_str().to_string())
                .or_insert(0) += 1;
        }

        tally
    }
}

/// The document written to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyDocument {
    pub words: Vec<VocabularyEntry>,
    pub stats: BTreeMap<String, usize>,
    pub category_counts: BTreeMap<String, usize>,
    pub total_words: usize,
}

impl VocabularyDocument {
    pub fn new(words: Vec<VocabularyEntry>) -> Self {
        let Tally {
            by_level,
            by_category,
        } = Tally::from_entries(&words);

        Self {
            total_words: words.len(),
            words,
            stats: by_level,
            category_counts: by_category,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
