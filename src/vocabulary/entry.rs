use serde::{Deserialize, Serialize};
use std::fmt;

/// Proficiency tier or special word group a sheet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Verbs,
    #[serde(rename = "Dest B1")]
    DestB1,
    #[serde(rename = "Dest B2")]
    DestB2,
    #[serde(rename = "Dest C1C2")]
    DestC1C2,
    Phrasal,
}

impl Level {
    pub const TIERS: [Level; 6] = [
        Level::A1,
        Level::A2,
        Level::B1,
        Level::B2,
        Level::C1,
        Level::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
            Level::Verbs => "Verbs",
            Level::DestB1 => "Dest B1",
            Level::DestB2 => "Dest B2",
            Level::DestC1C2 => "Dest C1C2",
            Level::Phrasal => "Phrasal",
        }
    }

    /// The category tag is fixed by the level.
    pub fn category(&self) -> Category {
        match self {
            Level::A1 | Level::A2 | Level::B1 | Level::B2 | Level::C1 | Level::C2 => {
                Category::Level
            }
            Level::Verbs => Category::Verbs,
            Level::DestB1 => Category::DestB1,
            Level::DestB2 => Category::DestB2,
            Level::DestC1C2 => Category::DestC1C2,
            Level::Phrasal => Category::Phrasal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Level,
    Verbs,
    #[serde(rename = "dest_b1")]
    DestB1,
    #[serde(rename = "dest_b2")]
    DestB2,
    #[serde(rename = "dest_c1c2")]
    DestC1C2,
    Phrasal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Level => "level",
            Category::Verbs => "verbs",
            Category::DestB1 => "dest_b1",
            Category::DestB2 => "dest_b2",
            Category::DestC1C2 => "dest_c1c2",
            Category::Phrasal => "phrasal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One word/translation pair as it appears in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(rename = "english")]
    pub term: String,
    #[serde(rename = "uzbek")]
    pub translation: String,
    pub level: Level,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl VocabularyEntry {
    pub fn new<T: Into<String>, U: Into<String>>(term: T, translation: U, level: Level) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            level,
            category: level.category(),
            topic: None,
            definition: None,
        }
    }

    pub fn with_topic<S: Into<String>>(mut self, topic: S) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = Some(definition.into());
        self
    }
}
