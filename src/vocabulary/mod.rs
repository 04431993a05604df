pub mod document;
pub mod entry;

pub use document::{Tally, VocabularyDocument};
pub use entry::{Category, Level, VocabularyEntry};
