pub mod header;
pub mod splitter;

pub use header::is_header_row;
pub use splitter::split_term_translation;
