pub mod output_manager;
pub mod sheet_extractor;

pub use output_manager::{ExtractionReport, GroupSummary, OutputManager};
pub use sheet_extractor::{extract_group, ExtractionProgress, GroupResult, SheetExtractor};
