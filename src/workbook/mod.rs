pub mod reader;
pub mod rows;

pub use reader::{MemoryWorkbook, SheetSource, WorkbookReader};
pub use rows::{cell_text, SheetRows};
