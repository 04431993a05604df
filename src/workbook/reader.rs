use crate::error::{Result, VocabError};
use crate::workbook::SheetRows;
use calamine::{open_workbook_auto, Reader, Sheets};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Anything the extractor can pull named sheets from.
pub trait SheetSource {
    fn sheet_names(&self) -> Vec<String>;

    /// Load a sheet by exact name. `Ok(None)` means the sheet does not exist.
    fn read_sheet(&mut self, name: &str) -> Result<Option<SheetRows>>;

    fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names().iter().any(|sheet| sheet == name)
    }
}

/// Spreadsheet file opened through calamine.
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(VocabError::WorkbookNotFound {
                path: path.display().to_string(),
            });
        }

        let workbook = open_workbook_auto(path).map_err(|source| VocabError::Workbook {
            path: path.display().to_string(),
            source,
        })?;

        log::debug!("Opened workbook {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for WorkbookReader {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Option<SheetRows>> {
        if !self.has_sheet(name) {
            return Ok(None);
        }

        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|source| VocabError::Workbook {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(Some(SheetRows::from_range(&range)))
    }
}

/// Workbook held entirely in memory, keyed by sheet name.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, SheetRows>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet<S: Into<String>>(mut self, name: S, rows: SheetRows) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }
}

impl SheetSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Option<SheetRows>> {
        Ok(self.sheets.get(name).cloned())
    }
}
