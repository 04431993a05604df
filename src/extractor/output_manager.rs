use crate::error::{Result, VocabError};
use crate::extractor::ExtractionProgress;
use crate::vocabulary::{Level, VocabularyDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub workbook: PathBuf,
    pub output: PathBuf,
    pub groups: Vec<GroupSummary>,
    pub missing_sheets: Vec<String>,
    pub total_words: usize,
    pub stats: BTreeMap<String, usize>,
    pub category_counts: BTreeMap<String, usize>,
    pub extraction_duration: Duration,
    pub extraction_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub sheet: String,
    pub label: String,
    pub level: Level,
    pub found: bool,
    pub count: usize,
}

impl ExtractionReport {
    pub fn new(
        workbook: &Path,
        output: &Path,
        progress: &ExtractionProgress,
        document: &VocabularyDocument,
    ) -> Self {
        let groups = progress
            .groups
            .iter()
            .map(|g| GroupSummary {
                sheet: g.sheet.clone(),
                label: g.label.clone(),
                level: g.level,
                found: g.found,
                count: g.count(),
            })
            .collect();

        Self {
            workbook: workbook.to_path_buf(),
            output: output.to_path_buf(),
            groups,
            missing_sheets: progress
                .missing_sheets()
                .into_iter()
                .map(String::from)
                .collect(),
            total_words: document.total_words,
            stats: document.stats.clone(),
            category_counts: document.category_counts.clone(),
            extraction_duration: progress.elapsed(),
            extraction_time: Utc::now(),
        }
    }
}

/// Writes the vocabulary document to its destination file.
pub struct OutputManager {
    output_path: PathBuf,
    pretty: bool,
}

impl OutputManager {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Serialize the document and replace the output file in one step.
    ///
    /// The JSON goes to a temporary file next to the destination first, so an
    /// interrupted or failed write never leaves a truncated output behind.
    pub fn write_document(&self, document: &VocabularyDocument) -> Result<u64> {
        let json = document.to_json(self.pretty)?;

        let parent = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file =
            NamedTempFile::new_in(parent).map_err(|e| self.write_error(e.to_string()))?;
        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;
        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        log::debug!(
            "Wrote {} bytes to {}",
            json.len(),
            self.output_path.display()
        );

        Ok(json.len() as u64)
    }

    fn write_error(&self, message: String) -> VocabError {
        VocabError::OutputWrite {
            path: self.output_path.display().to_string(),
            message,
        }
    }
}
