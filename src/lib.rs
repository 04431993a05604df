pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod ui;
pub mod vocabulary;
pub mod workbook;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, InputConfig, OutputConfig, SheetGroup, SheetLayout};
pub use error::{Result, UserFriendlyError, VocabError};

// Core functionality re-exports
pub use extractor::{
    ExtractionProgress, ExtractionReport, GroupResult, OutputManager, SheetExtractor,
};
pub use parser::{is_header_row, split_term_translation};
pub use ui::{OutputFormatter, OutputMode, ProgressAwareOutput, ProgressManager};
pub use vocabulary::{Category, Level, Tally, VocabularyDocument, VocabularyEntry};
pub use workbook::{MemoryWorkbook, SheetRows, SheetSource, WorkbookReader};

use std::path::Path;

/// Main library interface: workbook in, vocabulary JSON out.
pub struct VocabExtract {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl VocabExtract {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create an instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Read the configured workbook and write the vocabulary document.
    ///
    /// Nothing is written unless every sheet was read successfully.
    pub fn extract_vocabulary(&self) -> Result<ExtractionReport> {
        self.output_formatter
            .start_operation("Starting vocabulary extraction");

        let mut workbook = WorkbookReader::open(&self.config.input.workbook)?;
        self.output_formatter.debug(&format!(
            "Workbook sheets: {}",
            workbook.sheet_names().join(", ")
        ));

        let progress = self.extract_sheets(&mut workbook)?;
        let document = VocabularyDocument::new(progress.entries());

        let output_manager = OutputManager::new(&self.config.output.path)
            .with_pretty(self.config.output.pretty);
        let bytes_written = output_manager.write_document(&document)?;

        self.output_formatter.success(&format!(
            "Wrote {} words to {} ({})",
            document.total_words,
            output_manager.output_path().display(),
            ui::output::format_bytes(bytes_written)
        ));
        self.output_formatter.print_extraction_summary(&progress);

        Ok(ExtractionReport::new(
            workbook.path(),
            output_manager.output_path(),
            &progress,
            &document,
        ))
    }

    /// Run every configured sheet group against any sheet source.
    pub fn extract_sheets<S: SheetSource>(&self, source: &mut S) -> Result<ExtractionProgress> {
        let sheet_progress = self
            .progress_manager
            .create_sheet_progress(self.config.sheets.len() as u64);
        let output = ProgressAwareOutput::new(&self.output_formatter, Some(&self.progress_manager));

        let progress_callback = |progress: &ExtractionProgress| {
            ui::progress::update_sheet_progress(&sheet_progress, progress);
            if let Some(group) = progress.current_group() {
                output.group_result(group);
            }
        };

        let extractor = SheetExtractor::new().with_skip_rows(self.config.input.skip_rows);
        let progress =
            extractor.extract_all(source, &self.config.sheets, Some(&progress_callback))?;

        ui::progress::finish_progress_with_summary(
            &sheet_progress,
            &format!("Read {} sheets", progress.groups_processed()),
            progress.elapsed(),
        );

        for sheet in progress.missing_sheets() {
            output.warning(&format!("Sheet '{}' not found in workbook", sheet));
        }

        Ok(progress)
    }

    /// Open the workbook and report which configured sheets it contains.
    pub fn inspect_workbook(&self) -> Result<Vec<(SheetGroup, bool)>> {
        let workbook = WorkbookReader::open(&self.config.input.workbook)?;

        Ok(self
            .config
            .sheets
            .iter()
            .map(|group| (group.clone(), workbook.has_sheet(&group.sheet)))
            .collect())
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config()?;
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &VocabError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Extract a vocabulary document from any sheet source with the given groups.
pub fn extract_document<S: SheetSource>(
    source: &mut S,
    groups: &[SheetGroup],
    skip_rows: usize,
) -> Result<VocabularyDocument> {
    let progress = SheetExtractor::new()
        .with_skip_rows(skip_rows)
        .extract_all(source, groups, None)?;
    Ok(VocabularyDocument::new(progress.entries()))
}
