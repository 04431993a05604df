use crate::error::{UserFriendlyError, VocabError};
use crate::extractor::{ExtractionProgress, ExtractionReport, GroupResult};
use console::{style, Emoji, Term};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Success, message),
            OutputMode::Json => self.print_json_message("success", message),
            OutputMode::Plain => println!("SUCCESS: {}", message),
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => println!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        println!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => println!("STARTING: {}", operation),
            }
        }
    }

    /// One `<label>: <count>` line per finished sheet group.
    pub fn group_result(&self, group: &GroupResult) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                let line = format_group_line(group);
                if !group.found {
                    println!("  {} {}", line, style("(sheet not found)").dim());
                } else if self.use_colors {
                    println!("  {}: {}", group.label, style(group.count()).cyan().bold());
                } else {
                    println!("  {}", line);
                }
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "group",
                    "sheet": group.sheet,
                    "label": group.label,
                    "level": group.level,
                    "found": group.found,
                    "count": group.count(),
                }));
            }
            OutputMode::Plain => println!("{}", format_group_line(group)),
        }
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &VocabError) {
        let user_message = error.user_message();
        self.error(&user_message);

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    eprintln!();
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    // Summary and reporting
    pub fn print_extraction_summary(&self, progress: &ExtractionProgress) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => self.print_human_summary(progress),
            OutputMode::Json => self.print_json_summary(progress),
            OutputMode::Plain => self.print_plain_summary(progress),
        }
    }

    pub fn print_extraction_report(&self, report: &ExtractionReport) {
        match self.mode {
            OutputMode::Human => {
                if !self.quiet {
                    self.print_human_report(report);
                }
            }
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => self.print_plain_report(report),
        }
    }

    // Specialized output methods
    pub fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                println!();
                if self.use_colors {
                    println!("{} {}", SPARKLES, style(title).bold().cyan());
                } else {
                    println!("=== {} ===", title);
                }
                println!();
            }
            OutputMode::Json => {
                self.print_json_object(&serde_json::json!({
                    "type": "header",
                    "title": title
                }));
            }
            OutputMode::Plain => {
                println!("=== {} ===", title);
            }
        }
    }

    pub fn print_separator(&self) {
        if self.quiet {
            return;
        }

        match self.mode {
            OutputMode::Human => {
                if self.use_colors {
                    println!("{}", style("─".repeat(60)).dim());
                } else {
                    println!("{}", "-".repeat(60));
                }
            }
            OutputMode::Plain => {
                println!("{}", "-".repeat(60));
            }
            OutputMode::Json => {}
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Warning => (WARNING, Box::new(|msg| style(msg).yellow().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_summary(&self, progress: &ExtractionProgress) {
        println!();
        self.print_separator();

        if self.use_colors {
            println!(
                "{} {}",
                style("Vocabulary extraction completed!").green().bold(),
                CHECKMARK
            );
        } else {
            println!("✓ Vocabulary extraction completed!");
        }

        println!();
        println!("  Total words:     {}", self.highlight(progress.total_entries()));
        println!(
            "  Sheets read:     {}/{}",
            progress.groups_processed() - progress.missing_sheets().len(),
            progress.total_groups
        );
        println!(
            "  Time taken:      {}",
            self.highlight(format_duration(progress.elapsed()))
        );

        self.print_separator();
    }

    fn print_json_summary(&self, progress: &ExtractionProgress) {
        let summary = serde_json::json!({
            "type": "summary",
            "total_words": progress.total_entries(),
            "groups": progress.groups_processed(),
            "missing_sheets": progress.missing_sheets(),
            "duration_ms": progress.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        self.print_json_object(&summary);
    }

    fn print_plain_summary(&self, progress: &ExtractionProgress) {
        println!("COMPLETED: Vocabulary extraction");
        println!("Total words: {}", progress.total_entries());
        println!("Duration: {:?}", progress.elapsed());
    }

    fn print_human_report(&self, report: &ExtractionReport) {
        self.print_header("Extraction Report");

        println!("Workbook: {}", report.workbook.display());
        println!("Output:   {}", report.output.display());
        println!(
            "Extracted at: {}",
            report.extraction_time.format("%Y-%m-%d %H:%M UTC")
        );
        println!();
        println!("=== TOTAL: {} words ===", self.highlight(report.total_words));
        println!("Stats by level: {}", format_counts(&report.stats));
        println!("Stats by category: {}", format_counts(&report.category_counts));

        if !report.missing_sheets.is_empty() {
            println!();
            println!("Sheets not found:");
            for sheet in &report.missing_sheets {
                println!("  - {}", sheet);
            }
        }
    }

    fn print_plain_report(&self, report: &ExtractionReport) {
        println!("REPORT: Extraction completed");
        println!("Workbook: {}", report.workbook.display());
        println!("Output: {}", report.output.display());
        println!("TOTAL: {} words", report.total_words);
        println!("Stats by level: {}", format_counts(&report.stats));
        println!("Stats by category: {}", format_counts(&report.category_counts));

        if !report.missing_sheets.is_empty() {
            println!("Missing sheets: {}", report.missing_sheets.join(", "));
        }
    }

    fn highlight<T: std::fmt::Display>(&self, value: T) -> String {
        if self.use_colors {
            style(value).cyan().bold().to_string()
        } else {
            value.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

fn format_group_line(group: &GroupResult) -> String {
    format!("{}: {}", group.label, group.count())
}

fn format_counts(counts: &BTreeMap<String, usize>) -> String {
    let body = counts
        .iter()
        .map(|(key, count)| format!("{}: {}", key, count))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

// Progress-aware output wrapper
pub struct ProgressAwareOutput<'a> {
    formatter: &'a OutputFormatter,
    progress_manager: Option<&'a crate::ui::ProgressManager>,
}

impl<'a> ProgressAwareOutput<'a> {
    pub fn new(
        formatter: &'a OutputFormatter,
        progress_manager: Option<&'a crate::ui::ProgressManager>,
    ) -> Self {
        Self {
            formatter,
            progress_manager,
        }
    }

    pub fn suspend_and_print<F>(&self, f: F)
    where
        F: FnOnce(&OutputFormatter),
    {
        if let Some(pm) = self.progress_manager {
            pm.suspend(|| f(self.formatter));
        } else {
            f(self.formatter);
        }
    }

    pub fn group_result(&self, group: &GroupResult) {
        self.suspend_and_print(|f| f.group_result(group));
    }

    pub fn warning(&self, message: &str) {
        self.suspend_and_print(|f| f.warning(message));
    }
}
