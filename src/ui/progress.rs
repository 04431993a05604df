use crate::extractor::ExtractionProgress;
use crate::ui::output::format_duration;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    multi_progress: MultiProgress,
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            enabled,
        }
    }

    pub fn create_sheet_progress(&self, total_sheets: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi_progress.add(ProgressBar::new(total_sheets));
        pb.set_style(
            ProgressStyle::with_template(concat!(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] ",
                "{pos:>2}/{len:2} sheets {msg}",
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb.set_message("Reading workbook...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if self.enabled {
            self.multi_progress.suspend(f)
        } else {
            f()
        }
    }

    pub fn clear(&self) {
        if self.enabled {
            self.multi_progress.clear().ok();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

pub fn update_sheet_progress(pb: &ProgressBar, progress: &ExtractionProgress) {
    pb.set_position(progress.groups_processed() as u64);

    match progress.current_group() {
        Some(group) => pb.set_message(format!(
            "{} ({} words so far)",
            group.label,
            progress.total_entries()
        )),
        None => pb.set_message("Reading workbook..."),
    }
}

pub fn finish_progress_with_summary(pb: &ProgressBar, message: &str, duration: Duration) {
    let final_message = format!("{} (completed in {})", message, format_duration(duration));
    pb.finish_with_message(final_message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::GroupResult;
    use crate::vocabulary::Level;

    #[test]
    fn test_progress_manager_creation() {
        let manager = ProgressManager::new(true);
        assert!(manager.is_enabled());

        let disabled_manager = ProgressManager::new(false);
        assert!(!disabled_manager.is_enabled());
    }

    #[test]
    fn test_disabled_progress_bars() {
        let manager = ProgressManager::new(false);

        let sheet_pb = manager.create_sheet_progress(11);
        assert!(sheet_pb.is_hidden());
    }

    #[test]
    fn test_update_sheet_progress() {
        let pb = ProgressBar::hidden();
        let mut progress = ExtractionProgress::new(2);

        update_sheet_progress(&pb, &progress);
        assert_eq!(pb.position(), 0);

        progress.push(GroupResult {
            sheet: "A1".to_string(),
            label: "A1".to_string(),
            level: Level::A1,
            found: true,
            entries: Vec::new(),
        });
        update_sheet_progress(&pb, &progress);
        assert_eq!(pb.position(), 1);
        assert!(pb.message().starts_with("A1"));
    }
}
