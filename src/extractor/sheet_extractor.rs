use crate::config::{SheetGroup, SheetLayout};
use crate::error::Result;
use crate::parser::{is_header_row, split_term_translation};
use crate::vocabulary::{Level, VocabularyEntry};
use crate::workbook::{SheetRows, SheetSource};
use std::time::{Duration, Instant};

/// Outcome of reading one sheet group.
#[derive(Debug, Clone)]
pub struct GroupResult {
    pub sheet: String,
    pub label: String,
    pub level: Level,
    /// False when the workbook has no sheet with this name.
    pub found: bool,
    pub entries: Vec<VocabularyEntry>,
}

impl GroupResult {
    fn new(group: &SheetGroup, found: bool, entries: Vec<VocabularyEntry>) -> Self {
        Self {
            sheet: group.sheet.clone(),
            label: group.display_label().to_string(),
            level: group.level,
            found,
            entries,
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub struct ExtractionProgress {
    pub groups: Vec<GroupResult>,
    pub total_groups: usize,
    pub start_time: Instant,
}

impl ExtractionProgress {
    pub fn new(total_groups: usize) -> Self {
        Self {
            groups: Vec::with_capacity(total_groups),
            total_groups,
            start_time: Instant::now(),
        }
    }

    pub fn push(&mut self, result: GroupResult) {
        self.groups.push(result);
    }

    pub fn groups_processed(&self) -> usize {
        self.groups.len()
    }

    pub fn current_group(&self) -> Option<&GroupResult> {
        self.groups.last()
    }

    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(GroupResult::count).sum()
    }

    pub fn missing_sheets(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| !g.found)
            .map(|g| g.sheet.as_str())
            .collect()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// All entries in group order, then row order.
    pub fn entries(&self) -> Vec<VocabularyEntry> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter().cloned())
            .collect()
    }
}

pub struct SheetExtractor {
    skip_rows: usize,
}

impl SheetExtractor {
    pub fn new() -> Self {
        Self { skip_rows: 1 }
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    pub fn extract_all<S: SheetSource>(
        &self,
        source: &mut S,
        groups: &[SheetGroup],
        progress_callback: Option<&dyn Fn(&ExtractionProgress)>,
    ) -> Result<ExtractionProgress> {
        let mut progress = ExtractionProgress::new(groups.len());

        for group in groups {
            let result = self.extract_sheet(source, group)?;
            log::debug!("{}: {} entries", result.label, result.count());
            progress.push(result);

            if let Some(callback) = progress_callback {
                callback(&progress);
            }
        }

        Ok(progress)
    }

    pub fn extract_sheet<S: SheetSource>(
        &self,
        source: &mut S,
        group: &SheetGroup,
    ) -> Result<GroupResult> {
        let Some(rows) = source.read_sheet(&group.sheet)? else {
            log::debug!("Sheet '{}' not present, skipping", group.sheet);
            return Ok(GroupResult::new(group, false, Vec::new()));
        };

        let entries = extract_group(group, &rows, self.skip_rows);
        Ok(GroupResult::new(group, true, entries))
    }
}

impl Default for SheetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Read every data row of a sheet according to the group's layout.
///
/// Rows without a usable term and heading rows produce no entry.
pub fn extract_group(
    group: &SheetGroup,
    rows: &SheetRows,
    skip_rows: usize,
) -> Vec<VocabularyEntry> {
    let level = group.level;
    let mut entries = Vec::new();
    let mut topic = String::new();

    for row in rows.data_rows(skip_rows) {
        let entry = match group.layout {
            SheetLayout::Combined { column } => combined_entry(rows.cell(row, column), level),
            SheetLayout::TopicHeaders { column } => {
                topic_entry(rows.cell(row, column), level, &mut topic, is_header_row)
            }
            SheetLayout::TopicMarkers { column } => {
                topic_entry(rows.cell(row, column), level, &mut topic, |cell| {
                    cell.contains('#')
                })
            }
            SheetLayout::Columns { term, translation } => {
                columns_entry(rows.cell(row, term), rows.cell(row, translation), level)
            }
            SheetLayout::Phrasal {
                term,
                translation,
                definition,
            } => phrasal_entry(
                rows.cell(row, term),
                rows.cell(row, translation),
                rows.cell(row, definition),
                level,
            ),
        };

        match entry {
            Some(entry) => entries.push(entry),
            None => log::trace!("{} row {}: no entry", group.sheet, row + 1),
        }
    }

    entries
}

fn combined_entry(cell: Option<&str>, level: Level) -> Option<VocabularyEntry> {
    let (term, translation) = split_term_translation(cell)?;
    if term.is_empty() || is_header_row(&term) {
        return None;
    }
    Some(VocabularyEntry::new(term, translation, level))
}

fn topic_entry<F>(
    cell: Option<&str>,
    level: Level,
    topic: &mut String,
    is_topic_row: F,
) -> Option<VocabularyEntry>
where
    F: Fn(&str) -> bool,
{
    let cell = cell.map(str::trim).filter(|c| !c.is_empty())?;

    if is_topic_row(cell) {
        log::trace!("Topic changed to '{}'", cell);
        *topic = cell.to_string();
        return None;
    }

    let (term, translation) = split_term_translation(Some(cell))?;
    if term.is_empty() {
        return None;
    }
    Some(VocabularyEntry::new(term, translation, level).with_topic(topic.clone()))
}

fn columns_entry(
    term: Option<&str>,
    translation: Option<&str>,
    level: Level,
) -> Option<VocabularyEntry> {
    let term = term.map(str::trim).unwrap_or_default();
    if term.is_empty() || is_header_row(term) {
        return None;
    }
    let translation = translation.map(str::trim).unwrap_or_default();
    Some(VocabularyEntry::new(term, translation, level))
}

fn phrasal_entry(
    term: Option<&str>,
    translation: Option<&str>,
    definition: Option<&str>,
    level: Level,
) -> Option<VocabularyEntry> {
    let term = term.map(str::trim).unwrap_or_default();
    if term.is_empty() || is_header_row(term) {
        return None;
    }
    Some(
        VocabularyEntry::new(term, single_line(translation), level)
            .with_definition(single_line(definition)),
    )
}

/// Replace line breaks with spaces and trim.
fn single_line(text: Option<&str>) -> String {
    text.unwrap_or_default()
        .trim()
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sheet_groups;
    use crate::vocabulary::Category;
    use crate::workbook::MemoryWorkbook;

    fn group(level: Level, layout: SheetLayout) -> SheetGroup {
        SheetGroup::new("Sheet", level, layout)
    }

    #[test]
    fn test_level_sheet_row() {
        let rows = SheetRows::from_text(vec![
            vec!["№", "Word"],
            vec!["1", "happy — baxtli"],
        ]);
        let entries = extract_group(
            &group(Level::A1, SheetLayout::Combined { column: 1 }),
            &rows,
            1,
        );

        assert_eq!(entries, vec![VocabularyEntry::new("happy", "baxtli", Level::A1)]);
        assert_eq!(entries[0].category, Category::Level);
    }

    #[test]
    fn test_combined_skips_headers_and_blanks() {
        let rows = SheetRows::from_text(vec![
            vec!["happy — heading row of the table"],
            vec!["UNIT 1"],
            vec![""],
            vec!["   "],
            vec!["run — yugurmoq"],
            vec!["Word formation — so'z yasalishi"],
            vec!["walk"],
        ]);
        let entries = extract_group(
            &group(Level::Verbs, SheetLayout::Combined { column: 0 }),
            &rows,
            1,
        );

        assert_eq!(
            entries,
            vec![
                VocabularyEntry::new("run", "yugurmoq", Level::Verbs),
                VocabularyEntry::new("walk", "", Level::Verbs),
            ]
        );
    }

    #[test]
    fn test_topic_headers_carry_forward() {
        let rows = SheetRows::from_text(vec![
            vec!["Destination B1"],
            vec!["early — erta"],
            vec!["#Topic: Family"],
            vec!["mother — ona"],
            vec!["father — ota"],
            vec!["UNIT 2"],
            vec!["house – uy"],
        ]);
        let entries = extract_group(
            &group(Level::DestB1, SheetLayout::TopicHeaders { column: 0 }),
            &rows,
            1,
        );

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].topic.as_deref(), Some(""));
        assert_eq!(
            entries[1],
            VocabularyEntry::new("mother", "ona", Level::DestB1).with_topic("#Topic: Family")
        );
        assert_eq!(entries[2].topic.as_deref(), Some("#Topic: Family"));
        assert_eq!(entries[3].term, "house");
        assert_eq!(entries[3].topic.as_deref(), Some("UNIT 2"));
    }

    #[test]
    fn test_topic_markers_use_hash() {
        let rows = SheetRows::from_text(vec![
            vec!["heading"],
            vec!["# Travel"],
            vec!["ticket - chipta"],
            vec!["UNIT 4 — not a header here"],
        ]);
        let entries = extract_group(
            &group(Level::DestB2, SheetLayout::TopicMarkers { column: 0 }),
            &rows,
            1,
        );

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            VocabularyEntry::new("ticket", "chipta", Level::DestB2).with_topic("# Travel")
        );
        assert_eq!(entries[1].term, "UNIT 4");
        assert_eq!(entries[1].category, Category::DestB2);
    }

    #[test]
    fn test_two_column_layout() {
        let rows = SheetRows::from_text(vec![
            vec!["English", "Uzbek"],
            vec!["Topic vocabulary", ""],
            vec![" ubiquitous ", " hamma joyda "],
            vec!["solitary", ""],
            vec!["", "yolg'iz"],
        ]);
        let entries = extract_group(
            &group(
                Level::DestC1C2,
                SheetLayout::Columns {
                    term: 0,
                    translation: 1,
                },
            ),
            &rows,
            1,
        );

        assert_eq!(
            entries,
            vec![
                VocabularyEntry::new("ubiquitous", "hamma joyda", Level::DestC1C2),
                VocabularyEntry::new("solitary", "", Level::DestC1C2),
            ]
        );
    }

    #[test]
    fn test_phrasal_row() {
        let rows = SheetRows::from_text(vec![
            vec!["Phrasal verb", "Tarjima", "Definition"],
            vec!["give up", "taslim\nbo'lmoq", "to stop\r\ntrying "],
            vec!["PHRASAL VERBS WITH UP", "", ""],
        ]);
        let entries = extract_group(
            &group(
                Level::Phrasal,
                SheetLayout::Phrasal {
                    term: 0,
                    translation: 1,
                    definition: 2,
                },
            ),
            &rows,
            1,
        );

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.term, "give up");
        assert_eq!(entry.translation, "taslim bo'lmoq");
        assert_eq!(entry.definition.as_deref(), Some("to stop  trying"));
        assert!(!entry.translation.contains('\n'));
        assert!(!entry.definition.as_ref().unwrap().contains(['\n', '\r']));
    }

    #[test]
    fn test_phrasal_missing_columns() {
        let rows = SheetRows::from_text(vec![vec!["header"], vec!["look after"]]);
        let entries = extract_group(
            &group(
                Level::Phrasal,
                SheetLayout::Phrasal {
                    term: 0,
                    translation: 1,
                    definition: 2,
                },
            ),
            &rows,
            1,
        );

        assert_eq!(
            entries,
            vec![VocabularyEntry::new("look after", "", Level::Phrasal).with_definition("")]
        );
    }

    #[test]
    fn test_every_entry_has_term() {
        let rows = SheetRows::from_text(vec![
            vec!["", "heading"],
            vec!["", "— baxtli"],
            vec!["", "—"],
            vec!["", "sun — quyosh"],
        ]);
        let entries = extract_group(
            &group(Level::A2, SheetLayout::Combined { column: 1 }),
            &rows,
            1,
        );

        assert_eq!(entries.len(), 1);
        assert!(entries.iter().all(|e| !e.term.is_empty()));
    }

    #[test]
    fn test_extract_all_skips_missing_sheets() {
        let mut workbook = MemoryWorkbook::new()
            .with_sheet(
                "A1",
                SheetRows::from_text(vec![vec!["", "Word"], vec!["1", "happy — baxtli"]]),
            )
            .with_sheet(
                "Fellar 650 ta",
                SheetRows::from_text(vec![
                    vec!["Fellar"],
                    vec!["go — bormoq"],
                    vec!["come — kelmoq"],
                ]),
            );

        let groups = default_sheet_groups();
        let progress = SheetExtractor::new()
            .extract_all(&mut workbook, &groups, None)
            .unwrap();

        assert_eq!(progress.groups_processed(), groups.len());
        assert_eq!(progress.total_entries(), 3);
        assert_eq!(progress.missing_sheets().len(), 9);
        assert!(!progress.missing_sheets().contains(&"A1"));

        let verbs = &progress.groups[6];
        assert!(verbs.found);
        assert_eq!(verbs.label, "Verbs");
        assert_eq!(verbs.count(), 2);

        let entries = progress.entries();
        assert_eq!(entries[0].term, "happy");
        assert_eq!(entries[1].term, "go");
        assert_eq!(entries[2].term, "come");
    }

    #[test]
    fn test_progress_callback_per_group() {
        let mut workbook = MemoryWorkbook::new();
        let groups = default_sheet_groups();
        let calls = std::cell::Cell::new(0);
        let callback = |progress: &ExtractionProgress| {
            calls.set(calls.get() + 1);
            assert_eq!(progress.groups_processed(), calls.get());
        };

        let progress = SheetExtractor::new()
            .extract_all(&mut workbook, &groups, Some(&callback))
            .unwrap();

        assert_eq!(calls.get(), groups.len());
        assert_eq!(progress.total_entries(), 0);
    }

    #[test]
    fn test_custom_skip_rows() {
        let rows = SheetRows::from_text(vec![
            vec!["Title"],
            vec!["Subtitle"],
            vec!["tree — daraxt"],
        ]);
        let mut workbook = MemoryWorkbook::new().with_sheet("Sheet", rows);
        let result = SheetExtractor::new()
            .with_skip_rows(2)
            .extract_sheet(
                &mut workbook,
                &group(Level::B1, SheetLayout::Combined { column: 0 }),
            )
            .unwrap();

        assert_eq!(result.count(), 1);
        assert_eq!(result.entries[0].term, "tree");
    }
}
