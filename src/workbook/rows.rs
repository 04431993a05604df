use calamine::{Data, Range};

/// A sheet loaded into memory as rows of optional cell text.
///
/// Row and column indices are absolute sheet positions (row 0 is the first
/// sheet row, column 0 is column A), independent of where the used range of
/// the sheet starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRows {
    rows: Vec<Vec<Option<String>>>,
}

impl SheetRows {
    /// Build a grid from string literals, treating empty strings as blank cells.
    pub fn from_text<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::default();
        };

        let rows = (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| range.get_value((row, col)).and_then(cell_text))
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .and_then(|cell| cell.as_deref())
    }

    /// Row indices after the first `skip` rows.
    pub fn data_rows(&self, skip: usize) -> std::ops::Range<usize> {
        skip.min(self.rows.len())..self.rows.len()
    }
}

/// Text of a spreadsheet cell, or `None` when the cell carries no usable value.
///
/// Blank strings, numeric zero, `false`, and error cells count as empty.
pub fn cell_text(value: &Data) -> Option<String> {
    match value {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::Int(0) | Data::Bool(false) => None,
        Data::Float(f) if *f == 0.0 => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_blank_cells() {
        let sheet = SheetRows::from_text(vec![vec!["#", "Word"], vec!["1", ""]]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.cell(0, 1), Some("Word"));
        assert_eq!(sheet.cell(1, 1), None);
        assert_eq!(sheet.cell(5, 0), None);
        assert_eq!(sheet.cell(0, 9), None);
    }

    #[test]
    fn test_data_rows_skip() {
        let sheet = SheetRows::from_text(vec![vec!["a"], vec!["b"], vec!["c"]]);
        assert_eq!(sheet.data_rows(1), 1..3);
        assert_eq!(sheet.data_rows(10), 3..3);
        assert_eq!(SheetRows::default().data_rows(1), 0..0);
    }

    #[test]
    fn test_cell_text_values() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String(String::new())), None);
        assert_eq!(cell_text(&Data::Int(0)), None);
        assert_eq!(cell_text(&Data::Float(0.0)), None);
        assert_eq!(cell_text(&Data::Bool(false)), None);
        assert_eq!(
            cell_text(&Data::String("happy — baxtli".to_string())),
            Some("happy — baxtli".to_string())
        );
        assert_eq!(cell_text(&Data::Int(42)), Some("42".to_string()));
    }

    #[test]
    fn test_from_range_uses_absolute_positions() {
        // Used range starts at B2, so column A and row 1 are implicit blanks
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Word".to_string()));
        range.set_value((2, 1), Data::String("happy — baxtli".to_string()));

        let sheet = SheetRows::from_range(&range);
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.cell(0, 0), None);
        assert_eq!(sheet.cell(1, 1), Some("Word"));
        assert_eq!(sheet.cell(2, 1), Some("happy — baxtli"));
    }

    #[test]
    fn test_from_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(SheetRows::from_range(&range).is_empty());
    }
}
