const EM_DASH: &str = "\u{2014}";
const EN_DASH: &str = "\u{2013}";
const SPACED_HYPHEN: &str = " - ";

/// Delimiters in priority order. The first one present wins.
const DELIMITERS: [&str; 3] = [EM_DASH, EN_DASH, SPACED_HYPHEN];

/// Split a `term — translation` cell into its two trimmed halves.
///
/// Only the first occurrence of the winning delimiter splits; anything after
/// it, including further dashes, belongs to the translation. Text without any
/// delimiter becomes the term with an empty translation. Returns `None` for
/// absent or blank input.
pub fn split_term_translation(raw: Option<&str>) -> Option<(String, String)> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }

    for delimiter in DELIMITERS {
        if let Some((term, translation)) = text.split_once(delimiter) {
            return Some((term.trim().to_string(), translation.trim().to_string()));
        }
    }

    Some((text.to_string(), String::new()))
}
