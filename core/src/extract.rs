//! Keyword-proximity value extraction from free text
//!
//! Body-composition reports come out of PDF text extraction as loosely
//! structured token soup ("체중 70.5 kg ... PBF 18,2 %"). The extractor finds
//! the first numeric token within a short window after a known label.

use regex_lite::Regex;
use std::sync::OnceLock;

/// How many tokens after a label occurrence are searched for a value
const LOOKAHEAD_TOKENS: usize = 6;

fn number_pattern() -> &'static Regex {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").unwrap())
}

/// Find the first numeric value near one of the candidate labels.
///
/// Labels are tried in priority order; the first label occurrence with a
/// numeric token in its lookahead window wins. Matching is case-insensitive.
/// Comma decimal separators are normalized to dots. Returns `None` when no
/// label matches or no numeric token follows any match.
pub fn find_labeled_value(text: &str, labels: &[&str]) -> Option<f64> {
    let haystack = text.to_lowercase();
    for label in labels {
        let needle = label.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(pos) = haystack[from..].find(&needle) {
            let start = from + pos + needle.len();
            if let Some(value) = first_number_in_window(&haystack[start..]) {
                return Some(value);
            }
            from = start;
        }
    }
    None
}

/// Scan the first few tokens after a label hit for a parseable number.
fn first_number_in_window(after: &str) -> Option<f64> {
    after
        .split(|c: char| c.is_whitespace() || matches!(c, ':' | '=' | '|' | ';'))
        .filter(|t| !t.is_empty())
        .take(LOOKAHEAD_TOKENS)
        .find_map(|token| {
            let m = number_pattern().find(token)?;
            m.as_str().replace(',', ".").parse::<f64>().ok()
        })
}
