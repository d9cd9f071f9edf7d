use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{FairDimension, ScoreRow};

/// `| name | F-Score (n/17) | A-Score (n/10) | I-Score (n/8) | R-Score (n/7) |`,
/// found anywhere in the text. Whitespace (including newlines) is allowed
/// between cells; the name cell cannot contain a pipe or a line break.
static SCORE_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    let mut pattern = String::from(r"\|\s*([^|\r\n]*?)\s*\|");
    for dimension in FairDimension::ALL {
        pattern.push_str(&format!(
            r"\s*{}-Score \((\d+)/{}\)\s*\|",
            dimension.label(),
            dimension.max_score()
        ));
    }
    Regex::new(&pattern).expect("SCORE_ROW_REGEX is a valid regex pattern")
});

/// Extracts the first score row from a completion.
///
/// No match is an ordinary outcome and yields [`ScoreRow::unparsed`]. Only the
/// first well-formed row counts, even if the model echoed several tables.
pub fn parse(response_text: &str) -> ScoreRow {
    let Some(captures) = SCORE_ROW_REGEX.captures(response_text) else {
        return ScoreRow::unparsed();
    };

    let mut scores = [0u32; 4];
    for (idx, slot) in scores.iter_mut().enumerate() {
        match captures
            .get(idx + 2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            Some(value) => *slot = value,
            // Digits that overflow u32 fail the whole row.
            None => return ScoreRow::unparsed(),
        }
    }

    let name = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
    ScoreRow::parsed(name, scores)
}
