//! Cleanup of raw text extracted from insurance claim documents.
//!
//! PDF and OCR extraction leaves blank lines, control bytes and long runs of
//! separator glyphs behind. [`normalize_document_text`] removes them before
//! the text is shown to the rep or handed to the line-item extractor.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of this many identical junk characters (or more) are removed.
const MIN_JUNK_RUN: usize = 4;

static EXCESS_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Failed to compile newline regex"));

/// Clean raw extracted document text.
///
/// Steps, in order:
/// 1. trim every line and drop the empty ones
/// 2. drop characters outside printable ASCII, keeping tab, LF and CR
/// 3. remove runs of 4+ identical junk characters (see [`is_junk`])
/// 4. cap runs of newlines at two
/// 5. trim the result
///
/// Step 1 runs before anything else, so blank lines present in the input are
/// removed entirely. A blank line only survives when steps 2-3 empty a line.
///
/// # Example
///
/// ```
/// use scope_builder_mcp_server::domain::normalize_document_text;
///
/// let cleaned = normalize_document_text("  Roof \n\n\n ********** \nGutters  ");
/// assert_eq!(cleaned, "Roof\n\nGutters");
/// ```
pub fn normalize_document_text(text: &str) -> String {
    let without_blank_lines = text
        .split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let printable: String = without_blank_lines
        .chars()
        .filter(|&c| is_printable(c))
        .collect();

    let without_junk = remove_repeated_junk(&printable);
    let collapsed = EXCESS_NEWLINES.replace_all(&without_junk, "\n\n");

    collapsed.trim().to_string()
}

// BOM counts as whitespace for line trimming
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_printable(c: char) -> bool {
    matches!(c as u32, 32..=126 | 9 | 10 | 13)
}

/// A character eligible for run removal.
///
/// Word characters, whitespace, `-`, `$` and `.` are exempt, so dashed rules,
/// dollar amounts and dot leaders survive.
fn is_junk(c: char) -> bool {
    !(c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_ascii_whitespace()
        || matches!(c, '-' | '$' | '.'))
}

fn remove_repeated_junk(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&c).is_some() {
            run += 1;
        }

        if !(is_junk(c) && run >= MIN_JUNK_RUN) {
            cleaned.extend(std::iter::repeat(c).take(run));
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        assert_eq!(normalize_document_text("Line1\n\n\n\nLine2"), "Line1\nLine2");
        assert_eq!(normalize_document_text("  a  \n \t \n  b"), "a\nb");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            normalize_document_text("Claim #123\r\nDeductible: $1,000\r\n"),
            "Claim #123\nDeductible: $1,000"
        );
    }

    #[test]
    fn test_control_characters_stripped() {
        assert_eq!(normalize_document_text("Ro\u{7}of\u{0}"), "Roof");
        assert_eq!(normalize_document_text("Caf\u{e9} \u{2014} shingles"), "Caf  shingles");
    }

    #[test]
    fn test_tabs_kept() {
        assert_eq!(normalize_document_text("Qty\t12 SQ"), "Qty\t12 SQ");
    }

    #[test]
    fn test_emptied_line_leaves_single_blank_line() {
        assert_eq!(normalize_document_text("Line1\n\u{7}\nLine2"), "Line1\n\nLine2");
        assert_eq!(
            normalize_document_text("Line1\n****\n#####\nLine2"),
            "Line1\n\nLine2"
        );
    }

    #[test]
    fn test_hyphen_runs_preserved() {
        assert_eq!(normalize_document_text("----------"), "----------");
        assert_eq!(normalize_document_text("Total........$500"), "Total........$500");
        assert_eq!(normalize_document_text("$$$$"), "$$$$");
        assert_eq!(normalize_document_text("____ signature"), "____ signature");
    }

    #[test]
    fn test_junk_runs_removed() {
        assert_eq!(normalize_document_text("**********"), "");
        assert_eq!(normalize_document_text("Roof!!!!ing"), "Roofing");
        assert_eq!(normalize_document_text("==== Totals ===="), "Totals");
    }

    #[test]
    fn test_short_or_mixed_runs_kept() {
        assert_eq!(normalize_document_text("***"), "***");
        assert_eq!(normalize_document_text("*#*#*#*#"), "*#*#*#*#");
        assert_eq!(normalize_document_text("Wow!!!"), "Wow!!!");
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let clean = "RCV: $12,400.00\nRemove laminated comp. shingles (32.5 SQ)\nDrip edge - 210 LF";
        assert_eq!(normalize_document_text(clean), clean);
    }

    #[test]
    fn test_idempotent_on_cleaned_text() {
        let inputs = [
            "  Header  \n\n\n Body line\u{1}\n trailing ~~~~~",
            "Tear off\t3 layers\r\n\r\nReplace decking",
            "",
        ];

        for input in inputs {
            let once = normalize_document_text(input);
            assert_eq!(normalize_document_text(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(normalize_document_text(""), "");
        assert_eq!(normalize_document_text(" \n\t\n "), "");
    }
}
