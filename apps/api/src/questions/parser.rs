//! Line tokenizer over generated question text.
//!
//! The repair pass operates on tagged line variants instead of ad hoc string
//! checks, so its edge cases (missing answer, stray prose, unlabeled lines)
//! are testable in isolation.

use std::sync::OnceLock;

use regex::Regex;

use super::category::Category;

/// A classified line of generated output. Blank lines are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Category section header, e.g. "TECHNICAL QUESTIONS:".
    Header(Category),
    /// A "Question ..." line. `index` is present when a "Question <n>:" label
    /// parsed; `text` is the body after the label (or after the bare prefix).
    Question { index: Option<u32>, text: String },
    /// An "Answer ..." line, same shape as `Question`.
    Answer { index: Option<u32>, text: String },
    /// Anything else — prose, markdown noise, preambles.
    Other(String),
}

fn question_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Question\s+(\d+)\s*:\s*(.*)$").unwrap())
}

fn answer_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Answer\s+(\d+)\s*:\s*(.*)$").unwrap())
}

/// Tokenizes generated text into classified lines.
///
/// Header matching is case-insensitive; the "Question"/"Answer" prefixes are
/// case-sensitive, matching what the model is instructed to emit. A line
/// carrying a Question/Answer prefix is never a header, so a question that
/// merely mentions a header string (e.g. "Question 4: What are typical
/// technical questions?") keeps its pair instead of moving the cursor.
pub fn tokenize(content: &str) -> Vec<Line> {
    content
        .lines()
        .filter_map(|raw| {
            let line = raw.trim();
            if line.is_empty() {
                return None;
            }
            if line.starts_with("Question") {
                let (index, text) = split_label(line, "Question", question_label());
                return Some(Line::Question { index, text });
            }
            if line.starts_with("Answer") {
                let (index, text) = split_label(line, "Answer", answer_label());
                return Some(Line::Answer { index, text });
            }
            if let Some(category) = Category::match_header(line) {
                return Some(Line::Header(category));
            }
            Some(Line::Other(line.to_string()))
        })
        .collect()
}

/// Splits "Question 12: body" into (Some(12), "body"). A line with the prefix
/// but no parseable "<n>:" label yields (None, remainder-after-prefix).
fn split_label(line: &str, prefix: &str, label: &Regex) -> (Option<u32>, String) {
    if let Some(caps) = label.captures(line) {
        let index = caps.get(1).and_then(|m| m.as_str().parse().ok());
        (index, caps[2].trim().to_string())
    } else {
        let rest = line[prefix.len()..]
            .trim_start_matches(|c: char| c == 's' || c == ':' || c.is_whitespace())
            .to_string();
        (None, rest)
    }
}
