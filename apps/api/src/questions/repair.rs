//! Deterministic Repair Pass — forces generated text into the exact
//! count/distribution contract.
//!
//! This is the terminal fallback of the pipeline: whatever the generation
//! service produced (including nothing at all), the output contains exactly
//! the planned number of question/answer pairs, grouped by category in
//! canonical order and numbered sequentially. There is no failure path.

use super::category::{Category, Complexity, CATEGORY_COUNT};
use super::distribution::Distribution;
use super::parser::{tokenize, Line};

const MISSING_ANSWER: &str = "No answer available";

/// A question with its answer, numbering labels stripped.
#[derive(Debug, Clone)]
struct QaPair {
    question: String,
    answer: String,
}

/// Rebuilds `content` so it contains exactly the pairs the distribution
/// calls for. Idempotent: repairing repaired output reproduces it.
pub fn repair(content: &str, distribution: &Distribution, complexity: Complexity) -> String {
    let buckets = categorize(content);

    let mut out = String::new();
    let mut counter: u32 = 1;

    for category in Category::ALL {
        let quota = distribution.quota(category) as usize;
        let mut pairs = extract_pairs(&buckets[category.index()]);

        // Quota enforcement: drop from the end, then pad with placeholders.
        pairs.truncate(quota);
        while pairs.len() < quota {
            pairs.push(placeholder_pair(complexity, category, pairs.len() + 1));
        }

        out.push_str(&format!("\n{}:\n\n", category.header()));
        for pair in pairs {
            out.push_str(&format!("Question {counter}: {}\n", pair.question));
            out.push_str(&format!("Answer {counter}: {}\n\n", pair.answer));
            counter += 1;
        }
    }

    out
}

/// Step 1 — Categorize: walk tokenized lines with a current-category cursor.
/// Question/Answer lines land in the current category's bucket; lines before
/// any recognized header are dropped.
fn categorize(content: &str) -> [Vec<Line>; CATEGORY_COUNT] {
    let mut buckets: [Vec<Line>; CATEGORY_COUNT] = std::array::from_fn(|_| Vec::new());
    let mut current: Option<Category> = None;

    for line in tokenize(content) {
        match line {
            Line::Header(category) => current = Some(category),
            Line::Question { .. } | Line::Answer { .. } => {
                if let Some(category) = current {
                    buckets[category.index()].push(line);
                }
            }
            Line::Other(_) => {}
        }
    }

    buckets
}

/// Step 2 — Pair extraction: a Question line begins a pair; an immediately
/// following Answer line is its answer, otherwise a placeholder answer is
/// substituted and only the question line is consumed.
fn extract_pairs(lines: &[Line]) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        match &lines[i] {
            Line::Question { text, .. } => {
                if let Some(Line::Answer { text: answer, .. }) = lines.get(i + 1) {
                    pairs.push(QaPair {
                        question: text.clone(),
                        answer: answer.clone(),
                    });
                    i += 2;
                } else {
                    pairs.push(QaPair {
                        question: text.clone(),
                        answer: MISSING_ANSWER.to_string(),
                    });
                    i += 1;
                }
            }
            // Orphaned Answer lines (no preceding Question) are skipped.
            _ => i += 1,
        }
    }

    pairs
}

/// Step 3 padding — templated pair naming the complexity and category.
fn placeholder_pair(complexity: Complexity, category: Category, ordinal: usize) -> QaPair {
    let name = category.display_name().to_lowercase();
    QaPair {
        question: format!(
            "Additional {} {} question {}",
            complexity.as_str(),
            name,
            ordinal
        ),
        answer: format!(
            "Additional {} {} answer {}",
            complexity.as_str(),
            name,
            ordinal
        ),
    }
}
