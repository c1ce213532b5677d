//! Generation-and-Validation Loop — bounded retry around the generation
//! service, with the repair pass as the terminal branch.
//!
//! The model is unreliable about exact counts. Each attempt reuses the same
//! prompt; a count mismatch retries, a service fault propagates immediately.
//! After the last attempt the final text goes through repair, which always
//! satisfies the count/distribution contract.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{GenerationConfig, TextGenerator};

use super::category::Complexity;
use super::distribution::Distribution;
use super::prompts::build_prompt;
use super::repair::repair;

/// Total generation attempts: 1 initial + 2 retries.
pub const MAX_ATTEMPTS: u32 = 3;

fn question_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Question\s+\d+:").unwrap())
}

/// Counts "Question <n>:" markers, case-insensitively.
pub fn count_question_markers(content: &str) -> usize {
    question_marker().find_iter(content).count()
}

/// One question-generation request, inputs already clamped and parsed.
#[derive(Debug, Clone)]
pub struct QuestionRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Pre-clamped to [5, 20] by the handler.
    pub num_questions: u32,
    pub complexity: Complexity,
}

/// Runs the generate → validate → retry loop.
///
/// Returns the raw generated text when an attempt contains exactly the
/// requested number of question markers; otherwise the final attempt's text
/// after the repair pass. A count mismatch can never surface as an error.
pub async fn generate_questions(
    generator: &dyn TextGenerator,
    request: &QuestionRequest,
    distribution: &Distribution,
) -> Result<String, AppError> {
    let prompt = build_prompt(
        &request.resume_text,
        &request.jd_text,
        request.num_questions,
        request.complexity,
        distribution,
    );
    let config = GenerationConfig::default();

    let mut content = String::new();
    for attempt in 1..=MAX_ATTEMPTS {
        content = generator
            .generate(&prompt, &config)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        let found = count_question_markers(&content);
        if found == request.num_questions as usize {
            info!("Generation accepted on attempt {attempt}");
            return Ok(content);
        }

        warn!(
            "Attempt {attempt}/{MAX_ATTEMPTS}: got {found} questions, expected {} — {}",
            request.num_questions,
            if attempt < MAX_ATTEMPTS {
                "retrying"
            } else {
                "repairing"
            }
        );
    }

    Ok(repair(&content, distribution, request.complexity))
}
