//! The generation prompt for categorized interview questions.
//!
//! Pure templating — placeholder substitution only, no validation.
//! Counts and complexity are filled in before the resume/JD text so that
//! user-supplied text cannot collide with the remaining placeholders.

use super::category::Complexity;
use super::distribution::Distribution;

/// Master prompt template. Placeholders: {num_questions}, {complexity_upper},
/// {complexity_guideline}, {category_quotas}, {resume_text}, {jd_text}.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer with deep knowledge in various technical domains. Your task is to create EXACTLY {num_questions} relevant interview questions based on a candidate's resume and the job description they're applying for, along with comprehensive, detailed answers.

COMPLEXITY LEVEL: {complexity_upper}
{complexity_guideline}

CRITICAL INSTRUCTION: You MUST generate EXACTLY {num_questions} questions in total, distributed across the following categories:

{category_quotas}

For each question, provide a comprehensive, detailed answer that:
- Thoroughly explains the concept or approach
- Includes specific examples where appropriate
- Mentions best practices and industry standards
- Provides context for why this knowledge is important for the role
- Is at least 150-200 words in length to ensure depth and completeness

IMPORTANT: The answers should be CORRECT ANSWERS that a qualified candidate would ideally provide, not expected answers or evaluation criteria.

Format your response STRICTLY as follows:

TECHNICAL QUESTIONS:

Question 1: [The technical interview question]
Answer 1: [Comprehensive, detailed correct answer with examples and context]

Question 2: [The technical interview question]
Answer 2: [Comprehensive, detailed correct answer with examples and context]

... and so on for all technical questions, then repeat the same layout under
BEHAVIORAL QUESTIONS:, SITUATIONAL QUESTIONS:, CULTURAL/PERSONALITY QUESTIONS:,
and PROBLEM-SOLVING QUESTIONS:, in that order.

CRITICAL: Number questions sequentially across the WHOLE response — do NOT restart numbering within a category. Every question line must be "Question <n>: ..." and every answer line "Answer <n>: ..." with matching numbers.

CRITICAL: ALL questions MUST strictly adhere to the {complexity_upper} complexity level as defined above. Do not mix complexity levels.

Before submitting your response, verify that you have created EXACTLY {num_questions} questions and answers with the correct distribution across categories.

Resume:
{resume_text}

Job Description:
{jd_text}"#;

/// Fills the master template for one generation request.
pub fn build_prompt(
    resume_text: &str,
    jd_text: &str,
    num_questions: u32,
    complexity: Complexity,
    distribution: &Distribution,
) -> String {
    let category_quotas = distribution
        .iter()
        .enumerate()
        .map(|(i, (category, quota))| {
            format!(
                "{}. {} Questions: {} questions",
                i + 1,
                category.display_name(),
                quota
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    QUESTION_PROMPT_TEMPLATE
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{complexity_upper}", &complexity.as_str().to_uppercase())
        .replace("{complexity_guideline}", complexity.guideline())
        .replace("{category_quotas}", &category_quotas)
        .replace("{resume_text}", resume_text)
        .replace("{jd_text}", jd_text)
}
