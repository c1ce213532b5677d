//! Axum route handlers for the question generation API.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::pdf;
use crate::state::AppState;

use super::category::{Category, Complexity};
use super::distribution::Distribution;
use super::generator::{generate_questions, QuestionRequest};

const MIN_QUESTIONS: u32 = 5;
const MAX_QUESTIONS: u32 = 20;
const DEFAULT_QUESTIONS: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub num_questions: u32,
    pub distribution: Distribution,
    pub complexity: Complexity,
}

#[derive(Debug, Deserialize)]
pub struct DistributionRequest {
    pub num_questions: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub distribution: Distribution,
    pub total: u32,
}

/// One uploaded file part, buffered in memory.
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Multipart fields: `resume` (PDF), `jd` (PDF), `num_questions` (clamped to
/// [5, 20], default 10), `complexity` (default intermediate).
/// Runs the full pipeline: plan distribution → build prompt → generate with
/// validation retries → repair if still off-count.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut resume: Option<UploadedFile> = None;
    let mut jd: Option<UploadedFile> = None;
    let mut num_questions = DEFAULT_QUESTIONS;
    let mut complexity = Complexity::Intermediate;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => resume = Some(read_file_field(field).await?),
            "jd" => jd = Some(read_file_field(field).await?),
            "num_questions" => {
                let raw = read_text_field(field).await?;
                num_questions = parse_question_count(&raw)?;
            }
            "complexity" => {
                let raw = read_text_field(field).await?;
                complexity = Complexity::parse(raw.trim());
            }
            _ => {} // unknown parts ignored
        }
    }

    let (resume, jd) = match (resume, jd) {
        (Some(resume), Some(jd)) => (resume, jd),
        _ => {
            return Err(AppError::Validation(
                "Both resume and job description files are required".to_string(),
            ))
        }
    };

    if resume.filename.is_empty()
        || jd.filename.is_empty()
        || resume.bytes.is_empty()
        || jd.bytes.is_empty()
    {
        return Err(AppError::Validation(
            "Both files must be selected".to_string(),
        ));
    }

    let resume_text = pdf::extract_text(resume.bytes, "resume").await?;
    let jd_text = pdf::extract_text(jd.bytes, "job description").await?;

    let distribution = Distribution::plan(num_questions);
    let request = QuestionRequest {
        resume_text,
        jd_text,
        num_questions,
        complexity,
    };

    info!(
        "Generating {num_questions} {} questions",
        complexity.as_str()
    );
    let content = generate_questions(state.generator.as_ref(), &request, &distribution).await?;

    Ok(Json(GenerateResponse {
        content,
        num_questions,
        distribution,
        complexity,
    }))
}

/// GET /categories
///
/// Returns the fixed ordered list of question categories.
pub async fn handle_categories() -> Json<Value> {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();
    Json(json!({ "categories": categories }))
}

/// GET /complexity-levels
///
/// Returns the fixed list of complexity tiers.
pub async fn handle_complexity_levels() -> Json<Value> {
    let levels: Vec<&str> = Complexity::ALL.iter().map(|c| c.as_str()).collect();
    Json(json!({ "levels": levels }))
}

/// POST /distribution
///
/// Previews the planner output for a question count, using the same clamping
/// as /generate.
pub async fn handle_distribution(
    Json(request): Json<DistributionRequest>,
) -> Json<DistributionResponse> {
    let clamped = request
        .num_questions
        .unwrap_or(DEFAULT_QUESTIONS)
        .clamp(MIN_QUESTIONS, MAX_QUESTIONS);
    let distribution = Distribution::plan(clamped);

    Json(DistributionResponse {
        total: distribution.total(),
        distribution,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

/// Parses the `num_questions` form field: non-numeric input is a client
/// error, out-of-range values clamp to [MIN_QUESTIONS, MAX_QUESTIONS].
/// Shared policy with /distribution, which receives the count as JSON.
fn parse_question_count(raw: &str) -> Result<u32, AppError> {
    let n = raw.trim().parse::<i64>().map_err(|_| {
        AppError::Validation(format!("num_questions must be an integer, got '{raw}'"))
    })?;
    Ok(n.clamp(MIN_QUESTIONS as i64, MAX_QUESTIONS as i64) as u32)
}

async fn read_file_field(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?
        .to_vec();
    Ok(UploadedFile { filename, bytes })
}

async fn read_text_field(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{GenerationConfig, LlmError, TextGenerator};
    use crate::routes::build_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// A generator the routing tests never expect to reach.
    struct UnreachableGenerator;

    #[async_trait]
    impl TextGenerator for UnreachableGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, LlmError> {
            panic!("generator must not be called for rejected requests");
        }
    }

    fn test_router() -> axum::Router {
        build_router(AppState {
            generator: Arc::new(UnreachableGenerator),
        })
    }

    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    fn multipart_file(name: &str, filename: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
             filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n{content}\r\n"
        )
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_without_jd_part_is_rejected() {
        let body = format!(
            "{}--{BOUNDARY}--\r\n",
            multipart_file("resume", "resume.pdf", "%PDF-1.4 fake")
        );
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(
            json["error"],
            "Both resume and job description files are required"
        );
    }

    #[tokio::test]
    async fn test_generate_with_unselected_files_is_rejected() {
        let body = format!(
            "{}{}--{BOUNDARY}--\r\n",
            multipart_file("resume", "", ""),
            multipart_file("jd", "", "")
        );
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Both files must be selected");
    }

    #[test]
    fn test_question_count_clamps_out_of_range_values() {
        // The /generate multipart field goes through this exact helper.
        assert_eq!(parse_question_count("100").unwrap(), 20);
        assert_eq!(parse_question_count("3").unwrap(), 5);
        assert_eq!(parse_question_count("-2").unwrap(), 5);
        assert_eq!(parse_question_count(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_question_count_rejects_non_numeric_input() {
        match parse_question_count("plenty") {
            Err(AppError::Validation(msg)) => assert!(msg.contains("plenty")),
            other => panic!("expected AppError::Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_with_non_numeric_count_is_rejected() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; \
             name=\"num_questions\"\r\n\r\nplenty\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("num_questions must be an integer"));
    }

    #[tokio::test]
    async fn test_distribution_clamps_oversized_count() {
        let request = Request::builder()
            .method("POST")
            .uri("/distribution")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"num_questions": 100}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["total"], 20);
        let quotas: u64 = json["distribution"]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum();
        assert_eq!(quotas, 20);
    }

    #[tokio::test]
    async fn test_distribution_defaults_to_ten() {
        let request = Request::builder()
            .method("POST")
            .uri("/distribution")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        let json = response_json(response).await;
        assert_eq!(json["total"], 10);
        assert_eq!(json["distribution"]["Technical"], 5);
    }

    #[tokio::test]
    async fn test_categories_listed_in_canonical_order() {
        let request = Request::builder()
            .uri("/categories")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        let json = response_json(response).await;
        assert_eq!(
            json["categories"],
            json!([
                "Technical",
                "Behavioral",
                "Situational",
                "Cultural/Personality",
                "Problem-Solving"
            ])
        );
    }

    #[tokio::test]
    async fn test_complexity_levels_listed() {
        let request = Request::builder()
            .uri("/complexity-levels")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        let json = response_json(response).await;
        assert_eq!(json["levels"], json!(["basic", "intermediate", "advanced"]));
    }
}
