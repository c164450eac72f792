use crate::{
    config::get_config,
    dto::quiz_dto::{
        GenerateItemsPayload, GenerateQuizPayload, ItemsResponse, QuizMeta, QuizResponse,
        TranslateMeta, TranslatePayload, TranslateResponse,
    },
    error::{Error, Result},
    models::question::{Difficulty, Question, QuestionKind},
    services::quiz_service::QuizRequest,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

const DEFAULT_COUNT: i64 = 5;
const DEFAULT_TRANSLATE_LANG: &str = "en";

/// Strict generation endpoint. Provider and extraction failures surface to
/// the caller with diagnostic detail.
#[axum::debug_handler]
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(payload): Json<GenerateQuizPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let text = payload.text.trim();
    if text.is_empty() {
        return Err(Error::BadRequest("text field is required".to_string()));
    }

    let req = build_request(
        text,
        payload.level.as_deref(),
        payload.count,
        payload.question_type.as_deref(),
    );

    let questions = state.quiz_service.generate(&req).await?;
    let meta = QuizMeta::new(state.quiz_service.provider(), &req, None);

    Ok(Json(QuizResponse { questions, meta }))
}

/// Permissive generation endpoint. Provider-side failures degrade to mock
/// output; only malformed client JSON produces an error status.
#[axum::debug_handler]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateItemsPayload>,
) -> Result<impl IntoResponse> {
    let req = build_request(
        payload.text.trim(),
        payload.level.as_deref(),
        payload.count,
        payload.question_type.as_deref(),
    );

    let (items, mode) = state.quiz_service.generate_or_mock(&req).await;
    let meta = QuizMeta::new(state.quiz_service.provider(), &req, Some(mode));

    Ok(Json(ItemsResponse { items, meta }))
}

/// Field-preserving translation of an existing question list. Always
/// answers 200 with a same-cardinality result unless the input itself is
/// malformed.
#[axum::debug_handler]
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<impl IntoResponse> {
    let Some(arr) = payload.items.as_array() else {
        return Err(Error::BadRequest("items must be an array".to_string()));
    };
    if arr.is_empty() {
        return Err(Error::BadRequest("items must not be empty".to_string()));
    }

    let items: Vec<Question> = serde_json::from_value(payload.items.clone())?;
    let target_lang = payload
        .target_lang
        .as_deref()
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_TRANSLATE_LANG);

    let (items, mode) = state.quiz_service.translate_or_mock(&items, target_lang).await;
    let meta = TranslateMeta {
        mode,
        target_lang: target_lang.to_string(),
        count: items.len(),
    };

    Ok(Json(TranslateResponse { items, meta }))
}

/// Resolve the raw payload fields into a bounded request: unknown level and
/// type strings fall back to their defaults, the count is clamped into
/// [1, MAX_QUESTIONS] and the source text is cut to the configured budget.
fn build_request(
    text: &str,
    level: Option<&str>,
    count: Option<i64>,
    kind: Option<&str>,
) -> QuizRequest {
    let cfg = get_config();

    let difficulty = level.and_then(Difficulty::parse).unwrap_or_default();
    let kind = kind.and_then(QuestionKind::parse).unwrap_or_default();
    let max_count = cfg.max_questions.max(1) as i64;
    let count = count.unwrap_or(DEFAULT_COUNT).clamp(1, max_count) as usize;
    let text: String = text.chars().take(cfg.source_char_budget).collect();

    QuizRequest {
        text,
        difficulty,
        count,
        kind,
        language: cfg.quiz_language.clone(),
    }
}
