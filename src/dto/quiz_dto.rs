use crate::models::question::{Difficulty, Question, QuestionKind};
use crate::services::provider::Provider;
use crate::services::quiz_service::{GenerationMode, QuizRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

/// Body of `POST /api/generate-quiz`. `level` and `type` are kept as raw
/// strings so unknown values can fall back to their defaults instead of
/// failing deserialization.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GenerateQuizPayload {
    #[validate(length(min = 1, message = "text field is required"))]
    pub text: String,
    pub level: Option<String>,
    pub count: Option<i64>,
    #[serde(rename = "type")]
    pub question_type: Option<String>,
}

/// Body of `POST /generate`. Every field is optional; an empty body is a
/// valid request that produces placeholder questions in mock mode.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateItemsPayload {
    pub count: Option<i64>,
    pub level: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<String>,
    pub text: String,
}

/// Body of `POST /translate`. `items` stays untyped here so the handler can
/// reject non-array payloads with a 400 before deserializing questions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TranslatePayload {
    pub items: JsonValue,
    #[serde(rename = "targetLang")]
    pub target_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<Question>,
    pub meta: QuizMeta,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Question>,
    pub meta: QuizMeta,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub items: Vec<Question>,
    pub meta: TranslateMeta,
}

#[derive(Debug, Serialize)]
pub struct QuizMeta {
    pub source: String,
    pub model: String,
    pub level: Difficulty,
    pub count: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionKind,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GenerationMode>,
}

impl QuizMeta {
    pub fn new(provider: &Provider, req: &QuizRequest, mode: Option<GenerationMode>) -> Self {
        let (source, model) = match mode {
            Some(GenerationMode::Mock) => ("mock".to_string(), "mock".to_string()),
            _ => (provider.name().to_string(), provider.model().to_string()),
        };
        Self {
            source,
            model,
            level: req.difficulty,
            count: req.count,
            question_type: req.kind,
            language: req.language.clone(),
            mode,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslateMeta {
    pub mode: GenerationMode,
    #[serde(rename = "targetLang")]
    pub target_lang: String,
    pub count: usize,
}
