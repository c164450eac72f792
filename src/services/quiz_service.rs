use crate::error::{Error, Result};
use crate::models::question::{Difficulty, Question, QuestionKind};
use crate::services::provider::Provider;
use crate::services::{extractor, mock, normalizer, prompt};
use serde::Serialize;

/// Validated, clamped and truncated generation parameters.
#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub text: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub kind: QuestionKind,
    pub language: String,
}

/// Whether a response was produced by the live provider or by the local
/// mock fallback. Reported in the permissive endpoints' metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Live,
    Mock,
}

#[derive(Clone)]
pub struct QuizService {
    provider: Provider,
}

impl QuizService {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Strict pipeline: one provider call, then extraction and
    /// normalization. Provider failures and unrecoverable output propagate
    /// to the caller.
    pub async fn generate(&self, req: &QuizRequest) -> Result<Vec<Question>> {
        let prompts = prompt::quiz_prompts(req);
        let content = self.provider.chat(&prompts).await?;

        let raw = extractor::extract_items(&content, "questions", req.count);
        if raw.is_empty() {
            return Err(Error::Extraction);
        }

        Ok(normalizer::normalize_questions(
            &raw,
            req.count,
            &req.text,
            req.difficulty,
            req.kind,
        ))
    }

    /// Permissive pipeline: any provider-side failure degrades to the mock
    /// generator instead of surfacing an error. Exactly one live attempt is
    /// made; there are no retries.
    pub async fn generate_or_mock(&self, req: &QuizRequest) -> (Vec<Question>, GenerationMode) {
        if !self.provider.is_live() {
            return (mock::mock_questions(req), GenerationMode::Mock);
        }
        match self.generate(req).await {
            Ok(questions) => (questions, GenerationMode::Live),
            Err(err) => {
                tracing::warn!(error = ?err, "quiz generation failed, degrading to mock output");
                (mock::mock_questions(req), GenerationMode::Mock)
            }
        }
    }

    /// Field-preserving translation with the same degradation policy as
    /// `generate_or_mock`: the caller always gets a result set of the same
    /// cardinality as the input.
    pub async fn translate_or_mock(
        &self,
        items: &[Question],
        target_lang: &str,
    ) -> (Vec<Question>, GenerationMode) {
        if !self.provider.is_live() {
            return (mock::mock_translation(items, target_lang), GenerationMode::Mock);
        }
        match self.translate(items, target_lang).await {
            Ok(translated) => (translated, GenerationMode::Live),
            Err(err) => {
                tracing::warn!(error = ?err, "translation failed, degrading to mock output");
                (mock::mock_translation(items, target_lang), GenerationMode::Mock)
            }
        }
    }

    async fn translate(&self, items: &[Question], target_lang: &str) -> Result<Vec<Question>> {
        let prompts = prompt::translate_prompts(items, target_lang)?;
        let content = self.provider.chat(&prompts).await?;

        let raw = extractor::extract_items(&content, "items", items.len());
        if raw.len() != items.len() {
            return Err(Error::Extraction);
        }

        Ok(normalizer::apply_translation(items, &raw))
    }
}
