use crate::error::Result;
use crate::models::question::Question;
use crate::services::quiz_service::QuizRequest;
use serde_json::json;

/// System + user instruction pair for one chat completion call.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Build the generation instructions. The system prompt fixes the output
/// JSON shape and the per-type formatting rules; the user prompt carries the
/// trimmed source text and the requested parameters.
pub fn quiz_prompts(req: &QuizRequest) -> PromptPair {
    let system = format!(
        r#"You are a teacher who writes concise quiz questions (multiple-choice or short-answer).
Return ONLY valid JSON with this shape:
{{ "questions": [ {{ "question": string, "options": [string,string,string,string] | null, "answer": string, "explanation": string }} ] }}

Rules:
1. If question_type is "multiple-choice": include exactly 4 options and answer must match one of them.
2. If question_type is "short-answer": set options to null and answer should be a short phrase or sentence.
3. If question_type is "mixed": alternate multiple-choice and short-answer, starting with multiple-choice.
4. Keep explanations short (1-2 sentences).
5. Write every question, option, answer and explanation in "{}", regardless of the source language.
6. Do not include markdown fences or extra text."#,
        req.language
    );

    let user = format!(
        "Source text (trimmed): {}\n\
         Difficulty: {}\n\
         Number of questions: {}\n\
         Question type: {}\n\
         Target output language: {}\n\
         Generate the quiz now. Respond with JSON only.",
        req.text,
        req.difficulty.as_str(),
        req.count,
        req.kind.as_str(),
        req.language
    );

    PromptPair { system, user }
}

/// Build the field-preserving translation instructions for an existing
/// question list.
pub fn translate_prompts(items: &[Question], target_lang: &str) -> Result<PromptPair> {
    let system = r#"You translate quiz questions.
Return ONLY valid JSON with this shape: { "items": [ ... ] }, one output item per input item, in the same order.

Rules:
1. Translate only the question, options, answer and explanation fields; copy id and type unchanged.
2. For multiple-choice items the translated answer must exactly match one of the translated options.
3. Keep null options null.
4. Do not include markdown fences or extra text."#
        .to_string();

    let payload = json!({
        "target_language": target_lang,
        "items": items,
    });
    let user = format!(
        "Translate these quiz items into \"{}\":\n{}",
        target_lang,
        serde_json::to_string(&payload)?
    );

    Ok(PromptPair { system, user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Difficulty, QuestionKind, QuestionType};

    fn request() -> QuizRequest {
        QuizRequest {
            text: "광합성은 빛 에너지를 화학 에너지로 전환한다.".to_string(),
            difficulty: Difficulty::Hard,
            count: 7,
            kind: QuestionKind::Mixed,
            language: "ko".to_string(),
        }
    }

    #[test]
    fn quiz_prompts_embed_the_request_parameters() {
        let prompts = quiz_prompts(&request());
        assert!(prompts.system.contains("\"questions\""));
        assert!(prompts.system.contains("\"ko\""));
        assert!(prompts.user.contains("광합성은"));
        assert!(prompts.user.contains("Difficulty: hard"));
        assert!(prompts.user.contains("Number of questions: 7"));
        assert!(prompts.user.contains("Question type: mixed"));
    }

    #[test]
    fn translate_prompts_carry_the_items_verbatim() {
        let items = vec![Question {
            id: 1,
            question: "물의 화학식은?".to_string(),
            options: None,
            answer: "H2O".to_string(),
            explanation: "물 분자는 H2O이다.".to_string(),
            question_type: QuestionType::ShortAnswer,
        }];
        let prompts = translate_prompts(&items, "en").unwrap();
        assert!(prompts.system.contains("\"items\""));
        assert!(prompts.user.contains("물의 화학식은?"));
        assert!(prompts.user.contains("\"en\""));
    }
}
