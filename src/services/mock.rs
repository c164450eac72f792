use crate::models::question::{Question, QuestionType};
use crate::services::normalizer::source_excerpt;
use crate::services::quiz_service::QuizRequest;

/// Deterministic placeholder questions built from the request parameters
/// alone. Same shape contract as the normalizer output, so mock mode is
/// indistinguishable from live mode at the API boundary apart from the
/// response metadata.
pub fn mock_questions(req: &QuizRequest) -> Vec<Question> {
    let base = source_excerpt(&req.text);

    (0..req.count)
        .map(|idx| {
            let question_type = req.kind.resolve_at(idx);
            let explanation = format!(
                "모의 생성 모드입니다. {} 난이도 기준 {}번 문제.",
                req.difficulty.as_str(),
                idx + 1
            );

            match question_type {
                QuestionType::MultipleChoice => {
                    let options = vec![
                        format!("{} 핵심 요약", base),
                        "선택지 2".to_string(),
                        "선택지 3".to_string(),
                        "선택지 4".to_string(),
                    ];
                    Question {
                        id: (idx + 1) as i32,
                        question: format!("Q{}. {}에 대한 설명으로 알맞은 것은?", idx + 1, base),
                        answer: options[0].clone(),
                        options: Some(options),
                        explanation,
                        question_type,
                    }
                }
                QuestionType::ShortAnswer => Question {
                    id: (idx + 1) as i32,
                    question: format!("Q{}. {}의 핵심 개념을 설명해 보세요.", idx + 1, base),
                    options: None,
                    answer: format!("{}에 대한 핵심 개념을 요약해 보세요.", base),
                    explanation,
                    question_type,
                },
            }
        })
        .collect()
}

/// Local translation fallback: prefix every text field with a bracketed
/// language tag. Cardinality, ids and types are preserved, so the result
/// still satisfies the `Question` invariant.
pub fn mock_translation(items: &[Question], target_lang: &str) -> Vec<Question> {
    items
        .iter()
        .map(|q| Question {
            id: q.id,
            question: tag(target_lang, &q.question),
            options: q
                .options
                .as_ref()
                .map(|opts| opts.iter().map(|opt| tag(target_lang, opt)).collect()),
            answer: tag(target_lang, &q.answer),
            explanation: tag(target_lang, &q.explanation),
            question_type: q.question_type,
        })
        .collect()
}

fn tag(lang: &str, text: &str) -> String {
    format!("[{}] {}", lang, text.trim())
}
