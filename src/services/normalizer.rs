use crate::models::question::{Difficulty, Question, QuestionKind, QuestionType};
use serde_json::Value as JsonValue;

const EXCERPT_CHARS: usize = 60;
const FALLBACK_SOURCE: &str = "제공된 학습 내용";

/// First 60 characters of the source text, or a generic placeholder when the
/// source is empty. Used in every synthesized fallback sentence.
pub fn source_excerpt(text: &str) -> String {
    let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    if excerpt.trim().is_empty() {
        FALLBACK_SOURCE.to_string()
    } else {
        excerpt
    }
}

/// Map raw, possibly partial question objects into fully well-formed
/// questions. Missing or malformed fields are filled deterministically; this
/// pass never fails and its output always satisfies the `Question` invariant.
pub fn normalize_questions(
    raw: &[JsonValue],
    desired_count: usize,
    source_text: &str,
    difficulty: Difficulty,
    kind: QuestionKind,
) -> Vec<Question> {
    let base = source_excerpt(source_text);

    raw.iter()
        .take(desired_count)
        .enumerate()
        .map(|(idx, rq)| normalize_one(rq, idx, &base, difficulty, kind))
        .collect()
}

fn normalize_one(
    raw: &JsonValue,
    idx: usize,
    base: &str,
    difficulty: Difficulty,
    kind: QuestionKind,
) -> Question {
    let question_type = kind.resolve_at(idx);

    let question = non_empty_str(raw.get("question"))
        .unwrap_or_else(|| format!("Q{}. {} 기반 문제", idx + 1, base));

    let (options, answer) = match question_type {
        QuestionType::MultipleChoice => {
            let options = four_options(raw.get("options"));
            let answer = match non_empty_str(raw.get("answer")) {
                Some(ans) if options.contains(&ans) => ans,
                _ => options[0].clone(),
            };
            (Some(options), answer)
        }
        QuestionType::ShortAnswer => {
            let answer = non_empty_str(raw.get("answer"))
                .unwrap_or_else(|| format!("{}에 대한 핵심 개념을 요약해 보세요.", base));
            (None, answer)
        }
    };

    let explanation = non_empty_str(raw.get("explanation")).unwrap_or_else(|| {
        format!(
            "{} 난이도로 {}을(를) 바탕으로 한 정답입니다.",
            difficulty.as_str(),
            base
        )
    });

    Question {
        id: (idx + 1) as i32,
        question,
        options,
        answer,
        explanation,
        question_type,
    }
}

/// Merge a translated raw array back onto the source questions, preserving
/// id, type and option shape. A missing or malformed field keeps the source
/// text, so the result always has the same cardinality and still satisfies
/// the `Question` invariant.
pub fn apply_translation(source: &[Question], translated: &[JsonValue]) -> Vec<Question> {
    let null = JsonValue::Null;
    source
        .iter()
        .enumerate()
        .map(|(idx, orig)| {
            let raw = translated.get(idx).unwrap_or(&null);

            let question =
                non_empty_str(raw.get("question")).unwrap_or_else(|| orig.question.clone());
            let explanation =
                non_empty_str(raw.get("explanation")).unwrap_or_else(|| orig.explanation.clone());

            let (options, answer) = match &orig.options {
                Some(orig_opts) => {
                    let raw_opts = raw.get("options").and_then(JsonValue::as_array);
                    let options: Vec<String> = orig_opts
                        .iter()
                        .enumerate()
                        .map(|(j, orig_opt)| {
                            raw_opts
                                .and_then(|arr| arr.get(j))
                                .and_then(JsonValue::as_str)
                                .map(str::trim)
                                .filter(|s| !s.is_empty())
                                .map(str::to_string)
                                .unwrap_or_else(|| orig_opt.clone())
                        })
                        .collect();

                    let answer = match non_empty_str(raw.get("answer")) {
                        Some(ans) if options.iter().any(|o| o.trim() == ans) => ans,
                        // keep pointing at the option that was correct
                        // before translation
                        _ => {
                            let correct = orig_opts
                                .iter()
                                .position(|o| o.trim() == orig.answer.trim())
                                .unwrap_or(0);
                            options
                                .get(correct)
                                .cloned()
                                .unwrap_or_else(|| orig.answer.clone())
                        }
                    };
                    (Some(options), answer)
                }
                None => {
                    let answer =
                        non_empty_str(raw.get("answer")).unwrap_or_else(|| orig.answer.clone());
                    (None, answer)
                }
            };

            Question {
                id: orig.id,
                question,
                options,
                answer,
                explanation,
                question_type: orig.question_type,
            }
        })
        .collect()
}

fn non_empty_str(value: Option<&JsonValue>) -> Option<String> {
    value
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Raw options filtered down to usable text, padded with placeholders to
/// exactly four entries.
fn four_options(value: Option<&JsonValue>) -> Vec<String> {
    let mut options: Vec<String> = value
        .and_then(JsonValue::as_array)
        .map(|arr| arr.iter().filter_map(option_text).collect())
        .unwrap_or_default();
    options.truncate(4);
    while options.len() < 4 {
        options.push(format!("선택지 {}", options.len() + 1));
    }
    options
}

fn option_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        JsonValue::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
