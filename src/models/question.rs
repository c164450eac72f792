use serde::{Deserialize, Serialize};

/// A fully normalized quiz question as served to the client.
///
/// Invariant: `multiple-choice` questions carry exactly four options and
/// `answer` equals one of them after trimming; `short-answer` questions
/// carry `options: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: i32,
    pub question: String,
    pub options: Option<Vec<String>>,
    pub answer: String,
    pub explanation: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl Question {
    pub fn is_well_formed(&self) -> bool {
        match self.question_type {
            QuestionType::MultipleChoice => match &self.options {
                Some(opts) => {
                    opts.len() == 4 && opts.iter().any(|opt| opt.trim() == self.answer.trim())
                }
                None => false,
            },
            QuestionType::ShortAnswer => self.options.is_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    ShortAnswer,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::ShortAnswer => "short-answer",
        }
    }
}

/// Difficulty requested by the client. Unknown values fall back to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Question-type policy requested by the client. `Mixed` alternates
/// multiple-choice and short-answer by position, starting with
/// multiple-choice. Unknown values fall back to `MultipleChoice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    ShortAnswer,
    Mixed,
}

impl QuestionKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "multiple-choice" => Some(Self::MultipleChoice),
            "short-answer" => Some(Self::ShortAnswer),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::ShortAnswer => "short-answer",
            Self::Mixed => "mixed",
        }
    }

    /// Effective sub-type at a given position.
    pub fn resolve_at(&self, idx: usize) -> QuestionType {
        match self {
            Self::Mixed if idx % 2 == 0 => QuestionType::MultipleChoice,
            Self::Mixed => QuestionType::ShortAnswer,
            Self::MultipleChoice => QuestionType::MultipleChoice,
            Self::ShortAnswer => QuestionType::ShortAnswer,
        }
    }
}
