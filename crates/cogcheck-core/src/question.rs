//! MMSE-based screening question set.
//!
//! The question table is a fixed, process-wide constant: seven questions
//! covering the five cognitive domains, asked in a fixed order. It is never
//! mutated after startup, so concurrent sessions can read it freely.

use serde::Serialize;

/// Cognitive domain a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Orientation,
    Memory,
    Attention,
    Language,
    Visuospatial,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orientation => "orientation",
            Self::Memory => "memory",
            Self::Attention => "attention",
            Self::Language => "language",
            Self::Visuospatial => "visuospatial",
        }
    }
}

/// The kind of answer a question expects.
///
/// Documents the matching strategy; not enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedType {
    Specific,
    Recall,
    Calculation,
    Comprehension,
}

/// One entry in the fixed screening questionnaire.
///
/// Serializes with the wire field names the evaluation endpoint expects
/// (`questionsData` entries: `id`, `category`, `question`, `expectedType`).
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningQuestion {
    pub id: &'static str,
    pub category: QuestionCategory,
    pub question: &'static str,
    pub expected_type: ExpectedType,
}

/// The fixed 7-question screening set, in asking order.
pub const BASE_QUESTIONS: [ScreeningQuestion; 7] = [
    ScreeningQuestion {
        id: "orientation_1",
        category: QuestionCategory::Orientation,
        question: "今日は何年の何月何日でしょうか？曜日も教えてください。",
        expected_type: ExpectedType::Specific,
    },
    ScreeningQuestion {
        id: "orientation_2",
        category: QuestionCategory::Orientation,
        question: "ここはどこでしょうか？どちらの都道府県にいらっしゃいますか？",
        expected_type: ExpectedType::Specific,
    },
    ScreeningQuestion {
        id: "memory_1",
        category: QuestionCategory::Memory,
        question: "これから3つの言葉をお伝えします。覚えてください。「桜、電車、りんご」です。復唱してください。",
        expected_type: ExpectedType::Recall,
    },
    ScreeningQuestion {
        id: "attention_1",
        category: QuestionCategory::Attention,
        question: "100から7ずつ引き算をしてください。100、93、次はいくつでしょうか？",
        expected_type: ExpectedType::Calculation,
    },
    ScreeningQuestion {
        id: "memory_2",
        category: QuestionCategory::Memory,
        question: "先ほどお伝えした3つの言葉を覚えていらっしゃいますか？",
        expected_type: ExpectedType::Recall,
    },
    ScreeningQuestion {
        id: "language_1",
        category: QuestionCategory::Language,
        question: "「みんなで力を合わせて頑張りましょう」という文を繰り返して言ってください。",
        expected_type: ExpectedType::Comprehension,
    },
    ScreeningQuestion {
        id: "visuospatial_1",
        category: QuestionCategory::Visuospatial,
        question: "時計の文字盤を思い浮かべてください。3時15分の時計の針の位置を説明してください。",
        expected_type: ExpectedType::Comprehension,
    },
];

/// Maximum points per question in both scoring paths.
pub const POINTS_PER_QUESTION: u32 = 3;

/// The question prompts, in asking order.
pub fn prompts() -> Vec<String> {
    BASE_QUESTIONS.iter().map(|q| q.question.to_string()).collect()
}
