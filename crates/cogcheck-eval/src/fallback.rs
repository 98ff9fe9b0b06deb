//! Deterministic keyword-based scorer used when remote evaluation fails.
//!
//! Matching is substring-based on a lower-cased, whitespace-trimmed copy of
//! each response, checked against the question at the same position in the
//! fixed table. Pure: same responses, same result, no I/O.

use cogcheck_core::{
    BASE_QUESTIONS, POINTS_PER_QUESTION, QuestionCategory, ResultCategory, ScreeningQuestion,
    ScreeningResult,
};

/// Date/place tokens accepted for orientation answers.
const ORIENTATION_KEYWORDS: &[&str] = &["年", "月", "日", "曜日", "東京", "県", "市"];

/// The three recall words, in kanji and kana spellings.
const MEMORY_KEYWORDS: &[&str] = &["桜", "さくら", "電車", "でんしゃ", "りんご", "リンゴ"];

/// Ids of the immediate- and delayed-recall checkpoints. Other memory
/// questions score nothing in this path.
const RECALL_IDS: &[&str] = &["memory_1", "memory_2"];

/// Score a full response set against the fixed question table.
///
/// Responses beyond the table length are ignored; missing responses simply
/// score nothing. Never fails.
pub fn evaluate_fallback(responses: &[String]) -> ScreeningResult {
    let max_score = responses.len() as u32 * POINTS_PER_QUESTION;

    let mut score = 0;
    for (response, question) in responses.iter().zip(BASE_QUESTIONS.iter()) {
        score += score_response(question, response);
    }

    let category = ResultCategory::from_score(score, max_score);
    ScreeningResult {
        score,
        max_score,
        category,
        summary: category.summary().to_string(),
        recommendations: category
            .recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        detailed_analysis: format!(
            "{}問の質問にお答えいただき、{}点満点中{}点でした。回答内容から判断して、{}",
            responses.len(),
            max_score,
            score,
            category.summary(),
        ),
        time_elapsed: None,
        conversation_data: None,
    }
}

/// Points for one response, 0 to 3 depending on the question's domain.
fn score_response(question: &ScreeningQuestion, response: &str) -> u32 {
    let clean = response.trim().to_lowercase();

    match question.category {
        QuestionCategory::Orientation => {
            if ORIENTATION_KEYWORDS.iter().any(|kw| clean.contains(kw)) {
                2
            } else if clean.chars().count() > 3 {
                1
            } else {
                0
            }
        }
        QuestionCategory::Memory => {
            if RECALL_IDS.contains(&question.id) {
                let matches = MEMORY_KEYWORDS
                    .iter()
                    .filter(|kw| clean.contains(*kw))
                    .count() as u32;
                matches.min(POINTS_PER_QUESTION)
            } else {
                0
            }
        }
        QuestionCategory::Attention => {
            if clean.contains("86") || clean.contains("八十六") {
                3
            } else if clean.chars().any(|c| c.is_ascii_digit()) {
                1
            } else {
                0
            }
        }
        QuestionCategory::Language => {
            if clean.contains("みんな") && clean.contains("力") && clean.contains("頑張") {
                3
            } else if clean.chars().count() > 5 {
                1
            } else {
                0
            }
        }
        QuestionCategory::Visuospatial => {
            if clean.contains('3') && (clean.contains("15") || clean.contains("針")) {
                2
            } else if clean.contains("時計") || clean.contains("針") {
                1
            } else {
                0
            }
        }
    }
}
