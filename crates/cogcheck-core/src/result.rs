//! Screening result contract shared by the remote and fallback scorers.

use serde::{Deserialize, Serialize};

/// Overall screening tier, a pure function of `score / max_score`.
///
/// Tier boundaries are inclusive lower bounds: 80% and above is `Normal`,
/// 60% up to 80% is `MildConcern`, everything below is `RequiresAttention`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    Normal,
    MildConcern,
    RequiresAttention,
}

impl ResultCategory {
    /// Classify a score against its maximum.
    ///
    /// Integer comparison keeps the 60%/80% boundaries exact: a score of
    /// exactly 80% of max is `Normal`, exactly 60% is `MildConcern`.
    pub fn from_score(score: u32, max_score: u32) -> Self {
        if max_score == 0 {
            return Self::RequiresAttention;
        }
        if score * 5 >= max_score * 4 {
            Self::Normal
        } else if score * 5 >= max_score * 3 {
            Self::MildConcern
        } else {
            Self::RequiresAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::MildConcern => "mild_concern",
            Self::RequiresAttention => "requires_attention",
        }
    }

    /// Short display label for result cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "正常",
            Self::MildConcern => "軽度の注意",
            Self::RequiresAttention => "要注意",
        }
    }

    /// Fixed one-line summary for this tier.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Normal => "認知機能に特に気になる点はありませんでした。",
            Self::MildConcern => "軽度の注意が必要な結果となりました。",
            Self::RequiresAttention => "医師への相談をお勧めします。",
        }
    }

    /// The three fixed recommendations for this tier, in display order.
    pub fn recommendations(&self) -> [&'static str; 3] {
        match self {
            Self::Normal => [
                "引き続き健康的な生活習慣を心がけましょう",
                "定期的な運動と社会参加を続けてください",
                "年1回程度の定期チェックをお勧めします",
            ],
            Self::MildConcern => [
                "3〜6ヶ月後の再チェックをお勧めします",
                "規則正しい生活習慣を心がけてください",
                "気になる症状があれば医師にご相談ください",
            ],
            Self::RequiresAttention => [
                "医療機関での詳しい検査をお勧めします",
                "ご家族と一緒に結果を確認してください",
                "日常生活で気になることがあれば記録しておきましょう",
            ],
        }
    }
}

/// The outcome of one completed questionnaire run.
///
/// Produced by either scoring path; `time_elapsed` and `conversation_data`
/// are attached afterwards by the session driver, never by the evaluator.
/// Field names follow the evaluation endpoint's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub score: u32,
    pub max_score: u32,
    pub category: ResultCategory,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub detailed_analysis: String,
    /// Whole seconds from first question to evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_elapsed: Option<u64>,
    /// Opaque bag of session data (questions, responses, messages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_out_of_21() {
        // 12/21 ≈ 57.1%, 13/21 ≈ 61.9%, 17/21 ≈ 81.0%.
        assert_eq!(
            ResultCategory::from_score(12, 21),
            ResultCategory::RequiresAttention
        );
        assert_eq!(ResultCategory::from_score(13, 21), ResultCategory::MildConcern);
        assert_eq!(ResultCategory::from_score(16, 21), ResultCategory::MildConcern);
        assert_eq!(ResultCategory::from_score(17, 21), ResultCategory::Normal);
        assert_eq!(ResultCategory::from_score(21, 21), ResultCategory::Normal);
        assert_eq!(
            ResultCategory::from_score(0, 21),
            ResultCategory::RequiresAttention
        );
    }

    #[test]
    fn exact_percentage_boundaries_are_inclusive() {
        // 12/20 = exactly 60%, 16/20 = exactly 80%.
        assert_eq!(ResultCategory::from_score(12, 20), ResultCategory::MildConcern);
        assert_eq!(ResultCategory::from_score(16, 20), ResultCategory::Normal);
        assert_eq!(
            ResultCategory::from_score(11, 20),
            ResultCategory::RequiresAttention
        );
    }

    #[test]
    fn tiers_are_monotone_in_score() {
        let mut seen_mild = false;
        let mut seen_normal = false;
        for score in 0..=21 {
            match ResultCategory::from_score(score, 21) {
                ResultCategory::RequiresAttention => {
                    assert!(!seen_mild && !seen_normal, "tier regressed at {score}");
                }
                ResultCategory::MildConcern => {
                    assert!(!seen_normal, "tier regressed at {score}");
                    seen_mild = true;
                }
                ResultCategory::Normal => seen_normal = true,
            }
        }
        assert!(seen_mild && seen_normal);
    }

    #[test]
    fn each_tier_has_three_recommendations() {
        for cat in [
            ResultCategory::Normal,
            ResultCategory::MildConcern,
            ResultCategory::RequiresAttention,
        ] {
            assert_eq!(cat.recommendations().len(), 3);
            assert!(!cat.summary().is_empty());
        }
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = ScreeningResult {
            score: 17,
            max_score: 21,
            category: ResultCategory::Normal,
            summary: "ok".into(),
            recommendations: vec!["a".into()],
            detailed_analysis: "detail".into(),
            time_elapsed: Some(180),
            conversation_data: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["maxScore"], 21);
        assert_eq!(json["category"], "normal");
        assert_eq!(json["detailedAnalysis"], "detail");
        assert_eq!(json["timeElapsed"], 180);
        // Absent optionals are omitted entirely.
        assert!(json.get("conversationData").is_none());
    }

    #[test]
    fn result_deserializes_without_transport_fields() {
        let json = r#"{
            "score": 15,
            "maxScore": 21,
            "category": "mild_concern",
            "summary": "s",
            "recommendations": ["r1", "r2", "r3"],
            "detailedAnalysis": "d"
        }"#;
        let result: ScreeningResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.category, ResultCategory::MildConcern);
        assert!(result.time_elapsed.is_none());
        assert!(result.conversation_data.is_none());
    }
}
