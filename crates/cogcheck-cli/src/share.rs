//! Shareable result payloads.
//!
//! A share payload is the result stripped of the conversation transcript
//! (no personal answers leave the machine), JSON-encoded and wrapped in
//! standard base64 so it can travel as a URL parameter value. No security
//! property: anyone holding the payload can read it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{SecondsFormat, Utc};
use cogcheck_core::{ResultCategory, ScreeningResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The shared subset of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub score: u32,
    pub max_score: u32,
    pub category: ResultCategory,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_elapsed: Option<u64>,
    /// When the share link was generated, RFC 3339.
    pub timestamp: String,
    /// Short random tag distinguishing independently generated links.
    pub id: String,
}

impl SharePayload {
    pub fn from_result(result: &ScreeningResult) -> Self {
        Self {
            score: result.score,
            max_score: result.max_score,
            category: result.category,
            summary: result.summary.clone(),
            time_elapsed: result.time_elapsed,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            id: random_id(),
        }
    }
}

/// Encode a result as a shareable base64 payload.
pub fn encode(result: &ScreeningResult) -> anyhow::Result<String> {
    let payload = SharePayload::from_result(result);
    Ok(STANDARD.encode(serde_json::to_vec(&payload)?))
}

/// Decode a shared payload back into its summary form.
pub fn decode(encoded: &str) -> anyhow::Result<SharePayload> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn random_id() -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScreeningResult {
        ScreeningResult {
            score: 17,
            max_score: 21,
            category: ResultCategory::Normal,
            summary: "認知機能に特に気になる点はありませんでした。".into(),
            recommendations: vec!["a".into(), "b".into(), "c".into()],
            detailed_analysis: "詳細".into(),
            time_elapsed: Some(174),
            conversation_data: Some(serde_json::json!({"responses": ["秘密の回答"]})),
        }
    }

    #[test]
    fn share_round_trip_preserves_summary_fields() {
        let result = sample_result();
        let payload = decode(&encode(&result).unwrap()).unwrap();

        assert_eq!(payload.score, 17);
        assert_eq!(payload.max_score, 21);
        assert_eq!(payload.category, ResultCategory::Normal);
        assert_eq!(payload.summary, result.summary);
        assert_eq!(payload.time_elapsed, Some(174));
        assert_eq!(payload.id.len(), 9);
    }

    #[test]
    fn share_payload_excludes_conversation_data() {
        let encoded = encode(&sample_result()).unwrap();
        let raw = String::from_utf8(STANDARD.decode(&encoded).unwrap()).unwrap();
        assert!(!raw.contains("秘密の回答"));
        assert!(!raw.contains("recommendations"));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("not base64 at all!").is_err());
        // Valid base64 but not a payload.
        assert!(decode(&STANDARD.encode(b"[1,2,3]")).is_err());
    }

    #[test]
    fn payload_uses_wire_field_names() {
        let json = serde_json::to_value(SharePayload::from_result(&sample_result())).unwrap();
        assert!(json.get("maxScore").is_some());
        assert!(json.get("timeElapsed").is_some());
        assert!(json.get("timestamp").is_some());
    }
}
