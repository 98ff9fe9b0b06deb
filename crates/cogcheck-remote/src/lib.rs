//! HTTP client for the external screening evaluation endpoint.
//!
//! Sends the questionnaire transcript plus question metadata and expects a
//! `ScreeningResult`-shaped JSON body back. Every failure mode here — network,
//! timeout, non-2xx status, unparseable body — is absorbed by the evaluator's
//! fallback path; nothing in this crate reaches the end user as an error.

use std::time::Duration;

use async_trait::async_trait;
use cogcheck_core::{ScreeningQuestion, ScreeningResult};
use cogcheck_eval::RemoteScorer;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Bound on one remote evaluation call, connect to last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("malformed evaluation result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wire shape of the evaluation request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationRequest<'a> {
    questions: &'a [String],
    responses: &'a [String],
    questions_data: &'a [ScreeningQuestion],
}

/// Scoring client for the evaluation endpoint.
pub struct HttpScorer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScorer {
    /// Client for the given endpoint URL with the default timeout.
    pub fn new(endpoint: String) -> Result<Self, RemoteError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Client with an explicit per-request timeout. A timed-out call is a
    /// failure like any other; the caller falls back, it never retries.
    pub fn with_timeout(endpoint: String, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// POST the transcript for scoring and parse the result.
    pub async fn evaluate(
        &self,
        questions: &[String],
        responses: &[String],
        metadata: &[ScreeningQuestion],
    ) -> Result<ScreeningResult, RemoteError> {
        let request = EvaluationRequest {
            questions,
            responses,
            questions_data: metadata,
        };

        info!(endpoint = %self.endpoint, responses = responses.len(), "requesting remote evaluation");
        let resp = self.client.post(&self.endpoint).json(&request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let result = parse_result(&body)?;
        info!(
            score = result.score,
            max_score = result.max_score,
            "remote evaluation complete"
        );
        Ok(result)
    }
}

/// Parse a success body into a result; a 2xx with the wrong shape is still
/// a failure.
fn parse_result(body: &str) -> Result<ScreeningResult, RemoteError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl RemoteScorer for HttpScorer {
    async fn score(
        &self,
        questions: &[String],
        responses: &[String],
        metadata: &[ScreeningQuestion],
    ) -> anyhow::Result<ScreeningResult> {
        Ok(self.evaluate(questions, responses, metadata).await?)
    }
}
