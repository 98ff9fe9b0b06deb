//! Evaluation orchestration: try the remote scorer, fall back locally.

use async_trait::async_trait;
use cogcheck_core::{BASE_QUESTIONS, ScreeningQuestion, ScreeningResult};
use thiserror::Error;
use tracing::{info, warn};

use crate::fallback::evaluate_fallback;

#[derive(Debug, Error)]
pub enum EvalError {
    /// Question and response sequences must be equal-length and non-empty.
    /// This indicates a caller bug, not a runtime condition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// External scoring collaborator.
///
/// Implementations may fail however they like; the [`Evaluator`] absorbs
/// every failure and answers from the local fallback instead.
#[async_trait]
pub trait RemoteScorer: Send + Sync {
    async fn score(
        &self,
        questions: &[String],
        responses: &[String],
        metadata: &[ScreeningQuestion],
    ) -> anyhow::Result<ScreeningResult>;
}

/// Drives one evaluation per completed questionnaire run.
///
/// Holds no per-session state; the static question table is the only data
/// it reads besides its arguments, so one evaluator can serve concurrent
/// sessions.
pub struct Evaluator {
    scorer: Option<Box<dyn RemoteScorer>>,
}

impl Evaluator {
    /// Evaluator with no remote collaborator: every run scores locally.
    pub fn local() -> Self {
        Self { scorer: None }
    }

    /// Evaluator that tries `scorer` first and falls back locally.
    pub fn with_scorer(scorer: Box<dyn RemoteScorer>) -> Self {
        Self {
            scorer: Some(scorer),
        }
    }

    /// Evaluate a completed run.
    ///
    /// Once the input passes the length precondition this always returns a
    /// usable result: remote failures are logged and absorbed, and the
    /// fallback scorer cannot fail. The only error is [`EvalError::InvalidInput`].
    pub async fn evaluate(
        &self,
        questions: &[String],
        responses: &[String],
    ) -> Result<ScreeningResult, EvalError> {
        if questions.is_empty() || responses.is_empty() {
            return Err(EvalError::InvalidInput(
                "question and response sequences must be non-empty".into(),
            ));
        }
        if questions.len() != responses.len() {
            return Err(EvalError::InvalidInput(format!(
                "{} questions but {} responses",
                questions.len(),
                responses.len(),
            )));
        }

        if let Some(scorer) = &self.scorer {
            match scorer.score(questions, responses, &BASE_QUESTIONS).await {
                Ok(result) => {
                    info!(
                        score = result.score,
                        max_score = result.max_score,
                        category = result.category.as_str(),
                        "remote evaluation succeeded"
                    );
                    return Ok(result);
                }
                Err(err) => {
                    warn!(error = %err, "remote evaluation failed, using local fallback");
                }
            }
        }

        Ok(evaluate_fallback(responses))
    }
}
