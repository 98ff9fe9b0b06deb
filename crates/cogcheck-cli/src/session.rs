//! Interactive question/answer flow for one screening run.

use std::time::Instant;

use cogcheck_core::{BASE_QUESTIONS, ScreeningResult};

use crate::speech::{SpeechToText, TextToSpeech};

/// Everything collected during one sitting: the prompts as asked, the
/// answers as heard, and how long the whole exchange took.
pub struct SessionTranscript {
    pub questions: Vec<String>,
    pub responses: Vec<String>,
    pub elapsed_secs: u64,
}

impl SessionTranscript {
    /// Attach the transport fields to an evaluated result: elapsed time and
    /// the opaque conversation bag. The evaluator never sets these itself.
    pub fn attach_to(&self, result: &mut ScreeningResult) {
        result.time_elapsed = Some(self.elapsed_secs);
        result.conversation_data = Some(serde_json::json!({
            "questions": self.questions,
            "responses": self.responses,
        }));
    }
}

/// Ask the fixed question set in order and collect one answer each.
///
/// A failed or cancelled capture becomes an empty answer; the session always
/// completes with a full transcript.
pub fn run_session(
    voice: &mut dyn TextToSpeech,
    ears: &mut dyn SpeechToText,
) -> SessionTranscript {
    let start = Instant::now();

    let mut questions = Vec::with_capacity(BASE_QUESTIONS.len());
    let mut responses = Vec::with_capacity(BASE_QUESTIONS.len());

    for (i, question) in BASE_QUESTIONS.iter().enumerate() {
        voice.speak(&format!(
            "質問{}／{}: {}",
            i + 1,
            BASE_QUESTIONS.len(),
            question.question
        ));
        let answer = ears.listen().unwrap_or_default();
        questions.push(question.question.to_string());
        responses.push(answer);
    }

    SessionTranscript {
        questions,
        responses,
        elapsed_secs: start.elapsed().as_secs(),
    }
}
