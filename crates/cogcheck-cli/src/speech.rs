//! Narrow speech interfaces with console stand-ins.
//!
//! The questionnaire only needs "say this" and "give me what was said";
//! real speech synthesis/recognition plugs in behind these two traits.
//! The console implementations print and read lines instead.

use std::io::{BufRead, Write};

/// Fire-and-forget speech output.
pub trait TextToSpeech {
    fn speak(&mut self, text: &str);
}

/// One utterance of speech input. `None` means the capture failed or the
/// speaker cancelled; the session records it as an empty answer.
pub trait SpeechToText {
    fn listen(&mut self) -> Option<String>;
}

/// Console voice: prints the prompt to stdout.
pub struct ConsoleVoice;

impl TextToSpeech for ConsoleVoice {
    fn speak(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Console ears: reads one line from stdin.
pub struct ConsoleEars;

impl SpeechToText for ConsoleEars {
    fn listen(&mut self) -> Option<String> {
        print!("> ");
        std::io::stdout().flush().ok()?;
        let mut line = String::new();
        let stdin = std::io::stdin();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => None, // EOF mid-session
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(_) => None,
        }
    }
}
