pub mod question;
pub mod result;

pub use question::{
    BASE_QUESTIONS, ExpectedType, POINTS_PER_QUESTION, QuestionCategory, ScreeningQuestion, prompts,
};
pub use result::{ResultCategory, ScreeningResult};
