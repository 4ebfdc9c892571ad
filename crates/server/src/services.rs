mod question;
mod quiz;

pub use question::{QuestionError, QuestionService};
pub use quiz::{pick_random, QuizError, QuizService};
