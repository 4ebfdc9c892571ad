mod category;
mod question;

pub use category::CategoryRepository;
pub use question::QuestionRepository;
