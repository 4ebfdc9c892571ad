mod categories;
mod questions;
mod quizzes;

pub use categories::{list_categories, list_category_questions};
pub use questions::{
    create_question, delete_question, list_questions, search_questions, PageQuery,
};
pub use quizzes::next_quiz_question;

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use categories::{__path_list_categories, __path_list_category_questions};
#[doc(hidden)]
pub use questions::{
    __path_create_question, __path_delete_question, __path_list_questions,
    __path_search_questions,
};
#[doc(hidden)]
pub use quizzes::__path_next_quiz_question;
