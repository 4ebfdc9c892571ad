mod pagination;

pub use pagination::{paginate, parse_page, QUESTIONS_PER_PAGE};
