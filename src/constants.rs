/// Number of questions served per page by the paginated listing endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Default SQLite database file, overridable through the DATABASE_PATH variable
pub const DEFAULT_DATABASE_PATH: &str = "trivia.db";
