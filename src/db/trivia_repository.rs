use crate::db::models::{Category, NewQuestion, Question};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;

diesel::define_sql_function! {
    /// SQLite's rowid of the most recent successful insert on this connection
    fn last_insert_rowid() -> Integer;
}

/// Repository for managing question and category records in the SQLite database
pub struct TriviaRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> TriviaRepository<'a> {
    /// Creates a new TriviaRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        TriviaRepository { conn }
    }

    /// Retrieves all categories, ordered by ascending id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_categories(&mut self) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::*;

        let found = categories.order_by(id.asc()).load::<Category>(self.conn)?;
        Ok(found)
    }

    /// Retrieves questions ordered by ascending id
    ///
    /// # Arguments
    ///
    /// * `category_id` - When present, restricts the result to questions whose
    ///   category equals this id; when absent, all questions are returned
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_questions(&mut self, category_id: Option<i32>) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::*;

        let found = match category_id {
            Some(filter_category) => questions
                .filter(category.eq(filter_category))
                .order_by(id.asc())
                .load::<Question>(self.conn)?,
            None => questions.order_by(id.asc()).load::<Question>(self.conn)?,
        };
        Ok(found)
    }

    /// Retrieves questions whose text contains `term`, ordered by ascending id.
    /// Matching is a substring match, case-insensitive for ASCII (SQLite LIKE).
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn search_questions(&mut self, term: &str) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::*;

        let pattern = format!("%{}%", term);
        let found = questions
            .filter(question.like(pattern))
            .order_by(id.asc())
            .load::<Question>(self.conn)?;
        Ok(found)
    }

    /// Retrieves a single question by id, or None if no such row exists
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn get_question(&mut self, question_id: i32) -> Result<Option<Question>, Error> {
        use crate::schema::questions::dsl::*;

        let found = questions
            .filter(id.eq(question_id))
            .first::<Question>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Permanently deletes a question by id
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no row matches `question_id`, or an Error
    /// if database operations fail
    pub fn delete_question(&mut self, question_id: i32) -> Result<(), Error> {
        use crate::schema::questions::dsl::*;

        let deleted = diesel::delete(questions.filter(id.eq(question_id))).execute(self.conn)?;
        if deleted == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    /// Inserts a new question; the database assigns a fresh unique id
    ///
    /// # Returns
    ///
    /// The stored question, including its assigned id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_question(&mut self, new_question: NewQuestion) -> Result<Question, Error> {
        use crate::schema::questions::dsl::*;

        diesel::insert_into(questions)
            .values(&new_question)
            .execute(self.conn)?;

        let new_id = diesel::select(last_insert_rowid()).get_result::<i32>(self.conn)?;
        let stored = questions.filter(id.eq(new_id)).first::<Question>(self.conn)?;
        Ok(stored)
    }
}
