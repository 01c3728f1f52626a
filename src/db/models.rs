use crate::schema::{categories, questions};
use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// Represents a stored trivia question
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Insertable)]
#[diesel(table_name = questions)]
pub struct Question {
    /// Unique identifier assigned by the database
    pub id: i32,
    /// The question text
    pub question: String,
    /// The answer text
    pub answer: String,
    /// Id of the category this question belongs to (not validated against
    /// the categories table)
    pub category: i32,
    /// Difficulty score
    pub difficulty: i32,
}

/// A question as submitted by a client, before the database assigns an id
#[derive(Debug, Clone, Serialize, Deserialize, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Represents a question category. Read-only from the API's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = categories)]
pub struct Category {
    /// Unique identifier for the category
    pub id: i32,
    /// Display name, e.g. "Science"
    #[serde(rename = "type")]
    pub type_: String,
}
