use diesel::prelude::*;
use trivia_api::db::{Database, NewQuestion, Question, TriviaRepository};
use trivia_api::schema::categories;

pub fn create_test_database() -> Database {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "trivia_api_test_{}_{}.db",
        std::process::id(),
        id
    ));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    Database::new(path.to_str().expect("temp path is not valid UTF-8"))
        .expect("failed to create test database")
}

/// Inserts one category per entry in `types`; ids are assigned 1, 2, 3, ...
pub fn seed_categories(database: &Database, types: &[&str]) {
    let mut conn = database.get_conn().unwrap();
    for t in types {
        diesel::insert_into(categories::table)
            .values(categories::type_.eq(*t))
            .execute(&mut conn)
            .unwrap();
    }
}

/// Inserts `n` questions into `category`, returning the assigned ids in order
pub fn seed_questions(database: &Database, n: usize, category: i32) -> Vec<i32> {
    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    (0..n)
        .map(|i| {
            repo.insert_question(NewQuestion {
                question: format!("Question {}?", i + 1),
                answer: format!("Answer {}", i + 1),
                category,
                difficulty: (i % 5 + 1) as i32,
            })
            .unwrap()
            .id
        })
        .collect()
}

/// Inserts a single question with explicit text and returns the stored row
pub fn seed_question(database: &Database, text: &str, answer: &str, category: i32) -> Question {
    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    repo.insert_question(NewQuestion {
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty: 1,
    })
    .unwrap()
}
