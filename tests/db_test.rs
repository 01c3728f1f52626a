mod common;

use common::{create_test_database, seed_categories, seed_question, seed_questions};
use trivia_api::db::{NewQuestion, TriviaRepository};
use trivia_api::errors::Error;

#[test]
fn insert_assigns_fresh_unique_ids() {
    let database = create_test_database();

    let first = seed_question(&database, "What is 1+1?", "2", 1);
    let second = seed_question(&database, "What is 2+2?", "4", 1);

    assert_ne!(first.id, second.id);
    assert!(second.id > first.id);
    assert_eq!(second.question, "What is 2+2?");
    assert_eq!(second.answer, "4");
}

#[test]
fn list_questions_is_ordered_by_id() {
    let database = create_test_database();
    let ids = seed_questions(&database, 5, 1);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let listed: Vec<i32> = repo
        .list_questions(None)
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(listed, ids);
}

#[test]
fn list_questions_filters_by_category() {
    let database = create_test_database();
    let science_ids = seed_questions(&database, 3, 1);
    let art_ids = seed_questions(&database, 2, 2);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let science: Vec<i32> = repo
        .list_questions(Some(1))
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(science, science_ids);

    let art: Vec<i32> = repo
        .list_questions(Some(2))
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(art, art_ids);

    assert!(repo.list_questions(Some(99)).unwrap().is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let database = create_test_database();
    seed_question(&database, "What is the largest lake in Africa?", "Lake Victoria", 3);
    seed_question(&database, "Whose autobiography is 'Long Walk to Freedom'?", "Nelson Mandela", 4);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let hits = repo.search_questions("LARGEST").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].answer, "Lake Victoria");

    let hits = repo.search_questions("W").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].id < hits[1].id);

    assert!(repo.search_questions("xyzzy").unwrap().is_empty());
}

#[test]
fn get_question_returns_none_for_unknown_id() {
    let database = create_test_database();
    let stored = seed_question(&database, "What is 1+1?", "2", 1);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let found = repo.get_question(stored.id).unwrap();
    assert_eq!(found.map(|q| q.id), Some(stored.id));

    assert!(repo.get_question(stored.id + 100).unwrap().is_none());
}

#[test]
fn delete_question_removes_row() {
    let database = create_test_database();
    let ids = seed_questions(&database, 3, 1);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    repo.delete_question(ids[1]).unwrap();

    let remaining: Vec<i32> = repo
        .list_questions(None)
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
}

#[test]
fn delete_missing_question_is_not_found() {
    let database = create_test_database();

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let err = repo.delete_question(42).unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[test]
fn list_categories_is_ordered_by_id() {
    let database = create_test_database();
    seed_categories(&database, &["Science", "Art", "Geography"]);

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    let listed = repo.list_categories().unwrap();
    let types: Vec<&str> = listed.iter().map(|c| c.type_.as_str()).collect();
    assert_eq!(types, vec!["Science", "Art", "Geography"]);
    assert_eq!(listed[0].id, 1);
    assert_eq!(listed[2].id, 3);
}

#[test]
fn question_may_reference_missing_category() {
    let database = create_test_database();

    let mut conn = database.get_conn().unwrap();
    let mut repo = TriviaRepository::new(&mut conn);

    // No categories seeded at all; the insert still succeeds.
    let stored = repo
        .insert_question(NewQuestion {
            question: "Orphaned?".to_string(),
            answer: "Yes".to_string(),
            category: 7,
            difficulty: 2,
        })
        .unwrap();
    assert_eq!(stored.category, 7);
}
