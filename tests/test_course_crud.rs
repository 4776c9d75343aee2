//! Integration tests for Course repository operations.
//!
//! Tests cover:
//! - Insert allocating an id when the record carries none
//! - Update-in-place when the record carries an id
//! - Credits round-tripping through the REAL column
//! - Deleting and querying by id

mod common;

use common::*;
use uuid::Uuid;

#[tokio::test]
async fn test_save_new_course_allocates_id() -> anyhow::Result<()> {
    // 1. Seed a department for the foreign key
    let (db, _temp_dir) = create_test_db().await;
    let department = seed_department(&db, "Computer Science").await;

    // 2. Save a draft without an id
    let draft = make_course(department.id.unwrap());
    let saved = db.save_course(&draft).await?;

    // 3. Verify an id was allocated and the fields persisted
    let id = saved.id.expect("insert should allocate an id");
    let reloaded = db.get_course_by_id(id).await?.expect("course should exist");
    assert_eq!(reloaded.number, "101");
    assert_eq!(reloaded.title, "CS101");
    assert_eq!(reloaded.credits, "3");
    assert_eq!(reloaded.department_id, department.id);

    Ok(())
}

#[tokio::test]
async fn test_save_existing_course_updates_in_place() -> anyhow::Result<()> {
    // 1. Insert a course
    let (db, _temp_dir) = create_test_db().await;
    let department = seed_department(&db, "Computer Science").await;
    let saved = db.save_course(&make_course(department.id.unwrap())).await?;

    // 2. Save again with the id set and a changed title
    let mut updated = saved.clone();
    updated.title = "Intro to Computing".to_string();
    updated.credits = "4.5".to_string();
    db.save_course(&updated).await?;

    // 3. Still one row, with the new values
    let courses = db.get_courses().await?;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, saved.id);
    assert_eq!(courses[0].title, "Intro to Computing");
    assert_eq!(courses[0].credits, "4.5");

    Ok(())
}

#[tokio::test]
async fn test_update_of_unknown_course_fails() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let department = seed_department(&db, "Computer Science").await;

    let mut course = make_course(department.id.unwrap());
    course.id = Some(Uuid::new_v4());

    let result = db.save_course(&course).await;
    assert!(result.is_err(), "updating a missing row should fail");

    Ok(())
}

#[tokio::test]
async fn test_non_numeric_credits_propagates_an_error() -> anyhow::Result<()> {
    // The GUI path validates first; the repository still refuses instead
    // of panicking.
    let (db, _temp_dir) = create_test_db().await;
    let department = seed_department(&db, "Computer Science").await;

    let mut course = make_course(department.id.unwrap());
    course.credits = "three".to_string();

    let result = db.save_course(&course).await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_delete_course() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let department = seed_department(&db, "Computer Science").await;
    let saved = db.save_course(&make_course(department.id.unwrap())).await?;
    let id = saved.id.unwrap();

    db.delete_course(saved).await?;

    assert!(db.get_course_by_id(id).await?.is_none());
    assert_eq!(db.get_courses().await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn test_get_course_by_unknown_id_returns_none() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    assert!(db.get_course_by_id(Uuid::new_v4()).await?.is_none());
    Ok(())
}
