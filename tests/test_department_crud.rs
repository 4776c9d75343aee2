//! Integration tests for Department and Instructor repository operations.
//!
//! Tests cover:
//! - Insert/update dispatch on id presence
//! - Start date round-tripping through the TEXT column
//! - Instructor listing for the administrator pick list

mod common;

use common::*;
use time::macros::date;
use uuid::Uuid;

#[tokio::test]
async fn test_save_new_department_allocates_id() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let instructor = seed_instructor(&db, "Grace", "Hopper").await;

    let saved = db
        .save_department(&make_department("Computer Science", instructor.id))
        .await?;

    let id = saved.id.expect("insert should allocate an id");
    let reloaded = db
        .get_department_by_id(id)
        .await?
        .expect("department should exist");
    assert_eq!(reloaded.name, "Computer Science");
    assert_eq!(reloaded.instructor_id, Some(instructor.id));
    assert_eq!(reloaded.start_date, None);

    Ok(())
}

#[tokio::test]
async fn test_start_date_round_trips() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let instructor = seed_instructor(&db, "Grace", "Hopper").await;

    let mut department = make_department("Mathematics", instructor.id);
    department.start_date = Some(date!(2026 - 09 - 01));
    let saved = db.save_department(&department).await?;

    let reloaded = db
        .get_department_by_id(saved.id.unwrap())
        .await?
        .expect("department should exist");
    assert_eq!(reloaded.start_date, Some(date!(2026 - 09 - 01)));

    Ok(())
}

#[tokio::test]
async fn test_save_existing_department_updates_in_place() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let instructor = seed_instructor(&db, "Grace", "Hopper").await;
    let saved = db
        .save_department(&make_department("Mathematics", instructor.id))
        .await?;

    let mut updated = saved.clone();
    updated.name = "Applied Mathematics".to_string();
    db.save_department(&updated).await?;

    let departments = db.get_departments().await?;
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].id, saved.id);
    assert_eq!(departments[0].name, "Applied Mathematics");

    Ok(())
}

#[tokio::test]
async fn test_update_of_unknown_department_fails() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let instructor = seed_instructor(&db, "Grace", "Hopper").await;

    let mut department = make_department("Mathematics", instructor.id);
    department.id = Some(Uuid::new_v4());

    let result = db.save_department(&department).await;
    assert!(result.is_err(), "updating a missing row should fail");

    Ok(())
}

#[tokio::test]
async fn test_delete_department() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    let instructor = seed_instructor(&db, "Grace", "Hopper").await;
    let saved = db
        .save_department(&make_department("Mathematics", instructor.id))
        .await?;
    let id = saved.id.unwrap();

    db.delete_department(saved).await?;

    assert!(db.get_department_by_id(id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_instructors_are_listed_by_name() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;
    seed_instructor(&db, "Grace", "Hopper").await;
    seed_instructor(&db, "Alan", "Turing").await;
    seed_instructor(&db, "Edsger", "Dijkstra").await;

    let instructors = db.get_instructors().await?;
    let last_names: Vec<&str> = instructors
        .iter()
        .map(|instructor| instructor.last_name.as_str())
        .collect();
    assert_eq!(last_names, ["Dijkstra", "Hopper", "Turing"]);

    Ok(())
}
