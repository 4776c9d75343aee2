use campus_admin::core::db::{AdminDb, DepartmentRepository, InstructorRepository};
use campus_admin::models::{Course, Department, Instructor};
use uuid::Uuid;

/// Creates an AdminDb backed by a temporary sqlite file.
/// Returns both the handle and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (AdminDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test-campus.db");
    let db = AdminDb::new(&path)
        .await
        .expect("Failed to open test database");
    (db, dir)
}

/// Seeds one instructor row.
pub async fn seed_instructor(db: &AdminDb, first_name: &str, last_name: &str) -> Instructor {
    db.add_instructor(first_name, last_name)
        .await
        .expect("Failed to seed instructor")
}

/// Seeds a department (with its own instructor) and returns the saved row.
pub async fn seed_department(db: &AdminDb, name: &str) -> Department {
    let instructor = seed_instructor(db, "Ada", "Lovelace").await;
    db.save_department(&make_department(name, instructor.id))
        .await
        .expect("Failed to seed department")
}

/// A valid new-course draft pointing at the given department.
pub fn make_course(department_id: Uuid) -> Course {
    Course {
        id: None,
        number: "101".to_string(),
        title: "CS101".to_string(),
        credits: "3".to_string(),
        department_id: Some(department_id),
    }
}

/// A valid new-department draft led by the given instructor.
pub fn make_department(name: &str, instructor_id: Uuid) -> Department {
    Department {
        id: None,
        name: name.to_string(),
        instructor_id: Some(instructor_id),
        start_date: None,
    }
}
