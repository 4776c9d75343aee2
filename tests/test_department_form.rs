//! Department save-form lifecycle tests.
//!
//! Tests cover:
//! - Name length and administrator validation
//! - The date-picker patch path
//! - Added/updated notice selection by id presence

mod common;

use common::*;
use time::macros::date;
use uuid::Uuid;

fn draft() -> Department {
    make_department("Computer Science", Uuid::new_v4())
}

#[test]
fn test_short_name_rejects() {
    for name in ["", "Math", "abcd"] {
        let mut department = draft();
        department.name = name.to_string();
        let mut form = SaveForm::new(&department);

        assert!(
            matches!(form.submit(), Submit::Rejected),
            "name {name:?} should be rejected"
        );
        assert_eq!(
            form.error(DepartmentField::Name),
            Some("Name must be at least 5 characters.")
        );
    }
}

#[test]
fn test_five_character_name_with_administrator_is_valid() {
    let mut department = draft();
    department.name = "Maths".to_string();
    let mut form = SaveForm::new(&department);

    assert!(matches!(form.submit(), Submit::Accepted { .. }));
    assert!(form.errors().is_empty());
}

#[test]
fn test_missing_administrator_rejects() {
    let mut department = draft();
    department.instructor_id = None;
    let mut form = SaveForm::new(&department);

    assert!(matches!(form.submit(), Submit::Rejected));
    assert_eq!(form.errors().len(), 1);
    assert_eq!(
        form.error(DepartmentField::InstructorId),
        Some("Administrator is required.")
    );
}

#[test]
fn test_start_date_patch_sets_only_the_date() {
    let department = draft();
    let mut form = SaveForm::new(&department);
    form.open(&department);

    form.apply(DepartmentPatch::StartDate(date!(2026 - 09 - 01)));

    assert_eq!(form.record().start_date, Some(date!(2026 - 09 - 01)));
    assert_eq!(form.record().name, department.name);
    assert_eq!(form.record().instructor_id, department.instructor_id);
}

#[test]
fn test_notice_by_id_presence() {
    let mut form = SaveForm::new(&draft());
    let Submit::Accepted { notice, .. } = form.submit() else {
        panic!("valid draft should be accepted");
    };
    assert_eq!(notice, "Department added");

    let mut existing = draft();
    existing.id = Some(Uuid::new_v4());
    let mut form = SaveForm::new(&existing);
    let Submit::Accepted { notice, .. } = form.submit() else {
        panic!("valid draft should be accepted");
    };
    assert_eq!(notice, "Department updated");
}

#[test]
fn test_save_failure_keeps_dialog_open() {
    let department = draft();
    let mut form = SaveForm::new(&department);
    form.open(&department);

    assert!(matches!(form.submit(), Submit::Accepted { .. }));
    assert!(form.is_saving());

    form.save_failed();
    assert!(!form.is_saving());
    assert!(form.is_visible());
    assert!(form.errors().is_empty());
}
