use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::forms::{ErrorMap, FormRecord};

/// A course offered by a department. `credits` holds the raw input text;
/// it is parsed during validation and by the repository on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<Uuid>,
    pub number: String,
    pub title: String,
    pub credits: String,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CourseField {
    Number,
    Title,
    Credits,
    DepartmentId,
}

#[derive(Debug, Clone)]
pub enum CoursePatch {
    Number(String),
    Title(String),
    Credits(String),
    DepartmentId(Uuid),
}

impl FormRecord for Course {
    const KIND: &'static str = "Course";

    type Field = CourseField;
    type Patch = CoursePatch;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn apply(&mut self, patch: CoursePatch) {
        match patch {
            CoursePatch::Number(value) => self.number = value,
            CoursePatch::Title(value) => self.title = value,
            CoursePatch::Credits(value) => self.credits = value,
            CoursePatch::DepartmentId(value) => self.department_id = Some(value),
        }
    }

    fn validate(&self) -> ErrorMap<CourseField> {
        let mut errors = ErrorMap::new();

        if self.number.is_empty() {
            errors.set(CourseField::Number, "The Number field is required.");
        }

        if self.title.is_empty() {
            errors.set(CourseField::Title, "The Title field is required.");
        }

        if self.credits.is_empty() {
            errors.set(CourseField::Credits, "The Credits field is required.");
        }

        // Runs even when the required check already failed; a non-numeric
        // value fails it and its message replaces the one above. An empty
        // value coerces to zero and stays in range, so the required
        // message stands.
        if !credits_in_range(&self.credits) {
            errors.set(
                CourseField::Credits,
                "The field Credits must be between 0 and 5.",
            );
        }

        if self.department_id.is_none() {
            errors.set(CourseField::DepartmentId, "Department is required.");
        }

        errors
    }
}

fn credits_in_range(credits: &str) -> bool {
    let credits = credits.trim();
    if credits.is_empty() {
        return true;
    }
    credits
        .parse::<f64>()
        .is_ok_and(|value| (0.0..5.0).contains(&value))
}

/// A department led by an instructor. The start date is only settable
/// through the date-picker patch variant and carries no validation rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: Option<Uuid>,
    pub name: String,
    pub instructor_id: Option<Uuid>,
    pub start_date: Option<Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DepartmentField {
    Name,
    InstructorId,
}

#[derive(Debug, Clone)]
pub enum DepartmentPatch {
    Name(String),
    InstructorId(Uuid),
    StartDate(Date),
}

impl FormRecord for Department {
    const KIND: &'static str = "Department";

    type Field = DepartmentField;
    type Patch = DepartmentPatch;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn apply(&mut self, patch: DepartmentPatch) {
        match patch {
            DepartmentPatch::Name(value) => self.name = value,
            DepartmentPatch::InstructorId(value) => self.instructor_id = Some(value),
            DepartmentPatch::StartDate(value) => self.start_date = Some(value),
        }
    }

    fn validate(&self) -> ErrorMap<DepartmentField> {
        let mut errors = ErrorMap::new();

        if self.name.chars().count() < 5 {
            errors.set(DepartmentField::Name, "Name must be at least 5 characters.");
        }

        if self.instructor_id.is_none() {
            errors.set(DepartmentField::InstructorId, "Administrator is required.");
        }

        errors
    }
}

/// Reference entity for the department form's administrator pick list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}
