mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from campus_admin for tests
pub use campus_admin::core::db::{
    AdminDb, CourseRepository, DepartmentRepository, InstructorRepository,
};
pub use campus_admin::forms::{SaveForm, Submit};
pub use campus_admin::models::{
    Course, CourseField, CoursePatch, Department, DepartmentField, DepartmentPatch, Instructor,
};
