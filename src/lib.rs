pub mod core;
pub mod formatters;
pub mod forms;
pub mod models;

pub use formatters::SelectItem;
pub use forms::{FormRecord, SaveForm, Submit};
pub use models::{
    Course, CourseField, CoursePatch, Department, DepartmentField, DepartmentPatch, Instructor,
};

#[cfg(feature = "gui")]
pub mod gui;
