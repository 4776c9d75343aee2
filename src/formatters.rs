use std::fmt;

use uuid::Uuid;

use crate::models::{Department, Instructor};

/// A selectable `{id, label}` pair for foreign-key pick lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub id: Uuid,
    pub label: String,
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Department options for the course form. Unsaved departments (no id yet)
/// are not selectable.
pub fn department_select_list(departments: &[Department]) -> Vec<SelectItem> {
    departments
        .iter()
        .filter_map(|department| {
            department.id.map(|id| SelectItem {
                id,
                label: department.name.clone(),
            })
        })
        .collect()
}

/// Instructor options for the department form's administrator field.
pub fn instructor_select_list(instructors: &[Instructor]) -> Vec<SelectItem> {
    instructors
        .iter()
        .map(|instructor| SelectItem {
            id: instructor.id,
            label: format!("{} {}", instructor.first_name, instructor.last_name),
        })
        .collect()
}

/// Resolve the currently selected option by id, for pick list display.
pub fn selected_item(options: &[SelectItem], id: Option<Uuid>) -> Option<SelectItem> {
    let id = id?;
    options.iter().find(|item| item.id == id).cloned()
}
