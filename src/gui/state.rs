use crate::{
    core::db::AdminDb,
    models::{Course, Department, Instructor},
};

/// Loaded application data shared with the dialog screens. The records the
/// dialogs edit are clones of entries in these lists, never the entries
/// themselves.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: AdminDb,
    pub courses: Vec<Course>,
    pub departments: Vec<Department>,
    pub instructors: Vec<Instructor>,
}
