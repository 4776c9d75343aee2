use uuid::Uuid;

use crate::models::Course;

pub trait CourseRepository {
    fn get_courses(&self) -> impl Future<Output = anyhow::Result<Vec<Course>>>;
    fn get_course_by_id(&self, id: Uuid) -> impl Future<Output = anyhow::Result<Option<Course>>>;
    /// Create-vs-update dispatch on id presence: inserts allocate a fresh
    /// id, updates require the row to exist.
    fn save_course(&self, course: &Course) -> impl Future<Output = anyhow::Result<Course>> + 'static;
    fn delete_course(&self, course: Course) -> impl Future<Output = anyhow::Result<()>>;
}
