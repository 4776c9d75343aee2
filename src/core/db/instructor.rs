use crate::models::Instructor;

pub trait InstructorRepository {
    fn get_instructors(&self) -> impl Future<Output = anyhow::Result<Vec<Instructor>>>;
    fn add_instructor(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> impl Future<Output = anyhow::Result<Instructor>>;
}
