use uuid::Uuid;

use crate::models::Department;

pub trait DepartmentRepository {
    fn get_departments(&self) -> impl Future<Output = anyhow::Result<Vec<Department>>>;
    fn get_department_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = anyhow::Result<Option<Department>>>;
    fn save_department(
        &self,
        department: &Department,
    ) -> impl Future<Output = anyhow::Result<Department>> + 'static;
    fn delete_department(&self, department: Department) -> impl Future<Output = anyhow::Result<()>>;
}
