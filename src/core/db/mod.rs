mod course;
mod department;
mod instructor;
mod state;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use sqlx::{Row, sqlite::SqliteRow};
use time::{Date, macros::format_description};
use uuid::Uuid;

use crate::models::{Course, Department, Instructor};
use state::DbState;

pub use course::CourseRepository;
pub use department::DepartmentRepository;
pub use instructor::InstructorRepository;

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Handle to the administration database. Cheap to clone; every clone
/// shares the same connection pool.
#[derive(Debug, Clone)]
pub struct AdminDb {
    state: Arc<DbState>,
}

impl AdminDb {
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(DbState::new(db_file).await?),
        })
    }
}

fn parse_id(value: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("Invalid record id {value:?}"))
}

/// Credits are stored as REAL but edited as text; whole values render
/// without a trailing fraction.
fn format_credits(credits: f64) -> String {
    if credits.fract() == 0.0 {
        format!("{}", credits as i64)
    } else {
        credits.to_string()
    }
}

fn course_from_row(row: &SqliteRow) -> anyhow::Result<Course> {
    let id: String = row.try_get("id")?;
    let department_id: String = row.try_get("department_id")?;
    let credits: f64 = row.try_get("credits")?;
    Ok(Course {
        id: Some(parse_id(&id)?),
        number: row.try_get("number")?,
        title: row.try_get("title")?,
        credits: format_credits(credits),
        department_id: Some(parse_id(&department_id)?),
    })
}

fn department_from_row(row: &SqliteRow) -> anyhow::Result<Department> {
    let id: String = row.try_get("id")?;
    let instructor_id: String = row.try_get("instructor_id")?;
    let start_date: Option<String> = row.try_get("start_date")?;
    let start_date = start_date
        .map(|raw| {
            Date::parse(&raw, DATE_FORMAT)
                .with_context(|| format!("Invalid start date {raw:?}"))
        })
        .transpose()?;
    Ok(Department {
        id: Some(parse_id(&id)?),
        name: row.try_get("name")?,
        instructor_id: Some(parse_id(&instructor_id)?),
        start_date,
    })
}

impl CourseRepository for AdminDb {
    async fn get_courses(&self) -> anyhow::Result<Vec<Course>> {
        let mut conn = self.state.conn().await?;
        sqlx::query("SELECT id, number, title, credits, department_id FROM course ORDER BY number ASC")
            .fetch_all(&mut *conn)
            .await?
            .iter()
            .map(course_from_row)
            .collect()
    }

    async fn get_course_by_id(&self, id: Uuid) -> anyhow::Result<Option<Course>> {
        let mut conn = self.state.conn().await?;
        let row =
            sqlx::query("SELECT id, number, title, credits, department_id FROM course WHERE id = $1")
                .bind(id.to_string())
                .fetch_optional(&mut *conn)
                .await?;
        row.as_ref().map(course_from_row).transpose()
    }

    fn save_course(
        &self,
        course: &Course,
    ) -> impl Future<Output = anyhow::Result<Course>> + 'static {
        let state = self.state.clone();
        let course = course.clone();
        async move {
            let credits: f64 = course
                .credits
                .trim()
                .parse()
                .with_context(|| format!("Credits is not numeric: {:?}", course.credits))?;
            let department_id = course
                .department_id
                .context("Course has no department")?;

            let mut conn = state.conn().await?;
            match course.id {
                Some(id) => {
                    let result = sqlx::query(
                        "UPDATE course SET number = $1, title = $2, credits = $3, department_id = $4 WHERE id = $5",
                    )
                    .bind(&course.number)
                    .bind(&course.title)
                    .bind(credits)
                    .bind(department_id.to_string())
                    .bind(id.to_string())
                    .execute(&mut *conn)
                    .await?;
                    anyhow::ensure!(result.rows_affected() == 1, "Course {id} does not exist");
                    Ok(course)
                }
                None => {
                    let id = Uuid::new_v4();
                    sqlx::query(
                        "INSERT INTO course (id, number, title, credits, department_id) VALUES ($1, $2, $3, $4, $5)",
                    )
                    .bind(id.to_string())
                    .bind(&course.number)
                    .bind(&course.title)
                    .bind(credits)
                    .bind(department_id.to_string())
                    .execute(&mut *conn)
                    .await?;
                    Ok(Course {
                        id: Some(id),
                        ..course
                    })
                }
            }
        }
    }

    async fn delete_course(&self, course: Course) -> anyhow::Result<()> {
        let id = course.id.context("Course was never saved")?;
        let mut conn = self.state.conn().await?;
        sqlx::query("DELETE FROM course WHERE id = $1")
            .bind(id.to_string())
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

impl DepartmentRepository for AdminDb {
    async fn get_departments(&self) -> anyhow::Result<Vec<Department>> {
        let mut conn = self.state.conn().await?;
        sqlx::query(
            "SELECT id, name, instructor_id, start_date FROM department ORDER BY name ASC",
        )
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(department_from_row)
        .collect()
    }

    async fn get_department_by_id(&self, id: Uuid) -> anyhow::Result<Option<Department>> {
        let mut conn = self.state.conn().await?;
        let row = sqlx::query(
            "SELECT id, name, instructor_id, start_date FROM department WHERE id = $1",
        )
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await?;
        row.as_ref().map(department_from_row).transpose()
    }

    fn save_department(
        &self,
        department: &Department,
    ) -> impl Future<Output = anyhow::Result<Department>> + 'static {
        let state = self.state.clone();
        let department = department.clone();
        async move {
            let instructor_id = department
                .instructor_id
                .context("Department has no administrator")?;
            let start_date = department
                .start_date
                .map(|date| date.format(DATE_FORMAT))
                .transpose()?;

            let mut conn = state.conn().await?;
            match department.id {
                Some(id) => {
                    let result = sqlx::query(
                        "UPDATE department SET name = $1, instructor_id = $2, start_date = $3 WHERE id = $4",
                    )
                    .bind(&department.name)
                    .bind(instructor_id.to_string())
                    .bind(&start_date)
                    .bind(id.to_string())
                    .execute(&mut *conn)
                    .await?;
                    anyhow::ensure!(result.rows_affected() == 1, "Department {id} does not exist");
                    Ok(department)
                }
                None => {
                    let id = Uuid::new_v4();
                    sqlx::query(
                        "INSERT INTO department (id, name, instructor_id, start_date) VALUES ($1, $2, $3, $4)",
                    )
                    .bind(id.to_string())
                    .bind(&department.name)
                    .bind(instructor_id.to_string())
                    .bind(&start_date)
                    .execute(&mut *conn)
                    .await?;
                    Ok(Department {
                        id: Some(id),
                        ..department
                    })
                }
            }
        }
    }

    async fn delete_department(&self, department: Department) -> anyhow::Result<()> {
        let id = department.id.context("Department was never saved")?;
        let mut conn = self.state.conn().await?;
        sqlx::query("DELETE FROM department WHERE id = $1")
            .bind(id.to_string())
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

impl InstructorRepository for AdminDb {
    async fn get_instructors(&self) -> anyhow::Result<Vec<Instructor>> {
        let mut conn = self.state.conn().await?;
        sqlx::query(
            "SELECT id, first_name, last_name FROM instructor ORDER BY last_name ASC, first_name ASC",
        )
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(|row| {
            let id: String = row.try_get("id")?;
            Ok(Instructor {
                id: parse_id(&id)?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
            })
        })
        .collect()
    }

    async fn add_instructor(&self, first_name: &str, last_name: &str) -> anyhow::Result<Instructor> {
        let id = Uuid::new_v4();
        let mut conn = self.state.conn().await?;
        sqlx::query("INSERT INTO instructor (id, first_name, last_name) VALUES ($1, $2, $3)")
            .bind(id.to_string())
            .bind(first_name)
            .bind(last_name)
            .execute(&mut *conn)
            .await?;
        Ok(Instructor {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }
}
