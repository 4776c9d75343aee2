use std::path::PathBuf;
use std::time::Duration;

use iced::{
    Alignment::Center,
    Element, Length, Task, Theme,
    widget::{button, column, container, row, scrollable, text},
};

use crate::{
    core::db::{AdminDb, CourseRepository, DepartmentRepository, InstructorRepository},
    formatters,
    gui::{
        AppState, Message,
        screens::{
            Screen, ScreenMessage,
            course_save::{self, CourseSaveScreen},
            department_save::{self, DepartmentSaveScreen},
        },
        widgets,
    },
    models::{Course, Department},
};

pub struct AdminApp {
    state: Option<AppState>,
    course_form: CourseSaveScreen,
    department_form: DepartmentSaveScreen,
    toast: Option<String>,
    toast_seq: u64,
}

async fn load(db_path: PathBuf) -> anyhow::Result<AppState> {
    let db = AdminDb::new(&db_path).await?;
    let courses = db.get_courses().await?;
    let departments = db.get_departments().await?;
    let instructors = db.get_instructors().await?;
    Ok(AppState {
        db,
        courses,
        departments,
        instructors,
    })
}

impl AdminApp {
    pub fn new(db_path: PathBuf) -> (Self, Task<Message>) {
        (
            Self {
                state: None,
                course_form: CourseSaveScreen::new(),
                department_form: DepartmentSaveScreen::new(),
                toast: None,
                toast_seq: 0,
            },
            Task::perform(load(db_path), |result| {
                Message::Loaded(result.map_err(|error| error.to_string()))
            }),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(state)) => {
                self.state = Some(state);
                Task::none()
            }
            Message::Loaded(Err(error)) => {
                eprintln!("Failed to open database: {error}");
                Task::none()
            }
            Message::NewCourse => {
                self.open_course(&Course::default());
                Task::none()
            }
            Message::EditCourse(id) => {
                let course = self
                    .state
                    .as_ref()
                    .and_then(|state| state.courses.iter().find(|c| c.id == Some(id)).cloned());
                if let Some(course) = course {
                    self.open_course(&course);
                }
                Task::none()
            }
            Message::NewDepartment => {
                self.open_department(&Department::default());
                Task::none()
            }
            Message::EditDepartment(id) => {
                let department = self.state.as_ref().and_then(|state| {
                    state.departments.iter().find(|d| d.id == Some(id)).cloned()
                });
                if let Some(department) = department {
                    self.open_department(&department);
                }
                Task::none()
            }
            Message::CourseSave(ScreenMessage::ScreenMessage(message)) => {
                let Some(state) = &mut self.state else {
                    return Task::none();
                };
                self.course_form.update(message, state).map(Message::CourseSave)
            }
            Message::CourseSave(ScreenMessage::ParentMessage(message)) => match message {
                course_save::ParentMessage::Close => {
                    self.course_form.close();
                    Task::none()
                }
                course_save::ParentMessage::Saved(notice) => {
                    self.course_form.close();
                    Task::batch([self.show_toast(notice), self.reload_courses()])
                }
            },
            Message::DepartmentSave(ScreenMessage::ScreenMessage(message)) => {
                let Some(state) = &mut self.state else {
                    return Task::none();
                };
                self.department_form
                    .update(message, state)
                    .map(Message::DepartmentSave)
            }
            Message::DepartmentSave(ScreenMessage::ParentMessage(message)) => match message {
                department_save::ParentMessage::Close => {
                    self.department_form.close();
                    Task::none()
                }
                department_save::ParentMessage::Saved(notice) => {
                    self.department_form.close();
                    Task::batch([self.show_toast(notice), self.reload_departments()])
                }
            },
            Message::CoursesReloaded(Ok(courses)) => {
                if let Some(state) = &mut self.state {
                    state.courses = courses;
                }
                Task::none()
            }
            Message::CoursesReloaded(Err(error)) => {
                eprintln!("Failed to reload courses: {error}");
                Task::none()
            }
            Message::DepartmentsReloaded(Ok(departments)) => {
                if let Some(state) = &mut self.state {
                    state.departments = departments;
                }
                Task::none()
            }
            Message::DepartmentsReloaded(Err(error)) => {
                eprintln!("Failed to reload departments: {error}");
                Task::none()
            }
            Message::ToastExpired(seq) => {
                if seq == self.toast_seq {
                    self.toast = None;
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let Some(state) = &self.state else {
            return container(text("Loading..."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let base = self.home(state);

        if self.course_form.is_visible() {
            widgets::modal(
                base,
                self.course_form.view().map(Message::CourseSave),
                Message::CourseSave(ScreenMessage::ParentMessage(
                    course_save::ParentMessage::Close,
                )),
            )
        } else if self.department_form.is_visible() {
            widgets::modal(
                base,
                self.department_form.view().map(Message::DepartmentSave),
                Message::DepartmentSave(ScreenMessage::ParentMessage(
                    department_save::ParentMessage::Close,
                )),
            )
        } else {
            base
        }
    }

    fn home<'a>(&'a self, state: &'a AppState) -> Element<'a, Message> {
        let mut courses = column![].spacing(6);
        for course in &state.courses {
            courses = courses.push(
                row![
                    text(format!("{} {}", course.number, course.title)).width(Length::Fill),
                    button("Edit").on_press_maybe(course.id.map(Message::EditCourse)),
                ]
                .spacing(10)
                .align_y(Center),
            );
        }

        let mut departments = column![].spacing(6);
        for department in &state.departments {
            departments = departments.push(
                row![
                    text(&department.name).width(Length::Fill),
                    button("Edit").on_press_maybe(department.id.map(Message::EditDepartment)),
                ]
                .spacing(10)
                .align_y(Center),
            );
        }

        let content = column![
            row![
                text("Courses").size(24).width(Length::Fill),
                button("New Course").on_press(Message::NewCourse),
            ]
            .align_y(Center),
            courses,
            row![
                text("Departments").size(24).width(Length::Fill),
                button("New Department").on_press(Message::NewDepartment),
            ]
            .align_y(Center),
            departments,
        ]
        .spacing(16)
        .padding(20);

        let mut page = column![];
        if let Some(toast) = &self.toast {
            page = page.push(widgets::banner(toast));
        }
        page.push(scrollable(content)).into()
    }

    fn open_course(&mut self, course: &Course) {
        let Some(state) = &self.state else {
            return;
        };
        let options = formatters::department_select_list(&state.departments);
        self.course_form.open(course, options);
    }

    fn open_department(&mut self, department: &Department) {
        let Some(state) = &self.state else {
            return;
        };
        let options = formatters::instructor_select_list(&state.instructors);
        self.department_form.open(department, options);
    }

    fn show_toast(&mut self, notice: String) -> Task<Message> {
        self.toast = Some(notice);
        self.toast_seq += 1;
        let seq = self.toast_seq;
        Task::perform(tokio::time::sleep(Duration::from_secs(4)), move |_| {
            Message::ToastExpired(seq)
        })
    }

    fn reload_courses(&self) -> Task<Message> {
        match &self.state {
            Some(state) => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.get_courses().await.map_err(|error| error.to_string()) },
                    Message::CoursesReloaded,
                )
            }
            None => Task::none(),
        }
    }

    fn reload_departments(&self) -> Task<Message> {
        match &self.state {
            Some(state) => {
                let db = state.db.clone();
                Task::perform(
                    async move { db.get_departments().await.map_err(|error| error.to_string()) },
                    Message::DepartmentsReloaded,
                )
            }
            None => Task::none(),
        }
    }
}
