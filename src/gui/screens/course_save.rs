use iced::{
    Element, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::{
    core::db::CourseRepository,
    formatters::{self, SelectItem},
    forms::{SaveForm, Submit},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::labeled_field,
    },
    models::{Course, CourseField, CoursePatch},
};

/// Modal dialog for creating or editing a single course.
#[derive(Debug, Clone)]
pub struct CourseSaveScreen {
    form: SaveForm<Course>,
    departments: Vec<SelectItem>,
}

#[derive(Debug, Clone)]
pub enum CourseSaveMessage {
    Field(CoursePatch),
    SavePressed,
    /// Save outcome plus the notice snapshotted when the save started.
    SaveFinished(Result<(), String>, String),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Close,
    Saved(String),
}

impl CourseSaveScreen {
    pub fn new() -> Self {
        Self {
            form: SaveForm::new(&Course::default()),
            departments: Vec::new(),
        }
    }

    /// Show the dialog for `course` with the given department options.
    pub fn open(&mut self, course: &Course, departments: Vec<SelectItem>) {
        self.departments = departments;
        self.form.open(course);
    }

    pub fn close(&mut self) {
        self.form.close();
    }

    pub fn is_visible(&self) -> bool {
        self.form.is_visible()
    }
}

impl Default for CourseSaveScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CourseSaveScreen {
    type Message = CourseSaveMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let course = self.form.record();
        let selected = formatters::selected_item(&self.departments, course.department_id);

        let fields = column![
            labeled_field(
                "Number",
                text_input("", &course.number).on_input(|value| {
                    ScreenMessage::ScreenMessage(CourseSaveMessage::Field(CoursePatch::Number(
                        value,
                    )))
                }),
                self.form.error(CourseField::Number),
            ),
            labeled_field(
                "Title",
                text_input("", &course.title).on_input(|value| {
                    ScreenMessage::ScreenMessage(CourseSaveMessage::Field(CoursePatch::Title(
                        value,
                    )))
                }),
                self.form.error(CourseField::Title),
            ),
            labeled_field(
                "Credits",
                text_input("", &course.credits).on_input(|value| {
                    ScreenMessage::ScreenMessage(CourseSaveMessage::Field(CoursePatch::Credits(
                        value,
                    )))
                }),
                self.form.error(CourseField::Credits),
            ),
            labeled_field(
                "Department",
                pick_list(self.departments.clone(), selected, |item: SelectItem| {
                    ScreenMessage::ScreenMessage(CourseSaveMessage::Field(
                        CoursePatch::DepartmentId(item.id),
                    ))
                }),
                self.form.error(CourseField::DepartmentId),
            ),
        ]
        .spacing(12);

        let save_label = if self.form.is_saving() {
            "Saving..."
        } else {
            "Save"
        };
        let footer = row![
            button(text(save_label))
                .on_press(ScreenMessage::ScreenMessage(CourseSaveMessage::SavePressed)),
            button("Close").on_press(ScreenMessage::ParentMessage(ParentMessage::Close)),
        ]
        .spacing(10);

        container(column![text(self.form.title()).size(24), fields, footer].spacing(20))
            .style(container::bordered_box)
            .padding(20)
            .width(420)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            CourseSaveMessage::Field(patch) => {
                self.form.apply(patch);
                Task::none()
            }
            CourseSaveMessage::SavePressed => match self.form.submit() {
                Submit::Rejected => Task::none(),
                Submit::Accepted { record, notice } => {
                    let save = state.db.save_course(&record);
                    Task::perform(
                        async move { save.await.map(|_| ()).map_err(|error| error.to_string()) },
                        move |result| {
                            ScreenMessage::ScreenMessage(CourseSaveMessage::SaveFinished(
                                result,
                                notice.clone(),
                            ))
                        },
                    )
                }
            },
            CourseSaveMessage::SaveFinished(Ok(()), notice) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Saved(notice)))
            }
            // The rejection reason is not surfaced; the form just re-arms.
            CourseSaveMessage::SaveFinished(Err(_), _) => {
                self.form.save_failed();
                Task::none()
            }
        }
    }
}
