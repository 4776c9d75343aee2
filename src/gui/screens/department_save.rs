use iced::{
    Element, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};
use iced_aw::date_picker::Date as PickerDate;

use crate::{
    core::db::DepartmentRepository,
    formatters::{self, SelectItem},
    forms::{SaveForm, Submit},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::labeled_field,
    },
    models::{Department, DepartmentField, DepartmentPatch},
};

/// Modal dialog for creating or editing a single department. The start
/// date goes through a picker overlay rather than a text input.
#[derive(Debug, Clone)]
pub struct DepartmentSaveScreen {
    form: SaveForm<Department>,
    instructors: Vec<SelectItem>,
    show_picker: bool,
}

#[derive(Debug, Clone)]
pub enum DepartmentSaveMessage {
    Field(DepartmentPatch),
    ChooseDate,
    CancelDate,
    SubmitDate(PickerDate),
    SavePressed,
    SaveFinished(Result<(), String>, String),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Close,
    Saved(String),
}

impl DepartmentSaveScreen {
    pub fn new() -> Self {
        Self {
            form: SaveForm::new(&Department::default()),
            instructors: Vec::new(),
            show_picker: false,
        }
    }

    /// Show the dialog for `department` with the given instructor options.
    pub fn open(&mut self, department: &Department, instructors: Vec<SelectItem>) {
        self.instructors = instructors;
        self.show_picker = false;
        self.form.open(department);
    }

    pub fn close(&mut self) {
        self.form.close();
    }

    pub fn is_visible(&self) -> bool {
        self.form.is_visible()
    }
}

impl Default for DepartmentSaveScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn to_picker_date(date: time::Date) -> PickerDate {
    PickerDate {
        year: date.year(),
        month: u32::from(u8::from(date.month())),
        day: u32::from(date.day()),
    }
}

fn from_picker_date(date: PickerDate) -> Option<time::Date> {
    let month = time::Month::try_from(date.month as u8).ok()?;
    time::Date::from_calendar_date(date.year, month, date.day as u8).ok()
}

impl Screen for DepartmentSaveScreen {
    type Message = DepartmentSaveMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let department = self.form.record();
        let selected = formatters::selected_item(&self.instructors, department.instructor_id);

        let date_label = match department.start_date {
            Some(date) => format!("Start date: {date}"),
            None => "Set start date".to_string(),
        };
        let date_button = button(text(date_label))
            .on_press(ScreenMessage::ScreenMessage(DepartmentSaveMessage::ChooseDate));
        let date_field = iced_aw::helpers::date_picker(
            self.show_picker,
            department
                .start_date
                .map(to_picker_date)
                .unwrap_or_else(PickerDate::today),
            date_button,
            ScreenMessage::ScreenMessage(DepartmentSaveMessage::CancelDate),
            |date| ScreenMessage::ScreenMessage(DepartmentSaveMessage::SubmitDate(date)),
        );

        let fields = column![
            labeled_field(
                "Name",
                text_input("", &department.name).on_input(|value| {
                    ScreenMessage::ScreenMessage(DepartmentSaveMessage::Field(
                        DepartmentPatch::Name(value),
                    ))
                }),
                self.form.error(DepartmentField::Name),
            ),
            labeled_field(
                "Administrator",
                pick_list(self.instructors.clone(), selected, |item: SelectItem| {
                    ScreenMessage::ScreenMessage(DepartmentSaveMessage::Field(
                        DepartmentPatch::InstructorId(item.id),
                    ))
                }),
                self.form.error(DepartmentField::InstructorId),
            ),
            labeled_field("Start date", date_field, None),
        ]
        .spacing(12);

        let save_label = if self.form.is_saving() {
            "Saving..."
        } else {
            "Save"
        };
        let footer = row![
            button(text(save_label)).on_press(ScreenMessage::ScreenMessage(
                DepartmentSaveMessage::SavePressed
            )),
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
            DepartmentSaveMessage::Field(patch) => {
                self.form.apply(patch);
                Task::none()
            }
            DepartmentSaveMessage::ChooseDate => {
                self.show_picker = true;
                Task::none()
            }
            DepartmentSaveMessage::CancelDate => {
                self.show_picker = false;
                Task::none()
            }
            DepartmentSaveMessage::SubmitDate(date) => {
                if let Some(date) = from_picker_date(date) {
                    self.form.apply(DepartmentPatch::StartDate(date));
                }
                self.show_picker = false;
                Task::none()
            }
            DepartmentSaveMessage::SavePressed => match self.form.submit() {
                Submit::Rejected => Task::none(),
                Submit::Accepted { record, notice } => {
                    let save = state.db.save_department(&record);
                    Task::perform(
                        async move { save.await.map(|_| ()).map_err(|error| error.to_string()) },
                        move |result| {
                            ScreenMessage::ScreenMessage(DepartmentSaveMessage::SaveFinished(
                                result,
                                notice.clone(),
                            ))
                        },
                    )
                }
            },
            DepartmentSaveMessage::SaveFinished(Ok(()), notice) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Saved(notice)))
            }
            DepartmentSaveMessage::SaveFinished(Err(_), _) => {
                self.form.save_failed();
                Task::none()
            }
        }
    }
}
