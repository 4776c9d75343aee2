use uuid::Uuid;

use crate::{
    gui::{
        AppState,
        screens::{
            ScreenMessage, course_save::CourseSaveScreen, department_save::DepartmentSaveScreen,
        },
    },
    models::{Course, Department},
};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<AppState, String>),
    NewCourse,
    EditCourse(Uuid),
    NewDepartment,
    EditDepartment(Uuid),
    CourseSave(ScreenMessage<CourseSaveScreen>),
    DepartmentSave(ScreenMessage<DepartmentSaveScreen>),
    CoursesReloaded(Result<Vec<Course>, String>),
    DepartmentsReloaded(Result<Vec<Department>, String>),
    ToastExpired(u64),
}
