mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::AdminApp;
pub use message::Message;
pub use state::AppState;

use std::path::PathBuf;

pub fn run(db_path: PathBuf) -> iced::Result {
    iced::application(
        move || AdminApp::new(db_path.clone()),
        AdminApp::update,
        AdminApp::view,
    )
    .title("Campus Admin")
    .theme(AdminApp::theme)
    .run()
}
