pub mod course_save;
pub mod department_save;

use iced::{Element, Task};

use crate::gui::AppState;

/// A child message stays inside the screen; a parent message asks the app
/// to act (close the dialog, show a toast, reload a list).
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;

    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

impl<S: Screen> std::fmt::Debug for ScreenMessage<S>
where
    S::Message: std::fmt::Debug,
    S::ParentMessage: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenMessage::ScreenMessage(message) => {
                f.debug_tuple("ScreenMessage").field(message).finish()
            }
            ScreenMessage::ParentMessage(message) => {
                f.debug_tuple("ParentMessage").field(message).finish()
            }
        }
    }
}

impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(message) => {
                ScreenMessage::ScreenMessage(message.clone())
            }
            ScreenMessage::ParentMessage(message) => {
                ScreenMessage::ParentMessage(message.clone())
            }
        }
    }
}
