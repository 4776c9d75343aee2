use iced::{
    Color, Element,
    widget::{center, column, container, mouse_area, opaque, stack, text},
};

/// Overlay `dialog` centered over `base` behind a dimmed backdrop.
/// Clicking the backdrop emits `on_blur`.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        ),
    ]
    .into()
}

/// Label + input + optional inline error text.
pub fn labeled_field<'a, Message: 'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut field = column![text(label).size(14), input.into()].spacing(4);
    if let Some(message) = error {
        field = field.push(text(message).size(12).color(Color::from_rgb8(222, 80, 80)));
    }
    field.into()
}

/// Toast banner shown after a successful save.
pub fn banner<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message))
        .padding(10)
        .style(container::rounded_box)
        .into()
}
