//! Search form: text input plus submit button

use iced::widget::{button, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::Palette;

pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input("Search repositories...", value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .padding(Padding::from([10.0, 12.0]))
        .size(16)
        .width(Length::Fill)
        .style(|_theme, status| {
            let focused = matches!(status, text_input::Status::Focused);
            text_input::Style {
                background: Background::Color(Palette::SURFACE),
                border: Border {
                    color: if focused { Palette::PRIMARY } else { Palette::BORDER },
                    width: if focused { 2.0 } else { 1.0 },
                    radius: 8.0.into(),
                },
                icon: Palette::TEXT_MUTED,
                placeholder: Palette::TEXT_PLACEHOLDER,
                value: Palette::TEXT,
                selection: Palette::PRIMARY.scale_alpha(0.3),
            }
        });

    let submit = button(text("Search").size(16))
        .on_press(on_submit)
        .padding(Padding::from([10.0, 16.0]))
        .style(|_theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Color::from_rgb(0.114, 0.306, 0.847)
                }
                _ => Palette::PRIMARY,
            })),
            text_color: Color::WHITE,
            border: Border::default().rounded(8),
            ..Default::default()
        });

    row![input, submit].spacing(12).into()
}
