//! Page chrome: nav bar, footer and the error boundary page

use chrono::Datelike;
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Padding, Shadow, Vector};

use super::chrome::ChromeState;
use super::theme::{Palette, DESKTOP_NAV_MIN_WIDTH};
use crate::app::Message;
use crate::routes::{PageError, Route};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn nav<'a>(chrome: ChromeState, width: f32) -> Element<'a, Message> {
    let logo = button(
        row![
            container(text("</>").size(16).color(Color::WHITE))
                .width(40)
                .height(40)
                .center_x(40)
                .center_y(40)
                .style(|_theme| container::Style {
                    background: Some(Background::Gradient(
                        iced::gradient::Linear::new(std::f32::consts::FRAC_PI_4)
                            .add_stop(0.0, Palette::PRIMARY)
                            .add_stop(1.0, Palette::ACCENT)
                            .into(),
                    )),
                    border: Border::default().rounded(12),
                    ..Default::default()
                }),
            text("Repo Finder").size(24).font(BOLD).color(Palette::TEXT),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .style(button::text)
    .on_press(Message::Navigate(Route::Home));

    let desktop = width >= DESKTOP_NAV_MIN_WIDTH;
    let links: Element<'a, Message> = if desktop {
        row(Route::ALL.into_iter().map(nav_link))
            .spacing(16)
            .into()
    } else {
        button(text("☰").size(20).color(Palette::TEXT))
            .padding(8)
            .style(button::text)
            .on_press(Message::ToggleMenu)
            .into()
    };

    let bar = row![logo, Space::with_width(Length::Fill), links]
        .align_y(Alignment::Center)
        .padding(Padding::from([16.0, 24.0]));

    let mut content = Column::new().push(bar);
    if !desktop && chrome.menu_open {
        content = content.push(
            container(column(Route::ALL.into_iter().map(nav_link)).spacing(8))
                .padding(Padding::from([8.0, 16.0]))
                .width(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(Palette::SURFACE)),
                    border: Border {
                        color: Palette::BORDER,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }),
        );
    }

    let scrolled = chrome.scrolled;
    container(content)
        .width(Length::Fill)
        .style(move |_theme| {
            if scrolled {
                container::Style {
                    background: Some(Background::Color(Palette::SURFACE.scale_alpha(0.9))),
                    shadow: Shadow {
                        color: Palette::SHADOW,
                        offset: Vector::new(0.0, 4.0),
                        blur_radius: 12.0,
                    },
                    ..Default::default()
                }
            } else {
                container::Style::default()
            }
        })
        .into()
}

fn nav_link<'a>(route: Route) -> Element<'a, Message> {
    button(text(route.label()).size(16).color(Palette::TEXT_MUTED))
        .padding(Padding::from([8.0, 12.0]))
        .style(button::text)
        .on_press(Message::Navigate(route))
        .into()
}

pub fn footer_text() -> String {
    format!(
        "© {} Repo Finder by codeforcer — Built for developers ❤️",
        chrono::Local::now().year()
    )
}

pub fn footer<'a>() -> Element<'a, Message> {
    container(text(footer_text()).size(14).color(Palette::FOOTER_TEXT))
        .padding(24)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Palette::FOOTER)),
            ..Default::default()
        })
        .into()
}

/// Fallback shown in place of a page that could not be rendered
pub fn error_page(error: &PageError) -> Element<'_, Message> {
    column![
        text(&error.message).size(32).font(BOLD).color(Palette::TEXT),
        text(&error.details).size(16).color(Palette::TEXT_MUTED),
    ]
    .spacing(12)
    .padding(Padding::from([64.0, 16.0]))
    .width(Length::Fill)
    .into()
}
