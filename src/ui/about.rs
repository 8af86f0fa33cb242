//! Static "about" page

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Padding, Shadow, Vector};

use super::theme::{Palette, DESKTOP_NAV_MIN_WIDTH};
use crate::app::Message;
use crate::routes::Route;

pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        glyph: "⚡",
        title: "Quick as a flash",
        description: "Type a repo name and boom — results in seconds.",
    },
    Feature {
        glyph: "✓",
        title: "Fresh data, always",
        description: "Pulls directly from GitHub, so you’re never looking at stale info.",
    },
    Feature {
        glyph: "📖",
        title: "No manual needed",
        description: "Just type `username/repo` and you’re off.",
    },
];

const INTRO: &str = "Born from one developer’s frustration of endlessly clicking through GitHub \
search results — Repo Finder is a simple, fast way to get what you need without the noise.";

pub fn view<'a>(width: f32) -> Element<'a, Message> {
    let heading = Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    };

    let hero = column![
        text("About Repo Finder").size(48).font(heading).color(Palette::TEXT),
        container(
            text(INTRO)
                .size(18)
                .color(Palette::TEXT_MUTED)
                .align_x(Horizontal::Center)
        )
        .max_width(768.0),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .padding(Padding::from([80.0, 16.0]));

    let cards = FEATURES.iter().map(feature_card);
    let features: Element<'a, Message> = if width >= DESKTOP_NAV_MIN_WIDTH {
        row(cards).spacing(32).into()
    } else {
        column(cards).spacing(32).into()
    };

    let closing = column![
        text("Give it a try").size(30).font(heading).color(Palette::TEXT),
        text("No accounts, no setup — just search and go.")
            .size(18)
            .color(Palette::TEXT_MUTED),
        button(text("Start Searching").color(Color::WHITE))
            .padding(Padding::from([12.0, 24.0]))
            .on_press(Message::Navigate(Route::Home))
            .style(|_theme, _status| button::Style {
                background: Some(Background::Color(Palette::PRIMARY)),
                text_color: Color::WHITE,
                border: Border::default().rounded(8),
                ..Default::default()
            }),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .padding(Padding::from([0.0, 16.0]));

    column![
        hero,
        container(features).max_width(1280.0).padding(Padding::from([0.0, 16.0])),
        Space::with_height(80),
        closing,
        Space::with_height(64),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn feature_card<'a>(feature: &'a Feature) -> Element<'a, Message> {
    let icon = container(text(feature.glyph).size(22).color(Color::WHITE))
        .width(48)
        .height(48)
        .center_x(48)
        .center_y(48)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Palette::PRIMARY)),
            border: Border::default().rounded(8),
            ..Default::default()
        });

    container(
        column![
            icon,
            text(feature.title).size(20).color(Palette::TEXT),
            text(feature.description).color(Palette::TEXT_MUTED),
        ]
        .spacing(12),
    )
    .padding(24)
    .width(Length::FillPortion(1))
    .style(|_theme| container::Style {
        background: Some(Background::Color(Palette::SURFACE)),
        border: Border {
            color: Palette::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: Palette::SHADOW,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    })
    .into()
}
