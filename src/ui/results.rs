//! Projection of `SearchState` onto the results area

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Background, Border, Element, Length, Padding, Shadow, Vector};

use std::borrow::Cow;

use super::theme::Palette;
use crate::github::SearchResult;
use crate::search::SearchState;

/// Text content of one repository card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: &'a str,
    pub description: Cow<'a, str>,
    pub stars: String,
    pub url: &'a str,
}

impl<'a> Card<'a> {
    pub fn from_result(result: &'a SearchResult) -> Self {
        Self {
            title: &result.full_name,
            description: clamp_description(result.description.as_deref().unwrap_or("")),
            stars: format!("⭐ {}", result.stargazers_count),
            url: &result.html_url,
        }
    }
}

/// Longest description a card shows, in characters (about three lines)
pub const DESCRIPTION_LIMIT: usize = 140;

/// Cut `description` to `DESCRIPTION_LIMIT` characters, marking the cut with `…`
pub fn clamp_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        None => Cow::Borrowed(description),
        Some((end, _)) => Cow::Owned(format!("{}…", description[..end].trim_end())),
    }
}

pub fn summary(count: usize) -> String {
    format!("Found {} repositories", count)
}

/// Grid columns for a window `width` pixels wide
pub fn columns_for_width(width: f32) -> usize {
    match width {
        w if w < 640.0 => 1,
        w if w < 1024.0 => 2,
        w if w < 1280.0 => 3,
        _ => 4,
    }
}

/// Status line, error text or card grid
pub fn view<'a, Message: Clone + 'a>(
    state: &'a SearchState,
    width: f32,
    on_open: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    match state {
        SearchState::Idle => Space::with_height(0).into(),
        SearchState::Loading => text("Searching...").color(Palette::PRIMARY).into(),
        SearchState::Error(message) => text(message).color(Palette::ERROR).into(),
        SearchState::Success(results) => {
            let columns = columns_for_width(width);
            let mut grid = Column::new().spacing(24);

            for chunk in results.chunks(columns) {
                let mut cells: Vec<Element<'a, Message>> = chunk
                    .iter()
                    .map(|result| card(Card::from_result(result), &on_open))
                    .collect();
                // Pad the last row so cards keep the same width
                while cells.len() < columns {
                    cells.push(Space::with_width(Length::FillPortion(1)).into());
                }
                grid = grid.push(iced::widget::Row::with_children(cells).spacing(24));
            }

            column![
                text(summary(results.len())).color(Palette::TEXT_MUTED),
                grid
            ]
            .spacing(16)
            .into()
        }
    }
}

fn card<'a, Message: Clone + 'a>(
    card: Card<'a>,
    on_open: &impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let link = button(text("View").size(14).color(Palette::PRIMARY))
        .padding(0)
        .style(button::text)
        .on_press(on_open(card.url.to_string()));

    let content = column![
        text(card.title).size(18).color(Palette::TEXT),
        text(card.description).size(14).color(Palette::TEXT_MUTED),
        Space::with_height(Length::Fill),
        row![
            text(card.stars).size(14).color(Palette::STAR),
            Space::with_width(Length::Fill),
            link
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(8);

    container(content)
        .padding(Padding::new(20.0))
        .width(Length::FillPortion(1))
        .height(180)
        .clip(true)
        .style(|_theme| container::Style {
            background: Some(Background::Color(Palette::SURFACE)),
            border: Border::default().rounded(8),
            shadow: Shadow {
                color: Palette::SHADOW,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        })
        .into()
}
