//! Application state and the iced update/view loop
//!
//! The shell (nav bar, footer, error boundary) wraps whichever page the
//! current route selects. All state changes happen in `update`; the search
//! request is the only asynchronous work and reports back through
//! `Message::SearchFinished`.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable, Space};
use iced::{event, window, Background, Element, Event, Length, Padding, Subscription, Task, Theme};

use crate::config::Config;
use crate::github::{GithubClient, SearchError, SearchResult};
use crate::routes::{PageError, Route};
use crate::search::SearchController;
use crate::ui::chrome::ChromeState;
use crate::ui::theme::{Palette, DESKTOP_NAV_MIN_WIDTH};
use crate::ui::{about, results, search_bar, shell};

pub struct RepoFinder {
    page: Result<Route, PageError>,
    chrome: ChromeState,
    query: String,
    search: SearchController,
    client: Option<GithubClient>,
    window_width: f32,
    scroll_id: scrollable::Id,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleMenu,
    Scrolled(scrollable::Viewport),
    QueryChanged(String),
    SearchSubmitted,
    SearchFinished {
        generation: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
    },
    OpenRepository(String),
    IcedEvent(Event),
}

impl RepoFinder {
    pub fn new(config: &Config, initial: Result<Route, PageError>) -> (Self, Task<Message>) {
        if let Err(ref error) = initial {
            tracing::warn!(status = ?error.status, "{}", error.details);
        }

        let (client, page) = match GithubClient::new(config) {
            Ok(client) => (Some(client), initial),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                (None, Err(PageError::unexpected(&e)))
            }
        };

        let app = Self {
            page,
            chrome: ChromeState::default(),
            query: String::new(),
            search: SearchController::new(),
            client,
            window_width: config.window.width,
            scroll_id: scrollable::Id::unique(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        match self.page {
            Ok(Route::Home) => String::from("RepoFinder – Find the perfect GitHub repo fast"),
            Ok(Route::About) => String::from("About – RepoFinder"),
            Err(ref error) => format!("{} – RepoFinder", error.message),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.chrome.close_menu();
                if self.page.as_ref().ok() == Some(&route) {
                    return Task::none();
                }

                tracing::debug!("Navigating to {}", route);
                self.page = Ok(route);
                self.chrome.reset();
                self.query.clear();
                self.search.reset();
                scrollable::scroll_to(
                    self.scroll_id.clone(),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                )
            }

            Message::ToggleMenu => {
                self.chrome.toggle_menu();
                Task::none()
            }

            Message::Scrolled(viewport) => {
                self.apply_scroll(viewport.absolute_offset().y);
                Task::none()
            }

            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }

            Message::SearchSubmitted => {
                if self.search.is_loading() {
                    tracing::debug!("Superseding in-flight search");
                }
                let Some(ticket) = self.search.submit(&self.query) else {
                    return Task::none();
                };

                let generation = ticket.generation;
                let Some(client) = self.client.clone() else {
                    self.search.resolve(
                        generation,
                        Err(SearchError::Transport("HTTP client unavailable".to_string())),
                    );
                    return Task::none();
                };

                Task::perform(
                    async move { client.search(&ticket.query).await },
                    move |outcome| Message::SearchFinished {
                        generation,
                        outcome,
                    },
                )
            }

            Message::SearchFinished {
                generation,
                outcome,
            } => {
                self.search.resolve(generation, outcome);
                Task::none()
            }

            Message::OpenRepository(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
                Task::none()
            }

            Message::IcedEvent(event) => {
                match event {
                    Event::Window(window::Event::Opened { size, .. })
                    | Event::Window(window::Event::Resized(size)) => {
                        self.window_width = size.width;
                        if size.width >= DESKTOP_NAV_MIN_WIDTH {
                            self.chrome.close_menu();
                        }
                    }
                    ref event if is_escape(event) => self.chrome.close_menu(),
                    _ => {}
                }
                Task::none()
            }
        }
    }

    /// Nav style follows the vertical offset, against the current page's threshold
    fn apply_scroll(&mut self, offset_y: f32) {
        let threshold = self
            .page
            .as_ref()
            .map_or(Route::Home.scroll_threshold(), Route::scroll_threshold);
        self.chrome.on_scroll(offset_y, threshold);
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match &self.page {
            Ok(Route::Home) => self.view_home(),
            Ok(Route::About) => about::view(self.window_width),
            Err(error) => shell::error_page(error),
        };

        let body = scrollable(
            column![
                page,
                Space::with_height(40),
                shell::footer()
            ]
            .width(Length::Fill),
        )
        .id(self.scroll_id.clone())
        .on_scroll(Message::Scrolled)
        .height(Length::Fill);

        container(column![shell::nav(self.chrome, self.window_width), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(Palette::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    fn view_home(&self) -> Element<'_, Message> {
        let content = column![
            search_bar::view(&self.query, Message::QueryChanged, Message::SearchSubmitted),
            results::view(
                self.search.state(),
                self.window_width,
                Message::OpenRepository
            ),
        ]
        .spacing(24);

        container(container(content).max_width(1152.0))
            .padding(Padding::from([48.0, 24.0]))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(forward_event)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn is_escape(event: &Event) -> bool {
    matches!(
        event,
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        })
    )
}

/// Uncaptured events, plus Escape even when a focused input swallowed it
fn forward_event(event: Event, status: event::Status, _id: window::Id) -> Option<Message> {
    match status {
        event::Status::Ignored => Some(Message::IcedEvent(event)),
        event::Status::Captured if is_escape(&event) => Some(Message::IcedEvent(event)),
        event::Status::Captured => None,
    }
}
