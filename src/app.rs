// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site chrome and the
//! upload widget.
//!
//! The `App` struct wires together the components (header, footer, chat
//! widget, uploader) and translates their events into side effects like
//! config persistence, the file dialog, or preview decoding. Policy decisions
//! (window sizing, persistence format, localization switching) stay close to
//! the main update loop so user-facing behavior is easy to audit.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{self, FileCandidate};
use crate::routes::Route;
use crate::ui::chat_widget::{self, ContactChannel, Event as ChatEvent};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::uploader::{self, Effect as UploaderEffect, UploaderConfig};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{event, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    route: Route,
    header_menu_open: bool,
    chat: chat_widget::State,
    chat_enabled: bool,
    uploader: uploader::State,
    /// The candidate most recently accepted by the uploader; this is the
    /// hand-off boundary the hosting form reads when submitting an inquiry.
    accepted_upload: Option<FileCandidate>,
    /// Last contact channel the user picked in the chat widget.
    last_contact_request: Option<ContactChannel>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("has_upload", &self.accepted_upload.is_some())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Chat(chat_widget::Message),
    Uploader(uploader::Message),
    /// A dragged file entered the window.
    FileHovered,
    /// The dragged file left the window without dropping.
    FileHoverLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            route: Route::Home,
            header_menu_open: false,
            chat: chat_widget::State::default(),
            chat_enabled: true,
            uploader: uploader::State::new(UploaderConfig::default()),
            accepted_upload: None,
            last_contact_request: None,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            chat_enabled: config.chat_widget_enabled.unwrap_or(true),
            uploader: uploader::State::new(UploaderConfig {
                max_size_mib: config
                    .max_upload_mib
                    .unwrap_or(config::DEFAULT_MAX_UPLOAD_MIB),
                ..UploaderConfig::default()
            }),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => {
                match header::update(msg, &mut self.header_menu_open) {
                    HeaderEvent::None => {}
                    HeaderEvent::Navigate(route) => self.route = route,
                    HeaderEvent::LanguageSelected(locale) => {
                        self.i18n.set_locale(locale.clone());
                        self.persist_language(&locale.to_string());
                    }
                }
                Task::none()
            }
            Message::Footer(footer::Message::Navigate(route)) => {
                self.route = route;
                Task::none()
            }
            Message::Chat(msg) => {
                if let ChatEvent::ChannelChosen(channel) = chat_widget::update(msg, &mut self.chat)
                {
                    // Hand-off boundary: the surrounding business logic owns
                    // what "contact us via X" means.
                    self.last_contact_request = Some(channel);
                }
                Task::none()
            }
            Message::Uploader(msg) => {
                let effect = self.uploader.handle(msg);
                self.apply_uploader_effect(effect)
            }
            Message::FileHovered => {
                if self.route == Route::Contact {
                    self.uploader.handle(uploader::Message::DragEntered);
                }
                Task::none()
            }
            Message::FileHoverLeft => {
                if self.route == Route::Contact {
                    self.uploader.handle(uploader::Message::DragLeft);
                }
                Task::none()
            }
            Message::FileDropped(path) => {
                if self.route != Route::Contact {
                    return Task::none();
                }
                let candidates = match FileCandidate::from_path(&path) {
                    Ok(candidate) => vec![candidate],
                    Err(err) => {
                        eprintln!("Failed to inspect dropped file: {:?}", err);
                        vec![]
                    }
                };
                let effect = self.uploader.handle(uploader::Message::Dropped(candidates));
                self.apply_uploader_effect(effect)
            }
        }
    }

    fn apply_uploader_effect(&mut self, effect: UploaderEffect) -> Task<Message> {
        match effect {
            UploaderEffect::None => Task::none(),
            UploaderEffect::OpenFileDialog => {
                let extensions = self.uploader.accept_extensions().to_vec();
                Task::perform(
                    async move {
                        let picked = rfd::AsyncFileDialog::new()
                            .add_filter("Images", &extensions)
                            .pick_file()
                            .await;
                        match picked {
                            Some(handle) => match FileCandidate::from_path(handle.path()) {
                                Ok(candidate) => Some(candidate),
                                Err(err) => {
                                    eprintln!("Failed to inspect picked file: {:?}", err);
                                    None
                                }
                            },
                            None => None,
                        }
                    },
                    |candidate| Message::Uploader(uploader::Message::FilePicked(candidate)),
                )
            }
            UploaderEffect::Accepted {
                candidate,
                decode_token,
            } => {
                let path = candidate.path.clone();
                self.accepted_upload = Some(candidate);
                Task::perform(
                    media::decode_preview_off_thread(path),
                    move |result| {
                        Message::Uploader(uploader::Message::PreviewDecoded {
                            token: decode_token,
                            result,
                        })
                    },
                )
            }
            UploaderEffect::Removed => {
                self.accepted_upload = None;
                Task::none()
            }
        }
    }

    /// Persist the chosen language so the next launch starts localized.
    fn persist_language(&self, language: &str) {
        let mut config = config::load().unwrap_or_default();
        config.language = Some(language.to_string());
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save config: {:?}", err);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = header::view(header::ViewContext {
            i18n: &self.i18n,
            current_route: self.route,
            menu_open: self.header_menu_open,
        })
        .map(Message::Header);

        let page = self.page_content();

        let footer = footer::view(&self.i18n).map(Message::Footer);

        let column = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(scrollable(page).height(Length::Fill))
            .push(footer);

        let mut layers = Stack::new().push(column);

        if self.chat_enabled {
            layers = layers.push(
                Container::new(chat_widget::view(self.chat, &self.i18n).map(Message::Chat))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Right)
                    .align_y(Vertical::Bottom)
                    .padding(spacing::LG),
            );
        }

        layers.into()
    }

    fn page_content(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(Text::new(self.i18n.tr(self.route.heading_key())).size(typography::TITLE_LG))
            .push(Text::new(self.i18n.tr(self.route.blurb_key())).size(typography::BODY));

        if self.route == Route::Contact {
            content = content.push(uploader::view(&self.uploader, &self.i18n).map(Message::Uploader));

            if let Some(candidate) = &self.accepted_upload {
                content = content.push(
                    Text::new(candidate.path.display().to_string()).size(typography::CAPTION),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::uploader::BYTES_PER_MIB;

    fn png_candidate(size_bytes: u64) -> FileCandidate {
        FileCandidate {
            path: PathBuf::from("photo.png"),
            mime: "image/png".to_string(),
            size_bytes,
        }
    }

    #[test]
    fn header_navigation_changes_route() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::Navigate(Route::Contact)));
        assert_eq!(app.route, Route::Contact);
    }

    #[test]
    fn footer_navigation_changes_route() {
        let mut app = App::default();
        let _ = app.update(Message::Footer(footer::Message::Navigate(
            Route::Portfolio,
        )));
        assert_eq!(app.route, Route::Portfolio);
    }

    #[test]
    fn chat_channel_choice_is_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::Chat(chat_widget::Message::Toggle));
        let _ = app.update(Message::Chat(chat_widget::Message::SelectChannel(
            ContactChannel::Email,
        )));
        assert_eq!(app.last_contact_request, Some(ContactChannel::Email));
        assert!(!app.chat.open);
    }

    #[test]
    fn accepted_candidate_is_stored_at_the_handoff_boundary() {
        let mut app = App::default();
        app.route = Route::Contact;
        let _ = app.update(Message::Uploader(uploader::Message::FilePicked(Some(
            png_candidate(BYTES_PER_MIB),
        ))));
        assert!(app.accepted_upload.is_some());
    }

    #[test]
    fn rejected_candidate_is_not_stored() {
        let mut app = App::default();
        app.route = Route::Contact;
        let _ = app.update(Message::Uploader(uploader::Message::FilePicked(Some(
            FileCandidate {
                path: PathBuf::from("report.pdf"),
                mime: "application/pdf".to_string(),
                size_bytes: 100,
            },
        ))));
        assert!(app.accepted_upload.is_none());
    }

    #[test]
    fn removal_clears_the_stored_candidate() {
        let mut app = App::default();
        app.route = Route::Contact;
        let _ = app.update(Message::Uploader(uploader::Message::FilePicked(Some(
            png_candidate(100),
        ))));
        assert!(app.accepted_upload.is_some());

        let _ = app.update(Message::Uploader(uploader::Message::RemoveClicked));
        assert!(app.accepted_upload.is_none());
    }

    #[test]
    fn drag_events_only_reach_uploader_on_contact_route() {
        let mut app = App::default();
        app.route = Route::Home;
        let _ = app.update(Message::FileHovered);
        assert!(!app.uploader.is_drag_active());

        app.route = Route::Contact;
        let _ = app.update(Message::FileHovered);
        assert!(app.uploader.is_drag_active());

        let _ = app.update(Message::FileHoverLeft);
        assert!(!app.uploader.is_drag_active());
    }

    #[test]
    fn dropping_a_missing_file_is_a_no_op() {
        let mut app = App::default();
        app.route = Route::Contact;
        let _ = app.update(Message::FileDropped(PathBuf::from("/no/such/file.png")));
        assert!(app.uploader.error().is_none());
        assert!(app.accepted_upload.is_none());
    }

    #[test]
    fn app_view_renders_on_every_route() {
        let mut app = App::default();
        for route in Route::ALL {
            app.route = route;
            let _element = app.view();
        }
    }
}
