// SPDX-License-Identifier: MPL-2.0
//! Image-upload widget: browse or drop a file, validate it, preview it.
//!
//! Both selection paths (the `rfd` browse dialog and window-level file drops)
//! converge on [`State::submit_candidate`]. Validation checks the `image/`
//! MIME prefix and the configured size ceiling; an accepted candidate is
//! reported to the owner immediately, while the preview decodes on a
//! blocking worker thread and arrives later. Decode results carry a monotonically
//! increasing token so a slow decode can never overwrite the preview of a
//! newer selection.
//!
//! The widget never transmits anything itself; the owner receives the
//! accepted [`FileCandidate`] through [`Effect::Accepted`] and does with it
//! what the hosting form requires.

use crate::config::DEFAULT_MAX_UPLOAD_MIB;
use crate::error::{Error, UploadError};
use crate::i18n::fluent::I18n;
use crate::media::{FileCandidate, Preview, IMAGE_EXTENSIONS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::alignment::Horizontal;
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Bytes per mebibyte; the size ceiling is configured in MiB.
pub const BYTES_PER_MIB: u64 = 1_048_576;

/// Construction options, mirroring what the hosting form can tune.
#[derive(Debug, Clone)]
pub struct UploaderConfig {
    /// Size ceiling in mebibytes.
    pub max_size_mib: u32,
    /// Extensions offered by the browse dialog. This only narrows the
    /// dialog; validation always applies regardless of how the file arrived.
    pub accept_extensions: Vec<&'static str>,
    /// Optional `data:` URI to seed the widget with a previously stored
    /// image. A string that fails to decode is ignored.
    pub initial_preview: Option<String>,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            max_size_mib: DEFAULT_MAX_UPLOAD_MIB,
            accept_extensions: IMAGE_EXTENSIONS.to_vec(),
            initial_preview: None,
        }
    }
}

/// Upload widget state. Each instance owns its own error, preview, and drag
/// flag; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct State {
    drag_active: bool,
    error: Option<UploadError>,
    decode_failed: bool,
    preview: Option<Preview>,
    max_size_mib: u32,
    accept_extensions: Vec<&'static str>,
    decode_token: u64,
}

/// Messages for the upload widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// The browse button was pressed.
    BrowseClicked,
    /// The browse dialog closed; `None` means it was cancelled.
    FilePicked(Option<FileCandidate>),
    /// A drag entered the window.
    DragEntered,
    /// The drag left the window without dropping.
    DragLeft,
    /// Files were dropped; only the first is considered.
    Dropped(Vec<FileCandidate>),
    /// An async preview decode finished.
    PreviewDecoded {
        token: u64,
        result: Result<Preview, Error>,
    },
    /// The remove button was pressed.
    RemoveClicked,
}

/// Effects reported to the owner.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Nothing for the owner to do.
    None,
    /// Owner should open the file dialog (async, via `rfd`).
    OpenFileDialog,
    /// A candidate passed validation. Emitted synchronously from the update
    /// call; the preview is not ready yet. The owner should start a decode
    /// and feed the result back as [`Message::PreviewDecoded`] with this
    /// token.
    Accepted {
        candidate: FileCandidate,
        decode_token: u64,
    },
    /// The user removed the current selection; the owner should drop any
    /// stored reference to it.
    Removed,
}

impl State {
    #[must_use]
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            max_size_mib: config.max_size_mib,
            accept_extensions: config.accept_extensions,
            preview: config
                .initial_preview
                .as_deref()
                .and_then(|uri| Preview::from_data_uri(uri).ok()),
            ..Self::default()
        }
    }

    /// Handle an upload widget message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::BrowseClicked => Effect::OpenFileDialog,
            Message::FilePicked(Some(candidate)) => self.submit_candidate(candidate),
            Message::FilePicked(None) => Effect::None,
            Message::DragEntered => {
                self.drag_active = true;
                Effect::None
            }
            Message::DragLeft => {
                self.drag_active = false;
                Effect::None
            }
            Message::Dropped(candidates) => {
                self.drag_active = false;
                // One file at a time; the rest of the dropped set is ignored.
                match candidates.into_iter().next() {
                    Some(first) => self.submit_candidate(first),
                    None => Effect::None,
                }
            }
            Message::PreviewDecoded { token, result } => {
                if token != self.decode_token {
                    // Stale decode from an older selection.
                    return Effect::None;
                }
                match result {
                    Ok(preview) => {
                        self.preview = Some(preview);
                        self.decode_failed = false;
                    }
                    Err(_) => self.decode_failed = true,
                }
                Effect::None
            }
            Message::RemoveClicked => self.remove(),
        }
    }

    /// Single validation entry point for both selection paths.
    fn submit_candidate(&mut self, candidate: FileCandidate) -> Effect {
        self.error = None;
        self.decode_failed = false;

        if !candidate.is_image() {
            // Existing preview stays untouched on rejection.
            self.error = Some(UploadError::InvalidType {
                mime: candidate.mime,
            });
            return Effect::None;
        }

        if candidate.size_bytes > u64::from(self.max_size_mib) * BYTES_PER_MIB {
            self.error = Some(UploadError::TooLarge {
                max_mib: self.max_size_mib,
            });
            return Effect::None;
        }

        self.decode_token += 1;
        Effect::Accepted {
            candidate,
            decode_token: self.decode_token,
        }
    }

    /// Clear the selection and tell the owner to forget it.
    fn remove(&mut self) -> Effect {
        self.preview = None;
        self.error = None;
        self.decode_failed = false;
        Effect::Removed
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    #[must_use]
    pub fn max_size_mib(&self) -> u32 {
        self.max_size_mib
    }

    /// Extensions the browse dialog should offer.
    #[must_use]
    pub fn accept_extensions(&self) -> &[&'static str] {
        &self.accept_extensions
    }

    /// Localized inline error text, if any error is pending.
    pub fn error_text(&self, i18n: &I18n) -> Option<String> {
        if let Some(error) = &self.error {
            let text = match error {
                UploadError::TooLarge { max_mib } => {
                    let mut args = FluentArgs::new();
                    args.set("max", *max_mib);
                    i18n.tr_with(error.i18n_key(), &args)
                }
                UploadError::InvalidType { .. } => i18n.tr(error.i18n_key()),
            };
            return Some(text);
        }
        if self.decode_failed {
            return Some(i18n.tr("upload-error-decode-failed"));
        }
        None
    }
}

/// Render the upload widget.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).width(Length::Fill);

    let zone: Element<'a, Message> = match state.preview() {
        Some(preview) => {
            let image = Image::new(preview.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT));

            let remove_button = button(Text::new(i18n.tr("upload-remove-button")))
                .on_press(Message::RemoveClicked)
                .style(styles::button::quiet)
                .padding(spacing::XS);

            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(Text::new(i18n.tr("upload-selected-label")).size(typography::BODY_SM))
                .push(image)
                .push(remove_button)
                .into()
        }
        None => {
            let browse_button = button(Text::new(i18n.tr("upload-browse-button")))
                .on_press(Message::BrowseClicked)
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]);

            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::BODY))
                .push(browse_button)
                .into()
        }
    };

    let drop_zone = Container::new(zone)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::MD)
        .style(styles::container::drop_zone(state.is_drag_active()));

    column = column.push(drop_zone);

    if let Some(message) = state.error_text(i18n) {
        let strip = Container::new(Text::new(message).size(typography::BODY_SM))
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::error_strip);
        column = column.push(strip);
    }

    column.into()
}
