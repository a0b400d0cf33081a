// SPDX-License-Identifier: MPL-2.0
//! Floating chat-contact widget.
//!
//! A round button pinned to the bottom-right corner of the window. Pressing
//! it opens a small panel listing the contact channels; choosing one closes
//! the panel and hands the channel to the owner, which decides what to do
//! with it (this widget performs no network activity of its own).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Contact channels offered by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
    Chat,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 3] = [
        ContactChannel::Email,
        ContactChannel::Phone,
        ContactChannel::Chat,
    ];

    /// Returns the i18n message key for this channel's label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContactChannel::Email => "chat-channel-email",
            ContactChannel::Phone => "chat-channel-phone",
            ContactChannel::Chat => "chat-channel-chat",
        }
    }
}

/// Chat widget state: open or closed, nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pub open: bool,
}

/// Messages emitted by the chat widget.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    SelectChannel(ContactChannel),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ChannelChosen(ContactChannel),
}

/// Process a chat widget message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            Event::None
        }
        Message::Close => {
            state.open = false;
            Event::None
        }
        Message::SelectChannel(channel) => {
            state.open = false;
            Event::ChannelChosen(channel)
        }
    }
}

/// Render the floating widget (toggle button plus, when open, the panel).
pub fn view<'a>(state: State, i18n: &'a I18n) -> Element<'a, Message> {
    let toggle_label = if state.open {
        i18n.tr("chat-close-label")
    } else {
        i18n.tr("chat-open-label")
    };

    let toggle = button(Text::new(toggle_label).size(typography::BODY))
        .on_press(Message::Toggle)
        .style(styles::button::floating)
        .padding([spacing::SM, spacing::MD]);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Right);

    if state.open {
        let mut panel = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("chat-prompt")).size(typography::BODY_SM));

        for channel in ContactChannel::ALL {
            panel = panel.push(
                button(Text::new(i18n.tr(channel.i18n_key())).size(typography::BODY))
                    .on_press(Message::SelectChannel(channel))
                    .style(styles::button::nav(false))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM]),
            );
        }

        column = column.push(
            Container::new(panel)
                .width(Length::Fixed(sizing::CHAT_PANEL_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::panel),
        );
    }

    column.push(toggle).into()
}
