// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (browse, submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        _ => button::Style::default(),
    }
}

/// Navigation link button; `active` marks the current route.
pub fn nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let text_color = if active {
            extended.primary.strong.color
        } else {
            extended.background.base.text
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(extended.background.weak.color)),
                text_color,
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            },
            _ => button::Style {
                background: None,
                text_color,
                border: Border::default(),
                ..button::Style::default()
            },
        }
    }
}

/// Round floating action button used by the chat-contact widget.
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..button::Style::default()
    }
}

/// Quiet text button (remove selection, close panel).
pub fn quiet(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.weak.text,
            border: Border::default(),
            ..button::Style::default()
        },
    }
}
