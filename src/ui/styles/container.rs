// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the chat panel and page cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..container::Style::default()
    }
}

/// Bar behind the header and footer rows.
pub fn bar(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        ..container::Style::default()
    }
}

/// Upload drop zone; the border thickens and takes the brand color while a
/// drag hovers the window.
pub fn drop_zone(drag_active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (color, width) = if drag_active {
            (palette::PRIMARY_500, border::WIDTH_MD)
        } else {
            (extended.background.strong.color, border::WIDTH_SM)
        };

        container::Style {
            background: drag_active
                .then(|| Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_200
                })),
            border: Border {
                color,
                width,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Inline error strip rendered under the drop zone.
pub fn error_strip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::ERROR_500),
        ..container::Style::default()
    }
}
