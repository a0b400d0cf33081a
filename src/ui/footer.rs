// SPDX-License-Identifier: MPL-2.0
//! Site footer: navigation links, contact lines, copyright.
//!
//! Stateless; everything it shows comes from the route list and the
//! translation bundle.

use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub const CONTACT_EMAIL: &str = "hello@atelier-folio.example";
pub const CONTACT_PHONE: &str = "+33 1 23 45 67 89";

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
}

/// Render the footer.
pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut links = Row::new().spacing(spacing::SM);
    for route in Route::ALL {
        links = links.push(
            button(Text::new(i18n.tr(route.i18n_key())).size(typography::BODY_SM))
                .on_press(Message::Navigate(route))
                .style(styles::button::nav(false))
                .padding([spacing::XXS, spacing::XS]),
        );
    }

    let contact = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("footer-tagline")).size(typography::BODY_SM))
        .push(Text::new(CONTACT_EMAIL).size(typography::CAPTION))
        .push(Text::new(CONTACT_PHONE).size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(links)
        .push(contact)
        .push(Text::new(i18n.tr("footer-copyright")).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .style(styles::container::bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }

    #[test]
    fn contact_constants_look_sane() {
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(CONTACT_PHONE.starts_with('+'));
    }
}
