// SPDX-License-Identifier: MPL-2.0
//! Site header with brand, navigation, hamburger menu, and language selector.
//!
//! The header is a pure render binding over state owned by the app: the
//! current route, the menu flag, and the locale list. Choosing a navigation
//! item or a language closes the menu and reports the choice upward.

use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};
use unic_langid::LanguageIdentifier;

const BRAND: &str = "Atelier Folio";

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_route: Route,
    pub menu_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Route),
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Route),
    LanguageSelected(LanguageIdentifier),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(route) => {
            *menu_open = false;
            Event::Navigate(route)
        }
        Message::SelectLanguage(locale) => {
            *menu_open = false;
            Event::LanguageSelected(locale)
        }
    }
}

/// Render the site header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    // Dropdown menu (if open)
    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar: brand on the left, nav links and menu toggle on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(BRAND).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::horizontal_space());

    for route in Route::ALL {
        let label = ctx.i18n.tr(route.i18n_key());
        row = row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Navigate(route))
                .style(styles::button::nav(route == ctx.current_route))
                .padding([spacing::XS, spacing::SM]),
        );
    }

    let menu_toggle = button(Text::new("☰"))
        .on_press(Message::ToggleMenu)
        .style(styles::button::quiet)
        .padding(spacing::XS);
    row = row.push(menu_toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

/// Build the dropdown with the language selector (and nav items for narrow
/// layouts, where the inline links are easy to miss).
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    menu_column = menu_column.push(
        Text::new(ctx.i18n.tr("header-language-label")).size(typography::BODY_SM),
    );

    for locale in &ctx.i18n.available_locales {
        let selected = locale == ctx.i18n.current_locale();
        let label = if selected {
            format!("• {}", locale)
        } else {
            locale.to_string()
        };
        menu_column = menu_column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::SelectLanguage(locale.clone()))
                .style(styles::button::nav(selected))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::SM]),
        );
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current_route: Route::Home,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn header_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current_route: Route::Contact,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn navigate_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Route::Portfolio), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(Route::Portfolio)));
    }

    #[test]
    fn language_selection_closes_menu_and_emits_event() {
        let mut menu_open = true;
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = update(Message::SelectLanguage(locale.clone()), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::LanguageSelected(l) if l == locale));
    }

    #[test]
    fn close_menu_emits_no_event() {
        let mut menu_open = true;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }
}
