//! Sidebar with brand, navigation and account actions

use crate::app::ui_components::{nav_button, secondary_button, section_label, sidebar_container};
use crate::app::{Message, Screen, State};
use crate::theme::ThemeChoice;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

pub fn view_sidebar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let brand = row![
        text("◆").size(20).color(theme.accent),
        text("DataWhisper").size(18).color(theme.fg_primary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let nav_item = |label: &'static str, glyph: &'static str, screen: Screen| {
        let active = state.screen == screen;
        button(
            row![
                text(glyph).size(14).width(Length::Fixed(18.0)),
                text(label).size(14),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Navigate(screen))
        .width(Length::Fill)
        .padding([8, 12])
        .style(move |_, status| nav_button(theme, status, active))
    };

    let navigation = column![
        section_label("NAVIGATION", theme),
        nav_item("Upload Data", "⇪", Screen::Upload),
        nav_item("Share", "⇄", Screen::Share),
        nav_item("Shared With Me", "⌂", Screen::SharedWithMe),
    ]
    .spacing(6);

    let theme_label = match state.current_theme {
        ThemeChoice::Light => "☾  Dark mode",
        ThemeChoice::Dark => "☀  Light mode",
    };

    let account = column![
        text(state.signed_in_as.as_deref().unwrap_or_default())
            .size(12)
            .color(theme.fg_muted),
        button(text(theme_label).size(13))
            .on_press(Message::ToggleTheme)
            .width(Length::Fill)
            .padding(8)
            .style(move |_, status| secondary_button(theme, status)),
        button(text("Sign out").size(13))
            .on_press(Message::SignOut)
            .width(Length::Fill)
            .padding(8)
            .style(move |_, status| secondary_button(theme, status)),
    ]
    .spacing(8);

    container(
        column![
            brand,
            navigation,
            container(column![]).height(Length::Fill),
            account
        ]
        .spacing(24),
    )
    .width(Length::Fixed(230.0))
    .height(Length::Fill)
    .padding(16)
    .style(move |_| sidebar_container(theme))
    .into()
}
