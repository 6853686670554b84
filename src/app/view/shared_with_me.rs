//! Shared-with-me browser: people on the left, their datasets on the right

use super::page_header;
use crate::app::ui_components::{
    avatar_container, card_button, card_container, chart_placeholder, secondary_button,
    themed_pick_list, themed_pick_list_menu, themed_text_input,
};
use crate::app::{Message, State};
use crate::core::browser::BrowserAction;
use crate::core::filter::DataCategory;
use crate::core::records::SharedUser;
use crate::theme::AppTheme;
use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use strum::IntoEnumIterator;

pub fn view_shared_with_me(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let browser = &state.browser;

    let filters = row![
        text_input("Search by name or email...", browser.criteria.query())
            .on_input(|s| Message::Browser(BrowserAction::SearchChanged(s)))
            .padding(10)
            .size(14)
            .width(Length::Fill)
            .style(move |_, status| themed_text_input(theme, status)),
        pick_list(
            DataCategory::iter().collect::<Vec<_>>(),
            Some(browser.criteria.category()),
            |category| Message::Browser(BrowserAction::CategoryChanged(category)),
        )
        .padding(10)
        .text_size(14)
        .width(Length::Fixed(160.0))
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let users = browser.filtered_users(state.catalog);
    let user_list: Element<'_, Message> = if users.is_empty() {
        container(
            text("No one matches this search")
                .size(13)
                .color(theme.fg_muted),
        )
        .padding(16)
        .into()
    } else {
        column(
            users
                .into_iter()
                .map(|user| user_card(user, browser.active_user == Some(user.id), theme)),
        )
        .spacing(8)
        .into()
    };

    column![
        page_header(
            "Shared With Me",
            "Health data other people have chosen to share with you.",
            state,
        ),
        filters,
        row![
            container(user_list).width(Length::FillPortion(1)),
            container(view_detail(state)).width(Length::FillPortion(2)),
        ]
        .spacing(24),
    ]
    .spacing(24)
    .into()
}

fn user_card<'a>(user: &'a SharedUser, active: bool, theme: &'a AppTheme) -> Element<'a, Message> {
    button(
        row![
            container(text(user.initials()).size(13))
                .center_x(Length::Fixed(36.0))
                .center_y(Length::Fixed(36.0))
                .style(move |_| avatar_container(theme)),
            column![
                text(&user.name).size(14).color(theme.fg_primary),
                text(&user.email).size(12).color(theme.fg_muted),
                text(format!(
                    "{} datasets · since {}",
                    user.datasets.len(),
                    user.shared_date
                ))
                .size(11)
                .color(theme.fg_secondary),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Browser(BrowserAction::SelectUser(user.id)))
    .width(Length::Fill)
    .padding(12)
    .style(move |_, status| card_button(theme, status, active))
    .into()
}

fn view_detail(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let browser = &state.browser;

    let Some(user) = browser.active_user(state.catalog) else {
        return empty_state("Select a person to see what they shared", theme);
    };

    if let Some(dataset) = browser.active_dataset(state.catalog) {
        let index = user
            .datasets
            .iter()
            .position(|d| d.id == dataset.id)
            .unwrap_or_default();
        return column![
            button(text("← Back to datasets").size(13))
                .on_press(Message::Browser(BrowserAction::BackToDatasets))
                .padding([6, 12])
                .style(move |_, status| secondary_button(theme, status)),
            chart_placeholder(
                &dataset.title,
                dataset.kind,
                theme.chart_color(index),
                theme
            ),
            text(format!("Shared by {}", user.name))
                .size(12)
                .color(theme.fg_muted),
        ]
        .spacing(16)
        .into();
    }

    let datasets = column(user.datasets.iter().map(|dataset| {
        button(
            row![
                text(dataset.kind.glyph()).size(20).color(theme.accent),
                column![
                    text(&dataset.title).size(14).color(theme.fg_primary),
                    text(dataset.kind.to_string()).size(12).color(theme.fg_muted),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Browser(BrowserAction::SelectDataset(dataset.id)))
        .width(Length::Fill)
        .padding(12)
        .style(move |_, status| card_button(theme, status, false))
        .into()
    }))
    .spacing(8);

    container(
        column![
            text(format!("{}'s data", user.name)).size(18),
            datasets
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

fn empty_state<'a>(message: &'a str, theme: &'a AppTheme) -> Element<'a, Message> {
    container(
        column![
            text("⌂").size(36).color(theme.fg_muted),
            text(message).size(14).color(theme.fg_secondary),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .center_x(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}
