//! Share screen: compose a share, manage who has access

use super::page_header;
use crate::app::ui_components::{
    avatar_container, card_container, danger_button, primary_button, secondary_button,
    section_label, status_badge_container, tab_button, themed_checkbox, themed_text_input,
    themed_toggler,
};
use crate::app::{Message, ShareTab, State};
use crate::core::share::{ShareAction, ShareComposer};
use iced::widget::{button, checkbox, column, container, row, rule, text, text_input, toggler};
use iced::{Alignment, Element, Length};

pub fn view_share(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let tab_item = |target: ShareTab| {
        let active = state.share_tab == target;
        button(text(target.to_string()).size(13))
            .on_press(Message::ShareTabChanged(target))
            .padding([6, 16])
            .style(move |_, status| tab_button(theme, status, active))
    };

    let tabs = container(
        row![tab_item(ShareTab::ShareData), tab_item(ShareTab::Manage)].spacing(4),
    )
    .padding(4)
    .style(move |_| container::Style {
        background: Some(theme.bg_hover.into()),
        border: iced::Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let body = match state.share_tab {
        ShareTab::ShareData => view_compose(state),
        ShareTab::Manage => view_manage(state),
    };

    column![
        page_header(
            "Share Your Data",
            "Securely share your visualizations with specific people.",
            state,
        ),
        tabs,
        body,
    ]
    .spacing(24)
    .into()
}

fn view_compose(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let composer = &state.composer;

    let visualizations = column(state.catalog.visualizations.iter().map(|viz| {
        let id = viz.id;
        row![
            checkbox(composer.selected_visualizations.contains(id))
                .label(&viz.title)
                .on_toggle(move |_| Message::Share(ShareAction::ToggleVisualization(id)))
                .size(16)
                .spacing(10)
                .text_size(14)
                .style(move |_, status| themed_checkbox(theme, status))
                .width(Length::Fill),
            text(format!("{} {}", viz.kind.glyph(), viz.kind))
                .size(12)
                .color(theme.fg_muted),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(12);

    let visualization_card = container(
        column![
            section_label("SELECT VISUALIZATIONS", theme),
            visualizations,
            text(format!(
                "{} of {} selected",
                composer.selected_visualizations.len(),
                state.catalog.visualizations.len()
            ))
            .size(12)
            .color(theme.fg_muted),
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(move |_| card_container(theme));

    let add_contact = row![
        text_input("Add by email address", &composer.email_input)
            .on_input(|s| Message::Share(ShareAction::EmailInputChanged(s)))
            .on_submit(Message::Share(ShareAction::AddEmail))
            .padding(10)
            .size(14)
            .style(move |_, status| themed_text_input(theme, status)),
        button(text("Add").size(13))
            .on_press(Message::Share(ShareAction::AddEmail))
            .padding([10, 16])
            .style(move |_, status| secondary_button(theme, status)),
    ]
    .spacing(8);

    let contacts = column(state.catalog.contacts.iter().map(|contact| {
        let id = contact.id;
        row![
            checkbox(composer.selected_contacts.contains(id))
                .on_toggle(move |_| Message::Share(ShareAction::ToggleContact(id)))
                .size(16)
                .style(move |_, status| themed_checkbox(theme, status)),
            column![
                text(&contact.name).size(14),
                text(&contact.email).size(12).color(theme.fg_muted),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(12);

    let recipients_card = container(
        column![
            section_label("RECIPIENTS", theme),
            add_contact,
            contacts,
            section_label("MESSAGE", theme),
            text_input("Add a personal message", &composer.message)
                .on_input(|s| Message::Share(ShareAction::MessageChanged(s)))
                .padding(10)
                .size(14)
                .style(move |_, status| themed_text_input(theme, status)),
            button(
                container(text(format!(
                    "Share Now ({})",
                    composer.selected_contacts.len()
                )))
                .center_x(Length::Fill)
            )
            .on_press_maybe(share_now_message(composer))
            .width(Length::Fill)
            .padding(10)
            .style(move |_, status| primary_button(theme, status)),
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(move |_| card_container(theme));

    row![visualization_card, recipients_card].spacing(24).into()
}

/// Share Now stays disabled until a visualization and a recipient are picked
fn share_now_message(composer: &ShareComposer) -> Option<Message> {
    composer
        .can_share()
        .then_some(Message::Share(ShareAction::Share))
}

fn view_manage(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let composer = &state.composer;

    let grants = column(state.catalog.access_grants.iter().map(|grant| {
        let status = grant.status;
        row![
            container(text(crate::utils::initials(&grant.name)).size(12))
                .center_x(Length::Fixed(32.0))
                .center_y(Length::Fixed(32.0))
                .style(move |_| avatar_container(theme)),
            column![
                text(&grant.name).size(14),
                text(&grant.email).size(12).color(theme.fg_muted),
            ]
            .spacing(2)
            .width(Length::Fill),
            text(&grant.date_shared).size(12).color(theme.fg_secondary),
            container(text(status.to_string()).size(11))
                .padding([2, 10])
                .style(move |_| status_badge_container(theme, status)),
            button(text("Revoke").size(12))
                .on_press(Message::Share(ShareAction::RevokeAccess(grant.id)))
                .padding([4, 12])
                .style(move |_, status| danger_button(theme, status)),
        ]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(14);

    let sharing = column(state.catalog.visualizations.iter().map(|viz| {
        let id = viz.id;
        row![
            column![
                text(&viz.title).size(14),
                text(format!("{} · created {}", viz.kind, viz.date_created))
                    .size(12)
                    .color(theme.fg_muted),
            ]
            .spacing(2)
            .width(Length::Fill),
            toggler(composer.shared_visualizations.contains(id))
                .on_toggle(move |_| Message::Share(ShareAction::ToggleShared(id)))
                .style(move |_, status| themed_toggler(theme, status)),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(14);

    container(
        column![
            section_label("PEOPLE WITH ACCESS", theme),
            grants,
            rule::horizontal(1),
            section_label("VISUALIZATION SHARING", theme),
            sharing,
        ]
        .spacing(16),
    )
    .padding(20)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}
