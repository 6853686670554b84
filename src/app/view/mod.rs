//! UI rendering module for DataWhisper
//!
//! One submodule per screen plus the sidebar.

// Widget IDs for state preservation
pub const CONTENT_SCROLLABLE_ID: &str = "screen-content";

mod login;
mod share;
mod shared_with_me;
mod sidebar;
mod upload;

use crate::app::ui_components::{main_container, notification_banner};
use crate::app::{Message, Screen, State};
use iced::widget::{Id, column, container, row, scrollable, stack, text};
use iced::{Element, Length, alignment};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let content: Element<'_, Message> = if state.is_signed_in() {
        let screen: Element<'_, Message> = match state.screen {
            // Signed-in state never sits on the login screen; show upload instead
            Screen::Login | Screen::Upload => upload::view_upload(state),
            Screen::Share => share::view_share(state),
            Screen::SharedWithMe => shared_with_me::view_shared_with_me(state),
        };

        row![
            sidebar::view_sidebar(state),
            scrollable(container(screen).padding(32).width(Length::Fill))
                .id(Id::new(CONTENT_SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_, status| {
                    crate::app::ui_components::themed_scrollable(theme, status)
                }),
        ]
        .into()
    } else {
        login::view_login(state)
    };

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| main_container(theme));

    // Banner overlay layer (free-floating at top-right)
    // IMPORTANT: Always use stack! to keep widget tree structure consistent (preserves scroll state)
    if state.banners.is_empty() {
        stack![base, iced::widget::Space::new()].into()
    } else {
        let banner_column = column(
            state
                .banners
                .iter()
                .enumerate()
                .map(|(index, banner)| notification_banner(banner, theme, index))
                .collect::<Vec<_>>(),
        )
        .spacing(8)
        .width(Length::Shrink)
        .padding(16);

        stack![
            base,
            container(banner_column)
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
        ]
        .into()
    }
}

/// Page heading with a one-line description
fn page_header<'a>(title: &'a str, subtitle: &'a str, state: &'a State) -> Element<'a, Message> {
    column![
        text(title).size(28).color(state.theme.fg_primary),
        text(subtitle).size(14).color(state.theme.fg_secondary),
    ]
    .spacing(6)
    .into()
}
