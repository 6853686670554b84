//! Sign-in card

use crate::app::ui_components::{
    card_container, field_error, invalid_text_input, primary_button, themed_text_input,
};
use crate::app::{Message, State};
use crate::core::seed::{DEMO_EMAIL, DEMO_PASSWORD};
use iced::widget::{button, center, column, container, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_login(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let form = &state.login;
    let errors = state.login_errors.as_ref();
    let email_error = errors.and_then(|e| e.email.as_deref());
    let password_error = errors.and_then(|e| e.password.as_deref());

    let email_input = text_input("you@example.com", &form.email)
        .on_input(Message::LoginEmailChanged)
        .on_submit(Message::LoginSubmitted)
        .padding(10)
        .size(14)
        .style(move |_, status| {
            if email_error.is_some() {
                invalid_text_input(theme, status)
            } else {
                themed_text_input(theme, status)
            }
        });

    let password_input = text_input("••••••••", &form.password)
        .on_input(Message::LoginPasswordChanged)
        .on_submit(Message::LoginSubmitted)
        .secure(true)
        .padding(10)
        .size(14)
        .style(move |_, status| {
            if password_error.is_some() {
                invalid_text_input(theme, status)
            } else {
                themed_text_input(theme, status)
            }
        });

    let submit = button(
        container(text(if form.submitting {
            "Signing in..."
        } else {
            "Sign in"
        }))
        .center_x(Length::Fill),
    )
    .on_press_maybe((!form.submitting).then_some(Message::LoginSubmitted))
    .width(Length::Fill)
    .padding(10)
    .style(move |_, status| primary_button(theme, status));

    let card = container(
        column![
            column![
                text("◆ DataWhisper").size(24).color(theme.accent),
                text("Sign in to your account").size(14).color(theme.fg_secondary),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .width(Length::Fill),
            column![
                text("Email").size(13),
                email_input,
                field_error(email_error, theme)
            ]
            .spacing(6),
            column![
                text("Password").size(13),
                password_input,
                field_error(password_error, theme)
            ]
            .spacing(6),
            submit,
            text(format!("Demo account: {DEMO_EMAIL} / {DEMO_PASSWORD}"))
                .size(12)
                .color(theme.fg_muted),
        ]
        .spacing(18),
    )
    .padding(32)
    .width(Length::Fixed(400.0))
    .style(move |_| card_container(theme));

    center(card).into()
}
