//! Upload screen: CSV file or manual entry

use super::page_header;
use crate::app::ui_components::{
    card_container, field_error, invalid_text_input, primary_button, secondary_button,
    tab_button, themed_text_input,
};
use crate::app::{Message, State};
use crate::core::session::UploadTab;
use crate::theme::AppTheme;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_upload(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let tab = state.upload.tab;

    let tab_item = |label: &'static str, target: UploadTab| {
        let active = tab == target;
        button(text(label).size(13))
            .on_press(Message::UploadTabChanged(target))
            .padding([6, 16])
            .style(move |_, status| tab_button(theme, status, active))
    };

    let tabs = container(
        row![
            tab_item("Upload CSV", UploadTab::File),
            tab_item("Manual Entry", UploadTab::Manual)
        ]
        .spacing(4),
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

    let body = match tab {
        UploadTab::File => view_file_tab(state),
        UploadTab::Manual => view_manual_tab(state),
    };

    column![
        page_header(
            "Upload Your Data",
            "Add health data from a CSV export or enter a day by hand.",
            state,
        ),
        tabs,
        container(body)
            .padding(24)
            .width(Length::Fill)
            .max_width(720)
            .style(move |_| card_container(theme)),
    ]
    .spacing(24)
    .into()
}

fn submit_button<'a>(
    label: &'a str,
    busy_label: &'a str,
    busy: bool,
    message: Message,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    button(text(if busy { busy_label } else { label }).size(14))
        .on_press_maybe((!busy).then_some(message))
        .padding([10, 20])
        .style(move |_, status| primary_button(theme, status))
        .into()
}

fn view_file_tab(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let upload = &state.upload;

    let picked: Element<'_, Message> = match &upload.selected_file {
        Some(file) => row![
            text("▤").size(18).color(theme.accent),
            text(&file.name).size(14).color(theme.fg_primary),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into(),
        None => text("No file chosen").size(14).color(theme.fg_muted).into(),
    };

    column![
        text("CSV file").size(16),
        text("Columns: date, steps, sleep hours, mood. The file stays on this device.")
            .size(13)
            .color(theme.fg_secondary),
        row![
            button(text("Choose file...").size(13))
                .on_press_maybe((!upload.uploading).then_some(Message::PickFileClicked))
                .padding([8, 14])
                .style(move |_, status| secondary_button(theme, status)),
            picked,
        ]
        .spacing(16)
        .align_y(Alignment::Center),
        submit_button(
            "Upload",
            "Uploading...",
            upload.uploading,
            Message::UploadFileSubmitted,
            theme,
        ),
    ]
    .spacing(16)
    .into()
}

/// Labelled text input with its inline error underneath
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    on_input: fn(String) -> Message,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    let invalid = error.is_some();
    column![
        text(label).size(13),
        text_input(placeholder, value)
            .on_input(on_input)
            .on_submit(Message::ManualEntrySubmitted)
            .padding(10)
            .size(14)
            .style(move |_, status| {
                if invalid {
                    invalid_text_input(theme, status)
                } else {
                    themed_text_input(theme, status)
                }
            }),
        field_error(error, theme),
    ]
    .spacing(6)
    .width(Length::Fill)
    .into()
}

fn view_manual_tab(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let upload = &state.upload;
    let form = &upload.manual;
    let errors = upload.manual_errors.as_ref();

    column![
        row![
            labeled_input(
                "Date",
                "YYYY-MM-DD",
                &form.date,
                errors.and_then(|e| e.date.as_deref()),
                Message::ManualDateChanged,
                theme,
            ),
            labeled_input(
                "Steps",
                "8000",
                &form.steps,
                errors.and_then(|e| e.steps.as_deref()),
                Message::ManualStepsChanged,
                theme,
            ),
        ]
        .spacing(16),
        row![
            labeled_input(
                "Sleep (hours)",
                "7.5",
                &form.sleep,
                errors.and_then(|e| e.sleep.as_deref()),
                Message::ManualSleepChanged,
                theme,
            ),
            labeled_input(
                "Mood",
                "Happy, tired, calm...",
                &form.mood,
                errors.and_then(|e| e.mood.as_deref()),
                Message::ManualMoodChanged,
                theme,
            ),
        ]
        .spacing(16),
        submit_button(
            "Submit Data",
            "Submitting...",
            upload.uploading,
            Message::ManualEntrySubmitted,
            theme,
        ),
    ]
    .spacing(16)
    .into()
}
