use crate::app::{Banner, BannerSeverity, Message};
use crate::core::records::{AccessStatus, ChartKind};
use crate::theme::AppTheme;
use iced::widget::{
    button, checkbox, column, container, pick_list, row, scrollable, text, text_input, toggler,
};
use iced::{Alignment, Border, Color, Element, Gradient, Length, Shadow, Vector};

/// Multiplies each channel, keeping alpha
fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn soft_shadow(theme: &AppTheme, y: f32, blur: f32) -> Shadow {
    Shadow {
        color: theme.shadow_color,
        offset: Vector::new(0.0, y),
        blur_radius: blur,
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn sidebar_container(theme: &AppTheme) -> container::Style {
    // Light themes darken toward the bottom, dark themes lighten
    let multiplier = if theme.is_light() { 0.97 } else { 1.25 };

    let gradient = Gradient::Linear(
        iced::gradient::Linear::new(0.0)
            .add_stop(0.0, theme.bg_sidebar)
            .add_stop(1.0, scale(theme.bg_sidebar, multiplier)),
    );

    container::Style {
        background: Some(gradient.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: soft_shadow(theme, 2.0, 3.0),
        ..Default::default()
    }
}

pub fn active_card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_active.into()),
        border: Border {
            color: theme.accent,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn section_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.fg_primary, 0.03).into()),
        border: rounded(4.0),
        ..Default::default()
    }
}

/// Round initials badge for a person
pub fn avatar_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.accent, 0.15).into()),
        text_color: Some(theme.accent),
        border: rounded(16.0),
        ..Default::default()
    }
}

/// Pill coloured by access status
pub fn status_badge_container(theme: &AppTheme, status: AccessStatus) -> container::Style {
    let color = match status {
        AccessStatus::Viewed => theme.success,
        AccessStatus::Pending => theme.warning,
        AccessStatus::Accepted => theme.info,
    };
    container::Style {
        background: Some(with_alpha(color, 0.15).into()),
        text_color: Some(color),
        border: rounded(10.0),
        ..Default::default()
    }
}

/// Solid button in `fill`, shared by primary and danger buttons
fn filled_button(theme: &AppTheme, fill: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color: theme.fg_on_accent,
        border: rounded(6.0),
        shadow: soft_shadow(theme, 2.0, 3.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(scale(fill, 1.08).into()),
            shadow: soft_shadow(theme, 2.5, 4.0),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(fill, 0.95).into()),
            shadow: soft_shadow(theme, 0.5, 1.5),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(fill, 0.5).into()),
            text_color: with_alpha(theme.fg_on_accent, 0.5),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.accent, status)
}

pub fn danger_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.danger, status)
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_surface.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: soft_shadow(theme, 1.0, 2.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(theme.bg_surface, 0.5).into()),
            text_color: theme.fg_muted,
            border: Border {
                color: with_alpha(theme.border, 0.3),
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Active => base,
    }
}

/// Clickable card, raised further on hover
pub fn card_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let c = if active {
        active_card_container(theme)
    } else {
        card_container(theme)
    };
    let base = button::Style {
        background: c.background,
        text_color: theme.fg_primary,
        border: c.border,
        shadow: c.shadow,
        snap: true,
    };

    match status {
        button::Status::Hovered => button::Style {
            shadow: soft_shadow(theme, 3.0, 6.0),
            ..base
        },
        button::Status::Pressed => button::Style {
            shadow: soft_shadow(theme, 1.0, 2.0),
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}

/// Tab header button; the selected tab sits raised on the elevated surface
pub fn tab_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let base = button::Style {
        background: active.then(|| theme.bg_elevated.into()),
        text_color: if active {
            theme.fg_primary
        } else {
            theme.fg_secondary
        },
        border: rounded(6.0),
        shadow: if active {
            soft_shadow(theme, 1.0, 3.0)
        } else {
            Shadow::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered if !active => button::Style {
            background: Some(theme.bg_hover.into()),
            text_color: theme.fg_primary,
            ..base
        },
        _ => base,
    }
}

/// Sidebar navigation entry
pub fn nav_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let base = button::Style {
        background: active.then(|| with_alpha(theme.accent, 0.12).into()),
        text_color: if active { theme.accent } else { theme.fg_secondary },
        border: rounded(6.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed if !active => button::Style {
            background: Some(theme.bg_hover.into()),
            text_color: theme.fg_primary,
            ..base
        },
        _ => base,
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: with_alpha(theme.accent, 0.4),
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            icon: theme.fg_secondary,
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                ..base.border
            },
            icon: theme.accent,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: with_alpha(theme.bg_elevated, 0.5).into(),
            border: Border {
                color: with_alpha(theme.border, 0.3),
                ..base.border
            },
            value: theme.fg_muted,
            ..base
        },
    }
}

/// Text input whose field failed validation
pub fn invalid_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let style = themed_text_input(theme, status);
    text_input::Style {
        border: Border {
            color: theme.danger,
            ..style.border
        },
        ..style
    }
}

/// Pick list (dropdown) styling with theme-aware colors
pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        handle_color: theme.fg_secondary,
        placeholder_color: theme.fg_muted,
        text_color: theme.fg_primary,
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered => pick_list::Style {
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            handle_color: theme.fg_primary,
            ..base
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                ..base.border
            },
            handle_color: theme.accent,
            ..base
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: soft_shadow(theme, 4.0, 8.0),
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}

/// Checkbox styling with theme-aware colors
pub fn themed_checkbox(theme: &AppTheme, status: checkbox::Status) -> checkbox::Style {
    let base = checkbox::Style {
        background: theme.bg_elevated.into(),
        icon_color: theme.fg_on_accent,
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        text_color: Some(theme.fg_primary),
    };
    let checked = |fill: Color| checkbox::Style {
        background: fill.into(),
        border: Border {
            color: fill,
            ..base.border
        },
        ..base
    };

    match status {
        checkbox::Status::Active { is_checked: true } => checked(theme.accent),
        checkbox::Status::Hovered { is_checked: true } => checked(theme.accent_hover),
        checkbox::Status::Active { is_checked: false } => base,
        checkbox::Status::Hovered { is_checked: false } => checkbox::Style {
            background: theme.bg_hover.into(),
            ..base
        },
        checkbox::Status::Disabled { .. } => checkbox::Style {
            background: with_alpha(theme.bg_elevated, 0.5).into(),
            text_color: Some(theme.fg_muted),
            ..base
        },
    }
}

/// Toggler styling with theme-aware colors
pub fn themed_toggler(theme: &AppTheme, status: toggler::Status) -> toggler::Style {
    let base = toggler::Style {
        background: theme.bg_hover.into(),
        background_border_width: 1.0,
        background_border_color: theme.border,
        border_radius: Some(10.0.into()),
        foreground: theme.bg_surface.into(),
        foreground_border_width: 0.0,
        foreground_border_color: Color::TRANSPARENT,
        padding_ratio: 0.5,
        text_color: Some(theme.fg_primary),
    };
    let on = |fill: Color| toggler::Style {
        background: fill.into(),
        background_border_color: fill,
        foreground: theme.fg_on_accent.into(),
        ..base
    };

    match status {
        toggler::Status::Active { is_toggled: true } => on(theme.accent),
        toggler::Status::Hovered { is_toggled: true } => on(theme.accent_hover),
        toggler::Status::Active { is_toggled: false } => base,
        toggler::Status::Hovered { is_toggled: false } => toggler::Style {
            background_border_color: theme.border_strong,
            ..base
        },
        toggler::Status::Disabled { .. } => toggler::Style {
            background: with_alpha(theme.bg_hover, 0.5).into(),
            foreground: theme.fg_muted.into(),
            ..base
        },
    }
}

/// Themed scrollable with a thin rounded scroller
pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Active { .. } => theme.fg_muted,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } if is_horizontal_scrollbar_hovered || is_vertical_scrollbar_hovered => {
            theme.fg_secondary
        }
        scrollable::Status::Hovered { .. } => theme.fg_muted,
        scrollable::Status::Dragged { .. } => theme.accent,
    };

    let rail = scrollable::Rail {
        background: None,
        border: rounded(4.0),
        scroller: scrollable::Scroller {
            background: with_alpha(scroller_color, 0.6).into(),
            border: rounded(4.0),
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: theme.bg_surface.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: soft_shadow(theme, 2.0, 4.0),
            icon: theme.fg_primary,
        },
    }
}

/// Small uppercase label above a group of controls
pub fn section_label<'a>(label: &'a str, theme: &'a AppTheme) -> Element<'a, Message> {
    container(text(label).size(10).color(theme.fg_muted))
        .padding([2, 6])
        .style(move |_| section_header_container(theme))
        .into()
}

/// Inline error under a form field, empty when the field is valid
pub fn field_error<'a>(error: Option<&'a str>, theme: &AppTheme) -> Element<'a, Message> {
    match error {
        Some(message) => text(message).size(12).color(theme.danger).into(),
        None => column![].into(),
    }
}

/// Stand-in for a chart: coloured header, glyph, title and kind
pub fn chart_placeholder<'a>(
    title: &'a str,
    kind: ChartKind,
    series: Color,
    theme: &'a AppTheme,
) -> Element<'a, Message> {
    container(
        column![
            container(column![])
                .height(Length::Fixed(4.0))
                .width(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(series.into()),
                    border: rounded(2.0),
                    ..Default::default()
                }),
            text(kind.glyph()).size(40).color(series),
            text(title).size(16).color(theme.fg_primary),
            text(kind.to_string()).size(12).color(theme.fg_muted),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

/// Floating notification with a dismiss button
pub fn notification_banner<'a>(
    banner: &'a Banner,
    theme: &'a AppTheme,
    index: usize,
) -> Element<'a, Message> {
    let accent = match banner.severity {
        BannerSeverity::Success => theme.success,
        BannerSeverity::Info => theme.accent,
        BannerSeverity::Error => theme.danger,
    };

    container(
        row![
            container(column![])
                .width(Length::Fixed(4.0))
                .height(Length::Fixed(36.0))
                .style(move |_| container::Style {
                    background: Some(accent.into()),
                    border: rounded(2.0),
                    ..Default::default()
                }),
            column![
                text(&banner.title).size(14).color(theme.fg_primary),
                text(&banner.message).size(12).color(theme.fg_secondary),
            ]
            .spacing(2)
            .width(Length::Fixed(300.0)),
            button(text("×").size(14))
                .on_press(Message::DismissBanner(index))
                .padding([2, 8])
                .style(move |_, status| secondary_button(theme, status)),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .style(move |_| container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: with_alpha(accent, 0.6),
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_strong,
            offset: Vector::new(0.0, 6.0),
            blur_radius: 14.0,
        },
        ..Default::default()
    })
    .into()
}
