use super::AppTheme;

/// DataWhisper Light - Default theme
/// Near-white lavender surfaces with the purple brand accent
pub fn light() -> AppTheme {
    AppTheme::from_hex(
        "DataWhisper Light",
        0x00F7_F6FB, // bg_base - Faint lavender white
        0x00FF_FFFF, // bg_sidebar - White sidebar
        0x00FF_FFFF, // bg_surface - White cards
        0x00FF_FFFF, // bg_elevated - Inputs
        0x00EF_EBFA, // bg_hover - Lavender tint
        0x00E4_DDF8, // bg_active - Selected rows
        0x001F_1B2E, // fg_primary - Ink
        0x0055_5066, // fg_secondary - Slate
        0x008F_8A9E, // fg_muted - Placeholder gray
        0x00FF_FFFF, // fg_on_accent - White on purple
        0x005D_3FD3, // accent - Brand purple
        0x004E_33B8, // accent_hover - Deeper purple
        0x0020_B2AA, // success - Brand teal
        0x00E0_A030, // warning - Amber
        0x00D9_4141, // danger - Red
        0x0020_B2AA, // info - Teal
        0x00E3_E0EC, // border - Soft gray
        0x005D_3FD3, // border_strong - Purple
        0x00EC_E9F2, // divider
        0x005D_3FD3, // chart_primary - Purple
        0x0020_B2AA, // chart_secondary - Teal
        0x00FF_7F50, // chart_tertiary - Orange
    )
}

/// DataWhisper Dark - Dark counterpart to Light
/// Deep indigo-charcoal backgrounds, same brand series colors
pub fn dark() -> AppTheme {
    AppTheme::from_hex(
        "DataWhisper Dark",
        0x0015_1320, // bg_base - Indigo charcoal
        0x001B_1829, // bg_sidebar
        0x0021_1E31, // bg_surface - Cards
        0x002A_263D, // bg_elevated - Inputs
        0x0033_2E4A, // bg_hover
        0x003D_3560, // bg_active
        0x00EC_EAF4, // fg_primary - Off-white
        0x00B4_AFC6, // fg_secondary
        0x0078_7290, // fg_muted
        0x00FF_FFFF, // fg_on_accent
        0x007B_61E8, // accent - Lifted purple for contrast
        0x008D_76EE, // accent_hover
        0x0030_C9C0, // success - Teal
        0x00E8_B04A, // warning
        0x00E5_5A5A, // danger
        0x0030_C9C0, // info
        0x0033_2E4A, // border
        0x007B_61E8, // border_strong
        0x002A_263D, // divider
        0x005D_3FD3, // chart_primary - Purple
        0x0020_B2AA, // chart_secondary - Teal
        0x00FF_7F50, // chart_tertiary - Orange
    )
}
