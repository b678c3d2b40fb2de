use ratatui::style::Color;

use flota_core::config::AppearanceConfig;
use flota_core::fleet::Tone;
use flota_core::state::EffectiveColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPalette {
    pub accent: Color,
    pub accent_alt: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub muted: Color,
    pub text: Color,
    pub border: Color,
    pub panel_bg: Color,
    pub selected_bg: Color,
}

pub fn palette_for(mode: EffectiveColorMode) -> UiPalette {
    match mode {
        EffectiveColorMode::Dark => UiPalette {
            accent: Color::LightBlue,
            accent_alt: Color::LightCyan,
            success: Color::LightGreen,
            info: Color::LightBlue,
            warning: Color::Yellow,
            danger: Color::LightRed,
            muted: Color::Gray,
            text: Color::White,
            border: Color::DarkGray,
            panel_bg: Color::Rgb(26, 32, 44),
            selected_bg: Color::Rgb(45, 55, 72),
        },
        EffectiveColorMode::Light => UiPalette {
            accent: Color::Blue,
            accent_alt: Color::Cyan,
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Rgb(183, 121, 31),
            danger: Color::Red,
            muted: Color::DarkGray,
            text: Color::Black,
            border: Color::Gray,
            panel_bg: Color::Rgb(247, 250, 252),
            selected_bg: Color::Rgb(226, 232, 240),
        },
    }
}

pub fn tone_color(palette: UiPalette, tone: Tone) -> Color {
    match tone {
        Tone::Success => palette.success,
        Tone::Info => palette.info,
        Tone::Warning => palette.warning,
        Tone::Danger => palette.danger,
        Tone::Neutral => palette.muted,
    }
}

/// How the `system` colour mode resolves: the config value if set, then the
/// terminal's `COLORFGBG` hint, then dark.
pub fn system_prefers_dark(appearance: &AppearanceConfig) -> bool {
    if let Some(prefers_dark) = appearance.system_prefers_dark {
        return prefers_dark;
    }
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|raw| colorfgbg_prefers_dark(&raw))
        .unwrap_or(true)
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Background colours
/// 7 and 9..=15 are the light half of the 16-colour table.
fn colorfgbg_prefers_dark(raw: &str) -> Option<bool> {
    let bg: u8 = raw.rsplit(';').next()?.trim().parse().ok()?;
    Some(!(bg == 7 || (9..=15).contains(&bg)))
}
