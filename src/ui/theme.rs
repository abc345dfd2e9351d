//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    /// Alpha applied to on-surface content to mark it disabled.
    pub const DISABLED_ALPHA: f64 = 0.38;

    // ── palette ────────────────────────────────────────────────
    pub fn primary() -> Color {
        Color::Rgb(0xE9, 0x1E, 0x63)
    }

    pub fn surface() -> Color {
        Color::Rgb(0xFF, 0xFF, 0xFF)
    }

    pub fn on_surface() -> Color {
        Color::Rgb(0x12, 0x12, 0x12)
    }

    /// Colour of a tab label that is not selected.
    pub fn inactive_tab_color() -> Color {
        lerp_color(Self::surface(), Self::on_surface(), Self::DISABLED_ALPHA)
    }

    // ── typography ─────────────────────────────────────────────
    /// Secondary body text (the greeting line).
    pub fn body2_style() -> Style {
        Style::default()
    }

    /// Heading text (user name, section titles).
    pub fn h6_style() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

/// Linear RGB blend from `from` (t = 0) to `to` (t = 1).
///
/// Non-RGB colours have no channels to blend, so they switch at the halfway
/// point.
pub fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
