//! UI palettes for the three themes.

use egui::{Color32, CornerRadius, Stroke, Vec2};

use banter_types::theme::Theme;

pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub error_bg: Color32,
    pub dark_mode: bool,
}

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

static LIGHT: Palette = Palette {
    bg_primary: Color32::from_rgb(250, 250, 250),
    bg_secondary: Color32::from_rgb(238, 238, 241),
    bg_surface: Color32::from_rgb(225, 225, 230),
    text_primary: Color32::from_rgb(24, 24, 27),
    text_secondary: Color32::from_rgb(113, 113, 122),
    accent: Color32::from_rgb(99, 102, 241),
    user_bubble: Color32::from_rgb(224, 231, 255),
    bot_bubble: Color32::from_rgb(238, 238, 241),
    success: Color32::from_rgb(22, 163, 74),
    warning: Color32::from_rgb(202, 138, 4),
    error: Color32::from_rgb(220, 38, 38),
    error_bg: Color32::from_rgb(254, 226, 226),
    dark_mode: false,
};

static DARK: Palette = Palette {
    bg_primary: Color32::from_rgb(24, 24, 27),
    bg_secondary: Color32::from_rgb(39, 39, 42),
    bg_surface: Color32::from_rgb(52, 52, 56),
    text_primary: Color32::from_rgb(228, 228, 231),
    text_secondary: Color32::from_rgb(161, 161, 170),
    accent: Color32::from_rgb(99, 102, 241),
    user_bubble: Color32::from_rgb(49, 46, 129),
    bot_bubble: Color32::from_rgb(39, 39, 42),
    success: Color32::from_rgb(34, 197, 94),
    warning: Color32::from_rgb(234, 179, 8),
    error: Color32::from_rgb(239, 68, 68),
    error_bg: Color32::from_rgb(50, 20, 20),
    dark_mode: true,
};

static NEON_SUNSET: Palette = Palette {
    bg_primary: Color32::from_rgb(24, 12, 36),
    bg_secondary: Color32::from_rgb(40, 20, 56),
    bg_surface: Color32::from_rgb(56, 28, 76),
    text_primary: Color32::from_rgb(250, 230, 255),
    text_secondary: Color32::from_rgb(196, 160, 210),
    accent: Color32::from_rgb(255, 94, 158),
    user_bubble: Color32::from_rgb(94, 26, 92),
    bot_bubble: Color32::from_rgb(40, 20, 56),
    success: Color32::from_rgb(94, 255, 158),
    warning: Color32::from_rgb(255, 176, 64),
    error: Color32::from_rgb(255, 90, 90),
    error_bg: Color32::from_rgb(64, 16, 32),
    dark_mode: true,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
        Theme::NeonSunset => &NEON_SUNSET,
    }
}

/// Apply a theme's palette to an egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let p = palette(theme);
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = p.dark_mode;
    style.visuals.panel_fill = p.bg_primary;
    style.visuals.window_fill = p.bg_secondary;
    style.visuals.extreme_bg_color = p.bg_surface;
    style.visuals.override_text_color = Some(p.text_primary);

    style.visuals.widgets.inactive.bg_fill = p.bg_surface;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    style.visuals.widgets.hovered.bg_fill = p.bg_surface;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    style.visuals.widgets.active.bg_fill = p.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, p.text_primary);

    style.visuals.selection.bg_fill = p.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, p.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
