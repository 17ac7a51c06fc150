//! Visual identity: a light theme with the LearnHub accent palette.

use eframe::egui;
use egui::{Color32, Context, Stroke};

/// Primary actions, prices, selected rows.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
/// Hero banners on the landing and detail pages.
pub const HERO_FILL: Color32 = Color32::from_rgb(76, 81, 191);
/// "FREE" badges.
pub const FREE_BADGE: Color32 = Color32::from_rgb(34, 197, 94);
pub const STAR: Color32 = Color32::from_rgb(234, 179, 8);
pub const PAGE_BACKGROUND: Color32 = Color32::from_rgb(249, 250, 251);
pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
pub const CARD_STROKE: Color32 = Color32::from_rgb(229, 231, 235);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const FOOTER_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const BADGE_NEUTRAL: Color32 = Color32::from_rgb(229, 231, 235);
pub const VIDEO_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);

pub fn apply(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = PAGE_BACKGROUND;
    style.visuals.window_fill = CARD_BACKGROUND;
    style.visuals.selection.bg_fill = ACCENT;

    // Make text inputs reliably visible against white cards.
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, CARD_STROKE);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}

/// Deterministic stand-in color for a course thumbnail; nothing is fetched.
pub fn thumbnail_color(course_id: &str) -> Color32 {
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(59, 130, 246),
        Color32::from_rgb(139, 92, 246),
        Color32::from_rgb(16, 185, 129),
        Color32::from_rgb(244, 114, 182),
        Color32::from_rgb(249, 115, 22),
        Color32::from_rgb(20, 184, 166),
    ];
    let hash: usize = course_id.bytes().map(usize::from).sum();
    PALETTE[hash % PALETTE.len()]
}
