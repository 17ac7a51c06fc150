//! Reusable view widgets and formatting helpers.

use eframe::egui;
use egui::{Align2, Color32, FontId, Response, RichText, Sense, Stroke, Ui};
use shared::domain::Course;

use crate::ui::theme;

pub const CARD_WIDTH: f32 = 300.0;

/// Thousands-separated rendering of a student count: 15234 -> "15,234".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Leading integer of a duration label like "40 hours".
pub fn parse_leading_hours(duration: &str) -> u64 {
    duration
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

pub fn badge(ui: &mut Ui, text: &str, fill: Color32, text_color: Color32) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).color(text_color));
        });
}

/// Deterministic placeholder banner standing in for the course's remote
/// thumbnail URI.
pub fn thumbnail_banner(ui: &mut Ui, course: &Course, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::CornerRadius::same(8),
        theme::thumbnail_color(course.id.as_str()),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials(&course.title),
        FontId::proportional(height * 0.38),
        Color32::WHITE,
    );
}

pub fn rating_row(ui: &mut Ui, course: &Course) {
    ui.label(RichText::new("★").color(theme::STAR));
    ui.label(RichText::new(format!("{}", course.rating)).size(13.0));
    ui.label(
        RichText::new(format!("({})", format_count(course.students_count)))
            .size(13.0)
            .color(theme::TEXT_MUTED),
    );
}

pub fn price_label(course: &Course) -> RichText {
    if course.is_free {
        RichText::new("Free").color(theme::FREE_BADGE).strong()
    } else {
        RichText::new(format!("${}", course.price))
            .color(theme::ACCENT)
            .strong()
    }
}

/// A catalog course card; the whole card is clickable.
pub fn course_card(ui: &mut Ui, course: &Course) -> Response {
    let response = egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(12, 12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            thumbnail_banner(ui, course, CARD_WIDTH, 120.0);
            if course.is_free {
                badge(ui, "FREE", theme::FREE_BADGE, Color32::WHITE);
            }

            ui.label(RichText::new(&course.title).strong().size(15.0));
            ui.label(
                RichText::new(&course.description)
                    .size(12.0)
                    .color(theme::TEXT_MUTED),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(&course.instructor)
                    .size(12.0)
                    .color(theme::TEXT_MUTED),
            );

            ui.horizontal(|ui| {
                rating_row(ui, course);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&course.duration)
                            .size(12.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });

            ui.horizontal(|ui| {
                badge(ui, course.level.label(), theme::BADGE_NEUTRAL, Color32::BLACK);
                if !course.is_free {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(price_label(course));
                    });
                }
            });
        })
        .response;

    let id = ui.id().with(course.id.as_str());
    ui.interact(response.rect, id, Sense::click())
}

pub fn stat_card(ui: &mut Ui, label: &str, value: &str, accent: Color32) {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.set_width(180.0);
            ui.label(RichText::new(label).size(12.0).color(theme::TEXT_MUTED));
            ui.label(RichText::new(value).size(22.0).color(accent).strong());
        });
}

/// A white content card with the standard border and padding.
pub fn content_card<R>(ui: &mut Ui, add: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::NONE
        .fill(theme::CARD_BACKGROUND)
        .stroke(Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, add)
        .inner
}

#[cfg(test)]
mod tests {
    use super::{format_count, initials, parse_leading_hours};

    #[test]
    fn formats_student_counts_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(15234), "15,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn parses_leading_hours_from_duration_labels() {
        assert_eq!(parse_leading_hours("40 hours"), 40);
        assert_eq!(parse_leading_hours("12 hours"), 12);
        assert_eq!(parse_leading_hours("hours"), 0);
        assert_eq!(parse_leading_hours(""), 0);
    }

    #[test]
    fn banner_initials_take_the_first_two_words() {
        assert_eq!(initials("Photography Basics"), "PB");
        assert_eq!(initials("Complete Web Development Bootcamp"), "CW");
        assert_eq!(initials("r"), "R");
    }
}
