//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Title bar control glyph: transparent until hovered, then a faint white plate.
pub fn chrome_glyph(ui: &mut egui::Ui, id: egui::Id, icon: &str) -> egui::Response {
    let (rect, _) = ui.allocate_exact_size(theme::GLYPH_SIZE, egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::BG_GLYPH_HOVER, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(theme::FONT_GLYPH),
            theme::TEXT_PRIMARY,
        );
    }

    response
}

/// Single-line text field with the rounded zinc styling.
pub fn text_input(
    ui: &mut egui::Ui,
    id: egui::Id,
    text: &mut String,
    hint: &str,
) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(text)
            .id(id)
            .hint_text(egui::RichText::new(hint).color(theme::TEXT_DIM))
            .text_color(theme::TEXT_PRIMARY)
            .background_color(theme::BG_INPUT)
            .margin(egui::Margin::same(theme::SPACING_MD as i8))
            .desired_width(theme::INPUT_WIDTH),
    )
}
