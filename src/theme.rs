//! Centralized theme constants for the minepkg window
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_TITLE_BAR: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_INPUT: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_GLYPH_HOVER: Color32 = Color32::from_rgba_premultiplied(0x1a, 0x1a, 0x1a, 0x1a); // white @ 10%

// =============================================================================
// COLORS - Accent (Orange)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xea, 0x58, 0x0c); // orange-600

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_GLYPH: f32 = 14.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const TITLE_BAR_HEIGHT: f32 = 40.0;
pub const GLYPH_SIZE: egui::Vec2 = egui::vec2(40.0, 32.0);
pub const INPUT_WIDTH: f32 = 220.0;
pub const BUTTON_HEIGHT: f32 = 34.0;

// =============================================================================
// CORNER RADIUS / STROKE / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_BASE,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_TITLE_BAR,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_LARGE.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_LARGE.into(),
                expansion: 0.0,
            },
            ..egui::Visuals::dark().widgets
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Title bar strip with a soft drop shadow
pub fn title_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_TITLE_BAR)
        .inner_margin(egui::Margin::symmetric(SPACING_MD as i8, 4))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        })
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent orange button (primary action)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).strong().color(TEXT_PRIMARY))
        .fill(ACCENT)
        .corner_radius(RADIUS_LARGE)
        .min_size(egui::vec2(0.0, BUTTON_HEIGHT))
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (base_fill, rect.shrink(1.0))
    } else if response.hovered() {
        (base_fill, rect)
    } else {
        (Color32::TRANSPARENT, rect)
    }
}
