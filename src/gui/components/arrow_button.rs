//! Toggle handle for the settings panel

use eframe::egui;

use crate::gui::constants::{ARROW_FILL, ARROW_FILL_OPEN, ARROW_SIZE, PANEL_TEXT};

/// Round handle that opens and closes the settings panel
pub struct ArrowButton {
    pub is_open: bool,
}

impl ArrowButton {
    pub fn show(self, ui: &mut egui::Ui, on_click: impl FnOnce()) -> egui::Response {
        let (glyph, fill, hint) = if self.is_open {
            ("\u{2190}", ARROW_FILL_OPEN, "Close settings")
        } else {
            ("\u{2192}", ARROW_FILL, "Open settings")
        };

        let label = egui::RichText::new(glyph)
            .size(ARROW_SIZE / 2.0)
            .color(PANEL_TEXT);
        let button = egui::Button::new(label)
            .fill(fill)
            .corner_radius(ARROW_SIZE / 2.0)
            .min_size(egui::vec2(ARROW_SIZE, ARROW_SIZE));

        let response = ui.add(button).on_hover_text(hint);
        if response.clicked() {
            on_click();
        }
        response
    }
}
