//! Dropdown option picker

use eframe::egui;

use super::{OptionControl, OptionProps};
use crate::gui::constants::ITEM_SPACING;
use crate::options::ArticleOption;

/// Dropdown picker
pub struct Select(pub OptionProps);

impl OptionControl for Select {
    fn show(
        &self,
        ui: &mut egui::Ui,
        on_change: &mut dyn FnMut(&'static ArticleOption),
    ) -> Option<egui::Rect> {
        let props = &self.0;
        let mut current = props.selected;

        ui.label(egui::RichText::new(props.title).strong());
        ui.add_space(ITEM_SPACING / 2.0);

        let popup = egui::ComboBox::from_id_salt(props.title)
            .selected_text(props.selected.title)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in props.options {
                    ui.selectable_value(&mut current, option, option.title);
                }
                popup_bounds(
                    ui.min_rect(),
                    ui.spacing().menu_margin,
                    ui.visuals().window_stroke.width,
                )
            });

        if current != props.selected {
            on_change(current);
        }

        popup.inner
    }
}

/// Outer edge of the popup frame around `content`
fn popup_bounds(content: egui::Rect, margin: egui::Margin, stroke: f32) -> egui::Rect {
    (content + margin).expand(stroke)
}
