//! Radio-button option picker

use eframe::egui;

use super::{OptionControl, OptionProps};
use crate::gui::constants::ITEM_SPACING;
use crate::options::ArticleOption;

/// Inline radio buttons, one per option
pub struct RadioGroup(pub OptionProps);

impl OptionControl for RadioGroup {
    fn show(
        &self,
        ui: &mut egui::Ui,
        on_change: &mut dyn FnMut(&'static ArticleOption),
    ) -> Option<egui::Rect> {
        let props = &self.0;
        let mut current = props.selected;

        ui.label(egui::RichText::new(props.title).strong());
        ui.add_space(ITEM_SPACING / 2.0);

        ui.horizontal(|ui| {
            for option in props.options {
                ui.radio_value(&mut current, option, option.title);
                ui.add_space(ITEM_SPACING);
            }
        });

        if current != props.selected {
            on_change(current);
        }

        None
    }
}
