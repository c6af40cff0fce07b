//! Option pickers and the panel toggle
//!
//! Every picker is built from the same props (title, selected option, choices)
//! and reports changes through a callback. The panel only ever reads the
//! selected value it passed in and reacts to the callback.

pub mod arrow_button;
pub mod radio_group;
pub mod select;

use eframe::egui;

use crate::options::{ArticleOption, Category};
use crate::panel::SelectionState;

pub use arrow_button::ArrowButton;
pub use radio_group::RadioGroup;
pub use select::Select;

#[derive(Debug, Clone, Copy)]
pub struct OptionProps {
    pub title: &'static str,
    pub selected: &'static ArticleOption,
    pub options: &'static [ArticleOption],
}

impl OptionProps {
    /// Props for `category`, bound to the draft selection
    pub fn for_category(category: Category, draft: &SelectionState) -> Self {
        Self {
            title: category.title(),
            selected: draft.get(category),
            options: category.options(),
        }
    }
}

pub trait OptionControl {
    /// Draw the control. Returns the screen area of any popup the control
    /// floats outside its own row, so it can be treated as part of the panel.
    fn show(
        &self,
        ui: &mut egui::Ui,
        on_change: &mut dyn FnMut(&'static ArticleOption),
    ) -> Option<egui::Rect>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::article::ArticleStyle;
    use crate::panel::{ListenerRegistry, PanelController};

    #[test]
    fn test_props_follow_draft_before_submit() {
        let mut controller = PanelController::new(ArticleStyle::default(), ListenerRegistry::new());
        let purple = &Category::FontColor.options()[8];
        controller.on_control_change(Category::FontColor, purple);

        let props = OptionProps::for_category(Category::FontColor, controller.draft());
        assert_eq!(props.selected, purple);
        assert_eq!(props.title, "Font color");
        assert_eq!(
            controller.applied().get(Category::FontColor),
            Category::FontColor.default_option()
        );

        for category in Category::ALL {
            let props = OptionProps::for_category(category, controller.draft());
            assert!(std::ptr::eq(props.options, category.options()));
            assert!(category.contains(props.selected));
        }
    }
}
