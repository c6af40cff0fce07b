//! Draft and applied article selections
//!
//! The draft tracks what the controls currently show. The applied selection is
//! what drives the article styles and only changes on submit or reset.

use tracing::debug;

use crate::options::{ArticleOption, Category};

/// One option per category, always complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub font_family: &'static ArticleOption,
    pub font_size: &'static ArticleOption,
    pub font_color: &'static ArticleOption,
    pub background_color: &'static ArticleOption,
    pub content_width: &'static ArticleOption,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            font_family: Category::FontFamily.default_option(),
            font_size: Category::FontSize.default_option(),
            font_color: Category::FontColor.default_option(),
            background_color: Category::BackgroundColor.default_option(),
            content_width: Category::ContentWidth.default_option(),
        }
    }
}

impl SelectionState {
    pub fn get(&self, category: Category) -> &'static ArticleOption {
        match category {
            Category::FontFamily => self.font_family,
            Category::FontSize => self.font_size,
            Category::FontColor => self.font_color,
            Category::BackgroundColor => self.background_color,
            Category::ContentWidth => self.content_width,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut &'static ArticleOption {
        match category {
            Category::FontFamily => &mut self.font_family,
            Category::FontSize => &mut self.font_size,
            Category::FontColor => &mut self.font_color,
            Category::BackgroundColor => &mut self.background_color,
            Category::ContentWidth => &mut self.content_width,
        }
    }

    /// Returns a copy with only `category` replaced
    pub fn with(mut self, category: Category, option: &'static ArticleOption) -> Self {
        debug_assert!(
            category.contains(option),
            "option {option:?} is not part of the {category:?} catalog"
        );
        *self.slot_mut(category) = option;
        self
    }
}

/// In-progress selection bound to the panel controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    current: SelectionState,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &SelectionState {
        &self.current
    }

    /// Replace a single category, leaving the others untouched
    pub fn update(&mut self, category: Category, option: &'static ArticleOption) {
        debug!(?category, value = option.value, "Draft updated");
        self.current = self.current.with(category, option);
    }

    pub fn reset(&mut self) {
        self.current = SelectionState::default();
    }
}

/// Last committed selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedState {
    current: SelectionState,
}

impl AppliedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &SelectionState {
        &self.current
    }

    /// Full replacement, never a merge
    pub fn commit(&mut self, selection: SelectionState) {
        self.current = selection;
    }
}
