//! Projection of an applied selection into style variables

use std::collections::BTreeMap;

use serde::Serialize;

use super::selection::SelectionState;
use crate::constants::style_vars;
use crate::options::Category;

/// Flat style-variable name → value mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<&'static str, &'static str>);

impl StyleMap {
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.0.get(name).copied()
    }
}

/// Host style scope that receives projected styles
pub trait StyleSink {
    /// Apply all variables in one batch
    fn apply(&mut self, styles: &StyleMap);
}

/// Style variable driven by `category`
pub fn variable(category: Category) -> &'static str {
    match category {
        Category::FontFamily => style_vars::FONT_FAMILY,
        Category::FontSize => style_vars::FONT_SIZE,
        Category::FontColor => style_vars::FONT_COLOR,
        Category::BackgroundColor => style_vars::BACKGROUND_COLOR,
        Category::ContentWidth => style_vars::CONTENT_WIDTH,
    }
}

pub fn project(selection: &SelectionState) -> StyleMap {
    StyleMap(
        Category::ALL
            .into_iter()
            .map(|category| (variable(category), selection.get(category).value))
            .collect(),
    )
}
