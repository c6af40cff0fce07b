//! Static option catalogs for every article setting
//!
//! Each category owns a fixed slice of options. Selections always point into
//! these slices, so an option is shared by reference and never mutated.

use serde::Serialize;

/// A selectable value shown in one of the panel controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleOption {
    /// Value written into the style variable
    pub value: &'static str,
    /// Label shown to the user
    pub title: &'static str,
    /// Opaque visual marker for the control that renders the option
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            value,
            title,
            class_name: Some(class_name),
        }
    }

    const fn plain(title: &'static str, value: &'static str) -> Self {
        Self {
            value,
            title,
            class_name: None,
        }
    }
}

/// Setting categories, in the order the panel shows them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::FontFamily,
        Category::FontSize,
        Category::FontColor,
        Category::BackgroundColor,
        Category::ContentWidth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::FontFamily => "Font",
            Category::FontSize => "Font size",
            Category::FontColor => "Font color",
            Category::BackgroundColor => "Background color",
            Category::ContentWidth => "Content width",
        }
    }

    pub fn options(self) -> &'static [ArticleOption] {
        match self {
            Category::FontFamily => FONT_FAMILY_OPTIONS,
            Category::FontSize => FONT_SIZE_OPTIONS,
            Category::FontColor => FONT_COLORS,
            Category::BackgroundColor => BACKGROUND_COLORS,
            Category::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Option used by the default selection
    pub fn default_option(self) -> &'static ArticleOption {
        &self.options()[0]
    }

    /// True if `option` is one of this category's catalog entries
    pub fn contains(self, option: &ArticleOption) -> bool {
        self.options().contains(option)
    }
}

pub static FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

pub static FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::plain("18px", "18px"),
    ArticleOption::plain("25px", "25px"),
    ArticleOption::plain("38px", "38px"),
];

pub static FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Black", "#000000", "font-black"),
    ArticleOption::new("White", "#FFFFFF", "font-white"),
    ArticleOption::new("Gray", "#C4C4C4", "font-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "font-pink"),
    ArticleOption::new("Hot pink", "#FD24AF", "font-hot-pink"),
    ArticleOption::new("Yellow", "#FFC802", "font-yellow"),
    ArticleOption::new("Green", "#80D994", "font-green"),
    ArticleOption::new("Blue", "#6FC1FD", "font-blue"),
    ArticleOption::new("Purple", "#5F00EA", "font-purple"),
];

pub static BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new("White", "#FFFFFF", "bg-white"),
    ArticleOption::new("Black", "#000000", "bg-black"),
    ArticleOption::new("Gray", "#C4C4C4", "bg-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "bg-pink"),
    ArticleOption::new("Hot pink", "#FD24AF", "bg-hot-pink"),
    ArticleOption::new("Yellow", "#FFC802", "bg-yellow"),
    ArticleOption::new("Green", "#80D994", "bg-green"),
    ArticleOption::new("Blue", "#6FC1FD", "bg-blue"),
    ArticleOption::new("Purple", "#5F00EA", "bg-purple"),
];

pub static CONTENT_WIDTH_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Wide", "1394px", "width-wide"),
    ArticleOption::new("Narrow", "948px", "width-narrow"),
];
