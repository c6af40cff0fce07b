//! Article view and the style scope it reads from

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use tracing::{info, warn};

use crate::constants::style_vars;
use crate::gui::constants::{ARTICLE_PADDING, HEADING_SCALE, ITEM_SPACING};
use crate::options::FONT_FAMILY_OPTIONS;
use crate::panel::{StyleMap, StyleSink};

const TITLE: &str = "Typography as a reading instrument";

const PARAGRAPHS: &[&str] = &[
    "A page of text is a small machine. Line length, weight and contrast decide \
     how quickly the eye finds the start of the next line and how long a reader \
     can stay with the material before fatigue sets in.",
    "Wide columns suit large screens and skimming. Narrow columns slow the reader \
     down a little and keep long paragraphs from turning into a grey wall. Neither \
     is correct on its own; the right choice depends on the text and the person.",
    "Colour matters just as much. Pure black on pure white is crisp but harsh under \
     bright light, while softer pairings trade some contrast for comfort. Use the \
     settings panel on the left to try a few combinations and apply the one that \
     reads best.",
];

/// Resolved style scope for the article view
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStyle {
    pub font_family: egui::FontFamily,
    pub font_size: f32,
    pub font_color: egui::Color32,
    pub background: egui::Color32,
    pub content_width: f32,
}

impl Default for ArticleStyle {
    fn default() -> Self {
        Self {
            font_family: egui::FontFamily::Proportional,
            font_size: 18.0,
            font_color: egui::Color32::BLACK,
            background: egui::Color32::WHITE,
            content_width: 1394.0,
        }
    }
}

impl StyleSink for ArticleStyle {
    fn apply(&mut self, styles: &StyleMap) {
        if let Some(family) = resolve(styles, style_vars::FONT_FAMILY, parse_font_family) {
            self.font_family = family;
        }
        if let Some(size) = resolve(styles, style_vars::FONT_SIZE, parse_px) {
            self.font_size = size;
        }
        if let Some(color) = resolve(styles, style_vars::FONT_COLOR, parse_hex_color) {
            self.font_color = color;
        }
        if let Some(color) = resolve(styles, style_vars::BACKGROUND_COLOR, parse_hex_color) {
            self.background = color;
        }
        if let Some(width) = resolve(styles, style_vars::CONTENT_WIDTH, parse_px) {
            self.content_width = width;
        }
    }
}

/// Look up and parse one variable; unusable values keep the previous style
fn resolve<T>(styles: &StyleMap, variable: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let value = styles.get(variable);
    let parsed = value.and_then(parse);
    if parsed.is_none() {
        warn!(variable, ?value, "Ignoring style variable the article view cannot use");
    }
    parsed
}

/// Render the article with `style` into the central panel
pub fn show(ctx: &egui::Context, style: &ArticleStyle) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(style.background).inner_margin(ARTICLE_PADDING))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let width = style.content_width.min(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.set_max_width(width);
                    ui.label(
                        egui::RichText::new(TITLE)
                            .family(style.font_family.clone())
                            .size(style.font_size * HEADING_SCALE)
                            .color(style.font_color)
                            .strong(),
                    );
                    ui.add_space(ITEM_SPACING * 2.0);
                    for paragraph in PARAGRAPHS {
                        ui.label(
                            egui::RichText::new(*paragraph)
                                .family(style.font_family.clone())
                                .size(style.font_size)
                                .color(style.font_color),
                        );
                        ui.add_space(ITEM_SPACING);
                    }
                });
            });
        });
}

/// Register a named font family for every catalog entry.
///
/// Families with a configured font file use it first; all of them fall back to
/// egui's proportional fonts, so a family name is always bound.
pub fn install_fonts(ctx: &egui::Context, font_files: &HashMap<String, PathBuf>) {
    let mut fonts = egui::FontDefinitions::default();
    let fallback = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for option in FONT_FAMILY_OPTIONS {
        let mut chain = Vec::new();
        if let Some(path) = font_files.get(option.value) {
            match std::fs::read(path) {
                Ok(bytes) => {
                    fonts.font_data.insert(
                        option.value.to_string(),
                        Arc::new(egui::FontData::from_owned(bytes)),
                    );
                    chain.push(option.value.to_string());
                    info!(family = option.value, path = %path.display(), "Loaded font file");
                }
                Err(err) => {
                    warn!(family = option.value, path = %path.display(), error = %err, "Failed to read font file");
                }
            }
        }
        chain.extend(fallback.iter().cloned());
        fonts
            .families
            .insert(egui::FontFamily::Name(option.value.into()), chain);
    }

    ctx.set_fonts(fonts);
}

/// Only catalog families are bound in the font definitions
fn parse_font_family(value: &str) -> Option<egui::FontFamily> {
    FONT_FAMILY_OPTIONS
        .iter()
        .any(|option| option.value == value)
        .then(|| egui::FontFamily::Name(value.into()))
}

/// Parse a pixel length such as `18px`
fn parse_px(value: &str) -> Option<f32> {
    let number = value.trim().strip_suffix("px")?;
    number.trim().parse::<f32>().ok().filter(|px| px.is_finite() && *px > 0.0)
}

/// Parse hex color string - supports both #RRGGBB and #AARRGGBB formats
fn parse_hex_color(hex: &str) -> Option<egui::Color32> {
    let hex = hex.trim_start_matches('#');
    let byte = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|part| u8::from_str_radix(part, 16).ok())
    };

    match hex.len() {
        6 => Some(egui::Color32::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Some(egui::Color32::from_rgba_unmultiplied(
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
            byte(0..2)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Category;
    use crate::panel::{project, SelectionState};

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("18px"), Some(18.0));
        assert_eq!(parse_px(" 948px "), Some(948.0));
        assert_eq!(parse_px("18"), None);
        assert_eq!(parse_px("-4px"), None);
        assert_eq!(parse_px("wide"), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FEAFE8"), Some(egui::Color32::from_rgb(0xFE, 0xAF, 0xE8)));
        assert_eq!(parse_hex_color("000000"), Some(egui::Color32::BLACK));
        assert_eq!(
            parse_hex_color("#FF00FF00"),
            Some(egui::Color32::from_rgb(0x00, 0xFF, 0x00))
        );
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_parse_font_family_only_accepts_catalog() {
        assert_eq!(
            parse_font_family("Ubuntu"),
            Some(egui::FontFamily::Name("Ubuntu".into()))
        );
        assert_eq!(parse_font_family("Comic Sans"), None);
    }

    #[test]
    fn test_apply_default_projection() {
        let mut style = ArticleStyle::default();
        style.apply(&project(&SelectionState::default()));

        assert_eq!(style.font_family, egui::FontFamily::Name("Open Sans".into()));
        assert_eq!(style.font_size, 18.0);
        assert_eq!(style.font_color, egui::Color32::BLACK);
        assert_eq!(style.background, egui::Color32::WHITE);
        assert_eq!(style.content_width, 1394.0);
    }

    #[test]
    fn test_apply_changed_selection() {
        let selection = SelectionState::default()
            .with(Category::FontSize, &Category::FontSize.options()[2])
            .with(Category::BackgroundColor, &Category::BackgroundColor.options()[1])
            .with(Category::ContentWidth, &Category::ContentWidth.options()[1]);

        let mut style = ArticleStyle::default();
        style.apply(&project(&selection));

        assert_eq!(style.font_size, 38.0);
        assert_eq!(style.background, egui::Color32::BLACK);
        assert_eq!(style.content_width, 948.0);
    }

    #[test]
    fn test_every_catalog_value_is_usable() {
        for category in Category::ALL {
            for option in category.options() {
                let mut style = ArticleStyle::default();
                style.font_size = -1.0;
                style.content_width = -1.0;
                style.apply(&project(&SelectionState::default().with(category, option)));
                assert!(style.font_size > 0.0, "{category:?}/{} broke font size", option.title);
                assert!(style.content_width > 0.0);
            }
        }
    }
}
