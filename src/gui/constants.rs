//! GUI-specific constants for layout and colors

use egui;

/// Window limits
pub const WINDOW_MIN_WIDTH: f32 = 800.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Settings panel
pub const PANEL_WIDTH: f32 = 616.0;
pub const PANEL_PADDING: f32 = 24.0;
pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub const PANEL_TEXT: egui::Color32 = egui::Color32::from_rgb(0x00, 0x00, 0x00);

/// Toggle arrow
pub const ARROW_SIZE: f32 = 48.0;
pub const ARROW_MARGIN: f32 = 16.0;
pub const ARROW_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub const ARROW_FILL_OPEN: egui::Color32 = egui::Color32::from_rgb(0xFE, 0xAF, 0xE8);

/// Layout spacing
pub const SECTION_SPACING: f32 = 24.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Article
pub const ARTICLE_PADDING: f32 = 40.0;
pub const HEADING_SCALE: f32 = 2.0;
