//! Application-wide constants

/// Config file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "article-params";

    /// Config file name
    pub const FILENAME: &str = "config.json";
}

/// Style variable names emitted for the article scope
pub mod style_vars {
    pub const FONT_FAMILY: &str = "--font-family";
    pub const FONT_SIZE: &str = "--font-size";
    pub const FONT_COLOR: &str = "--font-color";
    pub const BACKGROUND_COLOR: &str = "--bg-color";
    pub const CONTENT_WIDTH: &str = "--container-width";
}

/// Environment variables
pub mod env {
    /// Log level override (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
