//! Native article window hosting the settings panel

mod app;
mod article;
mod components;
mod constants;

pub use app::run_gui;
