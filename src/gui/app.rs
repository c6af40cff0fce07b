//! Article window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, info};

use super::article::{self, ArticleStyle};
use super::components::{ArrowButton, OptionControl, OptionProps, RadioGroup, Select};
use super::constants::*;
use crate::config::Config;
use crate::options::{ArticleOption, Category};
use crate::panel::{ListenerRegistry, PanelController, SubmitEvent, Surface};

/// Everything the user did during one frame, dispatched after drawing
#[derive(Default)]
struct FrameActions {
    changes: Vec<(Category, &'static ArticleOption)>,
    popups: Vec<egui::Rect>,
    submit: bool,
    reset: bool,
    toggle: bool,
}

struct ArticleApp {
    controller: PanelController<ArticleStyle, ListenerRegistry>,
}

impl ArticleApp {
    fn new(cc: &CreationContext<'_>, config: &Config) -> Self {
        info!("Initializing article window");
        article::install_fonts(&cc.egui_ctx, &config.font_files);
        Self {
            controller: PanelController::new(ArticleStyle::default(), ListenerRegistry::new()),
        }
    }

    fn panel_ui(&self, ui: &mut egui::Ui, actions: &mut FrameActions) {
        let draft = self.controller.draft();

        ui.add_space(SECTION_SPACING);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("SET OPTIONS").strong().color(PANEL_TEXT));
        });
        ui.add_space(SECTION_SPACING);

        for category in Category::ALL {
            if category == Category::BackgroundColor {
                ui.separator();
                ui.add_space(ITEM_SPACING);
            }

            let props = OptionProps::for_category(category, draft);
            let mut on_change =
                |option: &'static ArticleOption| actions.changes.push((category, option));
            let popup = match category {
                Category::FontSize => RadioGroup(props).show(ui, &mut on_change),
                _ => Select(props).show(ui, &mut on_change),
            };
            if let Some(rect) = popup {
                actions.popups.push(rect);
            }
            ui.add_space(SECTION_SPACING);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    actions.submit = true;
                }
                if ui.button("Reset").clicked() {
                    actions.reset = true;
                }
            });
        });
    }

    /// Apply one frame's input in a fixed order: control changes, reset or
    /// submit, toggle, then outside-click dismissal.
    fn dispatch(
        &mut self,
        actions: FrameActions,
        surface: &Surface,
        enter: bool,
        press: Option<Option<egui::Pos2>>,
    ) {
        for (category, option) in actions.changes {
            self.controller.on_control_change(category, option);
        }

        if actions.reset {
            self.controller.on_reset();
        } else if actions.submit || enter {
            let mut event = SubmitEvent::new();
            self.controller.on_submit(&mut event);
            debug!(enter, prevented = event.is_default_prevented(), "Submit dispatched");
        }

        if actions.toggle {
            self.controller.on_toggle_handle();
        }

        if let Some(target) = press
            && self.controller.hub().is_listening()
        {
            self.controller.on_pointer_down(surface, target);
        }
    }
}

impl eframe::App for ArticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let press = ctx.input(|i| i.pointer.any_pressed().then(|| i.pointer.interact_pos()));
        // Swallowed before drawing so no widget in the panel sees it
        let enter = self.controller.is_open()
            && ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

        let mut actions = FrameActions::default();
        let mut surface = Surface::new();

        let panel = egui::SidePanel::left("article_params")
            .resizable(false)
            .exact_width(PANEL_WIDTH)
            .frame(egui::Frame::new().fill(PANEL_BACKGROUND).inner_margin(PANEL_PADDING))
            .show_animated(ctx, self.controller.is_open(), |ui| self.panel_ui(ui, &mut actions));
        let panel_edge = match &panel {
            Some(inner) => {
                surface.push(inner.response.rect);
                inner.response.rect.max.x
            }
            None => 0.0,
        };
        for rect in &actions.popups {
            surface.push(*rect);
        }

        let is_open = self.controller.is_open();
        let arrow = egui::Area::new(egui::Id::new("article_params_toggle"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(panel_edge + ARROW_MARGIN, ARROW_MARGIN))
            .show(ctx, |ui| ArrowButton { is_open }.show(ui, || actions.toggle = true));
        surface.push(arrow.response.rect);

        self.dispatch(actions, &surface, enter, press);

        article::show(ctx, self.controller.sink());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            applied = ?self.controller.applied(),
            visibility = ?self.controller.visibility(),
            "Article window exiting"
        );
    }
}

pub fn run_gui(config: Config) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Article Params"),
        ..Default::default()
    };

    eframe::run_native(
        "Article Params",
        options,
        Box::new(move |cc| Ok(Box::new(ArticleApp::new(cc, &config)))),
    )
    .map_err(|err| anyhow!("Failed to launch article window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::SelectionState;

    fn app() -> ArticleApp {
        ArticleApp {
            controller: PanelController::new(ArticleStyle::default(), ListenerRegistry::new()),
        }
    }

    fn panel_surface() -> Surface {
        let mut surface = Surface::new();
        let panel = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(PANEL_WIDTH, 800.0));
        surface.push(panel);
        surface
    }

    fn toggle() -> FrameActions {
        FrameActions {
            toggle: true,
            ..Default::default()
        }
    }

    const OUTSIDE: egui::Pos2 = egui::pos2(PANEL_WIDTH + 300.0, 400.0);

    #[test]
    fn test_toggle_and_outside_press_in_one_frame() {
        let mut app = app();
        app.dispatch(toggle(), &panel_surface(), false, Some(Some(OUTSIDE)));

        assert!(!app.controller.is_open());
        assert_eq!(app.controller.hub().active_count(), 0);
    }

    #[test]
    fn test_reset_wins_over_submit_in_one_frame() {
        let mut app = app();
        let surface = panel_surface();
        app.dispatch(toggle(), &surface, false, None);

        let narrow = &Category::ContentWidth.options()[1];
        let actions = FrameActions {
            changes: vec![(Category::ContentWidth, narrow)],
            submit: true,
            reset: true,
            ..Default::default()
        };
        app.dispatch(actions, &surface, false, None);

        assert_eq!(*app.controller.applied(), SelectionState::default());
        assert_eq!(*app.controller.draft(), SelectionState::default());
        assert_eq!(app.controller.sink().content_width, 1394.0);
        assert!(!app.controller.is_open());
        assert_eq!(app.controller.hub().active_count(), 0);
    }

    #[test]
    fn test_inside_press_keeps_panel_open() {
        let mut app = app();
        let mut surface = panel_surface();
        let arrow = egui::Rect::from_min_size(
            egui::pos2(PANEL_WIDTH + ARROW_MARGIN, ARROW_MARGIN),
            egui::vec2(ARROW_SIZE, ARROW_SIZE),
        );
        surface.push(arrow);
        app.dispatch(toggle(), &surface, false, None);

        let inside = egui::pos2(50.0, 50.0);
        app.dispatch(FrameActions::default(), &surface, false, Some(Some(inside)));
        assert!(app.controller.is_open());

        app.dispatch(FrameActions::default(), &surface, false, Some(Some(arrow.center())));
        assert!(app.controller.is_open());
        assert_eq!(app.controller.hub().active_count(), 1);
    }

    #[test]
    fn test_press_while_closed_is_ignored() {
        let mut app = app();
        app.dispatch(FrameActions::default(), &panel_surface(), false, Some(Some(OUTSIDE)));
        app.dispatch(FrameActions::default(), &panel_surface(), false, Some(None));

        assert!(!app.controller.is_open());
        assert_eq!(app.controller.hub().active_count(), 0);
    }

    #[test]
    fn test_enter_submits_draft_and_closes() {
        let mut app = app();
        let surface = panel_surface();
        app.dispatch(toggle(), &surface, false, None);

        let large = &Category::FontSize.options()[2];
        let actions = FrameActions {
            changes: vec![(Category::FontSize, large)],
            ..Default::default()
        };
        app.dispatch(actions, &surface, true, None);

        assert_eq!(app.controller.applied().font_size, large);
        assert_eq!(app.controller.sink().font_size, 38.0);
        assert!(!app.controller.is_open());
    }
}
