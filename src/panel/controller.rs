//! Wiring between the panel controls, the selections and the host styles

use egui::Pos2;
use tracing::info;

use super::selection::{AppliedState, DraftState, SelectionState};
use super::style::{project, StyleSink};
use super::visibility::{ListenerRegistry, PanelVisibility, PointerHub, Surface, Visibility};
use crate::options::{ArticleOption, Category};

/// A submit request coming from the Apply button or the Enter key.
///
/// The host checks [`SubmitEvent::is_default_prevented`] to decide whether the
/// triggering input should be swallowed instead of reaching the article view.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub struct PanelController<S: StyleSink, H: PointerHub = ListenerRegistry> {
    draft: DraftState,
    applied: AppliedState,
    visibility: Visibility<H>,
    sink: S,
}

impl<S: StyleSink, H: PointerHub> PanelController<S, H> {
    /// Mount the panel with the default selection. The sink receives the
    /// default styles immediately so the host never renders unstyled.
    pub fn new(mut sink: S, hub: H) -> Self {
        let applied = AppliedState::new();
        sink.apply(&project(applied.current()));
        Self {
            draft: DraftState::new(),
            applied,
            visibility: Visibility::new(hub),
            sink,
        }
    }

    pub fn draft(&self) -> &SelectionState {
        self.draft.current()
    }

    pub fn applied(&self) -> &SelectionState {
        self.applied.current()
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility.state()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn hub(&self) -> &H {
        self.visibility.hub()
    }

    pub fn on_control_change(&mut self, category: Category, option: &'static ArticleOption) {
        self.draft.update(category, option);
    }

    pub fn on_submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();
        self.applied.commit(*self.draft.current());
        self.apply_styles();
        info!(selection = ?self.applied.current(), "Applied article settings");
        self.visibility.close();
    }

    pub fn on_reset(&mut self) {
        self.draft.reset();
        self.applied.commit(SelectionState::default());
        self.apply_styles();
        info!("Article settings reset to defaults");
        self.visibility.close();
    }

    pub fn on_toggle_handle(&mut self) {
        self.visibility.toggle();
    }

    pub fn on_pointer_down(&mut self, surface: &Surface, target: Option<Pos2>) {
        self.visibility.dismiss_if_outside(surface, target);
    }

    fn apply_styles(&mut self) {
        let styles = project(self.applied.current());
        self.sink.apply(&styles);
    }
}
