//! Open/closed state for the sliding panel and outside-click dismissal
//!
//! While the panel is open it holds exactly one pointer listener taken from a
//! [`PointerHub`]. The listener is released on every transition back to
//! closed and when the machine is dropped.

use egui::{Pos2, Rect};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Window-wide pointer listener registration
pub trait PointerHub {
    fn subscribe(&mut self) -> ListenerId;
    fn unsubscribe(&mut self, id: ListenerId);
}

/// In-process listener registry polled by the frame loop
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    active: Vec<ListenerId>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_listening(&self) -> bool {
        self.active_count() > 0
    }
}

impl PointerHub for ListenerRegistry {
    fn subscribe(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push(id);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.active.retain(|active| *active != id);
    }
}

/// Screen regions that count as "inside" the panel
#[derive(Debug, Clone, Default)]
pub struct Surface {
    rects: Vec<Rect>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rects.iter().any(|rect| rect.contains(pos))
    }
}

pub struct Visibility<H: PointerHub> {
    state: PanelVisibility,
    hub: H,
    listener: Option<ListenerId>,
}

impl<H: PointerHub> Visibility<H> {
    pub fn new(hub: H) -> Self {
        Self {
            state: PanelVisibility::Closed,
            hub,
            listener: None,
        }
    }

    pub fn state(&self) -> PanelVisibility {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelVisibility::Open
    }

    pub fn hub(&self) -> &H {
        &self.hub
    }

    pub fn toggle(&mut self) {
        match self.state {
            PanelVisibility::Closed => self.open(),
            PanelVisibility::Open => self.close(),
        }
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.state = PanelVisibility::Open;
        if self.listener.is_none() {
            self.listener = Some(self.hub.subscribe());
        }
        info!("Settings panel opened");
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = PanelVisibility::Closed;
        self.release_listener();
        info!("Settings panel closed");
    }

    /// Close if `target` falls outside `surface`. A `None` target means the
    /// pointer has left the window and is treated as outside.
    pub fn dismiss_if_outside(&mut self, surface: &Surface, target: Option<Pos2>) {
        if !self.is_open() {
            return;
        }
        let inside = target.is_some_and(|pos| surface.contains(pos));
        if !inside {
            debug!(?target, "Pointer pressed outside settings panel");
            self.close();
        }
    }

    fn release_listener(&mut self) {
        if let Some(id) = self.listener.take() {
            self.hub.unsubscribe(id);
        }
    }
}

impl<H: PointerHub> Drop for Visibility<H> {
    fn drop(&mut self) {
        self.release_listener();
    }
}
