//! Settings panel state machine
//!
//! - **selection**: draft and applied selections
//! - **style**: projection of a selection into style variables
//! - **visibility**: open/closed machine with outside-click dismissal
//! - **controller**: event entry points tying the pieces together

pub mod controller;
pub mod selection;
pub mod style;
pub mod visibility;

pub use controller::{PanelController, SubmitEvent};
pub use selection::SelectionState;
pub use style::{project, StyleMap, StyleSink};
pub use visibility::{ListenerRegistry, Surface};
