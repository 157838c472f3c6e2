//! Segmented button groups.
//!
//! Groups own an ordered run of buttons sized by relative width ratios and
//! keep at most one button highlighted. A process-level manager routes
//! commands between groups by name and drains a deferred action queue at
//! the end of every frame.

mod button_group;
mod manager;

pub use button_group::{Button, ButtonConfig, ButtonGroup};
pub use manager::{ButtonManager, UiAction};
