//! Group registry and deferred action queue.

use std::collections::{HashMap, VecDeque};

use crate::input::InputState;
use crate::layout::Rect;
use crate::message::MessageLog;
use crate::render::{FrameRenderer, TextMetrics};
use crate::style::ButtonStyle;

use super::button_group::ButtonGroup;

/// A UI command with explicit captured state.
///
/// Button clicks and deferred work are expressed as data instead of opaque
/// closures; an action may itself defer further actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Click a button in a named group, running its actions.
    ClickButton {
        /// Target group name.
        group: String,
        /// Target button name.
        button: String,
    },
    /// Highlight a button in a named group without clicking it.
    SetHighlight {
        /// Target group name.
        group: String,
        /// Target button name.
        button: String,
    },
    /// Append a line to the message log.
    PostMessage(String),
    /// Queue the inner action for the end-of-frame drain.
    Defer(Box<UiAction>),
}

impl UiAction {
    /// Wraps an action for the end-of-frame drain.
    #[must_use]
    pub fn deferred(action: UiAction) -> Self {
        Self::Defer(Box::new(action))
    }
}

/// Name → group registry with cross-group routing and the deferred queue.
///
/// Widget interaction fires actions while the frame is mid-traversal;
/// anything routed through [`defer`](Self::defer) is held until
/// [`process_deferred`](Self::process_deferred) drains the queue after all
/// rendering, so side effects land between widget traversals, never inside
/// one.
#[derive(Default)]
pub struct ButtonManager {
    groups: HashMap<String, ButtonGroup>,
    order: Vec<String>,
    deferred: VecDeque<UiAction>,
}

impl ButtonManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group under its name. A colliding name replaces the
    /// previous group but keeps its render position: last writer wins.
    pub fn add_group(&mut self, group: ButtonGroup) {
        let name = group.name().to_string();
        if self.groups.insert(name.clone(), group).is_none() {
            self.order.push(name);
        }
    }

    /// Returns a registered group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&ButtonGroup> {
        self.groups.get(name)
    }

    /// Returns the number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no groups are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns how many actions are waiting in the deferred queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Clicks a button in a named group, running its actions. Unknown
    /// group or button names change nothing.
    pub fn click_button(&mut self, group: &str, button: &str, log: &mut MessageLog) {
        let Some(target) = self.groups.get_mut(group) else {
            return;
        };
        let fired = target.click(button);
        for action in fired {
            self.apply(action, log);
        }
    }

    /// Highlights a button in a named group. Unknown names change nothing.
    pub fn set_highlight(&mut self, group: &str, button: &str) {
        if let Some(target) = self.groups.get_mut(group) {
            target.set_highlight(button);
        }
    }

    /// Queues an action for the end-of-frame drain.
    pub fn defer(&mut self, action: UiAction) {
        self.deferred.push_back(action);
    }

    /// Drains the deferred queue completely, applying actions in enqueue
    /// order. The loop re-checks the queue each step, so actions deferred
    /// during the drain run within the same call.
    pub fn process_deferred(&mut self, log: &mut MessageLog) {
        while let Some(action) = self.deferred.pop_front() {
            self.apply(action, log);
        }
    }

    /// Executes one action now.
    pub fn apply(&mut self, action: UiAction, log: &mut MessageLog) {
        match action {
            UiAction::ClickButton { group, button } => {
                self.click_button(&group, &button, log);
            }
            UiAction::SetHighlight { group, button } => self.set_highlight(&group, &button),
            UiAction::PostMessage(message) => log.push(message),
            UiAction::Defer(inner) => self.deferred.push_back(*inner),
        }
    }

    /// Renders registered groups in insertion order, one line per group,
    /// stacked downwards inside `bounds`.
    ///
    /// Actions fired by a group's click are applied as soon as that
    /// group's line is done, so a click in one group is visible to groups
    /// rendered later in the same frame.
    pub fn render_all(
        &mut self,
        bounds: Rect,
        input: &InputState,
        style: &ButtonStyle,
        metrics: &dyn TextMetrics,
        out: &mut FrameRenderer,
        log: &mut MessageLog,
    ) {
        let names = self.order.clone();
        let mut y = bounds.y;

        for name in names {
            let Some(group) = self.groups.get_mut(&name) else {
                continue;
            };
            let fired = group.render((bounds.x, y), bounds.width, input, style, metrics, out);
            y += style.height + style.spacing;

            for action in fired {
                self.apply(action, log);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::button_group::ButtonConfig;

    fn two_groups() -> ButtonManager {
        let mut manager = ButtonManager::new();
        manager.add_group(ButtonGroup::new(
            "G1",
            vec![
                ButtonConfig::new("A", 0.5),
                ButtonConfig::new("B", 0.5).with_action(UiAction::SetHighlight {
                    group: "G2".to_string(),
                    button: "Y".to_string(),
                }),
            ],
        ));
        manager.add_group(ButtonGroup::new(
            "G2",
            vec![ButtonConfig::new("X", 0.5), ButtonConfig::new("Y", 0.5)],
        ));
        manager
    }

    #[test]
    fn test_cross_group_routing() {
        let mut manager = two_groups();
        let mut log = MessageLog::new();

        manager.click_button("G1", "B", &mut log);

        assert_eq!(manager.group("G1").unwrap().highlighted(), Some("B"));
        assert_eq!(manager.group("G2").unwrap().highlighted(), Some("Y"));
    }

    #[test]
    fn test_unknown_names_are_silent() {
        let mut manager = two_groups();
        let mut log = MessageLog::new();

        manager.click_button("nope", "A", &mut log);
        manager.click_button("G1", "nope", &mut log);
        manager.set_highlight("nope", "A");

        assert_eq!(manager.group("G1").unwrap().highlighted(), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_collision_keeps_render_order() {
        let mut manager = two_groups();

        manager.add_group(ButtonGroup::new(
            "G1",
            vec![ButtonConfig::new("Z", 1.0)],
        ));

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.order, ["G1", "G2"]);
        assert_eq!(manager.group("G1").unwrap().buttons().len(), 1);
    }

    #[test]
    fn test_deferred_fifo_order() {
        let mut manager = ButtonManager::new();
        let mut log = MessageLog::new();

        manager.defer(UiAction::PostMessage("first".to_string()));
        manager.defer(UiAction::PostMessage("second".to_string()));
        assert_eq!(manager.pending(), 2);

        manager.process_deferred(&mut log);

        assert_eq!(log.messages(), ["first", "second"]);
        assert_eq!(manager.pending(), 0);
    }

    #[test]
    fn test_chained_defer_drains_in_same_pass() {
        let mut manager = ButtonManager::new();
        let mut log = MessageLog::new();

        manager.defer(UiAction::deferred(UiAction::deferred(
            UiAction::PostMessage("innermost".to_string()),
        )));
        manager.defer(UiAction::PostMessage("plain".to_string()));

        manager.process_deferred(&mut log);

        // Two re-queues resolve inside the one drain call.
        assert_eq!(log.messages(), ["plain", "innermost"]);
        assert_eq!(manager.pending(), 0);
    }

    #[test]
    fn test_click_action_runs_target_buttons_actions() {
        let mut manager = ButtonManager::new();
        let mut log = MessageLog::new();

        manager.add_group(ButtonGroup::new(
            "G1",
            vec![ButtonConfig::new("go", 1.0).with_action(UiAction::ClickButton {
                group: "G2".to_string(),
                button: "talk".to_string(),
            })],
        ));
        manager.add_group(ButtonGroup::new(
            "G2",
            vec![ButtonConfig::new("talk", 1.0)
                .with_action(UiAction::PostMessage("relayed".to_string()))],
        ));

        manager.click_button("G1", "go", &mut log);

        assert_eq!(manager.group("G2").unwrap().highlighted(), Some("talk"));
        assert_eq!(log.messages(), ["relayed"]);
    }
}
