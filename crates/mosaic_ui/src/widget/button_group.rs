//! Proportional segmented button groups.

use crate::input::{InputState, MouseButton};
use crate::layout::Rect;
use crate::render::{FrameRenderer, RenderCommand, TextMetrics};
use crate::style::ButtonStyle;

use super::manager::UiAction;

/// One button inside a group.
#[derive(Debug, Clone)]
pub struct Button {
    /// Display name, unique within the group.
    pub name: String,
    /// Relative share of the group's width.
    pub width_ratio: f32,
    /// Actions run when the button is clicked, after the highlight change.
    pub actions: Vec<UiAction>,
    /// Mutual-exclusion highlight; at most one per group.
    pub highlighted: bool,
}

/// Construction record for one button.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    /// Display name.
    pub name: String,
    /// Relative share of the group's width; must be positive.
    pub width_ratio: f32,
    /// Actions run on click.
    pub actions: Vec<UiAction>,
}

impl ButtonConfig {
    /// Creates a config with no actions.
    #[must_use]
    pub fn new(name: impl Into<String>, width_ratio: f32) -> Self {
        Self {
            name: name.into(),
            width_ratio,
            actions: Vec::new(),
        }
    }

    /// Appends one click action.
    #[must_use]
    pub fn with_action(mut self, action: UiAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// An ordered run of proportionally sized buttons on one line.
pub struct ButtonGroup {
    name: String,
    buttons: Vec<Button>,
}

impl ButtonGroup {
    /// Creates a group from ordered button configs. No button starts
    /// highlighted; the initial highlight, if any, is applied afterwards.
    #[must_use]
    pub fn new(name: impl Into<String>, configs: Vec<ButtonConfig>) -> Self {
        let buttons = configs
            .into_iter()
            .map(|config| Button {
                name: config.name,
                width_ratio: config.width_ratio,
                actions: config.actions,
                highlighted: false,
            })
            .collect();
        Self {
            name: name.into(),
            buttons,
        }
    }

    /// Returns the group's registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the buttons in layout order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Returns the name of the highlighted button, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.highlighted)
            .map(|button| button.name.as_str())
    }

    /// Computes pixel widths for the given post-spacing available width.
    ///
    /// Every button except the last gets its ratio share floored to whole
    /// pixels; the last absorbs the exact remainder, so the widths always
    /// sum to `available_width` regardless of flooring error.
    #[must_use]
    pub fn widths(&self, available_width: f32) -> Vec<f32> {
        let count = self.buttons.len();
        if count == 0 {
            return Vec::new();
        }

        let total_ratio: f32 = self.buttons.iter().map(|button| button.width_ratio).sum();

        let mut widths = Vec::with_capacity(count);
        let mut used = 0.0;
        for button in &self.buttons[..count - 1] {
            let width = ((button.width_ratio / total_ratio) * available_width).floor();
            used += width;
            widths.push(width);
        }
        widths.push(available_width - used);
        widths
    }

    /// Highlights the named button, clearing all others. A name with no
    /// match leaves every button unhighlighted.
    pub fn set_highlight(&mut self, button: &str) {
        for b in &mut self.buttons {
            b.highlighted = b.name == button;
        }
    }

    /// Clicks the named button: clears highlights, sets the match, and
    /// returns its actions for the caller to run. An unknown name changes
    /// nothing and returns no actions.
    #[must_use]
    pub fn click(&mut self, button: &str) -> Vec<UiAction> {
        let Some(index) = self.buttons.iter().position(|b| b.name == button) else {
            return Vec::new();
        };
        self.click_index(index)
    }

    fn click_index(&mut self, index: usize) -> Vec<UiAction> {
        for b in &mut self.buttons {
            b.highlighted = false;
        }
        self.buttons[index].highlighted = true;
        tracing::debug!(
            group = %self.name,
            button = %self.buttons[index].name,
            "button clicked"
        );
        self.buttons[index].actions.clone()
    }

    /// Renders the group on one line and handles this frame's hit state.
    ///
    /// Returns the actions fired by a click, to be applied by the caller
    /// once this group's traversal is done. The highlight change itself
    /// happens here, before any action runs.
    pub fn render(
        &mut self,
        origin: (f32, f32),
        total_width: f32,
        input: &InputState,
        style: &ButtonStyle,
        metrics: &dyn TextMetrics,
        out: &mut FrameRenderer,
    ) -> Vec<UiAction> {
        let count = self.buttons.len();
        if count == 0 {
            return Vec::new();
        }

        let usable = total_width - style.scrollbar_reserve;
        let available = usable - style.spacing * (count - 1) as f32;
        let widths = self.widths(available);

        let mut fired = Vec::new();
        let (mut x, y) = origin;

        for (index, width) in widths.iter().copied().enumerate() {
            let rect = Rect::new(x, y, width, style.height);
            let hovered = rect.contains(input.mouse_x, input.mouse_y);

            out.push(RenderCommand::Rect {
                bounds: rect,
                color: style.fill(self.buttons[index].highlighted, hovered),
                corner_radius: style.corner_radius,
            });

            let (text_w, _) = metrics.measure(&self.buttons[index].name, style.font_size);
            let line = metrics.line_height(style.font_size);
            out.push(RenderCommand::Text {
                text: self.buttons[index].name.clone(),
                x: rect.x + (width - text_w) * 0.5,
                y: rect.y + (style.height - line) * 0.5,
                color: style.label,
                font_size: style.font_size,
            });

            if hovered && input.mouse_clicked(MouseButton::Left) {
                fired.extend(self.click_index(index));
            }

            x += width + style.spacing;
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MonospaceMetrics;

    fn group(ratios: &[f32]) -> ButtonGroup {
        let configs = ratios
            .iter()
            .enumerate()
            .map(|(i, r)| ButtonConfig::new(format!("B{i}"), *r))
            .collect();
        ButtonGroup::new("G", configs)
    }

    #[test]
    fn test_widths_floor_all_but_last() {
        let g = group(&[0.3, 0.5, 0.2]);
        assert_eq!(g.widths(1000.0), [300.0, 500.0, 200.0]);

        let g = group(&[0.3, 0.3, 0.4]);
        assert_eq!(g.widths(100.0), [30.0, 30.0, 40.0]);
    }

    #[test]
    fn test_widths_sum_exactly() {
        let cases: &[(&[f32], f32)] = &[
            (&[0.1, 0.7, 0.2], 997.0),
            (&[1.0, 1.0, 1.0], 100.0),
            (&[0.33, 0.33, 0.34], 640.0),
            (&[2.5, 1.5], 333.0),
            (&[1.0], 57.0),
        ];

        for (ratios, available) in cases {
            let g = group(ratios);
            let widths = g.widths(*available);
            let sum: f32 = widths.iter().sum();
            assert!(
                (sum - available).abs() < f32::EPSILON * available,
                "ratios {ratios:?}: {sum} != {available}"
            );
        }
    }

    #[test]
    fn test_single_highlight_invariant() {
        let mut g = group(&[0.5, 0.5]);

        g.set_highlight("B0");
        assert_eq!(g.highlighted(), Some("B0"));

        g.set_highlight("B1");
        assert_eq!(g.highlighted(), Some("B1"));
        assert_eq!(g.buttons().iter().filter(|b| b.highlighted).count(), 1);

        let _ = g.click("B0");
        assert_eq!(g.highlighted(), Some("B0"));
        assert_eq!(g.buttons().iter().filter(|b| b.highlighted).count(), 1);
    }

    #[test]
    fn test_set_highlight_unknown_clears_all() {
        let mut g = group(&[0.5, 0.5]);
        g.set_highlight("B0");

        g.set_highlight("nope");
        assert_eq!(g.highlighted(), None);
    }

    #[test]
    fn test_click_unknown_is_a_no_op() {
        let mut g = group(&[0.5, 0.5]);
        g.set_highlight("B1");

        let fired = g.click("nope");
        assert!(fired.is_empty());
        assert_eq!(g.highlighted(), Some("B1"));
    }

    #[test]
    fn test_click_returns_actions_after_highlight() {
        let mut g = ButtonGroup::new(
            "G",
            vec![ButtonConfig::new("B0", 1.0)
                .with_action(UiAction::PostMessage("hit".to_string()))],
        );

        let fired = g.click("B0");
        assert_eq!(g.highlighted(), Some("B0"));
        assert_eq!(fired, [UiAction::PostMessage("hit".to_string())]);
    }

    #[test]
    fn test_render_click_hits_correct_segment() {
        let mut g = group(&[0.3, 0.5, 0.2]);
        let style = ButtonStyle {
            spacing: 0.0,
            scrollbar_reserve: 0.0,
            ..ButtonStyle::LIGHT
        };

        // Widths are 300/500/200; x = 350 falls in the second segment.
        let mut input = InputState::new();
        input.set_mouse_pos(350.0, 20.0);
        input.mouse_button_down(MouseButton::Left);

        let mut renderer = FrameRenderer::new();
        renderer.begin_frame();
        let fired = g.render(
            (0.0, 0.0),
            1000.0,
            &input,
            &style,
            &MonospaceMetrics::new(),
            &mut renderer,
        );

        assert!(fired.is_empty());
        assert_eq!(g.highlighted(), Some("B1"));
        // One fill and one label per button.
        assert_eq!(renderer.command_count(), 6);
    }
}
