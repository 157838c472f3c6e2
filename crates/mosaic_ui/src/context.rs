//! Frame controller.
//!
//! One [`UiContext`] owns every piece of UI state for the application
//! lifetime: the region manager, the button registry and its deferred
//! queue, the message log, the theme, and the frame's command collector.
//! The host calls [`UiContext::frame`] once per tick and replays the
//! returned commands.

use crate::input::InputState;
use crate::layout::Rect;
use crate::message::MessageLog;
use crate::region::{RegionConfig, RegionManager};
use crate::render::{FrameRenderer, MonospaceMetrics, RenderCommand, TextMetrics};
use crate::style::Theme;
use crate::widget::{ButtonGroup, ButtonManager, UiAction};

/// Explicit context object holding all UI state on the render thread.
pub struct UiContext {
    regions: RegionManager,
    buttons: ButtonManager,
    messages: MessageLog,
    renderer: FrameRenderer,
    theme: Theme,
    metrics: Box<dyn TextMetrics>,
}

impl UiContext {
    /// Creates a context from a region layout description, with the light
    /// theme and the bundled monospace text estimator.
    #[must_use]
    pub fn new(config: RegionConfig) -> Self {
        Self {
            regions: RegionManager::new(config),
            buttons: ButtonManager::new(),
            messages: MessageLog::new(),
            renderer: FrameRenderer::new(),
            theme: Theme::LIGHT,
            metrics: Box::new(MonospaceMetrics::new()),
        }
    }

    /// Replaces the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replaces the text measurement implementation, normally with one
    /// backed by the host's real font data.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Box<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Returns the region manager.
    #[must_use]
    pub fn regions(&self) -> &RegionManager {
        &self.regions
    }

    /// Returns mutable access to the region manager.
    pub fn regions_mut(&mut self) -> &mut RegionManager {
        &mut self.regions
    }

    /// Returns the button manager.
    #[must_use]
    pub fn buttons(&self) -> &ButtonManager {
        &self.buttons
    }

    /// Returns the message log.
    #[must_use]
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Returns the active theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Registers a button group.
    pub fn add_group(&mut self, group: ButtonGroup) {
        self.buttons.add_group(group);
    }

    /// Clicks a button in a named group; silent no-op on unknown names.
    pub fn click_button(&mut self, group: &str, button: &str) {
        self.buttons.click_button(group, button, &mut self.messages);
    }

    /// Highlights a button in a named group; silent no-op on unknown names.
    pub fn set_highlight(&mut self, group: &str, button: &str) {
        self.buttons.set_highlight(group, button);
    }

    /// Queues an action for the end-of-frame drain.
    pub fn defer(&mut self, action: UiAction) {
        self.buttons.defer(action);
    }

    /// Drains the deferred queue outside the normal frame flow.
    pub fn process_deferred(&mut self) {
        self.buttons.process_deferred(&mut self.messages);
    }

    /// Appends a line to the message log.
    pub fn post_message(&mut self, message: impl Into<String>) {
        self.messages.push(message);
    }

    /// Rebuilds the region tree from its stored description, discarding
    /// all runtime region state.
    pub fn reload_config(&mut self) {
        self.regions.reload();
    }

    /// Runs one frame and returns its command list.
    ///
    /// Order inside the frame: background, region layout + draw, button
    /// group lines, deferred drain, message log. The log therefore shows
    /// this frame's deferred effects in this frame's commands.
    pub fn frame(&mut self, bounds: Rect, input: &InputState) -> &[RenderCommand] {
        self.renderer.begin_frame();
        self.renderer.push(RenderCommand::Rect {
            bounds,
            color: self.theme.background,
            corner_radius: 0.0,
        });

        let line = self.theme.buttons.height + self.theme.buttons.spacing;
        let buttons_height = self.buttons.len() as f32 * line;
        let log_height = self.theme.log.panel_height;
        let region_height = (bounds.height - buttons_height - log_height).max(0.0);

        let region_area = Rect::new(bounds.x, bounds.y, bounds.width, region_height);
        let buttons_area = Rect::new(
            bounds.x,
            bounds.y + region_height,
            bounds.width,
            buttons_height,
        );
        let log_area = Rect::new(
            bounds.x,
            bounds.y + region_height + buttons_height,
            bounds.width,
            log_height,
        );

        self.regions.draw(
            region_area,
            input,
            &self.theme.regions,
            self.metrics.as_ref(),
            &mut self.renderer,
        );
        self.buttons.render_all(
            buttons_area,
            input,
            &self.theme.buttons,
            self.metrics.as_ref(),
            &mut self.renderer,
            &mut self.messages,
        );
        self.buttons.process_deferred(&mut self.messages);
        self.messages.render(
            log_area,
            &self.theme.log,
            self.metrics.as_ref(),
            &mut self.renderer,
        );

        self.renderer.end_frame()
    }
}
