//! Append-only diagnostic message log.

use crate::layout::Rect;
use crate::render::{FrameRenderer, RenderCommand, TextMetrics};
use crate::style::LogStyle;

/// Diagnostic lines accumulated across frames and drawn in a clipped panel.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "message logged");
        self.messages.push(message);
    }

    /// Removes all lines.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the accumulated lines, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the log holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Draws the log as stacked text lines clipped to `bounds`.
    pub fn render(
        &self,
        bounds: Rect,
        style: &LogStyle,
        metrics: &dyn TextMetrics,
        out: &mut FrameRenderer,
    ) {
        out.push_clip(bounds);

        let inner = bounds.shrink(style.padding);
        let line = metrics.line_height(style.font_size);
        for (index, message) in self.messages.iter().enumerate() {
            out.push(RenderCommand::Text {
                text: message.clone(),
                x: inner.x,
                y: inner.y + index as f32 * line,
                color: style.text,
                font_size: style.font_size,
            });
        }

        out.pop_clip();
    }
}
