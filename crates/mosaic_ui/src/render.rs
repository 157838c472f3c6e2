//! Render command emission.
//!
//! The core never draws. Each frame it fills a flat command list that the
//! host replays against whatever backend it owns.

use crate::layout::Rect;
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Text run.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
    /// Scissor rect (clip following commands).
    PushClip {
        /// Clip bounds.
        bounds: Rect,
    },
    /// Pop scissor rect.
    PopClip,
}

/// Text measurement contract the host may satisfy with real font data.
///
/// Label fitting only needs a size estimate that scales linearly with font
/// size; the bundled [`MonospaceMetrics`] is good enough for headless runs
/// and tests.
pub trait TextMetrics {
    /// Returns the (width, height) of a single line of text.
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32);

    /// Returns the vertical advance between lines.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Fixed-pitch text size estimator.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Glyph advance as a fraction of font size.
    pub char_aspect: f32,
    /// Line height as a fraction of font size.
    pub line_spacing: f32,
}

impl MonospaceMetrics {
    /// Creates the estimator with standard terminal proportions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            char_aspect: 0.6,
            line_spacing: 1.25,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32) {
        let chars = text.chars().count() as f32;
        (chars * font_size * self.char_aspect, self.line_height(font_size))
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_spacing
    }
}

/// Per-frame command collector with a clip stack.
pub struct FrameRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Clip stack.
    clip_stack: Vec<Rect>,
}

impl FrameRenderer {
    /// Creates a new frame renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip_stack: Vec::with_capacity(8),
        }
    }

    /// Begins a new frame, discarding the previous command list.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Pushes a clip rect, intersected with the current clip if any.
    pub fn push_clip(&mut self, bounds: Rect) {
        let actual_clip = if let Some(current) = self.clip_stack.last() {
            current.intersection(&bounds).unwrap_or(Rect::ZERO)
        } else {
            bounds
        };

        self.clip_stack.push(actual_clip);
        self.commands.push(RenderCommand::PushClip { bounds: actual_clip });
    }

    /// Pops the current clip rect.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(RenderCommand::PopClip);
    }

    /// Returns the current clip rect.
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Ends the frame and returns the command list for the host to replay.
    #[must_use]
    pub fn end_frame(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
