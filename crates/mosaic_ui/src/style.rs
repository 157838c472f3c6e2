//! Styling for regions, buttons, and the message log.
//!
//! The reference palette is a light theme: near-white panels, a warm
//! focus orange, pale blue hover on buttons, pale yellow highlight.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Scales the RGB channels, leaving alpha untouched.
    #[must_use]
    pub const fn scale_rgb(self, r: f32, g: f32, b: f32) -> Self {
        Self::rgba(self.r * r, self.g * g, self.b * b, self.a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Style for the region panels.
#[derive(Debug, Clone)]
pub struct RegionStyle {
    /// Fill when the region is neither hovered nor focused.
    pub fill: Color,
    /// Fill while the mouse is over a leaf.
    pub fill_hovered: Color,
    /// Fill while the region holds focus.
    pub fill_focused: Color,
    /// Border color.
    pub border: Color,
    /// Border stroke width.
    pub border_width: f32,
    /// Label text color.
    pub label: Color,
    /// Label font size before down-scaling.
    pub font_size: f32,
    /// Margin the label must clear on each axis before it is scaled down.
    pub label_inset: f32,
    /// Minimum content width the layout pass will accept.
    pub min_width: f32,
    /// Minimum content height the layout pass will accept.
    pub min_height: f32,
}

impl RegionStyle {
    /// Light panel styling.
    pub const LIGHT: Self = Self {
        fill: Color::rgb(0.92, 0.92, 0.92),
        fill_hovered: Color::rgb(0.95, 0.95, 0.95),
        fill_focused: Color::rgb(1.0, 0.7, 0.4),
        border: Color::rgb(0.7, 0.7, 0.7),
        border_width: 1.5,
        label: Color::rgb(0.1, 0.1, 0.1),
        font_size: 14.0,
        label_inset: 10.0,
        min_width: 400.0,
        min_height: 300.0,
    };

    /// Dark panel styling.
    pub const DARK: Self = Self {
        fill: Color::rgb(0.13, 0.13, 0.16),
        fill_hovered: Color::rgb(0.18, 0.18, 0.22),
        fill_focused: Color::rgb(0.8, 0.5, 0.2),
        border: Color::rgb(0.35, 0.35, 0.4),
        border_width: 1.5,
        label: Color::rgb(0.9, 0.9, 0.9),
        font_size: 14.0,
        label_inset: 10.0,
        min_width: 400.0,
        min_height: 300.0,
    };
}

/// Style for segmented button groups.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Button color when idle.
    pub normal: Color,
    /// Button color while hovered and not highlighted.
    pub hover: Color,
    /// Button color while highlighted.
    pub highlight: Color,
    /// Label text color.
    pub label: Color,
    /// Label font size.
    pub font_size: f32,
    /// Button row height.
    pub height: f32,
    /// Gap between buttons on a line, and between group lines.
    pub spacing: f32,
    /// Horizontal space reserved for a host scrollbar.
    pub scrollbar_reserve: f32,
    /// Corner radius.
    pub corner_radius: f32,
}

impl ButtonStyle {
    /// Light button styling.
    pub const LIGHT: Self = Self {
        normal: Color::WHITE,
        hover: Color::rgb(0.75, 0.75, 1.0),
        highlight: Color::rgb(1.0, 1.0, 0.6),
        label: Color::rgb(0.1, 0.1, 0.1),
        font_size: 14.0,
        height: 40.0,
        spacing: 8.0,
        scrollbar_reserve: 14.0,
        corner_radius: 0.0,
    };

    /// Dark button styling.
    pub const DARK: Self = Self {
        normal: Color::rgb(0.2, 0.2, 0.24),
        hover: Color::rgb(0.3, 0.3, 0.45),
        highlight: Color::rgb(0.55, 0.5, 0.2),
        label: Color::rgb(0.9, 0.9, 0.9),
        font_size: 14.0,
        height: 40.0,
        spacing: 8.0,
        scrollbar_reserve: 14.0,
        corner_radius: 0.0,
    };

    /// Resolves the fill color for one button from its interaction state.
    ///
    /// Hover shifts whichever color currently applies: the highlight color
    /// is dimmed in place, the idle color swaps to the hover color.
    #[must_use]
    pub fn fill(&self, highlighted: bool, hovered: bool) -> Color {
        match (highlighted, hovered) {
            (true, true) => self.highlight.scale_rgb(0.9, 0.9, 0.8),
            (true, false) => self.highlight,
            (false, true) => self.hover,
            (false, false) => self.normal,
        }
    }
}

/// Style for the message log panel.
#[derive(Debug, Clone)]
pub struct LogStyle {
    /// Text color.
    pub text: Color,
    /// Font size.
    pub font_size: f32,
    /// Inner padding.
    pub padding: f32,
    /// Height reserved for the log panel inside the frame.
    pub panel_height: f32,
}

impl LogStyle {
    /// Light log styling.
    pub const LIGHT: Self = Self {
        text: Color::rgb(0.1, 0.1, 0.1),
        font_size: 13.0,
        padding: 6.0,
        panel_height: 120.0,
    };

    /// Dark log styling.
    pub const DARK: Self = Self {
        text: Color::rgb(0.85, 0.85, 0.85),
        font_size: 13.0,
        padding: 6.0,
        panel_height: 120.0,
    };
}

/// Complete theme for the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background fill.
    pub background: Color,
    /// Region panel styling.
    pub regions: RegionStyle,
    /// Button group styling.
    pub buttons: ButtonStyle,
    /// Message log styling.
    pub log: LogStyle,
}

impl Theme {
    /// Light theme, the reference palette.
    pub const LIGHT: Self = Self {
        background: Color::rgb(0.45, 0.55, 0.6),
        regions: RegionStyle::LIGHT,
        buttons: ButtonStyle::LIGHT,
        log: LogStyle::LIGHT,
    };

    /// Dark theme.
    pub const DARK: Self = Self {
        background: Color::rgb(0.06, 0.06, 0.08),
        regions: RegionStyle::DARK,
        buttons: ButtonStyle::DARK,
        log: LogStyle::DARK,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let black = Color::BLACK;
        let white = Color::WHITE;
        let mid = black.lerp(white, 0.5);

        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF0000FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_button_fill_states() {
        let style = ButtonStyle::LIGHT;

        assert_eq!(style.fill(false, false), style.normal);
        assert_eq!(style.fill(false, true), style.hover);
        assert_eq!(style.fill(true, false), style.highlight);

        // Hovering a highlighted button dims it rather than swapping color.
        let dimmed = style.fill(true, true);
        assert!(dimmed.r < style.highlight.r);
        assert!(dimmed.b < style.highlight.b);
    }
}
