//! Input handling for the UI core.
//!
//! The host marshals device events into an [`InputState`] snapshot before
//! each frame; the core only ever reads the snapshot.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current mouse X position.
    pub mouse_x: f32,
    /// Current mouse Y position.
    pub mouse_y: f32,
    /// Mouse X position last frame.
    pub prev_mouse_x: f32,
    /// Mouse Y position last frame.
    pub prev_mouse_y: f32,
    /// Mouse buttons pressed this frame.
    buttons_pressed: u8,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edge state.
    pub fn begin_frame(&mut self) {
        self.prev_mouse_x = self.mouse_x;
        self.prev_mouse_y = self.mouse_y;
        self.buttons_pressed = 0;
        self.buttons_released = 0;
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_pressed |= mask;
        self.buttons_down |= mask;
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        self.buttons_released |= mask;
        self.buttons_down &= !mask;
    }

    /// Returns true if the mouse button was clicked this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        (self.buttons_pressed & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & Self::button_mask(button)) != 0
    }

    /// Returns the mouse movement delta since the previous frame.
    #[must_use]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_x - self.prev_mouse_x, self.mouse_y - self.prev_mouse_y)
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}
