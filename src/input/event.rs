/// Platform-agnostic pointer events.
///
/// These are fed into [`ViewEngine::handle_input`](crate::ViewEngine::handle_input).
/// Cursor positions are normalized device coordinates (origin at the canvas
/// center, y up); use [`Viewport::to_ndc`](super::Viewport::to_ndc) to get
/// them from pixel positions.
///
/// # Example
///
/// ```ignore
/// let (x, y) = viewport.to_ndc(px, py);
/// engine.handle_input(InputEvent::CursorMoved { x, y });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to a canvas position.
    CursorMoved {
        /// Horizontal position in `[-1, 1]`, positive to the right.
        x: f32,
        /// Vertical position in `[-1, 1]`, positive up.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

/// What a drag with a given button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Arcball rotation of the object.
    Rotate,
    /// Move the eye along the view direction.
    Dolly,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` id (0 = main, 1 = auxiliary,
    /// 2 = secondary).
    #[must_use]
    pub fn from_dom_id(id: u16) -> Option<Self> {
        match id {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    /// The gesture this button drives, if any.
    #[must_use]
    pub fn drag_mode(self) -> Option<DragMode> {
        match self {
            Self::Left => Some(DragMode::Rotate),
            Self::Middle => Some(DragMode::Dolly),
            Self::Right => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
