//! Input dispatch for ViewEngine

use super::ViewEngine;
use crate::input::{DragMode, InputEvent, MouseButton};

impl ViewEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Button 0 drags rotate the object through the arcball, button 1
    /// drags dolly the camera. Only one gesture runs at a time; presses of
    /// other buttons during a drag are ignored and the gesture ends when its
    /// own button is released.
    ///
    /// Returns `true` if the orientation or camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => self.dispatch_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.dispatch_mouse_button(button, pressed);
                false
            }
        }
    }

    /// Cursor moved — forward to the active gesture.
    fn dispatch_cursor_moved(&mut self, x: f32, y: f32) -> bool {
        match self.active_drag {
            Some((_, DragMode::Rotate)) => {
                self.trackball.pointer_move(x, y).is_some()
            }
            Some((_, DragMode::Dolly)) => self.camera_controller.dolly_drag(y),
            None => false,
        }
    }

    /// Mouse button — start or end a gesture.
    fn dispatch_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            if self.active_drag.is_some() {
                return;
            }
            let Some(mode) = button.drag_mode() else {
                return;
            };
            match mode {
                DragMode::Rotate => self.trackball.pointer_down(),
                DragMode::Dolly => self.camera_controller.begin_dolly(),
            }
            self.active_drag = Some((button, mode));
            return;
        }

        // Release
        if let Some((active, mode)) = self.active_drag {
            if active == button {
                match mode {
                    DragMode::Rotate => self.trackball.pointer_up(),
                    DragMode::Dolly => self.camera_controller.end_dolly(),
                }
                self.active_drag = None;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glam::Vec4;

    use super::super::tests::triangle;
    use super::*;
    use crate::math::Quaternion;
    use crate::options::Options;

    fn engine() -> ViewEngine {
        ViewEngine::new(Options::default(), triangle()).unwrap()
    }

    fn press(engine: &mut ViewEngine, button: MouseButton) {
        let _ = engine.handle_input(InputEvent::MouseButton {
            button,
            pressed: true,
        });
    }

    fn release(engine: &mut ViewEngine, button: MouseButton) {
        let _ = engine.handle_input(InputEvent::MouseButton {
            button,
            pressed: false,
        });
    }

    fn move_to(engine: &mut ViewEngine, x: f32, y: f32) -> bool {
        engine.handle_input(InputEvent::CursorMoved { x, y })
    }

    #[test]
    fn rotate_drag_turns_about_vertical_axis() {
        let mut engine = engine();
        let prior = engine.orientation();

        press(&mut engine, MouseButton::Left);
        assert_eq!(engine.active_drag(), Some(DragMode::Rotate));
        assert!(!move_to(&mut engine, 0.0, 0.0));
        assert!(move_to(&mut engine, 0.1, 0.0));

        let change = engine.orientation().multiply(prior.inverse_unit());
        assert!(change.vector.x.abs() < 1e-6);
        assert!(change.vector.y > 0.0);

        release(&mut engine, MouseButton::Left);
        assert_eq!(engine.active_drag(), None);
        let after = engine.orientation();
        assert!(!move_to(&mut engine, 0.5, 0.5));
        assert_eq!(engine.orientation(), after);
    }

    #[test]
    fn moves_without_a_drag_change_nothing() {
        let mut engine = engine();
        assert!(!move_to(&mut engine, 0.3, 0.3));
        assert!(!move_to(&mut engine, -0.3, 0.1));
        assert_eq!(engine.orientation(), Quaternion::IDENTITY);
    }

    #[test]
    fn dolly_drag_moves_camera_toward_target() {
        let mut engine = engine();
        let start = engine.camera().position();
        let forward = engine.camera().forward();

        press(&mut engine, MouseButton::Middle);
        assert_eq!(engine.active_drag(), Some(DragMode::Dolly));
        assert!(!move_to(&mut engine, 0.0, 0.0));
        assert!(move_to(&mut engine, 0.0, 0.2));

        let moved = engine.camera().position() - start;
        assert!((moved + forward * 2.0).length() < 1e-5);
        assert_eq!(engine.orientation(), Quaternion::IDENTITY);
        release(&mut engine, MouseButton::Middle);
        assert_eq!(engine.active_drag(), None);
    }

    #[test]
    fn right_button_does_nothing() {
        let mut engine = engine();
        press(&mut engine, MouseButton::Right);
        assert_eq!(engine.active_drag(), None);
        assert!(!move_to(&mut engine, 0.0, 0.0));
        assert!(!move_to(&mut engine, 0.4, 0.4));
    }

    #[test]
    fn second_button_during_drag_is_ignored() {
        let mut engine = engine();
        press(&mut engine, MouseButton::Left);
        press(&mut engine, MouseButton::Middle);
        assert_eq!(engine.active_drag(), Some(DragMode::Rotate));

        // Releasing the other button does not end the rotation.
        release(&mut engine, MouseButton::Middle);
        assert_eq!(engine.active_drag(), Some(DragMode::Rotate));
        assert!(!move_to(&mut engine, 0.0, 0.0));
        assert!(move_to(&mut engine, 0.0, 0.2));
        assert_eq!(engine.camera().position(), Vec4::new(0.0, 6.0, 10.0, 1.0));
    }
}
