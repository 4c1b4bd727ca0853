// Chunk: docs/chunks/window_drag - Dragging a frameless window by its title bar
//!
//! Moving a frameless window by dragging its title bar.
//!
//! A left-button press inside the title bar captures the pointer's offset
//! from the window origin. Each move with the button held yields the origin
//! that keeps the pointer at that offset. Releasing the button (or a move
//! without it) ends the drag.

use notepad_input::{MouseEvent, MouseEventKind};

/// Height of the draggable strip at the top of the window, in points.
pub const TITLE_BAR_HEIGHT: f64 = 40.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WindowDrag {
    /// Pointer offset from the window origin, while a drag is in progress
    offset: Option<(f64, f64)>,
}

impl WindowDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }

    /// Feeds a mouse event. `event.position` is in window coordinates and
    /// `window_origin` is the window's current screen position.
    ///
    /// Returns the new window origin when the window should move.
    pub fn handle_mouse(&mut self, event: &MouseEvent, window_origin: (f64, f64)) -> Option<(f64, f64)> {
        let (x, y) = event.position;
        match event.kind {
            MouseEventKind::Down => {
                self.offset = (event.left_button && (0.0..TITLE_BAR_HEIGHT).contains(&y)).then_some((x, y));
                None
            }
            MouseEventKind::Moved => {
                let (dx, dy) = self.offset?;
                if !event.left_button {
                    self.offset = None;
                    return None;
                }
                let pointer = (window_origin.0 + x, window_origin.1 + y);
                Some((pointer.0 - dx, pointer.1 - dy))
            }
            MouseEventKind::Up => {
                self.offset = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down, (x, y), true)
    }

    fn drag_to(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Moved, (x, y), true)
    }

    #[test]
    fn test_drag_moves_window_with_pointer() {
        let mut drag = WindowDrag::new();
        let origin = (100.0, 200.0);
        assert_eq!(drag.handle_mouse(&down(10.0, 5.0), origin), None);
        assert!(drag.is_dragging());

        // Pointer moved 30 right, 20 down in screen space.
        let moved = drag.handle_mouse(&drag_to(40.0, 25.0), origin);
        assert_eq!(moved, Some((130.0, 220.0)));

        // Window has moved; pointer sits at the captured offset again.
        let moved = drag.handle_mouse(&drag_to(15.0, 5.0), (130.0, 220.0));
        assert_eq!(moved, Some((135.0, 220.0)));
    }

    #[test]
    fn test_press_below_title_bar_does_not_drag() {
        let mut drag = WindowDrag::new();
        drag.handle_mouse(&down(10.0, TITLE_BAR_HEIGHT), (0.0, 0.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.handle_mouse(&drag_to(50.0, 50.0), (0.0, 0.0)), None);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut drag = WindowDrag::new();
        drag.handle_mouse(&down(1.0, 1.0), (0.0, 0.0));
        drag.handle_mouse(&MouseEvent::new(MouseEventKind::Up, (1.0, 1.0), false), (0.0, 0.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.handle_mouse(&drag_to(9.0, 9.0), (0.0, 0.0)), None);
    }

    #[test]
    fn test_move_without_button_ends_drag() {
        let mut drag = WindowDrag::new();
        drag.handle_mouse(&down(1.0, 1.0), (0.0, 0.0));
        let hover = MouseEvent::new(MouseEventKind::Moved, (5.0, 5.0), false);
        assert_eq!(drag.handle_mouse(&hover, (0.0, 0.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_right_button_press_is_ignored() {
        let mut drag = WindowDrag::new();
        drag.handle_mouse(&MouseEvent::new(MouseEventKind::Down, (1.0, 1.0), false), (0.0, 0.0));
        assert!(!drag.is_dragging());
    }
}
