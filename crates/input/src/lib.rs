// Chunk: docs/chunks/input_events - Shared input types
//!
//! Input event types for keyboard and mouse handling.
//!
//! These types abstract over whatever the host toolkit or terminal delivers and
//! give the editor a small Rust-native vocabulary for shortcuts, dialog
//! navigation and window dragging.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::default())
    }

    /// A key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command key (Cmd/⌘)
    pub command: bool,
    /// Option key (Alt/⌥)
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    /// Returns true if the platform's primary shortcut modifier is held.
    ///
    /// Ctrl on Linux/Windows and Cmd on macOS both count, so the same bindings
    /// work everywhere.
    pub fn is_primary(&self) -> bool {
        self.control || self.command
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    Backspace,
    Delete,
    Return,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Escape,
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Position in window coordinates (pixels from the window's top-left)
    pub position: (f64, f64),
    /// Whether the left button is held (for `Moved` events)
    pub left_button: bool,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, position: (f64, f64), left_button: bool) -> Self {
        Self {
            kind,
            position,
            left_button,
            modifiers: Modifiers::default(),
        }
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down,
    /// Mouse button released
    Up,
    /// Mouse moved
    Moved,
}
