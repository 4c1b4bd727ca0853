// Chunk: docs/chunks/global_shortcuts - Application keyboard shortcuts
//!
//! Application-level keyboard shortcuts.
//!
//! [`resolve_action`] only interprets key events; it owns no state. The
//! caller dispatches the resulting [`Action`] to
//! [`Notepad`](crate::app::Notepad). Ctrl and Cmd are interchangeable so the
//! same bindings work on every platform.

use std::path::PathBuf;

use notepad_input::{Key, KeyEvent, Modifiers};

/// Things the user can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a new empty tab (Cmd+N)
    NewTab,
    /// Open a file; asks for a path when none is given (Cmd+O)
    Open(Option<PathBuf>),
    /// Save the active document (Cmd+S)
    Save,
    /// Save the active document under a new name (Cmd+Shift+S)
    SaveAs(Option<PathBuf>),
    /// Close the active tab (Cmd+W)
    CloseActiveTab,
    /// Close the tab at this index
    CloseTab(usize),
    /// Switch to the tab at this index (Cmd+1..9)
    SwitchTab(usize),
    /// Switch to next tab (Cmd+Tab)
    NextTab,
    /// Switch to previous tab (Cmd+Shift+Tab)
    PrevTab,
    /// Replace the active document's text
    ReplaceText(String),
    /// Append a line to the active document
    AppendLine(String),
    /// Delete the character before the cursor in the active document
    DeleteBackward,
    /// Quit the application (Cmd+Q)
    Quit,
}

/// Resolves a key event to an action.
///
/// Returns `Some(action)` if the key event is a shortcut, `None` otherwise.
pub fn resolve_action(event: &KeyEvent) -> Option<Action> {
    let modifiers = event.modifiers;
    if !modifiers.is_primary() || modifiers.option {
        return None;
    }

    match &event.key {
        Key::Tab if modifiers.shift => Some(Action::PrevTab),
        Key::Tab => Some(Action::NextTab),
        Key::Char(c) => {
            let c = c.to_ascii_lowercase();
            match c {
                'n' if !modifiers.shift => Some(Action::NewTab),
                'o' if !modifiers.shift => Some(Action::Open(None)),
                's' if modifiers.shift => Some(Action::SaveAs(None)),
                's' => Some(Action::Save),
                'w' if !modifiers.shift => Some(Action::CloseActiveTab),
                'q' if !modifiers.shift => Some(Action::Quit),
                '1'..='9' if !modifiers.shift => c.to_digit(10).map(|digit| Action::SwitchTab(digit as usize - 1)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Parses a chord such as `ctrl+shift+s`, `cmd+w` or `ctrl+tab`.
///
/// Modifier names are case-insensitive; `cmd`, `command` and `super` all mean
/// Cmd, and `alt` is an alias for `option`. Returns `None` for unknown names
/// or a chord without a key.
pub fn parse_chord(chord: &str) -> Option<KeyEvent> {
    let mut modifiers = Modifiers::default();
    let mut key = None;

    for part in chord.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.control = true,
            "cmd" | "command" | "super" => modifiers.command = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.option = true,
            name => {
                if key.is_some() {
                    return None;
                }
                key = Some(parse_key(name)?);
            }
        }
    }

    key.map(|key| KeyEvent::new(key, modifiers))
}

fn parse_key(name: &str) -> Option<Key> {
    let key = match name {
        "tab" => Key::Tab,
        "enter" | "return" => Key::Return,
        "esc" | "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Key::Char(ch),
                _ => return None,
            }
        }
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(Key::Char(ch), Modifiers { control: true, ..Default::default() })
    }

    fn cmd(ch: char) -> KeyEvent {
        KeyEvent::new(Key::Char(ch), Modifiers { command: true, ..Default::default() })
    }

    #[test]
    fn test_file_shortcuts() {
        assert_eq!(resolve_action(&ctrl('n')), Some(Action::NewTab));
        assert_eq!(resolve_action(&ctrl('o')), Some(Action::Open(None)));
        assert_eq!(resolve_action(&ctrl('s')), Some(Action::Save));
        assert_eq!(resolve_action(&ctrl('w')), Some(Action::CloseActiveTab));
        assert_eq!(resolve_action(&ctrl('q')), Some(Action::Quit));
    }

    #[test]
    fn test_cmd_matches_ctrl() {
        assert_eq!(resolve_action(&cmd('s')), resolve_action(&ctrl('s')));
    }

    #[test]
    fn test_shift_s_is_save_as() {
        let event = parse_chord("ctrl+shift+s").unwrap();
        assert_eq!(resolve_action(&event), Some(Action::SaveAs(None)));
        // Shifted letters may arrive uppercase.
        let upper = KeyEvent::new(Key::Char('S'), event.modifiers);
        assert_eq!(resolve_action(&upper), Some(Action::SaveAs(None)));
    }

    #[test]
    fn test_digits_switch_tabs() {
        assert_eq!(resolve_action(&ctrl('1')), Some(Action::SwitchTab(0)));
        assert_eq!(resolve_action(&ctrl('9')), Some(Action::SwitchTab(8)));
        assert_eq!(resolve_action(&ctrl('0')), None);
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(resolve_action(&parse_chord("ctrl+tab").unwrap()), Some(Action::NextTab));
        assert_eq!(resolve_action(&parse_chord("ctrl+shift+tab").unwrap()), Some(Action::PrevTab));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert_eq!(resolve_action(&KeyEvent::char('s')), None);
        assert_eq!(resolve_action(&KeyEvent::plain(Key::Tab)), None);
        assert_eq!(resolve_action(&parse_chord("shift+s").unwrap()), None);
        assert_eq!(resolve_action(&parse_chord("ctrl+alt+s").unwrap()), None);
    }

    #[test]
    fn test_parse_chord() {
        let event = parse_chord("Cmd+W").unwrap();
        assert!(event.modifiers.command);
        assert_eq!(event.key, Key::Char('w'));
        assert_eq!(parse_chord("ctrl+esc").unwrap().key, Key::Escape);
        assert_eq!(parse_chord("ctrl+"), None);
        assert_eq!(parse_chord("ctrl+a+b"), None);
        assert_eq!(parse_chord("hyper+a"), None);
    }
}
