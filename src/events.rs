//! Keybindings: Ctrl+K or / palette, Enter run, Esc close, Up/Down select, q quit.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, palette_visible: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('k') => Some(Action::PaletteToggle),
            KeyCode::Char('l') => Some(Action::ClearInput),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => return Some(Action::PaletteHide),
        KeyCode::Enter | KeyCode::Tab if palette_visible => return Some(Action::PaletteSelect),
        KeyCode::Backspace => return Some(Action::Backspace),
        KeyCode::Up => {
            return Some(if palette_visible { Action::PaletteUp } else { Action::ActivityScrollUp });
        }
        KeyCode::Down => {
            return Some(if palette_visible {
                Action::PaletteDown
            } else {
                Action::ActivityScrollDown
            });
        }
        KeyCode::PageUp => return Some(Action::ActivityScrollPageUp),
        KeyCode::PageDown => return Some(Action::ActivityScrollPageDown),
        _ => {}
    }

    let KeyCode::Char(c) = code else {
        return None;
    };
    if mods.contains(KeyModifiers::SUPER) {
        return None;
    }
    if !palette_visible {
        match c {
            'q' => return Some(Action::Quit),
            '/' => return Some(Action::PaletteShow),
            'k' => return Some(Action::ActivityScrollUp),
            'j' => return Some(Action::ActivityScrollDown),
            _ => {}
        }
    }
    // Any other character goes to the query (allow Alt for accented chars).
    Some(Action::Char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_shortcuts() {
        assert_eq!(key_to_action(&ctrl('k'), false), Some(Action::PaletteToggle));
        assert_eq!(key_to_action(&ctrl('k'), true), Some(Action::PaletteToggle));
        assert_eq!(key_to_action(&ctrl('c'), true), Some(Action::Quit));
        assert_eq!(key_to_action(&ctrl('x'), true), None);
    }

    #[test]
    fn letters_are_commands_only_when_closed() {
        assert_eq!(key_to_action(&key(KeyCode::Char('q')), false), Some(Action::Quit));
        assert_eq!(key_to_action(&key(KeyCode::Char('q')), true), Some(Action::Char('q')));
        assert_eq!(key_to_action(&key(KeyCode::Char('/')), false), Some(Action::PaletteShow));
        assert_eq!(key_to_action(&key(KeyCode::Char('d')), false), Some(Action::Char('d')));
    }

    #[test]
    fn arrows_follow_palette_visibility() {
        assert_eq!(key_to_action(&key(KeyCode::Up), true), Some(Action::PaletteUp));
        assert_eq!(key_to_action(&key(KeyCode::Up), false), Some(Action::ActivityScrollUp));
        assert_eq!(key_to_action(&key(KeyCode::Down), true), Some(Action::PaletteDown));
    }

    #[test]
    fn enter_selects_only_in_palette() {
        assert_eq!(key_to_action(&key(KeyCode::Enter), true), Some(Action::PaletteSelect));
        assert_eq!(key_to_action(&key(KeyCode::Enter), false), None);
    }

    #[test]
    fn release_is_ignored() {
        let mut ev = key(KeyCode::Char('a'));
        ev.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&ev, true), None);
    }
}
