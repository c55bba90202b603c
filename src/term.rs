//! Term Module - crossterm event adapter
//!
//! Bridges crossterm's event system with the tracker. The tracker itself is
//! event-source agnostic (it only sees numeric codes and coordinates); this
//! module is the thin glue that converts `crossterm::event::Event` values
//! into tracker notifications.
//!
//! # API
//!
//! - `apply_event` - Feed a crossterm event into a tracker
//! - `key_code` - Map a crossterm key to its numeric code
//! - `button_code` - Map a crossterm mouse button to its numeric code
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::{poll, read};
//! use keytrack::{term, InputTracker};
//! use std::time::Duration;
//!
//! let mut tracker = InputTracker::new();
//! loop {
//!     if poll(Duration::from_millis(16))? {
//!         term::apply_event(&mut tracker, &read()?);
//!     }
//!     // game/application tick: query tracker here
//! }
//! ```

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, ModifierKeyCode, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::codes::{button, key};
use crate::tracker::InputTracker;

// =============================================================================
// EVENT APPLICATION
// =============================================================================

/// Feed a crossterm event into the tracker.
///
/// Returns the tracker's suppress-default signal for the event, or false
/// when the event has no counterpart (focus changes, resize, unmappable
/// keys, scroll).
pub fn apply_event(tracker: &mut InputTracker, event: &Event) -> bool {
    match event {
        Event::Key(key_event) => apply_key_event(tracker, key_event),
        Event::Mouse(mouse_event) => apply_mouse_event(tracker, mouse_event),
        _ => false,
    }
}

/// Feed a crossterm key event into the tracker.
///
/// Repeat events are delivered as downs; the tracker's edge flags make
/// that harmless. Keys with no numeric mapping are dropped.
pub fn apply_key_event(tracker: &mut InputTracker, event: &KeyEvent) -> bool {
    let Some(code) = key_code(event.code) else {
        return false;
    };
    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => tracker.key_down(code),
        KeyEventKind::Release => tracker.key_up(code),
    }
}

fn apply_mouse_event(tracker: &mut InputTracker, event: &MouseEvent) -> bool {
    match event.kind {
        MouseEventKind::Down(btn) => tracker.button_down(button_code(btn)),
        MouseEventKind::Up(btn) => tracker.button_up(button_code(btn)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            tracker.pointer_moved(event.column as f64, event.row as f64)
        }
        _ => false,
    }
}

// =============================================================================
// CODE MAPPING
// =============================================================================

/// Map a crossterm key code to its numeric code.
///
/// Letters map to their uppercase codes (`'a'` → 65), digits to 48..=57,
/// and named keys to the classic DOM `keyCode` values used by the name
/// table ("enter" → 13, "left" → 37). Keys outside the table return `None`.
pub fn key_code(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char(ch) => char_code(ch),
        KeyCode::Backspace => Some(key::BACKSPACE),
        KeyCode::Tab | KeyCode::BackTab => Some(key::TAB),
        KeyCode::Enter => Some(key::ENTER),
        KeyCode::Pause => Some(key::PAUSE_BREAK),
        KeyCode::CapsLock => Some(key::CAPS_LOCK),
        KeyCode::Esc => Some(key::ESC),
        KeyCode::PageUp => Some(key::PAGE_UP),
        KeyCode::PageDown => Some(key::PAGE_DOWN),
        KeyCode::End => Some(key::END),
        KeyCode::Home => Some(key::HOME),
        KeyCode::Left => Some(key::LEFT),
        KeyCode::Up => Some(key::UP),
        KeyCode::Right => Some(key::RIGHT),
        KeyCode::Down => Some(key::DOWN),
        KeyCode::Insert => Some(key::INSERT),
        KeyCode::Delete => Some(key::DELETE),
        KeyCode::Menu => Some(key::MENU),
        KeyCode::NumLock => Some(key::NUM_LOCK),
        KeyCode::ScrollLock => Some(key::SCROLL_LOCK),
        KeyCode::F(n) if (1..=12).contains(&n) => Some(key::F1 + n - 1),
        KeyCode::Modifier(m) => modifier_code(m),
        _ => None,
    }
}

fn char_code(ch: char) -> Option<u8> {
    match ch {
        'a'..='z' => Some(ch.to_ascii_uppercase() as u8),
        'A'..='Z' | '0'..='9' => Some(ch as u8),
        ' ' => Some(key::SPACE),
        ';' => Some(key::SEMICOLON),
        '=' => Some(key::EQUALS),
        ',' => Some(key::COMMA),
        '-' => Some(key::DASH),
        '.' => Some(key::PERIOD),
        '/' => Some(key::FORWARD_SLASH),
        '`' => Some(key::TICK),
        '[' => Some(key::BRACKET_LEFT),
        '\\' => Some(key::BACK_SLASH),
        ']' => Some(key::BRACKET_RIGHT),
        '\'' => Some(key::APOSTROPHE),
        _ => None,
    }
}

fn modifier_code(m: ModifierKeyCode) -> Option<u8> {
    match m {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(key::SHIFT),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some(key::CTRL),
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some(key::ALT),
        ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper => Some(key::WINDOWS),
        _ => None,
    }
}

/// Map a crossterm mouse button to its numeric code.
pub fn button_code(btn: MouseButton) -> u8 {
    match btn {
        MouseButton::Left => button::LEFT,
        MouseButton::Middle => button::MIDDLE,
        MouseButton::Right => button::RIGHT,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Position;
    use crossterm::event::{KeyEventKind, KeyModifiers};

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(key_code(KeyCode::Char('a')), Some(65));
        assert_eq!(key_code(KeyCode::Char('Z')), Some(90));
        assert_eq!(key_code(KeyCode::Char('5')), Some(53));
        assert_eq!(key_code(KeyCode::Enter), Some(13));
        assert_eq!(key_code(KeyCode::Left), Some(37));
        assert_eq!(key_code(KeyCode::F(5)), Some(116));
        assert_eq!(key_code(KeyCode::F(13)), None);
        assert_eq!(key_code(KeyCode::Char('§')), None);
    }

    #[test]
    fn test_button_code_mapping() {
        assert_eq!(button_code(MouseButton::Left), 0);
        assert_eq!(button_code(MouseButton::Middle), 1);
        assert_eq!(button_code(MouseButton::Right), 2);
    }

    #[test]
    fn test_key_event_updates_tracker() {
        let mut tracker = InputTracker::new();

        apply_event(
            &mut tracker,
            &Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        );
        assert_eq!(tracker.key_held(["enter"]), Ok(true));
        assert_eq!(tracker.key_pressed(["enter"]), Ok(true));

        apply_event(
            &mut tracker,
            &Event::Key(KeyEvent::new_with_kind(
                KeyCode::Enter,
                KeyModifiers::NONE,
                KeyEventKind::Release,
            )),
        );
        assert_eq!(tracker.key_held(["enter"]), Ok(false));
    }

    #[test]
    fn test_repeat_key_event_does_not_refire_edge() {
        let mut tracker = InputTracker::new();

        apply_key_event(
            &mut tracker,
            &KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE),
        );
        assert_eq!(tracker.key_pressed(["w"]), Ok(true));

        apply_key_event(
            &mut tracker,
            &KeyEvent::new_with_kind(
                KeyCode::Char('w'),
                KeyModifiers::NONE,
                KeyEventKind::Repeat,
            ),
        );
        assert_eq!(tracker.key_pressed(["w"]), Ok(false));
    }

    #[test]
    fn test_mouse_events_update_tracker() {
        let mut tracker = InputTracker::new();

        apply_event(
            &mut tracker,
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 3,
                row: 4,
                modifiers: KeyModifiers::NONE,
            }),
        );
        assert_eq!(tracker.button_held(["left"]), Ok(true));

        apply_event(
            &mut tracker,
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 10,
                row: 20,
                modifiers: KeyModifiers::NONE,
            }),
        );
        assert_eq!(tracker.position(), Position::new(10.0, 20.0));

        apply_event(
            &mut tracker,
            &Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column: 10,
                row: 20,
                modifiers: KeyModifiers::NONE,
            }),
        );
        assert_eq!(tracker.button_held(["left"]), Ok(false));
    }

    #[test]
    fn test_unmapped_events_are_dropped() {
        let mut tracker = InputTracker::new();
        tracker.set_suppress_defaults(true);

        // Unmappable key: no state change, no suppression signal.
        assert!(!apply_key_event(
            &mut tracker,
            &KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE),
        ));

        // Mapped key while suppressing: signal comes back.
        assert!(apply_key_event(
            &mut tracker,
            &KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
        ));
    }
}
