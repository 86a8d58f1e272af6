//! Key mapping from terminal events to input actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_pentomino_types::InputAction;

/// Map keyboard input to an input action.
pub fn map_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor movement (arrows or vim keys)
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(InputAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(InputAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(InputAction::CursorDown),

        // Rotation
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputAction::RotateCcw),

        // Lock the hovering piece onto the board
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Place),

        // Remove the placed piece under the cursor
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Backspace | KeyCode::Delete => {
            Some(InputAction::Delete)
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputAction::CursorLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(InputAction::CursorRight)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputAction::CursorUp)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(InputAction::CursorDown)
        );

        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(InputAction::CursorLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(InputAction::CursorDown)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(InputAction::RotateCw)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('z'))),
            Some(InputAction::RotateCcw)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('Z'))),
            Some(InputAction::RotateCcw)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(InputAction::Place)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputAction::Place)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputAction::Delete)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(InputAction::Delete)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(InputAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('p'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
