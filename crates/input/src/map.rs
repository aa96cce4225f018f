//! Key mapping from terminal events to movement intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a movement intent.
pub fn map_key(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::TurnRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::MoveBackward),
        _ => None,
    }
}

/// Check if a key should quit the walkthrough.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Intent::MoveForward)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(Intent::MoveBackward)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Intent::TurnLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Intent::TurnRight)
        );
    }

    #[test]
    fn test_arrow_keys_mirror_wasd() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Intent::MoveForward));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Intent::MoveBackward));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Intent::TurnLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Intent::TurnRight));
    }

    #[test]
    fn test_unmapped_keys_produce_no_intent() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
