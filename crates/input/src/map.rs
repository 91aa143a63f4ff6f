//! Key mapping from terminal events to demo actions.

use crate::types::DemoAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to demo actions. Unknown keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<DemoAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Pan
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(DemoAction::PanUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(DemoAction::PanDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(DemoAction::PanLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(DemoAction::PanRight),

        // Yaw / zoom
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(DemoAction::YawLeft),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(DemoAction::YawRight),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(DemoAction::ZoomIn),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(DemoAction::ZoomOut),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(DemoAction::ResetCamera),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(DemoAction::ToggleSupersampling),

        // Scenes
        KeyCode::Char(c @ '1'..='9') => Some(DemoAction::SwitchScene(c as usize - '1' as usize)),

        _ => None,
    }
}

/// Check if key should quit the demo.
///
/// `q` is taken by yaw, so quitting is Esc or Ctrl-C (raw mode swallows SIGINT).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
