use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Start a product fetch.
    Fetch,
    /// Return the screen to blank.
    Clear,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            InputAction::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => InputAction::Fetch,
        KeyCode::Char('c') | KeyCode::Char('C') => InputAction::Clear,
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn app() -> App {
        App::new("http://localhost/product", true)
    }

    #[test]
    fn r_and_enter_fetch() {
        let mut app = app();
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('r'), KeyModifiers::NONE)),
            InputAction::Fetch
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Fetch
        );
        assert!(!app.should_quit());
    }

    #[test]
    fn q_esc_and_ctrl_c_quit() {
        for key in [
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            press(KeyCode::Esc, KeyModifiers::NONE),
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            assert_eq!(handle_key(&mut app, key), InputAction::None);
            assert!(app.should_quit());
        }
    }

    #[test]
    fn c_clears_but_ctrl_c_quits() {
        let mut app = app();
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('c'), KeyModifiers::NONE)),
            InputAction::Clear
        );
        assert!(!app.should_quit());

        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::None
        );
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let key =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(handle_key(&mut app, key), InputAction::None);
        assert!(!app.should_quit());
    }
}
