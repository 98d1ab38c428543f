use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, App, AppView};

pub mod keys {
    pub const HELP: &str = "?";
    pub const RELOAD: &str = "r";
    pub const QUIT: &str = "q";
}

pub struct KeyBinding {
    pub key: &'static str,
    pub description: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "r",
        description: "Reload payload",
    },
    KeyBinding {
        key: "?",
        description: "Toggle help",
    },
    KeyBinding {
        key: "q / Esc",
        description: "Quit",
    },
];

pub fn handle_key(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.view {
        AppView::Main => handle_main_keys(key),
        AppView::Help => handle_help_keys(key),
    }
}

fn handle_main_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::F(5) => Action::Reload,
        KeyCode::Char('?') | KeyCode::Char('/') => Action::ToggleHelp,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => Action::ToggleHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::loader::PayloadSource;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_keys() {
        let app = App::new(PayloadSource::File(PathBuf::from("/nonexistent.json")));
        assert_eq!(handle_key(&app, press(KeyCode::Char('r'))), Action::Reload);
        assert_eq!(handle_key(&app, press(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(handle_key(&app, press(KeyCode::Esc)), Action::Quit);
        assert_eq!(handle_key(&app, press(KeyCode::Char('x'))), Action::None);
        assert_eq!(
            handle_key(&app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_esc_closes_help() {
        let mut app = App::new(PayloadSource::File(PathBuf::from("/nonexistent.json")));
        app.view = AppView::Help;
        assert_eq!(handle_key(&app, press(KeyCode::Esc)), Action::ToggleHelp);
        assert_eq!(handle_key(&app, press(KeyCode::Char('r'))), Action::None);
    }
}
