use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::UiState;
use crate::session::SessionType;

/// Discrete user command, already resolved against the current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleHelp,
    CloseHelp,
    EnterConfigEdit,
    ExitConfigEdit,
    SelectField(SessionType),
    /// Change the selected config field by this many minutes
    AdjustField(i64),
    TogglePause,
    /// Change the remaining time by this many minutes
    AdjustTime(i64),
    Skip,
    Reset,
}

/// Resolve a key press into a command.
///
/// Priority: quit, help toggle, escape closing help, config-edit keys (which
/// swallow everything else while active), entering config edit, then the
/// timer controls.
pub fn command_for_key(key: KeyEvent, ui: &UiState) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let is_ctrl_c =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if is_ctrl_c || key.code == KeyCode::Char('q') {
        return Some(Command::Quit);
    }

    if key.code == KeyCode::Char('?') {
        return Some(Command::ToggleHelp);
    }

    if key.code == KeyCode::Esc && !ui.editing_config {
        return Some(Command::CloseHelp);
    }

    if ui.help_visible && ui.editing_config {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Esc => Some(Command::ExitConfigEdit),
            KeyCode::Char('+') => ui.selected_field.map(|_| Command::AdjustField(1)),
            KeyCode::Char('-') => ui.selected_field.map(|_| Command::AdjustField(-1)),
            KeyCode::Char(c) => SessionType::from_config_key(c).map(Command::SelectField),
            _ => None,
        };
    }

    if ui.help_visible && key.code == KeyCode::Char('c') {
        return Some(Command::EnterConfigEdit);
    }

    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('+') => Some(Command::AdjustTime(1)),
        KeyCode::Char('-') => Some(Command::AdjustTime(-1)),
        KeyCode::Char('n') => Some(Command::Skip),
        KeyCode::Char('r') => Some(Command::Reset),
        _ => None,
    }
}
