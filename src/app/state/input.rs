use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Command {
    Previous,
    Next,
    TogglePhase,
    Reroll,
    Pause,
    CycleMarker,
    Quit,
}

pub(super) fn key_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Command::Quit);
    }
    match key.code {
        KeyCode::Left => return Some(Command::Previous),
        KeyCode::Right => return Some(Command::Next),
        KeyCode::Esc => return Some(Command::Quit),
        _ => {}
    }
    match command_char(key)? {
        'h' => Some(Command::Previous),
        'l' => Some(Command::Next),
        ' ' | 'd' => Some(Command::TogglePhase),
        'r' => Some(Command::Reroll),
        'p' => Some(Command::Pause),
        'm' => Some(Command::CycleMarker),
        'q' => Some(Command::Quit),
        _ => None,
    }
}

pub(super) fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}
