use crate::snake::Direction::{self, *};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Other,
}

pub fn command_for(ev: &KeyEvent) -> Command {
    if is_quit(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Right => Command::Turn(Right),
        _ => Command::Other,
    }
}

/// Release and repeat events are reported on some platforms; only presses count.
pub fn is_press(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Press
}

fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => ev.modifiers.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(command_for(&key(KeyCode::Up)), Command::Turn(Up));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Command::Turn(Left));
        assert_eq!(command_for(&key(KeyCode::Down)), Command::Turn(Down));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Command::Turn(Right));
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for(&key(KeyCode::Char('c'))), Command::Other);
    }

    #[test]
    fn new_key_events_are_presses() {
        assert!(is_press(&key(KeyCode::Enter)));
    }
}
