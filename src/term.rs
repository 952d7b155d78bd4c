use crate::{Coords, GridInt};
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

use crate::error::GameError;
use crate::input::is_press;

/// Screen position in terminal columns and rows.
pub type ScreenPos = (u16, u16);

pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    active: bool,
}

/// Where a board of a given size sits on screen. Each cell is two columns wide so the
/// board looks square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub left: u16,
    pub top: u16,
    pub grid_size: GridInt,
}

impl BoardLayout {
    /// Columns and rows needed for the bordered board plus the score line above it.
    pub fn required_size(grid_size: GridInt) -> (u16, u16) {
        (grid_size * 2 + 2, grid_size + 3)
    }

    pub fn centered(grid_size: GridInt, term_size: (u16, u16)) -> Result<Self, GameError> {
        let (need_w, need_h) = BoardLayout::required_size(grid_size);
        let (have_w, have_h) = term_size;

        if have_w < need_w || have_h < need_h {
            return Err(GameError::TerminalTooSmall { have_w, have_h, need_w, need_h });
        }

        // Top border goes one row below the score line.
        let left = (have_w - need_w) / 2;
        let top = (have_h - need_h) / 2 + 1;
        Ok(BoardLayout { left, top, grid_size })
    }

    pub fn cell(&self, pos: Coords) -> ScreenPos {
        (self.left + 1 + pos.0 * 2, self.top + 1 + pos.1)
    }

    pub fn bottom_right(&self) -> ScreenPos {
        (self.left + self.grid_size * 2 + 1, self.top + self.grid_size + 1)
    }

    pub fn header(&self) -> ScreenPos {
        (self.left, self.top - 1)
    }
}

/// Top-left corner, width and height of a box holding `lines` centred on a terminal of
/// `term_size`, with a blank line above and below and one column of padding each side.
pub fn message_box(lines: &[&str], term_size: (u16, u16)) -> (ScreenPos, u16, u16) {
    let longest = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0);
    let height = (lines.len() + 2) as u16;
    let width = (longest + 2) as u16;
    let center = (term_size.0 / 2, term_size.1 / 2);
    let top_left = (center.0.saturating_sub(width / 2), center.1.saturating_sub(height / 2));
    (top_left, width, height)
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        Ok(TermManager { width, height, stdout, active: false })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        install_panic_hook();
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        self.active = false;
        restore_terminal()
    }

    pub fn read_key_blocking(&self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if is_press(&ev) {
                    return Ok(ev);
                }
            }
        }
    }

    /// Waits up to `timeout` for a key press.
    pub fn read_key_timeout(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !poll(timeout)? {
            return Ok(None);
        }

        match read()? {
            Event::Key(ev) if is_press(&ev) => Ok(Some(ev)),
            _ => Ok(None),
        }
    }

    pub fn get_terminal_size(&self) -> ScreenPos {
        (self.width, self.height)
    }

    pub fn draw_borders(
        &mut self,
        top_left: ScreenPos,
        bottom_right: ScreenPos,
    ) -> io::Result<()> {
        let (start_x, start_y) = top_left;
        let (end_x, end_y) = bottom_right;

        for x in start_x..=end_x {
            let ch = if x == start_x || x == end_x {'+'} else {'-'};
            self.print_at((x, start_y), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in start_y + 1..end_y {
            self.print_at((start_x, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    /// Draws a centred box over whatever is on screen. The next `clear` removes it.
    pub fn show_message(&mut self, lines: &[&str]) -> io::Result<()> {
        let (top_left, msg_width, msg_height) = message_box(lines, (self.width, self.height));

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_str_at((top_left.0, top_left.1 + i as u16 + 1), &padded_line)?;
        }

        self.flush()
    }

    pub fn print_at(&mut self, pos: ScreenPos, ch: char) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }

    pub fn print_str_at(&mut self, pos: ScreenPos, s: &str) -> io::Result<()> {
        for (x_diff, ch) in s.chars().enumerate() {
            self.print_at((pos.0 + x_diff as u16, pos.1), ch)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = stdout();
    terminal::disable_raw_mode()?;
    execute!(stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
}

/// A panic inside the game loop would otherwise leave the shell in raw mode.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_fits_an_80x24_terminal() {
        let layout = BoardLayout::centered(20, (80, 24)).unwrap();
        assert_eq!(layout, BoardLayout { left: 19, top: 1, grid_size: 20 });
        assert_eq!(layout.header(), (19, 0));
        assert_eq!(layout.cell((0, 0)), (20, 2));
        assert_eq!(layout.cell((19, 19)), (58, 21));
        assert_eq!(layout.bottom_right(), (60, 22));
    }

    #[test]
    fn small_terminal_is_rejected() {
        let err = BoardLayout::centered(20, (40, 24)).unwrap_err();
        assert!(matches!(err, GameError::TerminalTooSmall { need_w: 42, need_h: 23, .. }));
    }

    #[test]
    fn message_box_is_centred_with_padding() {
        let lines = ["Game Over!", "Score: 3", "", "Press any key to play again,"];
        let (top_left, width, height) = message_box(&lines, (80, 24));

        assert_eq!(width, 30);
        assert_eq!(height, 6);
        assert_eq!(top_left, (25, 9));
    }

    #[test]
    fn message_box_clamps_to_the_top_left_corner() {
        let (top_left, width, _) = message_box(&["a much longer line than fits"], (10, 2));
        assert_eq!(top_left, (0, 0));
        assert_eq!(width, 30);
    }
}
