//! Line-based terminal front end.

use std::io::{BufRead, Write};
use tally_toe::{Announcement, Notifier, Player, Position, Renderer, Snapshot};
use tracing::{instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the active mark at this index. May be out of range.
    Play(usize),
    /// Leave the game.
    Quit,
    /// Not a move or a command.
    Unknown,
}

impl Input {
    /// Parses a raw input line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Input::Quit;
        }
        if let Ok(index) = line.parse::<usize>() {
            return Input::Play(index);
        }
        match Position::from_label_or_number(line) {
            Some(pos) => Input::Play(pos.to_index()),
            None => Input::Unknown,
        }
    }
}

/// Terminal renderer and notifier over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading `input` and writing `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks `player` for a move. Returns `None` at end of input.
    pub fn prompt(&mut self, player: Player) -> std::io::Result<Option<Input>> {
        write!(self.output, "Player {}, pick a cell (0-8, or q to quit): ", player)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| Input::parse(&line)))
    }

    /// Writes a line of free text.
    pub fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Consumes the console, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn draw(&mut self, snapshot: &Snapshot<'_>) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board)?;
        writeln!(self.output)?;
        writeln!(self.output, "Next Player: {}", snapshot.active)?;
        writeln!(self.output, "Player X wins: {}", snapshot.ledger.wins(Player::X))?;
        writeln!(self.output, "Player O wins: {}", snapshot.ledger.wins(Player::O))?;
        self.output.flush()
    }

    fn acknowledge(&mut self, announcement: &Announcement) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", announcement)?;
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Renderer for Console<R, W> {
    fn redraw(&mut self, snapshot: &Snapshot<'_>) {
        if let Err(e) = self.draw(snapshot) {
            warn!(error = %e, "Failed to draw board");
        }
    }
}

impl<R: BufRead, W: Write> Notifier for Console<R, W> {
    fn announce(&mut self, announcement: &Announcement) {
        if let Err(e) = self.acknowledge(announcement) {
            warn!(error = %e, "Failed to show announcement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally_toe::{Board, ScoreLedger};

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("4\n"), Input::Play(4));
        assert_eq!(Input::parse("17"), Input::Play(17));
        assert_eq!(Input::parse("top right"), Input::Play(2));
        assert_eq!(Input::parse("Q"), Input::Quit);
        assert_eq!(Input::parse("hello"), Input::Unknown);
    }

    #[test]
    fn test_redraw_writes_scores() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        let board = Board::new().apply_move(0, Player::X);
        let ledger = ScoreLedger::zero().record_win(Player::O);
        console.redraw(&Snapshot {
            board: &board,
            active: Player::O,
            ledger: &ledger,
        });

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("X|1|2"));
        assert!(text.contains("Next Player: O"));
        assert!(text.contains("Player X wins: 0"));
        assert!(text.contains("Player O wins: 1"));
    }

    #[test]
    fn test_announce_waits_for_enter() {
        let mut console = Console::new(Cursor::new(b"\n5\n".to_vec()), Vec::new());
        console.announce(&Announcement::Draw);
        assert_eq!(console.prompt(Player::X).unwrap(), Some(Input::Play(5)));
        assert_eq!(console.prompt(Player::O).unwrap(), None);

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("Game ended in a draw!"));
    }
}
