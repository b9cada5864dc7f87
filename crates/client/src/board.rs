use std::io::Write;

use hub_shared::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
  Mine,
  Others,
}

/// A message as it should appear on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
  pub ownership: Ownership,
  pub message: Message,
}

/// Where reconciled views are drawn.
pub trait Board {
  /// Throw away whatever is shown and draw `entries` from scratch.
  fn redraw(&mut self, entries: &[BoardEntry]);
}

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the board as plain lines on a terminal.
pub struct TerminalBoard<W: Write> {
  out: W,
  clear: bool,
}

impl TerminalBoard<std::io::Stdout> {
  #[must_use]
  pub fn stdout() -> Self {
    Self {
      out: std::io::stdout(),
      clear: true,
    }
  }
}

impl<W: Write> TerminalBoard<W> {
  /// A board writing to `out` without terminal escape codes.
  pub const fn plain(out: W) -> Self {
    Self { out, clear: false }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  fn write_entries(&mut self, entries: &[BoardEntry]) -> std::io::Result<()> {
    if self.clear {
      self.out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    for entry in entries {
      writeln!(self.out, "{}", render_line(entry))?;
    }
    self.out.flush()
  }
}

impl<W: Write> Board for TerminalBoard<W> {
  fn redraw(&mut self, entries: &[BoardEntry]) {
    if let Err(err) = self.write_entries(entries) {
      tracing::warn!(error = %err, "failed to draw board");
    }
  }
}

fn render_line(entry: &BoardEntry) -> String {
  let message = &entry.message;
  let marker = match entry.ownership {
    Ownership::Mine => '>',
    Ownership::Others => ' ',
  };
  format!(
    "{marker} [{}] {}: {}",
    message.time,
    message.sender.as_deref().unwrap_or("null"),
    message.text.as_deref().unwrap_or("null"),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(ownership: Ownership, sender: Option<&str>, text: &str) -> BoardEntry {
    BoardEntry {
      ownership,
      message: Message {
        text: Some(text.to_owned()),
        sender: sender.map(str::to_owned),
        session_id: None,
        time: "10:30".to_owned(),
      },
    }
  }

  #[test]
  fn marks_own_messages() {
    let mut board = TerminalBoard::plain(Vec::new());
    board.redraw(&[
      entry(Ownership::Others, Some("Ann"), "hello"),
      entry(Ownership::Mine, Some("Bob"), "hi"),
    ]);

    let out = String::from_utf8(board.into_inner()).unwrap();
    assert_eq!(out, "  [10:30] Ann: hello\n> [10:30] Bob: hi\n");
  }

  #[test]
  fn shows_missing_sender_as_null() {
    let mut board = TerminalBoard::plain(Vec::new());
    board.redraw(&[entry(Ownership::Others, None, "who am i")]);

    let out = String::from_utf8(board.into_inner()).unwrap();
    assert_eq!(out, "  [10:30] null: who am i\n");
  }
}
