//! Terminal module - draws the session state with crossterm.
//!
//! Rendering is pull-based: after every engine call that changed state the
//! main loop asks for a full redraw from the session's read accessors. The
//! board is small enough that diffing would not pay for itself.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{pieces::shape, Session};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal column where the side panel starts (board + border + gap).
const PANEL_X: u16 = (BOARD_WIDTH as u16) * 2 + 4;

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed halfway.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame from current session state.
    pub fn draw(&mut self, session: &Session) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_board(session)?;
        self.draw_panel(session)?;
        if session.game_over() {
            self.draw_game_over()?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_board(&mut self, session: &Session) -> Result<()> {
        let active = session.current().cells();
        let active_kind = session.current().kind;
        let inner = (BOARD_WIDTH as usize) * 2;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

        for y in 0..BOARD_HEIGHT as i8 {
            self.stdout.queue(cursor::MoveTo(0, (y + 1) as u16))?;
            self.stdout.queue(SetForegroundColor(Color::White))?;
            self.stdout.queue(Print("│"))?;

            for x in 0..BOARD_WIDTH as i8 {
                let kind = if active.contains(&(x, y)) {
                    Some(active_kind)
                } else {
                    session.board().get(x, y).flatten()
                };
                match kind {
                    Some(kind) => {
                        self.stdout.queue(SetForegroundColor(kind_color(kind)))?;
                        self.stdout.queue(Print("██"))?;
                    }
                    None => {
                        self.stdout.queue(Print("  "))?;
                    }
                }
            }

            self.stdout.queue(SetForegroundColor(Color::White))?;
            self.stdout.queue(Print("│"))?;
        }

        self.stdout
            .queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner))))?;

        Ok(())
    }

    fn draw_panel(&mut self, session: &Session) -> Result<()> {
        let mut y = 1;
        self.put_label(y, "SCORE")?;
        self.put_value(y + 1, &session.score().to_string())?;
        y += 3;
        self.put_label(y, "LEVEL")?;
        self.put_value(y + 1, &session.level().to_string())?;
        y += 3;
        self.put_label(y, "LINES")?;
        self.put_value(y + 1, &session.lines().to_string())?;
        y += 3;

        self.put_label(y, "NEXT")?;
        let next = session.next().kind;
        let cells = shape(next, Rotation::North);
        self.stdout.queue(SetForegroundColor(kind_color(next)))?;
        for row in 0..4i8 {
            self.stdout.queue(cursor::MoveTo(PANEL_X, y + 1 + row as u16))?;
            let mut line = String::with_capacity(8);
            for col in 0..4i8 {
                if cells.contains(&(col, row)) {
                    line.push_str("██");
                } else {
                    line.push_str("  ");
                }
            }
            self.stdout.queue(Print(line))?;
        }
        y += 6;

        self.stdout.queue(SetForegroundColor(Color::DarkGrey))?;
        for (i, line) in [
            "←/a  move left",
            "→/d  move right",
            "↓/s  move down",
            "↑/w  rotate",
            "spc  hard drop",
            "r    restart",
            "q    quit",
        ]
        .iter()
        .enumerate()
        {
            self.stdout.queue(cursor::MoveTo(PANEL_X, y + i as u16))?;
            self.stdout.queue(Print(line))?;
        }

        Ok(())
    }

    fn draw_game_over(&mut self) -> Result<()> {
        let mid = BOARD_HEIGHT as u16 / 2;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(SetForegroundColor(Color::Red))?;
        self.stdout.queue(cursor::MoveTo(6, mid))?;
        self.stdout.queue(Print("GAME OVER"))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(cursor::MoveTo(3, mid + 1))?;
        self.stdout.queue(Print("press r to restart"))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn put_label(&mut self, y: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(PANEL_X, y))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(SetForegroundColor(Color::White))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn put_value(&mut self, y: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(PANEL_X, y))?;
        self.stdout.queue(SetForegroundColor(Color::Grey))?;
        self.stdout.queue(Print(text))?;
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Color tag per piece kind.
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::O => Color::DarkYellow,
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
        PieceKind::S => Color::Green,
    }
}
