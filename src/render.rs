use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::components::{Pos, GRID_SIZE};
use crate::game::Frame;

/// Terminal columns per maze cell.
const CELL_W: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Glyph {
    Player,
    Ghost,
    Wall,
    Empty,
    Pellet,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

const BLANK: Cell = Cell {
    glyph: Glyph::Empty,
    color: Color::Reset,
};

/// Draws frames onto a terminal, only rewriting cells that changed since
/// the previous frame.
pub struct Renderer<W: Write> {
    out: W,
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: Vec::new(),
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let (cols, rows) = (frame.maze.cols(), frame.maze.rows());
        let needed_h = (rows + 2) as u16;
        let needed_w = (cols * CELL_W) as u16;

        self.out.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            self.out.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            self.out.queue(Print(msg))?;
            self.out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y || self.last.len() != cols * rows
        {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.last = vec![BLANK; cols * rows];
            self.needs_full = true;
        }
        if self.needs_full {
            self.out.queue(Clear(ClearType::All))?;
        }

        let hud = format!("Score: {}  (q to quit)", frame.score);
        if self.needs_full || hud != self.last_hud {
            self.out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            self.out.queue(SetForegroundColor(Color::White))?;
            self.out.queue(Clear(ClearType::CurrentLine))?;
            self.out.queue(Print(&hud))?;
            self.out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let cells = frame_cells(frame);
        for (idx, cell) in cells.into_iter().enumerate() {
            if self.needs_full || cell != self.last[idx] {
                self.last[idx] = cell;
                self.draw_cell(idx % cols, idx / cols, cell)?;
            }
        }
        self.needs_full = false;

        if let Some(message) = frame.message {
            self.draw_banner(frame, message)?;
        }

        self.out.flush()
    }

    fn draw_cell(&mut self, x: usize, y: usize, cell: Cell) -> io::Result<()> {
        let text = match cell.glyph {
            Glyph::Player => "😃",
            Glyph::Ghost => "👻",
            Glyph::Wall => "██",
            Glyph::Empty => "  ",
            Glyph::Pellet => "· ",
        };
        let x_pos = self.origin_x + (x * CELL_W) as u16;
        let y_pos = self.origin_y + y as u16;
        self.out.queue(MoveTo(x_pos, y_pos))?;
        self.out.queue(SetForegroundColor(cell.color))?;
        self.out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            self.out.queue(Print(' '))?;
        }
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn draw_banner(&mut self, frame: &Frame<'_>, message: &str) -> io::Result<()> {
        let y = self.origin_y + frame.maze.rows() as u16;
        self.out.queue(MoveTo(self.origin_x, y))?;
        self.out.queue(SetForegroundColor(Color::Yellow))?;
        self.out.queue(Clear(ClearType::CurrentLine))?;
        self.out
            .queue(Print(format!("{} - Final Score: {}", message, frame.score)))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

/// Row-major cell contents, agents drawn over pellets and floor.
fn frame_cells(frame: &Frame<'_>) -> Vec<Cell> {
    let cols = frame.maze.cols();
    let mut cells = vec![BLANK; cols * frame.maze.rows()];
    for (col, row) in frame.maze.walls() {
        cells[row * cols + col] = Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        };
    }
    let mut paint = |pos: Pos, glyph: Glyph, color: Color| {
        let col = pos.x.div_euclid(GRID_SIZE) as usize;
        let row = pos.y.div_euclid(GRID_SIZE) as usize;
        if let Some(cell) = cells.get_mut(row * cols + col) {
            *cell = Cell { glyph, color };
        }
    };
    for pellet in frame.pellets.iter() {
        paint(pellet, Glyph::Pellet, Color::White);
    }
    paint(frame.player, Glyph::Player, Color::Yellow);
    paint(frame.ghost, Glyph::Ghost, Color::Red);
    cells
}
