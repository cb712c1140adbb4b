use std::{
    collections::HashMap,
    io::Write,
    sync::mpsc::{channel, Receiver, RecvTimeoutError},
    thread,
    time::Instant,
};

use anyhow::Context;
use console::{measure_text_width, style, Key, Term};
use rand::Rng;

use crate::game::{Button, CellKind, Controller, Event, Flow, Handle, Shell, TextSlot};
use crate::grid::{Board, Cell};
use crate::input;

// each cell is two columns wide so the board looks square
const CELL_WIDTH: usize = 2;
// border above + border below + score line + button line
const EXTRA_ROWS: usize = 4;

/// Board size (cols, rows) that fits a terminal of `height` x `width`.
pub fn board_capacity(height: u16, width: u16) -> (i32, i32) {
    let cols = (width as usize).saturating_sub(2) / CELL_WIDTH;
    let rows = (height as usize).saturating_sub(EXTRA_ROWS);
    (cols as i32, rows as i32)
}

pub struct ConsoleShell {
    term: Term,
    board: Board,
    next_handle: u64,
    cells: HashMap<Handle, Cell>,
}

impl ConsoleShell {
    pub fn new(term: Term, board: Board) -> Self {
        ConsoleShell {
            term,
            board,
            next_handle: 0,
            cells: HashMap::new(),
        }
    }

    fn frame_width(&self) -> usize {
        self.board.cols as usize * CELL_WIDTH + 2
    }

    fn score_row(&self) -> usize {
        self.board.rows as usize + 2
    }

    fn write_at(&mut self, col: usize, row: usize, text: &str) -> anyhow::Result<()> {
        self.term.move_cursor_to(col, row)?;
        self.term.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_cell(&mut self, cell: Cell, text: &str) -> anyhow::Result<()> {
        let col = 1 + cell.col as usize * CELL_WIDTH;
        let row = 1 + cell.row as usize;
        self.write_at(col, row, text)
    }

    fn draw_border(&mut self) -> anyhow::Result<()> {
        let width = self.frame_width();
        let height = self.board.rows as usize + 2;

        let border_block = "█";
        let top_border = format!("{}", style(border_block.repeat(width)).magenta());
        self.write_at(0, 0, &top_border)?;
        self.write_at(0, height - 1, &top_border)?;
        let side = format!("{}", style(border_block).magenta());
        for row in 1..height - 1 {
            self.write_at(0, row, &side)?;
            self.write_at(width - 1, row, &side)?;
        }
        Ok(())
    }
}

impl Shell for ConsoleShell {
    fn draw_cell(&mut self, cell: Cell, kind: CellKind) -> anyhow::Result<Handle> {
        let glyph = match kind {
            CellKind::Snake => format!("{}", style("  ").on_color256(205)),
            CellKind::Food => format!("{}", style("()").color256(170).bold()),
        };
        self.write_cell(cell, &glyph)?;
        self.next_handle += 1;
        let handle = Handle(self.next_handle);
        self.cells.insert(handle, cell);
        Ok(handle)
    }

    fn remove_cell(&mut self, handle: Handle) -> anyhow::Result<()> {
        match self.cells.remove(&handle) {
            Some(cell) => self.write_cell(cell, "  "),
            None => {
                log::debug!("remove_cell for unknown {:?}", handle);
                Ok(())
            }
        }
    }

    fn set_score_label(&mut self, text: &str) -> anyhow::Result<()> {
        let row = self.score_row();
        self.term.move_cursor_to(0, row)?;
        self.term.clear_line()?;
        let label = format!("{}", style(text).magenta().bold());
        self.term.write_all(label.as_bytes())?;
        Ok(())
    }

    fn show_text(&mut self, text: &str, slot: TextSlot) -> anyhow::Result<()> {
        let middle = 1 + self.board.rows as usize / 2;
        let row = match slot {
            TextSlot::Title => middle.saturating_sub(2),
            TextSlot::Banner => middle,
            TextSlot::Detail => middle + 2,
            TextSlot::Stats => middle + 4,
        }
        .min(self.board.rows as usize);
        let col = self.frame_width().saturating_sub(measure_text_width(text)) / 2;
        let styled = match slot {
            TextSlot::Title | TextSlot::Banner => format!("{}", style(text).magenta().bold()),
            TextSlot::Detail | TextSlot::Stats => format!("{}", style(text).magenta()),
        };
        self.write_at(col, row, &styled)
    }

    fn show_buttons(&mut self, buttons: &[Button]) -> anyhow::Result<()> {
        let row = self.score_row() + 1;
        self.term.move_cursor_to(0, row)?;
        self.term.clear_line()?;
        let line = buttons
            .iter()
            .map(|&b| {
                let key = style(format!("[{}]", input::hint(b))).black().on_magenta();
                format!("{} {}", key, b.label())
            })
            .collect::<Vec<_>>()
            .join("   ");
        self.term.write_all(line.as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.term.clear_screen()?;
        self.cells.clear();
        self.draw_border()
    }
}

fn spawn_key_reader(term: Term) -> Receiver<Key> {
    let (tx, rx) = channel();
    thread::spawn(move || loop {
        match term.read_key() {
            Ok(key) => {
                if tx.send(key).is_err() {
                    break;
                }
            }
            Err(err) => {
                log::warn!("stopped reading keys: {}", err);
                break;
            }
        }
    });
    rx
}

/// Pumps key presses and tick deadlines into the controller until it quits
/// or the keyboard goes away.
pub fn play<R: Rng>(term: Term, controller: &mut Controller<R>) -> anyhow::Result<()> {
    let keys = spawn_key_reader(term.clone());
    let mut shell = ConsoleShell::new(term, controller.board());
    controller.open(&mut shell).context("drawing the menu")?;

    loop {
        let received = match controller.ticker().deadline() {
            Some(deadline) => {
                keys.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => keys.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        let event = match received {
            Ok(key) => input::event_for(&key, controller.buttons()),
            Err(RecvTimeoutError::Timeout) => controller
                .ticker()
                .due(Instant::now())
                .then_some(Event::Tick),
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("keyboard closed, leaving");
                break;
            }
        };

        let Some(event) = event else {
            continue;
        };
        if controller.handle(event, Instant::now(), &mut shell)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_leaves_room_for_frame_and_labels() {
        assert_eq!(board_capacity(34, 62), (30, 30));
        assert_eq!(board_capacity(24, 80), (39, 20));
        assert_eq!(board_capacity(2, 1), (0, 0));
    }
}
