use std::time::Duration;

use crate::grid::{Board, Cell, Dir};

/// Gameplay settings. Only the terminal front-end ever adjusts these, to fit
/// the board into the available screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board: Board,
    pub tick_interval: Duration,
    pub spawn: Cell,
    pub start_dir: Dir,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::from_pixels(600, 600),
            tick_interval: Duration::from_millis(120),
            spawn: Cell::from_pixel(60, 60),
            start_dir: Dir::Right,
        }
    }
}

impl GameConfig {
    #[cfg(test)]
    pub fn with_board(cols: i32, rows: i32) -> Self {
        Self {
            board: Board::new(cols, rows),
            ..Default::default()
        }
    }

    /// Shrinks the board so it is at most `cols` x `rows`, keeping the spawn
    /// cell on it. Fails when there is no room for the spawn cell plus one
    /// free cell in front of it.
    pub fn fit_within(&mut self, cols: i32, rows: i32) -> anyhow::Result<()> {
        let board = Board::new(self.board.cols.min(cols), self.board.rows.min(rows));
        let ahead = self.spawn + self.start_dir;
        if !board.contains(self.spawn) || !board.contains(ahead) {
            anyhow::bail!(
                "terminal too small: {}x{} cells available, need room around {:?}",
                cols,
                rows,
                self.spawn
            );
        }
        if board != self.board {
            log::warn!(
                "shrinking board from {}x{} to {}x{} to fit the terminal",
                self.board.cols,
                self.board.rows,
                board.cols,
                board.rows
            );
            self.board = board;
        }
        Ok(())
    }
}
