use std::collections::HashSet;

use rand::Rng;

use crate::grid::{Board, Cell};

/// Picks a uniformly random free cell by resampling until one is not in
/// `occupied`. Returns `None` only when the board has no free cell left.
pub fn spawn<R: Rng + ?Sized>(
    board: &Board,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Option<Cell> {
    let free = board
        .area()
        .saturating_sub(occupied.iter().filter(|&&c| board.contains(c)).count());
    if free == 0 {
        return None;
    }

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let cell = Cell::new(rng.gen_range(0..board.cols), rng.gen_range(0..board.rows));
        if !occupied.contains(&cell) {
            log::trace!("food spawned at {:?} after {} attempt(s)", cell, attempts);
            return Some(cell);
        }
    }
}
