use std::collections::VecDeque;

use crate::grid::{Board, Cell};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// Checks a prospective head against the board edges and the body as it is
/// before this tick's move. The tail is still counted as occupied even though
/// it would be vacated by the same move.
pub fn check(head: Cell, board: &Board, body: &VecDeque<Cell>) -> Option<Collision> {
    if !board.contains(head) {
        return Some(Collision::Wall);
    }
    if body.iter().skip(1).any(|&seg| seg == head) {
        return Some(Collision::Body);
    }
    None
}
