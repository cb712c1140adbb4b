use std::collections::{HashSet, VecDeque};

use crate::collision::{self, Collision};
use crate::grid::{Board, Cell, Dir};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Cell),
    Collided(Collision),
}

/// Body segments head first, plus the direction the next tick will move in.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    // direction of the last executed move
    heading: Dir,
    direction: Dir,
}

impl Snake {
    pub fn new(head: Cell, dir: Dir) -> Self {
        Snake {
            body: VecDeque::from([head]),
            heading: dir,
            direction: dir,
        }
    }

    /// Builds a snake from explicit segments, head first.
    #[cfg(test)]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, dir: Dir) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake {
            body,
            heading: dir,
            direction: dir,
        })
    }

    pub fn head(&self) -> Cell {
        // body is never empty
        self.body[0]
    }

    #[cfg(test)]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[cfg(test)]
    pub fn direction(&self) -> Dir {
        self.direction
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queues `requested` for the next tick. A reversal of either the queued
    /// direction or the last executed move is ignored.
    pub fn set_direction(&mut self, requested: Dir) -> bool {
        if self.direction.is_opposite(requested) || self.heading.is_opposite(requested) {
            log::trace!(
                "ignoring {:?} while heading {:?} with {:?} queued",
                requested,
                self.heading,
                self.direction
            );
            return false;
        }
        self.direction = requested;
        true
    }

    /// Moves the head one cell in the queued direction. On collision the body
    /// is left untouched.
    pub fn advance(&mut self, board: &Board) -> Advance {
        let new_head = self.head() + self.direction;
        if let Some(hit) = collision::check(new_head, board, &self.body) {
            return Advance::Collided(hit);
        }
        self.body.push_front(new_head);
        self.heading = self.direction;
        Advance::Moved(new_head)
    }

    /// Keeps the freshly pushed head when food was eaten, otherwise drops the
    /// tail. Returns the vacated cell.
    pub fn grow_or_shrink(&mut self, ate_food: bool) -> Option<Cell> {
        if ate_food || self.body.len() < 2 {
            return None;
        }
        self.body.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
        list.iter().map(|&(c, r)| Cell::new(c, r)).collect()
    }

    #[test]
    fn length_is_kept_unless_food_was_eaten() {
        let board = Board::new(30, 30);
        let mut snake = Snake::from_cells(cells(&[(5, 5), (4, 5), (3, 5)]), Dir::Right).unwrap();

        assert_eq!(snake.advance(&board), Advance::Moved(Cell::new(6, 5)));
        assert_eq!(snake.grow_or_shrink(false), Some(Cell::new(3, 5)));
        assert_eq!(snake.len(), 3);

        assert_eq!(snake.advance(&board), Advance::Moved(Cell::new(7, 5)));
        assert_eq!(snake.grow_or_shrink(true), None);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(7, 5));
    }

    #[test]
    fn reversal_is_rejected_for_every_direction() {
        for dir in Dir::ALL {
            let mut snake = Snake::new(Cell::new(5, 5), dir);
            assert!(!snake.set_direction(dir.opposite()));
            assert_eq!(snake.direction(), dir);
        }
    }

    #[test]
    fn two_quick_turns_cannot_reverse() {
        let board = Board::new(30, 30);
        let mut snake = Snake::from_cells(cells(&[(5, 5), (4, 5)]), Dir::Right).unwrap();

        assert!(snake.set_direction(Dir::Up));
        // still heading right until the tick runs
        assert!(!snake.set_direction(Dir::Left));
        assert_eq!(snake.direction(), Dir::Up);

        assert_eq!(snake.advance(&board), Advance::Moved(Cell::new(5, 4)));
        assert!(snake.set_direction(Dir::Left));
    }

    #[test]
    fn queued_turn_cannot_be_reversed() {
        let mut snake = Snake::new(Cell::new(5, 5), Dir::Right);
        assert!(snake.set_direction(Dir::Up));

        let current = snake.direction();
        assert!(!snake.set_direction(current.opposite()));
        assert_eq!(snake.direction(), Dir::Up);

        let board = Board::new(30, 30);
        assert_eq!(snake.advance(&board), Advance::Moved(Cell::new(5, 4)));
    }

    #[test]
    fn right_wall_ends_the_run() {
        let board = Board::new(10, 10);
        let mut snake = Snake::new(Cell::new(9, 4), Dir::Right);
        assert_eq!(snake.advance(&board), Advance::Collided(Collision::Wall));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(9, 4));
    }

    #[test]
    fn looping_back_onto_the_body_collides() {
        let board = Board::new(10, 10);
        let mut snake =
            Snake::from_cells(cells(&[(3, 3), (4, 3), (4, 4), (3, 4), (2, 4)]), Dir::Left).unwrap();

        assert!(snake.set_direction(Dir::Down));
        assert_eq!(snake.advance(&board), Advance::Collided(Collision::Body));
    }

    #[test]
    fn moving_into_the_tail_collides() {
        let board = Board::new(10, 10);
        let mut snake =
            Snake::from_cells(cells(&[(3, 3), (4, 3), (4, 4), (3, 4)]), Dir::Left).unwrap();

        assert!(snake.set_direction(Dir::Down));
        assert_eq!(snake.advance(&board), Advance::Collided(Collision::Body));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn empty_body_is_refused() {
        assert!(Snake::from_cells(Vec::new(), Dir::Up).is_none());
    }
}
