use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::collision::Collision;
use crate::config::GameConfig;
use crate::food;
use crate::grid::{Board, Cell, Dir};
use crate::score::{Score, ScoreHistory};
use crate::snake::{Advance, Snake};

pub const TITLE: &str = "Snake - Lavender Edition";

/// Opaque id for something the shell has drawn.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Handle(pub u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellKind {
    Snake,
    Food,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSlot {
    Title,
    Banner,
    Detail,
    Stats,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Start,
    Restart,
    Quit,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Start => "Start Game",
            Button::Restart => "Restart",
            Button::Quit => "Quit",
        }
    }
}

/// Everything the controller needs from whatever puts the game on screen.
pub trait Shell {
    fn draw_cell(&mut self, cell: Cell, kind: CellKind) -> anyhow::Result<Handle>;
    fn remove_cell(&mut self, handle: Handle) -> anyhow::Result<()>;
    fn set_score_label(&mut self, text: &str) -> anyhow::Result<()>;
    fn show_text(&mut self, text: &str, slot: TextSlot) -> anyhow::Result<()>;
    fn show_buttons(&mut self, buttons: &[Button]) -> anyhow::Result<()>;
    fn clear(&mut self) -> anyhow::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    Tick,
    Key(Dir),
    Button(Button),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Collided(Collision),
    BoardFull,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver(Outcome),
    Terminated,
}

/// Single pending tick deadline. Armed after every processed tick, cancelled
/// when the round ends.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

struct Round {
    snake: Snake,
    // shell handles, parallel to the snake body
    segments: VecDeque<Handle>,
    food: Option<(Cell, Handle)>,
    score: Score,
}

impl Round {
    fn start<R: Rng, S: Shell>(
        config: &GameConfig,
        rng: &mut R,
        shell: &mut S,
    ) -> anyhow::Result<Self> {
        let snake = Snake::new(config.spawn, config.start_dir);
        let head = shell.draw_cell(snake.head(), CellKind::Snake)?;
        let score = Score::default();
        shell.set_score_label(&format!("Score: {}", score))?;

        let mut round = Round {
            snake,
            segments: VecDeque::from([head]),
            food: None,
            score,
        };
        round.place_food(&config.board, rng, shell)?;
        Ok(round)
    }

    fn place_food<R: Rng, S: Shell>(
        &mut self,
        board: &Board,
        rng: &mut R,
        shell: &mut S,
    ) -> anyhow::Result<bool> {
        match food::spawn(board, &self.snake.occupied(), rng) {
            Some(cell) => {
                let handle = shell.draw_cell(cell, CellKind::Food)?;
                log::debug!("food placed at {:?}", cell);
                self.food = Some((cell, handle));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// One movement step. Returns how the round ended, if it did.
    fn step<R: Rng, S: Shell>(
        &mut self,
        board: &Board,
        rng: &mut R,
        shell: &mut S,
    ) -> anyhow::Result<Option<Outcome>> {
        let head = match self.snake.advance(board) {
            Advance::Collided(hit) => return Ok(Some(Outcome::Collided(hit))),
            Advance::Moved(head) => head,
        };

        let ate_food = self.food.is_some_and(|(cell, _)| cell == head);
        if ate_food {
            if let Some((_, handle)) = self.food.take() {
                shell.remove_cell(handle)?;
            }
            self.score.on_food_eaten();
            shell.set_score_label(&format!("Score: {}", self.score))?;
        }

        self.segments.push_front(shell.draw_cell(head, CellKind::Snake)?);
        if self.snake.grow_or_shrink(ate_food).is_some() {
            if let Some(handle) = self.segments.pop_back() {
                shell.remove_cell(handle)?;
            }
        }

        if ate_food && !self.place_food(board, rng, shell)? {
            return Ok(Some(Outcome::BoardFull));
        }
        Ok(None)
    }
}

pub struct Controller<R> {
    config: GameConfig,
    history: ScoreHistory,
    rng: R,
    ticker: Ticker,
    phase: Phase,
    round: Option<Round>,
}

impl<R: Rng> Controller<R> {
    pub fn new(config: GameConfig, history: ScoreHistory, rng: R) -> Self {
        let ticker = Ticker::new(config.tick_interval);
        Controller {
            config,
            history,
            rng,
            ticker,
            phase: Phase::Menu,
            round: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    pub fn board(&self) -> Board {
        self.config.board
    }

    #[cfg(test)]
    pub fn snake(&self) -> Option<&Snake> {
        self.round.as_ref().map(|round| &round.snake)
    }

    #[cfg(test)]
    pub fn food(&self) -> Option<Cell> {
        self.round.as_ref().and_then(|round| round.food.map(|(cell, _)| cell))
    }

    pub fn score(&self) -> Option<Score> {
        self.round.as_ref().map(|round| round.score)
    }

    /// Buttons currently on screen.
    pub fn buttons(&self) -> &'static [Button] {
        match self.phase {
            Phase::Menu => &[Button::Start, Button::Quit],
            Phase::GameOver(_) => &[Button::Restart, Button::Quit],
            Phase::Playing | Phase::Terminated => &[],
        }
    }

    /// Draws the main menu.
    pub fn open<S: Shell>(&mut self, shell: &mut S) -> anyhow::Result<()> {
        self.phase = Phase::Menu;
        shell.clear()?;
        shell.show_text(TITLE, TextSlot::Title)?;
        shell.show_buttons(self.buttons())
    }

    pub fn handle<S: Shell>(
        &mut self,
        event: Event,
        now: Instant,
        shell: &mut S,
    ) -> anyhow::Result<Flow> {
        match (self.phase, event) {
            (Phase::Terminated, _) => return Ok(Flow::Quit),
            (_, Event::Button(Button::Quit)) => {
                self.ticker.cancel();
                self.phase = Phase::Terminated;
                log::info!("quitting after {} finished game(s)", self.history.len());
                return Ok(Flow::Quit);
            }
            (Phase::Menu, Event::Button(Button::Start))
            | (Phase::GameOver(_), Event::Button(Button::Restart)) => self.start(now, shell)?,
            (Phase::Playing, Event::Key(dir)) => {
                if let Some(round) = self.round.as_mut() {
                    round.snake.set_direction(dir);
                }
            }
            (Phase::Playing, Event::Tick) if self.ticker.is_armed() => self.tick(now, shell)?,
            (phase, event) => log::trace!("ignoring {:?} in {:?}", event, phase),
        }
        Ok(Flow::Continue)
    }

    fn start<S: Shell>(&mut self, now: Instant, shell: &mut S) -> anyhow::Result<()> {
        shell.clear()?;
        shell.show_buttons(&[])?;
        self.round = Some(Round::start(&self.config, &mut self.rng, shell)?);
        self.phase = Phase::Playing;
        self.ticker.arm(now);
        log::info!("game {} started", self.history.len() + 1);
        Ok(())
    }

    fn tick<S: Shell>(&mut self, now: Instant, shell: &mut S) -> anyhow::Result<()> {
        self.ticker.cancel();
        let Some(round) = self.round.as_mut() else {
            return Ok(());
        };
        match round.step(&self.config.board, &mut self.rng, shell)? {
            Some(outcome) => self.finish(outcome, shell),
            None => {
                self.ticker.arm(now);
                Ok(())
            }
        }
    }

    fn finish<S: Shell>(&mut self, outcome: Outcome, shell: &mut S) -> anyhow::Result<()> {
        self.ticker.cancel();
        self.phase = Phase::GameOver(outcome);
        let score = self.score().unwrap_or_default();
        self.history.on_game_over(score);
        log::info!("game over ({:?}) with score {}", outcome, score);

        let banner = match outcome {
            Outcome::Collided(_) => "GAME OVER",
            Outcome::BoardFull => "YOU WIN",
        };
        shell.show_text(banner, TextSlot::Banner)?;
        shell.show_text(&format!("Your Score: {}", score), TextSlot::Detail)?;
        if let Some(summary) = self.history.summary() {
            shell.show_text(&summary.to_string(), TextSlot::Stats)?;
        }
        shell.show_buttons(self.buttons())
    }
}
