mod collision;
mod config;
mod food;
mod frontend;
mod game;
mod grid;
mod input;
mod score;
mod snake;

use anyhow::Context;
use console::Term;

use config::GameConfig;
use game::Controller;
use score::ScoreHistory;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!("stdout is not a terminal");
    }

    let mut config = GameConfig::default();
    let (height, width) = term.size();
    let (cols, rows) = frontend::board_capacity(height, width);
    config.fit_within(cols, rows)?;

    term.clear_screen()?;
    term.hide_cursor()?;

    let mut controller = Controller::new(config, ScoreHistory::new(), rand::thread_rng());
    let played = frontend::play(term.clone(), &mut controller);

    term.show_cursor().context("restoring the cursor")?;
    term.clear_screen()?;
    log::info!(
        "finished {} game(s), scores {:?}",
        controller.history().len(),
        controller.history().scores()
    );

    played
}
