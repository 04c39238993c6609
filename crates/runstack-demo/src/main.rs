//! Scripted run of the state stack: title, a round with a HUD overlay, a
//! pause in the middle of the round, and the game-over screen.
//!
//! Set `RUST_LOG=runstack_core=debug` to watch pushes, pops and sweeps.

mod canvas;
mod config;
mod states;

use anyhow::Result;

use runstack_core::logging::{init_logging, LoggingConfig};
use runstack_core::runner::{RunnerConfig, StateRunner};

use crate::canvas::TextCanvas;
use crate::config::DemoConfig;
use crate::states::{HudState, PauseState, Score, TitleState};

/// Frames at which the driver opens and closes the pause menu.
const PAUSE_AT: u64 = 150;
const RESUME_AT: u64 = 210;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env()?;
    log::info!("{config:?}");

    let mut runner: StateRunner<TextCanvas> = StateRunner::with_config(RunnerConfig {
        label: "demo".to_string(),
        ..RunnerConfig::default()
    });
    let mut canvas = TextCanvas::new();
    let score = Score::default();

    runner.add_state(TitleState::new(runner.handle(), score.clone()));

    let mut frame = 0u64;
    while frame < config.frames && !runner.is_empty() {
        match frame {
            PAUSE_AT if top_is(&runner, HudState::NAME) => runner.add_state(PauseState::new()),
            RESUME_AT if top_is(&runner, PauseState::NAME) => {
                runner.pop_state();
            }
            _ => {}
        }

        runner.update(config.dt);

        canvas.clear();
        runner.render(config.dt, &mut canvas);

        if config.print_every > 0 && frame % config.print_every == 0 && !canvas.is_empty() {
            println!("frame {frame:>4}  {runner:?}");
            println!("{}", canvas.present());
        }

        frame += 1;
    }

    if runner.is_empty() {
        log::info!("stack drained after {frame} frame(s), final score {}", score.get());
    } else {
        log::warn!("frame budget of {} exhausted with {} state(s) left", config.frames, runner.len());
    }

    runner.destroy();
    Ok(())
}

fn top_is(runner: &StateRunner<TextCanvas>, name: &str) -> bool {
    runner.top().is_some_and(|state| state.name() == name)
}
