use std::cell::Cell;
use std::rc::Rc;

use runstack_core::runner::RunnerHandle;
use runstack_core::state::{RunState, StateBase};

use crate::canvas::TextCanvas;

pub type DemoHandle = RunnerHandle<TextCanvas>;

const TITLE_SECONDS: f32 = 0.5;
const GAME_SECONDS: f32 = 4.0;
const GAME_OVER_SECONDS: f32 = 1.0;
const POINTS_EVERY: f32 = 0.25;

/// Score shared between the game and its HUD.
#[derive(Debug, Clone, Default)]
pub struct Score(Rc<Cell<u32>>);

impl Score {
    pub fn add(&self, points: u32) {
        self.0.set(self.0.get().saturating_add(points));
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

// ── Title ─────────────────────────────────────────────────────────────────

/// Splash screen. Switches itself out for a [`GameState`].
pub struct TitleState {
    base: StateBase,
    handle: DemoHandle,
    score: Score,
    shown: f32,
    leaving: bool,
}

impl TitleState {
    pub const NAME: &'static str = "title";

    pub fn new(handle: DemoHandle, score: Score) -> Self {
        Self {
            base: StateBase::suspend_lower(),
            handle,
            score,
            shown: 0.0,
            leaving: false,
        }
    }
}

impl RunState<TextCanvas> for TitleState {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> Option<&StateBase> {
        Some(&self.base)
    }

    fn on_update(&mut self, dt: f32) {
        self.shown += dt;
        if self.shown >= TITLE_SECONDS && !self.leaving {
            self.leaving = true;
            self.handle
                .switch_state(GameState::new(self.handle.clone(), self.score.clone()));
        }
    }

    fn on_render(&mut self, _dt: f32, ctx: &mut TextCanvas) {
        ctx.draw("RUNSTACK  press any key");
    }
}

// ── Game ──────────────────────────────────────────────────────────────────

/// The round itself. Owns a HUD layer above it and hands over to
/// [`GameOverState`] when the round ends.
pub struct GameState {
    base: StateBase,
    handle: DemoHandle,
    score: Score,
    elapsed: f32,
    since_points: f32,
}

impl GameState {
    pub const NAME: &'static str = "game";

    pub fn new(handle: DemoHandle, score: Score) -> Self {
        Self {
            base: StateBase::suspend_lower(),
            handle,
            score,
            elapsed: 0.0,
            since_points: 0.0,
        }
    }
}

impl RunState<TextCanvas> for GameState {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> Option<&StateBase> {
        Some(&self.base)
    }

    fn on_start(&mut self) {
        self.handle.add_state(HudState::new(self.score.clone()));
    }

    fn on_update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.since_points += dt;
        let ticks = (self.since_points / POINTS_EVERY).floor();
        if ticks >= 1.0 {
            self.score.add((ticks as u32).saturating_mul(10));
            self.since_points -= ticks * POINTS_EVERY;
        }

        if self.elapsed >= GAME_SECONDS {
            log::info!("round over at {:.2}s", self.elapsed);
            self.base.stop();
        }
    }

    fn on_render(&mut self, _dt: f32, ctx: &mut TextCanvas) {
        ctx.draw(format!("game      t={:.2}s", self.elapsed));
    }

    fn on_stop(&mut self) {
        if self.base.is_stopped() {
            self.handle.add_state(GameOverState::new(self.score.get()));
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────

/// Score overlay. Lets the game below keep running.
pub struct HudState {
    base: StateBase,
    score: Score,
}

impl HudState {
    pub const NAME: &'static str = "hud";

    pub fn new(score: Score) -> Self {
        Self {
            base: StateBase::run_lower(),
            score,
        }
    }
}

impl RunState<TextCanvas> for HudState {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> Option<&StateBase> {
        Some(&self.base)
    }

    fn on_render(&mut self, _dt: f32, ctx: &mut TextCanvas) {
        ctx.draw(format!("hud       score={}", self.score.get()));
    }
}

// ── Pause ─────────────────────────────────────────────────────────────────

/// Freezes everything below it until popped by the driver.
#[derive(Default)]
pub struct PauseState {
    base: StateBase,
    paused_for: f32,
}

impl PauseState {
    pub const NAME: &'static str = "pause";

    pub fn new() -> Self {
        Self::default()
    }
}

impl RunState<TextCanvas> for PauseState {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> Option<&StateBase> {
        Some(&self.base)
    }

    fn on_update(&mut self, dt: f32) {
        self.paused_for += dt;
    }

    fn on_render(&mut self, _dt: f32, ctx: &mut TextCanvas) {
        ctx.draw(format!("PAUSED    {:.1}s", self.paused_for));
    }

    fn on_stop(&mut self) {
        log::info!("resumed after {:.2}s", self.paused_for);
    }
}

// ── Game over ─────────────────────────────────────────────────────────────

/// Final score screen. Stops itself after a moment.
pub struct GameOverState {
    base: StateBase,
    final_score: u32,
    shown: f32,
}

impl GameOverState {
    pub const NAME: &'static str = "game-over";

    pub fn new(final_score: u32) -> Self {
        Self {
            base: StateBase::suspend_lower(),
            final_score,
            shown: 0.0,
        }
    }
}

impl RunState<TextCanvas> for GameOverState {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> Option<&StateBase> {
        Some(&self.base)
    }

    fn on_update(&mut self, dt: f32) {
        self.shown += dt;
        if self.shown >= GAME_OVER_SECONDS {
            self.base.stop();
        }
    }

    fn on_render(&mut self, _dt: f32, ctx: &mut TextCanvas) {
        ctx.draw(format!("GAME OVER final score={}", self.final_score));
    }
}

#[cfg(test)]
mod tests {
    use runstack_core::runner::StateRunner;

    use super::*;

    fn top(runner: &StateRunner<TextCanvas>) -> Option<String> {
        runner.top().map(|state| state.name().to_string())
    }

    fn names(runner: &StateRunner<TextCanvas>) -> Vec<String> {
        runner.iter().map(|state| state.name().to_string()).collect()
    }

    #[test]
    fn title_hands_over_to_game_with_hud() {
        let mut runner = StateRunner::new();
        let score = Score::default();
        runner.add_state(TitleState::new(runner.handle(), score.clone()));

        runner.update(TITLE_SECONDS);
        assert_eq!(names(&runner), [GameState::NAME, HudState::NAME]);
    }

    #[test]
    fn pause_freezes_the_round() {
        let mut runner = StateRunner::new();
        let score = Score::default();
        runner.add_state(GameState::new(runner.handle(), score.clone()));
        runner.update(0.0);
        assert_eq!(top(&runner).as_deref(), Some(HudState::NAME));

        runner.update(POINTS_EVERY);
        let before = score.get();
        assert!(before > 0);

        runner.add_state(PauseState::new());
        for _ in 0..10 {
            runner.update(POINTS_EVERY);
        }
        assert_eq!(score.get(), before);

        let mut canvas = TextCanvas::new();
        runner.render(0.0, &mut canvas);
        assert!(canvas.present().contains("PAUSED"));
        assert!(!canvas.present().contains("hud"));

        runner.pop_state();
        runner.update(POINTS_EVERY);
        assert!(score.get() > before);
    }

    #[test]
    fn round_end_removes_hud_and_shows_game_over() {
        let mut runner = StateRunner::new();
        let score = Score::default();
        runner.add_state(GameState::new(runner.handle(), score.clone()));
        runner.update(0.0);

        runner.update(GAME_SECONDS);
        assert_eq!(names(&runner), [GameOverState::NAME]);

        runner.update(GAME_OVER_SECONDS);
        assert!(runner.is_empty());
    }

    #[test]
    fn hud_draws_over_game() {
        let mut runner = StateRunner::new();
        let score = Score::default();
        runner.add_state(GameState::new(runner.handle(), score.clone()));
        runner.update(0.0);

        let mut canvas = TextCanvas::new();
        runner.render(0.0, &mut canvas);
        let frame = canvas.present();
        let game = frame.find("game");
        let hud = frame.find("hud");
        assert!(game.is_some() && hud.is_some());
        assert!(game < hud);
    }

    #[test]
    fn huge_step_scores_in_one_go() {
        let mut runner = StateRunner::new();
        let score = Score::default();
        runner.add_state(GameState::new(runner.handle(), score.clone()));
        runner.update(0.0);

        runner.update(1.0e8);
        assert_eq!(score.get(), 4_000_000_000);
        assert_eq!(names(&runner), [GameOverState::NAME]);
    }

    #[test]
    fn popped_round_does_not_show_game_over() {
        let mut runner = StateRunner::new();
        runner.add_state(GameState::new(runner.handle(), Score::default()));
        runner.update(0.0);

        runner.pop_state();
        let game = runner.pop_state();
        assert_eq!(game.as_ref().map(|state| state.name()), Some(GameState::NAME));

        runner.update(0.0);
        assert!(runner.is_empty());
        assert_eq!(runner.handle().pending(), 0);
    }
}
