//! Run-loop state stack.
//!
//! A [`StateRunner`](runner::StateRunner) keeps an ordered stack of
//! [`RunState`](state::RunState)s (title screen, game, HUD, pause menu) and
//! drives them from the application's frame loop. The caller supplies the
//! delta time and the render context; this crate owns neither a clock nor a
//! renderer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`state`] | `RunState`, `RunFlag`, `StateBase`, `StopSignal` |
//! | [`runner`] | `StateRunner`, `RunnerHandle`, `RunnerConfig` |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//!
//! # Quick start
//!
//! ```rust
//! use runstack_core::runner::StateRunner;
//! use runstack_core::state::{RunState, StateBase};
//!
//! struct Game {
//!     base: StateBase,
//!     elapsed: f32,
//! }
//!
//! impl RunState for Game {
//!     fn base(&self) -> Option<&StateBase> {
//!         Some(&self.base)
//!     }
//!
//!     fn on_update(&mut self, dt: f32) {
//!         self.elapsed += dt;
//!         if self.elapsed >= 1.0 {
//!             self.base.stop();
//!         }
//!     }
//! }
//!
//! let mut runner = StateRunner::new();
//! runner.add_state(Game { base: StateBase::default(), elapsed: 0.0 });
//!
//! runner.update(0.5);
//! runner.render(0.5, &mut ());
//! assert_eq!(runner.len(), 1);
//!
//! runner.update(0.5);
//! assert!(runner.is_empty());
//! ```

pub mod logging;
pub mod runner;
pub mod state;
