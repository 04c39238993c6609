//! State stack runner.
//!
//! [`StateRunner`] owns the stack and drives the per-frame update/render walk.
//! [`RunnerHandle`] lets states queue stack changes that the runner applies
//! after the current update.

mod config;
mod handle;
mod state_runner;

pub use config::RunnerConfig;
pub use handle::RunnerHandle;
pub use state_runner::StateRunner;
