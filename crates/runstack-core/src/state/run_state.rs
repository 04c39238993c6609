use super::{RunFlag, StateBase};

/// Lifecycle contract for a state held on a [`StateRunner`](crate::runner::StateRunner).
///
/// `C` is the render context handed through to [`on_render`](Self::on_render)
/// untouched (a draw list, a canvas, a GPU target, or `()` for headless use).
///
/// Every method has a default, so a minimal state only needs to pick its flag,
/// usually by embedding a [`StateBase`] and returning it from [`base`](Self::base).
///
/// The runner calls the hooks in this order: `on_start` once when pushed, then
/// any number of `on_update`/`on_render` while eligible, then `on_stop` once
/// when removed. Nothing is called after `on_stop`.
pub trait RunState<C: ?Sized = ()> {
    /// Name used in log lines. Defaults to the concrete type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Embedded base carrying the run flag and stop signal, if any.
    fn base(&self) -> Option<&StateBase> {
        None
    }

    fn run_flag(&self) -> RunFlag {
        self.base().map_or(RunFlag::SuspendLower, StateBase::run_flag)
    }

    /// Whether this state asked to be removed at the next update sweep.
    fn is_stopped(&self) -> bool {
        self.base().is_some_and(StateBase::is_stopped)
    }

    /// Whether states below this one are skipped for the current pass.
    fn suspend_lower(&self) -> bool {
        self.run_flag() == RunFlag::SuspendLower
    }

    /// Called once, right after the state is pushed.
    fn on_start(&mut self) {}

    /// Called once per simulation tick. `dt` is elapsed seconds, never negative.
    fn on_update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Called once per render tick.
    fn on_render(&mut self, dt: f32, ctx: &mut C) {
        let _ = (dt, ctx);
    }

    /// Called once, when the state leaves the stack.
    fn on_stop(&mut self) {}
}
