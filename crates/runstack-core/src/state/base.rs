use std::cell::Cell;
use std::rc::Rc;

use super::RunFlag;

/// Shared stop request for a single state.
///
/// Cloning yields another handle to the same flag, so code outside the state
/// (a menu, a script, the driver loop) can request removal without holding a
/// reference into the runner. The request is observed at the next
/// `StateRunner::update` sweep.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the state as stopped. There is no way to clear the flag.
    #[inline]
    pub fn stop(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Embeddable base for concrete states.
///
/// Holds the run flag chosen at construction and the state's stop signal.
/// A state exposes it through [`RunState::base`](super::RunState::base) and
/// inherits `run_flag`, `is_stopped` and `suspend_lower` for free:
///
/// ```rust
/// use runstack_core::state::{RunState, StateBase};
///
/// struct Overlay {
///     base: StateBase,
/// }
///
/// impl RunState for Overlay {
///     fn base(&self) -> Option<&StateBase> {
///         Some(&self.base)
///     }
/// }
///
/// let overlay = Overlay { base: StateBase::run_lower() };
/// assert!(!overlay.suspend_lower());
/// ```
#[derive(Debug, Default)]
pub struct StateBase {
    run_flag: RunFlag,
    stop: StopSignal,
}

impl StateBase {
    pub fn new(run_flag: RunFlag) -> Self {
        Self {
            run_flag,
            stop: StopSignal::new(),
        }
    }

    /// Base for a state that hides everything below it.
    pub fn suspend_lower() -> Self {
        Self::new(RunFlag::SuspendLower)
    }

    /// Base for an overlay that lets lower states keep running.
    pub fn run_lower() -> Self {
        Self::new(RunFlag::RunLower)
    }

    #[inline]
    pub fn run_flag(&self) -> RunFlag {
        self.run_flag
    }

    /// Requests removal at the next update sweep.
    #[inline]
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Returns a handle sharing this state's stop flag.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_suspends_lower() {
        let base = StateBase::default();
        assert_eq!(base.run_flag(), RunFlag::SuspendLower);
        assert!(!base.is_stopped());
    }

    #[test]
    fn stop_signal_is_shared() {
        let base = StateBase::run_lower();
        let signal = base.stop_signal();
        let other = signal.clone();

        assert!(!base.is_stopped());
        other.stop();
        assert!(base.is_stopped());
        assert!(signal.is_stopped());
    }

    #[test]
    fn stopping_twice_stays_stopped() {
        let base = StateBase::suspend_lower();
        base.stop();
        base.stop();
        assert!(base.is_stopped());
    }
}
