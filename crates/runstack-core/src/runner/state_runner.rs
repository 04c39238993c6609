use std::fmt;

use crate::state::RunState;

use super::config::RunnerConfig;
use super::handle::{Request, RunnerHandle};

/// Owns a stack of run states and drives them once per frame.
///
/// Index 0 is the bottom (oldest) state; the last index is the top.
///
/// # Dispatch
///
/// [`update`](Self::update) and [`render`](Self::render) walk the stack from
/// the top down, calling the matching hook on each state. After each call the
/// walk stops if that state [suspends lower](RunState::suspend_lower) states.
///
/// # Removal
///
/// At the end of every `update`, the runner looks for the lowest stopped state
/// and removes it together with every state above it, calling `on_stop` from
/// the top down. A layer that only makes sense on top of another (a HUD over a
/// game) is therefore torn down with it, before the lower state's own `on_stop`
/// runs.
///
/// ```text
/// -- top --
/// Hud        <- stopped second
/// Game       <- marked stopped, stopped last
/// Title      <- untouched
/// -- bottom --
/// ```
///
/// Dropping the runner calls [`destroy`](Self::destroy).
pub struct StateRunner<C: ?Sized = ()> {
    label: String,
    stack: Vec<Box<dyn RunState<C>>>,
    handle: RunnerHandle<C>,
}

impl<C: ?Sized> StateRunner<C> {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            label: config.label,
            stack: Vec::with_capacity(config.capacity),
            handle: RunnerHandle::new(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a handle states can keep to request stack changes.
    pub fn handle(&self) -> RunnerHandle<C> {
        self.handle.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&(dyn RunState<C> + 'static)> {
        self.stack.last().map(|state| &**state)
    }

    /// Returns the state at `index`, counted from the bottom.
    pub fn get(&self, index: usize) -> Option<&(dyn RunState<C> + 'static)> {
        self.stack.get(index).map(|state| &**state)
    }

    /// Iterates states bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn RunState<C> + 'static)> {
        self.stack.iter().map(|state| &**state)
    }

    /// Pushes `state` on top and starts it.
    pub fn add_state<S>(&mut self, state: S)
    where
        S: RunState<C> + 'static,
    {
        self.add_boxed(Box::new(state));
    }

    /// Pushes an already boxed state, such as one returned by
    /// [`pop_state`](Self::pop_state), and starts it.
    pub fn add_boxed(&mut self, state: Box<dyn RunState<C>>) {
        log::debug!(
            "[{}] push {} (depth {})",
            self.label,
            state.name(),
            self.stack.len() + 1
        );
        self.stack.push(state);
        if let Some(state) = self.stack.last_mut() {
            state.on_start();
        }
    }

    /// Removes the top state, stops it and hands it back.
    ///
    /// Returns `None` without side effects when the stack is empty.
    pub fn pop_state(&mut self) -> Option<Box<dyn RunState<C>>> {
        let mut state = self.stack.pop()?;
        log::debug!(
            "[{}] pop {} (depth {})",
            self.label,
            state.name(),
            self.stack.len()
        );
        state.on_stop();
        Some(state)
    }

    /// Pops the top state (if any), then pushes `state`.
    ///
    /// The old top is stopped before the new state starts.
    pub fn switch_state<S>(&mut self, state: S) -> Option<Box<dyn RunState<C>>>
    where
        S: RunState<C> + 'static,
    {
        self.switch_boxed(Box::new(state))
    }

    /// Runs one simulation tick.
    ///
    /// Calls `on_update` top-down until a state suspends lower, removes
    /// stopped states, then applies requests queued on the [`RunnerHandle`].
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative delta time: {dt}");

        let mut visited = 0usize;
        for state in self.stack.iter_mut().rev() {
            state.on_update(dt);
            visited += 1;
            if state.suspend_lower() {
                break;
            }
        }
        log::trace!(
            "[{}] update dt={dt:.4} visited {visited}/{}",
            self.label,
            self.stack.len()
        );

        self.sweep_stopped();
        self.apply_requests();
    }

    /// Runs one render tick with the caller's render context.
    ///
    /// Same walk as [`update`](Self::update). Stopped states stay in place
    /// until the next update.
    pub fn render(&mut self, dt: f32, ctx: &mut C) {
        debug_assert!(dt >= 0.0, "negative delta time: {dt}");

        let mut visited = 0usize;
        for state in self.stack.iter_mut().rev() {
            state.on_render(dt, ctx);
            visited += 1;
            if state.suspend_lower() {
                break;
            }
        }
        log::trace!(
            "[{}] render dt={dt:.4} visited {visited}/{}",
            self.label,
            self.stack.len()
        );
    }

    /// Stops every state bottom to top and empties the stack.
    ///
    /// Queued handle requests are dropped without being applied, including any
    /// queued by those `on_stop` calls. Safe to call repeatedly; the runner can
    /// be filled again afterwards.
    pub fn destroy(&mut self) {
        self.stop_all();

        let dropped = self.handle.discard();
        if dropped > 0 {
            log::debug!("[{}] dropped {dropped} pending request(s)", self.label);
        }
    }

    fn switch_boxed(&mut self, state: Box<dyn RunState<C>>) -> Option<Box<dyn RunState<C>>> {
        let old = self.pop_state();
        self.add_boxed(state);
        old
    }

    /// Removes the lowest stopped state and everything above it, top first.
    fn sweep_stopped(&mut self) {
        let Some(first) = self.stack.iter().position(|state| state.is_stopped()) else {
            return;
        };

        log::debug!(
            "[{}] sweep from {} at index {first}, removing {}",
            self.label,
            self.stack[first].name(),
            self.stack.len() - first
        );

        while self.stack.len() > first {
            if let Some(mut state) = self.stack.pop() {
                state.on_stop();
            }
        }
    }

    fn stop_all(&mut self) {
        if self.stack.is_empty() {
            return;
        }

        log::debug!("[{}] stopping {} state(s)", self.label, self.stack.len());
        for mut state in self.stack.drain(..) {
            state.on_stop();
        }
    }

    fn apply_requests(&mut self) {
        while let Some(request) = self.handle.next_request() {
            match request {
                Request::Add(state) => self.add_boxed(state),
                Request::Pop => {
                    self.pop_state();
                }
                Request::Switch(state) => {
                    self.switch_boxed(state);
                }
                Request::StopAll => self.stop_all(),
            }
        }
    }
}

impl<C: ?Sized> Default for StateRunner<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Drop for StateRunner<C> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<C: ?Sized> fmt::Debug for StateRunner<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRunner")
            .field("label", &self.label)
            .field("states", &self.iter().map(|state| state.name()).collect::<Vec<_>>())
            .field("pending", &self.handle.pending())
            .finish()
    }
}
