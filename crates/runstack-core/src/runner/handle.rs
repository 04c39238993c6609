use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::state::RunState;

/// Stack change requested through a [`RunnerHandle`].
pub(crate) enum Request<C: ?Sized> {
    Add(Box<dyn RunState<C>>),
    Pop,
    Switch(Box<dyn RunState<C>>),
    StopAll,
}

/// Deferred access to a [`StateRunner`](super::StateRunner)'s stack.
///
/// States cannot reach the runner that is currently calling them, so they keep
/// a handle instead. Requests are buffered and applied in request order at the
/// end of [`StateRunner::update`](super::StateRunner::update), after the
/// stopped-state sweep. Requests made while those requests are applied (for
/// example from an `on_start`) are applied in the same pass.
pub struct RunnerHandle<C: ?Sized = ()> {
    queue: Rc<RefCell<VecDeque<Request<C>>>>,
}

impl<C: ?Sized> RunnerHandle<C> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Requests `state` to be pushed on top.
    pub fn add_state<S>(&self, state: S)
    where
        S: RunState<C> + 'static,
    {
        self.push(Request::Add(Box::new(state)));
    }

    /// Requests the top state to be popped.
    pub fn pop_state(&self) {
        self.push(Request::Pop);
    }

    /// Requests the top state to be replaced by `state`.
    pub fn switch_state<S>(&self, state: S)
    where
        S: RunState<C> + 'static,
    {
        self.push(Request::Switch(Box::new(state)));
    }

    /// Requests every stacked state to be stopped, bottom to top.
    pub fn stop_all(&self) {
        self.push(Request::StopAll);
    }

    /// Number of requests waiting for the next update.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn push(&self, request: Request<C>) {
        self.queue.borrow_mut().push_back(request);
    }

    /// The borrow ends before the caller applies the request, so hooks run
    /// while applying it may queue more.
    pub(crate) fn next_request(&self) -> Option<Request<C>> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drops queued requests. Queued states were never started, so no hooks run.
    pub(crate) fn discard(&self) -> usize {
        let mut queue = self.queue.borrow_mut();
        let dropped = queue.len();
        queue.clear();
        dropped
    }
}

impl<C: ?Sized> Clone for RunnerHandle<C> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<C: ?Sized> fmt::Debug for RunnerHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerHandle")
            .field("pending", &self.pending())
            .finish()
    }
}
