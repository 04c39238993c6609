//! Run state contract.
//!
//! [`RunState`] is the trait every stacked state implements. [`StateBase`]
//! is the optional embeddable piece holding the [`RunFlag`] and the
//! [`StopSignal`] used to request removal.

mod base;
mod flag;
mod run_state;

pub use base::{StateBase, StopSignal};
pub use flag::RunFlag;
pub use run_state::RunState;
