/// Dispatch rule a state applies to the states stacked beneath it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RunFlag {
    /// States below are skipped for the current update/render pass.
    #[default]
    SuspendLower,
    /// States below keep receiving update/render calls.
    RunLower,
}
