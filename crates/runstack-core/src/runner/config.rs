/// State runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Prefix for this runner's log lines. Useful when an application keeps
    /// several runners (e.g. one per window).
    pub label: String,

    /// Initial stack capacity.
    pub capacity: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            label: "runner".to_string(),
            capacity: 8,
        }
    }
}
