use std::env::{self, VarError};
use std::str::FromStr;

use anyhow::{Context, Result};

/// Demo loop settings, read from the environment.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `RUNSTACK_FRAMES` | 900 | frame budget before the loop gives up |
/// | `RUNSTACK_DT` | 1/60 | fixed delta time in seconds |
/// | `RUNSTACK_PRINT_EVERY` | 30 | print the canvas every N frames (0 = never) |
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub frames: u64,
    pub dt: f32,
    pub print_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 900,
            dt: 1.0 / 60.0,
            print_every: 30,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            frames: var_or("RUNSTACK_FRAMES", defaults.frames)?,
            dt: var_or("RUNSTACK_DT", defaults.dt)?,
            print_every: var_or("RUNSTACK_PRINT_EVERY", defaults.print_every)?,
        };

        anyhow::ensure!(
            config.dt.is_finite() && config.dt >= 0.0,
            "RUNSTACK_DT must be a non-negative number, got {}",
            config.dt
        );

        Ok(config)
    }
}

fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}={raw:?}")),
        Err(VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("failed to read {key}")),
    }
}
