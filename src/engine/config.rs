//! External engine configuration.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default thinking time per move
pub const DEFAULT_MOVETIME_MS: u64 = 3000;
/// How long `quit` may take before the process is killed
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 1000;

/// How to launch and drive a UCI engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Engine executable
    pub program: PathBuf,
    /// Extra command line arguments
    pub args: Vec<String>,
    /// Sent as `go movetime <ms>`
    pub movetime_ms: u64,
    pub shutdown_grace_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            program: PathBuf::from("stockfish"),
            args: Vec::new(),
            movetime_ms: DEFAULT_MOVETIME_MS,
            shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        EngineConfig {
            program: program.into(),
            ..Self::default()
        }
    }

    /// Append one command line argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub const fn with_movetime_ms(mut self, ms: u64) -> Self {
        self.movetime_ms = ms;
        self
    }

    #[must_use]
    pub const fn with_shutdown_grace_ms(mut self, ms: u64) -> Self {
        self.shutdown_grace_ms = ms;
        self
    }

    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.movetime_ms, 3000);
        assert_eq!(config.shutdown_grace(), Duration::from_secs(1));
        assert!(config.args.is_empty());
    }

    #[test]
    fn builder_methods() {
        let config = EngineConfig::new("/usr/bin/engine")
            .with_arg("--threads")
            .with_arg("2")
            .with_movetime_ms(250)
            .with_shutdown_grace_ms(50);
        assert_eq!(config.program, PathBuf::from("/usr/bin/engine"));
        assert_eq!(config.args, ["--threads", "2"]);
        assert_eq!(config.movetime_ms, 250);
        assert_eq!(config.shutdown_grace_ms, 50);
    }
}
