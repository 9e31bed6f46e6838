//! Artificial latency applied by the service layer before each store call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that disables latency when set to `off`, `0` or `false`.
pub const LATENCY_ENV_VAR: &str = "COLDROOM_LATENCY";

/// Kind of service operation, which selects the delay applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Whole-collection reads (`get_all`).
    List,
    /// Single-record reads and filtered lookups.
    Lookup,
    /// Inserts and updates.
    Write,
    /// Report generation.
    Generate,
}

/// Delay per operation kind, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub enabled: bool,
    pub list_ms: u64,
    pub lookup_ms: u64,
    pub write_ms: u64,
    pub generate_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            enabled: true,
            list_ms: 500,
            lookup_ms: 300,
            write_ms: 500,
            generate_ms: 1000,
        }
    }
}

impl LatencyProfile {
    /// Profile with every delay switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Same delay for every operation kind.
    pub fn uniform(ms: u64) -> Self {
        Self {
            enabled: true,
            list_ms: ms,
            lookup_ms: ms,
            write_ms: ms,
            generate_ms: ms,
        }
    }

    /// Apply the [`LATENCY_ENV_VAR`] override, if present.
    pub fn with_env_override(self) -> Self {
        match std::env::var(LATENCY_ENV_VAR) {
            Ok(v) if matches!(v.to_lowercase().as_str(), "off" | "0" | "false") => Self {
                enabled: false,
                ..self
            },
            _ => self,
        }
    }

    pub fn delay_for(&self, op: OperationKind) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let ms = match op {
            OperationKind::List => self.list_ms,
            OperationKind::Lookup => self.lookup_ms,
            OperationKind::Write => self.write_ms,
            OperationKind::Generate => self.generate_ms,
        };
        Duration::from_millis(ms)
    }

    /// Suspend the caller for the delay of `op`.
    pub async fn wait(&self, op: OperationKind) {
        let delay = self.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let p = LatencyProfile::default();
        assert_eq!(p.delay_for(OperationKind::List), Duration::from_millis(500));
        assert_eq!(p.delay_for(OperationKind::Lookup), Duration::from_millis(300));
        assert_eq!(p.delay_for(OperationKind::Write), Duration::from_millis(500));
        assert_eq!(p.delay_for(OperationKind::Generate), Duration::from_millis(1000));
    }

    #[test]
    fn test_disabled_is_zero() {
        let p = LatencyProfile::disabled();
        assert_eq!(p.delay_for(OperationKind::Generate), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_wait_sleeps_at_least_the_delay() {
        let p = LatencyProfile::uniform(20);
        let start = std::time::Instant::now();
        p.wait(OperationKind::Lookup).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
