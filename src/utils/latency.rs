//! Simulated backend latency
//!
//! Every mocked backend call waits a fixed delay before completing, standing
//! in for the network round trip a real service would need.

use crate::config::LatencyConfig;
use std::time::Duration;
use tracing::trace;

/// Operations that carry a simulated delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Signup,
    Trial,
    PasswordReset,
    Payment,
    Upload,
    Generation,
    Chat,
}

/// Per-operation delays
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    config: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// Latency profile with every delay set to zero
    pub fn none() -> Self {
        Self::new(LatencyConfig::zero())
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        let millis = match operation {
            Operation::Login => self.config.login_ms,
            Operation::Signup => self.config.signup_ms,
            Operation::Trial => self.config.trial_ms,
            Operation::PasswordReset => self.config.password_reset_ms,
            Operation::Payment => self.config.payment_ms,
            Operation::Upload => self.config.upload_ms,
            Operation::Generation => self.config.generation_ms,
            Operation::Chat => self.config.chat_ms,
        };
        Duration::from_millis(millis)
    }

    /// Wait out the delay configured for `operation`
    pub async fn wait(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if delay.is_zero() {
            return;
        }
        trace!(?operation, delay_ms = delay.as_millis() as u64, "simulating backend latency");
        tokio::time::sleep(delay).await;
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let latency = SimulatedLatency::default();
        assert_eq!(latency.delay_for(Operation::Login), Duration::from_millis(1000));
        assert_eq!(latency.delay_for(Operation::Trial), Duration::from_millis(800));
        assert_eq!(latency.delay_for(Operation::Payment), Duration::from_millis(1500));
    }

    #[test]
    fn test_none_is_zero() {
        let latency = SimulatedLatency::none();
        assert!(latency.delay_for(Operation::Generation).is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_advances_paused_clock() {
        let latency = SimulatedLatency::default();
        let start = tokio::time::Instant::now();
        latency.wait(Operation::Payment).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
