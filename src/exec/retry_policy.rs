use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default attempt ceiling for a generation call.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// The caller-supplied attempt ceiling for one invocation.
///
/// The invoker itself has no opinion on the "right" count; 3 is a sensible
/// default for interactive calls, 5 absorbs longer overload windows at the
/// cost of up to 30s of cumulative backoff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryPolicy {
	pub max_attempts: u32,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

/// Chainable Setters
impl RetryPolicy {
	#[must_use]
	pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
		self.max_attempts = max_attempts;
		self
	}
}

impl RetryPolicy {
	/// Backoff before the attempt following `attempt` (0-based): `2^(attempt+1)`
	/// seconds - 2s, 4s, 8s, 16s, ...
	#[must_use]
	pub fn backoff_delay(attempt: u32) -> Duration {
		Duration::from_secs(2u64.saturating_pow(attempt + 1))
	}
}
