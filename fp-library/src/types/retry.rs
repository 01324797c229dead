//! [`RetryPolicy`] and its backoff strategies.
//!
//! A policy describes *when* and *how long* to wait between retries; it does not itself run
//! anything. `IOPath::with_retry`/`IOPath::retry` are the integration points that actually
//! drive a policy against a failing computation.

use crate::error::CoreError;
use std::time::Duration;

/// How the delay between attempts grows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackoffStrategy {
	/// The same delay every time.
	Fixed,
	/// The delay doubles every attempt, capped at `max_delay`.
	Exponential,
	/// Like `Exponential`, but the actual delay is chosen uniformly at random in
	/// `[0, current)` ("full jitter"), smoothing out thundering-herd retries.
	ExponentialJitter,
}

/// Describes how many times to retry a failing computation and how long to wait between
/// attempts.
///
/// ### Examples
///
/// ```
/// use fp_library::types::retry::{BackoffStrategy, RetryPolicy};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::exponential_backoff(5, Duration::from_millis(10), Duration::from_secs(1));
/// assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(10));
/// assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(20));
/// assert_eq!(policy.delay_for_attempt(10), Duration::from_secs(1));
/// ```
#[derive(Clone)]
pub struct RetryPolicy {
	max_attempts: usize,
	initial_delay: Duration,
	max_delay: Duration,
	strategy: BackoffStrategy,
	should_retry: std::sync::Arc<dyn Fn(&CoreError) -> bool + Send + Sync>,
}

impl RetryPolicy {
	/// A policy that never retries: the first failure is final.
	pub fn no_retry() -> Self {
		RetryPolicy {
			max_attempts: 1,
			initial_delay: Duration::ZERO,
			max_delay: Duration::ZERO,
			strategy: BackoffStrategy::Fixed,
			should_retry: std::sync::Arc::new(|_| true),
		}
	}

	/// A policy with a fixed delay between every attempt.
	pub fn fixed(max_attempts: usize, delay: Duration) -> Self {
		RetryPolicy {
			max_attempts: max_attempts.max(1),
			initial_delay: delay,
			max_delay: delay,
			strategy: BackoffStrategy::Fixed,
			should_retry: std::sync::Arc::new(|_| true),
		}
	}

	/// A policy whose delay doubles each attempt, capped at `max_delay`.
	pub fn exponential_backoff(max_attempts: usize, initial_delay: Duration, max_delay: Duration) -> Self {
		RetryPolicy {
			max_attempts: max_attempts.max(1),
			initial_delay,
			max_delay,
			strategy: BackoffStrategy::Exponential,
			should_retry: std::sync::Arc::new(|_| true),
		}
	}

	/// A policy whose delay doubles each attempt (capped at `max_delay`) and is then jittered
	/// uniformly in `[0, current)`.
	pub fn exponential_backoff_with_jitter(
		max_attempts: usize,
		initial_delay: Duration,
		max_delay: Duration,
	) -> Self {
		RetryPolicy {
			max_attempts: max_attempts.max(1),
			initial_delay,
			max_delay,
			strategy: BackoffStrategy::ExponentialJitter,
			should_retry: std::sync::Arc::new(|_| true),
		}
	}

	/// Restricts retries to errors matching `predicate`; errors that don't match propagate
	/// immediately without consuming a retry attempt.
	pub fn should_retry(mut self, predicate: impl Fn(&CoreError) -> bool + Send + Sync + 'static) -> Self {
		self.should_retry = std::sync::Arc::new(predicate);
		self
	}

	/// The maximum number of attempts this policy allows, including the first.
	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	/// Returns `true` if `error` should trigger a further attempt, per this policy's predicate.
	pub fn matches(&self, error: &CoreError) -> bool {
		(self.should_retry)(error)
	}

	/// The delay to wait before attempt number `attempt` (zero-indexed: `0` is the delay
	/// before the second attempt, after the first attempt's failure).
	pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
		match self.strategy {
			BackoffStrategy::Fixed => self.initial_delay,
			BackoffStrategy::Exponential => {
				let factor = 1u32.checked_shl(attempt as u32).unwrap_or(u32::MAX);
				self.initial_delay.saturating_mul(factor).min(self.max_delay)
			}
			BackoffStrategy::ExponentialJitter => {
				let factor = 1u32.checked_shl(attempt as u32).unwrap_or(u32::MAX);
				let current = self.initial_delay.saturating_mul(factor).min(self.max_delay);
				if current.is_zero() {
					current
				} else {
					let millis = current.as_millis().max(1) as u64;
					Duration::from_millis(rand::random::<u64>() % millis)
				}
			}
		}
	}

	/// Runs `f` up to [`max_attempts`][Self::max_attempts] times, sleeping
	/// [`delay_for_attempt`][Self::delay_for_attempt] between attempts, stopping as soon as `f`
	/// succeeds or returns an error [`matches`][Self::matches] rejects. When every attempt is
	/// exhausted, the last error is wrapped in [`CoreError::RetryExhausted`].
	pub async fn retry<A, F, Fut>(&self, mut f: F) -> Result<A, CoreError>
	where
		F: FnMut() -> Fut,
		Fut: std::future::Future<Output = Result<A, CoreError>>,
	{
		let mut attempt = 0;
		loop {
			match f().await {
				Ok(a) => return Ok(a),
				Err(e) if attempt + 1 >= self.max_attempts || !self.matches(&e) => {
					if attempt + 1 >= self.max_attempts {
						tracing::warn!(attempts = attempt + 1, "retry exhausted");
						return Err(CoreError::RetryExhausted { attempts: attempt + 1 });
					}
					return Err(e);
				}
				Err(e) => {
					let delay = self.delay_for_attempt(attempt);
					tracing::debug!(attempt, ?delay, error = %e, "retrying after failure");
					tokio::time::sleep(delay).await;
					attempt += 1;
				}
			}
		}
	}
}
