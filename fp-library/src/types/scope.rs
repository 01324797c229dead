//! [`Scope`], a structured-concurrency scope over `tokio::task::JoinSet`.
//!
//! A `Scope` hosts any number of forked tasks and joins them according to a chosen strategy
//! (the "Joiner"): wait for every task to succeed, return as soon as one succeeds, return the
//! first to finish regardless of outcome, or run everything to completion and accumulate every
//! failure. Every strategy honors an optional scope-wide timeout; on expiry, every surviving
//! task is aborted and the scope fails with [`CoreError::Timeout`].

use crate::{
	error::CoreError,
	types::{
		Validated,
		path::{EitherPath, MaybePath, TryPath},
	},
};
use std::{future::Future, pin::Pin, time::Duration};

type BoxedTask<A> = Pin<Box<dyn Future<Output = Result<A, CoreError>> + Send>>;

/// A structured-concurrency scope: a set of forked tasks plus a join strategy.
///
/// ### Examples
///
/// ```
/// use fp_library::types::scope::Scope;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut scope = Scope::new();
/// scope.fork(async { Ok(1) });
/// scope.fork(async { Ok(2) });
/// let results = scope.join_all_succeed().await.unwrap();
/// assert_eq!(results, vec![1, 2]);
/// # }
/// ```
pub struct Scope<A>
where
	A: Send + 'static,
{
	tasks: Vec<BoxedTask<A>>,
	timeout: Option<Duration>,
}

impl<A: Send + 'static> Scope<A> {
	/// Creates an empty scope.
	pub fn new() -> Self {
		Scope { tasks: Vec::new(), timeout: None }
	}

	/// Forks a task into this scope. Tasks run concurrently once the scope is joined.
	pub fn fork(&mut self, task: impl Future<Output = Result<A, CoreError>> + Send + 'static) {
		self.tasks.push(Box::pin(task));
	}

	/// Sets a scope-wide timeout: on expiry, every surviving task is cancelled and the scope
	/// fails with [`CoreError::Timeout`].
	pub fn with_timeout(mut self, duration: Duration) -> Self {
		self.timeout = Some(duration);
		self
	}

	async fn with_deadline<B>(timeout: Option<Duration>, body: impl Future<Output = Result<B, CoreError>>) -> Result<B, CoreError> {
		match timeout {
			Some(duration) => tokio::time::timeout(duration, body).await.map_err(|_| {
				tracing::warn!(?duration, "scope: timed out, aborting remaining tasks");
				CoreError::Timeout(duration)
			})?,
			None => body.await,
		}
	}

	/// Waits for every task to succeed, returning results in fork order. If any task fails, the
	/// scope fails with that error and every remaining task is cancelled.
	pub async fn join_all_succeed(self) -> Result<Vec<A>, CoreError> {
		let timeout = self.timeout;
		let len = self.tasks.len();
		Self::with_deadline(timeout, async move {
			let mut set = tokio::task::JoinSet::new();
			for (index, task) in self.tasks.into_iter().enumerate() {
				set.spawn(async move { (index, task.await) });
			}
			let mut results: Vec<Option<A>> = (0..len).map(|_| None).collect();
			let mut first_error: Option<CoreError> = None;
			while let Some(joined) = set.join_next().await {
				match joined {
					Ok((index, Ok(a))) => results[index] = Some(a),
					Ok((_, Err(e))) => {
						first_error.get_or_insert(e);
						set.abort_all();
					}
					Err(_join_error) => {
						first_error.get_or_insert(CoreError::Cancelled);
						set.abort_all();
					}
				}
			}
			match first_error {
				Some(e) => {
					tracing::debug!(error = %e, "scope: all_succeed failed, remaining tasks aborted");
					Err(e)
				}
				None => Ok(results.into_iter().map(|r| r.expect("scope: missing result for a succeeded task")).collect()),
			}
		})
		.await
	}

	/// Returns as soon as any task succeeds, cancelling the rest. If every task fails, the
	/// scope fails with the last error observed.
	pub async fn join_any_succeed(self) -> Result<A, CoreError> {
		let timeout = self.timeout;
		Self::with_deadline(timeout, async move {
			let mut set = tokio::task::JoinSet::new();
			for task in self.tasks.into_iter() {
				set.spawn(task);
			}
			let mut last_error: Option<CoreError> = None;
			while let Some(joined) = set.join_next().await {
				match joined {
					Ok(Ok(a)) => {
						set.abort_all();
						return Ok(a);
					}
					Ok(Err(e)) => last_error = Some(e),
					Err(_join_error) => last_error = Some(CoreError::Cancelled),
				}
			}
			Err(last_error.unwrap_or(CoreError::NoMatch))
		})
		.await
	}

	/// Returns the first task to finish, regardless of whether it succeeded, cancelling the
	/// rest.
	pub async fn join_first_complete(self) -> Result<A, CoreError> {
		let timeout = self.timeout;
		Self::with_deadline(timeout, async move {
			let mut set = tokio::task::JoinSet::new();
			for task in self.tasks.into_iter() {
				set.spawn(task);
			}
			match set.join_next().await {
				Some(Ok(result)) => {
					set.abort_all();
					result
				}
				Some(Err(_join_error)) => Err(CoreError::Cancelled),
				None => Err(CoreError::NoMatch),
			}
		})
		.await
	}

	/// Runs every task to completion, accumulating every failure instead of short-circuiting.
	/// A cancelled or panicked task contributes to neither list, since no value and no
	/// [`CoreError`] is available for it. The timeout only bounds the overall join: it does not
	/// single out individual tasks the way [`RetryPolicy`](crate::types::retry::RetryPolicy)
	/// does.
	pub async fn join_accumulating<E: Send + 'static>(
		self,
		err_map: impl Fn(CoreError) -> E + Send + Sync + 'static,
	) -> Validated<Vec<E>, Vec<A>> {
		let len = self.tasks.len();
		let mut set = tokio::task::JoinSet::new();
		for (index, task) in self.tasks.into_iter().enumerate() {
			set.spawn(async move { (index, task.await) });
		}
		let mut successes: Vec<Option<A>> = (0..len).map(|_| None).collect();
		let mut errors: Vec<Option<E>> = (0..len).map(|_| None).collect();
		while let Some(joined) = set.join_next().await {
			if let Ok((index, outcome)) = joined {
				match outcome {
					Ok(a) => successes[index] = Some(a),
					Err(e) => errors[index] = Some(err_map(e)),
				}
			}
		}
		let collected_errors: Vec<E> = errors.into_iter().flatten().collect();
		if collected_errors.is_empty() {
			Validated::Valid(successes.into_iter().flatten().collect())
		} else {
			Validated::Invalid(collected_errors)
		}
	}

	/// [`join_all_succeed`][Self::join_all_succeed], converted to a [`TryPath`] instead of a
	/// host [`Result`].
	pub async fn join_safe(self) -> TryPath<Vec<A>> {
		match self.join_all_succeed().await {
			Ok(a) => TryPath::success(a),
			Err(e) => TryPath::failure(e),
		}
	}

	/// [`join_all_succeed`][Self::join_all_succeed], converted to an [`EitherPath`].
	pub async fn join_either(self) -> EitherPath<CoreError, Vec<A>> {
		EitherPath::from_result(self.join_all_succeed().await)
	}

	/// [`join_all_succeed`][Self::join_all_succeed], discarding the error.
	pub async fn join_maybe(self) -> MaybePath<Vec<A>> {
		MaybePath::from_option(self.join_all_succeed().await.ok())
	}
}

impl<A: Send + 'static> Default for Scope<A> {
	fn default() -> Self {
		Self::new()
	}
}
