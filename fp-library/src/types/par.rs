//! Par combinators: ad hoc parallelism outside a [`Scope`](crate::types::scope::Scope).
//!
//! Where a `Scope` hosts an open-ended, dynamically-sized set of forked tasks, these
//! combinators cover the common fixed-shape cases directly, without requiring the caller to
//! build a scope for a single `zip` or `race`.

use crate::error::CoreError;
use std::future::Future;

/// Runs two tasks concurrently and pairs their results. Fails as soon as either fails.
///
/// ### Examples
///
/// ```
/// use fp_library::types::par;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = par::zip(async { Ok(1) }, async { Ok("a") }).await;
/// assert_eq!(result, Ok((1, "a")));
/// # }
/// ```
pub async fn zip<A, B>(
	a: impl Future<Output = Result<A, CoreError>>,
	b: impl Future<Output = Result<B, CoreError>>,
) -> Result<(A, B), CoreError> {
	let (a, b) = tokio::join!(a, b);
	Ok((a?, b?))
}

/// Runs two tasks concurrently and combines their results with `f`.
pub async fn map2<A, B, C>(
	a: impl Future<Output = Result<A, CoreError>>,
	b: impl Future<Output = Result<B, CoreError>>,
	f: impl FnOnce(A, B) -> C,
) -> Result<C, CoreError> {
	zip(a, b).await.map(|(a, b)| f(a, b))
}

/// Runs every task in `tasks` concurrently, returning all results in input order, or the first
/// error encountered.
///
/// ### Examples
///
/// ```
/// use fp_library::types::par;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let tasks: Vec<_> = (1..=3).map(|n| async move { Ok(n * 2) }).collect();
/// let results = par::all(tasks).await.unwrap();
/// assert_eq!(results, vec![2, 4, 6]);
/// # }
/// ```
pub async fn all<A, F>(tasks: Vec<F>) -> Result<Vec<A>, CoreError>
where
	A: Send + 'static,
	F: Future<Output = Result<A, CoreError>> + Send + 'static,
{
	let mut set = tokio::task::JoinSet::new();
	for (index, task) in tasks.into_iter().enumerate() {
		set.spawn(async move { (index, task.await) });
	}
	let len = set.len();
	let mut results: Vec<Option<A>> = (0..len).map(|_| None).collect();
	while let Some(joined) = set.join_next().await {
		match joined {
			Ok((index, Ok(a))) => results[index] = Some(a),
			Ok((_, Err(e))) => {
				set.abort_all();
				return Err(e);
			}
			Err(_join_error) => {
				set.abort_all();
				return Err(CoreError::Cancelled);
			}
		}
	}
	Ok(results.into_iter().map(|r| r.expect("par::all: missing result for a succeeded task")).collect())
}

/// Runs every task in `tasks` concurrently, returning the first to succeed and cancelling the
/// rest. If every task fails, returns the last error observed.
pub async fn race<A, F>(tasks: Vec<F>) -> Result<A, CoreError>
where
	A: Send + 'static,
	F: Future<Output = Result<A, CoreError>> + Send + 'static,
{
	let mut set = tokio::task::JoinSet::new();
	for task in tasks.into_iter() {
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
}
