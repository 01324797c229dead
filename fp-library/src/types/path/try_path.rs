//! [`TryPath`], the Effect Path for catchable failure.

use crate::{
	error::{CoreError, StringError},
	types::path::EitherPath,
};
use std::panic::{self, AssertUnwindSafe};

/// A computation that either succeeded with `A` or failed with a [`CoreError`], fluent-wrapped
/// over `Result<A, CoreError>`.
///
/// Unlike [`EitherPath`], whose error side is caller-chosen, `via` here additionally catches any
/// panic raised by the continuation and wraps it as a `Failure`, mirroring the host "exception"
/// semantics a `Try` type stands in for.
///
/// ### Examples
///
/// ```
/// use fp_library::types::path::TryPath;
///
/// let r = TryPath::of(|| 10 / 2).map(|x| x + 1);
/// assert_eq!(r.is_success(), true);
///
/// let r = TryPath::<i32>::of(|| panic!("boom"));
/// assert!(r.is_failure());
/// ```
pub struct TryPath<A>(Result<A, CoreError>);

fn panic_payload_to_error(payload: Box<dyn std::any::Any + Send>) -> CoreError {
	let message = payload
		.downcast_ref::<&str>()
		.map(|s| s.to_string())
		.or_else(|| payload.downcast_ref::<String>().cloned())
		.unwrap_or_else(|| "unknown panic".to_string());
	CoreError::thrown(StringError(message))
}

impl<A> TryPath<A> {
	/// Wraps a success value.
	pub fn success(a: A) -> Self {
		TryPath(Ok(a))
	}

	/// Wraps a failure.
	pub fn failure(e: CoreError) -> Self {
		TryPath(Err(e))
	}

	/// Runs `f`, catching any panic it raises and turning it into a `Failure`.
	pub fn of(f: impl FnOnce() -> A) -> Self {
		match panic::catch_unwind(AssertUnwindSafe(f)) {
			Ok(a) => TryPath(Ok(a)),
			Err(payload) => TryPath(Err(panic_payload_to_error(payload))),
		}
	}

	/// Returns `true` if this is a `Success`.
	pub fn is_success(&self) -> bool {
		self.0.is_ok()
	}

	/// Returns `true` if this is a `Failure`.
	pub fn is_failure(&self) -> bool {
		self.0.is_err()
	}

	/// Maps a function over a success value, catching any panic it raises.
	pub fn map<B>(
		self,
		f: impl FnOnce(A) -> B,
	) -> TryPath<B> {
		match self.0 {
			Ok(a) => match panic::catch_unwind(AssertUnwindSafe(|| f(a))) {
				Ok(b) => TryPath(Ok(b)),
				Err(payload) => TryPath(Err(panic_payload_to_error(payload))),
			},
			Err(e) => TryPath(Err(e)),
		}
	}

	/// Chains a further `TryPath`-producing computation, catching any panic it raises.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::TryPath;
	///
	/// let r = TryPath::success(10).via(|x: i32| TryPath::of(move || x / 0));
	/// assert!(r.is_failure());
	/// ```
	pub fn via<B>(
		self,
		f: impl FnOnce(A) -> TryPath<B>,
	) -> TryPath<B> {
		match self.0 {
			Ok(a) => match panic::catch_unwind(AssertUnwindSafe(|| f(a))) {
				Ok(tb) => tb,
				Err(payload) => TryPath(Err(panic_payload_to_error(payload))),
			},
			Err(e) => TryPath(Err(e)),
		}
	}

	/// Combines two paths with `f`, catching any panic `f` raises. The first `Failure`
	/// encountered wins.
	pub fn zip_with<B, C>(
		self,
		other: TryPath<B>,
		f: impl FnOnce(A, B) -> C,
	) -> TryPath<C> {
		match (self.0, other.0) {
			(Ok(a), Ok(b)) => match panic::catch_unwind(AssertUnwindSafe(|| f(a, b))) {
				Ok(c) => TryPath(Ok(c)),
				Err(payload) => TryPath(Err(panic_payload_to_error(payload))),
			},
			(Err(e), _) => TryPath(Err(e)),
			(_, Err(e)) => TryPath(Err(e)),
		}
	}

	/// Runs `f` for its side effect on a `Success` value, without affecting the path.
	pub fn peek(
		self,
		f: impl FnOnce(&A),
	) -> Self {
		if let Ok(a) = &self.0 {
			f(a);
		}
		self
	}

	/// Sequences a further path, discarding this path's value.
	pub fn then<B>(
		self,
		next: impl FnOnce() -> TryPath<B>,
	) -> TryPath<B> {
		match self.0 {
			Ok(_) => next(),
			Err(e) => TryPath(Err(e)),
		}
	}

	/// Maps the failure's error, leaving a `Success` untouched.
	pub fn map_exception(
		self,
		f: impl FnOnce(CoreError) -> CoreError,
	) -> Self {
		match self.0 {
			Ok(a) => TryPath(Ok(a)),
			Err(e) => TryPath(Err(f(e))),
		}
	}

	/// Recovers from a `Failure` by supplying a value.
	pub fn recover(
		self,
		f: impl FnOnce(CoreError) -> A,
	) -> Self {
		match self.0 {
			Ok(a) => TryPath(Ok(a)),
			Err(e) => TryPath(Ok(f(e))),
		}
	}

	/// Recovers from a `Failure` by supplying a further path to run instead.
	pub fn recover_with(
		self,
		f: impl FnOnce(CoreError) -> TryPath<A>,
	) -> Self {
		match self.0 {
			Ok(a) => TryPath(Ok(a)),
			Err(e) => f(e),
		}
	}

	/// Converts to [`EitherPath`], requiring an explicit mapper from the caught error to the
	/// desired error type — there is no implicit conversion, per the contract a `Failure`'s
	/// error always needs an explicit target type chosen at the call site.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::TryPath;
	///
	/// let r = TryPath::<i32>::of(|| panic!("boom")).to_either_path(|e| e.to_string());
	/// assert!(r.is_left());
	/// ```
	pub fn to_either_path<E>(
		self,
		f: impl FnOnce(CoreError) -> E,
	) -> EitherPath<E, A> {
		match self.0 {
			Ok(a) => EitherPath::right(a),
			Err(e) => EitherPath::left(f(e)),
		}
	}

	/// Unwraps back to a host [`Result`].
	pub fn into_result(self) -> Result<A, CoreError> {
		self.0
	}
}
