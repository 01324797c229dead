//! [`EitherPath`], the Effect Path for two-sided, short-circuiting errors.

use crate::types::path::MaybePath;

/// A value biased on success (`Right`), fluent-wrapped over [`Result<A, E>`].
///
/// `via`/`zip_with`/`map` all propagate a `Left` unchanged — the first error wins, the same
/// short-circuiting behaviour as [`Result`]'s own `and_then`.
///
/// ### Examples
///
/// ```
/// use fp_library::types::path::EitherPath;
///
/// let r: EitherPath<&str, i32> = EitherPath::right(5).map(|x| x * 2);
/// assert_eq!(r.into_result(), Ok(10));
///
/// let e: EitherPath<&str, i32> = EitherPath::left("bad").map(|x: i32| x * 2);
/// assert_eq!(e.into_result(), Err("bad"));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EitherPath<E, A>(Result<A, E>);

impl<E, A> EitherPath<E, A> {
	/// Wraps a success value.
	pub fn right(a: A) -> Self {
		EitherPath(Ok(a))
	}

	/// Wraps an error value.
	pub fn left(e: E) -> Self {
		EitherPath(Err(e))
	}

	/// Wraps a host [`Result`] directly.
	pub fn from_result(r: Result<A, E>) -> Self {
		EitherPath(r)
	}

	/// Unwraps back to a host [`Result`].
	pub fn into_result(self) -> Result<A, E> {
		self.0
	}

	/// Returns `true` if this is `Right`.
	pub fn is_right(&self) -> bool {
		self.0.is_ok()
	}

	/// Returns `true` if this is `Left`.
	pub fn is_left(&self) -> bool {
		self.0.is_err()
	}

	/// Maps a function over the success value, leaving `Left` untouched.
	pub fn map<B>(
		self,
		f: impl FnOnce(A) -> B,
	) -> EitherPath<E, B> {
		EitherPath(self.0.map(f))
	}

	/// Chains a further `EitherPath`-producing computation. The first `Left` wins.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::EitherPath;
	///
	/// let r: EitherPath<&str, i32> = EitherPath::right(5).via(|x| EitherPath::right(x * 2));
	/// assert_eq!(r.into_result(), Ok(10));
	/// ```
	pub fn via<B>(
		self,
		f: impl FnOnce(A) -> EitherPath<E, B>,
	) -> EitherPath<E, B> {
		match self.0 {
			Ok(a) => f(a),
			Err(e) => EitherPath::left(e),
		}
	}

	/// Combines two paths with `f`. The first `Left` encountered wins.
	pub fn zip_with<B, C>(
		self,
		other: EitherPath<E, B>,
		f: impl FnOnce(A, B) -> C,
	) -> EitherPath<E, C> {
		match (self.0, other.0) {
			(Ok(a), Ok(b)) => EitherPath(Ok(f(a, b))),
			(Err(e), _) => EitherPath(Err(e)),
			(_, Err(e)) => EitherPath(Err(e)),
		}
	}

	/// Runs `f` for its side effect on a `Right` value, without affecting the path.
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
		next: impl FnOnce() -> EitherPath<E, B>,
	) -> EitherPath<E, B> {
		match self.0 {
			Ok(_) => next(),
			Err(e) => EitherPath::left(e),
		}
	}

	/// Maps the error side, leaving a `Right` untouched.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::EitherPath;
	///
	/// let r: EitherPath<usize, i32> = EitherPath::<&str, i32>::left("bad").map_error(|e| e.len());
	/// assert_eq!(r.into_result(), Err(3));
	/// ```
	pub fn map_error<E2>(
		self,
		f: impl FnOnce(E) -> E2,
	) -> EitherPath<E2, A> {
		EitherPath(self.0.map_err(f))
	}

	/// Recovers from a `Left` by supplying a value, turning this into an always-`Right` path.
	pub fn recover(
		self,
		f: impl FnOnce(E) -> A,
	) -> EitherPath<E, A> {
		match self.0 {
			Ok(a) => EitherPath(Ok(a)),
			Err(e) => EitherPath(Ok(f(e))),
		}
	}

	/// Recovers from a `Left` by supplying a further path to run instead.
	pub fn recover_with(
		self,
		f: impl FnOnce(E) -> EitherPath<E, A>,
	) -> EitherPath<E, A> {
		match self.0 {
			Ok(a) => EitherPath(Ok(a)),
			Err(e) => f(e),
		}
	}

	/// Runs a fallback path if this one is `Left`, discarding the original error.
	pub fn or_else(
		self,
		f: impl FnOnce() -> EitherPath<E, A>,
	) -> EitherPath<E, A> {
		match self.0 {
			Ok(a) => EitherPath(Ok(a)),
			Err(_) => f(),
		}
	}

	/// Converts to [`MaybePath`], discarding the error.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::EitherPath;
	///
	/// assert_eq!(EitherPath::<&str, i32>::right(5).to_maybe_path().to_option(), Some(5));
	/// assert_eq!(EitherPath::<&str, i32>::left("bad").to_maybe_path().to_option(), None);
	/// ```
	pub fn to_maybe_path(self) -> MaybePath<A> {
		MaybePath::from_option(self.0.ok())
	}
}
