//! [`ValidationPath`], the Effect Path for accumulating validation.

use crate::{
	classes::semigroup::Semigroup,
	types::{Validated, path::EitherPath},
};

/// A value that's either valid or carries one or more accumulated errors, fluent-wrapped over
/// [`Validated<E, A>`].
///
/// `E` must be a [`Semigroup`] so that two `Invalid` values met along the way can be combined.
/// Two distinct families of combinator are exposed, matching the two ways this path is actually
/// used: `via`/`zip_with` short-circuit on the first `Invalid` the same as `EitherPath` (handy
/// when a later step genuinely depends on an earlier one succeeding), while `zip_with_accum`/
/// `and_also` never short-circuit and instead combine every `Invalid` they see.
///
/// ### Examples
///
/// ```
/// use fp_library::types::path::ValidationPath;
///
/// let name: ValidationPath<Vec<&str>, &str> = ValidationPath::invalid(vec!["name required"]);
/// let age: ValidationPath<Vec<&str>, i32> = ValidationPath::invalid(vec!["age must be positive"]);
/// let combined = name.zip_with_accum(age, |n, a| (n, a));
/// assert_eq!(combined.into_validated(), fp_library::types::Validated::Invalid(vec!["name required", "age must be positive"]));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ValidationPath<E, A>(Validated<E, A>);

impl<E, A> ValidationPath<E, A> {
	/// Wraps a valid value.
	pub fn valid(a: A) -> Self {
		ValidationPath(Validated::Valid(a))
	}

	/// Wraps an accumulated error.
	pub fn invalid(e: E) -> Self {
		ValidationPath(Validated::Invalid(e))
	}

	/// Wraps a host [`Validated`] directly.
	pub fn from_validated(v: Validated<E, A>) -> Self {
		ValidationPath(v)
	}

	/// Unwraps back to a host [`Validated`].
	pub fn into_validated(self) -> Validated<E, A> {
		self.0
	}

	/// Returns `true` if this is `Valid`.
	pub fn is_valid(&self) -> bool {
		self.0.is_valid()
	}

	/// Returns `true` if this is `Invalid`.
	pub fn is_invalid(&self) -> bool {
		self.0.is_invalid()
	}

	/// Maps a function over the valid value, leaving `Invalid` untouched.
	pub fn map<B>(
		self,
		f: impl FnOnce(A) -> B,
	) -> ValidationPath<E, B> {
		match self.0 {
			Validated::Valid(a) => ValidationPath(Validated::Valid(f(a))),
			Validated::Invalid(e) => ValidationPath(Validated::Invalid(e)),
		}
	}

	/// Runs `f` for its side effect on a `Valid` value, without affecting the path.
	pub fn peek(
		self,
		f: impl FnOnce(&A),
	) -> Self {
		if let Validated::Valid(a) = &self.0 {
			f(a);
		}
		self
	}
}

impl<E, A> ValidationPath<E, A> {
	/// Chains a further `ValidationPath`-producing computation. Short-circuits on the first
	/// `Invalid`, discarding any error the continuation's path would have carried — this is the
	/// monadic-flavored combinator, not the accumulating one.
	pub fn via<B>(
		self,
		f: impl FnOnce(A) -> ValidationPath<E, B>,
	) -> ValidationPath<E, B> {
		match self.0 {
			Validated::Valid(a) => f(a),
			Validated::Invalid(e) => ValidationPath(Validated::Invalid(e)),
		}
	}

	/// Combines two paths with `f`. Short-circuits to the first `Invalid` without combining
	/// errors — the monadic-flavored zip; see [`zip_with_accum`][Self::zip_with_accum] for the
	/// accumulating one.
	pub fn zip_with<B, C>(
		self,
		other: ValidationPath<E, B>,
		f: impl FnOnce(A, B) -> C,
	) -> ValidationPath<E, C> {
		match self.0 {
			Validated::Invalid(e) => ValidationPath(Validated::Invalid(e)),
			Validated::Valid(a) => match other.0 {
				Validated::Invalid(e) => ValidationPath(Validated::Invalid(e)),
				Validated::Valid(b) => ValidationPath(Validated::Valid(f(a, b))),
			},
		}
	}

	/// Sequences a further path, discarding this path's value. Short-circuits on `Invalid`.
	pub fn then<B>(
		self,
		next: impl FnOnce() -> ValidationPath<E, B>,
	) -> ValidationPath<E, B> {
		match self.0 {
			Validated::Valid(_) => next(),
			Validated::Invalid(e) => ValidationPath(Validated::Invalid(e)),
		}
	}

	/// Converts to [`EitherPath`], which loses the ability to accumulate further errors.
	pub fn to_either_path(self) -> EitherPath<E, A> {
		match self.0 {
			Validated::Valid(a) => EitherPath::right(a),
			Validated::Invalid(e) => EitherPath::left(e),
		}
	}
}

impl<E: Semigroup, A> ValidationPath<E, A> {
	/// Combines two paths with `f`, accumulating both sides' errors with [`Semigroup::append`]
	/// when both are `Invalid`. Never short-circuits: both operands have already been computed
	/// by the time this runs.
	pub fn zip_with_accum<B, C>(
		self,
		other: ValidationPath<E, B>,
		f: impl FnOnce(A, B) -> C,
	) -> ValidationPath<E, C> {
		match (self.0, other.0) {
			(Validated::Valid(a), Validated::Valid(b)) => ValidationPath(Validated::Valid(f(a, b))),
			(Validated::Invalid(e), Validated::Valid(_)) => ValidationPath(Validated::Invalid(e)),
			(Validated::Valid(_), Validated::Invalid(e)) => ValidationPath(Validated::Invalid(e)),
			(Validated::Invalid(e1), Validated::Invalid(e2)) => {
				ValidationPath(Validated::Invalid(E::append(e1, e2)))
			}
		}
	}

	/// Runs `other` purely for its accumulated errors, keeping this path's value when both are
	/// `Valid`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::ValidationPath;
	///
	/// let a: ValidationPath<Vec<&str>, i32> = ValidationPath::valid(1);
	/// let b: ValidationPath<Vec<&str>, i32> = ValidationPath::invalid(vec!["bad"]);
	/// assert_eq!(a.and_also(b).into_validated(), fp_library::types::Validated::Invalid(vec!["bad"]));
	/// ```
	pub fn and_also<B>(
		self,
		other: ValidationPath<E, B>,
	) -> ValidationPath<E, A> {
		match (self.0, other.0) {
			(Validated::Valid(a), Validated::Valid(_)) => ValidationPath(Validated::Valid(a)),
			(Validated::Invalid(e), Validated::Valid(_)) => ValidationPath(Validated::Invalid(e)),
			(Validated::Valid(_), Validated::Invalid(e)) => ValidationPath(Validated::Invalid(e)),
			(Validated::Invalid(e1), Validated::Invalid(e2)) => {
				ValidationPath(Validated::Invalid(E::append(e1, e2)))
			}
		}
	}
}
