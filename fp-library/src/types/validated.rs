//! Implementations for [`Validated`], an accumulating-error alternative to [`Result`].
//!
//! Where [`Result`](crate::types::result)'s applicative short-circuits on the first error,
//! `Validated`'s applicative combines every `Invalid` it encounters with [`Semigroup::append`],
//! so independent validations can all report their failures at once. Because of this it has no
//! lawful `Monad` instance (there is no `bind` that could see an earlier failure before running
//! the next step) — only `Functor`, `Bifunctor`, and an accumulating `Applicative`.

use crate::{
	Apply,
	brands::ValidatedBrand,
	classes::{
		apply_first::ApplyFirst, apply_second::ApplySecond, bifunctor::Bifunctor,
		cloneable_fn::CloneableFn, functor::Functor, pointed::Pointed, semigroup::Semigroup,
		semiapplicative::Semiapplicative,
	},
	impl_kind,
	kinds::*,
};
use std::marker::PhantomData;

/// Either a valid value or one or more accumulated errors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Validated<E, A> {
	Valid(A),
	Invalid(E),
}

impl<E, A> Validated<E, A> {
	/// Returns `true` if this is `Valid`.
	pub fn is_valid(&self) -> bool {
		matches!(self, Validated::Valid(_))
	}

	/// Returns `true` if this is `Invalid`.
	pub fn is_invalid(&self) -> bool {
		matches!(self, Validated::Invalid(_))
	}

	/// Collapses both branches into a single value.
	pub fn fold<B>(
		self,
		on_invalid: impl FnOnce(E) -> B,
		on_valid: impl FnOnce(A) -> B,
	) -> B {
		match self {
			Validated::Valid(a) => on_valid(a),
			Validated::Invalid(e) => on_invalid(e),
		}
	}

	/// Converts into a standard [`Result`], discarding the distinction between accumulating and
	/// short-circuiting semantics.
	pub fn into_result(self) -> Result<A, E> {
		match self {
			Validated::Valid(a) => Ok(a),
			Validated::Invalid(e) => Err(e),
		}
	}
}

/// [Brand][crate::brands] for the partially-applied form of [`Validated`] with the error type
/// filled in. `E` must be a [`Semigroup`] so that two `Invalid` values can be combined.
pub struct ValidatedBrand<E>(PhantomData<E>);

impl_kind! {
	impl<E: 'static> for ValidatedBrand<E> {
		type Of<'a, A: 'a>: 'a = Validated<E, A>;
	}
}

impl<E: 'static> Functor for ValidatedBrand<E> {
	/// Maps a function over the valid value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ValidatedBrand, classes::functor::map, types::Validated};
	///
	/// assert_eq!(map::<ValidatedBrand<String>, _, _, _>(|x: i32| x * 2, Validated::Valid(5)), Validated::Valid(10));
	/// assert_eq!(
	///     map::<ValidatedBrand<String>, _, _, _>(|x: i32| x * 2, Validated::Invalid("bad".to_string())),
	///     Validated::Invalid("bad".to_string())
	/// );
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		match fa {
			Validated::Valid(a) => Validated::Valid(f(a)),
			Validated::Invalid(e) => Validated::Invalid(e),
		}
	}
}

impl<E: 'static> Bifunctor for ValidatedBrand<E> {
	/// Maps a function over the error value and another over the valid value.
	///
	/// The first type parameter is the error side, matching [`Bifunctor::bimap`]'s convention
	/// elsewhere in this crate (see [`ResultBrand`](crate::types::result::ResultBrand)).
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ValidatedBrand, classes::bifunctor::bimap, types::Validated};
	///
	/// let x: Validated<i32, i32> = Validated::Valid(5);
	/// assert_eq!(bimap::<ValidatedBrand<i32>, _, _, _, _, _, _>(|e: i32| e + 1, |a: i32| a * 2, x), Validated::Valid(10));
	/// ```
	fn bimap<'a, A: 'a, B: 'a, C: 'a, D: 'a, F, G>(
		f: F,
		g: G,
		p: Apply!(brand: Self, signature: ('a, A: 'a, C: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a, D: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
		G: Fn(C) -> D + 'a,
	{
		match p {
			Validated::Valid(c) => Validated::Valid(g(c)),
			Validated::Invalid(a) => Validated::Invalid(f(a)),
		}
	}
}

impl<E: 'static> Pointed for ValidatedBrand<E> {
	/// Wraps a value as valid.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ValidatedBrand, classes::pointed::pure, types::Validated};
	///
	/// assert_eq!(pure::<ValidatedBrand<String>, _>(5), Validated::Valid(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Validated::Valid(a)
	}
}

impl<E: 'static> ApplyFirst for ValidatedBrand<E> {}
impl<E: 'static> ApplySecond for ValidatedBrand<E> {}

impl<E: 'static + Semigroup> Semiapplicative for ValidatedBrand<E> {
	/// Applies a wrapped function to a wrapped value, combining both sides' errors with
	/// [`Semigroup::append`] when both are `Invalid`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{ValidatedBrand, RcFnBrand};
	/// use fp_library::types::{string, Validated};
	///
	/// let f: Validated<String, _> = Validated::Valid(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<ValidatedBrand<String>, _, _, RcFnBrand>(f, Validated::Valid(5)), Validated::Valid(10));
	///
	/// let errs = apply::<ValidatedBrand<String>, i32, i32, RcFnBrand>(
	///     Validated::Invalid("a".to_string()),
	///     Validated::Invalid("b".to_string()),
	/// );
	/// assert_eq!(errs, Validated::Invalid("ab".to_string()));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match (ff, fa) {
			(Validated::Valid(f), Validated::Valid(a)) => Validated::Valid(f(a)),
			(Validated::Invalid(e), Validated::Valid(_)) => Validated::Invalid(e),
			(Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
			(Validated::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(E::append(e1, e2)),
		}
	}
}
