//! Implementations for the partially-applied form of [`Result`] with [the success type][Result::Ok] filled in.

use crate::{
	Apply,
	brands::ResultWithOkBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift, monoid::Monoid,
		pointed::Pointed, semiapplicative::Semiapplicative, semimonad::Semimonad,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
};
use std::marker::PhantomData;

/// [Brand][crate::brands] for the partially-applied form of [`Result`] with [the success type][Result::Ok] filled in.
///
/// This is the mirror image of [`ResultWithErrBrand`][super::ResultWithErrBrand]: the success type is fixed
/// and the error type varies, so mapping, folding and traversing act on the [`Err`] value instead of the [`Ok`] value.
pub struct ResultWithOkBrand<Ok>(PhantomData<Ok>);

impl_kind! {
	impl<Ok: 'static> for ResultWithOkBrand<Ok> {
		type Of<'a, Err: 'a>: 'a = Result<Ok, Err>;
	}
}

impl<Ok: 'static> Functor for ResultWithOkBrand<Ok> {
	/// Maps a function over the error value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithOkBrand, classes::functor::map};
	///
	/// assert_eq!(map::<ResultWithOkBrand<bool>, _, _, _>(|x: i32| x * 2, Err(5)), Err(10));
	/// assert_eq!(map::<ResultWithOkBrand<bool>, _, _, _>(|x: i32| x * 2, Ok(true)), Ok(true));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		match fa {
			Ok(ok) => Ok(ok),
			Err(e) => Err(f(e)),
		}
	}
}

impl<Ok: 'static> Lift for ResultWithOkBrand<Ok> {
	/// Lifts a binary function into the result context, combining two errors.
	///
	/// Since there is no way to combine two successes of the fixed `Ok` type, the first one
	/// encountered (in evaluation order) wins, mirroring [`ResultWithErrBrand`][super::ResultWithErrBrand]'s
	/// short-circuit on the first error.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithOkBrand, classes::lift::lift2};
	///
	/// assert_eq!(lift2::<ResultWithOkBrand<bool>, _, _, _, _>(|x: i32, y: i32| x + y, Err(1), Err(2)), Err(3));
	/// assert_eq!(lift2::<ResultWithOkBrand<bool>, _, _, _, _>(|x: i32, y: i32| x + y, Ok(true), Err(2)), Ok(true));
	/// ```
	fn lift2<'a, A, B, C, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		fb: Apply!(brand: Self, signature: ('a, B: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, C: 'a) -> 'a)
	where
		F: Fn(A, B) -> C + 'a,
		A: 'a,
		B: 'a,
		C: 'a,
	{
		match (fa, fb) {
			(Err(a), Err(b)) => Err(f(a, b)),
			(Ok(ok), _) => Ok(ok),
			(_, Ok(ok)) => Ok(ok),
		}
	}
}

impl<Ok: 'static> Pointed for ResultWithOkBrand<Ok> {
	/// Wraps a value as an error.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithOkBrand, classes::pointed::pure};
	///
	/// assert_eq!(pure::<ResultWithOkBrand<bool>, _>(5), Err(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Err(a)
	}
}

impl<Ok: 'static> ApplyFirst for ResultWithOkBrand<Ok> {}
impl<Ok: 'static> ApplySecond for ResultWithOkBrand<Ok> {}

impl<Ok: 'static> Semiapplicative for ResultWithOkBrand<Ok> {
	/// Applies a wrapped function to a wrapped value, both acting on the error side.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{ResultWithOkBrand, RcFnBrand};
	///
	/// let f = Err::<bool, _>(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<ResultWithOkBrand<bool>, _, _, RcFnBrand>(f, Err(5)), Err(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match (ff, fa) {
			(Err(f), Err(a)) => Err(f(a)),
			(Ok(ok), _) => Ok(ok),
			(_, Ok(ok)) => Ok(ok),
		}
	}
}

impl<Ok: 'static> Semimonad for ResultWithOkBrand<Ok> {
	/// Chains result computations on the error side.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithOkBrand, classes::semimonad::bind};
	///
	/// assert_eq!(bind::<ResultWithOkBrand<bool>, _, _, _>(Err(5), |x| Err(x * 2)), Err(10));
	/// assert_eq!(bind::<ResultWithOkBrand<bool>, _, _, _>(Ok(true), |x: i32| Err(x * 2)), Ok(true));
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		ma.or_else(f)
	}
}

impl<Ok: 'static> Foldable for ResultWithOkBrand<Ok> {
	/// Maps the error value to a monoid, or returns empty for a success.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{ResultWithOkBrand, RcFnBrand};
	/// use fp_library::types::string;
	///
	/// assert_eq!(fold_map::<RcFnBrand, ResultWithOkBrand<bool>, _, _, _>(|x: i32| x.to_string(), Err(5)), "5".to_string());
	/// assert_eq!(fold_map::<RcFnBrand, ResultWithOkBrand<bool>, _, _, _>(|x: i32| x.to_string(), Ok(true)), "".to_string());
	/// ```
	fn fold_map<'a, FnBrand, A: 'a + Clone, M, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> M
	where
		M: Monoid + 'a,
		F: Fn(A) -> M + 'a,
		FnBrand: CloneableFn + 'a,
	{
		match fa {
			Err(a) => f(a),
			Ok(_) => M::empty(),
		}
	}
}

impl<Ok: 'static> Traversable for ResultWithOkBrand<Ok> {
	/// Traverses the result with an applicative function over the error side.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{OptionBrand, ResultWithOkBrand};
	///
	/// assert_eq!(traverse::<ResultWithOkBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x * 2), Err(5)), Some(Err(10)));
	/// assert_eq!(traverse::<ResultWithOkBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x * 2), Ok(true)), Some(Ok(true)));
	/// ```
	fn traverse<'a, F: Applicative, A: 'a + Clone, B: 'a + Clone, Func>(
		f: Func,
		ta: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): 'a) -> 'a)
	where
		Func: Fn(A) -> Apply!(brand: F, signature: ('a, B: 'a) -> 'a) + 'a,
		Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): Clone,
	{
		match ta {
			Err(a) => F::map(|b| Err(b), f(a)),
			Ok(ok) => F::pure(Ok(ok)),
		}
	}

	/// Sequences a result of applicative over the error side.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::{OptionBrand, ResultWithOkBrand};
	///
	/// assert_eq!(sequence::<ResultWithOkBrand<bool>, OptionBrand, _>(Err(Some(5))), Some(Err(5)));
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		match ta {
			Err(fa) => F::map(|a| Err(a), fa),
			Ok(ok) => F::pure(Ok(ok)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		brands::RcFnBrand,
		classes::{functor::map, pointed::pure, semiapplicative::apply, semimonad::bind},
		functions::{compose, identity},
	};
	use quickcheck_macros::quickcheck;

	// Functor Laws

	/// Tests the identity law for Functor.
	#[quickcheck]
	fn functor_identity(x: Result<bool, i32>) -> bool {
		map::<ResultWithOkBrand<bool>, _, _, _>(identity, x) == x
	}

	/// Tests the composition law for Functor.
	#[quickcheck]
	fn functor_composition(x: Result<bool, i32>) -> bool {
		let f = |x: i32| x.wrapping_add(1);
		let g = |x: i32| x.wrapping_mul(2);
		map::<ResultWithOkBrand<bool>, _, _, _>(compose(f, g), x)
			== map::<ResultWithOkBrand<bool>, _, _, _>(f, map::<ResultWithOkBrand<bool>, _, _, _>(g, x))
	}

	// Applicative Laws

	/// Tests the identity law for Applicative.
	#[quickcheck]
	fn applicative_identity(v: Result<bool, i32>) -> bool {
		apply::<ResultWithOkBrand<bool>, _, _, RcFnBrand>(
			pure::<ResultWithOkBrand<bool>, _>(<RcFnBrand as CloneableFn>::new(identity)),
			v,
		) == v
	}

	/// Tests the homomorphism law for Applicative.
	#[quickcheck]
	fn applicative_homomorphism(x: i32) -> bool {
		let f = |x: i32| x.wrapping_mul(2);
		apply::<ResultWithOkBrand<bool>, _, _, RcFnBrand>(
			pure::<ResultWithOkBrand<bool>, _>(<RcFnBrand as CloneableFn>::new(f)),
			pure::<ResultWithOkBrand<bool>, _>(x),
		) == pure::<ResultWithOkBrand<bool>, _>(f(x))
	}

	// Monad Laws

	/// Tests the left identity law for Monad.
	#[quickcheck]
	fn monad_left_identity(a: i32) -> bool {
		let f = |x: i32| Err(x.wrapping_mul(2));
		bind::<ResultWithOkBrand<bool>, _, _, _>(pure::<ResultWithOkBrand<bool>, _>(a), f) == f(a)
	}

	/// Tests the right identity law for Monad.
	#[quickcheck]
	fn monad_right_identity(m: Result<bool, i32>) -> bool {
		bind::<ResultWithOkBrand<bool>, _, _, _>(m, pure::<ResultWithOkBrand<bool>, _>) == m
	}

	/// Tests the associativity law for Monad.
	#[quickcheck]
	fn monad_associativity(m: Result<bool, i32>) -> bool {
		let f = |x: i32| Err(x.wrapping_mul(2));
		let g = |x: i32| Err(x.wrapping_add(1));
		bind::<ResultWithOkBrand<bool>, _, _, _>(bind::<ResultWithOkBrand<bool>, _, _, _>(m, f), g)
			== bind::<ResultWithOkBrand<bool>, _, _, _>(m, |x| bind::<ResultWithOkBrand<bool>, _, _, _>(f(x), g))
	}

	// Edge Cases

	/// Tests `map` on `Ok`.
	#[test]
	fn map_ok() {
		assert_eq!(map::<ResultWithOkBrand<bool>, _, _, _>(|x: i32| x + 1, Ok(true)), Ok(true));
	}

	/// Tests `bind` on `Ok`.
	#[test]
	fn bind_ok() {
		assert_eq!(bind::<ResultWithOkBrand<bool>, _, _, _>(Ok(true), |x: i32| Err(x + 1)), Ok(true));
	}

	/// Tests `bind` returning `Ok`.
	#[test]
	fn bind_returning_ok() {
		assert_eq!(bind::<ResultWithOkBrand<bool>, _, _, _>(Err(5), |_| Ok(true)), Ok(true));
	}

	/// Tests `fold_map` on `Ok`.
	#[test]
	fn fold_map_ok() {
		assert_eq!(
			crate::classes::foldable::fold_map::<RcFnBrand, ResultWithOkBrand<bool>, _, String, _>(
				|x: i32| x.to_string(),
				Ok(true)
			),
			"".to_string()
		);
	}

	/// Tests `traverse` on `Ok`.
	#[test]
	fn traverse_ok() {
		assert_eq!(
			crate::classes::traversable::traverse::<ResultWithOkBrand<bool>, crate::brands::OptionBrand, _, _, _>(
				|x: i32| Some(x + 1),
				Ok(true)
			),
			Some(Ok(true))
		);
	}

	/// Tests `traverse` returning `None`.
	#[test]
	fn traverse_returning_none() {
		assert_eq!(
			crate::classes::traversable::traverse::<ResultWithOkBrand<bool>, crate::brands::OptionBrand, _, _, _>(
				|_: i32| None::<i32>,
				Err(5)
			),
			None
		);
	}
}
