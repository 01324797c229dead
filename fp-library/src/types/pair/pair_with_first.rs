//! Implementations for the partially-applied form of [`Pair`] with [the first value][Pair#structfield.0] filled in.

use crate::{
	Apply,
	brands::PairWithFirstBrand,
	classes::{
		applicative::Applicative, foldable::Foldable, functor::Functor, monoid::Monoid,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
	types::Pair,
};
use std::marker::PhantomData;

/// [Brand][crate::brands] for the partially-applied form of [`Pair`] with [the first value][Pair#structfield.0] filled in.
pub struct PairWithFirstBrand<First>(PhantomData<First>);

impl_kind! {
	impl<First: 'static> for PairWithFirstBrand<First> {
		type Of<'a, Second: 'a>: 'a = Pair<First, Second>;
	}
}

impl<First: 'static> Functor for PairWithFirstBrand<First> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::PairWithFirstBrand, classes::functor::map, types::Pair};
	///
	/// assert_eq!(map::<PairWithFirstBrand<bool>, _, _, _>(|x: i32| x + 1, Pair(true, 5)), Pair(true, 6));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		Pair(fa.0, f(fa.1))
	}
}

impl<First: 'static> Foldable for PairWithFirstBrand<First> {
	/// The only sensible minimal implementation, since a pair with the first value fixed
	/// always holds exactly one foldable value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{PairWithFirstBrand, RcFnBrand}, classes::foldable::fold_map, types::Pair};
	/// use fp_library::types::string;
	///
	/// assert_eq!(fold_map::<RcFnBrand, PairWithFirstBrand<bool>, _, _, _>(|x: i32| x.to_string(), Pair(true, 5)), "5".to_string());
	/// ```
	fn fold_map<'a, FnBrand, A: 'a + Clone, M, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> M
	where
		M: Monoid + 'a,
		F: Fn(A) -> M + 'a,
		FnBrand: crate::classes::cloneable_fn::CloneableFn + 'a,
	{
		f(fa.1)
	}
}

impl<First: 'static + Clone> Traversable for PairWithFirstBrand<First> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{OptionBrand, PairWithFirstBrand}, classes::traversable::traverse, types::Pair};
	///
	/// assert_eq!(
	///     traverse::<PairWithFirstBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x + 1), Pair(true, 5)),
	///     Some(Pair(true, 6))
	/// );
	/// ```
	fn traverse<'a, F: Applicative, A: 'a + Clone, B: 'a + Clone, Func>(
		f: Func,
		ta: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): 'a) -> 'a)
	where
		Func: Fn(A) -> Apply!(brand: F, signature: ('a, B: 'a) -> 'a) + 'a,
		Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): Clone,
	{
		let first = ta.0;
		F::map(move |b| Pair(first.clone(), b), f(ta.1))
	}

	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{OptionBrand, PairWithFirstBrand}, classes::traversable::sequence, types::Pair};
	///
	/// assert_eq!(
	///     sequence::<PairWithFirstBrand<bool>, OptionBrand, _>(Pair(true, Some(5))),
	///     Some(Pair(true, 5))
	/// );
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		let first = ta.0;
		F::map(move |a| Pair(first.clone(), a), ta.1)
	}
}
