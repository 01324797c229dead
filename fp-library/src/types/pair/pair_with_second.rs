//! Implementations for the partially-applied form of [`Pair`] with [the second value][Pair#structfield.1] filled in.

use crate::{
	Apply,
	brands::PairWithSecondBrand,
	classes::{
		applicative::Applicative, foldable::Foldable, functor::Functor, monoid::Monoid,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
	types::Pair,
};
use std::marker::PhantomData;

/// [Brand][crate::brands] for the partially-applied form of [`Pair`] with [the second value][Pair#structfield.1] filled in.
pub struct PairWithSecondBrand<Second>(PhantomData<Second>);

impl_kind! {
	impl<Second: 'static> for PairWithSecondBrand<Second> {
		type Of<'a, First: 'a>: 'a = Pair<First, Second>;
	}
}

impl<Second: 'static> Functor for PairWithSecondBrand<Second> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::PairWithSecondBrand, classes::functor::map, types::Pair};
	///
	/// assert_eq!(map::<PairWithSecondBrand<bool>, _, _, _>(|x: i32| x + 1, Pair(5, true)), Pair(6, true));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		Pair(f(fa.0), fa.1)
	}
}

impl<Second: 'static> Foldable for PairWithSecondBrand<Second> {
	/// The only sensible minimal implementation, since a pair with the second value fixed
	/// always holds exactly one foldable value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{PairWithSecondBrand, RcFnBrand}, classes::foldable::fold_map, types::Pair};
	/// use fp_library::types::string;
	///
	/// assert_eq!(fold_map::<RcFnBrand, PairWithSecondBrand<bool>, _, _, _>(|x: i32| x.to_string(), Pair(5, true)), "5".to_string());
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
		f(fa.0)
	}
}

impl<Second: 'static + Clone> Traversable for PairWithSecondBrand<Second> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{OptionBrand, PairWithSecondBrand}, classes::traversable::traverse, types::Pair};
	///
	/// assert_eq!(
	///     traverse::<PairWithSecondBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x + 1), Pair(5, true)),
	///     Some(Pair(6, true))
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
		let second = ta.1;
		F::map(move |a| Pair(a, second.clone()), f(ta.0))
	}

	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::{OptionBrand, PairWithSecondBrand}, classes::traversable::sequence, types::Pair};
	///
	/// assert_eq!(
	///     sequence::<PairWithSecondBrand<bool>, OptionBrand, _>(Pair(Some(5), true)),
	///     Some(Pair(5, true))
	/// );
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		let second = ta.1;
		F::map(move |a| Pair(a, second.clone()), ta.0)
	}
}
