//! Implementations for [`Solo`], a type that wraps a value.

use crate::{
	Apply,
	brands::SoloBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift, monoid::Monoid,
		pointed::Pointed, semiapplicative::Semiapplicative, semimonad::Semimonad,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
};

/// Wraps a value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Solo<A>(pub A);

impl_kind! {
	for SoloBrand {
		type Of<'a, A: 'a>: 'a = Solo<A>;
	}
}

impl Functor for SoloBrand {
	/// Maps a function over the value in the solo.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::functor::map;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(map::<SoloBrand, _, _, _>(|x: i32| x * 2, Solo(5)), Solo(10));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		Solo(f(fa.0))
	}
}

impl Lift for SoloBrand {
	/// Lifts a binary function into the solo context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::lift::lift2;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(
	///     lift2::<SoloBrand, _, _, _, _>(|x: i32, y: i32| x + y, Solo(1), Solo(2)),
	///     Solo(3)
	/// );
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
		Solo(f(fa.0, fb.0))
	}
}

impl Pointed for SoloBrand {
	/// Wraps a value in a solo.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::pointed::pure;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(pure::<SoloBrand, _>(5), Solo(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Solo(a)
	}
}

impl ApplyFirst for SoloBrand {}
impl ApplySecond for SoloBrand {}

impl Semiapplicative for SoloBrand {
	/// Applies a wrapped function to a wrapped value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	/// use fp_library::brands::RcFnBrand;
	/// use std::rc::Rc;
	///
	/// let f = Solo(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<SoloBrand, _, _, RcFnBrand>(f, Solo(5)), Solo(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		Solo(ff.0(fa.0))
	}
}

impl Semimonad for SoloBrand {
	/// Chains solo computations.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semimonad::bind;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(
	///     bind::<SoloBrand, _, _, _>(Solo(5), |x| Solo(x * 2)),
	///     Solo(10)
	/// );
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		f(ma.0)
	}
}

impl Foldable for SoloBrand {
	/// Folds the solo from the right.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_right;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(fold_right::<SoloBrand, _, _, _>(|x: i32, acc| x + acc, 0, Solo(5)), 5);
	/// ```
	fn fold_right<'a, A: 'a, B: 'a, F>(
		f: F,
		init: B,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> B
	where
		F: Fn(A, B) -> B + 'a,
	{
		f(fa.0, init)
	}

	/// Folds the solo from the left.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_left;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(fold_left::<SoloBrand, _, _, _>(|acc, x: i32| acc + x, 0, Solo(5)), 5);
	/// ```
	fn fold_left<'a, A: 'a, B: 'a, F>(
		f: F,
		init: B,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> B
	where
		F: Fn(B, A) -> B + 'a,
	{
		f(init, fa.0)
	}

	/// Maps the value to a monoid and returns it.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::SoloBrand;
	/// use fp_library::types::Solo;
	/// use fp_library::types::string; // Import to bring Monoid impl for String into scope
	///
	/// assert_eq!(fold_map::<SoloBrand, _, _, _>(|x: i32| x.to_string(), Solo(5)), "5".to_string());
	/// ```
	fn fold_map<'a, A: 'a, M, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> M
	where
		M: Monoid + 'a,
		F: Fn(A) -> M + 'a,
	{
		f(fa.0)
	}
}

impl Traversable for SoloBrand {
	/// Traverses the solo with an applicative function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{SoloBrand, OptionBrand};
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(
	///     traverse::<SoloBrand, OptionBrand, _, _, _>(|x| Some(x * 2), Solo(5)),
	///     Some(Solo(10))
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
		F::map(|b| Solo(b), f(ta.0))
	}

	/// Sequences a solo of applicative.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::{SoloBrand, OptionBrand};
	/// use fp_library::types::Solo;
	///
	/// assert_eq!(
	///     sequence::<SoloBrand, OptionBrand, _>(Solo(Some(5))),
	///     Some(Solo(5))
	/// );
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		F::map(|a| Solo(a), ta.0)
	}
}
