//! Implementations for [`Pair`], a type that wraps two values.

pub mod pair_with_first;
pub mod pair_with_second;

use crate::{Apply, brands::PairBrand, classes::bifunctor::Bifunctor, impl_kind, kinds::*};
pub use pair_with_first::*;
pub use pair_with_second::*;

/// Wraps two values.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pair<First, Second>(pub First, pub Second);

impl<First, Second> Pair<First, Second>
where
	First: Clone,
{
	/// Curried constructor for [`Pair`].
	pub fn new(first: First) -> impl Fn(Second) -> Self {
		move |second| Pair(first.to_owned(), second)
	}
}

/// Brand for [`Pair<First, Second>`].
pub struct PairBrand;

impl_kind! {
	for PairBrand {
		type Of<'a, First: 'a, Second: 'a>: 'a = Pair<First, Second>;
	}
}

impl Bifunctor for PairBrand {
	/// Maps functions over both values of the pair.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::PairBrand, classes::bifunctor::bimap, types::Pair};
	///
	/// assert_eq!(bimap::<PairBrand, _, _, _, _, _, _>(|x: i32| x + 1, |y: i32| y * 2, Pair(1, 2)), Pair(2, 4));
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
		Pair(f(p.0), g(p.1))
	}
}
