//! Implementations for [`Choice`], a tagged union of two possible values.
//!
//! Distinct from [`Result`](crate::types::result), which carries the connotation of success and
//! failure. `Choice` is the plain either-or sum type used by [`Selective::select`] and other
//! places where neither side is privileged as the "error" side.

use crate::{Apply, brands::ChoiceBrand, classes::bifunctor::Bifunctor, impl_kind, kinds::*};

/// A tagged union holding either a `Left` or a `Right` value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Choice<A, B> {
	Left(A),
	Right(B),
}

impl<A, B> Choice<A, B> {
	/// Returns `true` if this is a `Left`.
	pub fn is_left(&self) -> bool {
		matches!(self, Choice::Left(_))
	}

	/// Returns `true` if this is a `Right`.
	pub fn is_right(&self) -> bool {
		matches!(self, Choice::Right(_))
	}

	/// Collapses both branches into a single value.
	pub fn fold<C>(
		self,
		on_left: impl FnOnce(A) -> C,
		on_right: impl FnOnce(B) -> C,
	) -> C {
		match self {
			Choice::Left(a) => on_left(a),
			Choice::Right(b) => on_right(b),
		}
	}
}

/// Brand for [`Choice<A, B>`], treating the left type as the first type parameter and the
/// right type as the second, matching [`Bifunctor::bimap`]'s argument order.
pub struct ChoiceBrand;

impl_kind! {
	for ChoiceBrand {
		type Of<'a, A: 'a, B: 'a>: 'a = Choice<A, B>;
	}
}

impl Bifunctor for ChoiceBrand {
	/// Maps a function over the left value and another over the right value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ChoiceBrand, classes::bifunctor::bimap, types::Choice};
	///
	/// let x: Choice<i32, i32> = Choice::Left(5);
	/// assert_eq!(bimap::<ChoiceBrand, _, _, _, _, _, _>(|a: i32| a + 1, |b: i32| b * 2, x), Choice::Left(6));
	///
	/// let y: Choice<i32, i32> = Choice::Right(5);
	/// assert_eq!(bimap::<ChoiceBrand, _, _, _, _, _, _>(|a: i32| a + 1, |b: i32| b * 2, y), Choice::Right(10));
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
			Choice::Left(a) => Choice::Left(f(a)),
			Choice::Right(c) => Choice::Right(g(c)),
		}
	}
}
