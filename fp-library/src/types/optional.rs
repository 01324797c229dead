//! Implementations for [`Optional`], a bespoke presence/absence type distinct from [`Option`].
//!
//! Shares `Option`'s algebra exactly (see [`types::option`](crate::types::option)) but is a
//! separate enum so call sites that want a named "optional value" type, rather than the
//! standard library's `Option`, have one to reach for.

use crate::{
	Apply,
	brands::OptionalBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift,
		monad_rec::MonadRec, monoid::Monoid, pointed::Pointed, semiapplicative::Semiapplicative,
		semimonad::Semimonad, traversable::Traversable,
	},
	impl_kind,
	kinds::*,
	types::step::Step,
};

/// A value that may or may not be present.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Optional<A> {
	Present(A),
	Absent,
}

impl<A> Optional<A> {
	/// Returns `true` if this is `Present`.
	pub fn is_present(&self) -> bool {
		matches!(self, Optional::Present(_))
	}

	/// Returns `true` if this is `Absent`.
	pub fn is_absent(&self) -> bool {
		matches!(self, Optional::Absent)
	}

	/// Returns the contained value, or `default` if `Absent`.
	pub fn get_or_else(
		self,
		default: A,
	) -> A {
		match self {
			Optional::Present(a) => a,
			Optional::Absent => default,
		}
	}

	/// Collapses both branches into a single value.
	pub fn fold<B>(
		self,
		on_absent: impl FnOnce() -> B,
		on_present: impl FnOnce(A) -> B,
	) -> B {
		match self {
			Optional::Present(a) => on_present(a),
			Optional::Absent => on_absent(),
		}
	}

	/// Converts into a standard [`Option`].
	pub fn into_option(self) -> Option<A> {
		match self {
			Optional::Present(a) => Some(a),
			Optional::Absent => None,
		}
	}

	/// Converts from a standard [`Option`].
	pub fn from_option(option: Option<A>) -> Self {
		match option {
			Some(a) => Optional::Present(a),
			None => Optional::Absent,
		}
	}
}

/// Brand for [`Optional<A>`].
pub struct OptionalBrand;

impl_kind! {
	for OptionalBrand {
		type Of<'a, A: 'a>: 'a = Optional<A>;
	}
}

impl Functor for OptionalBrand {
	/// Maps a function over the value, if present.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionalBrand, classes::functor::map, types::Optional};
	///
	/// assert_eq!(map::<OptionalBrand, _, _, _>(|x: i32| x * 2, Optional::Present(5)), Optional::Present(10));
	/// assert_eq!(map::<OptionalBrand, _, _, _>(|x: i32| x * 2, Optional::Absent), Optional::Absent);
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		match fa {
			Optional::Present(a) => Optional::Present(f(a)),
			Optional::Absent => Optional::Absent,
		}
	}
}

impl Lift for OptionalBrand {
	/// Lifts a binary function into the optional context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionalBrand, classes::lift::lift2, types::Optional};
	///
	/// assert_eq!(
	///     lift2::<OptionalBrand, _, _, _, _>(|x: i32, y: i32| x + y, Optional::Present(1), Optional::Present(2)),
	///     Optional::Present(3)
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
		match (fa, fb) {
			(Optional::Present(a), Optional::Present(b)) => Optional::Present(f(a, b)),
			_ => Optional::Absent,
		}
	}
}

impl Pointed for OptionalBrand {
	/// Wraps a value as present.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionalBrand, classes::pointed::pure, types::Optional};
	///
	/// assert_eq!(pure::<OptionalBrand, _>(5), Optional::Present(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Optional::Present(a)
	}
}

impl ApplyFirst for OptionalBrand {}
impl ApplySecond for OptionalBrand {}

impl Semiapplicative for OptionalBrand {
	/// Applies a wrapped function to a wrapped value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{OptionalBrand, RcFnBrand};
	/// use fp_library::types::Optional;
	///
	/// let f = Optional::Present(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<OptionalBrand, _, _, RcFnBrand>(f, Optional::Present(5)), Optional::Present(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match (ff, fa) {
			(Optional::Present(f), Optional::Present(a)) => Optional::Present(f(a)),
			_ => Optional::Absent,
		}
	}
}

impl Semimonad for OptionalBrand {
	/// Chains optional computations.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionalBrand, classes::semimonad::bind, types::Optional};
	///
	/// assert_eq!(bind::<OptionalBrand, _, _, _>(Optional::Present(5), |x| Optional::Present(x * 2)), Optional::Present(10));
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		match ma {
			Optional::Present(a) => f(a),
			Optional::Absent => Optional::Absent,
		}
	}
}

impl Foldable for OptionalBrand {
	/// Maps the value to a monoid and returns it, or returns empty.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{OptionalBrand, RcFnBrand};
	/// use fp_library::types::{string, Optional};
	///
	/// assert_eq!(fold_map::<RcFnBrand, OptionalBrand, _, _, _>(|x: i32| x.to_string(), Optional::Present(5)), "5".to_string());
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
			Optional::Present(a) => f(a),
			Optional::Absent => M::empty(),
		}
	}
}

impl MonadRec for OptionalBrand {
	/// Runs a step function in a loop until it returns `Step::Done`, or `Absent` short-circuits the loop.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionalBrand, classes::monad_rec::tail_rec_m, types::{Optional, Step}};
	///
	/// let result = tail_rec_m::<OptionalBrand, _, _, _>(
	///     |n: i32| if n >= 10 { Optional::Present(Step::Done(n)) } else { Optional::Present(Step::Loop(n + 1)) },
	///     0,
	/// );
	/// assert_eq!(result, Optional::Present(10));
	/// ```
	fn tail_rec_m<'a, A: 'a, B: 'a, F>(
		f: F,
		a: A,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, Step<A, B>: 'a) -> 'a) + Clone + 'a,
	{
		let mut current = a;
		loop {
			match f(current) {
				Optional::Present(Step::Loop(next)) => current = next,
				Optional::Present(Step::Done(b)) => return Optional::Present(b),
				Optional::Absent => return Optional::Absent,
			}
		}
	}
}

impl Traversable for OptionalBrand {
	/// Traverses the optional with an applicative function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{OptionBrand, OptionalBrand};
	/// use fp_library::types::Optional;
	///
	/// assert_eq!(traverse::<OptionalBrand, OptionBrand, _, _, _>(|x| Some(x * 2), Optional::Present(5)), Some(Optional::Present(10)));
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
			Optional::Present(a) => F::map(|b| Optional::Present(b), f(a)),
			Optional::Absent => F::pure(Optional::Absent),
		}
	}

	/// Sequences an optional of applicative.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::{OptionBrand, OptionalBrand};
	/// use fp_library::types::Optional;
	///
	/// assert_eq!(sequence::<OptionalBrand, OptionBrand, _>(Optional::Present(Some(5))), Some(Optional::Present(5)));
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		match ta {
			Optional::Present(fa) => F::map(|a| Optional::Present(a), fa),
			Optional::Absent => F::pure(Optional::Absent),
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

	fn arbitrary_optional(present: bool, value: i32) -> Optional<i32> {
		if present { Optional::Present(value) } else { Optional::Absent }
	}

	/// Tests the identity law for Functor.
	#[quickcheck]
	fn functor_identity(present: bool, value: i32) -> bool {
		let x = arbitrary_optional(present, value);
		map::<OptionalBrand, _, _, _>(identity, x) == x
	}

	/// Tests the composition law for Functor.
	#[quickcheck]
	fn functor_composition(present: bool, value: i32) -> bool {
		let x = arbitrary_optional(present, value);
		let f = |x: i32| x.wrapping_add(1);
		let g = |x: i32| x.wrapping_mul(2);
		map::<OptionalBrand, _, _, _>(compose(f, g), x)
			== map::<OptionalBrand, _, _, _>(f, map::<OptionalBrand, _, _, _>(g, x))
	}

	/// Tests the left identity law for Monad.
	#[quickcheck]
	fn monad_left_identity(a: i32) -> bool {
		let f = |x: i32| Optional::Present(x.wrapping_mul(2));
		bind::<OptionalBrand, _, _, _>(pure::<OptionalBrand, _>(a), f) == f(a)
	}

	/// Tests the right identity law for Monad.
	#[quickcheck]
	fn monad_right_identity(present: bool, value: i32) -> bool {
		let m = arbitrary_optional(present, value);
		bind::<OptionalBrand, _, _, _>(m, pure::<OptionalBrand, _>) == m
	}

	#[test]
	fn is_present_absent_test() {
		assert!(Optional::Present(1).is_present());
		assert!(!Optional::<i32>::Absent.is_present());
		assert!(Optional::<i32>::Absent.is_absent());
	}

	#[test]
	fn get_or_else_test() {
		assert_eq!(Optional::Present(1).get_or_else(0), 1);
		assert_eq!(Optional::Absent.get_or_else(0), 0);
	}

	#[test]
	fn conversion_test() {
		assert_eq!(Optional::from_option(Some(5)), Optional::Present(5));
		assert_eq!(Optional::from_option(None::<i32>), Optional::Absent);
		assert_eq!(Optional::Present(5).into_option(), Some(5));
		assert_eq!(Optional::<i32>::Absent.into_option(), None);
	}

	#[test]
	fn apply_test() {
		let f = Optional::Present(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
		assert_eq!(apply::<OptionalBrand, _, _, RcFnBrand>(f, Optional::Present(5)), Optional::Present(10));
		assert_eq!(apply::<OptionalBrand, _, _, RcFnBrand>(Optional::Absent, Optional::Present(5)), Optional::Absent);
	}

	#[test]
	fn bind_test() {
		assert_eq!(
			bind::<OptionalBrand, _, _, _>(Optional::Present(5), |x| Optional::Present(x * 2)),
			Optional::Present(10)
		);
		assert_eq!(bind::<OptionalBrand, _, _, _>(Optional::Absent, |x: i32| Optional::Present(x * 2)), Optional::Absent);
	}
}
