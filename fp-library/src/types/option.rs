//! Implementations for [`Option`].

use crate::{
	Apply,
	brands::{OptionBrand, ResultWithErrBrand},
	classes::{
		alternative::Alternative, applicative::Applicative, apply_first::ApplyFirst,
		apply_second::ApplySecond, cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor,
		lift::Lift, monad_rec::MonadRec, monad_zero::MonadZero, monoid::Monoid, natural::Natural,
		pointed::Pointed, selective::Selective, semiapplicative::Semiapplicative,
		semimonad::Semimonad, traversable::Traversable,
	},
	impl_kind,
	kinds::*,
	types::{choice::Choice, step::Step},
};

impl_kind! {
	for OptionBrand {
		type Of<'a, A: 'a>: 'a = Option<A>;
	}
}

impl Functor for OptionBrand {
	/// Maps a function over the value in the option.
	///
	/// # Type Signature
	///
	/// `forall a b. Functor Option => (a -> b, Option a) -> Option b`
	///
	/// # Parameters
	///
	/// * `f`: The function to apply to the value.
	/// * `fa`: The option to map over.
	///
	/// # Returns
	///
	/// A new option containing the result of applying the function, or `None`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::functor::map;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(map::<OptionBrand, _, _, _>(|x: i32| x * 2, Some(5)), Some(10));
	/// assert_eq!(map::<OptionBrand, _, _, _>(|x: i32| x * 2, None), None);
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(
			brand: Self,
			signature: ('a, A: 'a) -> 'a,
		),
	) -> Apply!(
		brand: Self,
		signature: ('a, B: 'a) -> 'a,
	)
	where
		F: Fn(A) -> B + 'a,
	{
		fa.map(f)
	}
}

impl Lift for OptionBrand {
	/// Lifts a binary function into the option context.
	///
	/// # Type Signature
	///
	/// `forall a b c. Lift Option => ((a, b) -> c, Option a, Option b) -> Option c`
	///
	/// # Parameters
	///
	/// * `f`: The binary function to apply.
	/// * `fa`: The first option.
	/// * `fb`: The second option.
	///
	/// # Returns
	///
	/// `Some(f(a, b))` if both options are `Some`, otherwise `None`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::lift::lift2;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(lift2::<OptionBrand, _, _, _, _>(|x: i32, y: i32| x + y, Some(1), Some(2)), Some(3));
	/// assert_eq!(lift2::<OptionBrand, _, _, _, _>(|x: i32, y: i32| x + y, Some(1), None), None);
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
		fa.zip(fb).map(|(a, b)| f(a, b))
	}
}

impl Pointed for OptionBrand {
	/// Wraps a value in an option.
	///
	/// # Type Signature
	///
	/// `forall a. Pointed Option => a -> Option a`
	///
	/// # Parameters
	///
	/// * `a`: The value to wrap.
	///
	/// # Returns
	///
	/// `Some(a)`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::pointed::pure;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(pure::<OptionBrand, _>(5), Some(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Some(a)
	}
}

impl ApplyFirst for OptionBrand {}
impl ApplySecond for OptionBrand {}

impl Semiapplicative for OptionBrand {
	/// Applies a wrapped function to a wrapped value.
	///
	/// # Type Signature
	///
	/// `forall a b. Semiapplicative Option => (Option (a -> b), Option a) -> Option b`
	///
	/// # Parameters
	///
	/// * `ff`: The option containing the function.
	/// * `fa`: The option containing the value.
	///
	/// # Returns
	///
	/// `Some(f(a))` if both are `Some`, otherwise `None`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{OptionBrand};
	/// use fp_library::brands::RcFnBrand;
	/// use std::rc::Rc;
	///
	/// let f = Some(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<OptionBrand, _, _, RcFnBrand>(f, Some(5)), Some(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match (ff, fa) {
			(Some(f), Some(a)) => Some(f(a)),
			_ => None,
		}
	}
}

impl Selective for OptionBrand {
	/// Applies the wrapped function to the `Left` payload, or passes the `Right` payload through.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::classes::selective::select;
	/// use fp_library::brands::{OptionBrand, RcFnBrand};
	/// use fp_library::types::Choice;
	///
	/// let f = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
	/// assert_eq!(select::<OptionBrand, _, _, RcFnBrand>(Some(Choice::Left(5)), Some(f.clone())), Some(10));
	/// assert_eq!(select::<OptionBrand, _, _, RcFnBrand>(Some(Choice::Right(7)), Some(f)), Some(7));
	/// ```
	fn select<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		fab: Apply!(brand: Self, signature: ('a, Choice<A, B>: 'a) -> 'a),
		ff: Apply!(brand: Self, signature: ('a, <FnBrand as CloneableFn>::Of<'a, A, B>: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match fab? {
			Choice::Left(a) => Some(ff?(a)),
			Choice::Right(b) => Some(b),
		}
	}
}

impl Semimonad for OptionBrand {
	/// Chains option computations.
	///
	/// # Type Signature
	///
	/// `forall a b. Semimonad Option => (Option a, a -> Option b) -> Option b`
	///
	/// # Parameters
	///
	/// * `ma`: The first option.
	/// * `f`: The function to apply to the value inside the option.
	///
	/// # Returns
	///
	/// The result of applying `f` to the value if `ma` is `Some`, otherwise `None`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semimonad::bind;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(bind::<OptionBrand, _, _, _>(Some(5), |x| Some(x * 2)), Some(10));
	/// assert_eq!(bind::<OptionBrand, _, _, _>(None, |x: i32| Some(x * 2)), None);
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		ma.and_then(f)
	}
}

impl Foldable for OptionBrand {
	/// Maps the value to a monoid and returns it, or returns empty.
	///
	/// # Type Signature
	///
	/// `forall a m. (Foldable Option, Monoid m) => ((a) -> m, Option a) -> m`
	///
	/// # Parameters
	///
	/// * `f`: The mapping function.
	/// * `fa`: The option to fold.
	///
	/// # Returns
	///
	/// `f(a)` if `fa` is `Some(a)`, otherwise `M::empty()`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{OptionBrand, RcFnBrand};
	/// use fp_library::types::string; // Import to bring Monoid impl for String into scope
	///
	/// assert_eq!(fold_map::<RcFnBrand, OptionBrand, _, _, _>(|x: i32| x.to_string(), Some(5)), "5".to_string());
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
			Some(a) => f(a),
			None => M::empty(),
		}
	}
}

impl MonadZero for OptionBrand {
	/// The empty option.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, classes::monad_zero::zero};
	///
	/// assert_eq!(zero::<OptionBrand, i32>(), None);
	/// ```
	fn zero<'a, A: 'a>() -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		None
	}
}

impl Alternative for OptionBrand {
	/// The empty option.
	fn empty<'a, A: 'a>() -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		None
	}

	/// Returns `fa` if it is `Some`, otherwise `fb`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, classes::alternative::or_else};
	///
	/// assert_eq!(or_else::<OptionBrand, _>(None, Some(5)), Some(5));
	/// assert_eq!(or_else::<OptionBrand, _>(Some(1), Some(5)), Some(1));
	/// ```
	fn or_else<'a, A: 'a>(
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		fb: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		fa.or(fb)
	}
}

impl MonadRec for OptionBrand {
	/// Runs a step function in a loop until it returns `Step::Done`, or `None` short-circuits the loop.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, classes::monad_rec::tail_rec_m, types::Step};
	///
	/// let result = tail_rec_m::<OptionBrand, _, _, _>(
	///     |n: i32| if n >= 10 { Some(Step::Done(n)) } else { Some(Step::Loop(n + 1)) },
	///     0,
	/// );
	/// assert_eq!(result, Some(10));
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
			match f(current)? {
				Step::Loop(next) => current = next,
				Step::Done(b) => return Some(b),
			}
		}
	}
}

impl Traversable for OptionBrand {
	/// Traverses the option with an applicative function.
	///
	/// # Type Signature
	///
	/// `forall a b f. (Traversable Option, Applicative f) => (a -> f b, Option a) -> f (Option b)`
	///
	/// # Parameters
	///
	/// * `f`: The function to apply.
	/// * `ta`: The option to traverse.
	///
	/// # Returns
	///
	/// The option wrapped in the applicative context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(traverse::<OptionBrand, OptionBrand, _, _, _>(|x| Some(x * 2), Some(5)), Some(Some(10)));
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
			Some(a) => F::map(|b| Some(b), f(a)),
			None => F::pure(None),
		}
	}

	/// Sequences an option of applicative.
	///
	/// # Type Signature
	///
	/// `forall a f. (Traversable Option, Applicative f) => (Option (f a)) -> f (Option a)`
	///
	/// # Parameters
	///
	/// * `ta`: The option containing the applicative value.
	///
	/// # Returns
	///
	/// The option wrapped in the applicative context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::OptionBrand;
	///
	/// assert_eq!(sequence::<OptionBrand, OptionBrand, _>(Some(Some(5))), Some(Some(5)));
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		match ta {
			Some(fa) => F::map(|a| Some(a), fa),
			None => F::pure(None),
		}
	}
}

/// The natural transformation from [`Option`] to a fixed-error `Result`, turning `None` into
/// `Err(())`.
///
/// ### Examples
///
/// ```
/// use fp_library::{classes::natural::Natural, types::option::OptionToResult};
///
/// assert_eq!(OptionToResult::apply::<i32>(Some(5)), Ok(5));
/// assert_eq!(OptionToResult::apply::<i32>(None), Err(()));
/// ```
pub struct OptionToResult;

impl Natural<OptionBrand, ResultWithErrBrand<()>> for OptionToResult {
	fn apply<'a, A: 'a>(
		fa: Apply!(brand: OptionBrand, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: ResultWithErrBrand<()>, signature: ('a, A: 'a) -> 'a) {
		fa.ok_or(())
	}
}
