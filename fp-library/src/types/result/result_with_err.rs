//! Implementations for the partially-applied form of [`Result`] with [the error type][Result::Err] filled in.

use crate::{
	Apply,
	brands::ResultWithErrBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift,
		monad_error::MonadError, monoid::Monoid, pointed::Pointed, semiapplicative::Semiapplicative,
		semimonad::Semimonad, traversable::Traversable,
	},
	impl_kind,
	kinds::*,
};
use std::marker::PhantomData;

/// [Brand][crate::brands] for the partially-applied form of [`Result`] with [the error type][Result::Err] filled in.
pub struct ResultWithErrBrand<Err>(PhantomData<Err>);

impl_kind! {
	impl<Err: 'static> for ResultWithErrBrand<Err> {
		type Of<'a, Ok: 'a>: 'a = Result<Ok, Err>;
	}
}

impl<Err: 'static> Functor for ResultWithErrBrand<Err> {
	/// Maps a function over the success value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::functor::map};
	///
	/// assert_eq!(map::<ResultWithErrBrand<bool>, _, _, _>(|x: i32| x * 2, Ok(5)), Ok(10));
	/// assert_eq!(map::<ResultWithErrBrand<bool>, _, _, _>(|x: i32| x * 2, Err(true)), Err(true));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		fa.map(f)
	}
}

impl<Err: 'static> Lift for ResultWithErrBrand<Err> {
	/// Lifts a binary function into the result context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::lift::lift2};
	///
	/// assert_eq!(lift2::<ResultWithErrBrand<bool>, _, _, _, _>(|x: i32, y: i32| x + y, Ok(1), Ok(2)), Ok(3));
	/// assert_eq!(lift2::<ResultWithErrBrand<bool>, _, _, _, _>(|x: i32, y: i32| x + y, Ok(1), Err(true)), Err(true));
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
			(Ok(a), Ok(b)) => Ok(f(a, b)),
			(Err(e), _) => Err(e),
			(_, Err(e)) => Err(e),
		}
	}
}

impl<Err: 'static> Pointed for ResultWithErrBrand<Err> {
	/// Wraps a value as a successful result.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::pointed::pure};
	///
	/// assert_eq!(pure::<ResultWithErrBrand<bool>, _>(5), Ok(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Ok(a)
	}
}

impl<Err: 'static> ApplyFirst for ResultWithErrBrand<Err> {}
impl<Err: 'static> ApplySecond for ResultWithErrBrand<Err> {}

impl<Err: 'static> Semiapplicative for ResultWithErrBrand<Err> {
	/// Applies a wrapped function to a wrapped value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{ResultWithErrBrand, RcFnBrand};
	///
	/// let f = Ok::<_, bool>(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<ResultWithErrBrand<bool>, _, _, RcFnBrand>(f, Ok(5)), Ok(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		match (ff, fa) {
			(Ok(f), Ok(a)) => Ok(f(a)),
			(Err(e), _) => Err(e),
			(_, Err(e)) => Err(e),
		}
	}
}

impl<Err: 'static> Semimonad for ResultWithErrBrand<Err> {
	/// Chains result computations.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::semimonad::bind};
	///
	/// assert_eq!(bind::<ResultWithErrBrand<bool>, _, _, _>(Ok(5), |x| Ok(x * 2)), Ok(10));
	/// assert_eq!(bind::<ResultWithErrBrand<bool>, _, _, _>(Err(true), |x: i32| Ok(x * 2)), Err(true));
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

impl<Err: 'static> Foldable for ResultWithErrBrand<Err> {
	/// Maps the success value to a monoid, or returns empty for an error.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{ResultWithErrBrand, RcFnBrand};
	/// use fp_library::types::string;
	///
	/// assert_eq!(fold_map::<RcFnBrand, ResultWithErrBrand<bool>, _, _, _>(|x: i32| x.to_string(), Ok(5)), "5".to_string());
	/// assert_eq!(fold_map::<RcFnBrand, ResultWithErrBrand<bool>, _, _, _>(|x: i32| x.to_string(), Err(true)), "".to_string());
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
			Ok(a) => f(a),
			Err(_) => M::empty(),
		}
	}
}

impl<Err: 'static> Traversable for ResultWithErrBrand<Err> {
	/// Traverses the result with an applicative function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{OptionBrand, ResultWithErrBrand};
	///
	/// assert_eq!(traverse::<ResultWithErrBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x * 2), Ok(5)), Some(Ok(10)));
	/// assert_eq!(traverse::<ResultWithErrBrand<bool>, OptionBrand, _, _, _>(|x: i32| Some(x * 2), Err(true)), Some(Err(true)));
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
			Ok(a) => F::map(|b| Ok(b), f(a)),
			Err(e) => F::pure(Err(e)),
		}
	}

	/// Sequences a result of applicative.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::{OptionBrand, ResultWithErrBrand};
	///
	/// assert_eq!(sequence::<ResultWithErrBrand<bool>, OptionBrand, _>(Ok(Some(5))), Some(Ok(5)));
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		match ta {
			Ok(fa) => F::map(|a| Ok(a), fa),
			Err(e) => F::pure(Err(e)),
		}
	}
}

impl<Err: 'static> MonadError<Err> for ResultWithErrBrand<Err> {
	/// Lifts an error value directly into the result context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::raise_error};
	///
	/// let x: Result<i32, bool> = raise_error::<ResultWithErrBrand<bool>, _, _>(true);
	/// assert_eq!(x, Err(true));
	/// ```
	fn raise_error<'a, A: 'a>(e: Err) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a)
	where
		Err: 'a,
	{
		Err(e)
	}

	/// Recovers from an `Err` by handing it to `f`, leaving an `Ok` untouched.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::handle_error_with};
	///
	/// assert_eq!(handle_error_with::<ResultWithErrBrand<bool>, _, _>(Err(true), |_| Ok(5)), Ok(5));
	/// ```
	fn handle_error_with<'a, A: 'a, F>(
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a)
	where
		F: Fn(Err) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) + 'a,
		Err: 'a,
	{
		match fa {
			Ok(a) => Ok(a),
			Err(e) => f(e),
		}
	}
}
