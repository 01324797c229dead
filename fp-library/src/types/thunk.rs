//! Implementation of the `Thunk` type and `ThunkBrand` functor.
//!
//! This module provides the [`Thunk`] type, which represents a suspended computation,
//! and the [`ThunkBrand`] functor, which allows `Thunk` to be used with the [`Free`](crate::types::Free) monad.
//!
//! ### Examples
//!
//! ```
//! use fp_library::types::Thunk;
//!
//! let thunk = Thunk::new(|| 42);
//! assert_eq!(thunk.force(), 42);
//! ```

use crate::{
	Apply,
	brands::ThunkBrand,
	classes::{
		apply_first::ApplyFirst, apply_second::ApplySecond, cloneable_fn::CloneableFn,
		functor::Functor, monad_rec::MonadRec, pointed::Pointed, runnable::Runnable,
		semiapplicative::Semiapplicative, semimonad::Semimonad,
	},
	impl_kind,
	kinds::*,
	types::step::Step,
};

/// A suspended computation that produces a value of type `A`.
///
/// `Thunk` wraps a closure that takes no arguments and returns a value.
/// It is used to delay evaluation until the value is needed.
///
/// ### Type Parameters
///
/// * `A`: The type of the value produced by the thunk.
///
/// ### Fields
///
/// * `0`: The boxed closure.
///
/// ### Examples
///
/// ```
/// use fp_library::types::Thunk;
///
/// let thunk = Thunk::new(|| 1 + 1);
/// assert_eq!(thunk.force(), 2);
/// ```
pub struct Thunk<'a, A>(Box<dyn FnOnce() -> A + 'a>);

impl<'a, A> Thunk<'a, A> {
	/// Creates a new `Thunk` from a closure.
	///
	/// ### Type Signature
	///
	/// `forall a. (FnOnce() -> a) -> Thunk a`
	///
	/// ### Parameters
	///
	/// * `f`: The closure to suspend.
	///
	/// ### Returns
	///
	/// A new `Thunk` containing the closure.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::Thunk;
	///
	/// let thunk = Thunk::new(|| 42);
	/// ```
	pub fn new(f: impl FnOnce() -> A + 'a) -> Self {
		Thunk(Box::new(f))
	}

	/// Forces the evaluation of the thunk, returning the result.
	///
	/// ### Type Signature
	///
	/// `forall a. Thunk a -> a`
	///
	/// ### Returns
	///
	/// The result of the suspended computation.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::Thunk;
	///
	/// let thunk = Thunk::new(|| 42);
	/// assert_eq!(thunk.force(), 42);
	/// ```
	pub fn force(self) -> A {
		(self.0)()
	}
}

impl_kind! {
	for ThunkBrand {
		type Of<'a, A: 'a>: 'a = Thunk<'a, A>;
	}
}

impl Functor for ThunkBrand {
	/// Maps a function over the value in the thunk.
	///
	/// ### Type Signature
	///
	/// `forall b a. Functor ThunkF => (a -> b, Thunk a) -> Thunk b`
	///
	/// ### Type Parameters
	///
	/// * `B`: The type of the result of applying the function.
	/// * `A`: The type of the value inside the thunk.
	/// * `F`: The type of the function to apply.
	///
	/// ### Parameters
	///
	/// * `f`: The function to apply.
	/// * `fa`: The thunk to map over.
	///
	/// ### Returns
	///
	/// A new thunk that, when forced, applies the function to the result of the original thunk.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::*, functions::*, types::*};
	///
	/// let thunk = Thunk::new(|| 5);
	/// let mapped = map::<ThunkBrand, _, _, _>(|x| x * 2, thunk);
	/// assert_eq!(mapped.force(), 10);
	/// ```
	fn map<'a, B: 'a, A: 'a, F>(
		f: F,
		fa: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>),
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
	where
		F: Fn(A) -> B + 'a,
	{
		Thunk::new(move || f(fa.force()))
	}
}

impl Pointed for ThunkBrand {
	/// Wraps a value in a thunk that, when forced, yields it immediately.
	///
	/// ### Type Signature
	///
	/// `forall a. Pointed ThunkBrand => a -> Thunk a`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the value to wrap.
	///
	/// ### Parameters
	///
	/// * `a`: The value to wrap.
	///
	/// ### Returns
	///
	/// A thunk that forces to `a`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::*, classes::Pointed, types::*};
	///
	/// let thunk = ThunkBrand::pure(5);
	/// assert_eq!(thunk.force(), 5);
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>) {
		Thunk::new(move || a)
	}
}

impl ApplyFirst for ThunkBrand {}
impl ApplySecond for ThunkBrand {}

impl Semiapplicative for ThunkBrand {
	/// Applies a thunked function to a thunked value, lazily.
	///
	/// ### Type Signature
	///
	/// `forall a b. Semiapplicative ThunkBrand => (Thunk (a -> b), Thunk a) -> Thunk b`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the value inside `fa`.
	/// * `B`: The type of the result.
	/// * `FnBrand`: The cloneable function brand wrapped by `ff`.
	///
	/// ### Parameters
	///
	/// * `ff`: The thunk containing the function.
	/// * `fa`: The thunk containing the value.
	///
	/// ### Returns
	///
	/// A new thunk that, when forced, applies the function to the value.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::brands::*;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::types::*;
	///
	/// let ff = Thunk::new(|| <RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// let fa = Thunk::new(|| 5);
	/// assert_eq!(apply::<ThunkBrand, _, _, RcFnBrand>(ff, fa).force(), 10);
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B))>),
		fa: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>),
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>) {
		Thunk::new(move || ff.force()(fa.force()))
	}
}

impl Semimonad for ThunkBrand {
	/// Chains thunked computations, lazily.
	///
	/// ### Type Signature
	///
	/// `forall a b. Semimonad ThunkBrand => (Thunk a, a -> Thunk b) -> Thunk b`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the value inside `ma`.
	/// * `B`: The type of the value inside the result.
	/// * `F`: The type of the function to chain.
	///
	/// ### Parameters
	///
	/// * `ma`: The thunk to chain from.
	/// * `f`: The function producing the next thunk.
	///
	/// ### Returns
	///
	/// A new thunk that, when forced, runs `ma` then `f`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::*, classes::semimonad::bind, types::*};
	///
	/// let thunk = Thunk::new(|| 5);
	/// let chained = bind::<ThunkBrand, _, _, _>(thunk, |x| Thunk::new(move || x * 2));
	/// assert_eq!(chained.force(), 10);
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>),
		f: F,
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
	where
		F: Fn(A) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>) + 'a,
	{
		Thunk::new(move || f(ma.force()).force())
	}
}

impl MonadRec for ThunkBrand {
	/// Runs a step function in an iterative loop inside a single thunk, until it
	/// returns `Step::Done`.
	///
	/// Unlike [`map`](Functor::map) and [`bind`](Semimonad::bind), which build up a
	/// chain of nested closures that each `force` the next, this loop never nests:
	/// the whole recursion runs inside one `while` loop in the returned thunk's
	/// closure, so it is stack-safe regardless of how many iterations it takes.
	///
	/// ### Type Signature
	///
	/// `forall a b. MonadRec ThunkBrand => (a -> Thunk (Step a b), a) -> Thunk b`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the loop state.
	/// * `B`: The type of the final result.
	/// * `F`: The type of the step function.
	///
	/// ### Parameters
	///
	/// * `f`: The step function.
	/// * `a`: The initial loop state.
	///
	/// ### Returns
	///
	/// A thunk that, when forced, runs the loop to completion.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::*, classes::MonadRec, types::*};
	///
	/// let thunk = ThunkBrand::tail_rec_m(
	/// 	|n: i32| Thunk::new(move || if n >= 10 { Step::Done(n) } else { Step::Loop(n + 1) }),
	/// 	0,
	/// );
	/// assert_eq!(thunk.force(), 10);
	/// ```
	fn tail_rec_m<'a, A: 'a, B: 'a, F>(
		f: F,
		a: A,
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
	where
		F: Fn(A) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, Step<A, B>>) + Clone + 'a,
	{
		Thunk::new(move || {
			let mut current = a;
			loop {
				match f(current).force() {
					Step::Loop(next) => current = next,
					Step::Done(b) => return b,
				}
			}
		})
	}
}

impl Runnable for ThunkBrand {
	/// Runs the thunk, producing the inner value.
	///
	/// ### Type Signature
	///
	/// `forall a. Runnable ThunkBrand => Thunk a -> a`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the value inside the thunk.
	///
	/// ### Parameters
	///
	/// * `fa`: The thunk to run.
	///
	/// ### Returns
	///
	/// The result of forcing the thunk.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::*, classes::Runnable, types::*};
	///
	/// let thunk = Thunk::new(|| 42);
	/// assert_eq!(ThunkBrand::run(thunk), 42);
	/// ```
	fn run<'a, A: 'a>(fa: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>)) -> A {
		fa.force()
	}
}
