//! A type class for monads that support stack-safe tail recursion.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::OptionBrand, classes::monad_rec::tail_rec_m, types::Step};
//!
//! // A tail-recursive function to calculate factorial
//! fn factorial(n: u64) -> Option<u64> {
//!     tail_rec_m::<OptionBrand, _, _, _>(
//!         |(n, acc)| {
//!             if n == 0 {
//!                 Some(Step::Done(acc))
//!             } else {
//!                 Some(Step::Loop((n - 1, n * acc)))
//!             }
//!         },
//!         (n, 1),
//!     )
//! }
//!
//! assert_eq!(factorial(5), Some(120));
//! ```

use crate::{Apply, classes::monad::Monad, kinds::*, types::step::Step};

/// A type class for monads that support stack-safe tail recursion.
///
/// ### Important Design Note
///
/// Whether an implementation is actually stack-safe depends on how the monad's own
/// `bind`/evaluation works: an eagerly-evaluated monad like [`Option`] can implement
/// `tail_rec_m` as a plain iterative loop, which never grows the stack. A monad that
/// builds up a chain of closures before running them (for example a lazily-evaluated
/// thunk) needs its own trampolining strategy to stay stack-safe for deep recursion,
/// and should not rely on a naive recursive definition of this method.
///
/// ### Laws
///
/// 1. **Equivalence**: `tail_rec_m(f, a)` produces the same result as the
///    recursive definition.
///
/// 2. **Safety varies**: instances are not automatically stack-safe; each implementation
///    must justify its own safety.
pub trait MonadRec: Monad {
	/// Performs tail-recursive monadic computation.
	///
	/// ### Type Signature
	///
	/// `forall m b a. MonadRec m => (a -> m (Step a b), a) -> m b`
	///
	/// ### Type Parameters
	///
	/// * `B`: The type of the result.
	/// * `A`: The type of the initial value and loop state.
	/// * `F`: The type of the step function.
	///
	/// ### Parameters
	///
	/// * `f`: The step function.
	/// * `a`: The initial value.
	///
	/// ### Returns
	///
	/// The result of the computation.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, classes::monad_rec::MonadRec, types::Step};
	///
	/// let result = OptionBrand::tail_rec_m(
	///     |n| {
	///         if n < 10 {
	///             Some(Step::Loop(n + 1))
	///         } else {
	///             Some(Step::Done(n))
	///         }
	///     },
	///     0,
	/// );
	///
	/// assert_eq!(result, Some(10));
	/// ```
	fn tail_rec_m<'a, A: 'a, B: 'a, F>(
		f: F,
		a: A,
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
	where
		F: Fn(A) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, Step<A, B>>)
			+ Clone
			+ 'a;
}

/// Performs tail-recursive monadic computation.
///
/// Free function version that dispatches to [the type class' associated function][`MonadRec::tail_rec_m`].
///
/// ### Type Signature
///
/// `forall m b a. MonadRec m => (a -> m (Step a b), a) -> m b`
///
/// ### Type Parameters
///
/// * `Brand`: The brand of the monad.
/// * `B`: The type of the result.
/// * `A`: The type of the initial value and loop state.
/// * `F`: The type of the step function.
///
/// ### Parameters
///
/// * `f`: The step function.
/// * `a`: The initial value.
///
/// ### Returns
///
/// The result of the computation.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::OptionBrand, classes::monad_rec::tail_rec_m, types::Step};
///
/// let result = tail_rec_m::<OptionBrand, _, _, _>(
///     |n| {
///         if n < 10 {
///             Some(Step::Loop(n + 1))
///         } else {
///             Some(Step::Done(n))
///         }
///     },
///     0,
/// );
///
/// assert_eq!(result, Some(10));
/// ```
pub fn tail_rec_m<'a, Brand: MonadRec, A: 'a, B: 'a, F>(
	f: F,
	a: A,
) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
where
	F: Fn(A) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, Step<A, B>>)
		+ Clone
		+ 'a,
{
	Brand::tail_rec_m(f, a)
}
