//! A type class for functors whose effects can be run to produce a value.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::*, classes::Runnable, types::*};
//!
//! let thunk = Thunk::new(|| 42);
//! assert_eq!(ThunkBrand::run(thunk), 42);
//! ```

use crate::{Apply, kinds::*};

/// A functor whose effects can be run to produce the inner value.
///
/// This trait is used by [`Free::run`](crate::types::Free::run) to execute the effects
/// baked into a `Free` monad's underlying functor.
pub trait Runnable: crate::classes::functor::Functor {
	/// Runs the effect, producing the inner value.
	///
	/// ### Type Signature
	///
	/// `forall a. Runnable f => f a -> a`
	///
	/// ### Type Parameters
	///
	/// * `A`: The type of the value inside the functor.
	///
	/// ### Parameters
	///
	/// * `fa`: The functor instance to run.
	///
	/// ### Returns
	///
	/// The inner value.
	fn run<'a, A: 'a>(
		fa: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>)
	) -> A;
}

/// Runs a functor's effect, producing the inner value.
///
/// ### Type Signature
///
/// `forall f a. Runnable f => f a -> a`
pub fn run<'a, F, A: 'a>(fa: Apply!(<F as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>)) -> A
where
	F: Runnable,
{
	F::run(fa)
}
