//! Monads with a distinguished "no result" value, enabling `.when(pred)`-style guards.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::OptionBrand, classes::monad_zero::zero};
//!
//! let x: Option<i32> = zero::<OptionBrand, _>();
//! assert_eq!(x, None);
//! ```

use crate::{Apply, classes::monad::Monad, kinds::*};

/// A type class for monads with a distinguished "no result" value.
///
/// `MonadZero` extends [`Monad`] with a `zero` value that absorbs subsequent binds, the way
/// `None`/`Err` absorb `Option`/`Result` computations.
///
/// ### Laws
///
/// `MonadZero` instances must satisfy the left-zero law:
/// * `bind(zero(), f) = zero()`.
pub trait MonadZero: Monad {
	/// The distinguished "no result" value.
	fn zero<'a, A: 'a>() -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a);
}

/// The distinguished "no result" value.
///
/// Free function version that dispatches to [the type class' associated function][`MonadZero::zero`].
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::OptionBrand, classes::monad_zero::zero};
///
/// let x: Option<i32> = zero::<OptionBrand, _>();
/// assert_eq!(x, None);
/// ```
pub fn zero<'a, Brand: MonadZero, A: 'a>() -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::zero::<A>()
}
