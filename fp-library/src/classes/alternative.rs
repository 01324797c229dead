//! Monoidal contexts with a failure value and a way to fall back to an alternative.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::OptionBrand, classes::alternative::or_else};
//!
//! assert_eq!(or_else::<OptionBrand, _>(None, Some(5)), Some(5));
//! assert_eq!(or_else::<OptionBrand, _>(Some(1), Some(5)), Some(1));
//! ```

use crate::{
	Apply,
	classes::{monad_zero::MonadZero, pointed::Pointed},
	kinds::*,
};

/// A type class for contexts that have an empty/failure value and can fall back to an alternative.
///
/// ### Laws
///
/// `Alternative` instances must satisfy the identity laws:
/// * Left Identity: `or_else(empty(), fa) = fa`.
/// * Right Identity: `or_else(fa, empty()) = fa`.
pub trait Alternative: Pointed {
	/// The empty/failure value.
	fn empty<'a, A: 'a>() -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a);

	/// Returns `fa` if it succeeded, otherwise falls back to `fb`.
	fn or_else<'a, A: 'a>(
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		fb: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a);
}

/// The empty/failure value.
///
/// Free function version that dispatches to [the type class' associated function][`Alternative::empty`].
pub fn empty<'a, Brand: Alternative, A: 'a>() -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::empty::<A>()
}

/// Returns `fa` if it succeeded, otherwise falls back to `fb`.
///
/// Free function version that dispatches to [the type class' associated function][`Alternative::or_else`].
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::OptionBrand, classes::alternative::or_else};
///
/// assert_eq!(or_else::<OptionBrand, _>(None, Some(5)), Some(5));
/// assert_eq!(or_else::<OptionBrand, _>(Some(1), Some(5)), Some(1));
/// ```
pub fn or_else<'a, Brand: Alternative, A: 'a>(
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	fb: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::or_else(fa, fb)
}

/// Falls back through every alternative in order, returning the first success.
///
/// Returns [`Alternative::empty`] if every alternative fails.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::OptionBrand, classes::alternative::or_else_all};
///
/// assert_eq!(or_else_all::<OptionBrand, i32>(vec![None, None, Some(3), Some(4)]), Some(3));
/// assert_eq!(or_else_all::<OptionBrand, i32>(Vec::new()), None);
/// ```
pub fn or_else_all<'a, Brand: Alternative, A: 'a>(
	alternatives: impl IntoIterator<Item = Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a)>,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	alternatives.into_iter().fold(Brand::empty::<A>(), Brand::or_else)
}

/// Guards a computation on a boolean condition: succeeds with `Unit` if `condition` is `true`,
/// otherwise fails.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::OptionBrand, classes::alternative::guard, types::Unit};
///
/// assert_eq!(guard::<OptionBrand>(true), Some(Unit));
/// assert_eq!(guard::<OptionBrand>(false), None);
/// ```
pub fn guard<'a, Brand: Alternative + MonadZero>(
    condition: bool,
) -> Apply!(brand: Brand, signature: ('a, crate::types::Unit: 'a) -> 'a) {
	if condition {
		Brand::pure(crate::types::Unit)
	} else {
		Brand::zero::<crate::types::Unit>()
	}
}
