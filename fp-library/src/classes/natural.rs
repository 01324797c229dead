//! Natural transformations between two higher-kinded brands.
//!
//! Unlike the rest of this module, which defines a blanket trait a brand implements directly
//! (`Functor for OptionBrand`), a `Natural` is a capability value: a marker type that names a
//! specific transformation from one brand to another, implemented the way
//! [`ResultWithErrBrand<Err>`][crate::brands::ResultWithErrBrand] names a specific partial
//! application rather than a generic capability every brand gets for free.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::{OptionBrand, ResultWithErrBrand}, classes::natural::Natural, types::option::OptionToResult};
//!
//! assert_eq!(OptionToResult::apply::<i32>(Some(5)), Ok(5));
//! assert_eq!(OptionToResult::apply::<i32>(None), Err(()));
//! ```

use crate::{Apply, kinds::*};

/// A type class for marker types naming a natural transformation from brand `F` to brand `G`.
///
/// ### Laws
///
/// `Natural` instances must satisfy the naturality law: for any `f: A -> B`,
/// `apply(map(f, fa)) = map(f, apply(fa))`.
pub trait Natural<F, G> {
	/// Transforms a value in the `F` context into the `G` context.
	fn apply<'a, A: 'a>(
		fa: Apply!(brand: F, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: G, signature: ('a, A: 'a) -> 'a);
}

/// The identity natural transformation from a brand to itself.
pub struct IdentityNat;

impl<F> Natural<F, F> for IdentityNat {
	fn apply<'a, A: 'a>(
		fa: Apply!(brand: F, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: F, signature: ('a, A: 'a) -> 'a) {
		fa
	}
}

/// Transforms a value in the `F` context into the `G` context.
///
/// Free function version that dispatches to [the type class' associated function][`Natural::apply`].
///
/// ### Examples
///
/// ```
/// use fp_library::{classes::natural::apply, types::option::OptionToResult};
///
/// assert_eq!(apply::<_, _, OptionToResult, i32>(Some(5)), Ok(5));
/// ```
pub fn apply<'a, F, G, N: Natural<F, G>, A: 'a>(
	fa: Apply!(brand: F, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: G, signature: ('a, A: 'a) -> 'a) {
	N::apply(fa)
}

/// Runs `N1`'s transformation followed by `N2`'s, from `F` to `G` to `H`.
///
/// ### Examples
///
/// ```
/// use fp_library::{classes::natural::{and_then, IdentityNat}, types::option::OptionToResult};
///
/// assert_eq!(and_then::<_, _, _, IdentityNat, OptionToResult, i32>(Some(5)), Ok(5));
/// ```
pub fn and_then<'a, F, G, H, N1: Natural<F, G>, N2: Natural<G, H>, A: 'a>(
	fa: Apply!(brand: F, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: H, signature: ('a, A: 'a) -> 'a) {
	N2::apply(N1::apply(fa))
}

/// Runs `N2`'s transformation before `N1`'s, from `F` to `G` to `H` — the same operation as
/// [`and_then`] with the type parameters named to read right-to-left, the way function
/// composition usually does.
///
/// ### Examples
///
/// ```
/// use fp_library::{classes::natural::{compose, IdentityNat}, types::option::OptionToResult};
///
/// assert_eq!(compose::<_, _, _, OptionToResult, IdentityNat, i32>(Some(5)), Ok(5));
/// ```
pub fn compose<'a, F, G, H, N2: Natural<G, H>, N1: Natural<F, G>, A: 'a>(
	fa: Apply!(brand: F, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: H, signature: ('a, A: 'a) -> 'a) {
	N2::apply(N1::apply(fa))
}
