//! Applicative functors that can additionally select which of two further effects to run,
//! based on a value already computed.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::{OptionBrand, RcFnBrand}, classes::{cloneable_fn::CloneableFn, selective::select}, types::Choice};
//!
//! let f = <RcFnBrand as CloneableFn>::new(|x: i32| x + 1);
//! assert_eq!(select::<OptionBrand, _, _, RcFnBrand>(Some(Choice::Left(5)), Some(f)), Some(6));
//! assert_eq!(select::<OptionBrand, i32, i32, RcFnBrand>(Some(Choice::Right(5)), None), Some(5));
//! ```

use crate::{
	Apply,
	classes::{applicative::Applicative, cloneable_fn::CloneableFn, functor::Functor},
	kinds::*,
	types::{Unit, choice::Choice},
};

/// A type class for applicatives that can pick which of two effects to run based on a
/// previously computed value.
///
/// If the context holds `Choice::Left(a)`, the wrapped function is applied to `a`. If it holds
/// `Choice::Right(b)`, the function's effect is skipped entirely and `b` is returned as-is — this
/// is what distinguishes `Selective` from a plain `Applicative::apply`, which always runs both
/// sides.
pub trait Selective: Applicative {
	/// Applies `ff` to the left value of `fab`, or passes the right value through unchanged.
	fn select<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		fab: Apply!(brand: Self, signature: ('a, Choice<A, B>: 'a) -> 'a),
		ff: Apply!(brand: Self, signature: ('a, <FnBrand as CloneableFn>::Of<'a, A, B>: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a);
}

/// Applies `ff` to the left value of `fab`, or passes the right value through unchanged.
///
/// Free function version that dispatches to [the type class' associated function][`Selective::select`].
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::{OptionBrand, RcFnBrand}, classes::{cloneable_fn::CloneableFn, selective::select}, types::Choice};
///
/// let f = <RcFnBrand as CloneableFn>::new(|x: i32| x + 1);
/// assert_eq!(select::<OptionBrand, _, _, RcFnBrand>(Some(Choice::Left(5)), Some(f)), Some(6));
/// ```
pub fn select<'a, Brand: Selective, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
	fab: Apply!(brand: Brand, signature: ('a, Choice<A, B>: 'a) -> 'a),
	ff: Apply!(brand: Brand, signature: ('a, <FnBrand as CloneableFn>::Of<'a, A, B>: 'a) -> 'a),
) -> Apply!(brand: Brand, signature: ('a, B: 'a) -> 'a) {
	Brand::select::<A, B, FnBrand>(fab, ff)
}

/// Applies a wrapped function to a wrapped value, expressed in terms of [`select`] rather than
/// [`Semiapplicative::apply`](crate::classes::semiapplicative::Semiapplicative::apply).
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::{OptionBrand, RcFnBrand}, classes::{cloneable_fn::CloneableFn, selective::ap_s}};
///
/// let f = Some(<RcFnBrand as CloneableFn>::new(|x: i32| x + 1));
/// assert_eq!(ap_s::<OptionBrand, RcFnBrand, _, _>(f, Some(5)), Some(6));
/// ```
pub fn ap_s<'a, Brand: Selective, FnBrand: 'a + CloneableFn, A: 'a + Clone, B: 'a>(
	ff: Apply!(brand: Brand, signature: ('a, <FnBrand as CloneableFn>::Of<'a, A, B>: 'a) -> 'a),
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: Brand, signature: ('a, B: 'a) -> 'a) {
	let fab = Brand::map(Choice::Left, fa);
	Brand::select::<A, B, FnBrand>(fab, ff)
}

/// Runs `action` only if `condition` evaluates to `true`, otherwise does nothing.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::{OptionBrand, RcFnBrand}, classes::selective::when_s, types::Unit};
///
/// assert_eq!(when_s::<OptionBrand, RcFnBrand>(Some(true), Some(Unit)), Some(Unit));
/// assert_eq!(when_s::<OptionBrand, RcFnBrand>(Some(false), None), Some(Unit));
/// ```
pub fn when_s<'a, Brand: Selective, FnBrand: 'a + CloneableFn>(
	condition: Apply!(brand: Brand, signature: ('a, bool: 'a) -> 'a),
	action: Apply!(brand: Brand, signature: ('a, Unit: 'a) -> 'a),
) -> Apply!(brand: Brand, signature: ('a, Unit: 'a) -> 'a) {
	let fab = Brand::map(|c: bool| if c { Choice::Left(Unit) } else { Choice::Right(Unit) }, condition);
	let ff = Brand::map(|u: Unit| <FnBrand as CloneableFn>::new(move |_: Unit| u), action);
	Brand::select::<Unit, Unit, FnBrand>(fab, ff)
}

/// Chooses between two effects based on a boolean condition.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::{OptionBrand, RcFnBrand}, classes::selective::if_s};
///
/// assert_eq!(if_s::<OptionBrand, RcFnBrand, i32>(Some(true), Some(1), Some(2)), Some(1));
/// assert_eq!(if_s::<OptionBrand, RcFnBrand, i32>(Some(false), Some(1), Some(2)), Some(2));
/// ```
pub fn if_s<'a, Brand: Selective, FnBrand: 'a + CloneableFn, A: 'a + Clone>(
	condition: Apply!(brand: Brand, signature: ('a, bool: 'a) -> 'a),
	on_true: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	on_false: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	let fab = Brand::lift2(
		|c: bool, false_value: A| if c { Choice::Left(Unit) } else { Choice::Right(false_value) },
		condition,
		on_false,
	);
	let ff = Brand::map(|true_value: A| <FnBrand as CloneableFn>::new(move |_: Unit| true_value.clone()), on_true);
	Brand::select::<Unit, A, FnBrand>(fab, ff)
}
