//! Monads that can raise and recover from an error value, the way [`Result`]'s [`Err`] variant
//! can be constructed directly and recovered from via `.or_else`/`.unwrap_or_else`.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::ResultWithErrBrand, classes::monad_error::{raise_error, handle_error_with}};
//!
//! let x: Result<i32, bool> = raise_error::<ResultWithErrBrand<bool>, _, _>(true);
//! assert_eq!(x, Err(true));
//! assert_eq!(handle_error_with::<ResultWithErrBrand<bool>, _, _>(x, |_| Ok(5)), Ok(5));
//! ```

use crate::{Apply, classes::monad::Monad, kinds::*};

/// A type class for monads with a fixed error type `E` that can be raised and recovered from.
///
/// ### Laws
///
/// `MonadError` instances must satisfy:
/// * Left Zero: `bind(raise_error(e), f) = raise_error(e)`.
/// * Recovery: `handle_error_with(raise_error(e), f) = f(e)`.
pub trait MonadError<E>: Monad {
	/// Lifts an error value directly into the context, short-circuiting any further binds.
	fn raise_error<'a, A: 'a>(e: E) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a)
	where
		E: 'a;

	/// Recovers from an error by handing it to `f`, which may itself produce a success or a
	/// further error. Leaves a success value untouched.
	fn handle_error_with<'a, A: 'a, F>(
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a)
	where
		F: Fn(E) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) + 'a,
		E: 'a;
}

/// Lifts an error value directly into the context.
///
/// Free function version that dispatches to [the type class' associated function][`MonadError::raise_error`].
pub fn raise_error<'a, Brand: MonadError<E>, E: 'a, A: 'a>(
	e: E,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::raise_error::<A>(e)
}

/// Recovers from an error by handing it to `f`, which may itself produce a success or a further
/// error.
///
/// Free function version that dispatches to [the type class' associated function][`MonadError::handle_error_with`].
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::handle_error_with};
///
/// assert_eq!(handle_error_with::<ResultWithErrBrand<bool>, _, _>(Err(true), |_| Ok(5)), Ok(5));
/// assert_eq!(handle_error_with::<ResultWithErrBrand<bool>, _, _>(Ok(1), |_| Ok(5)), Ok(1));
/// ```
pub fn handle_error_with<'a, Brand: MonadError<E>, E: 'a, A: 'a>(
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	f: impl Fn(E) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) + 'a,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::handle_error_with(fa, f)
}

/// Recovers from an error by handing it to a total function `f` that always produces a success
/// value.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::handle_error};
///
/// assert_eq!(handle_error::<ResultWithErrBrand<bool>, _, _>(Err(true), |_| 5), Ok(5));
/// ```
pub fn handle_error<'a, Brand: MonadError<E>, E: 'a, A: 'a>(
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	f: impl Fn(E) -> A + 'a,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::handle_error_with(fa, move |e| Brand::pure(f(e)))
}

/// Recovers from an error using a partial function, re-raising the original error if `f` doesn't
/// handle it.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::recover};
///
/// assert_eq!(recover::<ResultWithErrBrand<bool>, _, _>(Err(true), |e| if e { Some(5) } else { None }), Ok(5));
/// assert_eq!(recover::<ResultWithErrBrand<bool>, _, _>(Err(false), |e| if e { Some(5) } else { None }), Err(false));
/// ```
pub fn recover<'a, Brand: MonadError<E>, E: 'a + Clone, A: 'a>(
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	f: impl Fn(E) -> Option<A> + 'a,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::handle_error_with(fa, move |e| match f(e.clone()) {
		Some(a) => Brand::pure(a),
		None => Brand::raise_error(e),
	})
}

/// Recovers from an error using a partial function that itself produces a further effect,
/// re-raising the original error if `f` doesn't handle it.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::ResultWithErrBrand, classes::monad_error::recover_with};
///
/// assert_eq!(
///     recover_with::<ResultWithErrBrand<bool>, _, _>(Err(true), |e| if e { Some(Ok(5)) } else { None }),
///     Ok(5)
/// );
/// ```
pub fn recover_with<'a, Brand: MonadError<E>, E: 'a + Clone, A: 'a>(
	fa: Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a),
	f: impl Fn(E) -> Option<Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a)> + 'a,
) -> Apply!(brand: Brand, signature: ('a, A: 'a) -> 'a) {
	Brand::handle_error_with(fa, move |e| match f(e.clone()) {
		Some(fa) => fa,
		None => Brand::raise_error(e),
	})
}
