//! Implementations for [`Result`].

pub mod result_with_err;
pub mod result_with_ok;

use crate::{Apply, brands::ResultBrand, classes::bifunctor::Bifunctor, impl_kind, kinds::*};
pub use result_with_err::*;
pub use result_with_ok::*;

/// Brand for [`Result<Ok, Err>`], treating the error type as the first type parameter and
/// the success type as the second, matching the argument order of [`Bifunctor::bimap`].
pub struct ResultBrand;

impl_kind! {
	for ResultBrand {
		type Of<'a, Err: 'a, Ok: 'a>: 'a = Result<Ok, Err>;
	}
}

impl Bifunctor for ResultBrand {
	/// Maps a function over the error value and another over the success value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::ResultBrand, classes::bifunctor::bimap};
	///
	/// let x = Result::<i32, i32>::Ok(5);
	/// assert_eq!(bimap::<ResultBrand, _, _, _, _, _, _>(|e: i32| e + 1, |s: i32| s * 2, x), Ok(10));
	///
	/// let y = Result::<i32, i32>::Err(5);
	/// assert_eq!(bimap::<ResultBrand, _, _, _, _, _, _>(|e: i32| e + 1, |s: i32| s * 2, y), Err(6));
	/// ```
	fn bimap<'a, A: 'a, B: 'a, C: 'a, D: 'a, F, G>(
		f: F,
		g: G,
		p: Apply!(brand: Self, signature: ('a, A: 'a, C: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a, D: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
		G: Fn(C) -> D + 'a,
	{
		match p {
			Ok(c) => Ok(g(c)),
			Err(a) => Err(f(a)),
		}
	}
}
