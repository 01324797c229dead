//! A type class for types that have an identity element and an associative binary operation.
//!
//! ### Examples
//!
//! ```
//! use fp_library::functions::*;
//!
//! let x: String = empty();
//! assert_eq!(x, "".to_string());
//! ```

use super::semigroup::Semigroup;
use fp_macros::doc_type_params;
use fp_macros::hm_signature;

/// A type class for types that have an identity element and an associative binary operation.
///
/// ### Laws
///
/// `Monoid` instances must satisfy the identity laws:
/// * Left Identity: `append(empty(), a) = a`.
/// * Right Identity: `append(a, empty()) = a`.
pub trait Monoid: Semigroup {
	/// The identity element.
	///
	/// This method returns the identity element of the monoid.
	///
	/// ### Type Signature
	///
	/// `forall m. Monoid m => () -> m`
	///
	/// ### Returns
	///
	/// The identity element.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::functions::*;
	///
	/// let x: String = empty();
	/// assert_eq!(x, "".to_string());
	/// ```
	fn empty() -> Self;
}

/// The identity element.
///
/// Free function version that dispatches to [the type class' associated function][`Monoid::empty`].
///
/// ### Type Signature
///
#[hm_signature(Monoid)]
///
/// ### Type Parameters
///
#[doc_type_params("The type of the monoid.")]
///
/// ### Returns
///
/// The identity element.
///
/// ### Examples
///
/// ```
/// use fp_library::functions::*;
///
/// let x: String = empty();
/// assert_eq!(x, "".to_string());
/// ```
pub fn empty<M: Monoid>() -> M {
	M::empty()
}

/// Combines every value in an iterable using the monoid's `append`, starting from `empty`.
///
/// ### Examples
///
/// ```
/// use fp_library::classes::monoid::combine_all;
///
/// assert_eq!(combine_all(vec!["a".to_string(), "b".to_string(), "c".to_string()]), "abc".to_string());
/// assert_eq!(combine_all(Vec::<String>::new()), "".to_string());
/// ```
pub fn combine_all<M: Monoid>(values: impl IntoIterator<Item = M>) -> M {
	values.into_iter().fold(M::empty(), Semigroup::append)
}

/// Combines a value with itself `n` times using the monoid's `append`.
///
/// Returns `empty()` when `n == 0`.
///
/// ### Examples
///
/// ```
/// use fp_library::classes::monoid::combine_n;
///
/// assert_eq!(combine_n("ab".to_string(), 3), "ababab".to_string());
/// assert_eq!(combine_n("ab".to_string(), 0), "".to_string());
/// ```
pub fn combine_n<M: Monoid + Clone>(
	value: M,
	n: usize,
) -> M {
	(0..n).fold(M::empty(), |acc, _| Semigroup::append(acc, value.clone()))
}

/// Returns whether a value equals the monoid's identity element.
///
/// ### Examples
///
/// ```
/// use fp_library::classes::monoid::is_empty;
///
/// assert!(is_empty(String::new()));
/// assert!(!is_empty("a".to_string()));
/// ```
pub fn is_empty<M: Monoid + PartialEq>(a: M) -> bool {
	a == M::empty()
}
