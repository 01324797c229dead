//! Implementations for [`String`].

use crate::classes::{monoid::Monoid, semigroup::Semigroup};

impl Semigroup for String {
	/// ### Examples
	///
	/// ```rust
	/// use fp_library::functions::append;
	///
	/// assert_eq!(
	///     append("Hello, ".to_string(), "World!".to_string()),
	///     "Hello, World!"
	/// );
	/// ```
	fn append(
		a: Self,
		b: Self,
	) -> Self {
		a + &b
	}
}

impl Monoid for String {
	/// ### Examples
	///
	/// ```rust
	/// use fp_library::functions::empty;
	///
	/// assert_eq!(empty::<String>(), "");
	/// ```
	fn empty() -> Self {
		Self::default()
	}
}
