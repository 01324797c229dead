//! [`Semigroup`] and [`Monoid`] for [`Vec`].

use crate::classes::{monoid::Monoid, semigroup::Semigroup};

impl<A> Semigroup for Vec<A> {
	/// # Examples
	///
	/// ```
	/// use fp_library::functions::append;
	///
	/// assert_eq!(append(vec![1, 2], vec![3, 4]), vec![1, 2, 3, 4]);
	/// ```
	fn append(
		mut a: Self,
		mut b: Self,
	) -> Self {
		a.append(&mut b);
		a
	}
}

impl<A> Monoid for Vec<A> {
	/// # Examples
	///
	/// ```
	/// use fp_library::functions::empty;
	///
	/// assert_eq!(empty::<Vec<i32>>(), vec![]);
	/// ```
	fn empty() -> Self {
		Self::default()
	}
}
