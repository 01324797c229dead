//! Implementations for [`Endomorphism`], a wrapper for endomorphisms (functions from a type to itself) that enables monoidal operations.

use crate::{
	classes::{monoid::Monoid, semigroup::Semigroup},
	functions::{compose, identity},
};
use std::sync::Arc;

/// A wrapper for endomorphisms (functions from a type to itself) that enables monoidal operations.
///
/// `Endomorphism<A>` represents a function `A -> A`. It provides a [`Semigroup`]/[`Monoid`]
/// instance where:
/// - The binary operation (`append`) is function composition.
/// - The identity element (`empty`) is the identity function.
///
/// This allows combining transformations in a composable, associative way with a clear identity,
/// useful for building pipelines of transformations or accumulating operations.
///
/// The wrapped function can be accessed directly via the `.0` field.
///
/// ### Examples
///
/// ```
/// use fp_library::{functions::{append, empty}, types::endomorphism::Endomorphism};
/// use std::sync::Arc;
///
/// let double = Endomorphism(Arc::new(|x: i32| x * 2) as Arc<dyn Fn(i32) -> i32>);
/// let increment = Endomorphism(Arc::new(|x: i32| x + 1) as Arc<dyn Fn(i32) -> i32>);
///
/// // Compose functions (double after increment)
/// let combined = append(double, increment);
/// assert_eq!((combined.0)(3), 8); // double(increment(3)) = 8
///
/// // Identity element
/// let id = empty::<Endomorphism<i32>>();
/// assert_eq!((id.0)(42), 42);
/// ```
#[derive(Clone)]
pub struct Endomorphism<A>(pub Arc<dyn Fn(A) -> A>);

impl<A: 'static> Semigroup for Endomorphism<A> {
	/// Composes two endomorphisms: `append(f, g)` applies `g` then `f`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{functions::append, types::endomorphism::Endomorphism};
	/// use std::sync::Arc;
	///
	/// let double = Endomorphism(Arc::new(|x: i32| x * 2) as Arc<dyn Fn(i32) -> i32>);
	/// let increment = Endomorphism(Arc::new(|x: i32| x + 1) as Arc<dyn Fn(i32) -> i32>);
	///
	/// assert_eq!((append(double, increment).0)(3), 8);
	/// ```
	fn append(
		a: Self,
		b: Self,
	) -> Self {
		Endomorphism(Arc::new(compose(a.0, b.0)))
	}
}

impl<A: 'static> Monoid for Endomorphism<A> {
	/// ### Examples
	///
	/// ```
	/// use fp_library::{functions::empty, types::endomorphism::Endomorphism};
	///
	/// assert_eq!((empty::<Endomorphism<i32>>().0)(5), 5);
	/// ```
	fn empty() -> Self {
		Endomorphism(Arc::new(identity))
	}
}
