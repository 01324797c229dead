//! Fixed-arity product types used to accumulate bindings in the for-comprehension builder.
//!
//! [`Pair`](crate::types::pair::Pair) already serves as the two-slot product (`Tuple2`); this
//! module adds the higher-arity slots the builder needs as it accumulates more bindings, in the
//! same bare tuple-struct shape as `Pair` (no `Bifunctor`/`Functor` instance — these are plain
//! value carriers, not a context to map into).

/// A three-slot product.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tuple3<A, B, C>(pub A, pub B, pub C);

/// A four-slot product.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tuple4<A, B, C, D>(pub A, pub B, pub C, pub D);

/// A five-slot product.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tuple5<A, B, C, D, E>(pub A, pub B, pub C, pub D, pub E);

/// A six-slot product.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tuple6<A, B, C, D, E, F>(pub A, pub B, pub C, pub D, pub E, pub F);

impl<A, B, C> Tuple3<A, B, C> {
	/// Appends a fourth value, producing a [`Tuple4`].
	pub fn push<D>(
		self,
		d: D,
	) -> Tuple4<A, B, C, D> {
		Tuple4(self.0, self.1, self.2, d)
	}
}

impl<A, B, C, D> Tuple4<A, B, C, D> {
	/// Appends a fifth value, producing a [`Tuple5`].
	pub fn push<E>(
		self,
		e: E,
	) -> Tuple5<A, B, C, D, E> {
		Tuple5(self.0, self.1, self.2, self.3, e)
	}
}

impl<A, B, C, D, E> Tuple5<A, B, C, D, E> {
	/// Appends a sixth value, producing a [`Tuple6`].
	pub fn push<F>(
		self,
		f: F,
	) -> Tuple6<A, B, C, D, E, F> {
		Tuple6(self.0, self.1, self.2, self.3, self.4, f)
	}
}
