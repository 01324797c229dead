//! [`ForPathBuilder`], the Path-flavored counterpart of [`ForBuilder`](crate::types::ForBuilder).
//!
//! A `ForPath` builder is bound to one concrete Path rather than an arbitrary `Monad` brand, so
//! no dictionary needs to be supplied at each call site. This crate's version specializes to
//! [`MaybePath`], the Path whose absorbing "no value" case gives `.when`/`.match_` their natural
//! short-circuiting meaning; the other Effect Paths can gain the same builder by following the
//! same pattern once a concrete need for them arises.

use crate::{
	classes::{affine::Affine, lens::Lens},
	types::path::MaybePath,
};

/// Starts a [`ForPathBuilder`] over [`MaybePath`].
pub struct ForPath;

impl ForPath {
	/// Starts a builder from an existing [`MaybePath`], binding its value as the first element
	/// of the accumulated tuple.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::{ForPath, MaybePath};
	///
	/// let result = ForPath::from(MaybePath::just(5)).yield_(|a| a * 2);
	/// assert_eq!(result.to_option(), Some(10));
	/// ```
	pub fn from<A>(path: MaybePath<A>) -> ForPathBuilder<(A,)> {
		ForPathBuilder { path: path.map(|a| (a,)) }
	}
}

/// A for-comprehension builder over [`MaybePath`], whose bindings so far are accumulated in `T`.
pub struct ForPathBuilder<T> {
	path: MaybePath<T>,
}

impl<A> ForPathBuilder<(A,)> {
	/// Adds a binding computed from a further `MaybePath` that depends on `A`.
	pub fn from_<B>(
		self,
		f: impl FnOnce(&A) -> MaybePath<B>,
	) -> ForPathBuilder<(A, B)> {
		let path = self.path.via(|(a,)| {
			let fb = f(&a);
			fb.map(|b| (a, b))
		});
		ForPathBuilder { path }
	}

	/// Adds a binding computed purely from `A`.
	pub fn let_<B>(
		self,
		f: impl FnOnce(&A) -> B,
	) -> ForPathBuilder<(A, B)> {
		let path = self.path.map(|(a,)| {
			let b = f(&a);
			(a, b)
		});
		ForPathBuilder { path }
	}

	/// Requires `pred` to hold; when it doesn't, the comprehension short-circuits to
	/// [`MaybePath::nothing`].
	pub fn when(
		self,
		pred: impl FnOnce(&A) -> bool,
	) -> Self {
		let path = self.path.via(|(a,)| if pred(&a) { MaybePath::just((a,)) } else { MaybePath::nothing() });
		ForPathBuilder { path }
	}

	/// Binds the value a [`Lens`] focuses on `A` as the next element of the tuple. Always
	/// succeeds, since a `Lens`'s focus is total.
	pub fn focus<B>(
		self,
		lens: impl Lens<A, B>,
	) -> ForPathBuilder<(A, B)> {
		let path = self.path.map(|(a,)| {
			let b = lens.get(&a);
			(a, b)
		});
		ForPathBuilder { path }
	}

	/// Binds the value an [`Affine`] focuses on `A` as the next element of the tuple.
	/// Short-circuits to [`MaybePath::nothing`] when the focus is absent.
	pub fn match_<B>(
		self,
		affine: impl Affine<A, B>,
	) -> ForPathBuilder<(A, B)> {
		let path = self.path.via(|(a,)| match affine.get_optional(&a) {
			crate::types::Optional::Present(b) => MaybePath::just((a, b)),
			crate::types::Optional::Absent => MaybePath::nothing(),
		});
		ForPathBuilder { path }
	}

	/// Terminates the builder, applying `f` to the accumulated binding.
	pub fn yield_<B>(
		self,
		f: impl FnOnce(A) -> B,
	) -> MaybePath<B> {
		self.path.map(|(a,)| f(a))
	}
}

impl<A, B> ForPathBuilder<(A, B)> {
	/// Adds a binding computed from a further `MaybePath` that depends on the bindings so far.
	pub fn from_<C>(
		self,
		f: impl FnOnce(&A, &B) -> MaybePath<C>,
	) -> ForPathBuilder<(A, B, C)> {
		let path = self.path.via(|(a, b)| {
			let fc = f(&a, &b);
			fc.map(|c| (a, b, c))
		});
		ForPathBuilder { path }
	}

	/// Adds a binding computed purely from the bindings so far.
	pub fn let_<C>(
		self,
		f: impl FnOnce(&A, &B) -> C,
	) -> ForPathBuilder<(A, B, C)> {
		let path = self.path.map(|(a, b)| {
			let c = f(&a, &b);
			(a, b, c)
		});
		ForPathBuilder { path }
	}

	/// Requires `pred` to hold over the bindings so far; short-circuits to
	/// [`MaybePath::nothing`] otherwise.
	pub fn when(
		self,
		pred: impl FnOnce(&A, &B) -> bool,
	) -> Self {
		let path = self.path.via(|(a, b)| if pred(&a, &b) { MaybePath::just((a, b)) } else { MaybePath::nothing() });
		ForPathBuilder { path }
	}

	/// Terminates the builder, applying `f` to the accumulated bindings.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::{ForPath, MaybePath};
	///
	/// let result = ForPath::from(MaybePath::just(2))
	///     .from_(|a| if *a > 0 { MaybePath::just(a * 10) } else { MaybePath::nothing() })
	///     .yield_(|(a, b)| a + b);
	/// assert_eq!(result.to_option(), Some(22));
	/// ```
	pub fn yield_<C>(
		self,
		f: impl FnOnce(A, B) -> C,
	) -> MaybePath<C> {
		self.path.map(|(a, b)| f(a, b))
	}
}
