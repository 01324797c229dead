//! [`For`]/[`ForBuilder`], a tuple-accumulating for-comprehension over any [`Monad`].
//!
//! Each call to `.from_`/`.let_` adds one binding to the builder's accumulated tuple, in
//! declaration order; `.yield_` consumes the builder and projects the final tuple through a
//! function, the same desugaring a `do`-block or a `for`-comprehension in a host language with
//! that feature performs by hand. Because each added binding needs the earlier ones to still be
//! around for the final projection, every bound value must be [`Clone`].
//!
//! Arity is handled by a handful of hand-written impls over nested tuples — `ForBuilder<'a,
//! Brand, (A,)>`, `ForBuilder<'a, Brand, (A, B)>`, and so on — rather than one generic impl over
//! an arbitrary-length heterogeneous list, mirroring how [`classes::par_foldable`](crate::classes::par_foldable)
//! hand-writes its own fixed set of arity-bound impls instead of reaching for a variadic macro.

use crate::{
	Apply,
	classes::{monad::Monad, monad_zero::MonadZero},
	kinds::*,
};

/// The entry point: starts a builder from an existing effect, with one binding.
pub struct For;

impl For {
	/// Starts a builder from `effect`, binding its value as the first (and so far only) element
	/// of the accumulated tuple.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, types::for_comprehension::For};
	///
	/// let result = For::from::<OptionBrand, _>(Some(5)).yield_(|a| a * 2);
	/// assert_eq!(result, Some(10));
	/// ```
	pub fn from<'a, Brand: Monad, A: 'a>(
		effect: Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>),
	) -> ForBuilder<'a, Brand, (A,)> {
		ForBuilder { effect: Brand::map(move |a| (a,), effect) }
	}
}

/// A for-comprehension builder over `Brand`, whose bindings so far are accumulated in `T`.
pub struct ForBuilder<'a, Brand, T>
where
	Brand: Monad,
	T: 'a,
{
	effect: Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, T>),
}

impl<'a, Brand: Monad, A: Clone + 'a> ForBuilder<'a, Brand, (A,)> {
	/// Adds a binding computed from a further effect that depends on `A`.
	pub fn from_<B: 'a>(
		self,
		f: impl Fn(A) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>) + 'a,
	) -> ForBuilder<'a, Brand, (A, B)> {
		let effect = Brand::bind(self.effect, move |(a,)| {
			let fb = f(a.clone());
			Brand::map(move |b| (a.clone(), b), fb)
		});
		ForBuilder { effect }
	}

	/// Adds a binding computed purely from `A`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, types::for_comprehension::For};
	///
	/// let result = For::from::<OptionBrand, _>(Some(5)).let_(|a| a + 1).yield_(|(a, b)| a + b);
	/// assert_eq!(result, Some(11));
	/// ```
	pub fn let_<B: 'a>(
		self,
		f: impl Fn(A) -> B + 'a,
	) -> ForBuilder<'a, Brand, (A, B)> {
		let effect = Brand::map(
			move |(a,): (A,)| {
				let b = f(a.clone());
				(a, b)
			},
			self.effect,
		);
		ForBuilder { effect }
	}

	/// Requires `pred` to hold; when it doesn't, the comprehension short-circuits to
	/// [`MonadZero::zero`].
	pub fn when(
		self,
		pred: impl Fn(&A) -> bool + 'a,
	) -> Self
	where
		Brand: MonadZero,
	{
		let effect = Brand::bind(self.effect, move |(a,)| {
			if pred(&a) { Brand::pure((a,)) } else { Brand::zero() }
		});
		ForBuilder { effect }
	}

	/// Terminates the builder, applying `f` to the accumulated binding.
	pub fn yield_<B: 'a>(
		self,
		f: impl FnOnce(A) -> B + 'a,
	) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>) {
		Brand::map(move |(a,)| f(a), self.effect)
	}
}

impl<'a, Brand: Monad, A: Clone + 'a, B: Clone + 'a> ForBuilder<'a, Brand, (A, B)> {
	/// Adds a binding computed from a further effect that depends on the bindings so far.
	pub fn from_<C: 'a>(
		self,
		f: impl Fn(A, B) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, C>) + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C)> {
		let effect = Brand::bind(self.effect, move |(a, b)| {
			let fc = f(a.clone(), b.clone());
			Brand::map(move |c| (a.clone(), b.clone(), c), fc)
		});
		ForBuilder { effect }
	}

	/// Adds a binding computed purely from the bindings so far.
	pub fn let_<C: 'a>(
		self,
		f: impl Fn(A, B) -> C + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C)> {
		let effect = Brand::map(
			move |(a, b): (A, B)| {
				let c = f(a.clone(), b.clone());
				(a, b, c)
			},
			self.effect,
		);
		ForBuilder { effect }
	}

	/// Requires `pred` to hold over the bindings so far; short-circuits to
	/// [`MonadZero::zero`] otherwise.
	pub fn when(
		self,
		pred: impl Fn(&A, &B) -> bool + 'a,
	) -> Self
	where
		Brand: MonadZero,
	{
		let effect = Brand::bind(self.effect, move |(a, b)| {
			if pred(&a, &b) { Brand::pure((a, b)) } else { Brand::zero() }
		});
		ForBuilder { effect }
	}

	/// Terminates the builder, applying `f` to the accumulated bindings.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::{brands::OptionBrand, types::for_comprehension::For};
	///
	/// let result = For::from::<OptionBrand, _>(Some(2))
	///     .from_(|a| if a > 0 { Some(a * 10) } else { None })
	///     .yield_(|(a, b)| a + b);
	/// assert_eq!(result, Some(22));
	/// ```
	pub fn yield_<C: 'a>(
		self,
		f: impl FnOnce(A, B) -> C + 'a,
	) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, C>) {
		Brand::map(move |(a, b)| f(a, b), self.effect)
	}
}

impl<'a, Brand: Monad, A: Clone + 'a, B: Clone + 'a, C: Clone + 'a> ForBuilder<'a, Brand, (A, B, C)> {
	/// Adds a binding computed from a further effect that depends on the bindings so far.
	pub fn from_<D: 'a>(
		self,
		f: impl Fn(A, B, C) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, D>) + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C, D)> {
		let effect = Brand::bind(self.effect, move |(a, b, c)| {
			let fd = f(a.clone(), b.clone(), c.clone());
			Brand::map(move |d| (a.clone(), b.clone(), c.clone(), d), fd)
		});
		ForBuilder { effect }
	}

	/// Adds a binding computed purely from the bindings so far.
	pub fn let_<D: 'a>(
		self,
		f: impl Fn(A, B, C) -> D + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C, D)> {
		let effect = Brand::map(
			move |(a, b, c): (A, B, C)| {
				let d = f(a.clone(), b.clone(), c.clone());
				(a, b, c, d)
			},
			self.effect,
		);
		ForBuilder { effect }
	}

	/// Requires `pred` to hold over the bindings so far; short-circuits to
	/// [`MonadZero::zero`] otherwise.
	pub fn when(
		self,
		pred: impl Fn(&A, &B, &C) -> bool + 'a,
	) -> Self
	where
		Brand: MonadZero,
	{
		let effect = Brand::bind(self.effect, move |(a, b, c)| {
			if pred(&a, &b, &c) { Brand::pure((a, b, c)) } else { Brand::zero() }
		});
		ForBuilder { effect }
	}

	/// Terminates the builder, applying `f` to the accumulated bindings.
	pub fn yield_<D: 'a>(
		self,
		f: impl FnOnce(A, B, C) -> D + 'a,
	) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, D>) {
		Brand::map(move |(a, b, c)| f(a, b, c), self.effect)
	}
}

impl<'a, Brand: Monad, A: Clone + 'a, B: Clone + 'a, C: Clone + 'a, D: Clone + 'a> ForBuilder<'a, Brand, (A, B, C, D)> {
	/// Adds a binding computed from a further effect that depends on the bindings so far.
	pub fn from_<E: 'a>(
		self,
		f: impl Fn(A, B, C, D) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, E>) + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C, D, E)> {
		let effect = Brand::bind(self.effect, move |(a, b, c, d)| {
			let fe = f(a.clone(), b.clone(), c.clone(), d.clone());
			Brand::map(move |e| (a.clone(), b.clone(), c.clone(), d.clone(), e), fe)
		});
		ForBuilder { effect }
	}

	/// Adds a binding computed purely from the bindings so far.
	pub fn let_<E: 'a>(
		self,
		f: impl Fn(A, B, C, D) -> E + 'a,
	) -> ForBuilder<'a, Brand, (A, B, C, D, E)> {
		let effect = Brand::map(
			move |(a, b, c, d): (A, B, C, D)| {
				let e = f(a.clone(), b.clone(), c.clone(), d.clone());
				(a, b, c, d, e)
			},
			self.effect,
		);
		ForBuilder { effect }
	}

	/// Requires `pred` to hold over the bindings so far; short-circuits to
	/// [`MonadZero::zero`] otherwise.
	pub fn when(
		self,
		pred: impl Fn(&A, &B, &C, &D) -> bool + 'a,
	) -> Self
	where
		Brand: MonadZero,
	{
		let effect = Brand::bind(self.effect, move |(a, b, c, d)| {
			if pred(&a, &b, &c, &d) { Brand::pure((a, b, c, d)) } else { Brand::zero() }
		});
		ForBuilder { effect }
	}

	/// Terminates the builder, applying `f` to the accumulated bindings.
	pub fn yield_<E: 'a>(
		self,
		f: impl FnOnce(A, B, C, D) -> E + 'a,
	) -> Apply!(<Brand as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, E>) {
		Brand::map(move |(a, b, c, d)| f(a, b, c, d), self.effect)
	}
}
