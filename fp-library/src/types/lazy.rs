//! A memoizing, shareable lazy computation, parameterized over its sharing strategy.
//!
//! [`Lazy`] defers computing a value until it is first [`evaluate`](Lazy::evaluate)d, then
//! caches the result for subsequent calls. Sharing is abstracted by [`LazyConfig`]: [`RcLazyConfig`]
//! gives cheap single-threaded sharing via [`Rc`], [`ArcLazyConfig`] gives thread-safe sharing via [`Arc`].
//!
//! ### Examples
//!
//! ```
//! use fp_library::types::{Lazy, RcLazyConfig};
//!
//! let lazy = Lazy::<_, RcLazyConfig>::new(|| 1 + 1);
//! assert_eq!(*lazy.evaluate(), 2);
//! ```

use crate::{Apply, classes::ref_functor::RefFunctor, impl_kind, kinds::*};
use std::{
	marker::PhantomData,
	ops::Deref,
	rc::Rc,
	sync::{Arc, Mutex, OnceLock},
};

/// Selects the pointer type used by [`Lazy`] to share its memoized state.
///
/// This mirrors the [`Pointer`](crate::classes::Pointer)/[`RefCountedPointer`](crate::classes::RefCountedPointer)
/// distinction between [`RcBrand`](crate::types::rc::RcBrand) and [`ArcBrand`](crate::types::rc::ArcBrand):
/// cheap non-atomic sharing for single-threaded use, or thread-safe sharing when `Lazy` values
/// need to cross threads.
pub trait LazyConfig: 'static {
	/// The pointer type used to share the memoized state.
	type Pointer<T: 'static>: Clone + Deref<Target = T>;

	/// Wraps a value in the config's pointer type.
	fn new_pointer<T: 'static>(value: T) -> Self::Pointer<T>;
}

/// Cheap, non-atomic sharing via [`Rc`]. Not `Send`.
pub struct RcLazyConfig;

impl LazyConfig for RcLazyConfig {
	type Pointer<T: 'static> = Rc<T>;

	fn new_pointer<T: 'static>(value: T) -> Rc<T> {
		Rc::new(value)
	}
}

/// Thread-safe sharing via [`Arc`].
pub struct ArcLazyConfig;

impl LazyConfig for ArcLazyConfig {
	type Pointer<T: 'static> = Arc<T>;

	fn new_pointer<T: 'static>(value: T) -> Arc<T> {
		Arc::new(value)
	}
}

struct LazyCell<A> {
	value: OnceLock<A>,
	thunk: Mutex<Option<Box<dyn FnOnce() -> A>>>,
}

impl<A> LazyCell<A> {
	fn new(f: impl FnOnce() -> A + 'static) -> Self {
		LazyCell {
			value: OnceLock::new(),
			thunk: Mutex::new(Some(Box::new(f))),
		}
	}

	fn already(value: A) -> Self {
		let cell = OnceLock::new();
		// Can only fail if already initialized, which cannot happen for a fresh cell.
		let _ = cell.set(value);
		LazyCell {
			value: cell,
			thunk: Mutex::new(None),
		}
	}

	fn get(&self) -> &A {
		self.value.get_or_init(|| {
			let thunk = self
				.thunk
				.lock()
				.unwrap_or_else(|poisoned| poisoned.into_inner())
				.take()
				.expect("Lazy thunk already consumed");
			thunk()
		})
	}
}

/// A memoizing, shareable lazy computation.
///
/// Computation is deferred until [`evaluate`](Lazy::evaluate) is first called, then cached.
/// Cloning a `Lazy` shares the same memoized cell; forcing one clone is visible through the others.
///
/// ### Type Parameters
///
/// * `A`: The type of the value produced once forced.
/// * `Config`: The sharing strategy, [`RcLazyConfig`] (default) or [`ArcLazyConfig`].
pub struct Lazy<A: 'static, Config: LazyConfig = RcLazyConfig>(Config::Pointer<LazyCell<A>>);

impl<A: 'static, Config: LazyConfig> Lazy<A, Config> {
	/// Creates a new `Lazy` wrapping the given thunk.
	///
	/// The thunk is not run until [`evaluate`](Lazy::evaluate) is first called.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::{Lazy, RcLazyConfig};
	///
	/// let lazy = Lazy::<_, RcLazyConfig>::new(|| 42);
	/// assert_eq!(*lazy.evaluate(), 42);
	/// ```
	pub fn new(f: impl FnOnce() -> A + 'static) -> Self {
		Lazy(Config::new_pointer(LazyCell::new(f)))
	}

	/// Creates a new `Lazy` that is already resolved to the given value.
	pub fn already(value: A) -> Self {
		Lazy(Config::new_pointer(LazyCell::already(value)))
	}

	/// Forces the computation if necessary, and returns a reference to the cached result.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::{Lazy, RcLazyConfig};
	///
	/// let lazy = Lazy::<_, RcLazyConfig>::new(|| 1 + 1);
	/// assert_eq!(*lazy.evaluate(), 2);
	/// assert_eq!(*lazy.evaluate(), 2); // cached
	/// ```
	pub fn evaluate(&self) -> &A {
		self.0.get()
	}
}

impl<A: 'static, Config: LazyConfig> Clone for Lazy<A, Config> {
	fn clone(&self) -> Self {
		Lazy(self.0.clone())
	}
}

/// Brand for [`Lazy<A, Config>`], parameterized by the same sharing strategy.
pub struct LazyBrand<Config: LazyConfig>(PhantomData<Config>);

impl_kind! {
	impl<Config: LazyConfig> for LazyBrand<Config> {
		type Of<'a, A: 'a>: 'a = Lazy<A, Config>;
	}
}

impl<Config: LazyConfig> RefFunctor for LazyBrand<Config> {
	/// Maps a function over the memoized value, without forcing it until `evaluate` is called.
	///
	/// `ref_map`'s function is only required to live for `'a`, so the mapped `Lazy` is built by
	/// eagerly evaluating `fa` and storing the already-computed result, keeping the mapped
	/// value's storage free of any non-`'static` captures.
	fn ref_map<'a, A: 'a, B: 'a, Func>(
		func: Func,
		fa: Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, A>),
	) -> Apply!(<Self as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'a, B>)
	where
		Func: FnOnce(&A) -> B + 'a,
	{
		let b = func(fa.evaluate());
		Lazy::already(b)
	}
}
