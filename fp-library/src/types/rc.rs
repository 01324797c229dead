//! Concrete pointer brands for [`Rc`](std::rc::Rc) and [`Arc`](std::sync::Arc).
//!
//! These implement the [`Pointer`](crate::classes::Pointer)/[`RefCountedPointer`](crate::classes::RefCountedPointer)
//! hierarchy, giving the rest of the library a single brand-level abstraction over
//! single-threaded vs. thread-safe shared ownership.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::*, classes::*};
//!
//! let ptr = <RcBrand as Pointer>::new(42);
//! assert_eq!(*ptr, 42);
//!
//! let ptr = <ArcBrand as Pointer>::new(42);
//! assert_eq!(*ptr, 42);
//! ```

use crate::classes::{
	pointer::Pointer,
	ref_counted_pointer::RefCountedPointer,
	send_ref_counted_pointer::SendRefCountedPointer,
	send_unsized_coercible::SendUnsizedCoercible,
	unsized_coercible::UnsizedCoercible,
};
use std::{rc::Rc, sync::Arc};

/// Brand for [`Rc`], a single-threaded reference-counted pointer.
pub struct RcBrand;

impl Pointer for RcBrand {
	type Of<T: ?Sized> = Rc<T>;

	fn new<T>(value: T) -> Rc<T> {
		Rc::new(value)
	}
}

impl RefCountedPointer for RcBrand {
	type CloneableOf<T: ?Sized> = Rc<T>;

	fn cloneable_new<T>(value: T) -> Rc<T> {
		Rc::new(value)
	}

	fn try_unwrap<T>(ptr: Rc<T>) -> Result<T, Rc<T>> {
		Rc::try_unwrap(ptr)
	}
}

impl UnsizedCoercible for RcBrand {
	fn coerce_fn<'a, A, B>(f: impl 'a + Fn(A) -> B) -> Rc<dyn 'a + Fn(A) -> B> {
		Rc::new(f)
	}
}

/// Brand for [`Arc`], a thread-safe reference-counted pointer.
pub struct ArcBrand;

impl Pointer for ArcBrand {
	type Of<T: ?Sized> = Arc<T>;

	fn new<T>(value: T) -> Arc<T> {
		Arc::new(value)
	}
}

impl RefCountedPointer for ArcBrand {
	type CloneableOf<T: ?Sized> = Arc<T>;

	fn cloneable_new<T>(value: T) -> Arc<T> {
		Arc::new(value)
	}

	fn try_unwrap<T>(ptr: Arc<T>) -> Result<T, Arc<T>> {
		Arc::try_unwrap(ptr)
	}
}

impl UnsizedCoercible for ArcBrand {
	fn coerce_fn<'a, A, B>(f: impl 'a + Fn(A) -> B) -> Arc<dyn 'a + Fn(A) -> B> {
		Arc::new(f)
	}
}

impl SendRefCountedPointer for ArcBrand {
	type SendOf<T: ?Sized + Send + Sync> = Arc<T>;

	fn send_new<T: Send + Sync>(value: T) -> Arc<T> {
		Arc::new(value)
	}
}

impl SendUnsizedCoercible for ArcBrand {
	fn coerce_send_fn<'a, A, B>(
		f: impl 'a + Fn(A) -> B + Send + Sync
	) -> Arc<dyn 'a + Fn(A) -> B + Send + Sync> {
		Arc::new(f)
	}
}
