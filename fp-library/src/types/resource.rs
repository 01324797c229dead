//! [`Resource`], the bracket-pattern abstraction for acquire/release pairs.
//!
//! Unlike the host languages this crate's design is informed by, Rust already has a native
//! bracket mechanism: `Drop`, run automatically in reverse declaration order. `Resource`
//! leans on that directly instead of re-implementing an effect-stack-based bracket: composing
//! two resources nests their guards, and Rust's own drop order gives the LIFO release
//! guarantee for free.

use std::any::Any;

/// Runs a user-supplied cleanup exactly once, when dropped.
struct Guarded<A> {
	value: A,
	release: Option<Box<dyn FnOnce(&A)>>,
}

impl<A> Drop for Guarded<A> {
	fn drop(&mut self) {
		if let Some(release) = self.release.take() {
			release(&self.value);
		}
	}
}

/// Runs a zero-argument cleanup action exactly once, when dropped.
struct FinalizerGuard(Option<Box<dyn FnOnce()>>);

impl Drop for FinalizerGuard {
	fn drop(&mut self) {
		if let Some(f) = self.0.take() {
			f();
		}
	}
}

/// A live, in-scope resource value.
///
/// Produced by acquiring a [`Resource`]; dropping it releases everything it was built from, in
/// LIFO order, via Rust's ordinary drop semantics.
pub struct ResourceGuard<A> {
	inner: Guarded<A>,
	/// Whatever this guard's construction needs to outlive it (nested guards, finalizers).
	/// Declared after `inner` so it drops after `inner`'s own release runs.
	_keep_alive: Box<dyn Any>,
}

impl<A> std::ops::Deref for ResourceGuard<A> {
	type Target = A;

	fn deref(&self) -> &A {
		&self.inner.value
	}
}

/// A value that must be closed when no longer needed, the target of
/// [`Resource::from_auto_closeable`].
pub trait Closeable {
	fn close(&self);
}

/// A description of how to acquire a value of type `A` and release it exactly once, composably.
///
/// ### Examples
///
/// ```
/// use fp_library::types::resource::Resource;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let released = Rc::new(RefCell::new(false));
/// let released_clone = released.clone();
/// let resource = Resource::make(|| 42, move |_| *released_clone.borrow_mut() = true);
/// let doubled = resource.use_with(|x| x * 2);
/// assert_eq!(doubled, 84);
/// assert!(*released.borrow());
/// ```
pub struct Resource<A>
where
	A: 'static,
{
	acquire: Box<dyn FnOnce() -> ResourceGuard<A>>,
}

impl<A: 'static> Resource<A> {
	/// A resource with no cleanup at all.
	pub fn pure(a: A) -> Self {
		Resource {
			acquire: Box::new(move || ResourceGuard {
				inner: Guarded { value: a, release: None },
				_keep_alive: Box::new(()),
			}),
		}
	}

	/// Builds a resource from an arbitrary acquire/release pair.
	pub fn make(acquire: impl FnOnce() -> A + 'static, release: impl FnOnce(&A) + 'static) -> Self {
		Resource {
			acquire: Box::new(move || ResourceGuard {
				inner: Guarded { value: acquire(), release: Some(Box::new(release)) },
				_keep_alive: Box::new(()),
			}),
		}
	}

	/// Builds a resource whose cleanup is `A::close`.
	pub fn from_auto_closeable(acquire: impl FnOnce() -> A + 'static) -> Self
	where
		A: Closeable,
	{
		Self::make(acquire, |a| a.close())
	}

	/// Transforms the acquired value, keeping the original resource alive (and its release
	/// pending) until the derived value is done with.
	pub fn map<B: 'static>(self, f: impl FnOnce(&A) -> B + 'static) -> Resource<B> {
		Resource {
			acquire: Box::new(move || {
				let guard_a = (self.acquire)();
				let b = f(&guard_a);
				ResourceGuard { inner: Guarded { value: b, release: None }, _keep_alive: Box::new(guard_a) }
			}),
		}
	}

	/// Acquires a dependent resource from this one. Releases in LIFO order: the dependent
	/// resource (and anything it was built from) releases before this one.
	pub fn flat_map<B: 'static>(self, f: impl FnOnce(&A) -> Resource<B> + 'static) -> Resource<B> {
		Resource {
			acquire: Box::new(move || {
				let guard_a = (self.acquire)();
				let resource_b = f(&guard_a);
				let guard_b = (resource_b.acquire)();
				let ResourceGuard { inner, _keep_alive } = guard_b;
				ResourceGuard { inner, _keep_alive: Box::new((_keep_alive, guard_a)) }
			}),
		}
	}

	/// Adds a cleanup action that runs after this resource's own release. Calling this more
	/// than once stacks finalizers; the most recently added runs first.
	pub fn with_finalizer(self, finalizer: impl FnOnce() + 'static) -> Self {
		Resource {
			acquire: Box::new(move || {
				let guard = (self.acquire)();
				let ResourceGuard { inner, _keep_alive } = guard;
				ResourceGuard {
					inner,
					_keep_alive: Box::new((FinalizerGuard(Some(Box::new(finalizer))), _keep_alive)),
				}
			}),
		}
	}

	/// Acquires this resource, runs `f` on it, and releases it before returning `f`'s result.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::resource::Resource;
	///
	/// let result = Resource::make(|| 10, |_| {}).use_with(|x| x + 1);
	/// assert_eq!(result, 11);
	/// ```
	pub fn use_with<B>(self, f: impl FnOnce(&A) -> B) -> B {
		let guard = (self.acquire)();
		f(&guard)
	}

	/// Acquires this resource and `other` together, runs `f` on both, then releases `other`
	/// before this one (LIFO). The idiomatic-Rust counterpart of composing two resources with
	/// `and` and immediately using the pair: Rust's ownership rules don't allow handing back a
	/// freely reusable `Resource<(A, B)>` without requiring `A: Clone`, so this combinator
	/// folds acquisition, use, and release into a single step instead.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::resource::Resource;
	///
	/// let a = Resource::make(|| 1, |_| {});
	/// let b = Resource::make(|| 2, |_| {});
	/// let sum = a.and_use(b, |x, y| x + y);
	/// assert_eq!(sum, 3);
	/// ```
	pub fn and_use<B: 'static, C>(self, other: Resource<B>, f: impl FnOnce(&A, &B) -> C) -> C {
		let guard_a = (self.acquire)();
		let guard_b = (other.acquire)();
		f(&guard_a, &guard_b)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{cell::RefCell, rc::Rc};

	#[test]
	fn pure_has_no_release_test() {
		let resource = Resource::pure(5);
		assert_eq!(resource.use_with(|x| *x), 5);
	}

	#[test]
	fn make_releases_after_use_test() {
		let released = Rc::new(RefCell::new(false));
		let released_clone = released.clone();
		let resource = Resource::make(|| 42, move |_| *released_clone.borrow_mut() = true);
		assert!(!*released.borrow());
		let value = resource.use_with(|x| *x);
		assert_eq!(value, 42);
		assert!(*released.borrow());
	}

	#[test]
	fn map_keeps_original_alive_until_use_test() {
		let released = Rc::new(RefCell::new(false));
		let released_clone = released.clone();
		let resource = Resource::make(|| 10, move |_| *released_clone.borrow_mut() = true).map(|x| x * 2);
		let value = resource.use_with(|x| *x);
		assert_eq!(value, 20);
		assert!(*released.borrow());
	}

	#[test]
	fn flat_map_releases_lifo_test() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let log_a = log.clone();
		let log_b = log.clone();
		let resource = Resource::make(|| "a", move |_| log_a.borrow_mut().push("a"))
			.flat_map(move |_| Resource::make(|| "b", move |_| log_b.borrow_mut().push("b")));
		resource.use_with(|x| assert_eq!(*x, "b"));
		assert_eq!(*log.borrow(), vec!["b", "a"]);
	}

	#[test]
	fn with_finalizer_runs_after_release_test() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let log_release = log.clone();
		let log_finalizer = log.clone();
		let resource = Resource::make(|| 1, move |_| log_release.borrow_mut().push("release"))
			.with_finalizer(move || log_finalizer.borrow_mut().push("finalizer"));
		resource.use_with(|_| ());
		assert_eq!(*log.borrow(), vec!["release", "finalizer"]);
	}

	#[test]
	fn with_finalizer_stacks_newest_first_test() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let log1 = log.clone();
		let log2 = log.clone();
		let resource = Resource::make(|| 1, |_| {})
			.with_finalizer(move || log1.borrow_mut().push("first"))
			.with_finalizer(move || log2.borrow_mut().push("second"));
		resource.use_with(|_| ());
		assert_eq!(*log.borrow(), vec!["second", "first"]);
	}

	#[test]
	fn and_use_releases_lifo_test() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let log_a = log.clone();
		let log_b = log.clone();
		let a = Resource::make(|| 1, move |_| log_a.borrow_mut().push("a"));
		let b = Resource::make(|| 2, move |_| log_b.borrow_mut().push("b"));
		let sum = a.and_use(b, |x, y| x + y);
		assert_eq!(sum, 3);
		assert_eq!(*log.borrow(), vec!["b", "a"]);
	}
}
