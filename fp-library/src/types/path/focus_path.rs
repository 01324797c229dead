//! [`FocusPath`], a composable, concrete [`Lens`](crate::classes::lens::Lens).
//!
//! Where `Lens` is the capability trait a caller's own type can implement, `FocusPath` is a
//! ready-made lens value built from a getter/setter pair, the same closure-wrapping idiom
//! [`Endomorphism`](crate::types::Endomorphism) uses for functions under a monoid.

use crate::classes::lens::Lens;
use std::sync::Arc;

/// A lens reified as a value: a getter and setter pair over `S`/`A`, composable with `via`.
///
/// ### Examples
///
/// ```
/// use fp_library::types::path::FocusPath;
///
/// let first = FocusPath::new(|pair: &(i32, i32)| pair.0, |pair: (i32, i32), a| (a, pair.1));
/// assert_eq!(first.get(&(1, 2)), 1);
/// assert_eq!(first.set((1, 2), 9), (9, 2));
/// ```
#[derive(Clone)]
pub struct FocusPath<S, A> {
	getter: Arc<dyn Fn(&S) -> A>,
	setter: Arc<dyn Fn(S, A) -> S>,
}

impl<S, A> FocusPath<S, A> {
	/// Builds a focus from an explicit getter/setter pair.
	pub fn new(
		getter: impl Fn(&S) -> A + 'static,
		setter: impl Fn(S, A) -> S + 'static,
	) -> Self {
		FocusPath { getter: Arc::new(getter), setter: Arc::new(setter) }
	}

	/// Reads the focused field.
	pub fn get(
		&self,
		s: &S,
	) -> A {
		(self.getter)(s)
	}

	/// Replaces the focused field.
	pub fn set(
		&self,
		s: S,
		a: A,
	) -> S {
		(self.setter)(s, a)
	}

	/// Updates the focused field by applying `f` to its current value.
	pub fn modify(
		&self,
		s: S,
		f: impl FnOnce(A) -> A,
	) -> S
	where
		S: Clone,
	{
		let current = self.get(&s);
		self.set(s, f(current))
	}

	/// Composes this focus with a further focus on the field it exposes, producing a focus from
	/// `S` directly onto `B`.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::path::FocusPath;
	///
	/// struct Outer { inner: (i32, i32) }
	///
	/// let inner_field = FocusPath::new(|o: &Outer| o.inner, |o: Outer, inner| Outer { inner });
	/// let first = FocusPath::new(|pair: &(i32, i32)| pair.0, |pair: (i32, i32), a| (a, pair.1));
	/// let composed = inner_field.via(first);
	///
	/// let o = Outer { inner: (1, 2) };
	/// assert_eq!(composed.get(&o), 1);
	/// ```
	pub fn via<B: 'static>(self, other: FocusPath<A, B>) -> FocusPath<S, B>
	where
		S: 'static,
		A: 'static,
	{
		FocusPath {
			getter: Arc::new(move |s: &S| other.get(&(self.getter)(s))),
			setter: {
				let getter = self.getter.clone();
				let setter = self.setter.clone();
				Arc::new(move |s: S, b: B| {
					let a = getter(&s);
					let a = other.set(a, b);
					setter(s, a)
				})
			},
		}
	}
}

impl<S, A> Lens<S, A> for FocusPath<S, A> {
	fn get(
		&self,
		s: &S,
	) -> A {
		FocusPath::get(self, s)
	}

	fn set(
		&self,
		s: S,
		a: A,
	) -> S {
		FocusPath::set(self, s, a)
	}
}
