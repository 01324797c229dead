//! [`AffinePath`], a composable, concrete [`Affine`](crate::classes::affine::Affine).
//!
//! The partial counterpart of [`FocusPath`](crate::types::path::FocusPath): the getter may come
//! back [`Optional::Absent`], for a focus that targets one case of a sum type.

use crate::{classes::affine::Affine, types::Optional};
use std::sync::Arc;

/// An affine traversal reified as a value: a partial getter and a total setter, composable with
/// `via`.
///
/// ### Examples
///
/// ```
/// use fp_library::types::{Optional, path::AffinePath};
///
/// #[derive(Clone)]
/// enum Shape { Circle(f64), Square(f64) }
///
/// let radius = AffinePath::new(
///     |s: &Shape| match s { Shape::Circle(r) => Optional::Present(*r), Shape::Square(_) => Optional::Absent },
///     |s: Shape, a| match s { Shape::Circle(_) => Shape::Circle(a), square => square },
/// );
/// assert_eq!(radius.get_optional(&Shape::Circle(2.0)), Optional::Present(2.0));
/// assert_eq!(radius.get_optional(&Shape::Square(2.0)), Optional::Absent);
/// ```
#[derive(Clone)]
pub struct AffinePath<S, A> {
	getter: Arc<dyn Fn(&S) -> Optional<A>>,
	setter: Arc<dyn Fn(S, A) -> S>,
}

impl<S, A> AffinePath<S, A> {
	/// Builds an affine traversal from an explicit getter/setter pair.
	pub fn new(
		getter: impl Fn(&S) -> Optional<A> + 'static,
		setter: impl Fn(S, A) -> S + 'static,
	) -> Self {
		AffinePath { getter: Arc::new(getter), setter: Arc::new(setter) }
	}

	/// Reads the focused field, if present.
	pub fn get_optional(
		&self,
		s: &S,
	) -> Optional<A> {
		(self.getter)(s)
	}

	/// Replaces the focused field, if present. A no-op otherwise.
	pub fn set(
		&self,
		s: S,
		a: A,
	) -> S {
		(self.setter)(s, a)
	}

	/// Updates the focused field by applying `f`, if present.
	pub fn modify(
		&self,
		s: S,
		f: impl FnOnce(A) -> A,
	) -> S
	where
		S: Clone,
	{
		match self.get_optional(&s) {
			Optional::Present(current) => self.set(s, f(current)),
			Optional::Absent => s,
		}
	}

	/// Composes this traversal with a further traversal on the field it exposes. The composed
	/// focus is absent whenever either step is.
	pub fn via<B: 'static>(self, other: AffinePath<A, B>) -> AffinePath<S, B>
	where
		S: 'static,
		A: 'static,
	{
		AffinePath {
			getter: {
				let getter = self.getter.clone();
				Arc::new(move |s: &S| match getter(s) {
					Optional::Present(a) => other.get_optional(&a),
					Optional::Absent => Optional::Absent,
				})
			},
			setter: {
				let getter = self.getter.clone();
				let setter = self.setter.clone();
				Arc::new(move |s: S, b: B| match getter(&s) {
					Optional::Present(a) => {
						let a = other.set(a, b);
						setter(s, a)
					}
					Optional::Absent => s,
				})
			},
		}
	}
}

impl<S, A> Affine<S, A> for AffinePath<S, A> {
	fn get_optional(
		&self,
		s: &S,
	) -> Optional<A> {
		AffinePath::get_optional(self, s)
	}

	fn set(
		&self,
		s: S,
		a: A,
	) -> S {
		AffinePath::set(self, s, a)
	}
}
