//! A type class for affine traversals: a focus that may or may not be present.
//!
//! The partial counterpart of [`Lens`](crate::classes::lens::Lens): `get_optional` may come back
//! empty (the focused case of a sum type the value isn't currently in), but `set` is still total
//! over `S` (setting a field on a structure that isn't in the focused case is a no-op).

use crate::types::Optional;

/// A focus onto a field of `S` of type `A` that may be absent.
///
/// ### Laws
///
/// `Affine` instances must satisfy the affine-traversal laws:
/// * Get-Set: if `get_optional(s) = Present(a)`, then `set(s, a) = s`.
/// * Set-Get: if `get_optional(s) = Present(_)`, then `get_optional(set(s, a)) = Present(a)`.
/// * Set-Set: `set(set(s, a), b) = set(s, b)`.
pub trait Affine<S, A> {
	/// Reads the focused field out of `s`, if present.
	fn get_optional(
		&self,
		s: &S,
	) -> Optional<A>;

	/// Replaces the focused field of `s` with `a`, if the focus is present. A no-op otherwise.
	fn set(
		&self,
		s: S,
		a: A,
	) -> S;

	/// Updates the focused field by applying `f` to its current value, if present.
	fn modify(
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
}
