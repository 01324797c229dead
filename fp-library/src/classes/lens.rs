//! A type class for lenses: total, bidirectional foci onto a field of a structure.
//!
//! Unlike most type classes in this crate, `Lens`'s two type parameters (`S`, the whole
//! structure; `A`, the focused field) are both concrete, not higher-kinded, so no `Apply!`/brand
//! machinery is involved. A lens value is simply something that knows how to read and write one
//! field of `S`.
//!
//! ### Examples
//!
//! ```
//! use fp_library::classes::lens::Lens;
//!
//! struct Pair(i32, i32);
//! struct First;
//!
//! impl Lens<Pair, i32> for First {
//!     fn get(&self, s: &Pair) -> i32 {
//!         s.0
//!     }
//!
//!     fn set(&self, s: Pair, a: i32) -> Pair {
//!         Pair(a, s.1)
//!     }
//! }
//!
//! let p = Pair(1, 2);
//! assert_eq!(First.get(&p), 1);
//! assert_eq!(First.set(p, 9).0, 9);
//! ```

/// A total, bidirectional focus onto a field of `S` of type `A`.
///
/// ### Laws
///
/// `Lens` instances must satisfy the lens laws:
/// * Get-Set: `set(s, get(s)) = s`.
/// * Set-Get: `get(set(s, a)) = a`.
/// * Set-Set: `set(set(s, a), b) = set(s, b)`.
pub trait Lens<S, A> {
	/// Reads the focused field out of `s`.
	fn get(
		&self,
		s: &S,
	) -> A;

	/// Replaces the focused field of `s` with `a`, returning the updated structure.
	fn set(
		&self,
		s: S,
		a: A,
	) -> S;

	/// Updates the focused field by applying `f` to its current value.
	fn modify(
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
}
