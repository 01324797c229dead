//! Implementation of the free applicative, `FreeAp`.
//!
//! Where [`Free`](crate::types::free::Free) builds a program out of a functor `F` plus
//! monadic sequencing (each step can depend on the previous result), `FreeAp` builds a
//! program out of `F` plus only applicative combination: every operation in the structure
//! is known up front, independent of any other operation's result. That's what makes a
//! `FreeAp` *introspectable* — [`FreeAp::analyse`] can walk every suspended operation before
//! running any of them, which `Free` cannot offer since a later step may not exist until an
//! earlier one has actually produced a value.
//!
//! ### Representation
//!
//! A `FreeAp<F, A>` is a list of type-erased `F`-operations plus a combining function that
//! reassembles their results, in order, into an `A`. This mirrors the type-erasure technique
//! [`Free`](crate::types::free::Free) uses (`Box<dyn Any>`), for the same reason: `Any`
//! requires `'static`, so this structure only works with `'static` types.
//!
//! ### Examples
//!
//! ```
//! use fp_library::types::free_ap::FreeAp;
//! use fp_library::brands::OptionBrand;
//!
//! let validated = FreeAp::<OptionBrand, _>::lift_f(Some(3))
//!     .zip_with(FreeAp::lift_f(Some(4)), |a, b| a + b);
//! assert_eq!(validated.op_count(), 2);
//! ```

use crate::{Apply, classes::Functor, kinds::*};
use std::{any::Any, collections::VecDeque};

type Val = Box<dyn Any>;

/// A free applicative program over the functor `F`, producing an `A` once every suspended
/// operation has been supplied a result.
pub struct FreeAp<F, A>
where
	F: Functor + 'static,
	A: 'static,
{
	ops: Vec<Apply!(<F as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'static, Val>)>,
	combine: Box<dyn FnOnce(&mut VecDeque<Val>) -> A>,
}

impl<F, A> FreeAp<F, A>
where
	F: Functor + 'static,
	A: 'static,
{
	/// Lifts a plain value, with no suspended operations.
	pub fn pure(a: A) -> Self {
		FreeAp { ops: Vec::new(), combine: Box::new(move |_vals| a) }
	}

	/// Lifts a single effectful operation.
	pub fn lift_f(fa: Apply!(<F as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'static, A>)) -> Self {
		let erased = F::map(|a: A| Box::new(a) as Val, fa);
		FreeAp {
			ops: vec![erased],
			combine: Box::new(|vals: &mut VecDeque<Val>| {
				let v = vals.pop_front().expect("FreeAp: arity mismatch between ops and combine");
				*v.downcast::<A>().expect("FreeAp: type mismatch in downcast")
			}),
		}
	}

	/// Returns how many suspended operations this program is built from.
	pub fn op_count(&self) -> usize {
		self.ops.len()
	}

	/// Walks every suspended operation, in construction order, without running any of them.
	///
	/// The callback sees each operation as an `F<Val>` with its result type already erased;
	/// it can inspect `F`'s own structure (e.g. pattern-match a concrete effect enum) but not
	/// the type the operation would ultimately produce.
	pub fn analyse<B>(
		&self,
		f: impl Fn(&Apply!(<F as Kind!( type Of<'a, T: 'a>: 'a; )>::Of<'static, Val>)) -> B,
	) -> Vec<B> {
		self.ops.iter().map(f).collect()
	}

	/// Transforms the final result without adding operations.
	pub fn map<B: 'static>(self, f: impl FnOnce(A) -> B + 'static) -> FreeAp<F, B> {
		let combine = self.combine;
		FreeAp { ops: self.ops, combine: Box::new(move |vals| f(combine(vals))) }
	}

	/// Combines two independent programs with `f`. The resulting program's operations are
	/// `self`'s followed by `other`'s, in that order.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::free_ap::FreeAp;
	/// use fp_library::brands::OptionBrand;
	///
	/// let program = FreeAp::<OptionBrand, _>::lift_f(Some(3))
	///     .zip_with(FreeAp::lift_f(Some(4)), |a: i32, b: i32| a + b);
	/// assert_eq!(program.op_count(), 2);
	/// ```
	pub fn zip_with<B: 'static, C: 'static>(
		self,
		other: FreeAp<F, B>,
		f: impl FnOnce(A, B) -> C + 'static,
	) -> FreeAp<F, C> {
		let mut ops = self.ops;
		ops.extend(other.ops);
		let self_combine = self.combine;
		let other_combine = other.combine;
		FreeAp {
			ops,
			combine: Box::new(move |vals| {
				let a = self_combine(vals);
				let b = other_combine(vals);
				f(a, b)
			}),
		}
	}

	/// Combines three independent programs with `f`.
	pub fn zip_with3<B: 'static, C: 'static, D: 'static>(
		self,
		other1: FreeAp<F, B>,
		other2: FreeAp<F, C>,
		f: impl FnOnce(A, B, C) -> D + 'static,
	) -> FreeAp<F, D> {
		self.zip_with(other1, |a, b| (a, b)).zip_with(other2, move |(a, b), c| f(a, b, c))
	}

	/// Combines four independent programs with `f`.
	pub fn zip_with4<B: 'static, C: 'static, D: 'static, E: 'static>(
		self,
		other1: FreeAp<F, B>,
		other2: FreeAp<F, C>,
		other3: FreeAp<F, D>,
		f: impl FnOnce(A, B, C, D) -> E + 'static,
	) -> FreeAp<F, E> {
		self.zip_with(other1, |a, b| (a, b))
			.zip_with(other2, |(a, b), c| (a, b, c))
			.zip_with(other3, move |(a, b, c), d| f(a, b, c, d))
	}

	/// Applies a program of functions to this program of values.
	///
	/// The boxed function is the only way to express "a function, erased" without tying
	/// `FreeAp` to one of this crate's `CloneableFn` brands, since the function is consumed
	/// exactly once rather than shared.
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::types::free_ap::FreeAp;
	/// use fp_library::brands::OptionBrand;
	///
	/// let ff: FreeAp<OptionBrand, Box<dyn FnOnce(i32) -> i32>> =
	///     FreeAp::pure(Box::new(|x: i32| x + 1));
	/// let program = FreeAp::<OptionBrand, _>::lift_f(Some(41)).ap(ff);
	/// assert_eq!(program.op_count(), 1);
	/// ```
	pub fn ap<B: 'static>(self, ff: FreeAp<F, Box<dyn FnOnce(A) -> B>>) -> FreeAp<F, B> {
		ff.zip_with(self, |f, a| f(a))
	}
}
