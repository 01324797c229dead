//! Implementations for [reference-counted][std::rc::Rc] [closures][Fn]
//! (`Rc<dyn Fn(A) -> B>`).

use crate::{
	Apply,
	brands::RcFnBrand,
	classes::{
		category::Category, cloneable_fn::CloneableFn, function::Function, semigroupoid::Semigroupoid,
	},
	impl_kind,
	kinds::*,
};
use std::rc::Rc;

impl_kind! {
	for RcFnBrand {
		type Of<'a, A, B> = Rc<dyn 'a + Fn(A) -> B>;
	}
}

impl Function for RcFnBrand {
	type Of<'a, A, B> = Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (A, B));

	/// Creates a new `Rc`-wrapped function.
	///
	/// # Type Signature
	///
	/// `forall a b. Function RcFnBrand => (a -> b) -> RcFnBrand a b`
	///
	/// # Parameters
	///
	/// * `f`: The function to wrap.
	///
	/// # Returns
	///
	/// An `Rc`-wrapped function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::brands::RcFnBrand;
	/// use fp_library::classes::function::Function;
	///
	/// let f = <RcFnBrand as Function>::new(|x: i32| x * 2);
	/// assert_eq!(f(5), 10);
	/// ```
	fn new<'a, A, B>(f: impl 'a + Fn(A) -> B) -> Apply!(Self, Function, ('a), (A, B)) {
		Rc::new(f)
	}
}

impl CloneableFn for RcFnBrand {
	type Of<'a, A, B> = Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (A, B));

	/// Creates a new `Rc`-wrapped clonable function.
	///
	/// # Type Signature
	///
	/// `forall a b. CloneableFn RcFnBrand => (a -> b) -> RcFnBrand a b`
	///
	/// # Parameters
	///
	/// * `f`: The function to wrap.
	///
	/// # Returns
	///
	/// An `Rc`-wrapped clonable function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::brands::RcFnBrand;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	///
	/// let f = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
	/// assert_eq!(f(5), 10);
	/// ```
	fn new<'a, A, B>(f: impl 'a + Fn(A) -> B) -> Apply!(Self, CloneableFn, ('a), (A, B)) {
		Rc::new(f)
	}
}

impl Semigroupoid for RcFnBrand {
	/// Composes two `Rc`-wrapped functions.
	///
	/// # Type Signature
	///
	/// `forall b c d. Semigroupoid RcFnBrand => (RcFnBrand c d, RcFnBrand b c) -> RcFnBrand b d`
	///
	/// # Parameters
	///
	/// * `f`: The second function to apply.
	/// * `g`: The first function to apply.
	///
	/// # Returns
	///
	/// The composed function `f . g`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::brands::RcFnBrand;
	/// use fp_library::classes::semigroupoid::Semigroupoid;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	///
	/// let f = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
	/// let g = <RcFnBrand as CloneableFn>::new(|x: i32| x + 1);
	/// let h = RcFnBrand::compose(f, g);
	/// assert_eq!(h(5), 12); // (5 + 1) * 2
	/// ```
	fn compose<'a, B: 'a, C: 'a, D: 'a>(
		f: Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (C, D)),
		g: Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (B, C)),
	) -> Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (B, D)) {
		<Self as CloneableFn>::new(move |b| f(g(b)))
	}
}

impl Category for RcFnBrand {
	/// Returns the identity function wrapped in an `Rc`.
	///
	/// # Type Signature
	///
	/// `forall a. Category RcFnBrand => () -> RcFnBrand a a`
	///
	/// # Returns
	///
	/// The identity function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::brands::RcFnBrand;
	/// use fp_library::classes::category::Category;
	///
	/// let id = RcFnBrand::identity::<i32>();
	/// assert_eq!(id(5), 5);
	/// ```
	fn identity<'a, A>() -> Apply!(Self, Kind_fcf9d56b89a0b8b9, ('a), (A, A)) {
		Rc::new(|a| a)
	}
}
