//! Implementations for [`Endofunction`], a wrapper for endofunctions (functions from a set to the same set) that enables monoidal operations.

use core::fmt;
use std::{
	fmt::{Debug, Formatter},
	hash::Hash,
	marker::PhantomData,
};

use crate::{
	classes::{
		Category, CloneableFn, Monoid, Semigroup, cloneable_fn::ApplyCloneableFn, monoid::Monoid1L0T,
		semigroup::Semigroup1L0T,
	},
	functions::{compose, identity},
	hkt::Kind1L0T,
};

/// A wrapper for endofunctions (functions from a set to the same set) that enables monoidal operations.
///
/// `Endofunction a` represents a function `a -> a`.
///
/// It exists to provide a monoid instance where:
///
/// * The binary operation [append][Semigroup::append] is [function composition][crate::functions::compose].
/// * The identity element [empty][Monoid::empty] is the [identity function][crate::functions::identity].
///
/// The wrapped function can be accessed directly via the [`.0` field][Endofunction#structfield.0].
///
/// # Examples
///
/// ```
/// use fp_library::{
///     brands::{EndofunctionBrand, RcFnBrand},
///     functions::{append, empty},
///     classes::CloneableFn,
///     types::Endofunction,
/// };
/// use std::rc::Rc;
///
/// // Create Endofunctions
/// let f = Endofunction(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
/// let g = Endofunction(<RcFnBrand as CloneableFn>::new(|x: i32| x + 1));
///
/// // Compose functions (f after g)
/// let fg = append::<RcFnBrand, EndofunctionBrand<RcFnBrand, i32>>(f)(g);
/// assert_eq!(fg.0(3), 8); // double(increment(3)) = 8
///
/// // Identity element
/// let id = empty::<EndofunctionBrand<RcFnBrand, i32>>();
/// assert_eq!(id.0(42), 42);
/// ```
pub struct Endofunction<'a, CloneableFnBrand: CloneableFn, A: 'a>(
	pub ApplyCloneableFn<'a, CloneableFnBrand, A, A>,
);

impl<'a, CloneableFnBrand: CloneableFn, A> Endofunction<'a, CloneableFnBrand, A> {
	pub fn new(a: ApplyCloneableFn<'a, CloneableFnBrand, A, A>) -> Self {
		Self(a)
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> Clone for Endofunction<'a, CloneableFnBrand, A> {
	fn clone(&self) -> Self {
		Self::new(self.0.clone())
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> Debug for Endofunction<'a, CloneableFnBrand, A>
where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Debug,
{
	fn fmt(
		&self,
		fmt: &mut Formatter<'_>,
	) -> fmt::Result {
		fmt.debug_tuple("Endofunction").field(&self.0).finish()
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> Eq for Endofunction<'a, CloneableFnBrand, A> where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Eq
{
}

impl<'a, CloneableFnBrand: CloneableFn, A> Hash for Endofunction<'a, CloneableFnBrand, A>
where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Hash,
{
	fn hash<H: std::hash::Hasher>(
		&self,
		state: &mut H,
	) {
		self.0.hash(state);
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> Ord for Endofunction<'a, CloneableFnBrand, A>
where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Ord,
{
	fn cmp(
		&self,
		other: &Self,
	) -> std::cmp::Ordering {
		self.0.cmp(&other.0)
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> PartialEq for Endofunction<'a, CloneableFnBrand, A>
where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: PartialEq,
{
	fn eq(
		&self,
		other: &Self,
	) -> bool {
		self.0 == other.0
	}
}

impl<'a, CloneableFnBrand: CloneableFn, A> PartialOrd for Endofunction<'a, CloneableFnBrand, A>
where
	ApplyCloneableFn<'a, CloneableFnBrand, A, A>: PartialOrd,
{
	fn partial_cmp(
		&self,
		other: &Self,
	) -> Option<std::cmp::Ordering> {
		self.0.partial_cmp(&other.0)
	}
}

impl<'b, CFB: 'b + CloneableFn, A> Semigroup<'b> for Endofunction<'b, CFB, A> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{
	///     brands::{EndofunctionBrand, RcFnBrand},
	///     functions::append,
	///     classes::CloneableFn,
	///     types::Endofunction,
	/// };
	/// use std::rc::Rc;
	///
	/// let double = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
	/// let increment = <RcFnBrand as CloneableFn>::new(|x: i32| x + 1);
	///
	/// assert_eq!(
	///     (append::<RcFnBrand, EndofunctionBrand<RcFnBrand, i32>>(Endofunction(double))(Endofunction(increment.clone()))).0(3),
	///     8
	/// );
	/// assert_eq!(
	///     (append::<RcFnBrand, EndofunctionBrand<RcFnBrand, i32>>(Endofunction(increment.clone()))(Endofunction(increment))).0(3),
	///     5
	/// );
	/// ```
	fn append<'a, CloneableFnBrand: 'a + 'b + CloneableFn>(
		a: Self
	) -> ApplyCloneableFn<'a, CloneableFnBrand, Self, Self>
	where
		Self: Sized,
		'b: 'a,
	{
		<CloneableFnBrand as CloneableFn>::new(move |b: Self| {
			Self::new(compose::<'b, CFB, _, _, _>(a.0.clone())(b.0))
		})
	}
}

impl<'a, CloneableFnBrand: 'a + CloneableFn, A> Monoid<'a> for Endofunction<'a, CloneableFnBrand, A> {
	/// # Examples
	///
	/// ```
	/// use fp_library::{
	///     brands::{EndofunctionBrand, RcFnBrand},
	///     functions::empty,
	///     types::Endofunction,
	/// };
	///
	/// assert_eq!(empty::<EndofunctionBrand<RcFnBrand, i32>>().0(5), 5);
	/// assert_eq!(empty::<EndofunctionBrand<RcFnBrand, String>>().0("test".to_string()), "test");
	/// ```
	fn empty() -> Self {
		Self::new(<CloneableFnBrand as CloneableFn>::new(identity))
	}
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EndofunctionBrand<CategoryBrand: Category, A>(PhantomData<(CategoryBrand, A)>);

impl<CloneableFnBrand: CloneableFn, A: 'static> Kind1L0T for EndofunctionBrand<CloneableFnBrand, A> {
	type Output<'a> = Endofunction<'a, CloneableFnBrand, A>;
}

impl<CloneableFnBrand: 'static + CloneableFn, A: 'static> Semigroup1L0T
	for EndofunctionBrand<CloneableFnBrand, A>
where
	for<'a> ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Clone,
{
}

impl<CloneableFnBrand: 'static + CloneableFn, A: 'static> Monoid1L0T
	for EndofunctionBrand<CloneableFnBrand, A>
where
	for<'a> ApplyCloneableFn<'a, CloneableFnBrand, A, A>: Clone,
{
}
