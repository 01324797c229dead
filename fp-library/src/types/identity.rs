//! Implementations for [`Identity`], a type that wraps a value.

use crate::{
	Apply,
	brands::IdentityBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift, monoid::Monoid,
		pointed::Pointed, semiapplicative::Semiapplicative, semimonad::Semimonad,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
};

/// Wraps a value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Identity<A>(pub A);

impl_kind! {
	for IdentityBrand {
		type Of<'a, A: 'a>: 'a = Identity<A>;
	}
}

impl Functor for IdentityBrand {
	/// Maps a function over the value in the identity.
	///
	/// # Type Signature
	///
	/// `forall a b. Functor Identity => (a -> b, Identity a) -> Identity b`
	///
	/// # Parameters
	///
	/// * `f`: The function to apply.
	/// * `fa`: The identity to map over.
	///
	/// # Returns
	///
	/// A new identity containing the result of applying the function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::functor::map;
	/// use fp_library::brands::IdentityBrand;
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(map::<IdentityBrand, _, _, _>(|x: i32| x * 2, Identity(5)), Identity(10));
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		Identity(f(fa.0))
	}
}

impl Lift for IdentityBrand {
	/// Lifts a binary function into the identity context.
	///
	/// # Type Signature
	///
	/// `forall a b c. Lift Identity => ((a, b) -> c, Identity a, Identity b) -> Identity c`
	///
	/// # Parameters
	///
	/// * `f`: The binary function to apply.
	/// * `fa`: The first identity.
	/// * `fb`: The second identity.
	///
	/// # Returns
	///
	/// A new identity containing the result of applying the function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::lift::lift2;
	/// use fp_library::brands::IdentityBrand;
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(
	///     lift2::<IdentityBrand, _, _, _, _>(|x: i32, y: i32| x + y, Identity(1), Identity(2)),
	///     Identity(3)
	/// );
	/// ```
	fn lift2<'a, A, B, C, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		fb: Apply!(brand: Self, signature: ('a, B: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, C: 'a) -> 'a)
	where
		F: Fn(A, B) -> C + 'a,
		A: 'a,
		B: 'a,
		C: 'a,
	{
		Identity(f(fa.0, fb.0))
	}
}

impl Pointed for IdentityBrand {
	/// Wraps a value in an identity.
	///
	/// # Type Signature
	///
	/// `forall a. Pointed Identity => a -> Identity a`
	///
	/// # Parameters
	///
	/// * `a`: The value to wrap.
	///
	/// # Returns
	///
	/// An identity containing the value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::pointed::pure;
	/// use fp_library::brands::IdentityBrand;
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(pure::<IdentityBrand, _>(5), Identity(5));
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		Identity(a)
	}
}

impl ApplyFirst for IdentityBrand {}
impl ApplySecond for IdentityBrand {}

impl Semiapplicative for IdentityBrand {
	/// Applies a wrapped function to a wrapped value.
	///
	/// # Type Signature
	///
	/// `forall a b. Semiapplicative Identity => (Identity (a -> b), Identity a) -> Identity b`
	///
	/// # Parameters
	///
	/// * `ff`: The identity containing the function.
	/// * `fa`: The identity containing the value.
	///
	/// # Returns
	///
	/// A new identity containing the result of applying the function.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{IdentityBrand};
	/// use fp_library::types::Identity;
	/// use fp_library::brands::RcFnBrand;
	/// use std::rc::Rc;
	///
	/// let f = Identity(<RcFnBrand as CloneableFn>::new(|x: i32| x * 2));
	/// assert_eq!(apply::<IdentityBrand, _, _, RcFnBrand>(f, Identity(5)), Identity(10));
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		Identity(ff.0(fa.0))
	}
}

impl Semimonad for IdentityBrand {
	/// Chains identity computations.
	///
	/// # Type Signature
	///
	/// `forall a b. Semimonad Identity => (Identity a, a -> Identity b) -> Identity b`
	///
	/// # Parameters
	///
	/// * `ma`: The first identity.
	/// * `f`: The function to apply to the value inside the identity.
	///
	/// # Returns
	///
	/// The result of applying `f` to the value.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semimonad::bind;
	/// use fp_library::brands::IdentityBrand;
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(
	///     bind::<IdentityBrand, _, _, _>(Identity(5), |x| Identity(x * 2)),
	///     Identity(10)
	/// );
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		f(ma.0)
	}
}

impl Foldable for IdentityBrand {
	/// Maps the value to a monoid and returns it.
	///
	/// # Type Signature
	///
	/// `forall a m. (Foldable Identity, Monoid m) => ((a) -> m, Identity a) -> m`
	///
	/// # Parameters
	///
	/// * `f`: The mapping function.
	/// * `fa`: The identity to fold.
	///
	/// # Returns
	///
	/// `f(a)`.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{IdentityBrand, RcFnBrand};
	/// use fp_library::types::Identity;
	/// use fp_library::types::string; // Import to bring Monoid impl for String into scope
	///
	/// assert_eq!(fold_map::<RcFnBrand, IdentityBrand, _, _, _>(|x: i32| x.to_string(), Identity(5)), "5".to_string());
	/// ```
	fn fold_map<'a, FnBrand, A: 'a + Clone, M, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> M
	where
		M: Monoid + 'a,
		F: Fn(A) -> M + 'a,
		FnBrand: CloneableFn + 'a,
	{
		f(fa.0)
	}
}

impl Traversable for IdentityBrand {
	/// Traverses the identity with an applicative function.
	///
	/// # Type Signature
	///
	/// `forall a b f. (Traversable Identity, Applicative f) => (a -> f b, Identity a) -> f (Identity b)`
	///
	/// # Parameters
	///
	/// * `f`: The function to apply.
	/// * `ta`: The identity to traverse.
	///
	/// # Returns
	///
	/// The identity wrapped in the applicative context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{IdentityBrand, OptionBrand};
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(
	///     traverse::<IdentityBrand, OptionBrand, _, _, _>(|x| Some(x * 2), Identity(5)),
	///     Some(Identity(10))
	/// );
	/// ```
	fn traverse<'a, F: Applicative, A: 'a + Clone, B: 'a + Clone, Func>(
		f: Func,
		ta: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): 'a) -> 'a)
	where
		Func: Fn(A) -> Apply!(brand: F, signature: ('a, B: 'a) -> 'a) + 'a,
		Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): Clone,
	{
		F::map(|b| Identity(b), f(ta.0))
	}

	/// Sequences an identity of applicative.
	///
	/// # Type Signature
	///
	/// `forall a f. (Traversable Identity, Applicative f) => (Identity (f a)) -> f (Identity a)`
	///
	/// # Parameters
	///
	/// * `ta`: The identity containing the applicative value.
	///
	/// # Returns
	///
	/// The identity wrapped in the applicative context.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::sequence;
	/// use fp_library::brands::{IdentityBrand, OptionBrand};
	/// use fp_library::types::Identity;
	///
	/// assert_eq!(
	///     sequence::<IdentityBrand, OptionBrand, _>(Identity(Some(5))),
	///     Some(Identity(5))
	/// );
	/// ```
	fn sequence<'a, F: Applicative, A: 'a + Clone>(
		ta: Apply!(brand: Self, signature: ('a, Apply!(brand: F, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): 'a) -> 'a)
	where
		Apply!(brand: F, signature: ('a, A: 'a) -> 'a): Clone,
		Apply!(brand: Self, signature: ('a, A: 'a) -> 'a): Clone,
	{
		F::map(|a| Identity(a), ta.0)
	}
}
