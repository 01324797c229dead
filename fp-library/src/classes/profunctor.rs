//! Mapping over both the input and the output of a wrapped function.
//!
//! ### Examples
//!
//! ```
//! use fp_library::{brands::RcFnBrand, classes::{cloneable_fn::CloneableFn, profunctor::dimap}};
//!
//! let p = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
//! let q = dimap::<RcFnBrand, _, _, _, _, _, _>(|s: String| s.len() as i32, |x: i32| x.to_string(), p);
//! assert_eq!(q("abc".to_string()), "6".to_string());
//! ```

use crate::classes::cloneable_fn::CloneableFn;

/// A type class for wrapped functions that can be mapped over on both the input and output side.
///
/// ### Laws
///
/// `Profunctor` instances must satisfy:
/// * Identity: `dimap(identity, identity, p) = p`.
/// * Composition: `dimap(compose(f1, f2), compose(g1, g2), p) = dimap(f2, g1, dimap(f1, g2, p))`.
pub trait Profunctor: CloneableFn {
	/// Maps `f` over the input and `g` over the output of a wrapped function.
	fn dimap<'a, A: 'a, B: 'a, C: 'a, D: 'a, F, G>(
		f: F,
		g: G,
		p: <Self as CloneableFn>::Of<'a, B, C>,
	) -> <Self as CloneableFn>::Of<'a, A, D>
	where
		F: 'a + Fn(A) -> B,
		G: 'a + Fn(C) -> D;
}

impl<Brand: CloneableFn> Profunctor for Brand {
	/// Maps `f` over the input and `g` over the output, grounded on `CloneableFn::new` wrapping a
	/// closure that runs `f`, then the existing function, then `g`.
	fn dimap<'a, A: 'a, B: 'a, C: 'a, D: 'a, F, G>(
		f: F,
		g: G,
		p: <Self as CloneableFn>::Of<'a, B, C>,
	) -> <Self as CloneableFn>::Of<'a, A, D>
	where
		F: 'a + Fn(A) -> B,
		G: 'a + Fn(C) -> D,
	{
		<Self as CloneableFn>::new(move |a: A| g(p(f(a))))
	}
}

/// Maps `f` over the input and `g` over the output of a wrapped function.
///
/// Free function version that dispatches to [the type class' associated function][`Profunctor::dimap`].
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::RcFnBrand, classes::{cloneable_fn::CloneableFn, profunctor::dimap}};
///
/// let p = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
/// let q = dimap::<RcFnBrand, _, _, _, _, _, _>(|s: String| s.len() as i32, |x: i32| x.to_string(), p);
/// assert_eq!(q("abc".to_string()), "6".to_string());
/// ```
pub fn dimap<'a, Brand: Profunctor, A: 'a, B: 'a, C: 'a, D: 'a, F, G>(
	f: F,
	g: G,
	p: <Brand as CloneableFn>::Of<'a, B, C>,
) -> <Brand as CloneableFn>::Of<'a, A, D>
where
	F: 'a + Fn(A) -> B,
	G: 'a + Fn(C) -> D,
{
	Brand::dimap(f, g, p)
}

/// Maps `f` over the input of a wrapped function, leaving its output untouched.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::RcFnBrand, classes::{cloneable_fn::CloneableFn, profunctor::lmap}};
///
/// let p = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
/// let q = lmap::<RcFnBrand, _, _, _>(|s: String| s.len() as i32, p);
/// assert_eq!(q("abc".to_string()), 6);
/// ```
pub fn lmap<'a, Brand: Profunctor, A: 'a, B: 'a, C: 'a>(
	f: impl 'a + Fn(A) -> B,
	p: <Brand as CloneableFn>::Of<'a, B, C>,
) -> <Brand as CloneableFn>::Of<'a, A, C> {
	Brand::dimap(f, crate::functions::identity, p)
}

/// Maps `g` over the output of a wrapped function, leaving its input untouched.
///
/// ### Examples
///
/// ```
/// use fp_library::{brands::RcFnBrand, classes::{cloneable_fn::CloneableFn, profunctor::rmap}};
///
/// let p = <RcFnBrand as CloneableFn>::new(|x: i32| x * 2);
/// let q = rmap::<RcFnBrand, _, _, _>(|x: i32| x.to_string(), p);
/// assert_eq!(q(3), "6".to_string());
/// ```
pub fn rmap<'a, Brand: Profunctor, A: 'a, C: 'a, D: 'a>(
	g: impl 'a + Fn(C) -> D,
	p: <Brand as CloneableFn>::Of<'a, A, C>,
) -> <Brand as CloneableFn>::Of<'a, A, D> {
	Brand::dimap(crate::functions::identity, g, p)
}
