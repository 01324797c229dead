//! Implementations for [`Vec`].

pub mod concrete_vec;

use crate::{
	Apply,
	brands::VecBrand,
	classes::{
		applicative::Applicative, apply_first::ApplyFirst, apply_second::ApplySecond,
		cloneable_fn::CloneableFn, foldable::Foldable, functor::Functor, lift::Lift, monoid::Monoid,
		pointed::Pointed, semiapplicative::Semiapplicative, semimonad::Semimonad,
		traversable::Traversable,
	},
	impl_kind,
	kinds::*,
};
#[cfg(feature = "rayon")]
use crate::classes::{par_foldable::ParFoldable, send_cloneable_fn::SendCloneableFn};
pub use concrete_vec::*;

impl_kind! {
	for VecBrand {
		type Of<'a, A: 'a>: 'a = Vec<A>;
	}
}

impl Functor for VecBrand {
	/// Maps a function over every element of the vector.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::functor::map;
	/// use fp_library::brands::VecBrand;
	///
	/// assert_eq!(map::<VecBrand, _, _, _>(|x: i32| x * 2, vec![1, 2, 3]), vec![2, 4, 6]);
	/// assert_eq!(map::<VecBrand, _, _, _>(|x: i32| x * 2, Vec::<i32>::new()), Vec::<i32>::new());
	/// ```
	fn map<'a, A: 'a, B: 'a, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> B + 'a,
	{
		fa.into_iter().map(f).collect()
	}
}

impl Lift for VecBrand {
	/// Lifts a binary function into the vector context, combining every pair of elements.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::lift::lift2;
	/// use fp_library::brands::VecBrand;
	///
	/// assert_eq!(lift2::<VecBrand, _, _, _, _>(|x: i32, y: i32| x + y, vec![1, 2], vec![10, 20]), vec![11, 21, 12, 22]);
	/// ```
	fn lift2<'a, A, B, C, F>(
		f: F,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		fb: Apply!(brand: Self, signature: ('a, B: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, C: 'a) -> 'a)
	where
		F: Fn(A, B) -> C + 'a,
		A: Clone + 'a,
		B: Clone + 'a,
		C: 'a,
	{
		fa.into_iter()
			.flat_map(|a| fb.iter().cloned().map(move |b| f(a.clone(), b)).collect::<Vec<_>>())
			.collect()
	}
}

impl Pointed for VecBrand {
	/// Wraps a value in a single-element vector.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::pointed::pure;
	/// use fp_library::brands::VecBrand;
	///
	/// assert_eq!(pure::<VecBrand, _>(5), vec![5]);
	/// ```
	fn pure<'a, A: 'a>(a: A) -> Apply!(brand: Self, signature: ('a, A: 'a) -> 'a) {
		vec![a]
	}
}

impl ApplyFirst for VecBrand {}
impl ApplySecond for VecBrand {}

impl Semiapplicative for VecBrand {
	/// Applies every wrapped function to every wrapped value, in cartesian-product order.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::semiapplicative::apply;
	/// use fp_library::classes::cloneable_fn::CloneableFn;
	/// use fp_library::brands::{VecBrand, RcFnBrand};
	///
	/// let fs = vec![
	///     <RcFnBrand as CloneableFn>::new(|x: i32| x + 1),
	///     <RcFnBrand as CloneableFn>::new(|x: i32| x * 2),
	/// ];
	/// assert_eq!(apply::<VecBrand, _, _, RcFnBrand>(fs, vec![1, 2]), vec![2, 3, 2, 4]);
	/// ```
	fn apply<'a, A: 'a + Clone, B: 'a, FnBrand: 'a + CloneableFn>(
		ff: Apply!(brand: Self, signature: ('a, Apply!(brand: FnBrand, kind: CloneableFn, lifetimes: ('a), types: (A, B)): 'a) -> 'a),
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) {
		ff.into_iter().flat_map(|f| fa.iter().cloned().map(f).collect::<Vec<_>>()).collect()
	}
}

impl Semimonad for VecBrand {
	/// Chains vector computations, concatenating the results in order.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::{brands::VecBrand, classes::semimonad::bind};
	///
	/// assert_eq!(bind::<VecBrand, _, _, _>(vec![1, 2], |x| vec![x, x * 10]), vec![1, 10, 2, 20]);
	/// ```
	fn bind<'a, A: 'a, B: 'a, F>(
		ma: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
		f: F,
	) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a)
	where
		F: Fn(A) -> Apply!(brand: Self, signature: ('a, B: 'a) -> 'a) + 'a,
	{
		ma.into_iter().flat_map(f).collect()
	}
}

impl Foldable for VecBrand {
	/// Maps every element to a monoid and combines the results.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::foldable::fold_map;
	/// use fp_library::brands::{VecBrand, RcFnBrand};
	/// use fp_library::types::string;
	///
	/// assert_eq!(fold_map::<RcFnBrand, VecBrand, _, _, _>(|x: i32| x.to_string(), vec![1, 2, 3]), "123".to_string());
	/// assert_eq!(fold_map::<RcFnBrand, VecBrand, _, String, _>(|x: i32| x.to_string(), vec![]), "".to_string());
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
		fa.into_iter().map(f).fold(M::empty(), M::append)
	}
}

impl Traversable for VecBrand {
	/// Traverses the vector with an applicative function, collecting the results in order.
	///
	/// # Examples
	///
	/// ```
	/// use fp_library::classes::traversable::traverse;
	/// use fp_library::brands::{OptionBrand, VecBrand};
	///
	/// assert_eq!(traverse::<VecBrand, OptionBrand, _, _, _>(|x: i32| Some(x * 2), vec![1, 2, 3]), Some(vec![2, 4, 6]));
	/// assert_eq!(traverse::<VecBrand, OptionBrand, _, _, _>(|x: i32| if x > 1 { Some(x) } else { None }, vec![1, 2]), None);
	/// ```
	fn traverse<'a, F: Applicative, A: 'a + Clone, B: 'a + Clone, Func>(
		f: Func,
		ta: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> Apply!(brand: F, signature: ('a, Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): 'a) -> 'a)
	where
		Func: Fn(A) -> Apply!(brand: F, signature: ('a, B: 'a) -> 'a) + 'a,
		Apply!(brand: Self, signature: ('a, B: 'a) -> 'a): Clone,
	{
		ta.into_iter().rfold(F::pure(Vec::new()), |acc, a| {
			F::lift2(
				|b: B, mut bs: Vec<B>| {
					bs.insert(0, b);
					bs
				},
				f(a),
				acc,
			)
		})
	}
}

#[cfg(feature = "rayon")]
impl ParFoldable for VecBrand {
	/// Maps every element to a monoid and combines the results, in parallel.
	///
	/// # Examples
	///
	/// ```
	/// # #[cfg(feature = "rayon")] {
	/// use fp_library::classes::par_foldable::par_fold_map;
	/// use fp_library::brands::{VecBrand, ArcFnBrand};
	/// use fp_library::functions::send_cloneable_fn_new;
	///
	/// let f = send_cloneable_fn_new::<ArcFnBrand, _, _>(|x: i32| x.to_string());
	/// let result: String = par_fold_map::<ArcFnBrand, VecBrand, _, _>(f, vec![1, 2, 3, 4, 5]);
	/// assert_eq!(result, "12345".to_string());
	/// # }
	/// ```
	fn par_fold_map<'a, FnBrand, A, M>(
		func: <FnBrand as SendCloneableFn>::SendOf<'a, A, M>,
		fa: Apply!(brand: Self, signature: ('a, A: 'a) -> 'a),
	) -> M
	where
		FnBrand: 'a + SendCloneableFn,
		A: 'a + Clone + Send + Sync,
		M: Monoid + Send + Sync + 'a,
	{
		use rayon::iter::{IntoParallelIterator, ParallelIterator};
		fa.into_par_iter().map(|a| func(a)).reduce(M::empty, M::append)
	}
}
