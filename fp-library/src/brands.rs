//! Higher-kinded representation of [types][crate::types].

pub use crate::types::{
	arc_fn::ArcFnBrand,
	choice::ChoiceBrand,
	identity::IdentityBrand,
	lazy::LazyBrand,
	option::OptionBrand,
	optional::OptionalBrand,
	pair::{PairBrand, PairWithFirstBrand, PairWithSecondBrand},
	rc::{ArcBrand, RcBrand},
	rc_fn::RcFnBrand,
	result::{ResultBrand, ResultWithErrBrand, ResultWithOkBrand},
	solo::SoloBrand,
	thunk::ThunkBrand,
	validated::ValidatedBrand,
	vec::VecBrand,
};
