//! Name generation for Kind traits.
//!
//! This module handles the generation of unique, deterministic identifiers
//! for Kind traits based on their signature. It uses `rapidhash` to create
//! a collision-resistant hash of the canonical signature.

use crate::{
	canonicalize::Canonicalizer,
	parse::{KindAssocTypeInput, KindInput, TypeInput},
};
use quote::format_ident;
use syn::{GenericParam, Ident, Lifetime, Token, punctuated::Punctuated};

// Deterministic hashing setup
// Using a fixed seed for reproducibility across builds
const RAPID_SECRETS: rapidhash::v3::RapidSecrets =
	rapidhash::v3::RapidSecrets::seed(0x1234567890abcdef);

fn rapidhash(data: &[u8]) -> u64 {
	rapidhash::v3::rapidhash_v3_seeded(data, &RAPID_SECRETS)
}

/// Splits the generics of a single associated type definition into the lifetimes and
/// (possibly bounded) types it introduces.
fn split_generics(
	assoc: &KindAssocTypeInput
) -> (Punctuated<Lifetime, Token![,]>, Punctuated<TypeInput, Token![,]>) {
	let mut lifetimes = Punctuated::new();
	let mut types = Punctuated::new();
	for param in &assoc.generics.params {
		match param {
			GenericParam::Lifetime(lifetime_param) => lifetimes.push(lifetime_param.lifetime.clone()),
			GenericParam::Type(type_param) => types.push(TypeInput {
				ident: type_param.ident.clone(),
				bounds: type_param.bounds.clone(),
			}),
			GenericParam::Const(_) => panic!("Const generics are not supported in Kind signatures"),
		}
	}
	(lifetimes, types)
}

/// Builds the canonical string representation of a single associated type definition.
fn canonicalize_assoc_type(assoc: &KindAssocTypeInput) -> String {
	let (lifetimes, types) = split_generics(assoc);
	let canon = Canonicalizer::new(&lifetimes, &types);

	let mut canonical_parts = vec![format!("L{}", lifetimes.len()), format!("T{}", types.len())];

	// Type bounds
	for (i, ty) in types.iter().enumerate() {
		if !ty.bounds.is_empty() {
			let bounds_str = canon.canonicalize_bounds(&ty.bounds);
			canonical_parts.push(format!("B{}{}", i, bounds_str));
		}
	}

	// Output bounds
	if !assoc.output_bounds.is_empty() {
		let bounds_str = canon.canonicalize_bounds(&assoc.output_bounds);
		canonical_parts.push(format!("O{}", bounds_str));
	}

	canonical_parts.join("_")
}

/// Generates a unique, deterministic identifier for a Kind trait based on its input signature.
///
/// The name format is `Kind_{hash}`, where `{hash}` is a 16-character hexadecimal string
/// representing the 64-bit hash of the canonical signature. A signature with several
/// associated types (e.g. `Of` and `SendOf`) hashes the concatenation of each type's own
/// canonical representation, so the name still only depends on the shape of the signature,
/// never on parameter or associated type names.
pub fn generate_name(input: &KindInput) -> Ident {
	let canonical_repr =
		input.assoc_types.iter().map(canonicalize_assoc_type).collect::<Vec<_>>().join("|");

	// Always use hash for consistency and to avoid length issues
	let hash = rapidhash(canonical_repr.as_bytes());
	format_ident!("Kind_{:016x}", hash)
}
