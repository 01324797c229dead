//! Input parsing for Kind macros.
//!
//! This module defines the input structures and parsing logic for the `Kind!`, `def_kind!`
//! and `impl_kind!` macros. It handles parsing of associated type signatures: lifetimes,
//! type parameters (with bounds), and output bounds.
//!
//! Two surface syntaxes are accepted for a [`KindInput`]:
//!
//! * The tuple form, `(lifetimes), (types), (output_bounds)`, e.g. `('a), (A: 'a), ('a)`.
//!   This is a shorthand for a signature with a single associated type named `Of`.
//! * The trait-like form, one or more `type Name<Params>: Bounds;` items. This is the form
//!   documented for `Kind!`/`def_kind!`/`impl_kind!` and is required for signatures with more
//!   than one associated type (e.g. `Of` and `SendOf`).
//!
//! Both forms are normalised into the same [`KindAssocTypeInput`] representation so that name
//! generation only has to deal with one shape.

use syn::{
	Generics, Ident, Lifetime, Result, Token, TypeParamBound,
	parse::{Parse, ParseStream},
	punctuated::Punctuated,
};

/// Represents the parsed input for a Kind signature: one or more associated type definitions.
pub struct KindInput {
	/// The associated type definitions making up this signature.
	pub assoc_types: Vec<KindAssocTypeInput>,
}

/// Represents a single type parameter in the tuple form of a Kind signature.
pub struct TypeInput {
	/// The identifier of the type parameter.
	pub ident: Ident,
	/// Bounds on the type parameter.
	pub bounds: Punctuated<TypeParamBound, Token![+]>,
}

/// A single associated type definition in a Kind signature.
///
/// Example: `type Of<'a, A: 'a>: 'a;`
pub struct KindAssocTypeInput {
	/// The `type` keyword.
	pub _type_token: Token![type],
	/// The name of the associated type.
	pub ident: Ident,
	/// Generics for the associated type (e.g., `<'a, A: 'a>`).
	pub generics: Generics,
	/// Optional colon preceding output bounds.
	pub _colon_token: Option<Token![:]>,
	/// Bounds on the associated type itself (e.g., `'a` in `type Of<'a, A>: 'a;`).
	pub output_bounds: Punctuated<TypeParamBound, Token![+]>,
	/// The trailing semicolon.
	pub _semi_token: Token![;],
}

impl Parse for KindInput {
	fn parse(input: ParseStream) -> Result<Self> {
		if input.peek(Token![type]) {
			let mut assoc_types = Vec::new();
			while !input.is_empty() {
				assoc_types.push(input.parse()?);
			}
			Ok(KindInput { assoc_types })
		} else {
			Ok(KindInput { assoc_types: vec![parse_tuple_form(input)?] })
		}
	}
}

/// Parses the legacy tuple form `(lifetimes), (types), (output_bounds)` into a single
/// associated type named `Of`.
fn parse_tuple_form(input: ParseStream) -> Result<KindAssocTypeInput> {
	let content;
	let _ = syn::parenthesized!(content in input);
	let lifetimes = content.parse_terminated(Lifetime::parse, Token![,])?;

	input.parse::<Token![,]>()?;

	let content;
	let _ = syn::parenthesized!(content in input);
	let types = content.parse_terminated(TypeInput::parse, Token![,])?;

	input.parse::<Token![,]>()?;

	let content;
	let _ = syn::parenthesized!(content in input);
	let output_bounds = content.parse_terminated(TypeParamBound::parse, Token![+])?;

	let mut params = Punctuated::new();
	for lifetime in lifetimes {
		params.push(syn::GenericParam::Lifetime(syn::LifetimeParam {
			attrs: Vec::new(),
			lifetime,
			colon_token: None,
			bounds: Punctuated::new(),
		}));
	}
	for ty in types {
		params.push(syn::GenericParam::Type(syn::TypeParam {
			attrs: Vec::new(),
			ident: ty.ident,
			colon_token: if ty.bounds.is_empty() { None } else { Some(Token![:](input.span())) },
			bounds: ty.bounds,
			eq_token: None,
			default: None,
		}));
	}

	let generics = Generics {
		lt_token: Some(Token![<](input.span())),
		params,
		gt_token: Some(Token![>](input.span())),
		where_clause: None,
	};

	Ok(KindAssocTypeInput {
		_type_token: Token![type](input.span()),
		ident: Ident::new("Of", input.span()),
		generics,
		_colon_token: if output_bounds.is_empty() { None } else { Some(Token![:](input.span())) },
		output_bounds,
		_semi_token: Token![;](input.span()),
	})
}

impl Parse for KindAssocTypeInput {
	fn parse(input: ParseStream) -> Result<Self> {
		let type_token: Token![type] = input.parse()?;
		let ident: Ident = input.parse()?;
		let generics: Generics = input.parse()?;

		let mut colon_token: Option<Token![:]> = None;
		let mut output_bounds = Punctuated::new();

		if input.peek(Token![:]) {
			colon_token = Some(input.parse()?);
			loop {
				if input.peek(Token![;]) {
					break;
				}
				output_bounds.push_value(input.parse()?);
				if input.peek(Token![+]) {
					output_bounds.push_punct(input.parse()?);
				} else {
					break;
				}
			}
		}

		let semi_token: Token![;] = input.parse()?;

		Ok(KindAssocTypeInput {
			_type_token: type_token,
			ident,
			generics,
			_colon_token: colon_token,
			output_bounds,
			_semi_token: semi_token,
		})
	}
}

impl Parse for TypeInput {
	fn parse(input: ParseStream) -> Result<Self> {
		let ident: Ident = input.parse()?;
		let bounds = if input.peek(Token![:]) {
			input.parse::<Token![:]>()?;
			// Manual parsing loop to ensure we stop at comma or closing parenthesis
			let mut bounds = Punctuated::new();
			loop {
				if input.peek(Token![,]) || input.is_empty() {
					break;
				}
				bounds.push_value(input.parse()?);
				if input.peek(Token![+]) {
					bounds.push_punct(input.parse()?);
				} else {
					break;
				}
			}
			bounds
		} else {
			Punctuated::new()
		};
		Ok(TypeInput { ident, bounds })
	}
}
