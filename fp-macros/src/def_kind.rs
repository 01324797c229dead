//! Implementation of the `def_kind!` macro.
//!
//! This module handles the expansion of the `def_kind!` macro, which defines a new `Kind`
//! trait from a signature of associated type definitions.

use crate::{generate::generate_name, parse::KindInput};
use proc_macro2::TokenStream;
use quote::quote;

/// Generates the trait definition for the `def_kind!` macro.
pub fn def_kind_impl(input: KindInput) -> TokenStream {
	let name = generate_name(&input);

	let assoc_types = input.assoc_types.iter().map(|assoc| {
		let ident = &assoc.ident;
		let generics = &assoc.generics;
		let output_bounds = &assoc.output_bounds;

		if output_bounds.is_empty() {
			quote! { type #ident #generics; }
		} else {
			quote! { type #ident #generics: #output_bounds; }
		}
	});

	let doc_comment = "A Higher-Kinded Type signature. Generated by `def_kind!`.";

	quote! {
		#[doc = #doc_comment]
		#[allow(non_camel_case_types)]
		pub trait #name {
			#(#assoc_types)*
		}
	}
}
