use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, GenericParam, ItemFn, LitStr, Token, spanned::Spanned};

use crate::doc_utils::insert_doc_comment;

struct Args {
	descriptions: Punctuated<LitStr, Token![,]>,
}

impl Parse for Args {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		Ok(Args { descriptions: Punctuated::parse_terminated(input)? })
	}
}

pub fn doc_type_params_impl(
	attr: TokenStream,
	item: TokenStream,
) -> TokenStream {
	let mut input_fn = match syn::parse2::<ItemFn>(item) {
		Ok(f) => f,
		Err(e) => return e.to_compile_error(),
	};

	let args = match syn::parse2::<Args>(attr.clone()) {
		Ok(a) => a,
		Err(e) => return e.to_compile_error(),
	};

	let params = &input_fn.sig.generics.params;
	let descriptions: Vec<_> = args.descriptions.into_iter().collect();

	if params.len() != descriptions.len() {
		return Error::new(
			attr.span(),
			format!(
				"Expected {} description arguments, found {}.",
				params.len(),
				descriptions.len()
			),
		)
		.to_compile_error();
	}

	for (param, desc) in params.iter().zip(descriptions) {
		let name = match param {
			GenericParam::Type(t) => t.ident.to_string(),
			GenericParam::Lifetime(l) => l.lifetime.to_string(),
			GenericParam::Const(c) => c.ident.to_string(),
		};

		let doc_comment = format!("* `{}`: {}", name, desc.value());
		insert_doc_comment(&mut input_fn.attrs, doc_comment, proc_macro2::Span::call_site());
	}

	quote! {
		#input_fn
	}
}
