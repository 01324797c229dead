use crate::function_utils::{LogicalParam, get_logical_params, load_config};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::Error;

pub fn doc_params_impl(
	attr: TokenStream,
	item_tokens: TokenStream,
) -> TokenStream {
	crate::doc_utils::generate_doc_comments(attr, item_tokens, |generic_item| {
		let config = load_config();

		let sig = match generic_item.sig() {
			Some(s) => s,
			None => {
				return Err(Error::new(
					proc_macro2::Span::call_site(),
					"doc_params can only be used on functions",
				));
			}
		};

		let logical_params = get_logical_params(sig, &config);

		Ok(logical_params
			.into_iter()
			.map(|param| match param {
				LogicalParam::Explicit(pat) => {
					let s = pat.to_token_stream().to_string();
					s.replace(" , ", ", ")
				}
				LogicalParam::Implicit(_) => "_".to_string(),
			})
			.collect())
	})
}
