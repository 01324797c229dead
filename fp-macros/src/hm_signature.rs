use crate::{
	doc_utils::{GenericItem, insert_doc_comment},
	function_utils::{
		Config, TraitCategory, analyze_generics, classify_trait, format_brand_name,
		is_phantom_data, load_config, type_to_hm,
	},
	hm_ast::HMType,
};
use std::collections::{HashMap, HashSet};
use syn::{GenericParam, ReturnType, TypeParamBound, WherePredicate};

pub fn hm_signature_impl(
	attr: proc_macro2::TokenStream,
	item_tokens: proc_macro2::TokenStream,
) -> proc_macro2::TokenStream {
	// If we are inside document_module, this attribute might be processed twice.
	// But hm_signature_impl is a standalone macro.
	let mut item = match GenericItem::parse(item_tokens) {
		Ok(i) => i,
		Err(e) => return e.to_compile_error(),
	};

	let sig = match item.sig() {
		Some(s) => s,
		None => {
			return syn::Error::new(
				proc_macro2::Span::call_site(),
				"hm_signature can only be used on functions or methods",
			)
			.to_compile_error();
		}
	};

	if !attr.is_empty() {
		return syn::Error::new(
			proc_macro2::Span::call_site(),
			"hm_signature does not accept arguments",
		)
		.to_compile_error();
	}

	let config = load_config();
	let signature = generate_signature(sig, None, &config);
	let doc_comment = format!("`{}`", signature);

	insert_doc_comment(item.attrs(), doc_comment, proc_macro2::Span::call_site());

	quote::quote! {
		#item
	}
}

pub struct SignatureData {
	pub forall: Vec<String>,
	pub constraints: Vec<String>,
	pub params: Vec<HMType>,
	pub return_type: HMType,
}

impl std::fmt::Display for SignatureData {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		let mut parts = Vec::new();

		if !self.forall.is_empty() {
			parts.push(format!("forall {}.", self.forall.join(" ")));
		}

		if !self.constraints.is_empty() {
			let s = if self.constraints.len() == 1 {
				self.constraints[0].clone()
			} else {
				format!("({})", self.constraints.join(", "))
			};
			parts.push(format!("{} =>", s));
		}

		let func_sig = if self.params.is_empty() {
			let func_type =
				HMType::Arrow(Box::new(HMType::Unit), Box::new(self.return_type.clone()));
			format!("{}", func_type)
		} else {
			let input_type = if self.params.len() == 1 {
				self.params[0].clone()
			} else {
				HMType::Tuple(self.params.clone())
			};
			let func_type = HMType::Arrow(Box::new(input_type), Box::new(self.return_type.clone()));
			format!("{}", func_type)
		};
		parts.push(func_sig);

		write!(f, "{}", parts.join(" "))
	}
}

pub fn generate_signature(
	sig: &syn::Signature,
	trait_context: Option<&str>,
	config: &Config,
) -> SignatureData {
	let (generic_names, fn_bounds) = analyze_generics(sig, config);

	// Erase unsafe modifier
	let mut sig = sig.clone();
	sig.unsafety = None;

	let (mut forall, mut constraints) =
		format_generics(&sig.generics, &fn_bounds, &generic_names, config);
	let params = format_parameters(&sig, &fn_bounds, &generic_names, config);
	let ret = format_return_type(&sig.output, &fn_bounds, &generic_names, config);

	let uses_self = params.iter().any(hm_type_uses_self) || hm_type_uses_self(&ret);

	if uses_self {
		forall.insert(0, "self".to_string());

		if let Some(trait_name) = trait_context {
			constraints.insert(0, format!("{} self", trait_name));
		}
	}

	SignatureData { forall, constraints, params, return_type: ret }
}

fn hm_type_uses_self(ty: &HMType) -> bool {
	match ty {
		HMType::Variable(name) => name == "self",
		HMType::Constructor(name, args) => name == "self" || args.iter().any(hm_type_uses_self),
		HMType::Arrow(a, b) => hm_type_uses_self(a) || hm_type_uses_self(b),
		HMType::Tuple(args) => args.iter().any(hm_type_uses_self),
		HMType::List(inner) => hm_type_uses_self(inner),
		HMType::Reference(inner) => hm_type_uses_self(inner),
		HMType::MutableReference(inner) => hm_type_uses_self(inner),
		HMType::TraitObject(inner) => hm_type_uses_self(inner),
		HMType::Unit => false,
	}
}

fn format_generics(
	generics: &syn::Generics,
	fn_bounds: &HashMap<String, HMType>,
	generic_names: &HashSet<String>,
	config: &Config,
) -> (Vec<String>, Vec<String>) {
	let mut type_vars = Vec::new();
	let mut constraints = Vec::new();

	for param in &generics.params {
		if let GenericParam::Type(type_param) = param {
			let name = type_param.ident.to_string();

			// Only include in forall if it's not a function type variable that we are expanding
			if !fn_bounds.contains_key(&name) {
				type_vars.push(name.to_lowercase());
			}

			for bound in &type_param.bounds {
				if let TypeParamBound::Trait(trait_bound) = bound
					&& let Some(constraint) = format_trait_bound(
						trait_bound,
						&HMType::Variable(name.to_lowercase()),
						config,
					) {
					constraints.push(constraint);
				}
			}
		}
	}

	if let Some(where_clause) = &generics.where_clause {
		for predicate in &where_clause.predicates {
			if let WherePredicate::Type(predicate_type) = predicate {
				let type_ty =
					type_to_hm(&predicate_type.bounded_ty, fn_bounds, generic_names, config);
				for bound in &predicate_type.bounds {
					if let TypeParamBound::Trait(trait_bound) = bound
						&& let Some(constraint) = format_trait_bound(trait_bound, &type_ty, config)
					{
						constraints.push(constraint);
					}
				}
			}
		}
	}

	(type_vars, constraints)
}

fn format_trait_bound(
	bound: &syn::TraitBound,
	type_var: &HMType,
	config: &Config,
) -> Option<String> {
	let trait_name = bound.path.segments.last().unwrap().ident.to_string();

	match classify_trait(&trait_name, config) {
		TraitCategory::FnTrait | TraitCategory::FnBrand => None,
		TraitCategory::Other(name) => {
			if config.ignored_traits.contains(&name) {
				None
			} else {
				let name = format_brand_name(&name, config);
				Some(format!("{} {}", name, type_var))
			}
		}
		_ => None,
	}
}

fn format_parameters(
	sig: &syn::Signature,
	fn_bounds: &HashMap<String, HMType>,
	generic_names: &HashSet<String>,
	config: &Config,
) -> Vec<HMType> {
	let mut params = Vec::new();
	for input in &sig.inputs {
		match input {
			syn::FnArg::Receiver(receiver) => {
				let self_ty = HMType::Variable("self".to_string());
				if receiver.reference.is_some() {
					if receiver.mutability.is_some() {
						params.push(HMType::MutableReference(Box::new(self_ty)));
					} else {
						params.push(HMType::Reference(Box::new(self_ty)));
					}
				} else {
					params.push(self_ty);
				}
			}
			syn::FnArg::Typed(pat_type) => {
				if !is_phantom_data(&pat_type.ty) {
					params.push(type_to_hm(&pat_type.ty, fn_bounds, generic_names, config));
				}
			}
		}
	}
	params
}

fn format_return_type(
	output: &ReturnType,
	fn_bounds: &HashMap<String, HMType>,
	generic_names: &HashSet<String>,
	config: &Config,
) -> HMType {
	match output {
		ReturnType::Default => HMType::Unit, // Unit type
		ReturnType::Type(_, ty) => type_to_hm(ty, fn_bounds, generic_names, config),
	}
}
