//! Implementation of the `function!` macro and the `#[signature]` attribute.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `function!(|a: i64, #[default(1)] b: i64| a + b)`
//! 2. Item form: `#[signature] fn add(a: i64, b: i64) -> i64 { a + b }`
//!
//! # Generated Code Structure
//!
//! ## Closure Form
//!
//! For `function!(|a: i64, #[variadic] rest: Vec<i64>| body)` the macro generates:
//!
//! ```text
//! {
//!     let __fntools_target = |a: i64, rest: Vec<i64>| body;
//!     ::fntools::function::Function::from_signature(
//!         None,
//!         ::fntools::function::Signature::new(vec![
//!             Parameter::positional("a"),
//!             Parameter::variadic("rest"),
//!         ]),
//!         move |__fntools_bound| {
//!             let mut __fntools_bound = __fntools_bound.into_iter();
//!             let __fntools_argument_0: i64 = FromValue::from_value(__fntools_bound.next().unwrap_or_default())?;
//!             let __fntools_argument_1: Vec<i64> = FromValue::from_value(__fntools_bound.next().unwrap_or_default())?;
//!             IntoCallResult::into_call_result(__fntools_target(__fntools_argument_0, __fntools_argument_1))
//!         },
//!     )
//! }
//! ```
//!
//! ## Item Form
//!
//! The annotated `fn` is re-emitted without the marker attributes, followed by
//! a sibling `{name}_function()` constructor whose body has the same shape as
//! above, calling the `fn` by name and recording that name on the `Function`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Expr, ExprClosure, FnArg, ItemFn, spanned::Spanned};

use crate::parameters::{self, CapturedParameter};

pub fn expand_closure(input: TokenStream2) -> syn::Result<TokenStream2> {
    let expression: Expr = syn::parse2(input)?;
    let mut closure = match expression {
        Expr::Closure(closure) => closure,
        Expr::Path(path) => {
            return Err(syn::Error::new(
                path.span(),
                "function! needs a closure to read the signature from; \
                 annotate named functions with #[signature] instead",
            ));
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "function! requires a closure",
            ));
        }
    };

    reject_async_closure(&closure)?;

    let captured = closure
        .inputs
        .iter_mut()
        .enumerate()
        .map(|(index, pattern)| parameters::capture_closure_input(pattern, index))
        .collect::<syn::Result<Vec<_>>>()?;
    parameters::validate(&captured, closure.span())?;

    let target = quote! { __fntools_target };
    let anonymous = quote! { ::core::option::Option::None };
    let constructor = generate_constructor(&captured, &target, &anonymous);

    Ok(quote! {
        {
            let __fntools_target = #closure;
            #constructor
        }
    })
}

pub fn expand_item(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attribute.is_empty() {
        return Err(syn::Error::new(
            attribute.span(),
            "#[signature] takes no arguments",
        ));
    }

    let mut function: ItemFn = syn::parse2(item)?;
    let signature = &function.sig;

    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[signature] cannot capture async functions",
        ));
    }
    if !signature.generics.params.is_empty() {
        return Err(syn::Error::new(
            signature.generics.span(),
            "#[signature] cannot capture generic functions",
        ));
    }

    let captured = function
        .sig
        .inputs
        .iter_mut()
        .enumerate()
        .map(|(index, argument)| match argument {
            FnArg::Typed(typed) => parameters::capture_typed_argument(typed, index),
            FnArg::Receiver(receiver) => Err(syn::Error::new(
                receiver.span(),
                "#[signature] captures free functions; take the receiver as an explicit first parameter",
            )),
        })
        .collect::<syn::Result<Vec<_>>>()?;
    parameters::validate(&captured, function.sig.span())?;

    let identifier = &function.sig.ident;
    let visibility = &function.vis;
    let constructor_identifier = format_ident!("{}_function", identifier);
    let name = identifier.to_string();
    let target = quote! { #identifier };
    let constructor = generate_constructor(
        &captured,
        &target,
        &quote! { ::core::option::Option::Some(::std::string::String::from(#name)) },
    );
    let documentation = format!("Dynamic `Function` wrapping [`{name}`].");

    Ok(quote! {
        #function

        #[doc = #documentation]
        #visibility fn #constructor_identifier() -> ::fntools::function::Function {
            #constructor
        }
    })
}

fn reject_async_closure(closure: &ExprClosure) -> syn::Result<()> {
    closure.asyncness.as_ref().map_or(Ok(()), |asyncness| {
        Err(syn::Error::new(
            asyncness.span(),
            "function! cannot capture async closures",
        ))
    })
}

fn generate_constructor(
    captured: &[CapturedParameter],
    target: &TokenStream2,
    name: &TokenStream2,
) -> TokenStream2 {
    let descriptors: Vec<_> = captured.iter().map(CapturedParameter::descriptor).collect();
    let source = format_ident!("__fntools_bound");
    let (identifiers, bindings) = parameters::generate_bindings(captured, &source);

    quote! {
        ::fntools::function::Function::from_signature(
            #name,
            ::fntools::function::Signature::new(::std::vec![#(#descriptors),*]),
            move |#source: ::std::vec::Vec<::fntools::value::Value>| {
                #[allow(unused_mut, unused_variables)]
                let mut #source = #source.into_iter();
                #(#bindings)*
                ::fntools::value::IntoCallResult::into_call_result(#target(#(#identifiers),*))
            },
        )
    }
}
