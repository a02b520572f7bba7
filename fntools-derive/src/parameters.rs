//! Parameter extraction shared by `function!` and `#[signature]`.
//!
//! Both macros see a list of patterns (closure inputs or `fn` arguments).
//! Each pattern becomes a [`CapturedParameter`]: its name, its declared type
//! (if any), and the `#[default(expr)]` / `#[variadic]` markers. The markers
//! are removed from the pattern so the re-emitted closure or `fn` is plain
//! Rust.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Expr, Pat, PatType, Token, Type, parse_quote, spanned::Spanned};

const DEFAULT_ATTRIBUTE: &str = "default";
const VARIADIC_ATTRIBUTE: &str = "variadic";

pub enum ParameterKind {
    Positional { default: Option<Expr> },
    Variadic,
}

pub struct CapturedParameter {
    pub name: String,
    pub ty: Option<Type>,
    pub kind: ParameterKind,
}

impl CapturedParameter {
    /// Builds the `fntools::function::Parameter` constructor call.
    pub fn descriptor(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.kind {
            ParameterKind::Positional { default: None } => quote! {
                ::fntools::function::Parameter::positional(#name)
            },
            ParameterKind::Positional {
                default: Some(default),
            } => quote! {
                ::fntools::function::Parameter::with_default(
                    #name,
                    ::fntools::value::Value::from(#default),
                )
            },
            ParameterKind::Variadic => quote! {
                ::fntools::function::Parameter::variadic(#name)
            },
        }
    }

    /// The type a bound argument is converted into before the call.
    pub fn binding_type(&self) -> TokenStream2 {
        self.ty.as_ref().map_or_else(
            || quote! { ::fntools::value::Value },
            |ty| quote! { #ty },
        )
    }
}

/// Extracts one parameter from a closure input, stripping marker attributes.
pub fn capture_closure_input(pattern: &mut Pat, index: usize) -> syn::Result<CapturedParameter> {
    match pattern {
        Pat::Type(typed) => {
            let kind = take_markers(&mut typed.attrs)?;
            Ok(CapturedParameter {
                name: pattern_name(&typed.pat, index),
                ty: Some((*typed.ty).clone()),
                kind,
            })
        }
        Pat::Ident(identifier) => {
            let kind = take_markers(&mut identifier.attrs)?;
            let name = identifier.ident.to_string();
            annotate_value_type(pattern);
            Ok(CapturedParameter {
                name,
                ty: None,
                kind,
            })
        }
        Pat::Wild(wild) => {
            let kind = take_markers(&mut wild.attrs)?;
            annotate_value_type(pattern);
            Ok(CapturedParameter {
                name: format!("_{index}"),
                ty: None,
                kind,
            })
        }
        other => Err(syn::Error::new(
            other.span(),
            "function! parameters must be identifiers, `_`, or typed patterns",
        )),
    }
}

/// Gives an untyped closure input an explicit `Value` type.
fn annotate_value_type(pattern: &mut Pat) {
    let untyped_span = pattern.span();
    let untyped = std::mem::replace(pattern, Pat::Verbatim(TokenStream2::new()));
    *pattern = Pat::Type(PatType {
        attrs: Vec::new(),
        pat: Box::new(untyped),
        colon_token: Token![:](untyped_span),
        ty: Box::new(parse_quote!(::fntools::value::Value)),
    });
}

/// Extracts one parameter from a typed `fn` argument, stripping marker attributes.
pub fn capture_typed_argument(
    typed: &mut syn::PatType,
    index: usize,
) -> syn::Result<CapturedParameter> {
    let kind = take_markers(&mut typed.attrs)?;
    Ok(CapturedParameter {
        name: pattern_name(&typed.pat, index),
        ty: Some((*typed.ty).clone()),
        kind,
    })
}

/// Rejects parameter lists the runtime binder cannot describe or fill.
pub fn validate(parameters: &[CapturedParameter], span: proc_macro2::Span) -> syn::Result<()> {
    let variadic_count = parameters
        .iter()
        .filter(|parameter| matches!(parameter.kind, ParameterKind::Variadic))
        .count();

    if variadic_count > 1 {
        return Err(syn::Error::new(
            span,
            "at most one parameter can be marked #[variadic]",
        ));
    }

    let stranded = parameters
        .iter()
        .skip_while(|parameter| !matches!(parameter.kind, ParameterKind::Variadic))
        .find(|parameter| matches!(parameter.kind, ParameterKind::Positional { default: None }));

    if let Some(parameter) = stranded {
        return Err(syn::Error::new(
            span,
            format!(
                "parameter `{}` follows a #[variadic] parameter and needs a #[default]",
                parameter.name
            ),
        ));
    }

    Ok(())
}

/// Generates the `let` bindings that convert bound values into typed arguments.
///
/// Returns the identifiers in parameter order together with the statements.
pub fn generate_bindings(
    parameters: &[CapturedParameter],
    source: &proc_macro2::Ident,
) -> (Vec<proc_macro2::Ident>, Vec<TokenStream2>) {
    parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| {
            let identifier = format_ident!("__fntools_argument_{}", index);
            let binding_type = parameter.binding_type();
            let statement = quote! {
                let #identifier: #binding_type = ::fntools::value::FromValue::from_value(
                    #source.next().unwrap_or_default(),
                )?;
            };
            (identifier, statement)
        })
        .unzip()
}

fn pattern_name(pattern: &Pat, index: usize) -> String {
    match pattern {
        Pat::Ident(identifier) => identifier.ident.to_string(),
        _ => format!("_{index}"),
    }
}

fn take_markers(attributes: &mut Vec<Attribute>) -> syn::Result<ParameterKind> {
    let mut default = None;
    let mut variadic = false;
    let mut remaining = Vec::with_capacity(attributes.len());

    for attribute in attributes.drain(..) {
        if attribute.path().is_ident(DEFAULT_ATTRIBUTE) {
            if default.is_some() {
                return Err(syn::Error::new(
                    attribute.span(),
                    "duplicate #[default] on the same parameter",
                ));
            }
            default = Some(attribute.parse_args::<Expr>()?);
        } else if attribute.path().is_ident(VARIADIC_ATTRIBUTE) {
            attribute.meta.require_path_only()?;
            variadic = true;
        } else {
            remaining.push(attribute);
        }
    }
    *attributes = remaining;

    match (default, variadic) {
        (Some(default), false) => Ok(ParameterKind::Positional {
            default: Some(default),
        }),
        (None, false) => Ok(ParameterKind::Positional { default: None }),
        (None, true) => Ok(ParameterKind::Variadic),
        (Some(default), true) => Err(syn::Error::new(
            default.span(),
            "a #[variadic] parameter cannot have a #[default]",
        )),
    }
}
