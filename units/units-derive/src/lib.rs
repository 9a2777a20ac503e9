//! Derive macro backing the unit marker types of `units-core`.
//!
//! The `Unit` derive expands in terms of `crate::Unit` and `crate::Quantity`, so it only works inside `units-core`
//! (or a crate exposing an identical crate-root API).
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "kg"`: displayed unit symbol (required)
//! - `dimension = Mass`: dimension marker type (required)
//! - `ratio = 1e-3`: scale to the canonical unit of the dimension (required)
//! - `name = "kilogram"`: human readable name (optional, derived from the type name otherwise)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// Must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension` and `ratio`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;
    let long_name = unit_attr
        .name
        .map(|lit| lit.value())
        .unwrap_or_else(|| default_name(name));

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #long_name;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// `CubicMeter` -> `cubic meter`.
fn default_name(ident: &Ident) -> String {
    let mut out = String::new();
    for (i, ch) in ident.to_string().chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push(' ');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    ratio: Expr,
    name: Option<LitStr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
            name,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn parses_complete_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "kg", dimension = Mass, ratio = 1.0)]
            pub struct Kilogram;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "kg");
        assert!(attr.name.is_none());
    }

    #[test]
    fn parses_explicit_name() {
        let tokens = quote! {
            symbol = "L", dimension = Volume, ratio = 1e-3, name = "litre"
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.name.unwrap().value(), "litre");
    }

    #[test]
    fn missing_attribute_is_rejected() {
        let input: DeriveInput = parse_quote! {
            pub struct Gram;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_required_keys_are_reported() {
        let cases = [
            (quote! { dimension = Mass, ratio = 1.0 }, "`symbol`"),
            (quote! { symbol = "g", ratio = 1.0 }, "`dimension`"),
            (quote! { symbol = "g", dimension = Mass }, "`ratio`"),
        ];

        for (tokens, missing) in cases {
            let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
            assert!(
                err.to_string().contains(missing),
                "expected error about {missing}, got {err}"
            );
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "g", dimension = Mass, ratio = 1e-3, plural = "grams")]
            pub struct Gram;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `plural`"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let tokens = quote! {
            symbol = "m³", dimension = Volume, ratio = 1.0,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m³");
    }

    #[test]
    fn empty_attribute_is_rejected() {
        let result: syn::Result<UnitAttribute> = syn::parse2(quote! {});
        assert!(result.is_err());
    }

    #[test]
    fn expansion_contains_unit_impl() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "cm³", dimension = Volume, ratio = 1e-6)]
            pub struct CubicCentimeter;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for CubicCentimeter"));
        assert!(code.contains("const RATIO : f64 = 1e-6"));
        assert!(code.contains("type Dim = Volume"));
        assert!(code.contains("const NAME : & 'static str = \"cubic centimeter\""));
    }

    #[test]
    fn expansion_error_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Liter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_compile_error().to_string().contains("compile_error"));
    }

    #[test]
    fn default_name_splits_camel_case() {
        let ident: Ident = parse_quote!(CubicMeter);
        assert_eq!(default_name(&ident), "cubic meter");
        let ident: Ident = parse_quote!(Gram);
        assert_eq!(default_name(&ident), "gram");
    }
}
