//! Derive macros for `odata-dto`. Use the re-exports from the `odata-dto`
//! crate instead of depending on this crate directly.

#![allow(
    nonstandard_style,
    clippy::needless_doctest_main,
    clippy::needless_pass_by_value,
    clippy::too_many_lines
)]

extern crate proc_macro;

mod attr;
mod enum_value;
mod family;
mod parsable;

use ::proc_macro::TokenStream;
use ::proc_macro2::{Span, TokenStream as TokenStream2};
use ::quote::quote;
use ::syn::{parse_macro_input, Data, DeriveInput, Error};

/// Derives `Parsable`, `AdditionalDataHolder`, `Serialize` and `Deserialize`.
///
/// On a struct with named fields this generates a model type; on an enum of
/// newtype variants, a polymorphic family dispatched on `@odata.type`.
#[proc_macro_derive(Parsable, attributes(odata))]
pub fn derive_parsable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = match &input.data {
        Data::Struct(_) => parsable::derive(&input),
        Data::Enum(enumeration) => family::derive(&input, enumeration),
        Data::Union(_) => Err(Error::new(
            Span::call_site(),
            "`Parsable` cannot be derived for unions",
        )),
    };
    expanded.unwrap_or_else(|err| err.to_compile_error()).into()
}

/// Derives `EnumValue`, `Display`, `FromStr`, `Serialize` and `Deserialize`
/// for an enum of unit variants.
#[proc_macro_derive(EnumValue, attributes(odata))]
pub fn derive_enum_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    enum_value::derive(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn frontend() -> TokenStream2 {
    quote!(::odata_dto)
}

fn reject_generics(input: &DeriveInput) -> ::syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            &input.generics,
            "generic model types are not supported",
        ))
    }
}
