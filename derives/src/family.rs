use ::proc_macro2::{Span, TokenStream};
use ::quote::{format_ident, quote};
use ::syn::{Result, *};

use crate::attr;

pub fn derive(input: &DeriveInput, enumeration: &DataEnum) -> Result<TokenStream> {
    crate::reject_generics(input)?;

    let c = crate::frontend();
    let Family = &input.ident;
    let dummy = Ident::new(&format!("_IMPL_PARSABLE_FOR_{}", Family), Span::call_site());

    let mut each_variant = vec![];
    let mut EachTy = vec![];
    let mut fallback = None;
    for variant in &enumeration.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(FieldsUnnamed { unnamed, .. }) if unnamed.len() == 1 => &unnamed[0].ty,
            _ => {
                return Err(Error::new_spanned(
                    variant,
                    "family variants must wrap exactly one model type",
                ))
            }
        };
        if attr::is_fallback(variant)? {
            if fallback.replace(each_variant.len()).is_some() {
                return Err(Error::new_spanned(variant, "duplicate `fallback` variant"));
            }
        }
        each_variant.push(&variant.ident);
        EachTy.push(ty);
    }
    let fallback = match fallback {
        Some(fallback) => fallback,
        None => {
            return Err(Error::new(
                Span::call_site(),
                "a family needs one `#[odata(fallback)]` variant, its base type",
            ))
        }
    };

    let each_new = each_variant
        .iter()
        .map(|variant| format_ident!("__new_{}", variant))
        .collect::<Vec<_>>();
    let each_as = each_variant
        .iter()
        .map(|variant| format_ident!("__as_{}", variant))
        .collect::<Vec<_>>();

    // The fallback is only reached when no discriminator matches.
    let (EachKnownTy, each_known_new): (Vec<_>, Vec<_>) = (0..each_variant.len())
        .filter(|&i| i != fallback)
        .map(|i| (EachTy[i], &each_new[i]))
        .unzip();
    let fallback_new = &each_new[fallback];
    let FallbackVariant = each_variant[fallback];

    Ok(quote! {
        #[allow(non_upper_case_globals)]
        const #dummy: () = {
            impl #c::Parsable for #Family {
                fn create_from_discriminator_value(
                    node: &dyn #c::ParseNode,
                ) -> #c::Result<Self> {
                    #(
                        #[allow(non_snake_case)]
                        fn #each_new() -> #Family {
                            #Family::#each_variant(#c::__::Default::default())
                        }
                    )*
                    const DISCRIMINATORS: &[(&#c::__::str, fn() -> #Family)] = &[
                        #(
                            (<#EachKnownTy>::ODATA_TYPE, #each_known_new),
                        )*
                    ];
                    #c::__::discriminate(node, DISCRIMINATORS, #fallback_new)
                }

                fn field_deserializers(&self) -> #c::FieldDeserializers<Self> {
                    #(
                        #[allow(non_snake_case)]
                        fn #each_as(this: &mut #Family) -> #c::__::Option<&mut #EachTy> {
                            match this {
                                #Family::#each_variant(inner) => #c::__::Some(inner),
                                #[allow(unreachable_patterns)]
                                _ => #c::__::None,
                            }
                        }
                    )*
                    match self {
                        #(
                            #Family::#each_variant(inner) => {
                                #c::Parsable::field_deserializers(inner).project(#each_as)
                            }
                        )*
                    }
                }

                fn serialize_fields(
                    &self,
                    writer: &mut dyn #c::SerializationWriter,
                ) -> #c::Result<()> {
                    match self {
                        #(
                            #Family::#each_variant(inner) => {
                                #c::Parsable::serialize_fields(inner, writer)
                            }
                        )*
                    }
                }

                fn declares_field(&self, name: &#c::__::str) -> bool {
                    match self {
                        #(
                            #Family::#each_variant(inner) => #c::Parsable::declares_field(inner, name),
                        )*
                    }
                }

                fn odata_type(&self) -> #c::__::Option<&#c::__::str> {
                    match self {
                        #(
                            #Family::#each_variant(inner) => #c::Parsable::odata_type(inner),
                        )*
                    }
                }

                fn set_odata_type(&mut self, odata_type: #c::__::Option<#c::__::String>) {
                    match self {
                        #(
                            #Family::#each_variant(inner) => {
                                #c::Parsable::set_odata_type(inner, odata_type)
                            }
                        )*
                    }
                }
            }

            impl #c::AdditionalDataHolder for #Family {
                fn additional_data(&self) -> &#c::AdditionalData {
                    match self {
                        #(
                            #Family::#each_variant(inner) => {
                                #c::AdditionalDataHolder::additional_data(inner)
                            }
                        )*
                    }
                }

                fn additional_data_mut(&mut self) -> &mut #c::AdditionalData {
                    match self {
                        #(
                            #Family::#each_variant(inner) => {
                                #c::AdditionalDataHolder::additional_data_mut(inner)
                            }
                        )*
                    }
                }
            }

            impl #c::Serialize for #Family {
                fn write_to(
                    &self,
                    key: #c::__::Option<&#c::__::str>,
                    writer: &mut dyn #c::SerializationWriter,
                ) -> #c::Result<()> {
                    #c::SerializationWriter::write_object_value(writer, key, self)
                }
            }

            impl #c::Deserialize for #Family {
                fn read_from(node: &dyn #c::ParseNode) -> #c::Result<#c::__::Option<Self>> {
                    node.object_value(<Self as #c::Parsable>::create_from_discriminator_value)
                }
            }

            impl #c::__::Default for #Family {
                fn default() -> Self {
                    #Family::#FallbackVariant(#c::__::Default::default())
                }
            }

            #(
                impl #c::__::From<#EachTy> for #Family {
                    fn from(inner: #EachTy) -> Self {
                        #Family::#each_variant(inner)
                    }
                }
            )*
        };
    })
}
