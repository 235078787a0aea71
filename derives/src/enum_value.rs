use ::proc_macro2::{Span, TokenStream};
use ::quote::quote;
use ::syn::{Result, *};

use crate::attr;

pub fn derive(input: &DeriveInput) -> Result<TokenStream> {
    crate::reject_generics(input)?;
    let enumeration = match &input.data {
        Data::Enum(enumeration) => enumeration,
        _ => {
            return Err(Error::new(
                Span::call_site(),
                "`EnumValue` can only be derived for enums",
            ))
        }
    };
    if let Some(variant) = enumeration
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return Err(Error::new_spanned(
            variant,
            "`EnumValue` variants cannot carry data",
        ));
    }

    let c = crate::frontend();
    let Enum = &input.ident;
    let Enum_str = Enum.to_string();
    let dummy = Ident::new(&format!("_IMPL_ENUM_VALUE_FOR_{}", Enum), Span::call_site());

    let each_var_ident = enumeration
        .variants
        .iter()
        .map(|it| &it.ident)
        .collect::<Vec<_>>();
    let each_name = enumeration
        .variants
        .iter()
        .map(attr::name_of_variant)
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        #[allow(non_upper_case_globals)]
        const #dummy: () = {
            impl #c::EnumValue for #Enum {
                const NAME: &'static #c::__::str = #Enum_str;

                const VARIANTS: &'static [(&'static #c::__::str, Self)] = &[
                    #(
                        (#each_name, #Enum::#each_var_ident),
                    )*
                ];

                fn as_str(&self) -> &'static #c::__::str {
                    match *self {
                        #(
                            #Enum::#each_var_ident => #each_name,
                        )*
                    }
                }
            }

            impl #c::__::std::fmt::Display for #Enum {
                fn fmt(&self, f: &mut #c::__::std::fmt::Formatter<'_>) -> #c::__::std::fmt::Result {
                    f.write_str(#c::EnumValue::as_str(self))
                }
            }

            impl #c::__::std::str::FromStr for #Enum {
                type Err = #c::Error;

                fn from_str(s: &#c::__::str) -> #c::Result<Self> {
                    <Self as #c::EnumValue>::parse(s)
                }
            }

            impl #c::Serialize for #Enum {
                fn write_to(
                    &self,
                    key: #c::__::Option<&#c::__::str>,
                    writer: &mut dyn #c::SerializationWriter,
                ) -> #c::Result<()> {
                    #c::SerializationWriter::write_string_value(
                        writer,
                        key,
                        #c::EnumValue::as_str(self),
                    )
                }
            }

            impl #c::Deserialize for #Enum {
                fn read_from(node: &dyn #c::ParseNode) -> #c::Result<#c::__::Option<Self>> {
                    node.enum_value::<Self>()
                }
            }
        };
    })
}
