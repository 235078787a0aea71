use ::proc_macro2::{Span, TokenStream};
use ::quote::{format_ident, quote};
use ::syn::{ext::IdentExt, Result, *};

use crate::attr::{self, Role};

struct WireField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    wire: String,
}

pub fn derive(input: &DeriveInput) -> Result<TokenStream> {
    crate::reject_generics(input)?;
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields,
        _ => {
            return Err(Error::new(
                Span::call_site(),
                "currently only structs with named fields are supported",
            ))
        }
    };

    let c = crate::frontend();
    let ident = &input.ident;
    let dummy = Ident::new(&format!("_IMPL_PARSABLE_FOR_{}", ident), Span::call_site());

    let mut base = None;
    let mut odata_type = None;
    let mut additional_data = None;
    let mut wire_fields = vec![];
    // Declaration order, `@odata.type` included, is the wire order.
    let mut written = vec![];
    let mut each_field = vec![];

    for field in &fields.named {
        let attrs = attr::field_attrs(field)?;
        let field_ident = match &field.ident {
            Some(field_ident) => field_ident,
            None => continue,
        };
        each_field.push(field_ident);
        if attrs.skip {
            continue;
        }
        let slot = match attrs.role {
            Role::Plain => None,
            Role::Base => Some(&mut base),
            Role::OdataType => Some(&mut odata_type),
            Role::AdditionalData => Some(&mut additional_data),
        };
        if let Some(slot) = slot {
            if slot.replace((field_ident, &field.ty)).is_some() {
                return Err(Error::new_spanned(field, "duplicate field role"));
            }
            if attrs.role == Role::OdataType {
                written.push((field_ident, String::from("@odata.type")));
            }
            continue;
        }
        let wire = attr::name_of_field(field, &attrs);
        if !attrs.read_only {
            written.push((field_ident, wire.clone()));
        }
        wire_fields.push(WireField {
            ident: field_ident,
            ty: option_inner(&field.ty)?,
            wire,
        });
    }

    let discriminator = attr::discriminator(&input.attrs)?;
    if discriminator.is_some() && odata_type.is_none() && base.is_none() {
        return Err(Error::new(
            Span::call_site(),
            "a `discriminator` needs an `#[odata(odata_type)]` field or an `#[odata(base)]`",
        ));
    }
    let odata_type_const = discriminator.as_ref().map(|discriminator| {
        quote!(
            /// Wire discriminator of this type.
            pub const ODATA_TYPE: &'static #c::__::str = #discriminator;
        )
    });
    let stamp = discriminator.as_ref().map(|_| {
        quote!(
            #c::Parsable::set_odata_type(
                &mut this,
                #c::__::Some(#c::__::String::from(Self::ODATA_TYPE)),
            );
        )
    });

    let accessors = wire_fields.iter().map(|field| {
        let WireField { ident: field_ident, ty, .. } = field;
        let setter = format_ident!("set_{}", field_ident.unraw());
        quote!(
            pub fn #field_ident(&self) -> #c::__::Option<&#ty> {
                self.#field_ident.as_ref()
            }

            pub fn #setter(&mut self, value: #c::__::Option<#ty>) {
                self.#field_ident = value;
            }
        )
    });

    let (registry, serialize_base) = match base {
        Some((base_ident, base_ty)) => (
            quote!(
                fn __base(this: &mut #ident) -> #c::__::Option<&mut #base_ty> {
                    #c::__::Some(&mut this.#base_ident)
                }
                #[allow(unused_mut)]
                let mut fields = #c::Parsable::field_deserializers(&self.#base_ident).project(__base);
            ),
            Some({
                let own_odata_type = odata_type.map(|_| "@odata.type");
                let each_own = own_odata_type
                    .into_iter()
                    .chain(wire_fields.iter().map(|field| field.wire.as_str()));
                quote!(
                    #c::Parsable::serialize_fields(
                        &self.#base_ident,
                        &mut #c::__::Shadowed::new(writer, &[#(#each_own),*]),
                    )?;
                )
            }),
        ),
        None => (
            quote!(
                #[allow(unused_mut)]
                let mut fields = #c::FieldDeserializers::<Self>::new();
            ),
            None,
        ),
    };

    let odata_type_entry = odata_type.map(|(field_ident, _)| {
        quote!(
            fields.insert(#c::ODATA_TYPE_KEY, |this: &mut Self, node| {
                #c::__::read_into(node, &mut this.#field_ident)
            });
        )
    });
    let each_wire_entry = wire_fields.iter().map(|field| {
        let WireField { ident: field_ident, wire, .. } = field;
        quote!(
            fields.insert(#wire, |this: &mut Self, node| {
                #c::__::read_into(node, &mut this.#field_ident)
            });
        )
    });
    let each_write = written.iter().map(|(field_ident, wire)| {
        quote!(
            #c::__::write_field(writer, #wire, &self.#field_ident)?;
        )
    });

    let declared_wire = odata_type
        .map(|_| "@odata.type")
        .into_iter()
        .chain(wire_fields.iter().map(|field| field.wire.as_str()));
    let declared_by_base = match base {
        Some((base_ident, _)) => quote!(#c::Parsable::declares_field(&self.#base_ident, name)),
        None => quote!(false),
    };

    let (get_odata_type, set_odata_type) = match (odata_type, base) {
        (Some((field_ident, _)), _) => (
            quote!(self.#field_ident.as_deref()),
            quote!(self.#field_ident = odata_type;),
        ),
        (None, Some((base_ident, _))) => (
            quote!(#c::Parsable::odata_type(&self.#base_ident)),
            quote!(#c::Parsable::set_odata_type(&mut self.#base_ident, odata_type);),
        ),
        (None, None) => (quote!(#c::__::None), quote!(let _ = odata_type;)),
    };

    let (get_additional_data, get_additional_data_mut) = match (additional_data, base) {
        (Some((field_ident, _)), _) => (
            quote!(&self.#field_ident),
            quote!(&mut self.#field_ident),
        ),
        (None, Some((base_ident, _))) => (
            quote!(#c::AdditionalDataHolder::additional_data(&self.#base_ident)),
            quote!(#c::AdditionalDataHolder::additional_data_mut(&mut self.#base_ident)),
        ),
        (None, None) => {
            return Err(Error::new(
                Span::call_site(),
                "a model needs an `#[odata(additional_data)]` field or an `#[odata(base)]`",
            ))
        }
    };

    let deref = base.map(|(base_ident, base_ty)| {
        quote!(
            impl #c::__::Deref for #ident {
                type Target = #base_ty;

                fn deref(&self) -> &#base_ty {
                    &self.#base_ident
                }
            }

            impl #c::__::DerefMut for #ident {
                fn deref_mut(&mut self) -> &mut #base_ty {
                    &mut self.#base_ident
                }
            }
        )
    });

    Ok(quote! {
        #[allow(non_upper_case_globals)]
        const #dummy: () = {
            impl #ident {
                #odata_type_const

                /// Creates an instance with every field unset and an empty
                /// additional-data bag.
                pub fn new() -> Self {
                    #[allow(unused_mut)]
                    let mut this = #ident {
                        #(
                            #each_field: #c::__::Default::default(),
                        )*
                    };
                    #stamp
                    this
                }

                #(#accessors)*
            }

            impl #c::__::Default for #ident {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl #c::AdditionalDataHolder for #ident {
                fn additional_data(&self) -> &#c::AdditionalData {
                    #get_additional_data
                }

                fn additional_data_mut(&mut self) -> &mut #c::AdditionalData {
                    #get_additional_data_mut
                }
            }

            impl #c::Parsable for #ident {
                fn create_from_discriminator_value(
                    _node: &dyn #c::ParseNode,
                ) -> #c::Result<Self> {
                    #c::__::Ok(Self::new())
                }

                fn field_deserializers(&self) -> #c::FieldDeserializers<Self> {
                    #registry
                    #odata_type_entry
                    #(#each_wire_entry)*
                    fields
                }

                fn serialize_fields(
                    &self,
                    writer: &mut dyn #c::SerializationWriter,
                ) -> #c::Result<()> {
                    #serialize_base
                    #(#each_write)*
                    #c::__::Ok(())
                }

                fn declares_field(&self, name: &#c::__::str) -> bool {
                    let declared: &[&#c::__::str] = &[#(#declared_wire),*];
                    declared.contains(&name) || #declared_by_base
                }

                fn odata_type(&self) -> #c::__::Option<&#c::__::str> {
                    #get_odata_type
                }

                fn set_odata_type(&mut self, odata_type: #c::__::Option<#c::__::String>) {
                    #set_odata_type
                }
            }

            impl #c::Serialize for #ident {
                fn write_to(
                    &self,
                    key: #c::__::Option<&#c::__::str>,
                    writer: &mut dyn #c::SerializationWriter,
                ) -> #c::Result<()> {
                    #c::SerializationWriter::write_object_value(writer, key, self)
                }
            }

            impl #c::Deserialize for #ident {
                fn read_from(node: &dyn #c::ParseNode) -> #c::Result<#c::__::Option<Self>> {
                    node.object_value(<Self as #c::Parsable>::create_from_discriminator_value)
                }
            }

            #deref
        };
    })
}

/// The `T` of an `Option<T>` field.
fn option_inner(ty: &Type) -> Result<&Type> {
    if let Type::Path(TypePath { qself: None, path }) = ty {
        if let Some(segment) = path.segments.last() {
            if segment.ident == "Option" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return Ok(inner);
                    }
                }
            }
        }
    }
    Err(Error::new_spanned(ty, "model fields must be `Option<_>`"))
}
