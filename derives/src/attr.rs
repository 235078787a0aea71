use ::core::ops::Not as _;
use ::syn::{ext::IdentExt, Result, *};

#[cfg_attr(rustfmt, rustfmt::skip)]
macro_rules! for_each_odata_attr {
    (
        @[acc = $($acc:tt)*]
        #[odata(
            $key:ident = $__:tt $value:ident
        )] => $body:expr $(,
        $($rest:tt)* )?
    ) => (for_each_odata_attr! {
        @[acc = $($acc)*
            match meta!() {
                | Meta::NameValue(MetaNameValue {
                    path,
                    lit: Lit::Str(s),
                    ..
                })
                    if path.is_ident(stringify!($key))
                => {
                    let $key = path;
                    let _ = $key;
                    let $value = s.value();
                    return Some((|| Ok::<(), ::syn::Error>({
                        $body
                    }))());
                },
                | _ => {},
            }
        ]
        $($($rest)*)?
    });

    (
        @[acc = $($acc:tt)*]
        #[odata(
            $key:ident
        )] => $body:expr $(,
        $($rest:tt)* )?
    ) => (for_each_odata_attr! {
        @[acc = $($acc)*
            match meta!() {
                | Meta::Path(path) if path.is_ident(stringify!($key)) => {
                    let $key = path;
                    let _ = $key;
                    return Some((|| Ok::<(), ::syn::Error>(
                        $body
                    ))());
                },
                | _ => {},
            }
        ]
        $($($rest)*)?
    });

    (
        @[acc = $($acc:tt)*]
        /* Nothing left: default branch -> error */
    ) => ({
        $($acc)*

        None
    });

    (
        $attrs:expr =>
        $($input:tt)*
    ) => (
        try_for_each_odata_attr($attrs, |meta| {
            macro_rules! meta {() => ( meta )}
            for_each_odata_attr! {
                @[acc = ]
                $($input)*
            }
        })
    );
}

/// What a struct field stands for.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A declared wire field.
    Plain,
    /// The embedded base type.
    Base,
    /// The `@odata.type` slot.
    OdataType,
    /// The additional-data bag.
    AdditionalData,
}

pub struct FieldAttrs {
    pub role: Role,
    pub rename: Option<String>,
    pub read_only: bool,
    pub skip: bool,
}

impl FieldAttrs {
    fn set_role(&mut self, role: Role, path: &Path) -> Result<()> {
        if self.role != Role::Plain {
            return Err(Error::new_spanned(path, "conflicting field roles"));
        }
        self.role = role;
        Ok(())
    }
}

pub fn field_attrs(field: &Field) -> Result<FieldAttrs> {
    let mut ret = FieldAttrs {
        role: Role::Plain,
        rename: None,
        read_only: false,
        skip: false,
    };

    for_each_odata_attr!( &field.attrs =>
        #[odata( rename = $new_name )] => {
            let prev = ret.rename.replace(new_name);
            if prev.is_some() {
                return Err(Error::new_spanned(rename, "duplicate `rename` attribute"));
            }
        },
        #[odata( base )] => ret.set_role(Role::Base, base)?,
        #[odata( odata_type )] => ret.set_role(Role::OdataType, odata_type)?,
        #[odata( additional_data )] => ret.set_role(Role::AdditionalData, additional_data)?,
        #[odata( read_only )] => ret.read_only = true,
        #[odata( skip )] => ret.skip = true,
    )?;

    Ok(ret)
}

/// Find the value of a struct-level #[odata(discriminator = "...")] attribute.
pub fn discriminator(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut ret = None;

    for_each_odata_attr!( attrs =>
        #[odata( discriminator = $value )] => {
            let prev = ret.replace(value);
            if prev.is_some() {
                return Err(Error::new_spanned(discriminator, "duplicate `discriminator` attribute"));
            }
        },
    )?;

    Ok(ret)
}

/// Whether a family variant carries #[odata(fallback)].
pub fn is_fallback(var: &Variant) -> Result<bool> {
    let mut ret = false;
    for_each_odata_attr!( &var.attrs =>
        #[odata( fallback )] => ret = true,
    )?;
    Ok(ret)
}

/// Determine the wire name of a field, respecting a rename attribute.
pub fn name_of_field(field: &Field, attrs: &FieldAttrs) -> String {
    match (&attrs.rename, &field.ident) {
        (Some(rename), _) => rename.clone(),
        (None, Some(ident)) => lower_camel_case(&ident.unraw().to_string()),
        (None, None) => String::new(),
    }
}

/// Determine the wire string of an enum variant, respecting a rename
/// attribute.
pub fn name_of_variant(var: &Variant) -> Result<String> {
    let mut ret = None;

    for_each_odata_attr!( &var.attrs =>
        #[odata( rename = $new_name )] => {
            let prev = ret.replace(new_name);
            if prev.is_some() {
                return Err(Error::new_spanned(rename, "duplicate `rename` attribute"));
            }
        },
    )?;

    Ok(ret.unwrap_or_else(|| lower_camel_case(&var.ident.unraw().to_string())))
}

/// `grace_period_in_minutes` and `GracePeriodInMinutes` both become
/// `gracePeriodInMinutes`.
pub fn lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = out.is_empty().not();
        } else if out.is_empty() {
            out.extend(c.to_lowercase());
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[rustfmt::skip]
fn try_for_each_odata_attr (
    attrs: &'_ [Attribute],
    mut f: impl FnMut(&'_ Meta) -> Option<Result<()>>,
) -> Result<()>
{
    for attr in attrs {
        if attr.path.is_ident("odata").not() {
            continue;
        }
        let list = match attr.parse_meta()? {
            | Meta::List(list) => list,
            | other => return Err(Error::new_spanned(other, "invalid attribute")),
        };
        for meta in &list.nested {
            if let NestedMeta::Meta(ref meta) = *meta {
                match f(meta) {
                    | Some(Ok(())) => continue,
                    | Some(err) => return err,
                    | None => {}
                }
            }
            return Err(Error::new_spanned(meta, "invalid attribute"));
        }
    }
    Ok(())
}
