#![cfg_attr(all(feature = "json", feature = "models"), doc = include_str!("../README.md"))]
#![allow(
    // Pedantic.
    clippy::doc_markdown,
    clippy::enum_glob_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::redundant_else,
    clippy::single_match_else,
    clippy::too_many_lines,
)]
#![deny(rust_2018_idioms)]

extern crate self as odata_dto;

/// Logs the given error through `tracing` and returns it from the enclosing
/// function.
#[doc(hidden)]
#[macro_export]
macro_rules! __err__ {(
    $err:expr
) => ({
    let err: $crate::Error = $err;
    ::tracing::debug!(target: "odata_dto", error = %err, "odata-dto error");
    return $crate::__::Err(err);
})}
macro_rules! err {(
    $($args:tt)*
) => (
    $crate::__err__! { $($args)* }
)}

#[doc(hidden)]
pub use ::derives::*;

/// Not public API.
#[doc(hidden)]
pub mod __private;

/// Not public API.
#[doc(hidden)]
pub use __private as __;

mod error;

pub mod byte_array;
pub mod de;
pub mod enumeration;
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub mod json;
#[cfg(feature = "models")]
#[cfg_attr(docsrs, doc(cfg(feature = "models")))]
pub mod models;
pub mod parsable;
pub mod ser;
pub mod value;

pub use crate::byte_array::ByteArray;
#[doc(inline)]
pub use crate::de::{Deserialize, FieldDeserializers, ParseNode};
pub use crate::enumeration::{EnumValue, Flags};
pub use crate::error::{Error, Result};
pub use crate::parsable::{AdditionalDataHolder, Parsable, ParsableFactory};
#[doc(inline)]
pub use crate::ser::{SerializationWriter, Serialize};
pub use crate::value::{AdditionalData, Number, Value};

/// Wire name of the discriminator field carried by every polymorphic payload.
pub const ODATA_TYPE_KEY: &str = "@odata.type";
