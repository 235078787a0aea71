//! Serialization traits.
//!
//! Serialization in odata-dto works by walking a populated model and handing
//! each of its fields to a [`SerializationWriter`]. A model writes its base
//! type's fields first, then its own fields in schema order, then its
//! additional-data bag.
//!
//! ## Writing a field
//!
//! Every field type implements [`Serialize`]. Generated code goes through
//! [`write_field`], which also decides what happens to an unset field:
//! scalars are written as an explicit `null`, while enums, nested objects and
//! collections are left out of the output altogether.
//!
//! ```rust
//! use odata_dto::json::JsonSerializationWriter;
//! use odata_dto::ser::write_field;
//!
//! let mut writer = JsonSerializationWriter::new();
//! writer.begin_object(None).unwrap();
//! write_field(&mut writer, "displayName", &Some("Contoso".to_owned())).unwrap();
//! write_field::<String>(&mut writer, "description", &None).unwrap();
//! write_field::<Vec<String>>(&mut writer, "roleScopeTagIds", &None).unwrap();
//! writer.end_object().unwrap();
//!
//! assert_eq!(
//!     writer.into_string(),
//!     r#"{"displayName":"Contoso","description":null}"#,
//! );
//! ```

mod impls;
pub(crate) mod shadow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::Result;
use crate::parsable::Parsable;
use crate::value::{AdditionalData, Value};

/// Trait for data structures that can be written to a
/// [`SerializationWriter`].
pub trait Serialize {
    /// Writes `self` under `key`, or as an array element / root value when
    /// `key` is `None`.
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()>;

    /// Whether an unset field of this type is still written, as an explicit
    /// null.
    fn null_when_unset() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Sink for the fields of a model.
///
/// `key == None` writes an array element or a root value. Every method
/// returns the first error the sink hits; callers propagate it untouched.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> Result<()>;

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<()>;

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<()>;

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<()>;

    fn write_null_value(&mut self, key: Option<&str>) -> Result<()>;

    /// Writes a nested model: its fields, then its additional data.
    fn write_object_value(&mut self, key: Option<&str>, value: &dyn Parsable) -> Result<()>;

    /// Writes an ordered, homogeneous collection.
    fn write_collection_value(
        &mut self,
        key: Option<&str>,
        elements: &mut dyn Iterator<Item = &dyn Serialize>,
    ) -> Result<()>;

    /// Writes an untyped value, as kept in the additional-data bag.
    fn write_any_value(&mut self, key: Option<&str>, value: &Value) -> Result<()>;

    fn write_i8_value(&mut self, key: Option<&str>, value: i8) -> Result<()> {
        self.write_i64_value(key, value.into())
    }

    fn write_u8_value(&mut self, key: Option<&str>, value: u8) -> Result<()> {
        self.write_i64_value(key, value.into())
    }

    fn write_i32_value(&mut self, key: Option<&str>, value: i32) -> Result<()> {
        self.write_i64_value(key, value.into())
    }

    fn write_f32_value(&mut self, key: Option<&str>, value: f32) -> Result<()> {
        self.write_f64_value(key, value.into())
    }

    fn write_byte_array_value(&mut self, key: Option<&str>, value: &[u8]) -> Result<()> {
        self.write_string_value(key, &STANDARD.encode(value))
    }

    fn write_date_time_value(
        &mut self,
        key: Option<&str>,
        value: &DateTime<FixedOffset>,
    ) -> Result<()> {
        self.write_string_value(key, &value.to_rfc3339())
    }

    fn write_date_only_value(&mut self, key: Option<&str>, value: &NaiveDate) -> Result<()> {
        self.write_string_value(key, &value.format("%Y-%m-%d").to_string())
    }

    fn write_time_only_value(&mut self, key: Option<&str>, value: &NaiveTime) -> Result<()> {
        self.write_string_value(key, &value.format("%H:%M:%S%.f").to_string())
    }

    fn write_uuid_value(&mut self, key: Option<&str>, value: &Uuid) -> Result<()> {
        self.write_string_value(key, &value.hyphenated().to_string())
    }

    /// Writes every entry of an additional-data bag as a field of the
    /// enclosing object.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<()> {
        for (key, value) in data {
            self.write_any_value(Some(key), value)?;
        }
        Ok(())
    }
}

/// Writes one declared field of a model.
///
/// An unset field is written as `null` when its type asks for it (see
/// [`Serialize::null_when_unset`]) and skipped otherwise.
pub fn write_field<T: Serialize>(
    writer: &mut dyn SerializationWriter,
    key: &str,
    value: &Option<T>,
) -> Result<()> {
    match value {
        Some(value) => value.write_to(Some(key), writer),
        None if T::null_when_unset() => writer.write_null_value(Some(key)),
        None => Ok(()),
    }
}
