use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::byte_array::ByteArray;
use crate::de::{Deserialize, ParseNode};
use crate::error::Result;
use crate::value::Value;

macro_rules! primitive {
    ($($ty:ty => $getter:ident,)*) => {$(
        impl Deserialize for $ty {
            fn read_from(node: &dyn ParseNode) -> Result<Option<Self>> {
                node.$getter()
            }
        }
    )*};
}
primitive! {
    String => string_value,
    bool => bool_value,
    i8 => i8_value,
    u8 => u8_value,
    i32 => i32_value,
    i64 => i64_value,
    f32 => f32_value,
    f64 => f64_value,
    ByteArray => byte_array_value,
    DateTime<FixedOffset> => date_time_value,
    NaiveDate => date_only_value,
    NaiveTime => time_only_value,
    Uuid => uuid_value,
}

impl Deserialize for Value {
    fn read_from(node: &dyn ParseNode) -> Result<Option<Self>> {
        if node.is_null() {
            return Ok(None);
        }
        node.raw_value().map(Some)
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    fn read_from(node: &dyn ParseNode) -> Result<Option<Self>> {
        Ok(T::read_from(node)?.map(Box::new))
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn read_from(node: &dyn ParseNode) -> Result<Option<Self>> {
        node.collection_of_primitive_values()
    }
}
