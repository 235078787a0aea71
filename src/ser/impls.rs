use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::byte_array::ByteArray;
use crate::error::Result;
use crate::ser::{SerializationWriter, Serialize};
use crate::value::Value;

// Scalars are written as an explicit null when unset.
macro_rules! scalar {
    ($($ty:ty => |$this:ident| $writer:ident($value:expr),)*) => {$(
        impl Serialize for $ty {
            fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
                let $this = self;
                writer.$writer(key, $value)
            }

            fn null_when_unset() -> bool {
                true
            }
        }
    )*};
}
scalar! {
    String => |s| write_string_value(s),
    bool => |b| write_bool_value(*b),
    i8 => |i| write_i8_value(*i),
    u8 => |u| write_u8_value(*u),
    i32 => |i| write_i32_value(*i),
    i64 => |i| write_i64_value(*i),
    f32 => |f| write_f32_value(*f),
    f64 => |f| write_f64_value(*f),
    ByteArray => |bytes| write_byte_array_value(bytes),
    DateTime<FixedOffset> => |dt| write_date_time_value(dt),
    NaiveDate => |date| write_date_only_value(date),
    NaiveTime => |time| write_time_only_value(time),
    Uuid => |uuid| write_uuid_value(uuid),
}

impl Serialize for str {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value(key, self)
    }
}

impl Serialize for Value {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_any_value(key, self)
    }
}

impl<'a, T: ?Sized + Serialize> Serialize for &'a T {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        (**self).write_to(key, writer)
    }
}

impl<T: Serialize> Serialize for Box<T> {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        (**self).write_to(key, writer)
    }

    fn null_when_unset() -> bool {
        T::null_when_unset()
    }
}

impl<T: Serialize> Serialize for [T] {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        let mut elements = self.iter().map(|element| element as &dyn Serialize);
        writer.write_collection_value(key, &mut elements)
    }
}

impl<T: Serialize> Serialize for Vec<T> {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.as_slice().write_to(key, writer)
    }
}
