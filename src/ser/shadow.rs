use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::Result;
use crate::parsable::Parsable;
use crate::ser::{SerializationWriter, Serialize};
use crate::value::Value;

/// Writer handed to a base type's `serialize_fields`: members whose key the
/// subtype declares itself are dropped, so each key is written once, by the
/// subtype.
///
/// Only the members of the current object pass through here. Nested objects
/// and collections are written by the inner writer directly.
pub struct Shadowed<'a> {
    inner: &'a mut dyn SerializationWriter,
    hidden: &'static [&'static str],
}

impl<'a> Shadowed<'a> {
    pub fn new(inner: &'a mut dyn SerializationWriter, hidden: &'static [&'static str]) -> Self {
        Shadowed { inner, hidden }
    }

    fn passes(&self, key: Option<&str>) -> bool {
        match key {
            Some(key) => !self.hidden.contains(&key),
            None => true,
        }
    }
}

macro_rules! forward {
    ($($method:ident($ty:ty);)*) => {
        $(
            fn $method(&mut self, key: Option<&str>, value: $ty) -> Result<()> {
                if self.passes(key) {
                    self.inner.$method(key, value)
                } else {
                    Ok(())
                }
            }
        )*
    };
}

impl<'a> SerializationWriter for Shadowed<'a> {
    forward! {
        write_string_value(&str);
        write_bool_value(bool);
        write_i64_value(i64);
        write_f64_value(f64);
        write_object_value(&dyn Parsable);
        write_collection_value(&mut dyn Iterator<Item = &dyn Serialize>);
        write_any_value(&Value);
        write_i8_value(i8);
        write_u8_value(u8);
        write_i32_value(i32);
        write_f32_value(f32);
        write_byte_array_value(&[u8]);
        write_date_time_value(&DateTime<FixedOffset>);
        write_date_only_value(&NaiveDate);
        write_time_only_value(&NaiveTime);
        write_uuid_value(&Uuid);
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<()> {
        if self.passes(key) {
            self.inner.write_null_value(key)
        } else {
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::json::JsonSerializationWriter;
    use crate::ser::write_field;

    #[test]
    fn hidden_members_are_dropped() {
        let mut writer = JsonSerializationWriter::new();
        writer.begin_object(None).unwrap();
        {
            let mut shadowed = Shadowed::new(&mut writer, &["text"]);
            write_field(&mut shadowed, "name", &Some("label".to_owned())).unwrap();
            write_field::<String>(&mut shadowed, "text", &None).unwrap();
            write_field(&mut shadowed, "text", &Some("base".to_owned())).unwrap();
        }
        write_field(&mut writer, "text", &Some("own".to_owned())).unwrap();
        writer.end_object().unwrap();
        assert_eq!(writer.into_string(), r#"{"name":"label","text":"own"}"#);
    }
}
