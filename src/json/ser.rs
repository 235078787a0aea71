use std::collections::btree_map;
use std::slice;

use crate::error::{Error, Result};
use crate::parsable::Parsable;
use crate::ser::{SerializationWriter, Serialize};
use crate::value::{Number, Value};

/// A [`SerializationWriter`] producing compact JSON text.
///
/// Objects and arrays may be opened by hand with [`begin_object`] and
/// [`begin_array`]; every `write_*` call then adds one member to the
/// innermost open container. A key is required inside an object and refused
/// inside an array.
///
/// [`begin_object`]: Self::begin_object
/// [`begin_array`]: Self::begin_array
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    out: String,
    stack: Vec<Frame>,
}

#[derive(Debug)]
struct Frame {
    object: bool,
    empty: bool,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        JsonSerializationWriter::default()
    }

    pub fn begin_object(&mut self, key: Option<&str>) -> Result<()> {
        self.begin_value(key)?;
        self.out.push('{');
        self.stack.push(Frame {
            object: true,
            empty: true,
        });
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.end_container(true, '}')
    }

    pub fn begin_array(&mut self, key: Option<&str>) -> Result<()> {
        self.begin_value(key)?;
        self.out.push('[');
        self.stack.push(Frame {
            object: false,
            empty: true,
        });
        Ok(())
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.end_container(false, ']')
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn begin_value(&mut self, key: Option<&str>) -> Result<()> {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None if !self.out.is_empty() => err!(Error::write(key, "a root value was already written")),
            None if key.is_some() => err!(Error::write(key, "keyed value outside of an object")),
            None => return Ok(()),
        };
        match (frame.object, key) {
            (true, Some(key)) => {
                if !frame.empty {
                    self.out.push(',');
                }
                escape_str(key, &mut self.out);
                self.out.push(':');
            }
            (false, None) => {
                if !frame.empty {
                    self.out.push(',');
                }
            }
            (true, None) => err!(Error::write(key, "object member without a key")),
            (false, Some(_)) => err!(Error::write(key, "keyed value inside an array")),
        }
        frame.empty = false;
        Ok(())
    }

    fn end_container(&mut self, object: bool, close: char) -> Result<()> {
        match self.stack.pop() {
            Some(frame) if frame.object == object => {
                self.out.push(close);
                Ok(())
            }
            Some(frame) => {
                self.stack.push(frame);
                err!(Error::write(None, "unbalanced container"))
            }
            None => err!(Error::write(None, "unbalanced container")),
        }
    }

    fn write_u64_value(&mut self, key: Option<&str>, value: u64) -> Result<()> {
        self.begin_value(key)?;
        self.out.push_str(itoa::Buffer::new().format(value));
        Ok(())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: Option<&str>, value: &str) -> Result<()> {
        self.begin_value(key)?;
        escape_str(value, &mut self.out);
        Ok(())
    }

    fn write_bool_value(&mut self, key: Option<&str>, value: bool) -> Result<()> {
        self.begin_value(key)?;
        self.out.push_str(if value { "true" } else { "false" });
        Ok(())
    }

    fn write_i64_value(&mut self, key: Option<&str>, value: i64) -> Result<()> {
        self.begin_value(key)?;
        self.out.push_str(itoa::Buffer::new().format(value));
        Ok(())
    }

    fn write_f32_value(&mut self, key: Option<&str>, value: f32) -> Result<()> {
        if !value.is_finite() {
            err!(Error::write(key, "non-finite number"));
        }
        self.begin_value(key)?;
        self.out.push_str(ryu::Buffer::new().format_finite(value));
        Ok(())
    }

    fn write_f64_value(&mut self, key: Option<&str>, value: f64) -> Result<()> {
        if !value.is_finite() {
            err!(Error::write(key, "non-finite number"));
        }
        self.begin_value(key)?;
        self.out.push_str(ryu::Buffer::new().format_finite(value));
        Ok(())
    }

    fn write_null_value(&mut self, key: Option<&str>) -> Result<()> {
        self.begin_value(key)?;
        self.out.push_str("null");
        Ok(())
    }

    fn write_object_value(&mut self, key: Option<&str>, value: &dyn Parsable) -> Result<()> {
        self.begin_object(key)?;
        value.serialize(self)?;
        self.end_object()
    }

    fn write_collection_value(
        &mut self,
        key: Option<&str>,
        elements: &mut dyn Iterator<Item = &dyn Serialize>,
    ) -> Result<()> {
        self.begin_array(key)?;
        for element in elements {
            element.write_to(None, self)?;
        }
        self.end_array()
    }

    fn write_any_value(&mut self, key: Option<&str>, value: &Value) -> Result<()> {
        enum Layer<'value> {
            Array(slice::Iter<'value, Value>),
            Object(btree_map::Iter<'value, String, Value>),
        }
        let mut stack: Vec<Layer<'_>> = vec![];
        let mut key = key;
        let mut fragment = value;

        loop {
            match fragment {
                Value::Null => self.write_null_value(key)?,
                Value::Bool(b) => self.write_bool_value(key, *b)?,
                Value::Number(Number::U64(u)) => self.write_u64_value(key, *u)?,
                Value::Number(Number::I64(i)) => self.write_i64_value(key, *i)?,
                Value::Number(Number::F64(f)) => self.write_f64_value(key, *f)?,
                Value::String(s) => self.write_string_value(key, s)?,
                Value::Array(elements) => {
                    self.begin_array(key)?;
                    stack.push(Layer::Array(elements.iter()));
                }
                Value::Object(fields) => {
                    self.begin_object(key)?;
                    stack.push(Layer::Object(fields.iter()));
                }
            }

            loop {
                match stack.last_mut() {
                    Some(Layer::Array(elements)) => match elements.next() {
                        Some(next) => {
                            key = None;
                            fragment = next;
                            break;
                        }
                        None => self.end_array()?,
                    },
                    Some(Layer::Object(fields)) => match fields.next() {
                        Some((name, next)) => {
                            key = Some(name.as_str());
                            fragment = next;
                            break;
                        }
                        None => self.end_object()?,
                    },
                    None => return Ok(()),
                }
                stack.pop();
            }
        }
    }
}

// Clippy false positive: https://github.com/rust-lang/rust-clippy/issues/5169
#[allow(clippy::zero_prefixed_literal)]
fn escape_str(value: &str, out: &mut String) {
    out.push('"');

    let bytes = value.as_bytes();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let escape = ESCAPE[byte as usize];
        if escape == 0 {
            continue;
        }

        if start < i {
            out.push_str(&value[start..i]);
        }

        match escape {
            self::BB => out.push_str("\\b"),
            self::TT => out.push_str("\\t"),
            self::NN => out.push_str("\\n"),
            self::FF => out.push_str("\\f"),
            self::RR => out.push_str("\\r"),
            self::QU => out.push_str("\\\""),
            self::BS => out.push_str("\\\\"),
            _ => {
                static HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";
                out.push_str("\\u00");
                out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
                out.push(HEX_DIGITS[(byte & 0xF) as usize] as char);
            }
        }

        start = i + 1;
    }

    if start != bytes.len() {
        out.push_str(&value[start..]);
    }

    out.push('"');
}

const BB: u8 = b'b'; // \x08
const TT: u8 = b't'; // \x09
const NN: u8 = b'n'; // \x0A
const FF: u8 = b'f'; // \x0C
const RR: u8 = b'r'; // \x0D
const QU: u8 = b'"'; // \x22
const BS: u8 = b'\\'; // \x5C
const U: u8 = b'u'; // \x00...\x1F except the ones above

// Lookup table of escape sequences. A value of b'x' at index i means that byte
// i is escaped as "\x" in JSON. A value of 0 means that byte i is not escaped.
#[rustfmt::skip]
static ESCAPE: [u8; 256] = [
    //  1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    U,  U,  U,  U,  U,  U,  U,  U, BB, TT, NN,  U, FF, RR,  U,  U, // 0
    U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U, // 1
    0,  0, QU,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 2
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 3
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 4
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, BS,  0,  0,  0, // 5
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 6
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 7
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 8
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 9
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // A
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // B
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // C
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // D
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // E
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // F
];
