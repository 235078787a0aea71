use std::collections::BTreeMap;
use std::mem;

use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Parse a JSON document into a [`Value`].
///
/// The parser does not recurse, so deeply nested input cannot overflow the
/// stack; nesting beyond a fixed depth is still rejected. Of duplicate object
/// keys, the last one wins.
///
/// ```rust
/// use odata_dto::{json, Value};
///
/// let value = json::parse(r##"{"@odata.type": "#microsoft.graph.entity", "id": "42"}"##).unwrap();
/// match value {
///     Value::Object(fields) => assert_eq!(fields["id"], Value::from("42")),
///     _ => unreachable!(),
/// }
/// ```
pub fn parse(j: &str) -> Result<Value> {
    let mut de = Deserializer {
        input: j.as_bytes(),
        pos: 0,
        buffer: Vec::new(),
    };
    let value = de.parse_value()?;
    if de.parse_whitespace().is_some() {
        return de.syntax("trailing characters");
    }
    Ok(value)
}

const MAX_DEPTH: usize = 256;

struct Deserializer<'a> {
    input: &'a [u8],
    pos: usize,
    buffer: Vec<u8>,
}

enum Layer {
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>, String),
}

impl<'a> Deserializer<'a> {
    fn parse_value(&mut self) -> Result<Value> {
        let mut stack: Vec<Layer> = Vec::new();

        'values: loop {
            let mut value = match self.parse_whitespace() {
                Some(b'n') => {
                    self.parse_ident(b"null")?;
                    Value::Null
                }
                Some(b't') => {
                    self.parse_ident(b"true")?;
                    Value::Bool(true)
                }
                Some(b'f') => {
                    self.parse_ident(b"false")?;
                    Value::Bool(false)
                }
                Some(b'-') | Some(b'0'..=b'9') => Value::Number(self.parse_number()?),
                Some(b'"') => {
                    self.bump();
                    Value::String(self.parse_str()?)
                }
                Some(b'[') => {
                    self.bump();
                    if stack.len() == MAX_DEPTH {
                        return self.syntax("nesting too deep");
                    }
                    if self.parse_whitespace() == Some(b']') {
                        self.bump();
                        Value::Array(Vec::new())
                    } else {
                        stack.push(Layer::Array(Vec::new()));
                        continue 'values;
                    }
                }
                Some(b'{') => {
                    self.bump();
                    if stack.len() == MAX_DEPTH {
                        return self.syntax("nesting too deep");
                    }
                    if self.parse_whitespace() == Some(b'}') {
                        self.bump();
                        Value::Object(BTreeMap::new())
                    } else {
                        let key = self.parse_key()?;
                        stack.push(Layer::Object(BTreeMap::new(), key));
                        continue 'values;
                    }
                }
                Some(_) => return self.syntax("expected value"),
                None => return self.syntax("unexpected end of input"),
            };

            loop {
                let layer = match stack.pop() {
                    Some(layer) => layer,
                    None => return Ok(value),
                };
                match layer {
                    Layer::Array(mut elements) => {
                        elements.push(value);
                        match self.next_token() {
                            Some(b',') => {
                                stack.push(Layer::Array(elements));
                                continue 'values;
                            }
                            Some(b']') => value = Value::Array(elements),
                            _ => return self.syntax("expected `,` or `]`"),
                        }
                    }
                    Layer::Object(mut fields, key) => {
                        fields.insert(key, value);
                        match self.next_token() {
                            Some(b',') => {
                                let key = self.parse_key()?;
                                stack.push(Layer::Object(fields, key));
                                continue 'values;
                            }
                            Some(b'}') => value = Value::Object(fields),
                            _ => return self.syntax("expected `,` or `}`"),
                        }
                    }
                }
            }
        }
    }

    fn syntax<T>(&self, reason: &'static str) -> Result<T> {
        err!(Error::Syntax {
            offset: self.pos,
            reason,
        })
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.bump();
        Some(byte)
    }

    /// Skips whitespace and peeks at the next byte.
    fn parse_whitespace(&mut self) -> Option<u8> {
        loop {
            match self.peek() {
                Some(b' ') | Some(b'\n') | Some(b'\t') | Some(b'\r') => self.bump(),
                other => return other,
            }
        }
    }

    fn next_token(&mut self) -> Option<u8> {
        let byte = self.parse_whitespace()?;
        self.bump();
        Some(byte)
    }

    fn parse_ident(&mut self, ident: &[u8]) -> Result<()> {
        if self.input[self.pos..].starts_with(ident) {
            self.pos += ident.len();
            Ok(())
        } else {
            self.syntax("expected literal")
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        if self.next_token() != Some(b'"') {
            return self.syntax("expected string key");
        }
        let key = self.parse_str()?;
        if self.next_token() != Some(b':') {
            return self.syntax("expected `:`");
        }
        Ok(key)
    }

    /// Parses the rest of a string whose opening quote was consumed.
    fn parse_str(&mut self) -> Result<String> {
        self.buffer.clear();
        let mut start = self.pos;
        loop {
            match self.peek() {
                None => return self.syntax("unterminated string"),
                Some(b'"') => {
                    self.buffer.extend_from_slice(&self.input[start..self.pos]);
                    self.bump();
                    break;
                }
                Some(b'\\') => {
                    self.buffer.extend_from_slice(&self.input[start..self.pos]);
                    self.bump();
                    self.parse_escape()?;
                    start = self.pos;
                }
                Some(0x00..=0x1F) => return self.syntax("control character in string"),
                Some(_) => self.bump(),
            }
        }
        match String::from_utf8(mem::take(&mut self.buffer)) {
            Ok(s) => Ok(s),
            Err(_) => self.syntax("invalid utf-8 in string"),
        }
    }

    fn parse_escape(&mut self) -> Result<()> {
        let byte = match self.next() {
            Some(b'"') => b'"',
            Some(b'\\') => b'\\',
            Some(b'/') => b'/',
            Some(b'b') => b'\x08',
            Some(b'f') => b'\x0c',
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(b'u') => {
                let c = match self.decode_hex_escape()? {
                    0xDC00..=0xDFFF => return self.syntax("lone trailing surrogate"),
                    n1 @ 0xD800..=0xDBFF => {
                        if self.next() != Some(b'\\') || self.next() != Some(b'u') {
                            return self.syntax("lone leading surrogate");
                        }
                        let n2 = self.decode_hex_escape()?;
                        if !(0xDC00..=0xDFFF).contains(&n2) {
                            return self.syntax("invalid surrogate pair");
                        }
                        let n = ((u32::from(n1) - 0xD800) << 10 | (u32::from(n2) - 0xDC00)) + 0x1_0000;
                        match char::from_u32(n) {
                            Some(c) => c,
                            None => return self.syntax("invalid unicode escape"),
                        }
                    }
                    n => match char::from_u32(u32::from(n)) {
                        Some(c) => c,
                        None => return self.syntax("invalid unicode escape"),
                    },
                };
                let mut utf8 = [0; 4];
                self.buffer
                    .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                return Ok(());
            }
            _ => return self.syntax("invalid escape"),
        };
        self.buffer.push(byte);
        Ok(())
    }

    fn decode_hex_escape(&mut self) -> Result<u16> {
        let mut n = 0;
        for _ in 0..4 {
            let digit = match self.next() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => return self.syntax("invalid hex escape"),
            };
            n = (n << 4) | u16::from(digit);
        }
        Ok(n)
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.bump();
        }
        match self.next() {
            Some(b'0') => {}
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return self.syntax("invalid number"),
        }
        let mut integral = true;
        if self.peek() == Some(b'.') {
            integral = false;
            self.bump();
            if !matches!(self.next(), Some(b'0'..=b'9')) {
                return self.syntax("invalid number");
            }
            self.skip_digits();
        }
        if let Some(b'e') | Some(b'E') = self.peek() {
            integral = false;
            self.bump();
            if let Some(b'+') | Some(b'-') = self.peek() {
                self.bump();
            }
            if !matches!(self.next(), Some(b'0'..=b'9')) {
                return self.syntax("invalid number");
            }
            self.skip_digits();
        }

        // The slice holds ASCII only.
        let text = String::from_utf8_lossy(&self.input[start..self.pos]);
        if integral {
            if negative {
                if let Ok(i) = text.parse::<i64>() {
                    return Ok(Number::from(i));
                }
            } else if let Ok(u) = text.parse::<u64>() {
                return Ok(Number::U64(u));
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::F64(f)),
            _ => self.syntax("number out of range"),
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(fields: Vec<(&str, Value)>) -> Value {
        Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    #[test]
    fn scalars() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse(" true "), Ok(Value::Bool(true)));
        assert_eq!(parse("false"), Ok(Value::Bool(false)));
        assert_eq!(parse("0"), Ok(Value::Number(Number::U64(0))));
        assert_eq!(parse("-12"), Ok(Value::Number(Number::I64(-12))));
        assert_eq!(parse("-0"), Ok(Value::Number(Number::U64(0))));
        assert_eq!(parse("2.5e1"), Ok(Value::Number(Number::F64(25.0))));
        assert_eq!(
            parse("18446744073709551616"),
            Ok(Value::Number(Number::F64(18446744073709551616.0))),
        );
    }

    #[test]
    fn strings_and_escapes() {
        assert_eq!(parse(r#""a\"b\\c\/d\n""#), Ok(Value::from("a\"b\\c/d\n")));
        assert_eq!(parse(r#""été""#), Ok(Value::from("été")));
        assert_eq!(parse(r#""\ud83d\ude00""#), Ok(Value::from("😀")));
        assert_eq!(parse(r#""h\u00e9h\u00E9""#), Ok(Value::from("héhé")));
    }

    #[test]
    fn nested_containers() {
        let value = parse(r#"{"a": [1, {"b": null}, []], "c": {}}"#).unwrap();
        assert_eq!(
            value,
            object(vec![
                (
                    "a",
                    Value::Array(vec![
                        Value::from(1_u64),
                        object(vec![("b", Value::Null)]),
                        Value::Array(vec![]),
                    ]),
                ),
                ("c", object(vec![])),
            ]),
        );
    }

    #[test]
    fn last_duplicate_key_wins() {
        assert_eq!(
            parse(r#"{"id": "1", "id": "2"}"#),
            Ok(object(vec![("id", Value::from("2"))])),
        );
    }

    #[test]
    fn syntax_errors() {
        for (input, reason) in &[
            ("", "unexpected end of input"),
            ("[1,]", "expected value"),
            ("[1 2]", "expected `,` or `]`"),
            (r#"{"a" 1}"#, "expected `:`"),
            (r#"{"a": 1,}"#, "expected string key"),
            ("nul", "expected literal"),
            (r#""abc"#, "unterminated string"),
            (r#""\x""#, "invalid escape"),
            (r#""\ud800""#, "lone leading surrogate"),
            ("01", "trailing characters"),
            ("1.", "invalid number"),
            ("1e400", "number out of range"),
        ] {
            match parse(input) {
                Err(Error::Syntax { reason: got, .. }) => assert_eq!(got, *reason, "{}", input),
                other => panic!("{}: unexpected {:?}", input, other),
            }
        }
    }

    #[test]
    fn deep_nesting_is_rejected_without_overflow() {
        let deep = "[".repeat(100_000);
        match parse(&deep) {
            Err(Error::Syntax { reason, .. }) => assert_eq!(reason, "nesting too deep"),
            other => panic!("unexpected {:?}", other),
        }
        let ok = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(parse(&ok).is_ok());
    }
}
