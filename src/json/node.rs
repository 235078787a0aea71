use crate::de::ParseNode;
use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// A [`ParseNode`] over a parsed JSON [`Value`].
#[derive(Clone, Copy, Debug)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        JsonParseNode { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn mismatch<T>(&self, expected: &'static str) -> Result<Option<T>> {
        err!(Error::malformed(expected, self.value.kind()))
    }
}

fn boxed(value: &Value) -> Box<dyn ParseNode + '_> {
    Box::new(JsonParseNode::new(value))
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>> {
        match self.value {
            Value::Object(fields) => Ok(fields.get(name).map(boxed)),
            _ => Ok(None),
        }
    }

    fn string_value(&self) -> Result<Option<String>> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => self.mismatch("string"),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>> {
        match *self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(b)),
            _ => self.mismatch("boolean"),
        }
    }

    fn number_value(&self) -> Result<Option<Number>> {
        match *self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(Some(n)),
            _ => self.mismatch("number"),
        }
    }

    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(elements) => Ok(Some(elements.iter().map(boxed).collect())),
            _ => self.mismatch("array"),
        }
    }

    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(&str, &dyn ParseNode) -> Result<()>,
    ) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            Value::Object(fields) => {
                for (name, value) in fields {
                    visit(name, &JsonParseNode::new(value))?;
                }
                Ok(())
            }
            other => err!(Error::malformed("object", other.kind())),
        }
    }

    fn raw_value(&self) -> Result<Value> {
        Ok(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parse;

    #[test]
    fn typed_getters() {
        let value = parse(r#"{"s": "x", "b": true, "n": 300, "z": null, "a": [1, 2]}"#).unwrap();
        let node = JsonParseNode::new(&value);
        assert_eq!(node.value(), &value);
        let child = |name: &str| node.child_node(name).unwrap().unwrap();

        assert_eq!(child("s").string_value(), Ok(Some("x".to_owned())));
        assert_eq!(child("b").bool_value(), Ok(Some(true)));
        assert_eq!(child("n").i32_value(), Ok(Some(300)));
        assert_eq!(child("z").string_value(), Ok(None));
        assert_eq!(child("z").i64_value(), Ok(None));
        assert!(node.child_node("missing").unwrap().is_none());
        assert_eq!(child("a").collection_nodes().unwrap().map(|nodes| nodes.len()), Some(2));
    }

    #[test]
    fn kind_mismatch_is_malformed() {
        let value = parse(r#"{"n": 300}"#).unwrap();
        let node = JsonParseNode::new(&value);
        let n = node.child_node("n").unwrap().unwrap();

        assert_eq!(n.string_value(), Err(Error::malformed("string", "number")));
        assert_eq!(n.u8_value(), Err(Error::malformed("byte", "out-of-range integer")));
        assert_eq!(node.bool_value(), Err(Error::malformed("boolean", "object")));
    }

    #[test]
    fn scalars_have_no_children() {
        let value = Value::from("text");
        let node = JsonParseNode::new(&value);
        assert!(node.child_node("@odata.type").unwrap().is_none());
        assert_eq!(
            node.for_each_field(&mut |_, _| Ok(())),
            Err(Error::malformed("object", "string")),
        );
    }

    #[test]
    fn fields_are_visited_in_key_order() {
        let value = parse(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let mut names = Vec::new();
        JsonParseNode::new(&value)
            .for_each_field(&mut |name, _| {
                names.push(name.to_owned());
                Ok(())
            })
            .unwrap();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
