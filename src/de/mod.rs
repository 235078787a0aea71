//! Deserialization traits.
//!
//! Deserialization in odata-dto works by asking a [`ParseNode`] for typed
//! values. A parse node is an abstract view over one decoded wire value; the
//! JSON backend provides [`JsonParseNode`][crate::json::JsonParseNode], and
//! other formats only need to implement the handful of required methods of
//! the trait.
//!
//! ## Deserializing a primitive
//!
//! Every field type implements [`Deserialize`], which reads one value out of
//! a node. A null (or absent) node yields `Ok(None)` so that callers can
//! leave the corresponding attribute unset.
//!
//! ```rust
//! use odata_dto::de::{Deserialize, ParseNode};
//! use odata_dto::json::{self, JsonParseNode};
//!
//! let value = json::parse(r#"{"gracePeriodInMinutes": 5, "passcode": null}"#).unwrap();
//! let node = JsonParseNode::new(&value);
//!
//! let grace = node.child_node("gracePeriodInMinutes").unwrap().unwrap();
//! assert_eq!(i32::read_from(&*grace).unwrap(), Some(5));
//!
//! let passcode = node.child_node("passcode").unwrap().unwrap();
//! assert_eq!(String::read_from(&*passcode).unwrap(), None);
//! ```
//!
//! ## Deserializing a model
//!
//! Models are decoded by [`object_value`](trait.ParseNode.html#method.object_value):
//! the factory (usually [`Parsable::create_from_discriminator_value`]) picks
//! the concrete type, then every wire field is handed to the matching entry
//! of that type's [`FieldDeserializers`]. Fields no entry claims are kept in
//! the additional-data bag.

mod impls;

use std::any::type_name;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::byte_array::ByteArray;
use crate::enumeration::EnumValue;
use crate::error::{Error, Result};
use crate::parsable::{Parsable, ParsableFactory};
use crate::value::{Number, Value};
use crate::ODATA_TYPE_KEY;

/// Trait for data structures that can be read from a [`ParseNode`].
///
/// `Ok(None)` means the node is null: the field it feeds stays unset.
pub trait Deserialize: Sized {
    fn read_from(node: &dyn ParseNode) -> Result<Option<Self>>;
}

/// An abstract view over one decoded wire value.
///
/// Typed getters return `Ok(None)` for a null value and
/// [`Error::MalformedNode`] when the value is of another kind.
pub trait ParseNode {
    /// Whether this node holds an explicit null.
    fn is_null(&self) -> bool;

    /// The node stored under `name`, if this node is an object that has such
    /// a field. Non-object nodes have no children.
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>>;

    fn string_value(&self) -> Result<Option<String>>;

    fn bool_value(&self) -> Result<Option<bool>>;

    fn number_value(&self) -> Result<Option<Number>>;

    /// The elements of an array node, in source order.
    fn collection_nodes(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>>;

    /// Calls `visit` once for every field of an object node. A null node has
    /// no fields.
    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(&str, &dyn ParseNode) -> Result<()>,
    ) -> Result<()>;

    /// The whole node as an untyped [`Value`], for the additional-data bag.
    fn raw_value(&self) -> Result<Value>;

    fn i8_value(&self) -> Result<Option<i8>> {
        integer(self.number_value()?, "int8")
    }

    fn u8_value(&self) -> Result<Option<u8>> {
        integer(self.number_value()?, "byte")
    }

    fn i32_value(&self) -> Result<Option<i32>> {
        integer(self.number_value()?, "int32")
    }

    fn i64_value(&self) -> Result<Option<i64>> {
        integer(self.number_value()?, "int64")
    }

    fn f32_value(&self) -> Result<Option<f32>> {
        Ok(self.number_value()?.map(|n| n.as_f64() as f32))
    }

    fn f64_value(&self) -> Result<Option<f64>> {
        Ok(self.number_value()?.map(Number::as_f64))
    }

    fn byte_array_value(&self) -> Result<Option<ByteArray>> {
        literal(self.string_value()?, "base64", |s| {
            STANDARD.decode(s).ok().map(ByteArray)
        })
    }

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        literal(self.string_value()?, "date-time", |s| {
            DateTime::parse_from_rfc3339(s).ok()
        })
    }

    fn date_only_value(&self) -> Result<Option<NaiveDate>> {
        literal(self.string_value()?, "date", |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
        })
    }

    fn time_only_value(&self) -> Result<Option<NaiveTime>> {
        literal(self.string_value()?, "time", |s| {
            NaiveTime::parse_from_str(s, "%H:%M:%S%.f").ok()
        })
    }

    fn uuid_value(&self) -> Result<Option<Uuid>> {
        literal(self.string_value()?, "uuid", |s| Uuid::parse_str(s).ok())
    }
}

fn integer<T: TryFrom<i128>>(number: Option<Number>, expected: &'static str) -> Result<Option<T>> {
    match number {
        None => Ok(None),
        Some(n) => match n.as_i128().map(T::try_from) {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(_)) => err!(Error::malformed(expected, "out-of-range integer")),
            None => err!(Error::malformed(expected, "fractional number")),
        },
    }
}

fn literal<T>(
    s: Option<String>,
    kind: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>> {
    match s {
        None => Ok(None),
        Some(s) => match parse(&s) {
            Some(value) => Ok(Some(value)),
            None => err!(Error::InvalidLiteral { kind, value: s }),
        },
    }
}

impl<'a> dyn ParseNode + 'a {
    /// Reads a string node and parses it as a symbol of `E`.
    pub fn enum_value<E: EnumValue>(&self) -> Result<Option<E>> {
        match self.string_value()? {
            Some(s) => E::parse(&s).map(Some),
            None => Ok(None),
        }
    }

    /// Decodes an object node into a model.
    ///
    /// `factory` picks the concrete instance (and, for polymorphic families,
    /// its variant); every wire field is then fed to that instance's own
    /// field deserializers, and fields none of them claim are kept in its
    /// additional-data bag. The first error aborts the decode.
    pub fn object_value<T: Parsable>(&self, factory: ParsableFactory<T>) -> Result<Option<T>> {
        if self.is_null() {
            return Ok(None);
        }
        let mut instance = factory(self)?;
        let fields = instance.field_deserializers();
        self.for_each_field(&mut |name, node| match fields.get(name) {
            Some(deserialize) => deserialize(&mut instance, node),
            None => {
                ::tracing::trace!(
                    target: "odata_dto",
                    field = name,
                    model = type_name::<T>(),
                    "keeping undeclared field as additional data",
                );
                let value = node.raw_value()?;
                instance.additional_data_mut().insert(name.to_owned(), value);
                Ok(())
            }
        })?;
        Ok(Some(instance))
    }

    /// Reads an array of primitives, preserving element order.
    pub fn collection_of_primitive_values<T: Deserialize>(&self) -> Result<Option<Vec<T>>> {
        collection(self, T::read_from)
    }

    /// Reads an array of models, each built through `factory`.
    pub fn collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>> {
        collection(self, |node| node.object_value(factory))
    }

    /// Reads an array of enum symbols.
    pub fn collection_of_enum_values<E: EnumValue>(&self) -> Result<Option<Vec<E>>> {
        collection(self, |node| node.enum_value::<E>())
    }
}

fn collection<T>(
    node: &dyn ParseNode,
    mut element: impl FnMut(&dyn ParseNode) -> Result<Option<T>>,
) -> Result<Option<Vec<T>>> {
    let nodes = match node.collection_nodes()? {
        Some(nodes) => nodes,
        None => return Ok(None),
    };
    let mut out = Vec::with_capacity(nodes.len());
    for node in &nodes {
        match element(&**node)? {
            Some(value) => out.push(value),
            None => err!(Error::malformed(type_name::<T>(), "null collection element")),
        }
    }
    Ok(Some(out))
}

/// Decodes one field of a `T` out of a parse node.
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<()>>;

/// Registry of a model's field deserializers, keyed by wire field name.
///
/// The registry of a subtype starts from its base type's registry, lifted
/// with [`project`](Self::project), and then inserts its own fields. Since
/// [`insert`](Self::insert) replaces, a field the subtype redeclares is
/// decoded by the subtype's entry.
pub struct FieldDeserializers<T> {
    entries: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        FieldDeserializers {
            entries: HashMap::new(),
        }
    }

    /// Registers `deserializer` for wire field `name`, replacing any previous
    /// entry for that name.
    pub fn insert<F>(&mut self, name: &'static str, deserializer: F) -> &mut Self
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<()> + 'static,
    {
        self.entries.insert(name, Box::new(deserializer));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wire names of the registered fields, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Lifts this registry to an outer type `O` that owns a `T`: the base
    /// part of a subtype, or one variant of a polymorphic family.
    ///
    /// When `project` yields `None` the lifted deserializer fails with
    /// [`Error::TypeMismatch`].
    pub fn project<O: 'static>(self, project: fn(&mut O) -> Option<&mut T>) -> FieldDeserializers<O> {
        let mut lifted = FieldDeserializers::new();
        for (name, deserializer) in self.entries {
            lifted.insert(name, move |outer: &mut O, node: &dyn ParseNode| {
                match project(outer) {
                    Some(inner) => deserializer(inner, node),
                    None => err!(Error::TypeMismatch {
                        expected: type_name::<T>(),
                    }),
                }
            });
        }
        lifted
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        FieldDeserializers::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();
        f.debug_set().entries(names).finish()
    }
}

/// Reads `node` into `slot`. A null node leaves `slot` untouched.
pub fn read_into<T: Deserialize>(node: &dyn ParseNode, slot: &mut Option<T>) -> Result<()> {
    if let Some(value) = T::read_from(node)? {
        *slot = Some(value);
    }
    Ok(())
}

/// Picks the concrete member of a polymorphic family for `node`.
///
/// The `@odata.type` child of `node` is matched, case-sensitively, against
/// the discriminators of `table`; the first match wins. A missing, null or
/// unrecognized discriminator selects `fallback`, the family's base type.
/// Only a malformed discriminator node is an error.
pub fn discriminate<T>(
    node: &dyn ParseNode,
    table: &[(&str, fn() -> T)],
    fallback: fn() -> T,
) -> Result<T> {
    let discriminator = match node.child_node(ODATA_TYPE_KEY)? {
        Some(child) => child.string_value()?,
        None => None,
    };
    if let Some(discriminator) = discriminator {
        if let Some((_, make)) = table.iter().find(|(known, _)| *known == discriminator) {
            return Ok(make());
        }
        ::tracing::trace!(
            target: "odata_dto",
            discriminator = %discriminator,
            family = type_name::<T>(),
            "unrecognized discriminator, falling back to the base type",
        );
    }
    Ok(fallback())
}
