//! The model-level traits.
//!
//! Every model type, concrete or a polymorphic family, implements
//! [`Parsable`]. The trait is usually derived:
//!
//! ```rust
//! use odata_dto::{json, AdditionalDataHolder, Parsable};
//!
//! #[derive(Parsable, Clone, Debug, PartialEq)]
//! struct Bookmark {
//!     #[odata(odata_type)]
//!     odata_type: Option<String>,
//!     display_name: Option<String>,
//!     #[odata(additional_data)]
//!     additional_data: odata_dto::AdditionalData,
//! }
//!
//! let bookmark: Bookmark = json::from_str(r#"{"displayName":"Home","pinned":true}"#).unwrap();
//! assert_eq!(bookmark.display_name().map(String::as_str), Some("Home"));
//! assert!(bookmark.additional_data().contains_key("pinned"));
//! ```

use crate::de::{FieldDeserializers, ParseNode};
use crate::error::Result;
use crate::ser::SerializationWriter;
use crate::value::AdditionalData;

/// Builds the instance that will receive the fields of a wire object.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T>;

/// Access to the bag of wire fields a model does not declare.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    fn set_additional_data(&mut self, data: AdditionalData) {
        *self.additional_data_mut() = data;
    }
}

/// A model type: something that can be built from a parse node and written
/// to a serialization writer.
pub trait Parsable: AdditionalDataHolder + 'static {
    /// Creates the zero-value instance a wire object decodes into. For a
    /// polymorphic family this is where the `@odata.type` dispatch happens.
    fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self>
    where
        Self: Sized;

    /// The deserializers of every field this instance declares, inherited
    /// ones included.
    fn field_deserializers(&self) -> FieldDeserializers<Self>
    where
        Self: Sized;

    /// Writes the declared fields, base type first.
    fn serialize_fields(&self, writer: &mut dyn SerializationWriter) -> Result<()>;

    /// Whether `name` is the wire name of a declared field, inherited ones
    /// and `@odata.type` included.
    fn declares_field(&self, name: &str) -> bool;

    /// Writes the declared fields followed by the additional data. Bag
    /// entries named like a declared field are not written.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        self.serialize_fields(writer)?;
        let data = self.additional_data();
        if !data.keys().any(|key| self.declares_field(key)) {
            return writer.write_additional_data(data);
        }
        let unclaimed: AdditionalData = data
            .iter()
            .filter(|(key, _)| {
                let claimed = self.declares_field(key);
                if claimed {
                    tracing::debug!(
                        target: "odata_dto",
                        key = %key,
                        "additional data shadowed by a declared field"
                    );
                }
                !claimed
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        writer.write_additional_data(&unclaimed)
    }

    fn odata_type(&self) -> Option<&str>;

    fn set_odata_type(&mut self, odata_type: Option<String>);
}
