//! JSON backend.
//!
//! ```rust
//! use odata_dto::json;
//! use odata_dto::models::AndroidDeviceComplianceLocalAction;
//!
//! let action: AndroidDeviceComplianceLocalAction = json::from_str(r##"{
//!     "@odata.type": "#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode",
//!     "gracePeriodInMinutes": 5,
//!     "passcodeSignInFailureCountBeforeWipe": 6
//! }"##).unwrap();
//!
//! match &action {
//!     AndroidDeviceComplianceLocalAction::LockDeviceWithPasscode(lock) => {
//!         assert_eq!(lock.grace_period_in_minutes(), Some(&5));
//!         assert_eq!(lock.passcode_sign_in_failure_count_before_wipe(), Some(&6));
//!     }
//!     _ => panic!("dispatched to the wrong type"),
//! }
//!
//! assert_eq!(
//!     json::to_string(&action).unwrap(),
//!     concat!(
//!         r##"{"gracePeriodInMinutes":5,"##,
//!         r##""@odata.type":"#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode","##,
//!         r##""passcodeSignInFailureCountBeforeWipe":6}"##,
//!     ),
//! );
//! ```

mod de;
mod node;
mod ser;

pub use self::de::parse;
pub use self::node::JsonParseNode;
pub use self::ser::JsonSerializationWriter;

use crate::de::ParseNode;
use crate::error::{Error, Result};
use crate::parsable::{Parsable, ParsableFactory};
use crate::ser::SerializationWriter;
use crate::value::Value;

/// Decodes a JSON object into a model, dispatching on `@odata.type` when `T`
/// is a polymorphic family.
pub fn from_str<T: Parsable>(j: &str) -> Result<T> {
    from_str_with(j, T::create_from_discriminator_value)
}

/// Decodes a JSON object into a model built by `factory`.
pub fn from_str_with<T: Parsable>(j: &str, factory: ParsableFactory<T>) -> Result<T> {
    let value = parse(j)?;
    let node: &dyn ParseNode = &JsonParseNode::new(&value);
    match node.object_value(factory)? {
        Some(model) => Ok(model),
        None => err!(Error::malformed("object", "null")),
    }
}

/// Decodes a JSON array of models, keeping the source order.
pub fn collection_from_str<T: Parsable>(j: &str) -> Result<Vec<T>> {
    let value = parse(j)?;
    let node: &dyn ParseNode = &JsonParseNode::new(&value);
    match node.collection_of_object_values(T::create_from_discriminator_value)? {
        Some(models) => Ok(models),
        None => err!(Error::malformed("array", "null")),
    }
}

/// Encodes a model: its declared fields in schema order, base type first,
/// followed by its additional data.
pub fn to_string(model: &dyn Parsable) -> Result<String> {
    let mut writer = JsonSerializationWriter::new();
    writer.write_object_value(None, model)?;
    Ok(writer.into_string())
}

/// Encodes an untyped value.
pub fn value_to_string(value: &Value) -> Result<String> {
    let mut writer = JsonSerializationWriter::new();
    writer.write_any_value(None, value)?;
    Ok(writer.into_string())
}
