//! Closed, string-backed enumerations.
//!
//! A Graph enum travels as one of a fixed set of strings. Deriving
//! [`EnumValue`] on a unit enum maps each variant to its lower-camel-case
//! name, and wires the enum into [`Serialize`] and [`Deserialize`]:
//!
//! ```rust
//! use odata_dto::EnumValue;
//!
//! #[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq)]
//! enum RunAsAccountType {
//!     System,
//!     User,
//!     #[odata(rename = "unknownFutureValue")]
//!     Unknown,
//! }
//!
//! assert_eq!(RunAsAccountType::System.as_str(), "system");
//! assert_eq!(RunAsAccountType::parse("unknownFutureValue").unwrap(), RunAsAccountType::Unknown);
//! assert!(RunAsAccountType::parse("System").is_err());
//! ```
//!
//! Flag enums, whose wire form is a comma-separated list of symbols, are
//! held in a [`Flags`] set.

use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

use crate::de::{Deserialize, ParseNode};
use crate::error::{Error, Result};
use crate::ser::{SerializationWriter, Serialize};

/// A closed set of symbols, each with one canonical wire string.
pub trait EnumValue: Copy + Eq + 'static {
    /// Name of the enum, for error messages.
    const NAME: &'static str;

    /// Every symbol with its wire string, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    fn as_str(&self) -> &'static str;

    /// Parses a wire string. Matching is exact; an unrecognized string is an
    /// [`Error::UnknownEnumSymbol`].
    fn parse(s: &str) -> Result<Self> {
        match Self::VARIANTS.iter().find(|(name, _)| *name == s) {
            Some(&(_, symbol)) => Ok(symbol),
            None => err!(Error::UnknownEnumSymbol {
                enum_name: Self::NAME,
                value: s.to_owned(),
            }),
        }
    }
}

fn position<E: EnumValue>(symbol: &E) -> usize {
    E::VARIANTS
        .iter()
        .position(|(_, known)| known == symbol)
        .unwrap_or(usize::MAX)
}

/// A set of symbols of a flag enum.
///
/// The wire form lists the symbols separated by commas. Decoding tolerates
/// whitespace around each symbol and repeated symbols; encoding always lists
/// the symbols in declaration order.
#[derive(Clone, PartialEq, Eq)]
pub struct Flags<E> {
    symbols: Vec<E>,
}

impl<E: EnumValue> Flags<E> {
    pub fn new() -> Self {
        Flags {
            symbols: Vec::new(),
        }
    }

    /// Parses a comma-separated symbol list. An empty string is the empty
    /// set.
    pub fn parse(s: &str) -> Result<Self> {
        let mut flags = Flags::new();
        for symbol in s.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            flags.insert(E::parse(symbol)?);
        }
        Ok(flags)
    }

    /// Adds `symbol`. Returns whether it was absent.
    pub fn insert(&mut self, symbol: E) -> bool {
        if self.contains(symbol) {
            return false;
        }
        let at = self
            .symbols
            .iter()
            .position(|known| position(known) > position(&symbol))
            .unwrap_or(self.symbols.len());
        self.symbols.insert(at, symbol);
        true
    }

    /// Removes `symbol`. Returns whether it was present.
    pub fn remove(&mut self, symbol: E) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|known| *known != symbol);
        self.symbols.len() != before
    }

    pub fn contains(&self, symbol: E) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        self.symbols.iter().copied()
    }
}

impl<E: EnumValue> Default for Flags<E> {
    fn default() -> Self {
        Flags::new()
    }
}

impl<E: EnumValue> FromIterator<E> for Flags<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut flags = Flags::new();
        for symbol in iter {
            flags.insert(symbol);
        }
        flags
    }
}

impl<E: EnumValue> fmt::Display for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(symbol.as_str())?;
        }
        Ok(())
    }
}

impl<E: EnumValue> fmt::Debug for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.symbols.iter().map(EnumValue::as_str))
            .finish()
    }
}

impl<E: EnumValue> FromStr for Flags<E> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Flags::parse(s)
    }
}

impl<E: EnumValue> Serialize for Flags<E> {
    fn write_to(&self, key: Option<&str>, writer: &mut dyn SerializationWriter) -> Result<()> {
        writer.write_string_value(key, &self.to_string())
    }
}

impl<E: EnumValue> Deserialize for Flags<E> {
    fn read_from(node: &dyn ParseNode) -> Result<Option<Self>> {
        match node.string_value()? {
            Some(s) => Flags::parse(&s).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnumValue;

    #[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq)]
    enum ConditionalAccessConditions {
        None,
        Application,
        Users,
        DevicePlatform,
        #[odata(rename = "unknownFutureValue")]
        Unknown,
    }

    use self::ConditionalAccessConditions::*;

    #[test]
    fn wire_strings_are_lower_camel_case() {
        assert_eq!(DevicePlatform.as_str(), "devicePlatform");
        assert_eq!(Unknown.as_str(), "unknownFutureValue");
        assert_eq!(DevicePlatform.to_string(), "devicePlatform");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(ConditionalAccessConditions::parse("users"), Ok(Users));
        assert_eq!(
            ConditionalAccessConditions::parse("Users"),
            Err(Error::UnknownEnumSymbol {
                enum_name: "ConditionalAccessConditions",
                value: "Users".to_owned(),
            }),
        );
    }

    #[test]
    fn every_symbol_survives_a_round_trip() {
        for &(name, symbol) in ConditionalAccessConditions::VARIANTS {
            assert_eq!(symbol.as_str(), name);
            assert_eq!(ConditionalAccessConditions::parse(name), Ok(symbol));
            assert_eq!(name.parse::<ConditionalAccessConditions>(), Ok(symbol));
        }
    }

    #[test]
    fn flags_are_written_in_declaration_order() {
        let flags: Flags<ConditionalAccessConditions> =
            vec![DevicePlatform, Application, Users, Application].into_iter().collect();
        assert_eq!(flags.len(), 3);
        assert_eq!(flags.to_string(), "application,users,devicePlatform");
    }

    #[test]
    fn flags_parse_trims_and_deduplicates() {
        let flags = Flags::<ConditionalAccessConditions>::parse(" users ,application,users").unwrap();
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![Application, Users]);
        assert!(Flags::<ConditionalAccessConditions>::parse("").unwrap().is_empty());
    }

    #[test]
    fn flags_reject_unknown_symbols() {
        let err = Flags::<ConditionalAccessConditions>::parse("users,location").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownEnumSymbol {
                enum_name: "ConditionalAccessConditions",
                value: "location".to_owned(),
            },
        );
    }

    #[test]
    fn flags_insert_and_remove() {
        let mut flags = Flags::new();
        assert!(flags.insert(Users));
        assert!(!flags.insert(Users));
        assert!(flags.insert(None));
        assert_eq!(flags.to_string(), "none,users");
        assert!(flags.remove(None));
        assert!(!flags.remove(None));
        assert_eq!(format!("{:?}", flags), r#"{"users"}"#);
    }
}
