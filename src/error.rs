use thiserror::Error;

/// Error type returned when reading from a [`ParseNode`][crate::ParseNode] or
/// writing to a [`SerializationWriter`][crate::SerializationWriter] fails.
///
/// Set `RUST_LOG=odata_dto=debug` (or any `tracing` filter enabling the
/// `odata_dto` target) to see every error at the point where it is raised.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The node does not hold the requested kind of value.
    #[error("malformed node: expected {expected}, found {found}")]
    MalformedNode {
        expected: &'static str,
        found: &'static str,
    },

    /// A string node that should encode a typed literal does not parse.
    #[error("invalid {kind} literal `{value}`")]
    InvalidLiteral { kind: &'static str, value: String },

    /// Wire string that names none of the symbols of a closed enum.
    #[error("unrecognized value `{value}` for enum `{enum_name}`")]
    UnknownEnumSymbol {
        enum_name: &'static str,
        value: String,
    },

    /// A field deserializer was applied to a value of another type.
    #[error("field deserializer applied to a value that is not a `{expected}`")]
    TypeMismatch { expected: &'static str },

    /// The input text is not well-formed.
    #[error("syntax error at byte {offset}: {reason}")]
    Syntax { offset: usize, reason: &'static str },

    /// The serialization sink refused a value.
    #[error("cannot write {}: {reason}", describe_key(.key))]
    Write {
        key: Option<String>,
        reason: &'static str,
    },
}

fn describe_key(key: &Option<String>) -> String {
    match key {
        Some(key) => format!("`{}`", key),
        None => "value".to_owned(),
    }
}

/// Result type returned by parse nodes, serialization writers and models.
pub type Result<Ok, Err = Error> = std::result::Result<Ok, Err>;

impl Error {
    pub(crate) fn malformed(expected: &'static str, found: &'static str) -> Self {
        Error::MalformedNode { expected, found }
    }

    pub(crate) fn write(key: Option<&str>, reason: &'static str) -> Self {
        Error::Write {
            key: key.map(str::to_owned),
            reason,
        }
    }
}
