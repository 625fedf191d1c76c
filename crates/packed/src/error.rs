//! Packing errors.

use std::fmt;

/// Packing result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error produced while parsing a type descriptor or packing a value.
///
/// Every variant is a caller input defect; nothing here is transient.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The type list and the value list have different lengths.
    #[error("type/value count mismatch: got {types} types and {values} values")]
    MismatchedLengths {
        /// Number of type descriptors.
        types: usize,
        /// Number of values.
        values: usize,
    },
    /// The descriptor matches none of the recognized shapes.
    #[error("unknown type: {0:?}")]
    UnknownType(String),
    /// A recognized shape with an invalid parameter, e.g. `uint7` or `bytes33`.
    #[error("invalid type {ty:?}: {reason}")]
    InvalidType {
        /// The offending descriptor.
        ty: String,
        /// What is wrong with it.
        reason: String,
    },
    /// A valid type whose value fails validation.
    #[error("invalid value for {ty}: {reason}")]
    InvalidValue {
        /// The type the value was packed as.
        ty: String,
        /// What is wrong with the value.
        reason: String,
    },
    /// Malformed UTF-16 input to the text encoder.
    #[error("invalid utf-16 input: unpaired surrogate {unit:#06x} at position {position}")]
    InvalidEncoding {
        /// Index of the offending code unit.
        position: usize,
        /// The offending code unit.
        unit: u16,
    },
    /// The requested operation is not implemented.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// Failure while packing one element of the input list.
    #[error("element {index} ({ty})")]
    Element {
        /// Position of the element in the input list.
        index: usize,
        /// Descriptor of the element, as supplied.
        ty: String,
        /// The underlying failure.
        #[source]
        source: Box<Self>,
    },
}

/// The class of an [`Error`], independent of where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The type and value lists differ in length.
    MismatchedLengths,
    /// A descriptor matches none of the known shapes.
    UnknownType,
    /// A known shape with a bad width or size.
    InvalidType,
    /// A value rejected by an otherwise valid type.
    InvalidValue,
    /// Malformed UTF-16 text.
    InvalidEncoding,
    /// A request this packer does not implement.
    UnsupportedOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MismatchedLengths => "mismatched lengths",
            Self::UnknownType => "unknown type",
            Self::InvalidType => "invalid type",
            Self::InvalidValue => "invalid value",
            Self::InvalidEncoding => "invalid encoding",
            Self::UnsupportedOperation => "unsupported operation",
        };
        f.write_str(s)
    }
}

impl Error {
    pub(crate) fn invalid_type(ty: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidType { ty: ty.into(), reason: reason.into() }
    }

    pub(crate) fn invalid_value(ty: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self::InvalidValue { ty: ty.to_string(), reason: reason.into() }
    }

    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedOperation(what.into())
    }

    /// Wraps `self` with the position and descriptor of the element that caused it.
    pub(crate) fn at(self, index: usize, ty: impl Into<String>) -> Self {
        Self::Element { index, ty: ty.into(), source: Box::new(self) }
    }

    /// Returns the error with any [`Error::Element`] context stripped.
    pub fn root(&self) -> &Self {
        let mut err = self;
        while let Self::Element { source, .. } = err {
            err = source;
        }
        err
    }

    /// Returns the class of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MismatchedLengths { .. } => ErrorKind::MismatchedLengths,
            Self::UnknownType(_) => ErrorKind::UnknownType,
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::Element { source, .. } => source.kind(),
        }
    }

    /// Returns the `(index, descriptor)` of every element wrapping the root error, outermost
    /// first. Empty for an error raised outside of any element.
    pub fn path(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        std::iter::successors(Some(self), |err| match err {
            Self::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        })
        .filter_map(|err| match err {
            Self::Element { index, ty, .. } => Some((*index, ty.as_str())),
            _ => None,
        })
    }

    /// Returns the index of the input element that caused the error, if known.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Element { index, .. } => Some(*index),
            _ => None,
        }
    }
}
