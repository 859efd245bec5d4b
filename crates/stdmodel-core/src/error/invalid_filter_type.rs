use super::Error;

/// Error when a value handed to a filter binding has a shape that cannot be
/// turned into column predicates.
///
/// Statically typed filters never produce this error. It comes from
/// dynamically shaped filters, for example a JSON value that is not an
/// object, or an object field holding a nested array.
#[derive(Debug)]
pub(super) struct InvalidFilterType {
    type_name: Box<str>,
}

impl std::error::Error for InvalidFilterType {}

impl core::fmt::Display for InvalidFilterType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid filter type: {}", self.type_name)
    }
}

impl Error {
    /// Creates an invalid filter type error naming the offending type.
    pub fn invalid_filter_type(type_name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFilterType(InvalidFilterType {
            type_name: type_name.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// filter type error.
    pub fn is_invalid_filter_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidFilterType(_)))
    }
}
