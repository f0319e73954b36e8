//! Errors raised when building vectors from dynamically sized input.
//!
//! The magnitude computation itself is total and never fails; only the
//! conversions from slices and flat buffers can reject their input.

/// Errors that can occur converting untyped component data into [`Vector3`](crate::Vector3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3Error {
    /// A component slice did not hold exactly three values
    ComponentCount {
        /// Number of components actually supplied
        found: usize,
    },
    /// A flat component buffer length was not a multiple of three
    FlatLength {
        /// Length of the rejected buffer
        len: usize,
    },
}

impl std::fmt::Display for Vector3Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vector3Error::ComponentCount { found } => {
                write!(f, "Expected exactly 3 components, got {found}")
            }
            Vector3Error::FlatLength { len } => {
                write!(f, "Flat buffer length {len} is not a multiple of 3")
            }
        }
    }
}

impl std::error::Error for Vector3Error {}
