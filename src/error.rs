//! Error types for primitive containers.
//!
//! Every fallible operation in this crate validates its arguments before
//! touching any state, so an error always means nothing was mutated.

/// Represents a value that does not fit into a narrower primitive type.
///
/// # Examples
///
/// ```rust
/// use primvec::error::NarrowingCastError;
///
/// let error = NarrowingCastError {
///     source_type: "i64",
///     target_type: "i32",
///     value: "4294967296".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "cannot convert i64 to i32: 4294967296"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowingCastError {
    /// The name of the type being converted from.
    pub source_type: &'static str,
    /// The name of the type being converted to.
    pub target_type: &'static str,
    /// The rendered value that could not be converted.
    pub value: String,
}

impl std::fmt::Display for NarrowingCastError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot convert {} to {}: {}",
            self.source_type, self.target_type, self.value
        )
    }
}

impl std::error::Error for NarrowingCastError {}

/// Errors raised by container constructors and conversions.
///
/// # Examples
///
/// ```rust
/// use primvec::error::PrimitiveError;
///
/// let error = PrimitiveError::LengthMismatch { keys: 3, values: 2 };
/// assert_eq!(
///     format!("{}", error),
///     "key and value arrays differ in length: 3 keys, 2 values"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    /// A hash table was requested with zero slots.
    InvalidCapacity {
        /// The rejected capacity.
        requested: usize,
    },
    /// A load factor outside `[MIN_LOAD_FACTOR, 1)`, or not finite.
    InvalidLoadFactor {
        /// The rejected load factor.
        requested: f64,
    },
    /// Parallel key and value arrays of different lengths.
    LengthMismatch {
        /// Length of the key array.
        keys: usize,
        /// Length of the value array.
        values: usize,
    },
    /// Keys passed to a pre-sorted constructor are not strictly increasing.
    UnsortedKeys {
        /// Index of the first key that is not greater than its predecessor.
        position: usize,
    },
    /// The same key appears twice after sorting.
    DuplicateKey {
        /// Index (in sorted order) of the second occurrence.
        position: usize,
    },
    /// A value could not be narrowed without loss.
    NarrowingCast(NarrowingCastError),
}

impl std::fmt::Display for PrimitiveError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(formatter, "initial capacity must be positive, got {requested}")
            }
            Self::InvalidLoadFactor { requested } => {
                write!(formatter, "load factor must lie in [0.01, 1), got {requested}")
            }
            Self::LengthMismatch { keys, values } => write!(
                formatter,
                "key and value arrays differ in length: {keys} keys, {values} values"
            ),
            Self::UnsortedKeys { position } => write!(
                formatter,
                "keys are not strictly increasing at position {position}"
            ),
            Self::DuplicateKey { position } => {
                write!(formatter, "duplicate key at sorted position {position}")
            }
            Self::NarrowingCast(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for PrimitiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NarrowingCast(error) => Some(error),
            _ => None,
        }
    }
}

impl From<NarrowingCastError> for PrimitiveError {
    fn from(error: NarrowingCastError) -> Self {
        Self::NarrowingCast(error)
    }
}
