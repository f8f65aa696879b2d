use std::fmt;

/// A rounding configuration that cannot be turned into a clip shape.
///
/// [`RoundingOptions`](super::RoundingOptions) accepts anything at
/// construction; these are raised where the options are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingError {
    /// Per-corner radii must hold exactly eight values.
    RadiiLength { len: usize },
    /// A radius is NaN or infinite. `index` is the slot in the per-corner
    /// sequence, or 0 for the uniform radius.
    NonFiniteRadius { index: usize },
}

impl fmt::Display for RoundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiiLength { len } => {
                write!(f, "corner radii must have {} entries, got {len}", super::RADII_LEN)
            }
            Self::NonFiniteRadius { index } => {
                write!(f, "corner radius at index {index} is not finite")
            }
        }
    }
}

impl std::error::Error for RoundingError {}
