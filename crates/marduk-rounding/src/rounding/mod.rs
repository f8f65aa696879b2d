//! Corner rounding for images.
//!
//! [`RoundingOptions`] is the value attached to an image request. The decode
//! and draw stages read it through [`RoundingOptions::stage`] and
//! [`RoundingOptions::clip_shape`].

mod clip;
mod error;
mod options;

pub use clip::{ClipShape, RoundingStage};
pub use error::RoundingError;
pub use options::{RoundingOptions, CORNER_RADIUS_UNSET, RADII_LEN};
