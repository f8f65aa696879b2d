//! Marduk rounding crate.
//!
//! Describes how an image's corners are rounded (circle, uniform radius or
//! per-corner radii) and resolves that description into a clip shape for the
//! decode or draw stage of the image pipeline.

pub mod coords;
pub mod logging;
pub mod rounding;

pub use rounding::{
    ClipShape, RoundingError, RoundingOptions, RoundingStage, CORNER_RADIUS_UNSET, RADII_LEN,
};
