//! Geometry types used to resolve rounding into a clip shape.
//!
//! All values are logical pixels with a top-left origin, +X right and +Y down.

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
