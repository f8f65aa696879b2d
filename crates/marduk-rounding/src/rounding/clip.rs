use crate::coords::{CornerRadii, Rect};

use super::{RoundingError, RoundingOptions, CORNER_RADIUS_UNSET, RADII_LEN};

/// Where in the image pipeline the rounding mask is applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RoundingStage {
    /// Nothing to round.
    None,
    /// Bake the mask into the decoded bitmap.
    Decode,
    /// Clip while drawing.
    Draw,
}

/// Concrete clip geometry for one image.
///
/// Radii are reported as configured; clamping them to the bounds is left to
/// the compositor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClipShape {
    None,
    /// Ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect },
    RoundedRect { bounds: Rect, radii: CornerRadii },
}

impl ClipShape {
    #[inline]
    pub fn is_clipped(&self) -> bool {
        !matches!(self, ClipShape::None)
    }

    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        match *self {
            ClipShape::None => None,
            ClipShape::Ellipse { bounds } | ClipShape::RoundedRect { bounds, .. } => Some(bounds),
        }
    }

    /// The shape as rounded-rect radii. An ellipse is a rounded rect whose
    /// corners are the half-extents of its bounds.
    pub fn corner_radii(&self) -> CornerRadii {
        match *self {
            ClipShape::None => CornerRadii::zero(),
            ClipShape::Ellipse { bounds } => {
                let r = bounds.inscribed_radii();
                CornerRadii::new(r, r, r, r)
            }
            ClipShape::RoundedRect { radii, .. } => radii,
        }
    }
}

impl RoundingOptions {
    /// Pipeline stage that should apply these options.
    ///
    /// Reads the mode flags only and does not validate radii, so options that
    /// [`clip_shape`](Self::clip_shape) rejects still report a stage.
    pub fn stage(&self) -> RoundingStage {
        if !self.is_circular() && !self.has_rounded_corners() {
            RoundingStage::None
        } else if self.is_force_round_at_decode() {
            RoundingStage::Decode
        } else {
            RoundingStage::Draw
        }
    }

    /// Resolves these options against `bounds`.
    ///
    /// Circular wins over radii, and per-corner radii win over the uniform
    /// radius. This is the only place malformed radii are rejected.
    pub fn clip_shape(&self, bounds: Rect) -> Result<ClipShape, RoundingError> {
        let shape = self.resolve(bounds)?;
        log::trace!("rounding {self} -> {shape:?}");
        Ok(shape)
    }

    fn resolve(&self, bounds: Rect) -> Result<ClipShape, RoundingError> {
        if self.is_circular() {
            return Ok(ClipShape::Ellipse { bounds });
        }

        if let Some(radii) = self.corner_radii() {
            let pairs = <[f32; RADII_LEN]>::try_from(radii)
                .map_err(|_| self.reject(RoundingError::RadiiLength { len: radii.len() }))?;

            if let Some(index) = pairs.iter().position(|r| !r.is_finite()) {
                return Err(self.reject(RoundingError::NonFiniteRadius { index }));
            }

            let radii = CornerRadii::from_xy_pairs(pairs);
            return Ok(ClipShape::RoundedRect { bounds, radii });
        }

        let radius = self.corner_radius();
        if radius == CORNER_RADIUS_UNSET {
            return Ok(ClipShape::None);
        }
        if !radius.is_finite() {
            return Err(self.reject(RoundingError::NonFiniteRadius { index: 0 }));
        }
        Ok(ClipShape::RoundedRect { bounds, radii: CornerRadii::all(radius) })
    }

    fn reject(&self, err: RoundingError) -> RoundingError {
        log::warn!("ignoring rounding {self}: {err}");
        err
    }
}
