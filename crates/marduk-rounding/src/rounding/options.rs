use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Sentinel for "no uniform radius".
///
/// An explicit radius of zero is indistinguishable from unset; consumers that
/// need square corners should not attach rounding at all.
pub const CORNER_RADIUS_UNSET: f32 = 0.0;

/// Number of slots in a per-corner radii sequence: an `(x, y)` pair per corner.
pub const RADII_LEN: usize = 8;

/// How an image's corners are rounded.
///
/// Exactly one mode is meaningful, by precedence:
/// 1. `is_circular`: clip to the ellipse inscribed in the image bounds.
/// 2. per-corner radii, when present.
/// 3. the uniform `corner_radius`, unless it is [`CORNER_RADIUS_UNSET`].
///
/// The type does not enforce that radius and radii are exclusive, and it does
/// not validate any values: negative, NaN or infinite radii and sequences of
/// the wrong length are all stored as given. See
/// [`clip_shape`](Self::clip_shape) for the checks done at the point of use.
///
/// Values are immutable. Cloning shares the radii sequence.
#[derive(Debug, Clone)]
pub struct RoundingOptions {
    is_circular: bool,
    corner_radius: f32,
    /// `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]`
    corner_radii: Option<Arc<[f32]>>,
    is_anti_aliased: bool,
    is_force_round_at_decode: bool,
}

impl RoundingOptions {
    /// Circle, no anti-aliasing, rounded at draw time.
    pub const AS_CIRCLE: Self = Self::circle(false, false);

    /// Anti-aliased circle, rounded at draw time.
    pub const AS_CIRCLE_ANTI_ALIASING: Self = Self::circle(true, false);

    #[inline]
    pub const fn new(
        is_circular: bool,
        corner_radius: f32,
        corner_radii: Option<Arc<[f32]>>,
        is_anti_aliased: bool,
        is_force_round_at_decode: bool,
    ) -> Self {
        Self {
            is_circular,
            corner_radius,
            corner_radii,
            is_anti_aliased,
            is_force_round_at_decode,
        }
    }

    #[inline]
    const fn circle(anti_aliasing: bool, force_round_at_decode: bool) -> Self {
        Self::new(true, CORNER_RADIUS_UNSET, None, anti_aliasing, force_round_at_decode)
    }

    #[inline]
    pub const fn as_circle() -> Self {
        Self::AS_CIRCLE
    }

    /// One of the two shared circle constants, picked by `anti_aliasing`.
    #[inline]
    pub const fn as_circle_anti_aliased(anti_aliasing: bool) -> Self {
        if anti_aliasing {
            Self::AS_CIRCLE_ANTI_ALIASING
        } else {
            Self::AS_CIRCLE
        }
    }

    #[inline]
    pub const fn as_circle_with(anti_aliasing: bool, force_round_at_decode: bool) -> Self {
        Self::circle(anti_aliasing, force_round_at_decode)
    }

    /// Same radius on every corner.
    #[inline]
    pub const fn for_corner_radius_px(radius_px: f32) -> Self {
        Self::new(false, radius_px, None, false, false)
    }

    /// Circular corners with an independent radius per corner.
    ///
    /// Each value fills both the x and y slot of its corner.
    pub fn for_corner_radii(
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> Self {
        let radii: Arc<[f32]> = Arc::new([
            top_left,
            top_left,
            top_right,
            top_right,
            bottom_right,
            bottom_right,
            bottom_left,
            bottom_left,
        ]);
        Self::new(false, CORNER_RADIUS_UNSET, Some(radii), false, false)
    }

    /// Stores a caller-built radii sequence as-is.
    ///
    /// The length is not checked here. Anything other than [`RADII_LEN`]
    /// entries is rejected later by [`clip_shape`](Self::clip_shape).
    #[inline]
    pub const fn from_corner_radii(corner_radii: Option<Arc<[f32]>>, anti_aliasing: bool) -> Self {
        Self::new(false, CORNER_RADIUS_UNSET, corner_radii, anti_aliasing, false)
    }

    /// True if a uniform radius is set or per-corner radii are present.
    ///
    /// Does not consider `is_circular`: `as_circle()` reports `false`. Callers
    /// check [`is_circular`](Self::is_circular) first.
    #[inline]
    pub fn has_rounded_corners(&self) -> bool {
        self.corner_radius != CORNER_RADIUS_UNSET || self.corner_radii.is_some()
    }

    #[inline]
    pub fn is_circular(&self) -> bool {
        self.is_circular
    }

    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    #[inline]
    pub fn corner_radii(&self) -> Option<&[f32]> {
        self.corner_radii.as_deref()
    }

    /// The radii sequence as stored, for callers that want to share it.
    #[inline]
    pub fn shared_corner_radii(&self) -> Option<&Arc<[f32]>> {
        self.corner_radii.as_ref()
    }

    #[inline]
    pub fn is_anti_aliased(&self) -> bool {
        self.is_anti_aliased
    }

    #[inline]
    pub fn is_force_round_at_decode(&self) -> bool {
        self.is_force_round_at_decode
    }
}

// Floats compare by bit pattern so that `Eq` and `Hash` agree: NaN equals
// itself and -0.0 differs from 0.0.
impl PartialEq for RoundingOptions {
    fn eq(&self, other: &Self) -> bool {
        let radii_eq = match (self.corner_radii(), other.corner_radii()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            _ => false,
        };

        self.is_circular == other.is_circular
            && self.corner_radius.to_bits() == other.corner_radius.to_bits()
            && radii_eq
            && self.is_anti_aliased == other.is_anti_aliased
            && self.is_force_round_at_decode == other.is_force_round_at_decode
    }
}

impl Eq for RoundingOptions {}

impl Hash for RoundingOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_circular.hash(state);
        self.corner_radius.to_bits().hash(state);
        match self.corner_radii() {
            None => 0u8.hash(state),
            Some(radii) => {
                1u8.hash(state);
                radii.len().hash(state);
                for r in radii {
                    r.to_bits().hash(state);
                }
            }
        }
        self.is_anti_aliased.hash(state);
        self.is_force_round_at_decode.hash(state);
    }
}

/// Short form for log lines, e.g. `circle(aa)`, `radius(8px, decode)`.
impl fmt::Display for RoundingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_circular {
            f.write_str("circle")?;
        } else if let Some(radii) = self.corner_radii() {
            write!(f, "radii{radii:?}")?;
        } else if self.corner_radius != CORNER_RADIUS_UNSET {
            write!(f, "radius({}px", self.corner_radius)?;
        } else {
            return f.write_str("none");
        }

        let mut flags = Vec::with_capacity(2);
        if self.is_anti_aliased {
            flags.push("aa");
        }
        if self.is_force_round_at_decode {
            flags.push("decode");
        }

        // The radius form leaves its parenthesis open for the flags.
        let open = !self.is_circular && self.corner_radii.is_none();
        match (open, flags.is_empty()) {
            (true, true) => f.write_str(")"),
            (true, false) => write!(f, ", {})", flags.join(", ")),
            (false, true) => Ok(()),
            (false, false) => write!(f, "({})", flags.join(", ")),
        }
    }
}
