use super::Vec2;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
/// Each corner carries an `(x, y)` pair so elliptical corners are expressible.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(
        top_left: Vec2,
        top_right: Vec2,
        bottom_right: Vec2,
        bottom_left: Vec2,
    ) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::splat(r);
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Reads the flat `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]` layout.
    #[inline]
    pub const fn from_xy_pairs(r: [f32; 8]) -> Self {
        Self::new(
            Vec2::new(r[0], r[1]),
            Vec2::new(r[2], r[3]),
            Vec2::new(r[4], r[5]),
            Vec2::new(r[6], r[7]),
        )
    }

    /// Inverse of [`from_xy_pairs`](Self::from_xy_pairs).
    #[inline]
    pub const fn to_xy_pairs(self) -> [f32; 8] {
        [
            self.top_left.x,
            self.top_left.y,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.bottom_left.x,
            self.bottom_left.y,
        ]
    }

    pub fn is_uniform(self) -> bool {
        let pairs = self.to_xy_pairs();
        pairs.iter().all(|&v| v == pairs[0])
    }

    pub fn is_zero(self) -> bool {
        self.to_xy_pairs().iter().all(|&v| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_uniform() {
        let r = CornerRadii::all(6.0);
        assert!(r.is_uniform());
        assert!(!r.is_zero());
        assert_eq!(r.bottom_left, Vec2::new(6.0, 6.0));
    }

    #[test]
    fn zero_is_zero() {
        assert!(CornerRadii::zero().is_zero());
        assert_eq!(CornerRadii::default(), CornerRadii::zero());
    }

    #[test]
    fn xy_pairs_follow_css_corner_order() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let r = CornerRadii::from_xy_pairs(flat);
        assert_eq!(r.top_left, Vec2::new(1.0, 2.0));
        assert_eq!(r.top_right, Vec2::new(3.0, 4.0));
        assert_eq!(r.bottom_right, Vec2::new(5.0, 6.0));
        assert_eq!(r.bottom_left, Vec2::new(7.0, 8.0));
        assert_eq!(r.to_xy_pairs(), flat);
        assert!(!r.is_uniform());
    }
}
