use super::Vec2;

/// Axis-aligned image bounds in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Semi-axes of the ellipse inscribed in this rect.
    #[inline]
    pub fn inscribed_radii(self) -> Vec2 {
        Vec2::new(self.size.x.abs() * 0.5, self.size.y.abs() * 0.5)
    }
}
