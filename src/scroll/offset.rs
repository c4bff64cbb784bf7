//! Content offsets in scroll coordinates.

use std::fmt;
use std::ops::Sub;

/// A scroll position within the content coordinate space.
///
/// Both components are non-negative by convention; frame measurements that
/// come from nested coordinate spaces should go through [`reduce`] first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same offset with each component made non-negative.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Combine two frame origins into a content offset.
///
/// `value` is the viewport origin and `next` the content origin, both in the
/// same outer coordinate space. The content origin moves negative as the user
/// scrolls, so the absolute difference is the offset. Only verified for one
/// level of coordinate-space nesting.
pub fn reduce(value: Offset, next: Offset) -> Offset {
    (value - next).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_scrolled_content() {
        // Content scrolled 40 down and 12 right inside a viewport at (0, 0)
        let offset = reduce(Offset::ZERO, Offset::new(-12.0, -40.0));
        assert_eq!(offset, Offset::new(12.0, 40.0));
    }

    #[test]
    fn test_reduce_nested_viewport() {
        // Viewport itself sits at (0, 100) in the outer space
        let offset = reduce(Offset::new(0.0, 100.0), Offset::new(0.0, 60.0));
        assert_eq!(offset, Offset::new(0.0, 40.0));
    }

    #[test]
    fn test_reduce_never_negative() {
        let offset = reduce(Offset::new(5.0, 5.0), Offset::new(10.0, 20.0));
        assert!(offset.x >= 0.0 && offset.y >= 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Offset::new(50.0, 7.5).to_string(), "(50.0, 7.5)");
    }
}
