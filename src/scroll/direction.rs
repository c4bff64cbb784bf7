//! Coarse scroll direction from consecutive offsets.

use std::fmt;

use super::offset::Offset;

/// Largest vertical delta still treated as a horizontal scroll.
const HORIZONTAL_TOLERANCE: f64 = 30.0;

/// Largest horizontal delta still treated as a vertical scroll.
const VERTICAL_TOLERANCE: f64 = 100.0;

/// Discretized scroll direction. Diagonal movement outside the tolerances is
/// reported as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Unknown,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Classify the move from `previous` to `current`.
    pub fn classify(previous: Offset, current: Offset) -> Self {
        Self::classify_delta(previous.x - current.x, previous.y - current.y)
    }

    /// Classify a move given `w = previous.x - current.x` and
    /// `h = previous.y - current.y`.
    ///
    /// Rules overlap and are checked in order, first match wins, so a zero
    /// delta is `Right`.
    pub fn classify_delta(w: f64, h: f64) -> Self {
        let within = |v: f64, limit: f64| (-limit..=limit).contains(&v);

        if w >= 0.0 && within(h, HORIZONTAL_TOLERANCE) {
            Direction::Right
        } else if w <= 0.0 && within(h, HORIZONTAL_TOLERANCE) {
            Direction::Left
        } else if within(w, VERTICAL_TOLERANCE) && h <= 0.0 {
            Direction::Up
        } else if within(w, VERTICAL_TOLERANCE) && h >= 0.0 {
            Direction::Down
        } else {
            Direction::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Unknown => "unknown",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        let cases = [
            ((0.0, 0.0), Direction::Right),
            ((-1.0, 0.0), Direction::Left),
            ((0.0, -50.0), Direction::Up),
            ((0.0, 50.0), Direction::Down),
            ((200.0, 200.0), Direction::Unknown),
            ((-200.0, -200.0), Direction::Unknown),
        ];
        for ((w, h), expected) in cases {
            assert_eq!(Direction::classify_delta(w, h), expected, "w={w} h={h}");
        }
    }

    #[test]
    fn test_horizontal_tolerance_boundary() {
        assert_eq!(Direction::classify_delta(10.0, 30.0), Direction::Right);
        assert_eq!(Direction::classify_delta(10.0, -30.0), Direction::Right);
        assert_eq!(Direction::classify_delta(-10.0, 30.0), Direction::Left);
        // Just past the band falls through to the vertical rules
        assert_eq!(Direction::classify_delta(10.0, 30.5), Direction::Down);
        assert_eq!(Direction::classify_delta(-10.0, -30.5), Direction::Up);
    }

    #[test]
    fn test_vertical_tolerance_boundary() {
        assert_eq!(Direction::classify_delta(100.0, -31.0), Direction::Up);
        assert_eq!(Direction::classify_delta(-100.0, 31.0), Direction::Down);
        assert_eq!(Direction::classify_delta(100.5, -31.0), Direction::Unknown);
        assert_eq!(Direction::classify_delta(-100.5, 31.0), Direction::Unknown);
    }

    #[test]
    fn test_classify_uses_previous_minus_current() {
        // Content moved from x=0 to x=50: w = -50, so Left
        let dir = Direction::classify(Offset::ZERO, Offset::new(50.0, 0.0));
        assert_eq!(dir, Direction::Left);

        // And back again
        let dir = Direction::classify(Offset::new(50.0, 0.0), Offset::ZERO);
        assert_eq!(dir, Direction::Right);

        // Scrolling down the content: h = -40, so Up
        let dir = Direction::classify(Offset::ZERO, Offset::new(0.0, 40.0));
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let p = Offset::new(12.0, 80.0);
        let c = Offset::new(20.0, 10.0);
        let first = Direction::classify(p, c);
        for _ in 0..5 {
            assert_eq!(Direction::classify(p, c), first);
        }
    }

    #[test]
    fn test_nan_is_unknown() {
        assert_eq!(Direction::classify_delta(f64::NAN, 0.0), Direction::Unknown);
        assert_eq!(Direction::classify_delta(0.0, f64::NAN), Direction::Unknown);
    }
}
