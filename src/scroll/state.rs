//! Offset tracking for a single scroll view.

use super::direction::Direction;
use super::offset::Offset;

/// Previous and current offsets plus the direction derived from them.
///
/// The direction is only ever recomputed from the two offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    previous: Offset,
    current: Offset,
    direction: Direction,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new offset and reclassify. Returns the new direction.
    pub fn update(&mut self, offset: Offset) -> Direction {
        self.previous = self.current;
        self.current = offset;
        self.direction = Direction::classify(self.previous, self.current);
        self.direction
    }

    pub fn previous(&self) -> Offset {
        self.previous
    }

    pub fn current(&self) -> Offset {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin_unknown() {
        let state = ScrollState::new();
        assert_eq!(state.current(), Offset::ZERO);
        assert_eq!(state.direction(), Direction::Unknown);
    }

    #[test]
    fn test_update_shifts_offsets() {
        let mut state = ScrollState::new();

        state.update(Offset::new(0.0, 10.0));
        let dir = state.update(Offset::new(0.0, 60.0));

        assert_eq!(state.previous(), Offset::new(0.0, 10.0));
        assert_eq!(state.current(), Offset::new(0.0, 60.0));
        assert_eq!(dir, Direction::Up);
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn test_repeated_offset_is_right() {
        let mut state = ScrollState::new();
        state.update(Offset::new(5.0, 5.0));
        assert_eq!(state.update(Offset::new(5.0, 5.0)), Direction::Right);
    }
}
