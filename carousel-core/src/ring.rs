/// Ring arithmetic over the ordinal slots `0..n`

/// Which way every slide moves during a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Each position decrements; slot 0 wraps to `n - 1`
    Left,
    /// Each position increments; slot `n - 1` wraps to 0
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Slot treated as the center for a carousel of `n` slides.
pub fn center_position(n: usize) -> usize {
    n / 2
}

/// Move `position` one step around the ring of `n` slots.
///
/// For a fixed `n` and direction this is a bijection on `0..n`, so
/// shifting every slide never makes two of them collide.
pub fn shift(position: usize, direction: Direction, n: usize) -> usize {
    debug_assert!(position < n, "position {position} outside ring of {n}");
    match direction {
        Direction::Left => {
            if position == 0 {
                n - position - 1
            } else {
                position - 1
            }
        }
        Direction::Right => {
            if position + 1 >= n {
                n - position - 1
            } else {
                position + 1
            }
        }
    }
}

/// Direction a rotation takes when the slide at `activated` is chosen.
///
/// Slides left of center pull the ring right, slides right of center pull it
/// left, and the center slide leaves it alone.
pub fn direction_for(activated: usize, center: usize) -> Option<Direction> {
    if activated < center {
        Some(Direction::Right)
    } else if activated > center {
        Some(Direction::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_uses_floor() {
        assert_eq!(center_position(1), 0);
        assert_eq!(center_position(2), 1);
        assert_eq!(center_position(7), 3);
        assert_eq!(center_position(8), 4);
    }

    #[test]
    fn test_shift_wraps_at_both_ends() {
        assert_eq!(shift(0, Direction::Left, 7), 6);
        assert_eq!(shift(6, Direction::Right, 7), 0);
        assert_eq!(shift(3, Direction::Left, 7), 2);
        assert_eq!(shift(3, Direction::Right, 7), 4);
    }

    #[test]
    fn test_shift_single_slot() {
        assert_eq!(shift(0, Direction::Left, 1), 0);
        assert_eq!(shift(0, Direction::Right, 1), 0);
    }

    #[test]
    fn test_shift_is_bijection() {
        for n in 1..=12 {
            for direction in [Direction::Left, Direction::Right] {
                let mut seen = vec![false; n];
                for p in 0..n {
                    let next = shift(p, direction, n);
                    assert!(next < n);
                    assert!(!seen[next], "collision at {next} for n={n}");
                    seen[next] = true;
                }
            }
        }
    }

    #[test]
    fn test_direction_for() {
        assert_eq!(direction_for(0, 3), Some(Direction::Right));
        assert_eq!(direction_for(3, 3), None);
        assert_eq!(direction_for(5, 3), Some(Direction::Left));
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }
}
