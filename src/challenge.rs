//! "Make this number" challenge for the number tool.

use rand::Rng;

use crate::repr::BitWidth;

/// A target value for a specific width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub target: u32,
    pub width: BitWidth,
}

impl Challenge {
    /// Draw a uniformly random target in `[0, 2^bits - 1]`.
    pub fn new<R: Rng + ?Sized>(width: BitWidth, rng: &mut R) -> Self {
        Self {
            target: rng.random_range(0..=width.max_unsigned()),
            width,
        }
    }

    /// Solved when the value matches and the width has not changed since.
    pub fn is_solved(&self, value: u32, active_width: BitWidth) -> bool {
        self.width == active_width && self.target == value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_targets_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for &width in BitWidth::all() {
            for _ in 0..1000 {
                let c = Challenge::new(width, &mut rng);
                assert!(c.target <= width.max_unsigned());
                assert_eq!(c.width, width);
            }
        }
    }

    #[test]
    fn test_8_bit_targets_cover_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 256];
        for _ in 0..10_000 {
            seen[Challenge::new(BitWidth::W8, &mut rng).target as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_is_solved_requires_same_width() {
        let c = Challenge {
            target: 42,
            width: BitWidth::W8,
        };
        assert!(c.is_solved(42, BitWidth::W8));
        assert!(!c.is_solved(41, BitWidth::W8));
        assert!(!c.is_solved(42, BitWidth::W16));
    }
}
