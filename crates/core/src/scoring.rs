//! Per-player score counters.

use crate::types::Side;

/// Both players' points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point to `side`. At `cap` the counter wraps back to zero.
    pub fn award(&mut self, side: Side, cap: u32) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = if *slot < cap { *slot + 1 } else { 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_increments_one_side() {
        let mut score = Score::new();
        score.award(Side::Right, 9999);
        assert_eq!(score, Score { left: 0, right: 1 });
        assert_eq!(score.get(Side::Right), 1);
    }

    #[test]
    fn award_wraps_at_cap() {
        let mut score = Score { left: 9998, right: 0 };
        score.award(Side::Left, 9999);
        assert_eq!(score.left, 9999);
        score.award(Side::Left, 9999);
        assert_eq!(score.left, 0);
    }

    #[test]
    fn zero_cap_always_wraps() {
        let mut score = Score::new();
        score.award(Side::Left, 0);
        assert_eq!(score.left, 0);
    }
}
