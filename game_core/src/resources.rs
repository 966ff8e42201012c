use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Side that has reached the match target, if any. Left is checked
    /// first; both reaching the target in the same frame is impossible
    /// since points land one at a time.
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

/// Events emitted by one simulation step
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: bool,
    pub left_scored: bool,
    pub right_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side that scored this step, if any.
    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator behind the serve direction and bounce jitter.
/// Seeded so simulations replay deterministically under test.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        score.increment_left();
        score.increment_left();
        score.increment_right();
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_has_winner_left() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_left();
        }
        assert_eq!(score.has_winner(5), Some(Side::Left), "Left wins at 5");
    }

    #[test]
    fn test_score_has_winner_right() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_right();
        }
        assert_eq!(score.has_winner(5), Some(Side::Right), "Right wins at 5");
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment_left();
            score.increment_right();
        }
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score::new();
        score.increment_left();
        score.increment_right();
        score.reset();
        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounce = true;
        events.paddle_bounce = true;
        events.left_scored = true;
        events.right_scored = true;

        events.clear();

        assert!(!events.wall_bounce);
        assert!(!events.paddle_bounce);
        assert!(!events.left_scored);
        assert!(!events.right_scored);
    }

    #[test]
    fn test_events_scored_side() {
        let mut events = Events::new();
        assert_eq!(events.scored(), None);
        events.right_scored = true;
        assert_eq!(events.scored(), Some(Side::Right));
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.0.gen::<u64>(), b.0.gen::<u64>());
        }
    }
}
