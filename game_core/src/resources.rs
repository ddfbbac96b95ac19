use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub cpu: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Cpu => self.cpu = self.cpu.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.cpu >= win_score {
            Some(Side::Cpu)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::params::Params::RNG_SEED)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub cpu_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.cpu_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment(Side::Player);
        assert_eq!(score.player, 1);
        score.increment(Side::Player);
        assert_eq!(score.player, 2);
        assert_eq!(score.cpu, 0);
    }

    #[test]
    fn test_score_increment_cpu() {
        let mut score = Score::new();
        score.increment(Side::Cpu);
        assert_eq!(score.get(Side::Cpu), 1);
        assert_eq!(score.get(Side::Player), 0);
    }

    #[test]
    fn test_score_has_winner_player() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Player);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Player),
            "Player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_cpu() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Cpu);
        }
        assert_eq!(score.has_winner(11), Some(Side::Cpu), "Cpu should win at 11");
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Player);
            score.increment(Side::Cpu);
        }
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.cpu_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;
        events.winner = Some(Side::Cpu);

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.any_score());
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng;
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        let xs: Vec<bool> = (0..16).map(|_| a.0.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..16).map(|_| b.0.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }
}
