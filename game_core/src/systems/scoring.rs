use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring).
///
/// The conceding side receives the next serve from the center.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.rect.right() < 0 {
            Side::Cpu
        } else if ball.rect.left() > config.arena_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Player => events.player_scored = true,
            Side::Cpu => events.cpu_scored = true,
        }
        log::debug!(
            "{:?} scored, player {} - cpu {}",
            scorer,
            score.player,
            score.cpu
        );

        ball.reset(config, scorer.opponent(), rng);
    }
}

/// Report a winner, only on frames where a point was scored
pub fn check_winner(score: &Score, config: &Config, events: &mut Events) -> Option<Side> {
    if !events.any_score() {
        return None;
    }
    let winner = score.has_winner(config.win_score);
    events.winner = winner;
    winner
}
