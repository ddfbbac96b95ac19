//! The game world: every piece of mutable game state, owned by the frame loop

use hecs::{Entity, World};

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::fsm::{GameAction, GameFsm, GamePhase};
use crate::input::FrameCommands;
use crate::resources::{Events, GameRng, Score};

/// Entities, score, phase and RNG for one game.
///
/// The ball and both paddles are spawned once and reused across rounds; a
/// reset respawns them at their initial positions.
pub struct GameWorld {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub fsm: GameFsm,
    ball: Entity,
    player: Entity,
    cpu: Entity,
    game_over_frames_left: u32,
}

impl GameWorld {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let ball = crate::create_ball(&mut world, Ball::initial(&config));
        let player = crate::create_paddle(&mut world, Paddle::initial(Side::Player, &config));
        let cpu = crate::create_paddle(&mut world, Paddle::initial(Side::Cpu, &config));
        let rng = GameRng::new(config.seed);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: GameFsm::new(),
            ball,
            player,
            cpu,
            game_over_frames_left: 0,
        }
    }

    /// Put ball, paddles and scores back to their initial values
    pub fn reset(&mut self) {
        self.world.clear();
        self.ball = crate::create_ball(&mut self.world, Ball::initial(&self.config));
        self.player =
            crate::create_paddle(&mut self.world, Paddle::initial(Side::Player, &self.config));
        self.cpu = crate::create_paddle(&mut self.world, Paddle::initial(Side::Cpu, &self.config));
        self.score = Score::new();
        log::info!("world reset");
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn set_paddle(&mut self, paddle: Paddle) {
        let entity = match paddle.side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        };
        if let Ok(mut current) = self.world.get::<&mut Paddle>(entity) {
            *current = paddle;
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.fsm.winner()
    }

    /// Apply one frame of player input: start/reset, then paddle velocity
    pub fn apply_commands(&mut self, commands: &FrameCommands) {
        if commands.reset && self.fsm.transition(GameAction::Reset).success() {
            self.reset();
        }

        if commands.start && self.fsm.can_transition(GameAction::Start) {
            // A finished match must not carry its winning score into the next one
            if self.fsm.winner().is_some() {
                self.reset();
            }
            self.fsm.transition(GameAction::Start);
        }

        // After any reset, so a held key drives the respawned paddle
        let dy = i32::from(commands.paddle_dir.signum()) * self.config.player_paddle_speed;
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.player) {
            paddle.dy = dy;
        }
    }

    /// Move to GameOver and start the display countdown
    pub fn enter_game_over(&mut self, winner: Side) {
        if self.fsm.transition(GameAction::MatchWon(winner)).success() {
            self.game_over_frames_left = self.config.game_over_frames;
        }
    }

    /// Count down one frame of the game-over screen; back to the menu at zero
    pub fn tick_game_over(&mut self) {
        if !self.fsm.is_game_over() {
            return;
        }
        self.game_over_frames_left = self.game_over_frames_left.saturating_sub(1);
        if self.game_over_frames_left == 0 {
            self.fsm.transition(GameAction::GameOverElapsed);
        }
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
