//! Game State Machine
//!
//! Menu → Playing → GameOver → Menu, plus an in-menu reset.

use crate::components::Side;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// "Start" key
    Start,
    /// "Reset" key
    Reset,
    /// Scoring reported a side reaching the win score
    MatchWon(Side),
    /// The game-over screen has been shown long enough
    GameOverElapsed,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    to_state: GamePhase,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn to_state(&self) -> GamePhase {
        self.to_state
    }
}

/// Game Finite State Machine
///
/// Invariant: in `GameOver` the winner is always set.
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GamePhase,
    winner: Option<Side>,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GamePhase::Menu,
            winner: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> GamePhase {
        self.state
    }

    /// Winner of the last completed match, if it has not been cleared yet
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            match action {
                GameAction::MatchWon(side) => self.winner = Some(side),
                GameAction::Start | GameAction::Reset => self.winner = None,
                GameAction::GameOverElapsed => {}
            }
            log::info!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                to_state: next_state,
            }
        } else {
            TransitionResult {
                success: false,
                to_state: from_state,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GamePhase> {
        match (self.state, action) {
            // From Menu
            (GamePhase::Menu, GameAction::Start) => Some(GamePhase::Playing),
            (GamePhase::Menu, GameAction::Reset) => Some(GamePhase::Menu),

            // From Playing
            (GamePhase::Playing, GameAction::MatchWon(_)) => Some(GamePhase::GameOver),

            // From GameOver
            (GamePhase::GameOver, GameAction::GameOverElapsed) => Some(GamePhase::Menu),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_menu(&self) -> bool {
        self.state == GamePhase::Menu
    }

    pub fn is_playing(&self) -> bool {
        self.state == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GamePhase::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
