//! Game session: secret code, turn budget and history

use crate::core::{Code, Guess, Key, MAX_TURNS};
use log::{debug, info};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a submitted guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The guess cracked the code on turn `turns`
    Won { turns: usize },
    /// Wrong guess, turns remain
    Continue { key: Key },
    /// Wrong guess and the turn budget is spent
    Lost { key: Key },
}

/// Error type for misuse of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameOver(GameStatus),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(GameStatus::Won) => write!(f, "Game is over: the code was cracked"),
            Self::GameOver(_) => write!(f, "Game is over: no turns left"),
        }
    }
}

impl std::error::Error for GameError {}

/// A single game between a codemaker and a codebreaker
///
/// The turn counter starts at 1 and advances after every wrong guess; the
/// game is lost once it passes the turn budget.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::game::{GameState, TurnOutcome};
///
/// let mut game = GameState::new(Code::new([2, 4, 4, 1]).unwrap());
///
/// let outcome = game.submit(Code::new([1, 4, 2, 4]).unwrap()).unwrap();
/// assert!(matches!(outcome, TurnOutcome::Continue { .. }));
///
/// let outcome = game.submit(Code::new([2, 4, 4, 1]).unwrap()).unwrap();
/// assert_eq!(outcome, TurnOutcome::Won { turns: 2 });
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    code: Code,
    turn: usize,
    max_turns: usize,
    history: Vec<(Guess, Key)>,
    status: GameStatus,
}

impl GameState {
    /// Start a game with the standard turn budget
    #[must_use]
    pub fn new(code: Code) -> Self {
        Self::with_max_turns(code, MAX_TURNS)
    }

    /// Start a game with a custom turn budget
    #[must_use]
    pub fn with_max_turns(code: Code, max_turns: usize) -> Self {
        Self {
            code,
            turn: 1,
            max_turns,
            history: Vec::with_capacity(max_turns),
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and advance the game
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already been won or lost.
    pub fn submit(&mut self, guess: Guess) -> Result<TurnOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let key = Key::calculate(&guess, &self.code);
        self.history.push((guess, key));
        debug!("turn {}: {guess} -> {key}", self.turn);

        if key.is_perfect() {
            self.status = GameStatus::Won;
            info!("code {} cracked in {} turns", self.code, self.turn);
            return Ok(TurnOutcome::Won { turns: self.turn });
        }

        self.turn += 1;
        if self.turn > self.max_turns {
            self.status = GameStatus::Lost;
            info!("code {} survived {} turns", self.code, self.max_turns);
            return Ok(TurnOutcome::Lost { key });
        }

        Ok(TurnOutcome::Continue { key })
    }

    /// The secret code
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// Current turn, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Turn budget for this game
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Every guess submitted so far with its key
    #[must_use]
    pub fn history(&self) -> &[(Guess, Key)] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}
