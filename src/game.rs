//! Match state machine: two players, turn order and the win condition.

use alloc::string::String;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BoardSize, HOST_INDEX, PLAYER_COUNT};
use crate::player::Player;

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Finished { winner: usize },
}

/// What a single call to [`Game::shoot`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    /// Player who fired.
    pub shooter: usize,
    pub target: (usize, usize),
    /// `false` when the target was illegal or the match was already over.
    pub accepted: bool,
    pub outcome: Option<ShotOutcome>,
    pub turn_passed: bool,
    pub winner: Option<usize>,
}

/// A match between a host and an opponent sharing one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    size: BoardSize,
    players: [Player; PLAYER_COUNT],
    turn: usize,
    host: usize,
    status: GameStatus,
}

impl Game {
    /// Start a match with freshly generated fleets for both sides.
    pub fn new<R: Rng + ?Sized>(
        size: BoardSize,
        host_name: impl Into<String>,
        opponent_name: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let host = Player::generate(host_name, size, rng)?;
        let opponent = Player::generate(opponent_name, size, rng)?;
        log::info!(
            "new {}x{} match, {} ships per side",
            size.length(),
            size.width(),
            host.ships().len()
        );
        Self::from_players(size, [host, opponent], HOST_INDEX)
    }

    /// Start a match from prepared players. Player 0 moves first and both
    /// players must still have ships afloat.
    pub fn from_players(
        size: BoardSize,
        players: [Player; PLAYER_COUNT],
        host: usize,
    ) -> Result<Self, BoardError> {
        if host >= PLAYER_COUNT {
            return Err(BoardError::InvalidPlayer(host));
        }
        if players.iter().any(|p| p.board().size() != size) {
            return Err(BoardError::InvalidDimensions {
                length: size.length(),
                width: size.width(),
            });
        }
        if let Some(i) = players.iter().position(Player::is_defeated) {
            return Err(BoardError::PlayerDefeated(i));
        }
        Ok(Game {
            size,
            players,
            turn: 0,
            host,
            status: GameStatus::InProgress,
        })
    }

    /// Check that a match restored from outside, such as a save file, is one
    /// that [`Game::shoot`] can continue.
    pub fn validate(&self) -> Result<(), BoardError> {
        BoardSize::new(self.size.length(), self.size.width())?;
        if self.turn >= PLAYER_COUNT {
            return Err(BoardError::InvalidPlayer(self.turn));
        }
        if self.host >= PLAYER_COUNT {
            return Err(BoardError::InvalidPlayer(self.host));
        }
        for player in &self.players {
            player.validate(self.size)?;
        }
        let defeated = [self.players[0].is_defeated(), self.players[1].is_defeated()];
        let consistent = match self.status {
            GameStatus::InProgress => defeated == [false, false],
            GameStatus::Finished { winner } => {
                winner < PLAYER_COUNT
                    && !defeated[winner]
                    && defeated[Self::opponent_of(winner)]
            }
        };
        if !consistent {
            return Err(BoardError::CorruptState("status disagrees with fleets"));
        }
        Ok(())
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Index of the player to move. After the match ends this is the host.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn host(&self) -> usize {
        self.host
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<usize> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    pub fn player(&self, index: usize) -> Result<&Player, BoardError> {
        self.players.get(index).ok_or(BoardError::InvalidPlayer(index))
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Index of the other player.
    pub fn opponent_of(index: usize) -> usize {
        1 - index
    }

    /// Fire the current player's shot at (x, y).
    ///
    /// A miss passes the turn; hits and kills keep it. Illegal targets are
    /// reported as not accepted and change nothing. Once the match is over
    /// every call is a no-op.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<ShotReport, BoardError> {
        let shooter = self.turn;
        let mut report = ShotReport {
            shooter,
            target: (x, y),
            accepted: false,
            outcome: None,
            turn_passed: false,
            winner: self.winner(),
        };
        if self.is_finished() {
            return Ok(report);
        }
        if !self.players[shooter].check_point(x, y) {
            log::debug!("player {} picked invalid target ({}, {})", shooter, x, y);
            return Ok(report);
        }

        let [first, second] = &mut self.players;
        let (attacker, defender) = if shooter == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let outcome = defender.receive_shot(x, y)?;
        let destroyed = match outcome {
            ShotOutcome::Kill(i) => Some(defender.ship(i)?),
            _ => None,
        };
        attacker.mark_shot(x, y, outcome, destroyed)?;
        log::debug!("player {} fired at ({}, {}): {:?}", shooter, x, y, outcome);

        report.accepted = true;
        report.outcome = Some(outcome);
        match outcome {
            ShotOutcome::Miss => {
                self.turn = Self::opponent_of(shooter);
                report.turn_passed = true;
            }
            ShotOutcome::Hit => {}
            ShotOutcome::Kill(_) => {
                if defender.is_defeated() {
                    self.status = GameStatus::Finished { winner: shooter };
                    self.turn = self.host;
                    report.winner = Some(shooter);
                    log::info!("player {} wins after {} shots", shooter, attacker.shots_made());
                }
            }
        }
        Ok(report)
    }
}
