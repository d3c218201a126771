//! Per-round turn state machine.
//!
//! A round runs `RoundStart → AwaitMove → ApplyMove → CheckOutcome`, looping
//! back to `AwaitMove` with the other seat until a win or a full board, then
//! `RecordUpdate`. Between rounds the console decides whether to replay.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConsoleError, EngineError};
use crate::player::Player;
use crate::record::{Outcome, RecordStore};
use crate::selector::MoveSelector;
use crate::types::{LegalMove, Move, Position};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// One of the two places at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// First configured player.
    First,
    /// Second configured player.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into the players array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The player in this seat completed a run.
    Win(Seat),
    /// The board filled without a run.
    Tie,
}

/// Things the engine tells the console about.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// A fresh board is ready and `first` moves first.
    RoundStarted {
        /// One-based round number within the session.
        round: u32,
        /// The empty board.
        board: &'a Board,
        /// Player making the first move.
        first: &'a Player,
    },
    /// `player` is about to choose a move.
    TurnStarted {
        /// Player to move.
        player: &'a Player,
    },
    /// A symbol was placed.
    MovePlayed {
        /// Player who moved.
        player: &'a Player,
        /// Cell that was filled.
        target: Position,
        /// Board after the move.
        board: &'a Board,
    },
    /// The mover completed a run.
    RoundWon {
        /// Winning player.
        winner: &'a Player,
    },
    /// The board filled without a run.
    RoundTied,
    /// Records were updated and saved after a round.
    RecordsUpdated {
        /// Both players with their new records.
        players: &'a [Player; 2],
    },
    /// No more rounds will be played.
    SessionEnded {
        /// Both players with their final records.
        players: &'a [Player; 2],
    },
}

/// The external side of the game: local input, display and the replay question.
pub trait GameConsole {
    /// Asks a local player for a move until one of `legal` is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if input can no longer be read.
    fn request_move(
        &mut self,
        board: &Board,
        player: &Player,
        legal: &[LegalMove],
    ) -> Result<Move, ConsoleError>;

    /// Presents an event.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if output fails.
    fn notify(&mut self, event: GameEvent<'_>) -> Result<(), ConsoleError>;

    /// Asks whether to play another round.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] if input can no longer be read.
    fn play_again(&mut self) -> Result<bool, ConsoleError>;
}

/// Runs rounds between two seated players on one board.
///
/// Owns the board, both players, the record store and the random source.
#[derive(Debug)]
pub struct TurnEngine<S, R> {
    config: GameConfig,
    board: Board,
    players: [Player; 2],
    store: S,
    rng: R,
    rounds_played: u32,
}

impl<S: RecordStore, R: Rng> TurnEngine<S, R> {
    /// Seats both players with their stored records.
    #[instrument(skip(store, rng))]
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let players = config
            .players()
            .clone()
            .map(|spec| {
                let record = store.load(spec.name());
                Player::new(spec, record)
            });
        info!(
            first = %players[0].name(),
            second = %players[1].name(),
            "Players seated"
        );
        Self {
            board: Board::from_config(*config.board()),
            config,
            players,
            store,
            rng,
            rounds_played: 0,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players with their current records.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rounds completed so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Plays rounds until the console declines a replay.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the console fails or a selector produces
    /// an illegal move.
    #[instrument(skip_all)]
    pub fn run<C: GameConsole + ?Sized>(&mut self, console: &mut C) -> Result<(), EngineError> {
        loop {
            self.play_round(console)?;
            if !console.play_again()? {
                break;
            }
        }
        info!(rounds = self.rounds_played, "Session over");
        console.notify(GameEvent::SessionEnded {
            players: &self.players,
        })?;
        Ok(())
    }

    /// Plays one round from a cleared board to a win or tie, then updates
    /// and saves both records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the console fails or a selector produces
    /// an illegal move.
    #[instrument(skip_all, fields(round = self.rounds_played + 1))]
    pub fn play_round<C: GameConsole + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, EngineError> {
        self.board.reset();
        let mut seat = if self.rng.random_bool(0.5) {
            Seat::First
        } else {
            Seat::Second
        };
        info!(first = %self.players[seat.index()].name(), "Round started");
        console.notify(GameEvent::RoundStarted {
            round: self.rounds_played + 1,
            board: &self.board,
            first: &self.players[seat.index()],
        })?;

        let result = loop {
            let player = &self.players[seat.index()];
            console.notify(GameEvent::TurnStarted { player })?;

            let selector = MoveSelector::from(*player.kind());
            let action = selector.select_move(&self.board, player, console, &mut self.rng)?;
            let symbol = *player.symbol();
            let target = self.board.place(action, symbol)?;
            debug!(player = %player.name(), %target, "Move applied");

            console.notify(GameEvent::MovePlayed {
                player,
                target,
                board: &self.board,
            })?;

            if self.board.has_victory(target, symbol) {
                console.notify(GameEvent::RoundWon { winner: player })?;
                break RoundResult::Win(seat);
            }
            if self.board.is_full() {
                console.notify(GameEvent::RoundTied)?;
                break RoundResult::Tie;
            }
            seat = seat.other();
        };

        self.rounds_played += 1;
        info!(?result, "Round finished");
        self.update_records(result);
        console.notify(GameEvent::RecordsUpdated {
            players: &self.players,
        })?;
        Ok(result)
    }

    /// Applies the round result to both records and saves them.
    ///
    /// A failed save is logged and the session carries on with the
    /// in-memory record.
    #[instrument(skip(self))]
    fn update_records(&mut self, result: RoundResult) {
        let outcomes = match result {
            RoundResult::Win(Seat::First) => [Outcome::Win, Outcome::Loss],
            RoundResult::Win(Seat::Second) => [Outcome::Loss, Outcome::Win],
            RoundResult::Tie => [Outcome::Tie, Outcome::Tie],
        };
        for (player, outcome) in self.players.iter_mut().zip(outcomes) {
            player.record_mut().apply(outcome);
            if let Err(e) = self.store.save(player.name(), player.record()) {
                warn!(player = %player.name(), error = %e, "Failed to save record");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::player::{PlayerSpec, Skill};
    use crate::record::{MemoryRecordStore, PlayerRecord};
    use crate::types::Symbol;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    /// Console that never expects a local move and replays a fixed number of times.
    struct Quiet {
        replays: u32,
        events: Vec<String>,
    }

    impl GameConsole for Quiet {
        fn request_move(
            &mut self,
            _board: &Board,
            _player: &Player,
            _legal: &[LegalMove],
        ) -> Result<Move, ConsoleError> {
            Err(ConsoleError::new("no local players here"))
        }

        fn notify(&mut self, event: GameEvent<'_>) -> Result<(), ConsoleError> {
            let label = match event {
                GameEvent::RoundStarted { .. } => "start",
                GameEvent::TurnStarted { .. } => "turn",
                GameEvent::MovePlayed { .. } => "move",
                GameEvent::RoundWon { .. } => "won",
                GameEvent::RoundTied => "tied",
                GameEvent::RecordsUpdated { .. } => "records",
                GameEvent::SessionEnded { .. } => "end",
            };
            self.events.push(label.to_string());
            Ok(())
        }

        fn play_again(&mut self) -> Result<bool, ConsoleError> {
            if self.replays == 0 {
                return Ok(false);
            }
            self.replays -= 1;
            Ok(true)
        }
    }

    fn bots() -> GameConfig {
        GameConfig::new(
            Preset::TicTacToe.board_config(),
            [
                PlayerSpec::computer(Skill::Basic, sym('X')),
                PlayerSpec::computer(Skill::Strategic, sym('O')),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_seat_alternation() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().index(), 0);
    }

    #[test]
    fn test_records_loaded_at_seating() {
        let mut store = MemoryRecordStore::new();
        store.save("HardBot", &PlayerRecord::new(3, 1, 5)).unwrap();
        let engine = TurnEngine::new(bots(), store, StdRng::seed_from_u64(0));
        assert_eq!(*engine.players()[1].record(), PlayerRecord::new(3, 1, 5));
        assert_eq!(*engine.players()[0].record(), PlayerRecord::default());
    }

    #[test]
    fn test_run_plays_until_declined() {
        let mut engine = TurnEngine::new(bots(), MemoryRecordStore::new(), StdRng::seed_from_u64(11));
        let mut console = Quiet {
            replays: 2,
            events: Vec::new(),
        };
        engine.run(&mut console).unwrap();

        assert_eq!(engine.rounds_played(), 3);
        for player in engine.players() {
            assert_eq!(*player.record().total_games(), 3);
        }
        assert_eq!(console.events.iter().filter(|e| *e == "start").count(), 3);
        assert_eq!(console.events.last().map(String::as_str), Some("end"));
        assert_eq!(engine.store().load("EasyBot"), *engine.players()[0].record());
    }

    #[test]
    fn test_round_result_matches_records() {
        let mut engine = TurnEngine::new(bots(), MemoryRecordStore::new(), StdRng::seed_from_u64(5));
        let mut console = Quiet {
            replays: 0,
            events: Vec::new(),
        };
        let result = engine.play_round(&mut console).unwrap();
        let [first, second] = engine.players();
        match result {
            RoundResult::Win(Seat::First) => {
                assert_eq!(*first.record(), PlayerRecord::new(1, 0, 1));
                assert_eq!(*second.record(), PlayerRecord::new(0, 1, 1));
            }
            RoundResult::Win(Seat::Second) => {
                assert_eq!(*first.record(), PlayerRecord::new(0, 1, 1));
                assert_eq!(*second.record(), PlayerRecord::new(1, 0, 1));
            }
            RoundResult::Tie => {
                assert_eq!(*first.record(), PlayerRecord::new(0, 0, 1));
                assert_eq!(*second.record(), PlayerRecord::new(0, 0, 1));
            }
        }
    }

    #[test]
    fn test_local_input_failure_aborts_round() {
        let config = GameConfig::new(
            Preset::TicTacToe.board_config(),
            [
                PlayerSpec::local("Ada", sym('X')),
                PlayerSpec::local("Grace", sym('O')),
            ],
        )
        .unwrap();
        let mut engine = TurnEngine::new(config, MemoryRecordStore::new(), StdRng::seed_from_u64(0));
        let mut console = Quiet {
            replays: 0,
            events: Vec::new(),
        };
        let err = engine.play_round(&mut console).unwrap_err();
        assert!(matches!(err, EngineError::Console(_)));
        assert_eq!(engine.rounds_played(), 0);
    }
}
