//! Turn flow behind the GUI
//!
//! Tracks whose move it is and the move list, and runs engine searches on a
//! worker thread. Results come back over a channel and are picked up by
//! [`GameState::tick`] once per frame, so the window never waits on a search.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::rules::find_five_at;
use crate::{Board, Engine, EngineConfig, MoveResult, Pos, Result, Stone};

/// Hints are searched at most this deep, whatever the engine depth.
pub const HINT_MAX_DEPTH: u8 = 3;

/// Who sits at each side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// A human plays `human_color`, the engine the other side
    PvE { human_color: Stone },
    /// Two humans at one screen, with optional engine hints
    PvP { show_suggestions: bool },
    /// The engine plays both sides
    EvE,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Stone::Black,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Five { winner: Stone, line: [Pos; 5] },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Five { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    pub fn line(&self) -> Option<[Pos; 5]> {
        match self {
            Outcome::Five { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }
}

/// What a background search was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// The engine's own move, played when it arrives
    Move,
    /// A suggestion for the human to move, only displayed
    Hint,
}

/// A search running on a worker thread
struct Pending {
    job: Job,
    /// Length of the move list when the search started
    ply: usize,
    started: Instant,
    rx: Receiver<Result<MoveResult>>,
}

pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub config: EngineConfig,
    pub to_move: Stone,
    pub outcome: Option<Outcome>,
    pub moves: Vec<(Pos, Stone)>,
    pub hint: Option<Pos>,
    pub last_search: Option<(Job, MoveResult)>,
    pub message: Option<String>,
    pending: Option<Pending>,
    /// Seed of the next engine, `None` for entropy
    seed: Option<u64>,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig, seed: Option<u64>) -> Self {
        Self {
            board: Board::with_size(config.board_size),
            mode,
            config,
            to_move: Stone::Black,
            outcome: None,
            moves: Vec::new(),
            hint: None,
            last_search: None,
            message: None,
            pending: None,
            seed,
        }
    }

    /// Clear the board and start over with the current mode and settings
    pub fn restart(&mut self) {
        *self = Self::new(self.mode, self.config, self.seed);
    }

    /// Replace the engine settings. A different board size restarts the game.
    pub fn set_config(&mut self, config: EngineConfig) {
        let resized = config.board_size != self.config.board_size;
        self.config = config;
        if resized {
            self.restart();
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.moves.last().map(|&(pos, _)| pos)
    }

    pub fn human_to_move(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.to_move == human_color,
            GameMode::PvP { .. } => true,
            GameMode::EvE => false,
        }
    }

    /// Kind and age of the running search, if any
    pub fn searching(&self) -> Option<(Job, Duration)> {
        self.pending.as_ref().map(|p| (p.job, p.started.elapsed()))
    }

    /// Depth used for hint searches
    pub fn hint_depth(&self) -> u8 {
        self.config.depth.min(HINT_MAX_DEPTH)
    }

    /// Play a human move. A hint still being searched is dropped.
    pub fn play(&mut self, pos: Pos) -> std::result::Result<(), String> {
        if self.outcome.is_some() {
            return Err("The game is over".into());
        }
        if matches!(self.searching(), Some((Job::Move, _))) || !self.human_to_move() {
            return Err("Wait for the engine to move".into());
        }
        if !self.board.contains(pos) || !self.board.is_empty(pos) {
            return Err("That point is taken".into());
        }
        self.pending = None;
        self.place(pos);
        Ok(())
    }

    fn place(&mut self, pos: Pos) {
        let color = self.to_move;
        self.board.place_stone(pos, color);
        self.moves.push((pos, color));
        self.hint = None;
        self.message = None;

        self.outcome = match find_five_at(&self.board, pos, color) {
            Some(line) => Some(Outcome::Five { winner: color, line }),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        };
        if self.outcome.is_none() {
            self.to_move = color.opponent();
        }
    }

    /// Ask for a suggestion for the side to move. The answer lands in
    /// [`GameState::hint`] on a later tick.
    pub fn request_hint(&mut self) {
        if self.outcome.is_some() || self.pending.is_some() {
            return;
        }
        let depth = self.hint_depth();
        self.spawn(Job::Hint, depth);
    }

    /// Collect a finished search and start the engine's move when it is due.
    pub fn tick(&mut self) {
        self.poll();
        if self.pending.is_none() && self.outcome.is_none() && !self.human_to_move() {
            self.spawn(Job::Move, self.config.depth);
        }
    }

    fn spawn(&mut self, job: Job, depth: u8) {
        let config = EngineConfig { depth, ..self.config };
        let engine = match self.seed.as_mut() {
            Some(seed) => {
                *seed = seed.wrapping_add(1);
                Engine::with_seed(config, *seed)
            }
            None => Engine::new(config),
        };
        let mut engine = match engine {
            Ok(engine) => engine,
            Err(e) => {
                self.message = Some(format!("Engine unavailable: {}", e));
                return;
            }
        };

        let mut board = self.board.clone();
        let side = self.to_move;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone if the game moved on; nothing to report then.
            let _ = tx.send(engine.choose_move_with_stats(&mut board, side));
        });

        log::debug!("{:?} search for {:?} at depth {}", job, side, depth);
        self.pending = Some(Pending {
            job,
            ply: self.moves.len(),
            started: Instant::now(),
            rx,
        });
    }

    fn poll(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let (job, ply) = (pending.job, pending.ply);
        let received = match pending.rx.try_recv() {
            Ok(received) => received,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.message = Some("Engine thread stopped".into());
                return;
            }
        };
        self.pending = None;

        if ply != self.moves.len() {
            log::debug!("dropping stale {:?} result", job);
            return;
        }
        match received {
            Ok(result) => {
                let pos = result.best_move;
                self.last_search = Some((job, result));
                match job {
                    Job::Move => self.place(pos),
                    Job::Hint => self.hint = Some(pos),
                }
            }
            Err(e) => {
                log::warn!("engine failed: {}", e);
                self.message = Some(format!("Engine failed: {}", e));
            }
        }
    }

    /// Take back moves until a human is to move again.
    ///
    /// Against the engine this removes its reply as well as the human move.
    pub fn undo(&mut self) {
        if matches!(self.searching(), Some((Job::Move, _))) {
            return;
        }
        self.pending = None;
        while let Some((pos, color)) = self.moves.pop() {
            self.board.remove_stone(pos);
            self.to_move = color;
            if self.human_to_move() {
                break;
            }
        }
        self.outcome = None;
        self.hint = None;
        self.message = None;
    }
}
