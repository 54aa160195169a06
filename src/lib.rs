//! A strong solver for Connect Four: a bitboard position representation, a
//! negamax/alpha-beta search kernel with threat-based pruning and move
//! ordering, a transposition table, and a null-window iterative-deepening
//! driver that resolves the exact game-theoretic value of any position.
//!
//! Scores are expressed as plies-to-win from the side-to-move's perspective:
//! positive means the mover wins, zero is a draw, negative means the mover
//! loses, and the magnitude encodes how soon.

mod board;
mod engine;

pub use board::{Player, Position, PositionParsingError};
pub use engine::{
    parse_preseed_line, resolve_table_bits, MoveEntry, MoveSorter, PreseedError, Solver,
    SolverConfig, TranspositionTable, TranspositionTableError,
};
