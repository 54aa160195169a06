//! A compact, computationally efficient bitboard representation of Connect Four positions.

pub(crate) mod geometry;
mod error;
mod position;

pub use error::PositionParsingError;
pub use geometry::{
    BEST_BITS, BOARD_SIZE, HEIGHT, KEY_BITS, MAX_SCORE, MIN_SCORE, MOVE_ORDER, SCORE_BITS, WIDTH,
};
pub use position::{Player, Position};
