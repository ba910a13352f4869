mod fen;
mod game_state;
mod legality;
mod moves;
mod piece;
mod piece_moves;
mod position;

#[cfg(test)]
mod tests;

pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::{Destinations, MoveList};
pub use position::*;
