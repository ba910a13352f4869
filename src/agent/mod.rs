pub mod player;
pub use player::*;

pub mod computer_player;
pub use computer_player::*;

pub mod ai;
pub use ai::{choose_move, SearchResult};
