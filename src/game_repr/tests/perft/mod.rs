use super::*;

mod starting_position;
mod kiwipete;
mod endgame;
