//! Two-player chess: rules engine, alpha-beta computer opponent, interactive
//! session and a server-authoritative hosted game.

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod network;
pub mod orchestrator;

pub use config::{Difficulty, GameConfig, GameMode, PlayerConfig};
pub use error::{FenError, MoveError, MoveResult, NetworkError, SessionError};
pub use orchestrator::GameSession;
