//! Server-authoritative games between two remote players.
//!
//! The transport (sockets, rooms, HTTP pages) lives outside this crate. What
//! lives here is the side that holds the authoritative state: seats, turn
//! enforcement and validation of proposed moves with the same rules engine
//! the local session uses. Clients are never trusted with legality.

mod hosted_game;
mod registry;
mod snapshot;

pub use hosted_game::*;
pub use registry::*;
pub use snapshot::*;
