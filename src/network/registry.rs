use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;

use super::{GameListing, GameSnapshot, HostedGame, MoveProposal};
use crate::error::NetworkError;
use crate::game_repr::Color;

pub type SharedGame = Arc<Mutex<HostedGame>>;

/// All hosted games, keyed by their short id.
///
/// Each game sits behind its own lock so moves in different games never
/// contend; the outer lock only guards the map itself.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Mutex<HashMap<String, SharedGame>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty game and returns its id
    pub fn create_game(&self) -> String {
        let mut games = self.games.lock();
        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = format!("{:08x}", rng.gen::<u32>());
            if !games.contains_key(&candidate) {
                break candidate;
            }
        };
        games.insert(id.clone(), Arc::new(Mutex::new(HostedGame::new(id.clone()))));
        log::info!("Created game {}", id);
        id
    }

    pub fn get(&self, game_id: &str) -> Result<SharedGame, NetworkError> {
        self.games
            .lock()
            .get(game_id)
            .cloned()
            .ok_or_else(|| NetworkError::GameNotFound(game_id.to_string()))
    }

    pub fn join_game(&self, game_id: &str, player_id: &str, name: &str) -> Result<(Color, GameSnapshot), NetworkError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        let color = game.add_player(player_id, name)?;
        Ok((color, game.snapshot()))
    }

    /// Applies a proposal and returns the state to broadcast
    pub fn make_move(&self, game_id: &str, player_id: &str, proposal: MoveProposal) -> Result<GameSnapshot, NetworkError> {
        let game = self.get(game_id)?;
        let mut game = game.lock();
        game.make_move(player_id, proposal)?;
        Ok(game.snapshot())
    }

    pub fn list(&self) -> Vec<GameListing> {
        let mut listings: Vec<GameListing> = self
            .games
            .lock()
            .values()
            .map(|game| {
                let game = game.lock();
                GameListing {
                    id: game.id().to_string(),
                    player_count: game.connected_count(),
                    status: game.status(),
                }
            })
            .collect();
        listings.sort_by(|a, b| a.id.cmp(&b.id));
        listings
    }

    /// Marks the player gone from every game they sit in; games left with
    /// nobody connected are dropped. Returns the ids of the games touched.
    pub fn disconnect(&self, player_id: &str) -> Vec<String> {
        let mut games = self.games.lock();
        let mut touched = Vec::new();
        games.retain(|id, game| {
            let mut game = game.lock();
            if game.remove_player(player_id) {
                touched.push(id.clone());
            }
            let keep = game.connected_count() > 0;
            if !keep {
                log::info!("Closing empty game {}", id);
            }
            keep
        });
        touched.sort();
        touched
    }

    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
