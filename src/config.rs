//! Game configuration.
//!
//! A [`GameConfig`] holds everything needed to start a session: the mode and
//! who controls each color.

use crate::game_repr::Color;

/// Strength of the computer opponent, expressed as search depth in plies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Who controls one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves entered on this machine
    Human,
    /// Built-in minimax search
    Computer { difficulty: Difficulty },
    /// Moves arriving from a hosted game
    Remote,
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Two humans sharing one board
    #[default]
    Local,
    /// One human against the computer
    Computer,
    /// One local human against a remote opponent
    Online,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub white_player: PlayerConfig,
    pub black_player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::local()
    }
}

impl GameConfig {
    /// Both colors played on this machine
    pub fn local() -> Self {
        Self {
            mode: GameMode::Local,
            white_player: PlayerConfig::Human,
            black_player: PlayerConfig::Human,
        }
    }

    /// Human plays `human_color`, the computer takes the other side
    pub fn computer(human_color: Color, difficulty: Difficulty) -> Self {
        let computer = PlayerConfig::Computer { difficulty };
        let (white_player, black_player) = match human_color {
            Color::White => (PlayerConfig::Human, computer),
            Color::Black => (computer, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::Computer,
            white_player,
            black_player,
        }
    }

    /// Local human sits at `local_color`; the opponent's moves come from the host
    pub fn online(local_color: Color) -> Self {
        let (white_player, black_player) = match local_color {
            Color::White => (PlayerConfig::Human, PlayerConfig::Remote),
            Color::Black => (PlayerConfig::Remote, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::Online,
            white_player,
            black_player,
        }
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// Color of the single local human in Computer and Online games.
    /// Returns None for Local games.
    pub fn human_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::Local => None,
            GameMode::Computer | GameMode::Online => {
                if matches!(self.white_player, PlayerConfig::Human) {
                    Some(Color::White)
                } else {
                    Some(Color::Black)
                }
            }
        }
    }

    /// Search depth for `color`, if the computer plays it
    pub fn computer_depth(&self, color: Color) -> Option<u8> {
        match self.player(color) {
            PlayerConfig::Computer { difficulty } => Some(difficulty.max_depth()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_config() {
        let config = GameConfig::local();
        assert_eq!(config.mode, GameMode::Local);
        assert_eq!(config.white_player, PlayerConfig::Human);
        assert_eq!(config.black_player, PlayerConfig::Human);
        assert_eq!(config.human_color(), None);
    }

    #[test]
    fn test_computer_config_white() {
        let config = GameConfig::computer(Color::White, Difficulty::Hard);
        assert_eq!(config.mode, GameMode::Computer);
        assert_eq!(config.white_player, PlayerConfig::Human);
        assert_eq!(config.black_player, PlayerConfig::Computer { difficulty: Difficulty::Hard });
        assert_eq!(config.human_color(), Some(Color::White));
        assert_eq!(config.computer_depth(Color::Black), Some(5));
        assert_eq!(config.computer_depth(Color::White), None);
    }

    #[test]
    fn test_computer_config_black() {
        let config = GameConfig::computer(Color::Black, Difficulty::Easy);
        assert_eq!(config.white_player, PlayerConfig::Computer { difficulty: Difficulty::Easy });
        assert_eq!(config.human_color(), Some(Color::Black));
    }

    #[test]
    fn test_online_config() {
        let config = GameConfig::online(Color::Black);
        assert_eq!(config.mode, GameMode::Online);
        assert_eq!(config.player(Color::White), PlayerConfig::Remote);
        assert_eq!(config.human_color(), Some(Color::Black));
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 4);
        assert_eq!(Difficulty::Hard.max_depth(), 5);
    }
}
