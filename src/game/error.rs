//! Error types for the game layer.
//!
//! Rule violations are not errors: they are [`super::Outcome`] values. These
//! types cover structural faults and bad configuration.

use std::fmt;

use crate::board::{BoardError, Color};

/// Internal failure while processing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A board mutation or undo failed
    Board(BoardError),
    /// A simulation left the undo stack deeper or shallower than it found it
    UnbalancedSimulation { expected: usize, found: usize },
    /// A starting position where the side not to move is already in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(err) => write!(f, "Board error: {err}"),
            GameError::UnbalancedSimulation { expected, found } => write!(
                f,
                "Undo stack depth {found} after simulation, expected {expected}"
            ),
            GameError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            GameError::UnbalancedSimulation { .. } | GameError::OpponentInCheck { .. } => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

/// Error type for configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option name not recognised
    UnknownOption { name: String },
    /// Option requires a value and none was given
    MissingValue { name: String },
    /// Value could not be interpreted for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_game_error_wraps_board_error() {
        let err: GameError = BoardError::EmptySquare { square: Square(0, 0) }.into();
        assert!(err.to_string().contains("a1"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_opponent_in_check_message() {
        let err = GameError::OpponentInCheck {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "Black is in check but it is not their move");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidValue {
            name: "castling".to_string(),
            value: "sideways".to_string(),
        };
        assert!(err.to_string().contains("sideways"));
        assert!(ConfigError::UnknownOption {
            name: "hash".to_string()
        }
        .to_string()
        .contains("hash"));
    }
}
