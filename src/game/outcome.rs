use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Result of submitting a move.
///
/// Rejections leave the game exactly as it was. `Display` gives the message
/// shown to a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Checkmate or stalemate already happened
    GameOver,
    /// A square token could not be parsed
    MalformedInput { input: String },
    NoPiece,
    NotYourPiece,
    /// The piece cannot move there
    IllegalMove,
    /// The move would expose the mover's own king
    SelfCheck,
    /// `color` is in check and the move does not resolve it
    StillInCheck { color: Color },
    Moved,
    Checkmate { winner: Color },
    /// The move was played and `checked` is now in check
    Check { checked: Color },
    Castled { color: Color },
    Stalemate,
    /// Something went wrong inside the engine; the board was restored
    InternalError { message: String },
}

impl Outcome {
    /// Whether the move was played.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Moved
                | Outcome::Checkmate { .. }
                | Outcome::Check { .. }
                | Outcome::Castled { .. }
                | Outcome::Stalemate
        )
    }

    /// Whether the move ended the game.
    #[must_use]
    pub fn ends_game(&self) -> bool {
        matches!(self, Outcome::Checkmate { .. } | Outcome::Stalemate)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::GameOver => write!(f, "Game is over. Restart to play again."),
            Outcome::MalformedInput { input } => {
                write!(f, "Invalid move: '{input}' is not a square.")
            }
            Outcome::NoPiece => write!(f, "Invalid move: No piece at the source position."),
            Outcome::NotYourPiece => write!(
                f,
                "Invalid move: The selected piece does not belong to the current player."
            ),
            Outcome::IllegalMove => write!(
                f,
                "Invalid move: The selected move is not valid for the chosen piece."
            ),
            Outcome::SelfCheck => write!(f, "Invalid move: Your king would be in check."),
            Outcome::StillInCheck { color } => write!(f, "{color} in check, valid move not made."),
            Outcome::Moved => write!(f, "Move successful!"),
            Outcome::Checkmate { winner } => write!(
                f,
                "Checkmate! Winner: {}!",
                winner.to_string().to_uppercase()
            ),
            Outcome::Check { checked } => write!(f, "{checked} now in check."),
            Outcome::Castled { color } => write!(f, "{color} castle."),
            Outcome::Stalemate => write!(f, "Stalemate. Game has ended in a draw."),
            Outcome::InternalError { .. } => {
                write!(f, "An error has occurred. Please restart the game.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Moved.to_string(), "Move successful!");
        assert_eq!(
            Outcome::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "Checkmate! Winner: WHITE!"
        );
        assert_eq!(
            Outcome::Check {
                checked: Color::Black
            }
            .to_string(),
            "Black now in check."
        );
        assert_eq!(
            Outcome::StillInCheck {
                color: Color::White
            }
            .to_string(),
            "White in check, valid move not made."
        );
        assert_eq!(
            Outcome::Castled {
                color: Color::Black
            }
            .to_string(),
            "Black castle."
        );
    }

    #[test]
    fn test_success_classification() {
        assert!(Outcome::Moved.is_success());
        assert!(Outcome::Stalemate.is_success());
        assert!(Outcome::Stalemate.ends_game());
        assert!(!Outcome::Moved.ends_game());
        assert!(!Outcome::SelfCheck.is_success());
        assert!(!Outcome::GameOver.is_success());
        assert!(!Outcome::InternalError {
            message: "boom".to_string()
        }
        .is_success());
    }
}
