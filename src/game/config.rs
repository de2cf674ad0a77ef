//! Game options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Piece;

use super::ConfigError;

/// How strictly castling is checked for king safety.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingPolicy {
    /// Standard chess: no castling out of check or across an attacked square.
    #[default]
    Standard,
    /// Only the king's landing square is checked.
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub castling: CastlingPolicy,
    /// Piece a pawn becomes when moved straight onto the last rank.
    pub default_promotion: Piece,
    /// Whether a pawn on its seventh rank may name its promotion piece by the
    /// rank of the requested destination.
    pub rank_band_promotion: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            castling: CastlingPolicy::Standard,
            default_promotion: Piece::Queen,
            rank_band_promotion: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_castling(mut self, policy: CastlingPolicy) -> Self {
        self.castling = policy;
        self
    }

    /// Non-promotion pieces (pawn, king) are ignored.
    #[must_use]
    pub const fn with_default_promotion(mut self, piece: Piece) -> Self {
        if piece.is_promotion_piece() {
            self.default_promotion = piece;
        }
        self
    }

    #[must_use]
    pub const fn with_rank_band_promotion(mut self, enabled: bool) -> Self {
        self.rank_band_promotion = enabled;
        self
    }

    /// Set an option by name, e.g. `("castling", Some("legacy"))`.
    ///
    /// Names are case-insensitive and ignore surrounding whitespace and
    /// spaces/underscores/dashes inside the name.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        let invalid = |v: &str| ConfigError::InvalidValue {
            name: name.to_string(),
            value: v.to_string(),
        };
        let value = value
            .map(str::trim)
            .ok_or_else(|| ConfigError::MissingValue {
                name: name.to_string(),
            });

        match normalized.as_str() {
            "castling" | "castlingpolicy" => {
                let v = value?;
                self.castling = match v.to_ascii_lowercase().as_str() {
                    "standard" => CastlingPolicy::Standard,
                    "legacy" => CastlingPolicy::Legacy,
                    _ => return Err(invalid(v)),
                };
            }
            "defaultpromotion" | "promotion" => {
                let v = value?;
                let mut chars = v.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_char(c),
                    _ => match v.to_ascii_lowercase().as_str() {
                        "queen" => Some(Piece::Queen),
                        "rook" => Some(Piece::Rook),
                        "bishop" => Some(Piece::Bishop),
                        "knight" => Some(Piece::Knight),
                        _ => None,
                    },
                };
                match piece {
                    Some(p) if p.is_promotion_piece() => self.default_promotion = p,
                    _ => return Err(invalid(v)),
                }
            }
            "rankbandpromotion" => {
                let v = value?;
                self.rank_band_promotion = match v.to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" | "yes" => true,
                    "false" | "off" | "0" | "no" => false,
                    _ => return Err(invalid(v)),
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.castling, CastlingPolicy::Standard);
        assert_eq!(config.default_promotion, Piece::Queen);
        assert!(config.rank_band_promotion);
    }

    #[test]
    fn test_apply_option() {
        let mut config = GameConfig::new();
        config.apply_option("Castling", Some("legacy")).unwrap();
        assert_eq!(config.castling, CastlingPolicy::Legacy);
        config.apply_option("default_promotion", Some("n")).unwrap();
        assert_eq!(config.default_promotion, Piece::Knight);
        config.apply_option("Default Promotion", Some("Rook")).unwrap();
        assert_eq!(config.default_promotion, Piece::Rook);
        config.apply_option("rank-band-promotion", Some("off")).unwrap();
        assert!(!config.rank_band_promotion);
    }

    #[test]
    fn test_apply_option_errors() {
        let mut config = GameConfig::new();
        assert!(matches!(
            config.apply_option("hash", Some("16")),
            Err(ConfigError::UnknownOption { .. })
        ));
        assert!(matches!(
            config.apply_option("castling", None),
            Err(ConfigError::MissingValue { .. })
        ));
        assert!(matches!(
            config.apply_option("promotion", Some("king")),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.apply_option("promotion", Some("k")),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_builder_ignores_non_promotion_piece() {
        let config = GameConfig::new().with_default_promotion(Piece::King);
        assert_eq!(config.default_promotion, Piece::Queen);
    }
}
