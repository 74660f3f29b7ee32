use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::CardConfig;

/// Errors that can occur when loading a card definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read card file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse card file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Card validation failed: {message}")]
    ValidationError { message: String },
}

impl CardConfig {
    /// Returns the path to the default card file.
    ///
    /// Uses `~/.config/keepsake/card.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("keepsake").join("card.toml")
    }

    /// Loads the card from the default card file.
    ///
    /// - If the file doesn't exist, returns the built-in sample card.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(CardConfig::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates the card at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: CardConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the card.
    ///
    /// Every carousel needs at least one item and every timer a
    /// non-zero period; an empty letter is allowed (the reveal is
    /// simply already complete).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero.photos.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "hero needs at least one photo".to_string(),
            });
        }
        if self.message.wishes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "message needs at least one wish".to_string(),
            });
        }
        if self.message.photos.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "message needs at least one photo".to_string(),
            });
        }
        if self.gallery.photos.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "gallery needs at least one photo".to_string(),
            });
        }

        let timing = &self.timing;
        let periods = [
            ("timing.hero_period_ms", timing.hero_period_ms),
            ("timing.photo_period_ms", timing.photo_period_ms),
            ("timing.wish_period_ms", timing.wish_period_ms),
            ("timing.type_tick_ms", timing.type_tick_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be greater than zero"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_validates() {
        assert!(CardConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_gallery_fails_validation() {
        let mut config = CardConfig::default();
        config.gallery.photos.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn zero_period_fails_validation() {
        let mut config = CardConfig::default();
        config.timing.type_tick_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
