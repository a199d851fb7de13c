//! Password policy descriptions and presets.
//!
//! | Preset   | min | max | uppercase | digit | symbol |
//! |----------|-----|-----|-----------|-------|--------|
//! | `light`  | 6   | 100 | -         | yes   | -      |
//! | `medium` | 10  | 100 | yes       | yes   | yes    |
//! | `hard`   | 20  | 100 | yes       | yes   | yes    |
//!
//! `custom` takes all five values from the caller.

use crate::error::{PolicyError, PolicyResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Upper length bound shared by the presets.
pub const PRESET_MAX_LENGTH: usize = 100;

/// Label of the configuration method that produced a [`PolicyConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyName {
    #[default]
    Light,
    Medium,
    Hard,
    Custom,
}

impl PolicyName {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyName::Light => "light",
            PolicyName::Medium => "medium",
            PolicyName::Hard => "hard",
            PolicyName::Custom => "custom",
        }
    }
}

impl std::fmt::Display for PolicyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyName {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(PolicyName::Light),
            "medium" => Ok(PolicyName::Medium),
            "hard" => Ok(PolicyName::Hard),
            "custom" => Ok(PolicyName::Custom),
            other => Err(PolicyError::UnknownPreset {
                name: other.to_string(),
            }),
        }
    }
}

/// Immutable password policy. Build one with a preset constructor or
/// [`PolicyConfig::custom`]; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyConfig {
    name: PolicyName,
    min_length: usize,
    max_length: usize,
    require_uppercase: bool,
    require_digit: bool,
    require_symbol: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::light()
    }
}

impl PolicyConfig {
    /// At least 6 characters, one digit.
    pub fn light() -> Self {
        Self {
            name: PolicyName::Light,
            min_length: 6,
            max_length: PRESET_MAX_LENGTH,
            require_uppercase: false,
            require_digit: true,
            require_symbol: false,
        }
    }

    /// At least 10 characters, one uppercase letter, one digit, one symbol.
    pub fn medium() -> Self {
        Self {
            name: PolicyName::Medium,
            min_length: 10,
            max_length: PRESET_MAX_LENGTH,
            require_uppercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }

    /// At least 20 characters, one uppercase letter, one digit, one symbol.
    pub fn hard() -> Self {
        Self {
            name: PolicyName::Hard,
            min_length: 20,
            max_length: PRESET_MAX_LENGTH,
            require_uppercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }

    /// Caller-defined policy. `min_length > max_length` would reject every
    /// candidate, so it is refused here.
    pub fn custom(
        min_length: usize,
        max_length: usize,
        require_uppercase: bool,
        require_digit: bool,
        require_symbol: bool,
    ) -> PolicyResult<Self> {
        if min_length > max_length {
            return Err(PolicyError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            name: PolicyName::Custom,
            min_length,
            max_length,
            require_uppercase,
            require_digit,
            require_symbol,
        })
    }

    /// Preset for a name. `custom` has no preset values.
    pub fn preset(name: PolicyName) -> Option<Self> {
        match name {
            PolicyName::Light => Some(Self::light()),
            PolicyName::Medium => Some(Self::medium()),
            PolicyName::Hard => Some(Self::hard()),
            PolicyName::Custom => None,
        }
    }

    pub fn name(&self) -> PolicyName {
        self.name
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_digit(&self) -> bool {
        self.require_digit
    }

    pub fn require_symbol(&self) -> bool {
        self.require_symbol
    }
}
