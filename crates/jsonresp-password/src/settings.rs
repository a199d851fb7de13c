//! Validator settings.
//!
//! Settings pick the message locale and the policy a validator starts on.
//! They come from defaults, the environment, or a YAML document:
//!
//! ```yaml
//! locale: en_US
//! policy: custom
//! custom:
//!   min_length: 8
//!   max_length: 64
//!   require_uppercase: true
//!   require_digit: true
//!   require_symbol: false
//! ```

use crate::config::{PolicyConfig, PolicyName};
use crate::error::{PolicyError, PolicyResult};
use crate::locale::FRENCH_TAG;
use serde::Deserialize;

/// Environment variable holding the locale tag.
pub const LOCALE_ENV: &str = "JSONRESP_LOCALE";

/// Environment variable holding the starting preset.
pub const POLICY_ENV: &str = "JSONRESP_PASSWORD_POLICY";

fn default_locale() -> String {
    FRENCH_TAG.to_string()
}

/// Bounds and requirements for `policy: custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CustomPolicy {
    pub min_length: usize,
    pub max_length: usize,
    #[serde(default)]
    pub require_uppercase: bool,
    #[serde(default)]
    pub require_digit: bool,
    #[serde(default)]
    pub require_symbol: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorSettings {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub policy: PolicyName,

    #[serde(default)]
    pub custom: Option<CustomPolicy>,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            policy: PolicyName::default(),
            custom: None,
        }
    }
}

impl ValidatorSettings {
    /// Create settings from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `JSONRESP_LOCALE` | Locale tag (default `fr_FR`) |
    /// | `JSONRESP_PASSWORD_POLICY` | `light`, `medium` or `hard` (default `light`) |
    ///
    /// Unknown presets, and `custom` (which needs bounds the environment
    /// cannot carry), fall back to `light`.
    pub fn from_env() -> Self {
        let policy = match std::env::var(POLICY_ENV) {
            Ok(raw) => match raw.trim().parse::<PolicyName>() {
                Ok(PolicyName::Custom) => {
                    tracing::warn!(
                        var = POLICY_ENV,
                        "custom policy cannot be set from the environment, using light"
                    );
                    PolicyName::Light
                }
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(var = POLICY_ENV, error = %e, "using light policy");
                    PolicyName::Light
                }
            },
            Err(_) => PolicyName::default(),
        };

        Self {
            locale: std::env::var(LOCALE_ENV).unwrap_or_else(|_| default_locale()),
            policy,
            custom: None,
        }
    }

    /// Parse and check a YAML settings document.
    pub fn from_yaml_str(content: &str) -> PolicyResult<Self> {
        let settings: Self = serde_yaml::from_str(content)?;
        settings.policy_config()?;
        Ok(settings)
    }

    /// Set the locale tag.
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    /// Start on a preset.
    pub fn with_preset(mut self, name: PolicyName) -> Self {
        self.policy = name;
        self
    }

    /// Start on a custom policy.
    pub fn with_custom(mut self, custom: CustomPolicy) -> Self {
        self.policy = PolicyName::Custom;
        self.custom = Some(custom);
        self
    }

    /// Resolve the starting policy.
    pub fn policy_config(&self) -> PolicyResult<PolicyConfig> {
        if let Some(config) = PolicyConfig::preset(self.policy) {
            return Ok(config);
        }
        let custom = self.custom.ok_or_else(PolicyError::missing_custom_section)?;
        PolicyConfig::custom(
            custom.min_length,
            custom.max_length,
            custom.require_uppercase,
            custom.require_digit,
            custom.require_symbol,
        )
    }
}
