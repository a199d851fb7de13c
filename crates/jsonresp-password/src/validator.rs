//! Password validator bound to a response envelope.

use crate::config::{PolicyConfig, PolicyName};
use crate::error::PolicyResult;
use crate::locale::Locale;
use crate::messages::localized_messages;
use crate::rule::PasswordRule;
use crate::settings::ValidatorSettings;
use jsonresp_core::{DataMap, ResponseEnvelope};

/// Checks candidates against the active policy and writes rejection reasons
/// into the envelope it owns.
///
/// Starts on the `light` preset. The locale is fixed for the lifetime of the
/// validator.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    envelope: ResponseEnvelope,
    config: PolicyConfig,
    rule: PasswordRule,
    locale: Locale,
}

impl PasswordValidator {
    /// Validator with French messages.
    pub fn new(data: DataMap) -> Self {
        Self::with_locale(data, Locale::default())
    }

    pub fn with_locale(data: DataMap, locale: impl Into<Locale>) -> Self {
        let config = PolicyConfig::light();
        Self {
            envelope: ResponseEnvelope::new(data),
            rule: PasswordRule::compile(&config),
            config,
            locale: locale.into(),
        }
    }

    /// Validator using the locale and starting policy from `settings`.
    pub fn from_settings(data: DataMap, settings: &ValidatorSettings) -> PolicyResult<Self> {
        let config = settings.policy_config()?;
        let mut validator = Self::with_locale(data, settings.locale.as_str());
        validator.apply(config);
        Ok(validator)
    }

    pub fn set_light_config(&mut self) -> &mut Self {
        self.apply(PolicyConfig::light())
    }

    pub fn set_medium_config(&mut self) -> &mut Self {
        self.apply(PolicyConfig::medium())
    }

    pub fn set_hard_config(&mut self) -> &mut Self {
        self.apply(PolicyConfig::hard())
    }

    /// Switch to a caller-defined policy. On error the current policy stays
    /// active.
    pub fn set_custom_config(
        &mut self,
        min_length: usize,
        max_length: usize,
        require_uppercase: bool,
        require_digit: bool,
        require_symbol: bool,
    ) -> PolicyResult<&mut Self> {
        match PolicyConfig::custom(
            min_length,
            max_length,
            require_uppercase,
            require_digit,
            require_symbol,
        ) {
            Ok(config) => Ok(self.apply(config)),
            Err(e) => {
                tracing::warn!(
                    min_length,
                    max_length,
                    current = %self.config.name(),
                    "rejected custom password policy"
                );
                Err(e)
            }
        }
    }

    fn apply(&mut self, config: PolicyConfig) -> &mut Self {
        tracing::debug!(
            from = %self.config.name(),
            to = %config.name(),
            min_length = config.min_length(),
            max_length = config.max_length(),
            "password policy changed"
        );
        self.rule = PasswordRule::compile(&config);
        self.config = config;
        self
    }

    /// Check `candidate` against the active policy.
    ///
    /// On failure the envelope's error list is replaced with the localized
    /// reasons for the policy. On success the envelope is left untouched.
    pub fn is_valid_password(&mut self, candidate: &str) -> bool {
        let check = self.rule.check(candidate);
        if check.passed() {
            return true;
        }

        tracing::debug!(
            policy = %self.config.name(),
            length_ok = check.length,
            uppercase_ok = check.uppercase,
            digit_ok = check.digit,
            symbol_ok = check.symbol,
            alphabet_ok = check.alphabet,
            "password rejected"
        );
        self.envelope
            .set_errors(localized_messages(&self.config, &self.locale));
        false
    }

    pub fn current_config_name(&self) -> PolicyName {
        self.config.name()
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Pattern-style description of the active rule. For diagnostics only;
    /// the format is not stable.
    pub fn rule_description(&self) -> String {
        self.rule.describe()
    }

    pub fn envelope(&self) -> &ResponseEnvelope {
        &self.envelope
    }

    pub fn envelope_mut(&mut self) -> &mut ResponseEnvelope {
        &mut self.envelope
    }

    pub fn into_envelope(self) -> ResponseEnvelope {
        self.envelope
    }
}
