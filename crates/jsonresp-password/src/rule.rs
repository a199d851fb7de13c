//! Policy compilation and candidate matching.
//!
//! A [`PolicyConfig`] compiles into a [`PasswordRule`], which is the
//! conjunction of:
//!
//! ```text
//!   length      min_length <= chars <= max_length
//!   uppercase   [A-Z] somewhere          (if required)
//!   digit       [0-9] somewhere          (if required)
//!   symbol      one of SYMBOLS somewhere (if required)
//!   alphabet    every char in [A-Za-z0-9] + SYMBOLS
//! ```
//!
//! Every constraint is computed on each check; none short-circuits the
//! others, so a [`RuleCheck`] always carries the full breakdown.
//!
//! # Symbol set
//!
//! `! @ # $ % ^ & * ( ) , . ? : { } | < > - _`, matched as an unordered set.
//! Hyphen and underscore are literal members, not the ends of a range.

use crate::config::PolicyConfig;
use lazy_static::lazy_static;
use regex::Regex;

/// Symbols accepted (and, when required, expected) in a password.
pub const SYMBOLS: &str = "!@#$%^&*(),.?:{}|<>-_";

lazy_static! {
    /// `SYMBOLS` escaped for use inside a character class.
    static ref SYMBOLS_ESCAPED: String = regex::escape(SYMBOLS);
    static ref ALPHABET: Regex =
        Regex::new(&format!("^[A-Za-z0-9{}]*$", *SYMBOLS_ESCAPED)).unwrap();
    static ref UPPERCASE: Regex = Regex::new("[A-Z]").unwrap();
    static ref DIGIT: Regex = Regex::new("[0-9]").unwrap();
    static ref SYMBOL: Regex = Regex::new(&format!("[{}]", *SYMBOLS_ESCAPED)).unwrap();
}

/// Per-constraint outcome of one check. Constraints the policy does not
/// require are reported as satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCheck {
    pub length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
    pub alphabet: bool,
}

impl RuleCheck {
    pub fn passed(&self) -> bool {
        self.length && self.uppercase && self.digit && self.symbol && self.alphabet
    }
}

/// Matcher compiled from a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRule {
    policy: PolicyConfig,
}

impl PasswordRule {
    pub fn compile(policy: &PolicyConfig) -> Self {
        Self { policy: *policy }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluate every constraint against `candidate`.
    pub fn check(&self, candidate: &str) -> RuleCheck {
        let len = candidate.chars().count();
        RuleCheck {
            length: (self.policy.min_length()..=self.policy.max_length()).contains(&len),
            uppercase: !self.policy.require_uppercase() || UPPERCASE.is_match(candidate),
            digit: !self.policy.require_digit() || DIGIT.is_match(candidate),
            symbol: !self.policy.require_symbol() || SYMBOL.is_match(candidate),
            alphabet: ALPHABET.is_match(candidate),
        }
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.check(candidate).passed()
    }

    /// Single-pattern description of the rule, lookaheads included.
    ///
    /// Diagnostic only: the `regex` crate has no lookaround, so this text is
    /// never compiled; matching goes through [`Self::check`].
    pub fn describe(&self) -> String {
        let mut pattern = String::from("^");
        if self.policy.require_uppercase() {
            pattern.push_str("(?=.*[A-Z])");
        }
        if self.policy.require_digit() {
            pattern.push_str(r"(?=.*\d)");
        }
        if self.policy.require_symbol() {
            pattern.push_str(&format!("(?=.*[{}])", *SYMBOLS_ESCAPED));
        }
        pattern.push_str(&format!(
            r"[A-Za-z\d{}]{{{},{}}}$",
            *SYMBOLS_ESCAPED,
            self.policy.min_length(),
            self.policy.max_length()
        ));
        pattern
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
