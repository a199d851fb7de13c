//! Password strength policies with localized rejection reasons.
//!
//! A [`PasswordValidator`] owns a [`jsonresp_core::ResponseEnvelope`], an
//! active [`PolicyConfig`] and a [`Locale`]. When a candidate fails, the
//! envelope's error list is replaced with the reasons for the policy, in
//! French (`fr_FR`, the default) or English (any other tag).
//!
//! ```
//! use jsonresp_core::DataMap;
//! use jsonresp_password::{PasswordValidator, PolicyName};
//!
//! let mut validator = PasswordValidator::with_locale(DataMap::new(), "en_US");
//! assert_eq!(validator.current_config_name(), PolicyName::Light);
//! assert!(validator.is_valid_password("1digit"));
//!
//! validator.set_medium_config();
//! assert!(!validator.is_valid_password("1digitvalid"));
//! assert_eq!(
//!     validator.envelope().errors(),
//!     [
//!         "Invalid Password",
//!         "- at least 10 characters long",
//!         "uppercases required",
//!         "digits required",
//!         "symbols required",
//!     ]
//! );
//! ```
//!
//! # Policy choices
//!
//! - Symbols are `! @ # $ % ^ & * ( ) , . ? : { } | < > - _`; see [`rule`].
//! - The locale is fixed per validator; there is no per-call override.
//! - Custom policies with `min_length > max_length` are refused with
//!   [`PolicyError::InvertedBounds`] instead of silently rejecting everything.

pub mod config;
pub mod error;
pub mod locale;
pub mod messages;
pub mod rule;
pub mod settings;
pub mod validator;

pub use config::{PolicyConfig, PolicyName, PRESET_MAX_LENGTH};
pub use error::{PolicyError, PolicyResult};
pub use locale::{Language, Locale, FRENCH_TAG};
pub use messages::localized_messages;
pub use rule::{PasswordRule, RuleCheck, SYMBOLS};
pub use settings::{CustomPolicy, ValidatorSettings, LOCALE_ENV, POLICY_ENV};
pub use validator::PasswordValidator;
