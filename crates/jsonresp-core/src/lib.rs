//! Normalized response envelopes.
//!
//! A [`ResponseEnvelope`] collects request data, an ordered list of error
//! messages and an optional response payload, then exports them as
//! `{status, error_msg, data?, response?}`.
//!
//! ```
//! use jsonresp_core::{DataMap, ResponseEnvelope, Value};
//!
//! let mut data = DataMap::new();
//! data.insert("name".into(), Value::from("  John  "));
//! data.insert("active".into(), Value::from("true"));
//!
//! let mut envelope = ResponseEnvelope::new(data);
//! assert_eq!(envelope.data()["name"], Value::from("John"));
//! assert_eq!(envelope.data()["active"], Value::Bool(true));
//!
//! envelope.add_error("name already taken");
//! let json = envelope.to_json()?;
//! assert_eq!(
//!     json,
//!     r#"{"status":"error","error_msg":["name already taken"],"data":{"active":true,"name":"John"}}"#
//! );
//! # Ok::<(), jsonresp_core::EnvelopeError>(())
//! ```

pub mod envelope;
pub mod error;
pub mod normalize;
pub mod value;

pub use envelope::{Response, ResponseEnvelope, Status};
pub use error::{EnvelopeError, EnvelopeResult};
pub use normalize::{normalize_data, normalize_entry};
pub use value::{DataMap, Value};
