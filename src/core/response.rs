//! Broker response decoding.
//!
//! The broker prints a JSON envelope:
//!
//! ```text
//! { "is_ok": bool,
//!   "error_msg": string,             (when is_ok = false)
//!   "Errors": object,                (optional, when is_ok = false)
//!   "Secret": { "Value": string } }  (when is_ok = true)
//! ```
//!
//! Decoding discriminates on `is_ok` first and only then requires the
//! fields that side of the envelope guarantees. Anything else is a
//! malformed response.

use serde_json::{Map, Value};
use zeroize::Zeroizing;

use crate::core::constants::UNKNOWN_ERROR;
use crate::core::types::SecretTarget;
use crate::error::{Error, Result};

/// A decoded broker envelope.
#[derive(Debug, PartialEq, Eq)]
pub enum Envelope {
    /// `is_ok: true` with the unveiled value.
    Unveiled(Zeroizing<String>),
    /// `is_ok: false` with the broker's explanation.
    Rejected {
        error_msg: String,
        /// Compact JSON rendering of a non-empty `Errors` field.
        errors: Option<String>,
    },
}

impl Envelope {
    /// Decode raw broker stdout.
    ///
    /// # Errors
    ///
    /// Returns `Error::ResponseParse` if the text is not JSON and
    /// `Error::MalformedResponse` if the envelope shape is wrong.
    pub fn decode(raw: &str, broker: &str, target: &SecretTarget) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|source| Error::ResponseParse {
            broker: broker.to_string(),
            target: target.clone(),
            source,
        })?;

        let malformed = |reason: &str| Error::MalformedResponse {
            target: target.clone(),
            reason: reason.to_string(),
        };

        let object = value
            .as_object()
            .ok_or_else(|| malformed("response is not a JSON object"))?;

        let is_ok = match object.get("is_ok") {
            None => return Err(malformed("missing 'is_ok'")),
            Some(Value::Bool(b)) => *b,
            Some(_) => return Err(malformed("'is_ok' is not a boolean")),
        };

        if !is_ok {
            return Ok(Self::rejection(object));
        }

        let secret = object
            .get("Secret")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed("missing 'Secret'"))?;

        match secret.get("Value") {
            Some(Value::String(s)) => Ok(Self::Unveiled(Zeroizing::new(s.clone()))),
            Some(_) => Err(malformed("'Secret.Value' is not a string")),
            None => Err(malformed("missing 'Secret.Value'")),
        }
    }

    /// Read `error_msg` and `Errors` from an `is_ok: false` envelope.
    fn rejection(object: &Map<String, Value>) -> Self {
        let error_msg = match object.get("error_msg") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => UNKNOWN_ERROR.to_string(),
            Some(other) => other.to_string(),
        };

        let errors = object
            .get("Errors")
            .filter(|v| !is_empty(v))
            .map(Value::to_string);

        Self::Rejected { error_msg, errors }
    }

    /// Turn the envelope into the secret value or a `BrokerRejected` error.
    pub fn into_value(self, target: &SecretTarget) -> Result<Zeroizing<String>> {
        match self {
            Self::Unveiled(value) => Ok(value),
            Self::Rejected { error_msg, errors } => Err(Error::BrokerRejected {
                target: target.clone(),
                error_msg,
                errors,
            }),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
