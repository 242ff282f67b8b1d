use derive_ex::derive_ex;
use ordered_float::OrderedFloat;
use parse_display::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ERROR_TYPE, Error, Result};


pub const TYPE_FIELD: &str = "@type";
pub const EXTRA_FIELD: &str = "@extra";
pub const CLIENT_ID_FIELD: &str = "@client_id";

/// Value of the `@extra` field, echoed back by the engine in the response to a request.
#[derive(Debug, Serialize, Deserialize, Clone, Display)]
#[derive_ex(Eq, PartialEq, Hash)]
#[serde(untagged)]
pub enum Extra {
    #[display("{0}")]
    Number(i64),
    #[display("{0}")]
    Float(#[eq(key = OrderedFloat($))] f64),
    #[display("{0:?}")]
    String(String),
}
const MAX_SAFE_INTEGER: u64 = 9007199254740991;
impl From<u64> for Extra {
    fn from(id: u64) -> Self {
        match i64::try_from(id) {
            Ok(n) => Extra::Number(n),
            Err(_) => Extra::String(id.to_string()),
        }
    }
}
impl TryFrom<&Extra> for u64 {
    type Error = ();
    fn try_from(extra: &Extra) -> Result<u64, ()> {
        match extra {
            Extra::Number(n) => u64::try_from(*n).map_err(|_| ()),
            Extra::Float(f) => {
                if f.fract() == 0.0 && 0.0 <= *f && *f <= MAX_SAFE_INTEGER as f64 {
                    Ok(*f as u64)
                } else {
                    Err(())
                }
            }
            Extra::String(s) => s.parse().map_err(|_| ()),
        }
    }
}

/// A JSON object received from the engine, with its discriminator already extracted.
///
/// The received bytes are retained so the payload can be decoded a second time
/// into the concrete type the caller expects.
#[derive(Debug, Clone)]
pub struct Envelope {
    discriminator: String,
    extra: Option<Extra>,
    client_id: Option<i32>,
    fields: Map<String, Value>,
    raw: Vec<u8>,
}

impl Envelope {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }
    pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
        let fields = match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(value) => {
                return Err(Error::MalformedEnvelope(format!(
                    "expected an object, found {}",
                    value_kind(&value)
                )));
            }
            Err(e) => return Err(Error::MalformedEnvelope(e.to_string())),
        };
        Self::from_fields(fields, raw)
    }
    fn from_fields(fields: Map<String, Value>, raw: Vec<u8>) -> Result<Self> {
        let discriminator = discriminator(&fields)?.to_string();
        let extra = fields
            .get(EXTRA_FIELD)
            .and_then(|v| Extra::deserialize(v).ok());
        let client_id = fields
            .get(CLIENT_ID_FIELD)
            .and_then(Value::as_i64)
            .and_then(|id| i32::try_from(id).ok());
        Ok(Self {
            discriminator,
            extra,
            client_id,
            fields,
            raw,
        })
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }
    pub fn extra(&self) -> Option<&Extra> {
        self.extra.as_ref()
    }
    pub fn client_id(&self) -> Option<i32> {
        self.client_id
    }
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    pub fn is_error(&self) -> bool {
        self.discriminator == ERROR_TYPE
    }

    /// Fails with [`Error::Remote`] if this is the reserved error shape.
    pub fn check_error(&self) -> Result<()> {
        if !self.is_error() {
            return Ok(());
        }
        let code = self
            .fields
            .get("code")
            .and_then(Value::as_i64)
            .and_then(|code| i32::try_from(code).ok())
            .ok_or_else(|| {
                Error::MalformedEnvelope("error response without an integer `code`".to_string())
            })?;
        let message = self
            .fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Err(Error::Remote { code, message })
    }
}

pub(crate) fn discriminator(fields: &Map<String, Value>) -> Result<&str> {
    match fields.get(TYPE_FIELD) {
        Some(Value::String(s)) => Ok(s),
        Some(value) => Err(Error::MalformedEnvelope(format!(
            "`@type` must be a string, found {}",
            value_kind(value)
        ))),
        None => Err(Error::MalformedEnvelope("missing `@type`".to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
