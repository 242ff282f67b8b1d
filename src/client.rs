use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{
    BoxTransport, Envelope, Error, Family, Function, Object, Result, TYPE_FIELD, Transport,
    Variant, codec,
};

/// A request: the operation's `@type` and its named arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: String,
    args: Map<String, Value>,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Map::new(),
        }
    }
    pub fn from_function<F: Function>(function: &F) -> Result<Self> {
        let Value::Object(mut args) = serde_json::to_value(function).map_err(Error::encode)?
        else {
            return Err(Error::encode(serde::ser::Error::custom(format!(
                "`{}` must serialize to an object",
                F::TYPE
            ))));
        };
        args.remove(TYPE_FIELD);
        Ok(Self {
            method: F::TYPE.to_string(),
            args,
        })
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(Error::encode)?;
        self.args.insert(name.into(), value);
        Ok(self)
    }

    pub fn method(&self) -> &str {
        &self.method
    }
    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }
}
impl Serialize for Request {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(None)?;
        map.serialize_entry(TYPE_FIELD, &self.method)?;
        for (name, value) in &self.args {
            if name != TYPE_FIELD {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}

/// Issues requests over a [`Transport`] and decodes their responses.
///
/// Holds no state of its own; clones share the transport.
#[derive(Clone)]
pub struct Client {
    transport: BoxTransport,
}

impl Client {
    pub fn new(transport: impl Transport + Send + Sync + 'static) -> Self {
        Self {
            transport: transport.boxed(),
        }
    }

    /// Sends `request` and returns the response envelope as received.
    ///
    /// An `error` response is returned as an envelope, not as [`Error::Remote`].
    pub async fn call(&self, request: &Request) -> Result<Envelope> {
        let payload = codec::encode(request)?;
        debug!(method = request.method(), "sending request");
        let response = self.transport.send(payload).await?;
        let envelope = Envelope::from_bytes(response)?;
        trace!(
            method = request.method(),
            discriminator = envelope.discriminator(),
            "response received"
        );
        Ok(envelope)
    }

    /// Sends `request` and decodes the response as the concrete object `T`.
    pub async fn call_typed<T: Variant>(&self, request: &Request) -> Result<T> {
        let envelope = self.call_checked(request).await?;
        codec::decode_variant(&envelope)
    }

    /// Sends `request` and decodes the response as whichever variant of `F` it carries.
    pub async fn call_union<F: Family>(&self, request: &Request) -> Result<F> {
        let envelope = self.call_checked(request).await?;
        codec::decode_family(&envelope)
    }

    pub async fn send<R: Function>(&self, function: &R) -> Result<R::Return> {
        let request = Request::from_function(function)?;
        let envelope = self.call_checked(&request).await?;
        R::Return::from_envelope(&envelope)
    }

    async fn call_checked(&self, request: &Request) -> Result<Envelope> {
        let envelope = self.call(request).await?;
        if let Err(e) = envelope.check_error() {
            debug!(method = request.method(), error = %e, "request failed");
            return Err(e);
        }
        Ok(envelope)
    }
}
