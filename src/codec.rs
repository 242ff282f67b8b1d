use std::cell::Cell;

use serde::{Deserialize, Deserializer, Serialize, de, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{Envelope, Error, Registry, Result, envelope};


/// A value that can travel over the wire as a tagged JSON object.
pub trait Object: Serialize + Sized {
    fn from_envelope(envelope: &Envelope) -> Result<Self>;

    fn decode(bytes: &[u8]) -> Result<Self> {
        Self::from_envelope(&Envelope::parse(bytes)?)
    }
    fn encode(&self) -> Result<Vec<u8>> {
        encode(self)
    }
}

/// A concrete shape with a fixed discriminator.
pub trait Variant: Object + DeserializeOwned {
    const TYPE: &'static str;
}

/// A closed set of variants, decoded by looking up the discriminator in a registry.
pub trait Family: Object + 'static {
    const NAME: &'static str;

    fn registry() -> &'static Registry<Self>;
    fn discriminator(&self) -> &'static str;
}

/// A remote operation: the request is `Self`, the response is `Return`.
pub trait Function: Serialize {
    const TYPE: &'static str;
    type Return: Object;
}

pub fn decode<T: Object>(bytes: &[u8]) -> Result<T> {
    T::decode(bytes)
}

/// Decodes `bytes`, treating an empty or `null` payload as no value.
pub fn decode_optional<T: Object>(bytes: &[u8]) -> Result<Option<T>> {
    if is_null(bytes) {
        Ok(None)
    } else {
        T::decode(bytes).map(Some)
    }
}
fn is_null(bytes: &[u8]) -> bool {
    let bytes = bytes.trim_ascii();
    bytes.is_empty() || bytes == b"null"
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(Error::encode)
}

pub fn decode_variant<V: Variant>(envelope: &Envelope) -> Result<V> {
    let discriminator = envelope.discriminator();
    if discriminator != V::TYPE {
        return Err(Error::UnknownVariant {
            family: V::TYPE,
            discriminator: discriminator.to_string(),
        });
    }
    run_decode(discriminator, || serde_json::from_slice(envelope.raw()))
}

pub fn decode_family<F: Family>(envelope: &Envelope) -> Result<F> {
    let discriminator = envelope.discriminator();
    let Some(entry) = F::registry().get(discriminator) else {
        return Err(Error::UnknownVariant {
            family: F::NAME,
            discriminator: discriminator.to_string(),
        });
    };
    run_decode(discriminator, || (entry.from_slice)(envelope.raw()))
}

thread_local! {
    static NESTED_ERROR: Cell<Option<Error>> = const { Cell::new(None) };
}

// serde only carries a message out of a nested failure; the typed error goes through
// NESTED_ERROR. Decoding never suspends, so the cell cannot be shared between two decodes.
fn run_decode<T>(discriminator: &str, f: impl FnOnce() -> serde_json::Result<T>) -> Result<T> {
    NESTED_ERROR.with(|n| n.take());
    let result = f();
    let nested = NESTED_ERROR.with(|n| n.take());
    result.map_err(|e| nested.unwrap_or_else(|| Error::decode(discriminator, e)))
}

fn nested_error<E: de::Error>(e: Error) -> E {
    let message = e.to_string();
    NESTED_ERROR.with(|n| {
        let first = n.take().unwrap_or(e);
        n.set(Some(first));
    });
    E::custom(message)
}

/// `Deserialize` for a family nested inside another object.
pub fn deserialize_family<'de, F, D>(d: D) -> Result<F, D::Error>
where
    F: Family,
    D: Deserializer<'de>,
{
    let fields = nested_fields(d, F::NAME)?;
    let discriminator = envelope::discriminator(&fields).map_err(nested_error::<D::Error>)?;
    let Some(entry) = F::registry().get(discriminator) else {
        return Err(nested_error(Error::UnknownVariant {
            family: F::NAME,
            discriminator: discriminator.to_string(),
        }));
    };
    (entry.from_value)(Value::Object(fields)).map_err(de::Error::custom)
}

/// `Deserialize` for a concrete object whose `@type` must be `tag`.
///
/// `from_fields` reads the declared fields once the tag has been checked.
pub fn deserialize_variant<'de, V, D>(
    d: D,
    tag: &'static str,
    from_fields: fn(Value) -> serde_json::Result<V>,
) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = nested_fields(d, tag)?;
    let discriminator = envelope::discriminator(&fields).map_err(nested_error::<D::Error>)?;
    if discriminator != tag {
        return Err(nested_error(Error::UnknownVariant {
            family: tag,
            discriminator: discriminator.to_string(),
        }));
    }
    from_fields(Value::Object(fields)).map_err(de::Error::custom)
}

fn nested_fields<'de, D>(d: D, name: &str) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(nested_error(Error::MalformedEnvelope(format!(
            "`{name}` must be an object"
        )))),
    }
}
