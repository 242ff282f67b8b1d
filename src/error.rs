use std::{error, fmt, sync::Arc};

/// Tag reserved for failure responses.
pub const ERROR_TYPE: &str = "error";

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("unknown variant `{discriminator}` for `{family}`")]
    UnknownVariant {
        family: &'static str,
        discriminator: String,
    },
    #[error("remote error {code}: {message}")]
    Remote { code: i32, message: String },
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),
    #[error("failed to decode `{discriminator}`: {source}")]
    Decode {
        discriminator: String,
        source: Arc<serde_json::Error>,
    },
    #[error("failed to encode: {0}")]
    Encode(Arc<serde_json::Error>),
}

impl Error {
    pub(crate) fn decode(discriminator: &str, source: serde_json::Error) -> Self {
        Error::Decode {
            discriminator: discriminator.to_string(),
            source: Arc::new(source),
        }
    }
    pub(crate) fn encode(source: serde_json::Error) -> Self {
        Error::Encode(Arc::new(source))
    }

    /// Code of a remote error, if this is one.
    pub fn remote_code(&self) -> Option<i32> {
        match self {
            Error::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }
    pub fn is_remote(&self, code: i32) -> bool {
        self.remote_code() == Some(code)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Opaque failure reported by a transport.
///
/// The underlying error is kept as-is so callers can downcast it.
#[derive(Clone)]
pub struct TransportError(Arc<dyn error::Error + Send + Sync>);

impl TransportError {
    pub fn new(e: impl error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(e))
    }
    pub fn msg(message: impl fmt::Display) -> Self {
        Self(Arc::new(Message(message.to_string())))
    }
    pub(crate) fn closed() -> Self {
        Self::msg("transport closed")
    }

    pub fn source_error(&self) -> &(dyn error::Error + Send + Sync + 'static) {
        &*self.0
    }
}
impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl error::Error for TransportError {}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e)
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl error::Error for Message {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("`{discriminator}` is registered twice in `{family}`")]
    Duplicate {
        family: &'static str,
        discriminator: &'static str,
    },
    #[error("`{family}` registers the reserved discriminator `error`")]
    Reserved { family: &'static str },
}
