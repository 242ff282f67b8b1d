use std::{future::Future, pin::Pin, sync::Arc};

use super::TransportError;

/// A channel to the engine that answers one request with one response.
///
/// Correlating the response with its request, and any timeout, is up to the implementation.
pub trait Transport {
    fn send(
        &self,
        request: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;

    fn boxed(self) -> BoxTransport
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxTransport(Arc::new(self))
    }
}

#[derive(Clone)]
pub struct BoxTransport(Arc<dyn DynTransport + Send + Sync + 'static>);
impl Transport for BoxTransport {
    async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        self.0.dyn_send(request).await
    }
    fn boxed(self) -> BoxTransport
    where
        Self: Sized + Send + Sync + 'static,
    {
        self
    }
}

trait DynTransport {
    fn dyn_send(
        &self,
        request: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, TransportError>> + Send + '_>>;
}
impl<T: Transport> DynTransport for T {
    fn dyn_send(
        &self,
        request: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, TransportError>> + Send + '_>> {
        Box::pin(self.send(request))
    }
}
