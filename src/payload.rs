use std::{future::Future, pin::Pin};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};

use super::TransportError;

/// Source of raw JSON payloads coming from the engine.
pub trait PayloadRead {
    /// Returns `None` once the stream has ended.
    fn read(&mut self)
    -> impl Future<Output = Result<Option<Vec<u8>>, TransportError>> + Send;

    fn boxed(self) -> BoxPayloadReader
    where
        Self: Sized + Send + 'static,
    {
        BoxPayloadReader(Box::new(self))
    }
}

/// Sink of raw JSON payloads going to the engine.
pub trait PayloadWrite {
    fn write(&mut self, payload: Vec<u8>)
    -> impl Future<Output = Result<(), TransportError>> + Send;

    fn boxed(self) -> BoxPayloadWriter
    where
        Self: Sized + Send + 'static,
    {
        BoxPayloadWriter(Box::new(self))
    }
}

pub struct BoxPayloadReader(Box<dyn DynPayloadRead + Send + 'static>);
impl PayloadRead for BoxPayloadReader {
    async fn read(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        self.0.dyn_read().await
    }
    fn boxed(self) -> BoxPayloadReader
    where
        Self: Sized + Send + 'static,
    {
        self
    }
}

trait DynPayloadRead {
    fn dyn_read(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, TransportError>> + Send + '_>>;
}
impl<T: PayloadRead> DynPayloadRead for T {
    fn dyn_read(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, TransportError>> + Send + '_>> {
        Box::pin(self.read())
    }
}

pub struct BoxPayloadWriter(Box<dyn DynPayloadWrite + Send + 'static>);
impl PayloadWrite for BoxPayloadWriter {
    async fn write(&mut self, payload: Vec<u8>) -> Result<(), TransportError> {
        self.0.dyn_write(payload).await
    }
    fn boxed(self) -> BoxPayloadWriter
    where
        Self: Sized + Send + 'static,
    {
        self
    }
}

trait DynPayloadWrite {
    fn dyn_write(
        &mut self,
        payload: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), TransportError>> + Send + '_>>;
}
impl<T: PayloadWrite> DynPayloadWrite for T {
    fn dyn_write(
        &mut self,
        payload: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<(), TransportError>> + Send + '_>> {
        Box::pin(self.write(payload))
    }
}

/// One JSON object per line over a byte stream.
pub struct JsonLines<T>(pub T);

impl<R> PayloadRead for JsonLines<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn read(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        loop {
            let mut line = Vec::new();
            if self.0.read_until(b'\n', &mut line).await? == 0 {
                return Ok(None);
            }
            let payload = line.trim_ascii();
            if !payload.is_empty() {
                return Ok(Some(payload.to_vec()));
            }
        }
    }
}
impl<W> PayloadWrite for JsonLines<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write(&mut self, mut payload: Vec<u8>) -> Result<(), TransportError> {
        payload.push(b'\n');
        self.0.write_all(&payload).await?;
        self.0.flush().await?;
        Ok(())
    }
}

impl PayloadRead for mpsc::Receiver<Vec<u8>> {
    async fn read(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        Ok(self.recv().await)
    }
}
impl PayloadWrite for mpsc::Sender<Vec<u8>> {
    async fn write(&mut self, payload: Vec<u8>) -> Result<(), TransportError> {
        self.send(payload)
            .await
            .map_err(|_| TransportError::closed())
    }
}
