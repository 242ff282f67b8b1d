use std::{
    collections::HashMap,
    process::Stdio,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};

use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::{
    io::BufReader,
    process::{Child, Command},
    spawn,
    sync::{mpsc, oneshot},
};
use tracing::{debug, trace, warn};

use super::{
    BoxPayloadReader, BoxPayloadWriter, EXTRA_FIELD, Envelope, Extra, JsonLines, Object,
    PayloadRead, PayloadWrite, Result, Transport, TransportError,
};


const DEFAULT_UPDATE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Default)]
pub struct MuxOptions {
    /// Number of updates buffered before the reader waits for [`Updates`] to catch up.
    ///
    /// Responses are read by the same task, so a full buffer delays them too.
    /// Defaults to 1024.
    pub update_capacity: Option<usize>,
}
impl MuxOptions {
    fn update_capacity(&self) -> usize {
        self.update_capacity
            .unwrap_or(DEFAULT_UPDATE_CAPACITY)
            .max(1)
    }
}

type Slot = oneshot::Sender<Result<Vec<u8>, TransportError>>;

struct MuxState {
    pending: HashMap<u64, Slot>,
    next_id: u64,
    closed: Option<TransportError>,
}
impl MuxState {
    fn new() -> Self {
        Self {
            pending: HashMap::new(),
            next_id: 0,
            closed: None,
        }
    }
    fn insert_pending(
        &mut self,
    ) -> Result<(u64, oneshot::Receiver<Result<Vec<u8>, TransportError>>), TransportError> {
        if let Some(e) = &self.closed {
            return Err(e.clone());
        }
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| TransportError::msg("request id overflow"))?;
        let (tx, rx) = oneshot::channel();
        self.pending.insert(id, tx);
        Ok((id, rx))
    }
    fn close(&mut self, e: TransportError) {
        for (_, slot) in self.pending.drain() {
            let _ = slot.send(Err(e.clone()));
        }
        self.closed.get_or_insert(e);
    }
}

struct RawMux {
    state: Mutex<MuxState>,
    writer: tokio::sync::Mutex<BoxPayloadWriter>,
    // Killed on drop, together with the last `Mux` handle.
    _engine: Mutex<Option<Child>>,
}
impl RawMux {
    fn lock(&self) -> MutexGuard<'_, MuxState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// [`Transport`] over a single duplex stream of JSON objects.
///
/// Each request is stamped with a fresh `@extra`, and the response carrying the same
/// `@extra` back completes it. Objects without a matching `@extra` are updates and go
/// to [`Updates`].
#[derive(Clone)]
pub struct Mux(Arc<RawMux>);

impl Mux {
    /// Must be called within a tokio runtime; spawns the task reading `reader`.
    pub fn new(
        reader: impl PayloadRead + Send + 'static,
        writer: impl PayloadWrite + Send + 'static,
        options: &MuxOptions,
    ) -> (Self, Updates) {
        Self::with_engine(reader, writer, options, None)
    }
    fn with_engine(
        reader: impl PayloadRead + Send + 'static,
        writer: impl PayloadWrite + Send + 'static,
        options: &MuxOptions,
        engine: Option<Child>,
    ) -> (Self, Updates) {
        let (tx, rx) = mpsc::channel(options.update_capacity());
        let raw = Arc::new(RawMux {
            state: Mutex::new(MuxState::new()),
            writer: tokio::sync::Mutex::new(writer.boxed()),
            _engine: Mutex::new(engine),
        });
        let dispatcher = Dispatcher {
            mux: Arc::downgrade(&raw),
            updates: Some(tx),
        };
        spawn(dispatcher.run(reader.boxed()));
        (Self(raw), Updates(rx))
    }

    /// In-process pair; the returned [`EngineEnd`] plays the engine.
    pub fn channel(options: &MuxOptions) -> (Self, Updates, EngineEnd) {
        let capacity = options.update_capacity();
        let (request_tx, request_rx) = mpsc::channel(capacity);
        let (response_tx, response_rx) = mpsc::channel(capacity);
        let (mux, updates) = Self::new(response_rx, request_tx, options);
        let engine = EngineEnd {
            requests: request_rx,
            responses: response_tx,
        };
        (mux, updates, engine)
    }

    pub fn from_stdio(options: &MuxOptions) -> (Self, Updates) {
        Self::new(
            JsonLines(BufReader::new(tokio::io::stdin())),
            JsonLines(tokio::io::stdout()),
            options,
        )
    }

    /// Starts an engine process that speaks line-delimited JSON on its stdio.
    ///
    /// The process is killed once every clone of the returned `Mux` is dropped.
    pub fn from_command(
        command: &mut Command,
        options: &MuxOptions,
    ) -> Result<(Self, Updates), TransportError> {
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| TransportError::msg("engine stdin is not piped"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| TransportError::msg("engine stdout is not piped"))?;
        debug!(pid = child.id(), "engine process started");
        Ok(Self::with_engine(
            JsonLines(BufReader::new(stdout)),
            JsonLines(stdin),
            options,
            Some(child),
        ))
    }

    /// Number of requests still waiting for their response.
    pub fn pending_count(&self) -> usize {
        self.0.lock().pending.len()
    }
}

impl Transport for Mux {
    async fn send(&self, request: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let mut request =
            serde_json::from_slice::<Map<String, Value>>(&request).map_err(TransportError::new)?;
        let pending = Pending::new(&self.0)?;
        if let Some(old) = request.insert(EXTRA_FIELD.to_string(), Value::from(pending.id)) {
            debug!(extra = %old, "replacing caller supplied `@extra`");
        }
        let payload = serde_json::to_vec(&request).map_err(TransportError::new)?;
        trace!(extra = pending.id, "writing request");
        self.0.writer.lock().await.write(payload).await?;
        pending.wait().await
    }
}

struct Pending<'a> {
    id: u64,
    rx: oneshot::Receiver<Result<Vec<u8>, TransportError>>,
    mux: &'a RawMux,
}
impl<'a> Pending<'a> {
    fn new(mux: &'a RawMux) -> Result<Self, TransportError> {
        let (id, rx) = mux.lock().insert_pending()?;
        Ok(Self { id, rx, mux })
    }
    async fn wait(mut self) -> Result<Vec<u8>, TransportError> {
        match (&mut self.rx).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::closed()),
        }
    }
}
impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.mux.lock().pending.remove(&self.id);
    }
}

struct Dispatcher {
    mux: Weak<RawMux>,
    updates: Option<mpsc::Sender<Vec<u8>>>,
}
impl Dispatcher {
    async fn run(mut self, mut reader: BoxPayloadReader) {
        let e = match self.run_raw(&mut reader).await {
            Ok(()) => {
                debug!("engine stream ended");
                TransportError::closed()
            }
            Err(e) => {
                warn!(error = %e, "engine stream failed");
                e
            }
        };
        if let Some(mux) = self.mux.upgrade() {
            mux.lock().close(e);
        }
    }
    async fn run_raw(&mut self, reader: &mut BoxPayloadReader) -> Result<(), TransportError> {
        while let Some(payload) = reader.read().await? {
            self.dispatch(payload).await;
            if self.updates.is_none() && self.mux.strong_count() == 0 {
                debug!("no receivers left, stopping");
                break;
            }
        }
        Ok(())
    }
    async fn dispatch(&mut self, payload: Vec<u8>) {
        let fields = match serde_json::from_slice::<Map<String, Value>>(&payload) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(error = %e, "skipping a payload that is not a JSON object");
                return;
            }
        };
        let id = fields
            .get(EXTRA_FIELD)
            .and_then(|v| Extra::deserialize(v).ok())
            .and_then(|extra| u64::try_from(&extra).ok());
        let Some(id) = id else {
            self.forward(payload).await;
            return;
        };
        let slot = match self.mux.upgrade() {
            Some(mux) => {
                let mut state = mux.lock();
                state.pending.remove(&id)
            }
            None => None,
        };
        match slot {
            Some(slot) => {
                trace!(extra = id, "response received");
                let _ = slot.send(Ok(payload));
            }
            None => debug!(extra = id, "discarding response with no pending request"),
        }
    }
    async fn forward(&mut self, payload: Vec<u8>) {
        let Some(updates) = &self.updates else {
            return;
        };
        if updates.send(payload).await.is_err() {
            debug!("updates receiver dropped");
            self.updates = None;
        }
    }
}

/// Objects the engine sent on its own, outside of any request.
pub struct Updates(mpsc::Receiver<Vec<u8>>);

impl Updates {
    /// Returns `None` once the engine stream has ended.
    pub async fn next_raw(&mut self) -> Option<Vec<u8>> {
        self.0.recv().await
    }
    pub async fn next(&mut self) -> Option<Result<Envelope>> {
        Some(Envelope::from_bytes(self.next_raw().await?))
    }
    pub async fn next_as<T: Object>(&mut self) -> Option<Result<T>> {
        let envelope = self.next().await?;
        Some(envelope.and_then(|e| T::from_envelope(&e)))
    }
}

/// Engine side of [`Mux::channel`].
pub struct EngineEnd {
    pub requests: mpsc::Receiver<Vec<u8>>,
    pub responses: mpsc::Sender<Vec<u8>>,
}
