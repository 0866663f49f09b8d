use std::{
    net::{SocketAddr, UdpSocket as StdUdpSocket},
    thread::{self, JoinHandle},
};

use log::{debug, error, info, warn};
use tokio::{
    net::UdpSocket,
    sync::{
        mpsc::{self, error::TrySendError},
        oneshot,
    },
};

use chroma_shared::{frames_from_bytes, Frame, StateSnapshot};

use super::{Dispatcher, ListenerError, ShadowState};

// Largest payload a UDP datagram can carry
const MAX_DATAGRAM_SIZE: usize = 65_536;

/// Consumer end of the bounded snapshot channel
pub type SnapshotReceiver = mpsc::Receiver<StateSnapshot>;

/// What happened to the snapshot produced by one inbound frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Queued for the consumer
    Published,
    /// The channel was full; the new snapshot was discarded
    Dropped,
    /// The consumer is gone
    Closed,
    /// The frame decoded to nothing
    Ignored,
}

/// Listener-side pipeline: decode, merge into the shadow state, publish.
/// Runs synchronously so it can be driven without a socket.
pub struct SnapshotPublisher {
    dispatcher: Dispatcher,
    shadow: ShadowState,
    sender: mpsc::Sender<StateSnapshot>,
    dropped: u64,
}

impl SnapshotPublisher {
    pub fn channel(
        shadow: ShadowState,
        capacity: usize,
    ) -> Result<(Self, SnapshotReceiver), ListenerError> {
        if capacity == 0 {
            return Err(ListenerError::ZeroCapacity);
        }
        let (sender, receiver) = mpsc::channel(capacity);
        let publisher = Self {
            dispatcher: Dispatcher::new(),
            shadow,
            sender,
            dropped: 0,
        };
        Ok((publisher, receiver))
    }

    /// Handles every frame in one datagram. A datagram that is not valid OSC
    /// is logged and skipped.
    pub fn handle_datagram(&mut self, bytes: &[u8]) -> Vec<PublishOutcome> {
        match frames_from_bytes(bytes) {
            Ok(frames) => frames.iter().map(|frame| self.handle_frame(frame)).collect(),
            Err(err) => {
                debug!("Skipping inbound datagram: {}", err);
                Vec::new()
            }
        }
    }

    pub fn handle_frame(&mut self, frame: &Frame) -> PublishOutcome {
        let Some(fragment) = self.dispatcher.dispatch(frame) else {
            return PublishOutcome::Ignored;
        };
        let snapshot = self.shadow.merge(fragment);
        match self.sender.try_send(snapshot) {
            Ok(()) => PublishOutcome::Published,
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                debug!(
                    "Snapshot channel full, dropped newest snapshot ({} total)",
                    self.dropped
                );
                PublishOutcome::Dropped
            }
            Err(TrySendError::Closed(_)) => PublishOutcome::Closed,
        }
    }

    /// Snapshots discarded because the consumer fell behind
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn shadow(&self) -> &ShadowState {
        &self.shadow
    }
}

/// Receives engine broadcasts on a dedicated thread
pub struct StateListener;

impl StateListener {
    /// Binds `listen_addr` and starts the listener thread. Snapshots arrive on
    /// the returned receiver; the thread stops when the handle is dropped.
    pub fn spawn(
        listen_addr: SocketAddr,
        capacity: usize,
    ) -> Result<(ListenerHandle, SnapshotReceiver), ListenerError> {
        let (publisher, receiver) = SnapshotPublisher::channel(ShadowState::default(), capacity)?;

        let bind_error = |err: std::io::Error| ListenerError::Bind {
            address: listen_addr.to_string(),
            reason: err.to_string(),
        };
        let socket = StdUdpSocket::bind(listen_addr).map_err(bind_error)?;
        socket.set_nonblocking(true).map_err(bind_error)?;
        let local_addr = socket.local_addr().map_err(bind_error)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| ListenerError::Runtime {
                reason: err.to_string(),
            })?;

        let (shutdown_sender, shutdown_receiver) = oneshot::channel();
        let thread = thread::Builder::new()
            .name("chroma-listener".to_string())
            .spawn(move || {
                runtime.block_on(listen(socket, publisher, shutdown_receiver));
            })
            .map_err(|err| ListenerError::Spawn {
                reason: err.to_string(),
            })?;

        info!("State listener bound to {}", local_addr);

        let handle = ListenerHandle {
            local_addr,
            shutdown: Some(shutdown_sender),
            thread: Some(thread),
        };
        Ok((handle, receiver))
    }
}

async fn listen(
    socket: StdUdpSocket,
    mut publisher: SnapshotPublisher,
    mut shutdown: oneshot::Receiver<()>,
) {
    let socket = match UdpSocket::from_std(socket) {
        Ok(socket) => socket,
        Err(err) => {
            error!("State listener could not register its socket: {}", err);
            return;
        }
    };
    let mut buffer = vec![0u8; MAX_DATAGRAM_SIZE];

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            received = socket.recv_from(&mut buffer) => match received {
                Ok((length, source)) => {
                    let outcomes = publisher.handle_datagram(&buffer[..length]);
                    if outcomes.contains(&PublishOutcome::Closed) {
                        debug!("Snapshot consumer dropped, datagram from {} discarded", source);
                        break;
                    }
                }
                Err(err) => warn!("State listener receive failed: {}", err),
            },
        }
    }
    info!("State listener stopped");
}

/// Owner of the running listener thread
pub struct ListenerHandle {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ListenerHandle {
    /// The bound address, useful when listening on port 0
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signals the thread to stop and waits for it to exit
    pub fn shutdown(mut self) {
        self.signal();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("State listener thread panicked");
            }
        }
    }

    fn signal(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.signal();
    }
}
