use thiserror::Error;

use chroma_shared::CodecError;

/// Errors that can occur while handing a frame to the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The frame could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[from] CodecError),

    /// The destination can never receive a datagram
    #[error("Invalid destination '{destination}': {reason}")]
    InvalidDestination { destination: String, reason: String },

    /// The socket refused the datagram
    #[error("Failed to send datagram to {destination}: {reason}")]
    Io { destination: String, reason: String },

    /// The in-memory receiving side has been dropped
    #[error("Packet channel is closed. The receiving side has been dropped")]
    ChannelClosed,
}

/// Errors that can occur while starting the state listener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    /// The listen address could not be bound
    #[error("Failed to bind state listener to {address}: {reason}")]
    Bind { address: String, reason: String },

    /// The listener's async runtime could not be built
    #[error("Failed to create tokio runtime for the state listener: {reason}")]
    Runtime { reason: String },

    /// The listener thread could not be started
    #[error("Failed to spawn the state listener thread: {reason}")]
    Spawn { reason: String },

    /// Snapshot channels need room for at least one snapshot
    #[error("Snapshot channel capacity must be at least 1")]
    ZeroCapacity,
}
