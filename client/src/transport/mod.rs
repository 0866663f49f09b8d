mod channel;
mod dispatcher;
mod error;
mod listener;
mod shadow_state;
mod udp;

pub use channel::{PacketChannel, PacketChannelReceiver};
pub use dispatcher::Dispatcher;
pub use error::{ListenerError, SendError};
pub use listener::{
    ListenerHandle, PublishOutcome, SnapshotPublisher, SnapshotReceiver, StateListener,
};
pub use shadow_state::ShadowState;
pub use udp::UdpPacketSender;

use std::net::SocketAddr;

use chroma_shared::{frame_to_bytes, Frame};

/// Outbound half of the engine link
pub trait PacketSender: Send + Sync {
    /// Sends one datagram to the engine. Delivery is not confirmed.
    fn send(&self, payload: &[u8]) -> Result<(), SendError>;
    /// Get the Engine's Socket address
    fn engine_addr(&self) -> SocketAddr;

    /// Serializes and sends one frame
    fn send_frame(&self, frame: &Frame) -> Result<(), SendError> {
        let payload = frame_to_bytes(frame)?;
        self.send(&payload)
    }
}
