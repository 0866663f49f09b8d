use std::net::SocketAddr;

use log::warn;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use chroma_shared::{frames_from_bytes, Frame};

use super::{PacketSender, SendError};

/// In-memory engine link. Everything sent on the boxed sender arrives at the
/// paired [`PacketChannelReceiver`] unchanged.
pub struct PacketChannel;

impl PacketChannel {
    pub fn unbounded(engine_addr: SocketAddr) -> (Box<dyn PacketSender>, PacketChannelReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let packet_sender = PacketChannelSender {
            sender,
            engine_addr,
        };
        (Box::new(packet_sender), PacketChannelReceiver { receiver })
    }
}

struct PacketChannelSender {
    sender: UnboundedSender<Box<[u8]>>,
    engine_addr: SocketAddr,
}

impl PacketSender for PacketChannelSender {
    fn send(&self, payload: &[u8]) -> Result<(), SendError> {
        self.sender
            .send(payload.into())
            .map_err(|_| SendError::ChannelClosed)
    }

    fn engine_addr(&self) -> SocketAddr {
        self.engine_addr
    }
}

pub struct PacketChannelReceiver {
    receiver: UnboundedReceiver<Box<[u8]>>,
}

impl PacketChannelReceiver {
    /// Next raw datagram, if one is waiting
    pub fn try_receive(&mut self) -> Option<Box<[u8]>> {
        match self.receiver.try_recv() {
            Ok(payload) => Some(payload),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drains every waiting datagram and decodes it. Undecodable datagrams are
    /// logged and skipped.
    pub fn receive_frames(&mut self) -> Vec<Frame> {
        let mut frames = Vec::new();
        while let Some(payload) = self.try_receive() {
            match frames_from_bytes(&payload) {
                Ok(decoded) => frames.extend(decoded),
                Err(err) => warn!("Skipping undecodable datagram: {}", err),
            }
        }
        frames
    }
}
