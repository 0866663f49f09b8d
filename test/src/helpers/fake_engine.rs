use rosc::{OscBundle, OscPacket, OscTime};

use chroma_client::transport::PacketChannelReceiver;
use chroma_shared::{
    decode, encode, encode_full_state, encode_spectrum, encode_waveform, Fragment, Frame,
    OscType, ParamValue, ParameterId, StateSnapshot, EFFECTS_ORDER_ADDRESS,
};

/// Stand-in for the effects engine. Collects what the surface sends, keeps
/// its own state, and builds the broadcasts a real engine would emit.
pub struct FakeEngine {
    inbox: PacketChannelReceiver,
    state: StateSnapshot,
    received: Vec<Frame>,
}

impl FakeEngine {
    pub fn new(inbox: PacketChannelReceiver) -> Self {
        Self {
            inbox,
            state: StateSnapshot::default(),
            received: Vec::new(),
        }
    }

    /// Frames sent since the last call
    pub fn take_received(&mut self) -> Vec<Frame> {
        self.pump();
        std::mem::take(&mut self.received)
    }

    /// Applies every set-frame the surface sent to the engine's own state
    pub fn process(&mut self) {
        self.pump();
        for frame in std::mem::take(&mut self.received) {
            if let Some(fragment) = decode(&frame) {
                self.state.merge_fragment(fragment);
            }
        }
    }

    pub fn state(&self) -> &StateSnapshot {
        &self.state
    }

    pub fn set(&mut self, id: ParameterId, value: ParamValue) {
        self.state.set(id, value).unwrap();
    }

    pub fn state_frame(&self) -> Frame {
        encode_full_state(&self.state)
    }

    pub fn parameter_frame(&self, id: ParameterId) -> Frame {
        encode(id, self.state.get(id)).unwrap()
    }

    pub fn effects_order_frame(&self) -> Frame {
        Frame {
            addr: EFFECTS_ORDER_ADDRESS.to_string(),
            args: self
                .state
                .effects_order()
                .iter()
                .map(|token| OscType::String(token.clone()))
                .collect(),
        }
    }

    pub fn spectrum_frame(&self) -> Frame {
        encode_spectrum(&self.state.telemetry().spectrum)
    }

    pub fn waveform_frame(&self) -> Frame {
        encode_waveform(&self.state.telemetry().waveform)
    }

    fn pump(&mut self) {
        self.received.extend(self.inbox.receive_frames());
    }
}

/// Wraps frames in one OSC bundle datagram
pub fn bundle_bytes(frames: Vec<Frame>) -> Vec<u8> {
    let packet = OscPacket::Bundle(OscBundle {
        timetag: OscTime::from((0, 1)),
        content: frames.into_iter().map(OscPacket::Message).collect(),
    });
    rosc::encoder::encode(&packet).unwrap()
}

/// Every fragment the given frames decode to
pub fn decode_all(frames: &[Frame]) -> Vec<Fragment> {
    frames.iter().filter_map(decode).collect()
}
