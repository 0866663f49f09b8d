use std::collections::HashMap;

use log::debug;

use chroma_shared::{decode_as, Fragment, Frame, FrameKind};

/// Routing table from inbound address to decode routine
pub struct Dispatcher {
    routes: HashMap<&'static str, FrameKind>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            routes: FrameKind::routes().collect(),
        }
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, address: &str) -> Option<FrameKind> {
        self.routes.get(address).copied()
    }

    /// Decodes a frame through its route. Unrouted addresses and frames that
    /// fail decoding yield `None`.
    pub fn dispatch(&self, frame: &Frame) -> Option<Fragment> {
        let Some(kind) = self.route(&frame.addr) else {
            debug!("No route for inbound address '{}'", frame.addr);
            return None;
        };
        decode_as(kind, &frame.args)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
