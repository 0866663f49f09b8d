use chroma_shared::{ParameterId, StateSnapshot};

use crate::transport::SendError;

/// Notifications for the rendering layer, collected by
/// [`ControlSurface::receive`](crate::ControlSurface::receive)
#[derive(Clone, Debug)]
pub enum SurfaceEvent {
    /// The model changed, either by a local edit or an applied inbound snapshot
    StateUpdated(StateSnapshot),
    /// The engine started or stopped answering
    ConnectionChanged(bool),
    /// A frame could not be handed to the socket. `parameter` is `None` for
    /// requests that carry no parameter.
    SendFailed {
        parameter: Option<ParameterId>,
        error: SendError,
    },
}

impl SurfaceEvent {
    pub fn is_state_update(&self) -> bool {
        matches!(self, SurfaceEvent::StateUpdated(_))
    }
}
