use thiserror::Error;

use chroma_shared::{ParameterId, ProtocolError};

use crate::transport::{ListenerError, SendError};

/// Errors returned by the [`ControlSurface`](crate::ControlSurface) mutation API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The operation does not apply to the parameter's control rule, e.g.
    /// `adjust` on a toggle. The model is left untouched.
    #[error("{operation} is not supported by {parameter:?}, which is a {rule} control")]
    UnsupportedOperation {
        parameter: ParameterId,
        operation: &'static str,
        rule: &'static str,
    },

    /// The effects order index is past the end of the chain
    #[error("Effects order index {index} is out of range for a chain of {len}")]
    OrderIndexOutOfRange { index: usize, len: usize },

    /// The model was updated, but the frame never left the client
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    /// A value did not match the registry
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors that can occur while bringing up a live control surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("Listener error: {0}")]
    Listener(#[from] ListenerError),

    #[error("Send error: {0}")]
    Send(#[from] SendError),
}
