use thiserror::Error;

use super::parameter::{ParameterId, PayloadKind};

/// Errors that can occur during control registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// No registered parameter is bound to the address
    #[error("No parameter is registered at OSC address '{address}'")]
    UnknownAddress { address: String },

    /// A value of the wrong payload kind was supplied for a parameter
    #[error("{parameter:?} carries a {expected:?} payload, but a {found:?} value was supplied")]
    PayloadMismatch {
        parameter: ParameterId,
        expected: PayloadKind,
        found: PayloadKind,
    },
}
