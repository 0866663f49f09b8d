use thiserror::Error;

/// Errors that can occur while moving frames to and from raw datagrams
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The OSC encoder rejected the frame
    #[error("Failed to encode frame for '{address}': {reason}")]
    EncodeFailed { address: String, reason: String },

    /// The datagram is not valid OSC (SECURITY: untrusted network data)
    #[error("Failed to decode {length}-byte datagram ({reason}). This may indicate a malformed or malicious packet")]
    DecodeFailed { length: usize, reason: String },

    /// Bundle nesting exceeded the supported depth
    #[error("OSC bundle nesting depth {depth} exceeds the maximum of {max}")]
    BundleTooDeep { depth: usize, max: usize },
}
