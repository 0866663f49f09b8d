use rosc::{OscBundle, OscPacket};

use super::{error::CodecError, frame::Frame};

/// Deepest bundle nesting accepted from the network
pub const MAX_BUNDLE_DEPTH: usize = 8;

/// Serializes one frame into a single OSC message datagram
pub fn frame_to_bytes(frame: &Frame) -> Result<Vec<u8>, CodecError> {
    rosc::encoder::encode(&OscPacket::Message(frame.clone())).map_err(|err| {
        CodecError::EncodeFailed {
            address: frame.addr.clone(),
            reason: format!("{:?}", err),
        }
    })
}

/// Parses a datagram into its frames. Bundles are flattened in order; the
/// bundle time tag is ignored.
pub fn frames_from_bytes(bytes: &[u8]) -> Result<Vec<Frame>, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::DecodeFailed {
            length: 0,
            reason: "empty datagram".to_string(),
        });
    }
    let (_, packet) =
        rosc::decoder::decode_udp(bytes).map_err(|err| CodecError::DecodeFailed {
            length: bytes.len(),
            reason: format!("{:?}", err),
        })?;

    let mut frames = Vec::new();
    flatten(packet, 0, &mut frames)?;
    Ok(frames)
}

fn flatten(packet: OscPacket, depth: usize, frames: &mut Vec<Frame>) -> Result<(), CodecError> {
    match packet {
        OscPacket::Message(message) => {
            frames.push(message);
            Ok(())
        }
        OscPacket::Bundle(OscBundle { content, .. }) => {
            if depth >= MAX_BUNDLE_DEPTH {
                return Err(CodecError::BundleTooDeep {
                    depth: depth + 1,
                    max: MAX_BUNDLE_DEPTH,
                });
            }
            for inner in content {
                flatten(inner, depth + 1, frames)?;
            }
            Ok(())
        }
    }
}
