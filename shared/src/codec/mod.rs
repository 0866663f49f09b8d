//! # OSC wire codec
//!
//! Converts typed parameter values to [`Frame`]s and back. Outbound encoding
//! is total for any value the registry accepts. Inbound decoding treats every
//! frame as untrusted: it never panics, discards frames whose argument count is
//! below the schema minimum, and routes each argument through [`coerce`].

use log::{debug, warn};
use rosc::OscType;

use crate::{
    constants::{
        EFFECTS_ORDER_ADDRESS, EFFECTS_ORDER_REQUEST_ADDRESS, SPECTRUM_ADDRESS, SPECTRUM_BANDS,
        STATE_ADDRESS, STATE_ARG_COUNT, SYNC_ADDRESS, WAVEFORM_ADDRESS, WAVEFORM_SAMPLES,
    },
    protocol::{error::ProtocolError, parameter::ParameterId},
    state::{
        param_value::{bounded_string, ParamValue},
        snapshot::StateSnapshot,
    },
};

pub mod coerce;
pub mod error;
pub mod fragment;
pub mod frame;
pub mod frame_kind;
pub mod schema;
pub mod wire;

use fragment::Fragment;
use frame::Frame;
use frame_kind::FrameKind;
use schema::STATE_SCHEMA;

// Encoding

/// Builds the set-frame for one parameter. The value must carry the payload
/// kind the registry assigns to `id`.
pub fn encode(id: ParameterId, value: &ParamValue) -> Result<Frame, ProtocolError> {
    let expected = id.payload();
    if value.kind() != expected {
        return Err(ProtocolError::PayloadMismatch {
            parameter: id,
            expected,
            found: value.kind(),
        });
    }
    Ok(Frame {
        addr: id.address().to_string(),
        args: value_args(value),
    })
}

/// Zero-argument frame asking the engine for a full-state broadcast
pub fn encode_sync_request() -> Frame {
    Frame {
        addr: SYNC_ADDRESS.to_string(),
        args: Vec::new(),
    }
}

/// Zero-argument frame asking the engine to report its effects order
pub fn encode_effects_order_request() -> Frame {
    Frame {
        addr: EFFECTS_ORDER_REQUEST_ADDRESS.to_string(),
        args: Vec::new(),
    }
}

/// Engine-side full-state broadcast, in [`STATE_SCHEMA`] order
pub fn encode_full_state(snapshot: &StateSnapshot) -> Frame {
    let args = STATE_SCHEMA
        .iter()
        .flat_map(|id| value_args(snapshot.get(*id)))
        .collect();
    Frame {
        addr: STATE_ADDRESS.to_string(),
        args,
    }
}

pub fn encode_spectrum(spectrum: &[f32; SPECTRUM_BANDS]) -> Frame {
    Frame {
        addr: SPECTRUM_ADDRESS.to_string(),
        args: spectrum.iter().map(|v| OscType::Float(*v)).collect(),
    }
}

pub fn encode_waveform(waveform: &[f32; WAVEFORM_SAMPLES]) -> Frame {
    Frame {
        addr: WAVEFORM_ADDRESS.to_string(),
        args: waveform.iter().map(|v| OscType::Float(*v)).collect(),
    }
}

fn value_args(value: &ParamValue) -> Vec<OscType> {
    match value {
        ParamValue::Float(v) => vec![OscType::Float(*v)],
        ParamValue::Int(v) => vec![OscType::Int(*v)],
        ParamValue::Bool(v) => vec![OscType::Int(i32::from(*v))],
        ParamValue::Text(v) => vec![OscType::String(bounded_string(v))],
        ParamValue::TextList(tokens) => tokens
            .iter()
            .map(|token| OscType::String(bounded_string(token)))
            .collect(),
    }
}

// Decoding

/// Decodes one inbound frame. Returns `None` for unknown addresses and for
/// frames that fail the schema checks; neither is an error worth surfacing.
pub fn decode(frame: &Frame) -> Option<Fragment> {
    match FrameKind::of(&frame.addr) {
        Some(kind) => decode_as(kind, &frame.args),
        None => {
            debug!("Ignoring frame for unrouted address '{}'", frame.addr);
            None
        }
    }
}

/// Decodes arguments whose address has already been routed
pub fn decode_as(kind: FrameKind, args: &[OscType]) -> Option<Fragment> {
    match kind {
        FrameKind::FullState => decode_full_state(args),
        FrameKind::Spectrum => decode_samples::<SPECTRUM_BANDS>(args, SPECTRUM_ADDRESS)
            .map(Fragment::Spectrum),
        FrameKind::Waveform => decode_samples::<WAVEFORM_SAMPLES>(args, WAVEFORM_ADDRESS)
            .map(Fragment::Waveform),
        FrameKind::EffectsOrder => decode_effects_order(args),
        FrameKind::Parameter(id) => decode_parameter(id, args),
    }
}

// Optional trailing slots are read only when present, so a 35-argument frame
// assigns 35 parameters and leaves the rest alone.
fn decode_full_state(args: &[OscType]) -> Option<Fragment> {
    if args.len() < STATE_ARG_COUNT {
        warn!(
            "Discarding {} frame with {} arguments, schema requires {}",
            STATE_ADDRESS,
            args.len(),
            STATE_ARG_COUNT
        );
        return None;
    }
    let assignments = STATE_SCHEMA
        .iter()
        .zip(args.iter())
        .map(|(id, arg)| (*id, coerce::to_param_value(*id, arg)))
        .collect();
    Some(Fragment::FullState(assignments))
}

fn decode_samples<const N: usize>(args: &[OscType], address: &str) -> Option<[f32; N]> {
    if args.len() < N {
        debug!(
            "Ignoring short {} frame: {} of {} samples",
            address,
            args.len(),
            N
        );
        return None;
    }
    Some(std::array::from_fn(|i| coerce::to_f32(&args[i], address)))
}

fn decode_effects_order(args: &[OscType]) -> Option<Fragment> {
    let order = coerce::to_text_list(args, EFFECTS_ORDER_ADDRESS);
    if order.is_empty() {
        debug!("Ignoring empty {} frame", EFFECTS_ORDER_ADDRESS);
        return None;
    }
    Some(Fragment::EffectsOrder(order))
}

fn decode_parameter(id: ParameterId, args: &[OscType]) -> Option<Fragment> {
    let Some(arg) = args.first() else {
        debug!("Ignoring {} frame without an argument", id.address());
        return None;
    };
    Some(Fragment::Parameter(id, coerce::to_param_value(id, arg)))
}
